use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use super::App;
use super::state::Hit;
use crate::components::{item_line, render_search};

const PANEL_MAX_WIDTH: u16 = 64;
const PANEL_MAX_ITEM_ROWS: u16 = 12;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.hits.clear();
		let area = frame.area();
		let theme = self.style.theme;
		let shown = self.popover.is_shown();

		self.document
			.render(frame, area, &self.ui.title, &theme, shown);
		if !shown {
			return;
		}

		if let Some(overlay) = self.popover.overlay().filter(|overlay| !overlay.hidden) {
			self.hits.push(Hit {
				area,
				target: Some(overlay.element),
			});
		}

		let panel = self.panel_area(area);
		if panel.width < 3 || panel.height < 3 {
			return;
		}
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(theme.border)
			.style(theme.item)
			.title_bottom(Line::from(Span::styled(self.ui.hint.as_str(), theme.secondary)).right_aligned());
		let mut rows = block.inner(panel);
		frame.render_widget(Clear, panel);
		frame.render_widget(block, panel);
		self.hits.push(Hit {
			area: panel,
			target: None,
		});

		if let Some(header) = self.popover.header() {
			let row = take_row(&mut rows);
			let line = Line::from(vec![
				Span::styled(self.ui.back_marker.as_str(), theme.back_style()),
				Span::styled(" ", theme.header),
				Span::styled(header.text(), theme.header),
			]);
			frame.buffer_mut().set_line(row.x, row.y, &line, row.width);
			self.hits.push(Hit {
				area: row,
				target: Some(header.back_button()),
			});
		}

		if let Some(field) = self.popover.search().and_then(|search| search.element()) {
			let row = take_row(&mut rows);
			render_search(frame, row, field, &theme);
		}

		if rows.height == 0 {
			return;
		}

		if self.popover.nothing_found() {
			let message = self
				.popover
				.nothing_found_message()
				.unwrap_or(self.ui.nothing_found.as_str());
			let row = take_row(&mut rows);
			frame.render_widget(
				Paragraph::new(message)
					.style(theme.empty)
					.alignment(Alignment::Center),
				row,
			);
			return;
		}

		let views: Vec<_> = self.popover.visible_items().collect();
		let selected_index = self
			.selected
			.and_then(|selected| views.iter().position(|view| view.element() == Some(selected)));
		let offset = window_offset(selected_index, rows.height as usize);

		for (view, y) in views.iter().skip(offset).zip(rows.top()..rows.bottom()) {
			let Some(element) = view.element() else {
				continue;
			};
			let selected = self.selected == Some(element);
			let line = item_line(view, rows.width, selected, &theme);
			frame.buffer_mut().set_line(rows.x, y, &line, rows.width);
			self.hits.push(Hit {
				area: Rect::new(rows.x, y, rows.width, 1),
				target: Some(element),
			});
		}
	}

	/// Bottom sheet sized for the current screen, capped at the frame.
	fn panel_area(&self, area: Rect) -> Rect {
		let header = u16::from(self.popover.header().is_some());
		let search = u16::from(self.popover.search().is_some());
		let items = u16::try_from(self.popover.items().len())
			.unwrap_or(u16::MAX)
			.clamp(1, PANEL_MAX_ITEM_ROWS);
		let height = (header + search + items + 2).min(area.height);
		let width = area.width.min(PANEL_MAX_WIDTH);
		Rect {
			x: area.x + (area.width - width) / 2,
			y: area.y + area.height - height,
			width,
			height,
		}
	}
}

/// Split the first row off `area`.
fn take_row(area: &mut Rect) -> Rect {
	let row = Rect { height: area.height.min(1), ..*area };
	area.y += row.height;
	area.height -= row.height;
	row
}

/// First visible row index keeping `selected` inside a window of `height`.
fn window_offset(selected: Option<usize>, height: usize) -> usize {
	match selected {
		Some(index) if height > 0 && index >= height => index + 1 - height,
		_ => 0,
	}
}
