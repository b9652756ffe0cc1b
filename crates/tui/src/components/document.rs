use popmenu_core::ScrollLockHandle;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Background text the popover opens over.
///
/// Scrolling is refused while any popover holds the shared scroll lock.
#[derive(Debug, Clone)]
pub struct Document {
	lines: Vec<String>,
	scroll: usize,
	lock: ScrollLockHandle,
}

impl Document {
	#[must_use]
	pub fn new(lines: Vec<String>, lock: ScrollLockHandle) -> Self {
		Self {
			lines,
			scroll: 0,
			lock,
		}
	}

	/// Move the viewport by `delta` lines. Returns whether the offset changed.
	pub fn scroll_by(&mut self, delta: isize) -> bool {
		if self.lock.is_engaged() {
			tracing::trace!(delta, "document scroll suppressed by lock");
			return false;
		}
		let max = self.lines.len().saturating_sub(1);
		let next = self.scroll.saturating_add_signed(delta).min(max);
		let changed = next != self.scroll;
		self.scroll = next;
		changed
	}

	#[must_use]
	pub fn scroll(&self) -> usize {
		self.scroll
	}

	/// Draw the title row and the visible lines. `dimmed` applies the overlay
	/// style on top.
	pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, theme: &Theme, dimmed: bool) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let mut lines = Vec::with_capacity(area.height as usize);
		lines.push(Line::from(Span::styled(title.to_owned(), theme.header)));
		lines.extend(
			self.lines
				.iter()
				.skip(self.scroll)
				.take(area.height.saturating_sub(1) as usize)
				.map(|line| Line::from(Span::styled(line.clone(), theme.document))),
		);
		frame.render_widget(Paragraph::new(lines).style(theme.document), area);

		if dimmed {
			frame.buffer_mut().set_style(area, theme.overlay);
		}
	}
}
