use popmenu_core::ItemView;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const ACTIVE_MARK: &str = "✓ ";
const INACTIVE_MARK: &str = "  ";
const NESTED_MARK: &str = " ›";

/// Build the row for one item view, padded to `width` so the row style
/// covers the whole line.
///
/// Layout: `[mark][icon ][title]  [secondary][ ›]`. The title is truncated
/// first when space runs out.
#[must_use]
pub fn item_line(view: &ItemView, width: u16, selected: bool, theme: &Theme) -> Line<'static> {
	let item = view.item();
	let width = width as usize;

	let base = if item.disabled {
		theme.disabled
	} else if selected {
		theme.selected
	} else {
		theme.item
	};
	let secondary_style = if selected && !item.disabled {
		theme.selected
	} else {
		base.patch(theme.secondary)
	};

	let mark = if view.is_active() {
		ACTIVE_MARK
	} else {
		INACTIVE_MARK
	};
	let icon = item
		.icon
		.as_deref()
		.map(|icon| format!("{icon} "))
		.unwrap_or_default();
	let secondary = item
		.secondary_label
		.as_deref()
		.map(|label| format!(" {label}"))
		.unwrap_or_default();
	let nested = if item.has_children() { NESTED_MARK } else { "" };

	let fixed = mark.width() + icon.width() + secondary.width() + nested.width();
	let title_room = width.saturating_sub(fixed);
	let (title, title_width) = item
		.title
		.as_deref()
		.unwrap_or_default()
		.unicode_truncate(title_room);

	let used = fixed + title_width;
	let mut spans = vec![
		Span::styled(mark, base),
		Span::styled(icon, base),
		Span::styled(title.to_owned(), base),
	];
	if used < width {
		spans.push(Span::styled(" ".repeat(width - used), base));
	}
	spans.push(Span::styled(secondary, secondary_style));
	spans.push(Span::styled(nested, base));

	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use popmenu_core::ItemParams;

	use super::*;
	use crate::style::default_theme;

	fn text(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn pads_row_and_right_aligns_secondary_label() {
		let view = ItemView::new(
			ItemParams::new("Bold")
				.with_icon("B")
				.with_secondary_label("Ctrl+B")
				.shared(),
		);
		let line = item_line(&view, 20, false, &default_theme());
		let rendered = text(&line);
		assert_eq!(rendered.width(), 20);
		assert!(rendered.starts_with("  B Bold"));
		assert!(rendered.ends_with(" Ctrl+B"));
	}

	#[test]
	fn truncates_title_and_marks_nested_items() {
		let child = ItemParams::new("Heading").shared();
		let view = ItemView::new(ItemParams::nested("Convert to something long", vec![child]).shared());
		let line = item_line(&view, 12, false, &default_theme());
		let rendered = text(&line);
		assert_eq!(rendered.width(), 12);
		assert!(rendered.ends_with(" ›"));
		assert!(rendered.starts_with("  Convert"));
	}

	#[test]
	fn active_and_disabled_rows() {
		let theme = default_theme();
		let mut view = ItemView::new(ItemParams::new("Pin").close_on_activate(false).shared());
		view.toggle_active();
		assert!(text(&item_line(&view, 10, false, &theme)).starts_with("✓ Pin"));

		let disabled = ItemView::new(Rc::new(ItemParams::new("Move").disabled(true)));
		let line = item_line(&disabled, 10, true, &theme);
		assert_eq!(line.spans[2].style, theme.disabled);
	}
}
