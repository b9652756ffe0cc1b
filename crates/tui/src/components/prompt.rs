use popmenu_core::SearchField;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const SEARCH_GLYPH: &str = "/ ";

/// Draw the search field on a single row. The placeholder fills an empty
/// field and the cursor follows the value while the field is focused.
pub fn render_search(frame: &mut Frame, area: Rect, field: &SearchField, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let available = (area.width as usize).saturating_sub(SEARCH_GLYPH.width() + 1);
	let mut spans = vec![Span::styled(SEARCH_GLYPH, theme.prompt)];

	if field.value.is_empty() {
		if field.focused {
			spans.push(Span::styled(" ", theme.cursor_style()));
		}
		if let Some(placeholder) = field.placeholder.as_deref() {
			let (shown, _) = placeholder.unicode_truncate(available);
			spans.push(Span::styled(shown.to_owned(), theme.placeholder));
		}
	} else {
		// Keep the end of a long query in view.
		let (shown, _) = field.value.unicode_truncate_start(available);
		spans.push(Span::styled(shown.to_owned(), theme.prompt));
		if field.focused {
			spans.push(Span::styled(" ", theme.cursor_style()));
		}
	}

	frame
		.buffer_mut()
		.set_line(area.left(), area.top(), &Line::from(spans), area.width);
}
