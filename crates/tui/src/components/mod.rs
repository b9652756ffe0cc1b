//! Widgets the popover screen is assembled from.

/// Scrollable background behind the popover.
pub mod document;
/// Search field rendering.
pub mod prompt;
/// Item row construction.
pub mod rows;

use ratatui::layout::Rect;

pub use document::Document;
pub use prompt::render_search;
pub use rows::item_line;

/// Whether the cell at `column`/`row` lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
