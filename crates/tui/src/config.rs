/// Text rendered around the popover.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title of the background document.
	pub title: String,
	/// Shown when a query hides every item and the menu has no message of
	/// its own.
	pub nothing_found: String,
	/// Prefix of the nested screen header.
	pub back_marker: String,
	/// Key hint drawn in the panel border.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Untitled".to_string(),
			nothing_found: "Nothing found".to_string(),
			back_marker: "‹".to_string(),
			hint: "enter select · esc back".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the document title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
