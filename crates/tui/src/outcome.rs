use popmenu_core::SharedItem;

/// How a popover session ended.
#[derive(Debug, Clone, Default)]
pub struct MenuOutcome {
	/// Whether an item was chosen.
	pub accepted: bool,
	/// The activated item, when accepted.
	pub item: Option<SharedItem>,
	/// Titles of the nested screens the item was chosen from, outermost
	/// first.
	pub breadcrumbs: Vec<String>,
	/// Query in the search field at the time of activation.
	pub query: String,
}

impl MenuOutcome {
	#[must_use]
	pub fn accepted(item: SharedItem, breadcrumbs: Vec<String>, query: String) -> Self {
		Self {
			accepted: true,
			item: Some(item),
			breadcrumbs,
			query,
		}
	}

	#[must_use]
	pub fn cancelled() -> Self {
		Self::default()
	}
}
