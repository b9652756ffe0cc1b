//! Filter-by-title search input.
//!
//! [`SearchInput`] owns a query field and a snapshot of the items it was
//! built with. Each input event re-evaluates the whole snapshot and reports
//! the matches to the host callback synchronously, in collection order.

use std::fmt;

use crate::item::Searchable;
use crate::listeners::{EventKind, Listeners};
use crate::view::ElementId;

/// Whether `item` matches `query`.
///
/// A match requires a title that contains the query, ignoring case. A missing
/// or empty query matches nothing.
#[must_use]
pub fn matches<T: Searchable + ?Sized>(item: &T, query: Option<&str>) -> bool {
	let Some(query) = query.filter(|query| !query.is_empty()) else {
		return false;
	};
	let Some(title) = item.title() else {
		return false;
	};
	title.to_lowercase().contains(&query.to_lowercase())
}

/// Items of `items` matching `query`, in their original order.
#[must_use]
pub fn filter<T: Searchable + Clone>(items: &[T], query: Option<&str>) -> Vec<T> {
	items
		.iter()
		.filter(|item| matches(*item, query))
		.cloned()
		.collect()
}

/// Callback receiving the query and the matched items.
pub type SearchCallback<T> = Box<dyn FnMut(&str, &[T])>;

/// Editable query field owned by a [`SearchInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
	pub element: ElementId,
	pub value: String,
	pub placeholder: Option<String>,
	pub focused: bool,
}

/// Search field plus the filtering logic over a fixed item snapshot.
pub struct SearchInput<T> {
	field: Option<SearchField>,
	listeners: Listeners,
	items: Vec<T>,
	query: Option<String>,
	on_search: SearchCallback<T>,
	destroyed: bool,
}

impl<T: Searchable + Clone> SearchInput<T> {
	/// Build the field over a snapshot of `items` and start listening for
	/// input.
	pub fn new<F>(items: Vec<T>, placeholder: Option<String>, on_search: F) -> Self
	where
		F: FnMut(&str, &[T]) + 'static,
	{
		let mut listeners = Listeners::new();
		let field = SearchField {
			element: ElementId::next(),
			value: String::new(),
			placeholder,
			focused: false,
		};
		listeners.on(field.element, EventKind::Input);

		Self {
			field: Some(field),
			listeners,
			items,
			query: None,
			on_search: Box::new(on_search),
			destroyed: false,
		}
	}

	/// The search field, if it has been created.
	#[must_use]
	pub fn element(&self) -> Option<&SearchField> {
		self.field.as_ref()
	}

	/// Current query; `None` until the first input or clear.
	#[must_use]
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Snapshot this input filters.
	#[must_use]
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Move focus to the field.
	pub fn focus(&mut self) {
		if let Some(field) = self.field.as_mut() {
			field.focused = true;
		}
	}

	/// Remove focus from the field.
	pub fn blur(&mut self) {
		if let Some(field) = self.field.as_mut() {
			field.focused = false;
		}
	}

	/// Reset the field and the query, then report the empty result.
	pub fn clear(&mut self) {
		if let Some(field) = self.field.as_mut() {
			field.value.clear();
		}
		self.query = Some(String::new());

		if self.destroyed {
			return;
		}
		let found = self.found_items();
		(self.on_search)("", &found);
	}

	/// Input event from the field carrying its new value.
	///
	/// Ignored once the input listener has been released.
	pub fn dispatch_input(&mut self, value: &str) {
		let Some(field) = self.field.as_mut() else {
			return;
		};
		if !self.listeners.is_bound(field.element, EventKind::Input) {
			tracing::trace!("search input event without listener ignored");
			return;
		}

		field.value = value.to_owned();
		self.query = Some(value.to_owned());

		let found = self.found_items();
		tracing::trace!(query = value, matched = found.len(), "search updated");
		(self.on_search)(value, &found);
	}

	/// Release the input listener. No callback fires afterwards.
	pub fn destroy(&mut self) {
		self.listeners.remove_all();
		self.destroyed = true;
	}

	/// Items matching the current query.
	#[must_use]
	pub fn found_items(&self) -> Vec<T> {
		filter(&self.items, self.query.as_deref())
	}
}

impl<T> fmt::Debug for SearchInput<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchInput")
			.field("field", &self.field)
			.field("query", &self.query)
			.field("items", &self.items.len())
			.field("destroyed", &self.destroyed)
			.finish_non_exhaustive()
	}
}
