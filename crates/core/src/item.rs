//! Popover item parameters and the [`Searchable`] seam used by the filter.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to an item. Identity is pointer identity, so two items with
/// the same title remain distinct.
pub type SharedItem = Rc<ItemParams>;

/// Description of a single popover entry as declared by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemParams {
	/// Stable identifier reported back when the item is activated.
	pub name: Option<String>,
	/// Display title, also the text matched by search.
	pub title: Option<String>,
	/// Short glyph drawn before the title.
	pub icon: Option<String>,
	/// Dimmed text drawn after the title, typically a shortcut hint.
	pub secondary_label: Option<String>,
	/// Disabled items are drawn but ignore activation.
	pub disabled: bool,
	/// Marks toggle-style items as currently on.
	pub active: bool,
	/// Hide the popover after a leaf activation.
	pub close_on_activate: bool,
	/// Nested items revealed on activation instead of performing an action.
	pub children: Option<Vec<SharedItem>>,
}

impl Default for ItemParams {
	fn default() -> Self {
		Self {
			name: None,
			title: None,
			icon: None,
			secondary_label: None,
			disabled: false,
			active: false,
			close_on_activate: true,
			children: None,
		}
	}
}

impl ItemParams {
	/// Leaf item with a title.
	#[must_use]
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			..Self::default()
		}
	}

	/// Item that opens `children` when activated.
	#[must_use]
	pub fn nested(title: impl Into<String>, children: Vec<SharedItem>) -> Self {
		Self {
			children: Some(children),
			..Self::new(title)
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	#[must_use]
	pub fn with_secondary_label(mut self, label: impl Into<String>) -> Self {
		self.secondary_label = Some(label.into());
		self
	}

	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	#[must_use]
	pub fn close_on_activate(mut self, close: bool) -> Self {
		self.close_on_activate = close;
		self
	}

	/// Wrap the parameters into a [`SharedItem`].
	#[must_use]
	pub fn shared(self) -> SharedItem {
		Rc::new(self)
	}

	/// Nested items, when the item declares a non-empty group.
	#[must_use]
	pub fn nested_items(&self) -> Option<&[SharedItem]> {
		self.children
			.as_deref()
			.filter(|children| !children.is_empty())
	}

	/// Whether activating the item navigates instead of acting.
	#[must_use]
	pub fn has_children(&self) -> bool {
		self.nested_items().is_some()
	}

	/// Label used in outcomes and logs: the name, falling back to the title.
	#[must_use]
	pub fn label(&self) -> &str {
		self.name
			.as_deref()
			.or(self.title.as_deref())
			.unwrap_or_default()
	}
}

/// Anything the search input can filter by title.
pub trait Searchable {
	/// Title to match against, `None` when the item has no text.
	fn title(&self) -> Option<&str>;
}

impl Searchable for ItemParams {
	fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}
}

impl<T: Searchable + ?Sized> Searchable for Rc<T> {
	fn title(&self) -> Option<&str> {
		(**self).title()
	}
}

impl Searchable for &str {
	fn title(&self) -> Option<&str> {
		Some(*self)
	}
}

impl Searchable for Option<&str> {
	fn title(&self) -> Option<&str> {
		*self
	}
}
