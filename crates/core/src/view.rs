//! Retained view model shared between the controller and a renderer.
//!
//! Elements are plain ids arranged in [`Container`]s. A renderer walks the
//! [`RenderTarget`] each frame and maps ids back to the header, item views
//! and overlay owned by the popover.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::SharedItem;
use crate::listeners::{EventKind, ListenerId, Listeners};

static NEXT_ELEMENT: AtomicU64 = AtomicU64::new(1);

/// Identity of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
	/// Allocate a fresh, never reused id.
	#[must_use]
	pub fn next() -> Self {
		Self(NEXT_ELEMENT.fetch_add(1, Ordering::Relaxed))
	}
}

/// Ordered list of child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
	children: Vec<ElementId>,
}

impl Container {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert_first(&mut self, element: ElementId) {
		self.children.insert(0, element);
	}

	pub fn append(&mut self, element: ElementId) {
		self.children.push(element);
	}

	/// Detach `element`. Returns `false` if it was not a child.
	pub fn remove(&mut self, element: ElementId) -> bool {
		let before = self.children.len();
		self.children.retain(|child| *child != element);
		self.children.len() != before
	}

	#[must_use]
	pub fn contains(&self, element: ElementId) -> bool {
		self.children.contains(&element)
	}

	#[must_use]
	pub fn first(&self) -> Option<ElementId> {
		self.children.first().copied()
	}

	#[must_use]
	pub fn children(&self) -> &[ElementId] {
		&self.children
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.children.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}
}

/// Insertion points created by the base popover's `make`.
///
/// Each container is optional; operations against a missing one are no-ops.
#[derive(Debug, Clone, Default)]
pub struct RenderTarget {
	/// Outermost popover node. The overlay is its first child.
	pub root: Option<Container>,
	/// Popover body. The header is inserted as its first child.
	pub content: Option<Container>,
	/// List holding one element per rendered item.
	pub items: Option<Container>,
}

impl RenderTarget {
	/// Target with every container present.
	#[must_use]
	pub fn complete() -> Self {
		Self {
			root: Some(Container::new()),
			content: Some(Container::new()),
			items: Some(Container::new()),
		}
	}

	/// Whether `element` is currently attached to the items list.
	#[must_use]
	pub fn has_item(&self, element: ElementId) -> bool {
		self.items
			.as_ref()
			.is_some_and(|items| items.contains(element))
	}
}

/// Full-cover click target behind the popover panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
	pub element: ElementId,
	pub hidden: bool,
}

impl Overlay {
	/// Overlays start hidden until the popover is shown.
	#[must_use]
	pub fn new() -> Self {
		Self {
			element: ElementId::next(),
			hidden: true,
		}
	}
}

impl Default for Overlay {
	fn default() -> Self {
		Self::new()
	}
}

/// Rendered counterpart of one item.
#[derive(Debug, Clone)]
pub struct ItemView {
	item: SharedItem,
	element: Option<ElementId>,
	hidden: bool,
	active: bool,
}

impl ItemView {
	/// Build the view. Items with neither title nor icon have nothing to
	/// draw and produce no element.
	#[must_use]
	pub fn new(item: SharedItem) -> Self {
		let element = (item.title.is_some() || item.icon.is_some()).then(ElementId::next);
		let active = item.active;
		Self {
			item,
			element,
			hidden: false,
			active,
		}
	}

	#[must_use]
	pub fn element(&self) -> Option<ElementId> {
		self.element
	}

	#[must_use]
	pub fn item(&self) -> &SharedItem {
		&self.item
	}

	/// Hidden by the search filter.
	#[must_use]
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	pub fn set_hidden(&mut self, hidden: bool) {
		self.hidden = hidden;
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn toggle_active(&mut self) {
		self.active = !self.active;
	}

	/// Whether the view can currently be activated.
	#[must_use]
	pub fn is_interactive(&self) -> bool {
		!self.hidden && !self.item.disabled
	}
}

/// Header shown above nested screens with a back control.
#[derive(Debug)]
pub struct PopoverHeader {
	element: ElementId,
	back_button: ElementId,
	text: String,
	listener: Option<ListenerId>,
}

impl PopoverHeader {
	/// Create the header and bind its back control in `listeners`.
	pub fn new(text: impl Into<String>, listeners: &mut Listeners) -> Self {
		let back_button = ElementId::next();
		let listener = listeners.on(back_button, EventKind::Click);
		Self {
			element: ElementId::next(),
			back_button,
			text: text.into(),
			listener: Some(listener),
		}
	}

	#[must_use]
	pub fn element(&self) -> ElementId {
		self.element
	}

	#[must_use]
	pub fn back_button(&self) -> ElementId {
		self.back_button
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Unbind the back control.
	pub fn destroy(&mut self, listeners: &mut Listeners) {
		if let Some(listener) = self.listener.take() {
			listeners.off(listener);
		}
	}
}
