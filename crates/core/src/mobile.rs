//! Popover variant for constrained layouts.
//!
//! Nested items replace the popover content in place instead of opening a
//! side panel, so the controller keeps a [`NavigationHistory`] and a header
//! with a back control. Showing the popover also reveals a full-cover overlay
//! and locks background scrolling until it is hidden again.

use std::cell::RefCell;
use std::rc::Rc;

use crate::base::PopoverBase;
use crate::history::{NavigationHistory, Screen};
use crate::item::SharedItem;
use crate::listeners::{EventKind, Listeners};
use crate::scroll_lock::{ScrollLock, ScrollLocker};
use crate::search::SearchInput;
use crate::view::{ElementId, ItemView, Overlay, PopoverHeader};

/// Construction parameters shared by popover variants.
#[derive(Debug, Clone, Default)]
pub struct PopoverParams {
	/// Root items.
	pub items: Vec<SharedItem>,
	/// Render a search field above the items.
	pub searchable: bool,
	/// Placeholder shown in the empty search field.
	pub placeholder: Option<String>,
	/// Message shown when a non-empty query matches nothing.
	pub nothing_found_message: Option<String>,
}

impl PopoverParams {
	#[must_use]
	pub fn new(items: Vec<SharedItem>) -> Self {
		Self {
			items,
			..Self::default()
		}
	}

	#[must_use]
	pub fn searchable(mut self, placeholder: Option<String>) -> Self {
		self.searchable = true;
		self.placeholder = placeholder;
		self
	}
}

/// Input delivered by the host to the popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverEvent {
	Click(ElementId),
	/// New value of the text field identified by the element.
	Input(ElementId, String),
}

/// What handling a [`PopoverEvent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverResponse {
	/// No listener for the event's target.
	Ignored,
	/// Entered nested items or went back.
	Navigated,
	/// The search query changed.
	Searched,
	/// A leaf item was activated.
	Activated(SharedItem),
	/// The overlay was clicked and the popover hid itself.
	Hidden,
}

#[derive(Debug)]
struct SearchReport {
	query: String,
	found: Vec<SharedItem>,
}

/// Mobile popover controller decorating a [`PopoverBase`].
pub struct MobilePopover<B, L = ScrollLocker> {
	base: B,
	scroll_lock: L,
	listeners: Listeners,
	history: NavigationHistory<SharedItem>,
	overlay: Option<Overlay>,
	header: Option<PopoverHeader>,
	items: Vec<ItemView>,
	search: Option<SearchInput<SharedItem>>,
	search_report: Rc<RefCell<Option<SearchReport>>>,
	query: String,
	searchable: bool,
	placeholder: Option<String>,
	nothing_found_message: Option<String>,
	destroyed: bool,
}

impl<B: PopoverBase, L: ScrollLock> MobilePopover<B, L> {
	/// Build the popover around `base` and render the root items.
	pub fn new(base: B, params: PopoverParams, scroll_lock: L) -> Self {
		let PopoverParams {
			items,
			searchable,
			placeholder,
			nothing_found_message,
		} = params;

		let mut popover = Self {
			base,
			scroll_lock,
			listeners: Listeners::new(),
			history: NavigationHistory::new(Screen::root(items)),
			overlay: None,
			header: None,
			items: Vec::new(),
			search: None,
			search_report: Rc::default(),
			query: String::new(),
			searchable,
			placeholder,
			nothing_found_message,
			destroyed: false,
		};
		popover.make();
		popover.render_current();
		popover
	}

	fn make(&mut self) {
		self.base.make();

		let overlay = Overlay::new();
		self.listeners.on(overlay.element, EventKind::Click);
		match self.base.target_mut().root.as_mut() {
			Some(root) => root.insert_first(overlay.element),
			None => tracing::trace!("popover root missing, overlay not attached"),
		}
		self.overlay = Some(overlay);
	}

	/// Reveal the overlay and the popover, then lock background scrolling.
	pub fn show(&mut self) {
		if self.destroyed {
			return;
		}
		if let Some(overlay) = self.overlay.as_mut() {
			overlay.hidden = false;
		}
		self.base.show();
		self.scroll_lock.lock();
		if let Some(search) = self.search.as_mut() {
			search.focus();
		}
		tracing::debug!(depth = self.history.depth(), "popover shown");
	}

	/// Hide the popover and release the scroll lock. The navigation position
	/// survives until the next [`show`](Self::show).
	pub fn hide(&mut self) {
		self.base.hide();
		if let Some(overlay) = self.overlay.as_mut() {
			overlay.hidden = true;
		}
		if let Some(search) = self.search.as_mut() {
			search.clear();
			search.blur();
		}
		self.apply_search_report();
		self.scroll_lock.unlock();
		tracing::debug!(depth = self.history.depth(), "popover hidden");
	}

	/// Release listeners, rendered nodes and the scroll lock.
	pub fn destroy(&mut self) {
		self.teardown();
		if let Some(mut search) = self.search.take() {
			search.destroy();
		}
		self.listeners.remove_all();
		self.overlay = None;
		self.base.destroy();
		self.scroll_lock.unlock();
		if !self.destroyed {
			tracing::debug!("popover destroyed");
		}
		self.destroyed = true;
	}

	/// Route a host event to the element listening for it.
	pub fn handle_event(&mut self, event: PopoverEvent) -> PopoverResponse {
		match event {
			PopoverEvent::Click(target) => self.handle_click(target),
			PopoverEvent::Input(target, value) => self.handle_input(target, &value),
		}
	}

	fn handle_click(&mut self, target: ElementId) -> PopoverResponse {
		if !self.base.is_shown() || !self.listeners.is_bound(target, EventKind::Click) {
			return PopoverResponse::Ignored;
		}

		if self.overlay.is_some_and(|overlay| overlay.element == target) {
			self.hide();
			return PopoverResponse::Hidden;
		}

		if self
			.header
			.as_ref()
			.is_some_and(|header| header.back_button() == target)
		{
			self.on_back_activated();
			return PopoverResponse::Navigated;
		}

		match self
			.items
			.iter()
			.position(|view| view.element() == Some(target))
		{
			Some(index) => self.activate(index),
			None => PopoverResponse::Ignored,
		}
	}

	fn handle_input(&mut self, target: ElementId, value: &str) -> PopoverResponse {
		let Some(search) = self.search.as_mut() else {
			return PopoverResponse::Ignored;
		};
		if search.element().map(|field| field.element) != Some(target) {
			return PopoverResponse::Ignored;
		}

		search.dispatch_input(value);
		if self.apply_search_report() {
			PopoverResponse::Searched
		} else {
			PopoverResponse::Ignored
		}
	}

	fn activate(&mut self, index: usize) -> PopoverResponse {
		let Some(view) = self.items.get_mut(index) else {
			return PopoverResponse::Ignored;
		};
		if !view.is_interactive() {
			return PopoverResponse::Ignored;
		}

		let item = Rc::clone(view.item());
		if item.has_children() {
			self.on_item_activated(&item);
			return PopoverResponse::Navigated;
		}

		tracing::debug!(item = item.label(), "item activated");
		if item.close_on_activate {
			self.hide();
		} else {
			view.toggle_active();
		}
		PopoverResponse::Activated(item)
	}

	fn on_item_activated(&mut self, item: &SharedItem) {
		let children = item.nested_items().map(<[_]>::to_vec).unwrap_or_default();
		self.history
			.push(Screen::nested(item.title.clone(), children));
		tracing::debug!(
			title = item.title.as_deref(),
			depth = self.history.depth(),
			"opened nested items"
		);
		self.render_current();
	}

	fn on_back_activated(&mut self) {
		self.history.pop();
		tracing::debug!(depth = self.history.depth(), "navigated back");
		self.render_current();
	}

	fn render_current(&mut self) {
		let items = self.history.current_items().to_vec();
		let title = self.history.current_title().map(str::to_owned);
		self.render(&items, title);
	}

	/// Replace the rendered header and items.
	fn render(&mut self, items: &[SharedItem], title: Option<String>) {
		self.teardown();

		if let Some(title) = title {
			let header = PopoverHeader::new(title, &mut self.listeners);
			match self.base.target_mut().content.as_mut() {
				Some(content) => content.insert_first(header.element()),
				None => tracing::trace!("content container missing, header not attached"),
			}
			self.header = Some(header);
		}

		for item in items {
			let view = ItemView::new(Rc::clone(item));
			match view.element() {
				Some(element) => {
					self.listeners.on(element, EventKind::Click);
					match self.base.target_mut().items.as_mut() {
						Some(container) => container.append(element),
						None => tracing::trace!("items container missing, item not attached"),
					}
				}
				None => tracing::trace!(item = item.label(), "item view has no element, skipped"),
			}
			self.items.push(view);
		}

		self.rebuild_search(items);
	}

	fn teardown(&mut self) {
		let target = self.base.target_mut();

		if let Some(mut header) = self.header.take() {
			header.destroy(&mut self.listeners);
			if let Some(content) = target.content.as_mut() {
				content.remove(header.element());
			}
		}

		for view in self.items.drain(..) {
			let Some(element) = view.element() else {
				continue;
			};
			self.listeners.off_target(element);
			if let Some(container) = target.items.as_mut() {
				container.remove(element);
			}
		}
	}

	/// The search input filters a snapshot, so every screen gets its own.
	fn rebuild_search(&mut self, items: &[SharedItem]) {
		if let Some(mut previous) = self.search.take() {
			previous.destroy();
		}
		self.search_report.borrow_mut().take();
		self.query.clear();

		if !self.searchable {
			return;
		}

		let sink = Rc::clone(&self.search_report);
		let mut search = SearchInput::new(
			items.to_vec(),
			self.placeholder.clone(),
			move |query: &str, found: &[SharedItem]| {
				*sink.borrow_mut() = Some(SearchReport {
					query: query.to_owned(),
					found: found.to_vec(),
				});
			},
		);
		if self.base.is_shown() {
			search.focus();
		}
		self.search = Some(search);
	}

	/// Hide the item views the last search did not match. An empty query
	/// shows everything.
	fn apply_search_report(&mut self) -> bool {
		let Some(report) = self.search_report.borrow_mut().take() else {
			return false;
		};

		let show_all = report.query.is_empty();
		for view in &mut self.items {
			let matched = report
				.found
				.iter()
				.any(|found| Rc::ptr_eq(found, view.item()));
			view.set_hidden(!show_all && !matched);
		}
		self.query = report.query;
		true
	}

	#[must_use]
	pub fn is_shown(&self) -> bool {
		self.base.is_shown()
	}

	#[must_use]
	pub fn is_destroyed(&self) -> bool {
		self.destroyed
	}

	#[must_use]
	pub fn history(&self) -> &NavigationHistory<SharedItem> {
		&self.history
	}

	#[must_use]
	pub fn header(&self) -> Option<&PopoverHeader> {
		self.header.as_ref()
	}

	#[must_use]
	pub fn overlay(&self) -> Option<&Overlay> {
		self.overlay.as_ref()
	}

	/// Every item view of the current screen, attached or not.
	#[must_use]
	pub fn items(&self) -> &[ItemView] {
		&self.items
	}

	/// Item views attached to the items container and not filtered out, in
	/// display order.
	pub fn visible_items(&self) -> impl Iterator<Item = &ItemView> + '_ {
		let target = self.base.target();
		self.items.iter().filter(move |view| {
			!view.is_hidden() && view.element().is_some_and(|element| target.has_item(element))
		})
	}

	#[must_use]
	pub fn search(&self) -> Option<&SearchInput<SharedItem>> {
		self.search.as_ref()
	}

	/// Last query applied to the rendered items.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Whether a non-empty query currently hides every item.
	#[must_use]
	pub fn nothing_found(&self) -> bool {
		!self.query.is_empty() && self.visible_items().next().is_none()
	}

	#[must_use]
	pub fn nothing_found_message(&self) -> Option<&str> {
		self.nothing_found_message.as_deref()
	}

	#[must_use]
	pub fn base(&self) -> &B {
		&self.base
	}

	#[must_use]
	pub fn scroll_lock(&self) -> &L {
		&self.scroll_lock
	}
}
