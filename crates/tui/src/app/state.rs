use popmenu_core::{
	BasicPopover, ElementId, MobilePopover, PopoverEvent, PopoverParams, PopoverResponse,
	ScrollLockHandle, ScrollLocker,
};
use ratatui::layout::Rect;

use crate::MenuOutcome;
use crate::components::{Document, point_in_rect};
use crate::config::UiLabels;
use crate::style::{StyleConfig, Theme};

/// Screen region recorded during the last draw. `target` is `None` for
/// regions that swallow clicks without dispatching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hit {
	pub(crate) area: Rect,
	pub(crate) target: Option<ElementId>,
}

/// Left button press waiting for its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Press {
	pub(crate) target: Option<ElementId>,
	pub(crate) dragged: bool,
}

/// Terminal application state.
pub struct App {
	pub(crate) popover: MobilePopover<BasicPopover, ScrollLocker>,
	pub(crate) document: Document,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) selected: Option<ElementId>,
	pub(crate) hits: Vec<Hit>,
	pub(crate) press: Option<Press>,
}

impl Drop for App {
	fn drop(&mut self) {
		self.popover.destroy();
	}
}

impl App {
	/// Build the popover from `params` over an empty document. The popover
	/// starts hidden.
	pub fn new(params: PopoverParams) -> Self {
		let lock = ScrollLockHandle::new();
		let popover = MobilePopover::new(BasicPopover::new(), params, lock.locker());
		Self {
			popover,
			document: Document::new(Vec::new(), lock),
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			selected: None,
			hits: Vec::new(),
			press: None,
		}
	}

	/// Replace the background document text.
	#[must_use]
	pub fn with_document(mut self, lines: Vec<String>) -> Self {
		let lock = self.popover.scroll_lock().handle().clone();
		self.document = Document::new(lines, lock);
		self
	}

	#[must_use]
	pub fn with_labels(mut self, ui: UiLabels) -> Self {
		self.ui = ui;
		self
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	/// Show the popover and select its first enabled item.
	pub fn open(&mut self) {
		self.popover.show();
		self.ensure_selection();
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.popover.is_shown()
	}

	#[must_use]
	pub fn popover(&self) -> &MobilePopover<BasicPopover, ScrollLocker> {
		&self.popover
	}

	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Element of the selected item row.
	#[must_use]
	pub fn selected(&self) -> Option<ElementId> {
		self.selected
	}

	/// Deliver `event` to the popover and keep the selection valid. Returns
	/// an outcome once an activation closed the popover.
	pub(crate) fn dispatch(&mut self, event: PopoverEvent) -> Option<MenuOutcome> {
		let breadcrumbs = self
			.popover
			.history()
			.breadcrumbs()
			.map(str::to_owned)
			.collect();
		let query = self.popover.query().to_owned();

		let response = self.popover.handle_event(event);
		tracing::trace!(?response, "popover event handled");
		match response {
			PopoverResponse::Activated(item) if !self.popover.is_shown() => {
				return Some(MenuOutcome::accepted(item, breadcrumbs, query));
			}
			PopoverResponse::Activated(_) | PopoverResponse::Ignored => {}
			PopoverResponse::Navigated | PopoverResponse::Searched => {
				self.selected = None;
				self.ensure_selection();
			}
			PopoverResponse::Hidden => self.selected = None,
		}
		None
	}

	/// Elements of the visible rows that can be activated, in display order.
	pub(crate) fn selectable(&self) -> Vec<ElementId> {
		self.popover
			.visible_items()
			.filter(|view| view.is_interactive())
			.filter_map(|view| view.element())
			.collect()
	}

	/// Keep the selection on a visible, enabled row.
	pub(crate) fn ensure_selection(&mut self) {
		let selectable = self.selectable();
		if self
			.selected
			.is_some_and(|selected| selectable.contains(&selected))
		{
			return;
		}
		self.selected = selectable.first().copied();
	}

	pub(crate) fn move_selection(&mut self, delta: isize) {
		let selectable = self.selectable();
		if selectable.is_empty() {
			self.selected = None;
			return;
		}
		let current = self
			.selected
			.and_then(|selected| selectable.iter().position(|id| *id == selected));
		let next = match current {
			Some(index) => index
				.saturating_add_signed(delta)
				.min(selectable.len() - 1),
			None => 0,
		};
		self.selected = Some(selectable[next]);
	}

	/// Topmost recorded region under the cursor.
	pub(crate) fn hit_at(&self, column: u16, row: u16) -> Option<Hit> {
		self.hits
			.iter()
			.rev()
			.find(|hit| point_in_rect(column, row, hit.area))
			.copied()
	}
}
