//! Back-navigation stack for popovers that render nested items in place.
//!
//! On constrained layouts a nested group cannot open beside its parent, so
//! the popover replaces its content and remembers every level it passed
//! through. The history is never empty: the root screen stays at the bottom
//! and popping it is a no-op.

/// One navigable level of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen<T> {
	/// Header text; the root screen has none.
	pub title: Option<String>,
	pub items: Vec<T>,
}

impl<T> Screen<T> {
	/// Root screen without a header.
	#[must_use]
	pub fn root(items: Vec<T>) -> Self {
		Self { title: None, items }
	}

	/// Nested screen titled after the item that opened it.
	#[must_use]
	pub fn nested(title: Option<String>, items: Vec<T>) -> Self {
		Self { title, items }
	}
}

/// Stack of [`Screen`]s whose top is what the popover currently displays.
#[derive(Debug, Clone)]
pub struct NavigationHistory<T> {
	screens: Vec<Screen<T>>,
}

impl<T> NavigationHistory<T> {
	/// Start a history whose bottom is `root`.
	#[must_use]
	pub fn new(root: Screen<T>) -> Self {
		Self {
			screens: vec![root],
		}
	}

	/// Enter a nested level.
	pub fn push(&mut self, screen: Screen<T>) {
		self.screens.push(screen);
	}

	/// Leave the current level. The root screen is never removed.
	pub fn pop(&mut self) -> Option<Screen<T>> {
		if self.screens.len() > 1 {
			self.screens.pop()
		} else {
			None
		}
	}

	/// Items of the screen on top of the stack.
	#[must_use]
	pub fn current_items(&self) -> &[T] {
		&self.current().items
	}

	/// Title of the screen on top of the stack.
	#[must_use]
	pub fn current_title(&self) -> Option<&str> {
		self.current().title.as_deref()
	}

	#[must_use]
	pub fn current(&self) -> &Screen<T> {
		// `screens` always holds the root
		&self.screens[self.screens.len() - 1]
	}

	/// Number of screens, the root included.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.screens.len()
	}

	#[must_use]
	pub fn is_root(&self) -> bool {
		self.screens.len() == 1
	}

	/// Titles of every nested level from the outermost to the current one.
	pub fn breadcrumbs(&self) -> impl Iterator<Item = &str> {
		self.screens
			.iter()
			.filter_map(|screen| screen.title.as_deref())
	}
}
