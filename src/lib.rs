//! Searchable nested popover menus for the terminal.
//!
//! The engine lives in [`popmenu_core`] and the ratatui front-end in
//! [`popmenu_tui`]; this crate re-exports both and adds directory and logging
//! helpers used by the `popmenu` binary.

pub mod app_dirs;
pub mod logging;

pub use popmenu_core::{
	BasicPopover, ItemParams, MenuDefinition, MenuError, MenuFormat, MobilePopover, PopoverEvent,
	PopoverParams, PopoverResponse, SharedItem,
};
pub use popmenu_tui::{App, MenuOutcome, Theme, UiLabels, run};

/// Theme lookup for the terminal front-end.
pub mod theme {
	pub use popmenu_tui::style::{by_name, default_theme, names};
}
