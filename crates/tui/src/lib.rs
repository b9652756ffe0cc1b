//! Terminal front-end for `popmenu` popovers.
//!
//! Hosts a [`popmenu_core::MobilePopover`] over a scrollable background
//! document, translating key presses and mouse gestures into popover events
//! and drawing the retained popover state with ratatui.

mod app;
pub mod components;
mod config;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use outcome::MenuOutcome;
pub use runtime::run;

pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
