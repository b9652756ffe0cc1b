//! Core state for `popmenu` popovers.
//!
//! Everything here is renderer-agnostic: a [`MobilePopover`] drives a
//! [`NavigationHistory`] of nested screens and a per-screen [`SearchInput`],
//! and exposes the result as a retained [`RenderTarget`] plus item views that
//! a front-end draws.

mod base;
mod error;
mod history;
mod item;
mod listeners;
mod menu;
mod mobile;
mod scroll_lock;
pub mod search;
mod view;

pub use base::{BasicPopover, PopoverBase};
pub use error::MenuError;
pub use history::{NavigationHistory, Screen};
pub use item::{ItemParams, Searchable, SharedItem};
pub use listeners::{EventKind, ListenerId, Listeners};
pub use menu::{MenuDefinition, MenuFormat};
pub use mobile::{MobilePopover, PopoverEvent, PopoverParams, PopoverResponse};
pub use scroll_lock::{ScrollLock, ScrollLockHandle, ScrollLocker};
pub use search::{SearchField, SearchInput};
pub use view::{Container, ElementId, ItemView, Overlay, PopoverHeader, RenderTarget};
