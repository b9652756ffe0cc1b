//! Terminal host for a mobile popover.
//!
//! [`App`] owns the popover controller and the background document. Input
//! handling translates keys and mouse gestures into popover events, and
//! rendering draws the retained popover state and records where each
//! clickable element landed on screen.

mod actions;
mod render;
mod state;

pub use state::App;

#[cfg(test)]
mod tests;
