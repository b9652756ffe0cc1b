//! Capabilities a popover variant builds on.

use crate::view::RenderTarget;

/// Behaviour shared by every popover variant.
///
/// Variants wrap an implementation of this trait and layer their own
/// behaviour around the calls instead of overriding them.
pub trait PopoverBase {
	/// Create the render target's containers.
	fn make(&mut self);
	/// Reveal the popover.
	fn show(&mut self);
	/// Conceal the popover.
	fn hide(&mut self);
	/// Drop every rendered node.
	fn destroy(&mut self);
	fn is_shown(&self) -> bool;
	fn target(&self) -> &RenderTarget;
	fn target_mut(&mut self) -> &mut RenderTarget;
}

/// Default base popover: a visibility flag over a [`RenderTarget`].
#[derive(Debug, Default)]
pub struct BasicPopover {
	target: RenderTarget,
	shown: bool,
}

impl BasicPopover {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl PopoverBase for BasicPopover {
	fn make(&mut self) {
		self.target = RenderTarget::complete();
	}

	fn show(&mut self) {
		self.shown = true;
	}

	fn hide(&mut self) {
		self.shown = false;
	}

	fn destroy(&mut self) {
		self.shown = false;
		self.target = RenderTarget::default();
	}

	fn is_shown(&self) -> bool {
		self.shown
	}

	fn target(&self) -> &RenderTarget {
		&self.target
	}

	fn target_mut(&mut self) -> &mut RenderTarget {
		&mut self.target
	}
}
