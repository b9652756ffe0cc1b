//! Background scroll suppression while a modal popover is open.

use std::cell::Cell;
use std::rc::Rc;

/// Engage and release the background scroll lock.
pub trait ScrollLock {
	fn lock(&mut self);
	fn unlock(&mut self);
}

/// Shared lock state observed by whatever owns the scrollable background.
///
/// Holds a reference count so several popovers can lock at once; scrolling
/// resumes once every holder has released.
#[derive(Debug, Clone, Default)]
pub struct ScrollLockHandle {
	holders: Rc<Cell<usize>>,
}

impl ScrollLockHandle {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether any holder currently suppresses scrolling.
	#[must_use]
	pub fn is_engaged(&self) -> bool {
		self.holders.get() > 0
	}

	#[must_use]
	pub fn holders(&self) -> usize {
		self.holders.get()
	}

	/// New locker contributing to this handle.
	#[must_use]
	pub fn locker(&self) -> ScrollLocker {
		ScrollLocker {
			handle: self.clone(),
			locked: false,
		}
	}
}

/// One holder of a [`ScrollLockHandle`]. Locking twice counts once.
#[derive(Debug)]
pub struct ScrollLocker {
	handle: ScrollLockHandle,
	locked: bool,
}

impl ScrollLocker {
	/// Locker with its own private handle.
	#[must_use]
	pub fn new() -> Self {
		ScrollLockHandle::new().locker()
	}

	#[must_use]
	pub fn handle(&self) -> &ScrollLockHandle {
		&self.handle
	}
}

impl Default for ScrollLocker {
	fn default() -> Self {
		Self::new()
	}
}

impl ScrollLock for ScrollLocker {
	fn lock(&mut self) {
		if self.locked {
			return;
		}
		self.locked = true;
		self.handle.holders.set(self.handle.holders.get() + 1);
	}

	fn unlock(&mut self) {
		if !self.locked {
			return;
		}
		self.locked = false;
		self.handle
			.holders
			.set(self.handle.holders.get().saturating_sub(1));
	}
}

impl Drop for ScrollLocker {
	fn drop(&mut self) {
		self.unlock();
	}
}
