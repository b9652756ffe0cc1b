//! Bookkeeping for event listeners bound to rendered elements.
//!
//! Components register a listener for each element they want to hear from and
//! the dispatcher only delivers events whose target still has one. Removing a
//! listener is what makes a torn-down element inert.

use crate::view::ElementId;

/// Kind of event a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// Press and release on the same element without dragging.
	Click,
	/// Text field value changed.
	Input,
}

/// Handle returned by [`Listeners::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy)]
struct Binding {
	id: ListenerId,
	target: ElementId,
	kind: EventKind,
}

/// Registry of active listeners owned by one component.
#[derive(Debug, Default)]
pub struct Listeners {
	bindings: Vec<Binding>,
	next_id: u64,
}

impl Listeners {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start listening for `kind` events on `target`.
	pub fn on(&mut self, target: ElementId, kind: EventKind) -> ListenerId {
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.bindings.push(Binding { id, target, kind });
		id
	}

	/// Remove a single listener. Returns `false` when it was already gone.
	pub fn off(&mut self, id: ListenerId) -> bool {
		let before = self.bindings.len();
		self.bindings.retain(|binding| binding.id != id);
		self.bindings.len() != before
	}

	/// Remove every listener bound to `target`.
	pub fn off_target(&mut self, target: ElementId) {
		self.bindings.retain(|binding| binding.target != target);
	}

	/// Remove every listener. Safe to call repeatedly.
	pub fn remove_all(&mut self) {
		self.bindings.clear();
	}

	/// Whether an event of `kind` on `target` would reach a listener.
	#[must_use]
	pub fn is_bound(&self, target: ElementId, kind: EventKind) -> bool {
		self.bindings
			.iter()
			.any(|binding| binding.target == target && binding.kind == kind)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn listeners_are_removed_exactly_once() {
		let mut listeners = Listeners::new();
		let target = ElementId::next();
		let id = listeners.on(target, EventKind::Click);

		assert!(listeners.is_bound(target, EventKind::Click));
		assert!(!listeners.is_bound(target, EventKind::Input));
		assert!(listeners.off(id));
		assert!(!listeners.off(id));
		assert!(!listeners.is_bound(target, EventKind::Click));
	}

	#[test]
	fn remove_all_is_idempotent() {
		let mut listeners = Listeners::new();
		listeners.on(ElementId::next(), EventKind::Click);
		listeners.on(ElementId::next(), EventKind::Input);

		listeners.remove_all();
		listeners.remove_all();
		assert!(listeners.is_empty());
	}
}
