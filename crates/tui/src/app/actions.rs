use popmenu_core::PopoverEvent;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::Press;
use crate::MenuOutcome;

const WHEEL_STEP: isize = 3;
const PAGE_STEP: isize = 10;

impl App {
	/// Process a keyboard event and return an outcome once the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<MenuOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(MenuOutcome::cancelled());
		}

		if self.popover.is_shown() {
			self.handle_popover_key(key)
		} else {
			self.handle_document_key(key)
		}
	}

	fn handle_popover_key(&mut self, key: KeyEvent) -> Option<MenuOutcome> {
		match key.code {
			KeyCode::Esc => {
				if !self.go_back() {
					self.popover.hide();
					self.selected = None;
				}
			}
			KeyCode::Left => {
				self.go_back();
			}
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::Enter | KeyCode::Right => {
				if let Some(selected) = self.selected {
					return self.dispatch(PopoverEvent::Click(selected));
				}
			}
			KeyCode::Backspace => {
				self.edit_query(|query| {
					query.pop();
				});
			}
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.edit_query(|query| query.push(ch));
			}
			_ => {}
		}
		None
	}

	fn handle_document_key(&mut self, key: KeyEvent) -> Option<MenuOutcome> {
		match key.code {
			KeyCode::Enter | KeyCode::Char(' ') => self.open(),
			KeyCode::Esc | KeyCode::Char('q') => return Some(MenuOutcome::cancelled()),
			KeyCode::Up => {
				self.document.scroll_by(-1);
			}
			KeyCode::Down => {
				self.document.scroll_by(1);
			}
			KeyCode::PageUp => {
				self.document.scroll_by(-PAGE_STEP);
			}
			KeyCode::PageDown => {
				self.document.scroll_by(PAGE_STEP);
			}
			_ => {}
		}
		None
	}

	/// Click the header's back control. Returns `false` on the root screen.
	fn go_back(&mut self) -> bool {
		let Some(back) = self.popover.header().map(|header| header.back_button()) else {
			return false;
		};
		self.dispatch(PopoverEvent::Click(back));
		true
	}

	/// Send the edited field value as an input event.
	fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
		let Some(field) = self.popover.search().and_then(|search| search.element()) else {
			return;
		};
		let target = field.element;
		let mut value = field.value.clone();
		edit(&mut value);
		self.dispatch(PopoverEvent::Input(target, value));
	}

	/// Process a mouse event. A press and release on the same element
	/// without a drag in between is a click.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<MenuOutcome> {
		match mouse.kind {
			MouseEventKind::ScrollUp => {
				self.document.scroll_by(-WHEEL_STEP);
			}
			MouseEventKind::ScrollDown => {
				self.document.scroll_by(WHEEL_STEP);
			}
			MouseEventKind::Down(MouseButton::Left) => {
				let target = self.hit_at(mouse.column, mouse.row).and_then(|hit| hit.target);
				self.press = Some(Press {
					target,
					dragged: false,
				});
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				if let Some(press) = self.press.as_mut() {
					press.dragged = true;
				}
			}
			MouseEventKind::Up(MouseButton::Left) => {
				let press = self.press.take()?;
				let released = self.hit_at(mouse.column, mouse.row).and_then(|hit| hit.target);
				if press.dragged || press.target != released {
					return None;
				}
				let target = released?;
				if self.selectable().contains(&target) {
					self.selected = Some(target);
				}
				return self.dispatch(PopoverEvent::Click(target));
			}
			_ => {}
		}
		None
	}
}
