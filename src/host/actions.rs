use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::{HostPage, PickOutcome};
use crate::picker::CursorMove;
use crate::tui::HitTarget;

impl HostPage {
	/// Apply one key press. Returns an outcome once the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		if control && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome(false)));
		}

		if !self.picker.is_open() {
			match key.code {
				KeyCode::Esc | KeyCode::Char('q') => return Ok(Some(self.outcome(true))),
				KeyCode::Enter | KeyCode::Char(' ') => self.open_picker(),
				_ => {}
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => self.picker.dismiss(&mut self.router),
			KeyCode::Enter => {
				self.picker.select_highlighted(&mut self.router)?;
			}
			KeyCode::Char('r') if control => {
				self.picker.pick_random_thread(&mut self.router);
			}
			KeyCode::Char('u') if control => self.picker.clear_search(),
			KeyCode::Char(ch) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
				let mut term = self.picker.search_term().to_string();
				term.push(ch);
				self.picker.set_search(term);
			}
			KeyCode::Backspace => {
				let mut term = self.picker.search_term().to_string();
				if term.pop().is_some() {
					self.picker.set_search(term);
				}
			}
			KeyCode::PageUp => self.picker.prev_page(),
			KeyCode::PageDown => self.picker.next_page(),
			KeyCode::Left => self.picker.move_cursor(CursorMove::Left),
			KeyCode::Right => self.picker.move_cursor(CursorMove::Right),
			KeyCode::Up => self.picker.move_cursor(CursorMove::Up),
			KeyCode::Down => self.picker.move_cursor(CursorMove::Down),
			_ => {}
		}
		Ok(None)
	}

	/// Route a mouse event. Presses of any button reach the outside-press
	/// check; only the left button activates the target under the pointer.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(button) => {
				if self.picker.handle_pointer_press(position, &mut self.router) {
					return Ok(());
				}
				if button == MouseButton::Left
					&& let Some(target) = self.hits.target_at(position).cloned()
				{
					self.activate(target)?;
				}
			}
			MouseEventKind::ScrollDown if self.picker.is_open() => self.picker.next_page(),
			MouseEventKind::ScrollUp if self.picker.is_open() => self.picker.prev_page(),
			_ => {}
		}
		Ok(())
	}

	fn activate(&mut self, target: HitTarget) -> Result<()> {
		match target {
			HitTarget::Trigger => self.open_picker(),
			HitTarget::ClearSearch => self.picker.clear_search(),
			HitTarget::Random => {
				self.picker.pick_random_thread(&mut self.router);
			}
			HitTarget::Close => self.picker.dismiss(&mut self.router),
			HitTarget::PrevPage => self.picker.prev_page(),
			HitTarget::NextPage => self.picker.next_page(),
			HitTarget::Icon(name) => self.picker.select(&name, &mut self.router)?,
			HitTarget::Panel | HitTarget::SearchField => {}
		}
		Ok(())
	}
}
