use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use ratatui::crossterm::execute;

use super::{HostPage, PickOutcome};

/// Run `page` in the terminal until the user exits.
pub fn run(mut page: HostPage) -> Result<PickOutcome> {
	page.run()
}

impl HostPage {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(stdout(), EnableMouseCapture) {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut terminal, &event_rx);

		if let Err(err) = execute!(stdout(), DisableMouseCapture) {
			log::warn!("failed to release mouse capture: {err}");
		}
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<PickOutcome> {
		let mut pending_events = VecDeque::new();
		terminal.clear()?;

		loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let view = self.picker.view()?;
			terminal.draw(|frame| self.draw(frame, &view))?;

			if let Some(outcome) = self.process_events(&mut pending_events)? {
				return Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		}
	}

	/// Apply queued events until the next one needs a fresh frame.
	///
	/// Presses are resolved against the hit regions of the last draw, so a
	/// press that follows any state change is left in `pending` for the
	/// next pass, as is everything after a handled press.
	pub(crate) fn process_events(
		&mut self,
		pending: &mut VecDeque<Event>,
	) -> Result<Option<PickOutcome>> {
		let mut changed = false;
		while let Some(event) = pending.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						return Ok(Some(outcome));
					}
					changed = true;
				}
				Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
					if changed {
						pending.push_front(Event::Mouse(mouse));
					} else {
						self.handle_mouse(mouse)?;
					}
					break;
				}
				Event::Mouse(mouse) => {
					self.handle_mouse(mouse)?;
					changed |= matches!(
						mouse.kind,
						MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
					);
				}
				_ => {}
			}
		}
		Ok(None)
	}
}
