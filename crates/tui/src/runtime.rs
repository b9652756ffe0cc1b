//! Application runtime and event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::{App, MenuOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Open the popover in `app` and run it to completion.
pub fn run(mut app: App) -> Result<MenuOutcome> {
	app.run()
}

impl App {
	/// Take over the terminal until the user activates an item or quits.
	pub fn run(&mut self) -> Result<MenuOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		self.open();
		let result = self.event_loop(&mut terminal);

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;
		self.popover.destroy();

		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<MenuOutcome> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			let outcome = match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				_ => None,
			};
			if let Some(outcome) = outcome {
				tracing::debug!(accepted = outcome.accepted, "menu session finished");
				return Ok(outcome);
			}
		}
	}
}
