use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};
use crate::tui::Terminal;

/// Delay between ticks. Ticks drive the status-line expiry, so the app
/// keeps receiving events while the keyboard is quiet.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Runs the main event loop: draw a frame, wait for a key press or a
/// tick, feed it to the app, repeat until the app stops.
pub fn run(app: &mut App, terminal: &mut Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if !event::poll(TICK_RATE)? {
            app.update(AppEvent::Tick);
            continue;
        }
        // key releases/repeats and non-key events are ignored
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.update(AppEvent::KeyPress(key.code));
            }
        }
    }
    Ok(())
}
