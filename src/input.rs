use std::time::SystemTime;

use tracing::debug;

use crate::app::App;

/// A keystroke or terminal signal, decoded once at the terminal boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Char(char),
    Backspace,
    Resize(u16, u16),
}

/// What the runner should do after an event has been applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// This event completed the passage
    Ended,
    Quit,
}

pub fn apply(app: &mut App, event: InputEvent, now: SystemTime) -> Step {
    match event {
        InputEvent::Quit => {
            debug!(phase = %app.session.phase(), "quit requested");
            Step::Quit
        }
        InputEvent::Char(c) => {
            if !app.session.write(c, now) {
                return Step::Continue;
            }
            app.status = Some(format!("KEY: {c}"));
            if app.session.has_finished() {
                Step::Ended
            } else {
                Step::Continue
            }
        }
        InputEvent::Backspace => {
            if app.session.backspace() {
                app.status = Some("BACKSPACE".to_string());
            }
            Step::Continue
        }
        InputEvent::Resize(columns, rows) => {
            debug!(columns, rows, "terminal resized");
            app.resize(columns, rows);
            Step::Continue
        }
    }
}
