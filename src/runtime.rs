use std::io;
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::{Duration, SystemTime};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::{
    app::App,
    error::TyperError,
    input::{self, InputEvent, Step},
};

/// Maps a raw terminal event onto the events the game reacts to
pub fn decode(event: CtEvent) -> Option<InputEvent> {
    match event {
        CtEvent::Key(key) => decode_key(key),
        CtEvent::Resize(columns, rows) => Some(InputEvent::Resize(columns, rows)),
        _ => None,
    }
}

pub fn decode_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => Some(InputEvent::Char(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        _ => None,
    }
}

/// Source of decoded input events
pub trait EventSource {
    /// Blocks until the next relevant event
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Production event source reading crossterm events on the calling thread
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(ev) = decode(event::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Test event source fed through a channel; a closed channel reads as Quit
pub struct TestEventSource {
    rx: Receiver<InputEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<InputEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(self.rx.recv().unwrap_or(InputEvent::Quit))
    }
}

/// How a run finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Completed,
}

/// Alternates rendering with one blocking read per iteration
pub struct Runner<E: EventSource> {
    events: E,
    results_pause: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(events: E, results_pause: Duration) -> Self {
        Self {
            events,
            results_pause,
        }
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        app: &mut App,
    ) -> Result<Exit, TyperError> {
        loop {
            terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            app.status = None;

            if app.session.has_finished() {
                thread::sleep(self.results_pause);
                info!("results shown, exiting");
                return Ok(Exit::Completed);
            }

            let event = self.events.next_event()?;
            if input::apply(app, event, SystemTime::now()) == Step::Quit {
                info!(phase = %app.session.phase(), "quit");
                return Ok(Exit::Quit);
            }
        }
    }
}
