use std::time::{Duration, SystemTime};

use tracing::info;

use crate::{config::Config, error::TyperError, stats::Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

/// Tallest text box a config file may ask for
pub const MAX_TEXTBOX_HEIGHT: u16 = 64;

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Ends the session once the passage is fully typed and reports results.
    /// Without it the test never ends and no progress is shown.
    pub track_stats: bool,
    pub textbox_height: u16,
    pub results_pause: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            track_stats: cfg.track_stats,
            textbox_height: cfg.textbox_height.clamp(1, MAX_TEXTBOX_HEIGHT),
            results_pause: Duration::from_secs(cfg.results_pause_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    passage: String,
    passage_len: usize,
    typed: String,
    phase: Phase,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    stats: Option<Stats>,
    track_stats: bool,
}

impl Session {
    pub fn new(passage: impl Into<String>, track_stats: bool) -> Result<Self, TyperError> {
        let passage = passage.into();
        if passage.trim().is_empty() {
            return Err(TyperError::EmptyPassage);
        }

        Ok(Self {
            passage_len: passage.chars().count(),
            passage,
            typed: String::new(),
            phase: Phase::NotStarted,
            started_at: None,
            ended_at: None,
            stats: None,
            track_stats,
        })
    }

    pub fn passage(&self) -> &str {
        &self.passage
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    pub fn stats(&self) -> Option<Stats> {
        self.stats
    }

    pub fn tracks_stats(&self) -> bool {
        self.track_stats
    }

    pub fn passage_len(&self) -> usize {
        self.passage_len
    }

    pub fn typed_len(&self) -> usize {
        self.typed.chars().count()
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn has_finished(&self) -> bool {
        self.phase == Phase::Ended
    }

    fn start(&mut self, now: SystemTime) {
        self.phase = Phase::Running;
        self.started_at = Some(now);
        info!(passage_len = self.passage_len, "session started");
    }

    fn end(&mut self, now: SystemTime) {
        let started_at = self.started_at.unwrap_or(now);
        let stats = Stats::compute(&self.passage, &self.typed, started_at, now);

        self.phase = Phase::Ended;
        self.ended_at = Some(now);
        self.stats = Some(stats);
        info!(
            time_taken_secs = stats.time_taken_secs,
            wpm = stats.wpm,
            mistakes = stats.mistakes,
            "session ended"
        );
    }

    /// Appends a typed character. Returns false when the session has already
    /// ended and the key was ignored.
    pub fn write(&mut self, c: char, now: SystemTime) -> bool {
        match self.phase {
            Phase::Ended => return false,
            Phase::NotStarted => self.start(now),
            Phase::Running => {}
        }

        self.typed.push(c);

        if self.track_stats && self.typed_len() == self.passage_len {
            self.end(now);
        }

        true
    }

    /// Removes the last typed character. Returns false if nothing was removed.
    pub fn backspace(&mut self) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }
        self.typed.pop().is_some()
    }
}
