use std::time::{Duration, SystemTime};

/// Results of a finished test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub time_taken_secs: u64,
    pub wpm: u64,
    pub mistakes: usize,
}

impl Stats {
    /// Computes results at the moment the typed text reaches the passage length
    pub fn compute(passage: &str, typed: &str, started_at: SystemTime, ended_at: SystemTime) -> Self {
        let elapsed = ended_at.duration_since(started_at).unwrap_or_default();
        let time_taken_secs = round_secs(elapsed);

        Self {
            time_taken_secs,
            wpm: wpm(word_count(passage), time_taken_secs),
            mistakes: count_mistakes(passage, typed),
        }
    }
}

/// Whole seconds, halves rounded to even
pub fn round_secs(elapsed: Duration) -> u64 {
    elapsed.as_secs_f64().round_ties_even() as u64
}

pub fn word_count(passage: &str) -> usize {
    passage.split_whitespace().count()
}

/// `floor(words / (secs / 60))`. A sub-second run counts as one second.
pub fn wpm(words: usize, time_taken_secs: u64) -> u64 {
    words as u64 * 60 / time_taken_secs.max(1)
}

/// Positions within the passage where the typed character differs
pub fn count_mistakes(passage: &str, typed: &str) -> usize {
    passage
        .chars()
        .zip(typed.chars())
        .filter(|(expected, actual)| expected != actual)
        .count()
}

/// Fraction of the passage typed so far, capped at 1.0
pub fn progress_ratio(typed_len: usize, passage_len: usize) -> f64 {
    if passage_len == 0 {
        return 1.0;
    }
    (typed_len as f64 / passage_len as f64).min(1.0)
}
