use crate::metrics::{accuracy, split_words, words_per_minute};
use crate::score_log::ScoreRecord;
use std::time::SystemTime;

/// Accuracy a finished session must reach for its score to be recorded.
pub const QUALIFYING_ACCURACY: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, strum_macros::Display)]
pub enum Phase {
    /// Passage chosen, timer not started yet.
    Ready,
    /// Timer running since the first keystroke.
    Running,
    /// Stopped; metrics are final.
    Stopped,
}

/// One attempt at retyping a passage.
///
/// The timer starts on the first keystroke, not when the session is created.
/// Metrics are recomputed on word boundaries (space, backspace) and frozen
/// when the session stops.
#[derive(Debug)]
pub struct Session {
    pub passage: String,
    pub typed: String,
    pub phase: Phase,
    pub started_at: Option<SystemTime>,
    pub elapsed_secs: u64,
    pub accuracy: f64,
    pub wpm: u64,
}

impl Session {
    pub fn new(passage: String) -> Self {
        Self {
            passage,
            typed: String::new(),
            phase: Phase::Ready,
            started_at: None,
            elapsed_secs: 0,
            accuracy: 0.0,
            wpm: 0,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// All sample words typed (possibly more), regardless of correctness.
    pub fn is_complete(&self) -> bool {
        split_words(&self.typed).len() >= split_words(&self.passage).len()
    }

    /// Handle one typed character. The first keystroke starts the timer;
    /// a space ends a word and refreshes the live metrics.
    pub fn type_char(&mut self, c: char) {
        match self.phase {
            Phase::Stopped => return,
            Phase::Ready => {
                self.phase = Phase::Running;
                self.started_at = Some(SystemTime::now());
            }
            Phase::Running => {}
        }

        self.typed.push(c);

        if c.is_whitespace() {
            self.refresh_metrics();
        }
    }

    /// Remove the last typed character and refresh the live metrics.
    pub fn backspace(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        if self.typed.pop().is_some() {
            self.refresh_metrics();
        }
    }

    /// Periodic 1-second tick: keep the displayed elapsed time current.
    pub fn on_tick(&mut self) {
        if self.phase == Phase::Running {
            self.elapsed_secs = self.live_elapsed_secs();
        }
    }

    /// Stop the session and finalize metrics.
    ///
    /// Returns a record to persist when the whole passage was typed and the
    /// final accuracy qualifies.
    pub fn stop(&mut self) -> Option<ScoreRecord> {
        if self.phase != Phase::Running {
            return None;
        }

        self.phase = Phase::Stopped;
        self.elapsed_secs = self.live_elapsed_secs();
        self.refresh_metrics();

        if self.is_complete() && self.accuracy >= QUALIFYING_ACCURACY {
            Some(ScoreRecord {
                elapsed_secs: self.elapsed_secs,
                accuracy: self.accuracy,
                wpm: self.wpm,
            })
        } else {
            None
        }
    }

    fn refresh_metrics(&mut self) {
        if self.phase == Phase::Running {
            self.elapsed_secs = self.live_elapsed_secs();
        }

        let sample_words = split_words(&self.passage);
        let typed_words = split_words(&self.typed);

        self.accuracy = accuracy(&sample_words, &typed_words);
        self.wpm = words_per_minute(typed_words.len(), self.elapsed_secs);
    }

    fn live_elapsed_secs(&self) -> u64 {
        self.started_at
            .map(|t| t.elapsed().unwrap_or_default().as_secs())
            .unwrap_or(0)
    }
}
