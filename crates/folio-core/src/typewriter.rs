//! Hero name typing animation.

use std::time::Duration;

/// Reveals a piece of text one character per interval.
///
/// The first character appears as soon as the animation starts.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    interval: Duration,
    next_at: Option<Duration>,
}

impl Typewriter {
    pub fn new(text: &str, interval: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            interval,
            next_at: None,
        }
    }

    /// Clear the text and begin typing at `now`.
    pub fn start(&mut self, now: Duration) {
        self.shown = 0;
        self.next_at = (!self.chars.is_empty()).then_some(now);
    }

    /// Type every character that is due. Returns whether the text changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let before = self.shown;
        while let Some(at) = self.next_at.filter(|at| *at <= now) {
            self.shown += 1;
            self.next_at = (self.shown < self.chars.len()).then_some(at + self.interval);
        }
        self.shown != before
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.chars.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_at
    }
}
