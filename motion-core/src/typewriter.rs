//! Typewriter text cycler.
//!
//! Types each word of a fixed list one character at a time, holds the
//! complete word, deletes it faster than it was typed, and wraps to the
//! next word. Driven by [`Typewriter::tick`] with wall-clock deltas;
//! leftover time carries over so a slow frame can perform several
//! character steps at once.

/// Delays between typewriter actions, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    /// Delay before the very first character.
    pub start_delay: f64,
    /// Interval between typed characters.
    pub type_interval: f64,
    /// Hold on the complete word before deleting.
    pub hold: f64,
    /// Interval between deleted characters.
    pub delete_interval: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            start_delay: 1.2,
            type_interval: 0.08,
            hold: 2.0,
            delete_interval: 0.04,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Waiting out the start delay.
    Waiting,
    Typing,
    /// Holding the complete word.
    Holding,
    Deleting,
    /// Pinned on a full word; ticking is a no-op.
    Settled,
}

/// Character-at-a-time word cycler.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    timings: Timings,
    word: usize,
    text: String,
    phase: Phase,
    /// Time until the next character action.
    clock: f64,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timings: Timings) -> Self {
        let clock = timings.start_delay;
        Self {
            words,
            timings,
            word: 0,
            text: String::new(),
            phase: Phase::Waiting,
            clock,
        }
    }

    /// The currently visible prefix of the current word.
    pub fn visible(&self) -> &str {
        &self.text
    }

    /// Index of the word being typed or deleted.
    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Pins the current word fully typed and stops animating. Used for
    /// reduced-motion mode.
    pub fn settle(&mut self) {
        if let Some(word) = self.words.get(self.word) {
            self.text = word.clone();
        }
        self.phase = Phase::Settled;
    }

    /// Restarts the cycle from the first word, including the start delay.
    pub fn restart(&mut self) {
        self.word = 0;
        self.text.clear();
        self.phase = Phase::Waiting;
        self.clock = self.timings.start_delay;
    }

    /// Advances the cycler by `dt` seconds, performing as many character
    /// actions as that much time covers.
    pub fn tick(&mut self, dt: f64) {
        if self.words.is_empty() || self.phase == Phase::Settled {
            return;
        }

        self.clock -= dt;
        while self.clock <= 0.0 {
            self.clock += self.advance();
        }
    }

    /// Performs one action and returns the delay until the next one.
    fn advance(&mut self) -> f64 {
        let word = &self.words[self.word];
        let typed = self.text.chars().count();
        let full = word.chars().count();

        match self.phase {
            Phase::Waiting | Phase::Typing => {
                self.phase = Phase::Typing;
                if let Some(c) = word.chars().nth(typed) {
                    self.text.push(c);
                }
                if self.text.chars().count() >= full {
                    self.phase = Phase::Holding;
                    self.timings.hold
                } else {
                    self.timings.type_interval
                }
            }
            // The hold expiring already deletes the first character.
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.text.pop();
                if self.text.is_empty() {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.timings.type_interval
                } else {
                    self.timings.delete_interval
                }
            }
            Phase::Settled => unreachable!("settled cyclers do not advance"),
        }
    }
}
