//! Typewriter state machine.
//!
//! The `Sequencer` owns the display state and knows how long to wait
//! before its next mutation. It never sleeps or spawns anything itself;
//! a driver (see [`super::timeline`] and [`super::driver`]) asks for
//! [`Sequencer::next_delay`], waits, then calls [`Sequencer::tick`].
//!
//! Characters are extended grapheme clusters, so combining marks and
//! emoji are typed and deleted as one unit.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::options::TypewriterOptions;

/// Current direction of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No phrases; nothing is displayed or scheduled
    Idle,
    /// Growing the display text toward the active phrase
    Typing,
    /// Active phrase fully typed, waiting before deletion
    Holding,
    /// Shrinking the display text toward empty
    Deleting,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Typing => "typing",
            Phase::Holding => "holding",
            Phase::Deleting => "deleting",
        }
    }
}

/// The mutation a tick performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One character appended
    Typed,
    /// Hold finished; deletion mode entered
    DeletionStarted,
    /// One character removed
    Deleted,
}

/// Report of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub transition: Transition,
    /// Set when the tick emptied the display and moved to the next phrase
    pub advanced_to: Option<usize>,
}

/// A phrase with precomputed grapheme boundaries.
#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    /// Byte offset after each grapheme; `bounds[0] == 0`
    bounds: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut bounds = Vec::with_capacity(text.len() + 1);
        bounds.push(0);
        bounds.extend(
            text.grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );
        Self { text, bounds }
    }

    fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn prefix(&self, graphemes: usize) -> &str {
        &self.text[..self.bounds[graphemes]]
    }
}

/// Typewriter state machine: type, hold, delete, advance, forever.
#[derive(Debug, Clone)]
pub struct Sequencer {
    phrases: Vec<Phrase>,
    options: TypewriterOptions,
    /// Index of the active phrase
    index: usize,
    /// Number of graphemes of the active phrase currently shown
    shown: usize,
    deleting: bool,
}

impl Sequencer {
    /// Create a sequencer at its initial state: typing, index 0, empty text.
    pub fn new<I, S>(phrases: I, options: TypewriterOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(|p| Phrase::new(p.into())).collect(),
            options,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Text currently on display. Always a prefix of the active phrase.
    pub fn display_text(&self) -> &str {
        match self.phrases.get(self.index) {
            Some(phrase) => phrase.prefix(self.shown),
            None => "",
        }
    }

    /// Number of characters (graphemes) currently on display.
    pub fn display_len(&self) -> usize {
        self.shown
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn active_phrase(&self) -> Option<&str> {
        self.phrases.get(self.index).map(|p| p.text.as_str())
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.text.as_str())
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn options(&self) -> &TypewriterOptions {
        &self.options
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phase(&self) -> Phase {
        let Some(phrase) = self.phrases.get(self.index) else {
            return Phase::Idle;
        };
        if self.deleting {
            Phase::Deleting
        } else if self.shown < phrase.len() {
            Phase::Typing
        } else {
            Phase::Holding
        }
    }

    /// Delay before the next tick, or `None` when idle.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase() {
            Phase::Idle => None,
            Phase::Typing => Some(self.options.type_interval()),
            Phase::Holding => Some(self.options.pause()),
            Phase::Deleting => Some(self.options.delete_interval()),
        }
    }

    /// Perform the mutation the last [`next_delay`](Self::next_delay) was waiting for.
    ///
    /// If the tick leaves the display empty while deleting, the sequencer
    /// moves to the next phrase within the same tick; no timer is
    /// scheduled for that step.
    pub fn tick(&mut self) -> Option<Tick> {
        let transition = match self.phase() {
            Phase::Idle => return None,
            Phase::Typing => {
                self.shown += 1;
                Transition::Typed
            }
            Phase::Holding => {
                self.deleting = true;
                Transition::DeletionStarted
            }
            Phase::Deleting => {
                self.shown -= 1;
                Transition::Deleted
            }
        };

        Some(Tick {
            transition,
            advanced_to: self.settle(),
        })
    }

    /// Replace the phrase list and restart from its first phrase.
    pub fn reset<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(|p| Phrase::new(p.into())).collect();
        self.restart();
    }

    /// Go back to the initial state, keeping phrases and timing.
    pub fn restart(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.deleting = false;
    }

    /// Replace timing; only future delays are affected.
    pub fn set_options(&mut self, options: TypewriterOptions) {
        self.options = options;
    }

    fn settle(&mut self) -> Option<usize> {
        if self.deleting && self.shown == 0 && !self.phrases.is_empty() {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            Some(self.index)
        } else {
            None
        }
    }
}
