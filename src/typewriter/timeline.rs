//! Simulated clock for driving a sequencer without sleeping.
//!
//! Used by `typecycle trace` and by tests that check timing behaviour.

use std::time::Duration;

use super::sequencer::{Phase, Sequencer, Transition};

/// Upper bound on frames produced by a single `run_for` or
/// `run_until_text` call.
///
/// All-zero timings would otherwise never let simulated time move.
pub const MAX_FRAMES_PER_RUN: usize = 100_000;

/// One observed display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Simulated time at which the tick fired
    pub at: Duration,
    /// Display text after the tick
    pub text: String,
    /// Phase after the tick
    pub phase: Phase,
    /// Active phrase index after the tick
    pub index: usize,
    pub transition: Transition,
}

/// A sequencer paired with a simulated clock.
#[derive(Debug, Clone)]
pub struct Timeline {
    sequencer: Sequencer,
    now: Duration,
    /// Portion of the current delay that has already elapsed
    waited: Duration,
}

impl Timeline {
    pub fn new(sequencer: Sequencer) -> Self {
        Self {
            sequencer,
            now: Duration::ZERO,
            waited: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Jump to the next tick and apply it.
    pub fn step(&mut self) -> Option<Frame> {
        let delay = self.sequencer.next_delay()?;
        self.now += delay.saturating_sub(self.waited);
        self.waited = Duration::ZERO;
        self.fire()
    }

    /// Advance the clock by `duration`, returning every tick that fired.
    ///
    /// A delay cut short at the end of the window carries over into the
    /// next call.
    pub fn run_for(&mut self, duration: Duration) -> Vec<Frame> {
        let end = self.now + duration;
        let mut frames = Vec::new();

        while frames.len() < MAX_FRAMES_PER_RUN {
            let Some(delay) = self.sequencer.next_delay() else {
                break;
            };
            let remaining = delay.saturating_sub(self.waited);
            if self.now + remaining > end {
                self.waited += end - self.now;
                break;
            }
            self.now += remaining;
            self.waited = Duration::ZERO;
            if let Some(frame) = self.fire() {
                frames.push(frame);
            }
        }

        // Idle sequencers still let time pass; a capped run stops the clock.
        if frames.len() < MAX_FRAMES_PER_RUN {
            self.now = end;
        }
        frames
    }

    /// Step until the display shows `target`, giving up once `limit` has
    /// passed or after `MAX_FRAMES_PER_RUN` frames.
    pub fn run_until_text(&mut self, target: &str, limit: Duration) -> Option<Frame> {
        for _ in 0..MAX_FRAMES_PER_RUN {
            if self.now > limit {
                return None;
            }
            let frame = self.step()?;
            if frame.at > limit {
                return None;
            }
            if frame.text == target {
                return Some(frame);
            }
        }
        None
    }

    fn fire(&mut self) -> Option<Frame> {
        let tick = self.sequencer.tick()?;
        Some(Frame {
            at: self.now,
            text: self.sequencer.display_text().to_string(),
            phase: self.sequencer.phase(),
            index: self.sequencer.active_index(),
            transition: tick.transition,
        })
    }
}
