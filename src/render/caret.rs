//! Caret blink timing.

use std::time::Duration;

/// Blinking caret: visible for the first half of every period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretBlink {
    period: Duration,
}

impl CaretBlink {
    /// A zero period means the caret never blinks.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn from_millis(period_ms: u64) -> Self {
        Self::new(Duration::from_millis(period_ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the caret is shown `elapsed` after the blink started.
    pub fn visible(&self, elapsed: Duration) -> bool {
        let period = self.period.as_millis();
        if period == 0 {
            return true;
        }
        elapsed.as_millis() % period < (period + 1) / 2
    }

    /// Time from `elapsed` until visibility next flips, if it ever does.
    pub fn until_toggle(&self, elapsed: Duration) -> Option<Duration> {
        let period = self.period.as_millis();
        if period == 0 {
            return None;
        }
        let half = (period + 1) / 2;
        let phase = elapsed.as_millis() % period;
        let remaining = if phase < half { half - phase } else { period - phase };
        Some(Duration::from_millis(remaining as u64))
    }
}
