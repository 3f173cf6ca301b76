//! Timing configuration for the typewriter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing parameters for one typewriter.
///
/// Every field is optional in TOML; omitted fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterOptions {
    /// Delay before each typed character (ms)
    pub type_interval_ms: u64,
    /// Delay before each deleted character (ms)
    pub delete_interval_ms: u64,
    /// Hold time once a phrase is fully typed, before deletion starts (ms)
    pub pause_ms: u64,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            type_interval_ms: Self::DEFAULT_TYPE_INTERVAL_MS,
            delete_interval_ms: Self::DEFAULT_DELETE_INTERVAL_MS,
            pause_ms: Self::DEFAULT_PAUSE_MS,
        }
    }
}

impl TypewriterOptions {
    pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 60;
    pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 40;
    pub const DEFAULT_PAUSE_MS: u64 = 2000;

    /// Override the per-character typing delay.
    pub fn with_type_interval(mut self, interval: Duration) -> Self {
        self.type_interval_ms = duration_to_ms(interval);
        self
    }

    /// Override the per-character deleting delay.
    pub fn with_delete_interval(mut self, interval: Duration) -> Self {
        self.delete_interval_ms = duration_to_ms(interval);
        self
    }

    /// Override the hold time after a phrase is complete.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_ms = duration_to_ms(pause);
        self
    }

    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Apply a set of overrides, keeping current values where unset.
    pub fn apply(mut self, overrides: &TypewriterOverrides) -> Self {
        if let Some(ms) = overrides.type_interval_ms {
            self.type_interval_ms = ms;
        }
        if let Some(ms) = overrides.delete_interval_ms {
            self.delete_interval_ms = ms;
        }
        if let Some(ms) = overrides.pause_ms {
            self.pause_ms = ms;
        }
        self
    }
}

/// Partial timing configuration, typically collected from CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypewriterOverrides {
    pub type_interval_ms: Option<u64>,
    pub delete_interval_ms: Option<u64>,
    pub pause_ms: Option<u64>,
}

impl TypewriterOverrides {
    /// True if no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.type_interval_ms.is_none()
            && self.delete_interval_ms.is_none()
            && self.pause_ms.is_none()
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
