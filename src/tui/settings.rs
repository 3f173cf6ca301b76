//! Presentation settings shared by the full-screen and inline players.

use std::time::Duration;

use crate::config::Config;
use crate::render::CaretBlink;
use crate::theme::Theme;

/// How the typewriter line is presented.
#[derive(Debug, Clone)]
pub struct PlaySettings {
    /// Static text before the typed phrase
    pub prefix: String,
    /// Caret glyph
    pub caret: String,
    pub caret_blink: CaretBlink,
    pub theme: Theme,
    /// Stop automatically after this long
    pub duration: Option<Duration>,
}

impl PlaySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefix: config.display.prefix.clone(),
            caret: config.display.caret.clone(),
            caret_blink: CaretBlink::from_millis(config.display.caret_blink_ms),
            theme: Theme::from_name(config.display.theme),
            duration: None,
        }
    }

    /// Whether `elapsed` has reached the configured duration.
    pub fn expired(&self, elapsed: Duration) -> bool {
        self.duration.is_some_and(|limit| elapsed >= limit)
    }

    /// How long a player may wait for the next update before something
    /// else (caret edge, end of run) needs attention.
    pub fn wait_budget(&self, elapsed: Duration, ceiling: Duration) -> Duration {
        let mut wait = ceiling;
        if let Some(edge) = self.caret_blink.until_toggle(elapsed) {
            wait = wait.min(edge);
        }
        if let Some(limit) = self.duration {
            wait = wait.min(limit.saturating_sub(elapsed));
        }
        wait
    }
}
