//! Rendering of the typewriter line
//!
//! - `banner`: centered ratatui widget for the full-screen player
//! - `caret`: caret blink timing
//! - `inline`: single-line output for plain terminals

pub mod banner;
pub mod caret;
pub mod inline;

pub use banner::Banner;
pub use caret::CaretBlink;
pub use inline::{compose, inline_line};
