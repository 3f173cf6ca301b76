//! typecycle - typewriter phrase cycler
//!
//! Types a phrase character by character, holds it, deletes it, then
//! moves to the next phrase, looping forever. The core state machine is
//! [`typewriter::Sequencer`]; [`typewriter::Typewriter`] runs it live on
//! a background thread, and [`tui`] draws it in a terminal.

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod theme;
pub mod tui;
pub mod typewriter;

pub use config::{Config, ConfigError};
pub use typewriter::{Sequencer, Timeline, Typewriter, TypewriterOptions};
