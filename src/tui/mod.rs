//! TUI (Text User Interface) module
//!
//! Terminal front ends for the typewriter using ratatui/crossterm:
//! a full-screen centered banner and an inline single-line player.

pub mod app;
pub mod footer;
pub mod inline_player;
pub mod play_app;
pub mod settings;

pub use app::App;
pub use inline_player::run_inline;
pub use play_app::{handle_key, InputResult, PlayApp};
pub use settings::PlaySettings;
