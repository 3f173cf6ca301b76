//! Typewriter phrase cycling
//!
//! Types a phrase one character at a time, holds it, deletes it one
//! character at a time, then moves on to the next phrase, forever.
//!
//! - `options`: timing configuration and overrides
//! - `sequencer`: the state machine (`tick` / `next_delay`)
//! - `timeline`: simulated clock for traces and tests
//! - `driver`: live typewriter on a background thread
//!
//! # Usage
//!
//! ```no_run
//! use typecycle::typewriter::{Typewriter, TypewriterOptions};
//!
//! let typewriter = Typewriter::spawn(["Hi", "Bye"], TypewriterOptions::default());
//! for text in typewriter.subscribe() {
//!     println!("{}|", text);
//! }
//! ```

pub mod driver;
pub mod options;
pub mod sequencer;
pub mod timeline;

pub use driver::{Subscription, Typewriter};
pub use options::{TypewriterOptions, TypewriterOverrides};
pub use sequencer::{Phase, Sequencer, Tick, Transition};
pub use timeline::{Frame, Timeline};
