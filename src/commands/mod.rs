//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod play;
pub mod trace;

use anyhow::Result;

use typecycle::cli::PhraseArgs;
use typecycle::{Config, TypewriterOptions};

/// Phrases and timing from the config with CLI arguments layered on top.
pub fn resolve(config: &Config, args: &PhraseArgs) -> Result<(Vec<String>, TypewriterOptions)> {
    let mut config = config.clone();
    if !args.phrases.is_empty() {
        config.display.phrases = args.phrases.clone();
    }
    config.validate()?;

    let options = config.typewriter.apply(&args.overrides());
    Ok((config.display.phrases, options))
}
