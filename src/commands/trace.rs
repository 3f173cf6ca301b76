//! `typecycle trace`: print the simulated timeline

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Serialize;

use typecycle::cli::TraceArgs;
use typecycle::typewriter::{Frame, Phase};
use typecycle::{Config, Sequencer, Timeline};

/// JSON form of a frame.
#[derive(Serialize)]
struct TraceRecord<'a> {
    at_ms: u64,
    text: &'a str,
    phase: Phase,
    index: usize,
}

pub fn handle(config_path: &Path, args: &TraceArgs) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let (phrases, options) = super::resolve(&config, &args.phrases)?;

    let mut timeline = Timeline::new(Sequencer::new(phrases, options));
    let limit = Duration::from_millis(args.duration_ms);
    let frames = match &args.until {
        Some(target) => match timeline.run_until_text(target, limit) {
            Some(frame) => vec![frame],
            None => bail!("{:?} not shown within {}ms", target, args.duration_ms),
        },
        None => timeline.run_for(limit),
    };
    tracing::debug!(frames = frames.len(), "trace computed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        let line = if args.json {
            format_json(frame)?
        } else {
            format_plain(frame)
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// `<ms>ms <phase> "<text>"`
fn format_plain(frame: &Frame) -> String {
    format!(
        "{}ms {} {:?}",
        frame.at.as_millis(),
        frame.phase.label(),
        frame.text
    )
}

fn format_json(frame: &Frame) -> Result<String> {
    let record = TraceRecord {
        at_ms: u64::try_from(frame.at.as_millis()).unwrap_or(u64::MAX),
        text: &frame.text,
        phase: frame.phase,
        index: frame.index,
    };
    Ok(serde_json::to_string(&record)?)
}
