//! `typecycle play`: run the typewriter in the terminal

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use typecycle::cli::PlayArgs;
use typecycle::tui::{run_inline, PlayApp, PlaySettings};
use typecycle::{Config, Typewriter};

/// Play full-screen, or inline when asked to or when stdout is not a terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: &Path, args: &PlayArgs) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let (phrases, options) = super::resolve(&config, &args.phrases)?;
    let settings = settings_for(&config, args);

    let typewriter = Typewriter::spawn(phrases, options);
    if args.inline || !atty::is(atty::Stream::Stdout) {
        play_inline(typewriter, &settings)
    } else {
        PlayApp::new(typewriter, settings)?.run()
    }
}

fn settings_for(config: &Config, args: &PlayArgs) -> PlaySettings {
    let mut settings = PlaySettings::from_config(config);
    if let Some(prefix) = &args.prefix {
        settings.prefix = prefix.clone();
    }
    if let Some(caret) = &args.caret {
        settings.caret = caret.clone();
    }
    settings.duration = args.duration_ms.map(Duration::from_millis);
    settings
}

#[cfg(not(tarpaulin_include))]
fn play_inline(mut typewriter: Typewriter, settings: &PlaySettings) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_inline(&mut out, &typewriter, settings, &stop)?;
    typewriter.dispose();
    Ok(())
}
