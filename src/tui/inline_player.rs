//! Inline player: rewrites a single terminal line in place.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use super::settings::PlaySettings;
use crate::render::inline_line;
use crate::typewriter::Typewriter;

/// Longest wait between stop-flag checks.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Render `typewriter` onto `out` until `stop` is set, the configured
/// duration elapses, or the typewriter goes away.
pub fn run_inline<W: Write>(
    out: &mut W,
    typewriter: &Typewriter,
    settings: &PlaySettings,
    stop: &AtomicBool,
) -> io::Result<()> {
    let mut updates = typewriter.subscribe();
    let started = Instant::now();
    let mut text = String::new();
    let mut shown: Option<(String, bool)> = None;

    loop {
        let elapsed = started.elapsed();
        if stop.load(Ordering::Relaxed) || settings.expired(elapsed) {
            break;
        }

        match updates.recv_timeout(settings.wait_budget(elapsed, STOP_POLL)) {
            Ok(update) => text = update,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let caret_visible = settings.caret_blink.visible(started.elapsed());
        let frame = (text.clone(), caret_visible);
        if shown.as_ref() != Some(&frame) {
            write!(
                out,
                "{}",
                inline_line(
                    &settings.theme,
                    &settings.prefix,
                    &text,
                    &settings.caret,
                    caret_visible
                )
            )?;
            out.flush()?;
            shown = Some(frame);
        }
    }

    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::CaretBlink;
    use crate::typewriter::TypewriterOptions;

    fn settings(duration_ms: u64) -> PlaySettings {
        let mut settings = PlaySettings::from_config(&Config::default());
        settings.prefix = String::new();
        settings.caret_blink = CaretBlink::from_millis(0);
        settings.duration = Some(Duration::from_millis(duration_ms));
        settings
    }

    #[test]
    fn writes_frames_until_duration_elapses() {
        let options = TypewriterOptions {
            type_interval_ms: 1,
            delete_interval_ms: 1,
            pause_ms: 60_000,
        };
        let typewriter = Typewriter::spawn(["ab"], options);
        let mut out = Vec::new();
        let stop = AtomicBool::new(false);

        run_inline(&mut out, &typewriter, &settings(300), &stop).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\r\x1b[2K"));
        assert!(output.contains("ab"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn zero_timings_write_bounded_output() {
        let zero = TypewriterOptions {
            type_interval_ms: 0,
            delete_interval_ms: 0,
            pause_ms: 0,
        };
        let typewriter = Typewriter::spawn(["abcdef"], zero);
        let mut out = Vec::new();
        let stop = AtomicBool::new(false);

        let started = Instant::now();
        run_inline(&mut out, &typewriter, &settings(200), &stop).unwrap();

        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(String::from_utf8(out).unwrap().ends_with('\n'));
    }

    #[test]
    fn stop_flag_ends_immediately() {
        let typewriter = Typewriter::spawn(["ab"], TypewriterOptions::default());
        let mut out = Vec::new();
        let stop = AtomicBool::new(true);

        run_inline(&mut out, &typewriter, &settings(60_000), &stop).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn disposed_typewriter_ends_run() {
        let mut typewriter = Typewriter::spawn(["ab"], TypewriterOptions::default());
        typewriter.dispose();
        let mut out = Vec::new();
        let stop = AtomicBool::new(false);

        run_inline(&mut out, &typewriter, &settings(60_000), &stop).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }
}
