//! `typecycle play` in inline mode (stdout is not a terminal under test)

use crate::helpers::Sandbox;

#[test]
fn inline_play_types_phrase_and_stops_after_duration() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = sandbox.run(&[
        "play",
        "Hello",
        "--inline",
        "--type-ms",
        "1",
        "--pause-ms",
        "60000",
        "--duration-ms",
        "400",
        "--prefix",
        "",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("\r\x1b[2K"));
    assert!(stdout.contains("Hello"));
    assert!(stdout.ends_with('\n'));
}

#[test]
fn prefix_and_caret_flags_are_rendered() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&[
        "play",
        "Dev",
        "--type-ms",
        "1",
        "--pause-ms",
        "60000",
        "--duration-ms",
        "300",
        "--prefix",
        "I am a",
        "--caret",
        "_",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("I am a Dev_"));
}

#[test]
fn play_without_phrases_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[display]\nphrases = []\n");
    let (_stdout, stderr, exit_code) = sandbox.run(&["play", "--duration-ms", "10"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No phrases configured"));
}
