//! `typecycle trace` output

use crate::helpers::Sandbox;

const HI_BYE: &[&str] = &[
    "trace",
    "Hi",
    "Bye",
    "--type-ms",
    "10",
    "--delete-ms",
    "5",
    "--pause-ms",
    "100",
];

#[test]
fn hi_bye_timeline() {
    let sandbox = Sandbox::new();
    let mut args = HI_BYE.to_vec();
    args.extend(["--duration-ms", "285"]);
    let (stdout, stderr, exit_code) = sandbox.run(&args);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @r#"
    10ms typing "H"
    20ms holding "Hi"
    120ms deleting "Hi"
    125ms deleting "H"
    130ms typing ""
    140ms typing "B"
    150ms typing "By"
    160ms holding "Bye"
    260ms deleting "Bye"
    265ms deleting "By"
    270ms deleting "B"
    275ms typing ""
    285ms typing "H"
    "#);
}

#[test]
fn json_lines_parse() {
    let sandbox = Sandbox::new();
    let mut args = HI_BYE.to_vec();
    args.extend(["--duration-ms", "130", "--json"]);
    let (stdout, _stderr, exit_code) = sandbox.run(&args);
    assert_eq!(exit_code, 0);

    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["at_ms"], 10);
    assert_eq!(records[0]["text"], "H");
    assert_eq!(records[0]["phase"], "typing");
    assert_eq!(records[4]["text"], "");
    assert_eq!(records[4]["index"], 1);
}

#[test]
fn until_prints_first_frame_with_text() {
    let sandbox = Sandbox::new();
    let mut args = HI_BYE.to_vec();
    args.extend(["--until", "Bye"]);
    let (stdout, stderr, exit_code) = sandbox.run(&args);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "160ms holding \"Bye\"\n");
}

#[test]
fn until_unreachable_text_fails() {
    let sandbox = Sandbox::new();
    let mut args = HI_BYE.to_vec();
    args.extend(["--until", "Nope", "--duration-ms", "300"]);
    let (stdout, stderr, exit_code) = sandbox.run(&args);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("\"Nope\" not shown within 300ms"));
}

#[test]
fn until_with_zero_timings_terminates() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&[
        "trace",
        "ab",
        "--type-ms",
        "0",
        "--delete-ms",
        "0",
        "--pause-ms",
        "0",
        "--until",
        "zz",
    ]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not shown within"));
}

#[test]
fn uses_config_phrases_and_timing() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        r#"
[typewriter]
type_interval_ms = 1
pause_ms = 1000

[display]
phrases = ["ok"]
"#,
    );
    let (stdout, _stderr, exit_code) = sandbox.run(&["trace", "--duration-ms", "2"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "1ms typing \"o\"\n2ms holding \"ok\"\n");
}

#[test]
fn empty_phrase_list_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[display]\nphrases = []\n");
    let (_stdout, stderr, exit_code) = sandbox.run(&["trace"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No phrases configured"));
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[typewriter\n");
    let (_stdout, stderr, exit_code) = sandbox.run(&["trace"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config"));
}
