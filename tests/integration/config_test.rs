//! `typecycle config` subcommands

use std::fs;

use typecycle::Config;

use crate::helpers::Sandbox;

#[test]
fn path_prints_configured_location() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), sandbox.config_path().display().to_string());
}

#[test]
fn global_config_flag_overrides_env() {
    let sandbox = Sandbox::new();
    let other = sandbox.dir.path().join("other.toml");
    let other_str = other.display().to_string();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "path", "--config", &other_str]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), other_str);
}

#[test]
fn show_prints_defaults_without_file() {
    let (stdout, _stderr, exit_code) = Sandbox::new().run(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[typewriter]"));
    assert!(stdout.contains("type_interval_ms = 60"));
    assert!(stdout.contains("Full-Stack Web Developer"));
}

#[test]
fn init_writes_default_config_once() {
    let sandbox = Sandbox::new();
    let (_stdout, _stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        Config::load_from(&sandbox.config_path()).unwrap(),
        Config::default()
    );

    let (_stdout, stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = sandbox.run(&["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn migrate_without_yes_in_non_interactive_mode_changes_nothing() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[typewriter]\npause_ms = 2500\n");

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("missing field"));
    assert!(stdout.contains("No changes made."));
    assert_eq!(
        fs::read_to_string(sandbox.config_path()).unwrap(),
        "[typewriter]\npause_ms = 2500\n"
    );
}

#[test]
fn migrate_with_yes_keeps_existing_values() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[typewriter]\npause_ms = 2500\n");

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("+ type_interval_ms = 60"));

    let config = Config::load_from(&sandbox.config_path()).unwrap();
    assert_eq!(config.typewriter.pause_ms, 2500);
    assert_eq!(config.display, Config::default().display);

    let (stdout, _stderr, _) = sandbox.run(&["config", "migrate", "--yes"]);
    assert!(stdout.contains("already up to date"));
}
