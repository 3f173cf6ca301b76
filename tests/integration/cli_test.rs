//! Help, version and completion output

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    sandbox
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_mentions_keys_and_inline() {
    let (stdout, _stderr, exit_code) = Sandbox::new().run(&["play", "--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--inline"));
    assert!(stdout.contains("--type-ms"));
    assert!(stdout.contains("restart"));
}

#[test]
fn version_includes_package_version() {
    Sandbox::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash_mention_binary() {
    Sandbox::new()
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typecycle"));
}

#[test]
fn completions_do_not_need_a_config_location() {
    Sandbox::new()
        .command()
        .env_remove("TYPECYCLE_CONFIG")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("HOME")
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typecycle"));
}

#[test]
fn unknown_subcommand_fails() {
    Sandbox::new().command().arg("dance").assert().failure();
}
