//! Shared helpers for running the CLI in isolation.

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary home for config and log files.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("write config");
    }

    /// `typecycle` with config and logs pointed into the sandbox.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("typecycle").expect("typecycle binary");
        cmd.env("TYPECYCLE_CONFIG", self.config_path())
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self.command().args(args).output().expect("run typecycle");
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
            output.status.code().unwrap_or(-1),
        )
    }
}
