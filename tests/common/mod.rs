//! Test harness for CLI integration tests.
//!
//! Provides a fluent wrapper around `assert_cmd` for the `periods` binary.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;

/// Fluent wrapper around `assert_cmd::Command` for the `periods` binary.
pub struct PeriodsCommand {
    args: Vec<String>,
}

impl PeriodsCommand {
    /// Creates a new command for the `periods` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Pins "today" with the global `--on` option.
    pub fn on(mut self, date: &str) -> Self {
        self.args.push("--on".to_string());
        self.args.push(date.to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("periods").expect("Failed to find periods binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json(self) -> serde_json::Value {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `ls` command with a filter pattern.
    pub fn ls_filtered(self, pattern: &str) -> Self {
        self.args(["ls", pattern])
    }

    /// Configures for the `range` command with a period name.
    pub fn range(self, period: &str) -> Self {
        self.args(["range", period])
    }

    /// Switches output to JSON.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }
}
