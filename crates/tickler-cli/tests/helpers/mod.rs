use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed reference date so results do not depend on the wall clock.
pub const TODAY: &str = "20240601";

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// A Command pointed at the temporary database, without `--today`
    pub fn raw_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tickler").expect("Failed to find tickler binary");

        // Run inside the temp dir so no stray tickler.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TICKLER_DATABASE_PATH", &self.db_path);
        cmd.env_remove("TICKLER_LOG");

        cmd
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = self.raw_command();
        cmd.args(["--today", TODAY]);
        cmd
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a command and returns its stdout
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is UTF-8")
    }

    /// Adds a task and returns its id via the JSON output
    pub fn add_task(&self, args: &[&str]) -> String {
        let mut full = vec!["add", "--json"];
        full.extend_from_slice(args);
        let value: serde_json::Value =
            serde_json::from_str(&self.stdout(&full)).expect("add prints JSON");
        value["id"].as_str().expect("id is a string").to_string()
    }

    /// Lists tasks through `list --json`
    pub fn list_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout(&["list", "--json"])).expect("list prints JSON")
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}
