use assert_cmd::Command;
use tempfile::TempDir;

/// Test harness running the binary from an isolated working directory so a
/// developer's `config.toml` cannot leak into assertions.
pub struct CliTestHarness {
    work_dir: TempDir,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let work_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { work_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        cmd.current_dir(self.work_dir.path());
        cmd
    }

    /// Write a `config.toml` into the harness working directory
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.work_dir.path().join("config.toml"), contents)
            .expect("Failed to write test config");
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}
