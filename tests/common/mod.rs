use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `celeritas` binary against an isolated config file
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.json");
        TestContext {
            temp_dir,
            config_path,
        }
    }

    /// Write raw JSON to the config file
    pub fn write_config(&self, json: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        std::fs::create_dir_all(parent).expect("Failed to create config dir");
        std::fs::write(&self.config_path, json).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_celeritas"))
            .args(args)
            // Isolate from the user's real config
            .env("CELERITAS_CONFIG", &self.config_path)
            .env("RUST_LOG", "warn")
            .output()
            .expect("Failed to run celeritas")
    }

    /// Run a command that must succeed and return its trimmed stdout
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "celeritas {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    }

    /// Run a command that must fail and return its stderr
    pub fn stderr_of_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "celeritas {:?} unexpectedly succeeded: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
