//! Common test utilities for emicalc CLI tests.
//!
//! `TestEnv` runs the binary inside a temp project directory with an isolated
//! HOME so that neither the developer's config nor their terminal leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the emicalc binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as one JSON event
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not an NDJSON line: {line:?} ({e})"))
            })
            .collect()
    }

    /// Events whose `event` field equals `name`
    pub fn events_named(&self, name: &str) -> Vec<serde_json::Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .collect()
    }
}

/// Isolated project + home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    envs: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
            envs: Vec::new(),
        }
    }

    /// Set an extra environment variable for every run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write `./emicalc.toml` in the project directory
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_path("emicalc.toml");
        std::fs::write(&path, content).expect("write project config");
        path
    }

    /// Write the user-level config under the isolated XDG config home
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.path().join(".config").join("emicalc");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("write user config");
        path
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_emicalc"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("EMICALC_RATE")
            .env_remove("EMICALC_TENURE")
            .env_remove("EMICALC_ROUNDING")
            .env_remove("EMICALC_COLOR");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run emicalc");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
