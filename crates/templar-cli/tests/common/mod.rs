//! Shared fixture for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated sandbox: its own data dir, config home and working dir.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        for dir in ["data", "config", "work"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// `templar --data-dir <sandbox>` run from the work dir, with the
    /// caller's templar environment stripped.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("templar").unwrap();
        cmd.current_dir(self.work_dir())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env_remove("TEMPLAR_ACTIVE_FILE")
            .env_remove("TEMPLAR_DATA_DIR")
            .env_remove("TEMPLAR_LOG_FILE")
            .env_remove("TEMPLAR_EDITOR__COMMAND")
            .env_remove("RUST_LOG")
            .env_remove("VISUAL")
            .env_remove("EDITOR")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Write a file in the work dir and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(path).unwrap()
    }

    pub fn body_path(&self, name: &str) -> PathBuf {
        self.data_dir().join("templates").join(name)
    }

    pub fn registry(&self) -> String {
        self.read(self.data_dir().join("registry.json"))
    }

    /// Save `content` under `name` via the CLI.
    pub fn create(&self, name: &str, file: &str, content: &str) {
        let path = self.file(file, content);
        self.cmd()
            .args(["create", name, "--from"])
            .arg(path)
            .assert()
            .success();
    }
}
