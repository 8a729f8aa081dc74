//! Test support utilities for stagecrypt integration tests.
//!
//! Provides an isolated test environment and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::fs;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated secrets directory.
///
/// Each test gets its own temporary directory. No process-global state
/// is mutated — child processes use `.current_dir()` so tests can
/// safely run in parallel.
pub struct Test {
    /// Temporary directory standing in for the service directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a plaintext secrets file written
    /// for the given stage.
    pub fn with_plaintext(stage: &str, content: &str) -> Self {
        let t = Self::new();
        t.write_plaintext(stage, content);
        t
    }

    /// Create a stagecrypt command running in the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stagecrypt").expect("failed to find stagecrypt binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `stagecrypt encrypt`.
    pub fn encrypt(&self, stage: &str, password: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--stage", stage, "--password", password])
            .output()
            .expect("failed to run stagecrypt encrypt")
    }

    /// Shortcut for `stagecrypt decrypt`.
    pub fn decrypt(&self, stage: &str, password: &str) -> Output {
        self.cmd()
            .args(["decrypt", "--stage", stage, "--password", password])
            .output()
            .expect("failed to run stagecrypt decrypt")
    }

    /// Shortcut for `stagecrypt check`.
    pub fn check(&self, stage: &str) -> Output {
        self.cmd()
            .args(["check", "--stage", stage])
            .output()
            .expect("failed to run stagecrypt check")
    }

    /// Path of the plaintext secrets file for a stage.
    pub fn plaintext_path(&self, stage: &str) -> PathBuf {
        self.dir.path().join(format!("secrets.{stage}.yml"))
    }

    /// Path of the encrypted artifact for a stage.
    pub fn ciphertext_path(&self, stage: &str) -> PathBuf {
        self.dir.path().join(format!("secrets.{stage}.yml.encrypted"))
    }

    /// Write a plaintext secrets file for a stage.
    pub fn write_plaintext(&self, stage: &str, content: &str) {
        fs::write(self.plaintext_path(stage), content).expect("failed to write secrets file");
    }

    /// Read back the plaintext secrets file for a stage.
    pub fn read_plaintext(&self, stage: &str) -> String {
        fs::read_to_string(self.plaintext_path(stage)).expect("failed to read secrets file")
    }

    /// Remove the plaintext secrets file for a stage.
    pub fn remove_plaintext(&self, stage: &str) {
        fs::remove_file(self.plaintext_path(stage)).expect("failed to remove secrets file");
    }
}
