//! # xkcd CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is its own test crate; this one is pulled in with `mod common;`.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get xkcd Command (`xkcd_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `xkcd` binary, with
/// `XKCD_CONFIG` and `RUST_LOG` cleared so the host environment cannot leak
/// into the test.
pub fn xkcd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("xkcd").expect("Failed to find xkcd binary for testing");
    cmd.env_remove("XKCD_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// A temporary directory acting as a fake XKCD server.
///
/// The fetcher is `cat`, and the URL template points at `<dir>/{number}.json`,
/// so `comic(n, body)` decides exactly what the fetcher prints. The viewer is
/// a shell snippet that records the image link in `<dir>/viewed`.
pub struct FakeServer {
    pub dir: TempDir,
    pub config_path: PathBuf,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::with_viewer(r#"printf '%s' "$1" > "$0""#)
    }

    /// `script` runs under `sh -c`, with `$0` set to the `viewed` file path
    /// and `$1` set to the image link.
    pub fn with_viewer(script: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.toml");
        let config = format!(
            r#"
[fetcher]
program = "cat"
args = []
url_template = "{dir}/{{number}}.json"

[viewer]
program = "sh"
args = ["-c", {script:?}, "{viewed}"]
"#,
            dir = dir.path().display(),
            script = script,
            viewed = dir.path().join("viewed").display(),
        );
        fs::write(&config_path, config).expect("Failed to write config");
        Self { dir, config_path }
    }

    pub fn comic(&self, number: u32, body: &str) -> &Self {
        fs::write(self.dir.path().join(format!("{}.json", number)), body)
            .expect("Failed to write comic body");
        self
    }

    pub fn viewed_path(&self) -> PathBuf {
        self.dir.path().join("viewed")
    }

    pub fn viewed(&self) -> Option<String> {
        fs::read_to_string(self.viewed_path()).ok()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = xkcd_cmd();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub const PYTHON: &str = r#"{
    "num": 353,
    "title": "Python",
    "img": "https://imgs.xkcd.com/comics/python.png",
    "transcript": "[[ Guy 1 is talking to Guy 2, who is floating in the sky ]]",
    "alt": "I wrote 20 short programs in Python yesterday."
}"#;
