//! # xkcd Process Execution (`common::process`)
//!
//! File: cli/src/common/process/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Synchronous execution of external programs. This is the only place in the
//! crate that creates child processes or OS pipes, and every path through it
//! reclaims what it created.
//!
//! ## Architecture
//!
//! - **`cmd`**: `Cmd`, a program name plus ordered arguments. Launching a
//!   `Cmd` takes ownership of it; a command is single-use.
//! - **`launch`**: the process launcher. `spawn` starts a child with an
//!   optional stdout redirection and returns a `Proc` that must be waited on
//!   (and is reaped on drop if it was not). `run_sync` is spawn + wait with
//!   inherited stdout.
//! - **`capture`**: the captured-output runner. `run_capture` creates a
//!   pipe, points the child's stdout at the write end, drains the read end
//!   into a growing buffer until end-of-stream, waits for the child and
//!   returns the bytes only if the child exited successfully.
//!
//! Pipe endpoints and child handles are owned values. The write end is moved
//! into the child's configuration and closed in the parent as soon as the
//! launch returns; the read end is closed when the runner's scope ends. No
//! path can skip either release or perform it twice.
//!
//! There is no timeout: a child that never closes its stdout blocks the
//! caller indefinitely.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::process::{self, Cmd};
//!
//! let body = process::run_capture(Cmd::new("curl").arg(url))?;
//! process::run_sync(Cmd::new("feh").args(["-Z", img]))?;
//! ```
//!
use std::io;
use thiserror::Error;

pub mod capture;
pub mod cmd;
pub mod launch;

pub use capture::{drain, finish, run_capture, INITIAL_CAPACITY};
pub use cmd::Cmd;
pub use launch::{run_sync, spawn, Proc};

/// Failures of the process core. None of them are retried.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be found, executed, or the OS refused to fork.
    #[error("Could not start '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: io::Error,
    },

    /// The OS could not allocate a pipe (e.g. descriptor exhaustion).
    #[error("Could not create pipe: {0}")]
    PipeCreation(#[source] io::Error),

    /// Reading the child's output failed after the pipe was created.
    #[error("Could not read output of '{cmd}': {source}")]
    Io {
        cmd: String,
        #[source]
        source: io::Error,
    },

    /// The child ran but did not exit successfully.
    #[error("'{cmd}' failed with {status}")]
    ChildExit { cmd: String, status: String },

    /// The wait call itself failed; the child's outcome is unknown.
    #[error("Could not wait for '{cmd}': {source}")]
    Wait {
        cmd: String,
        #[source]
        source: io::Error,
    },
}
