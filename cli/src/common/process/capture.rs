//! # Captured-Output Runner
//!
//! File: cli/src/common/process/capture.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs a command to completion and returns everything it wrote to stdout.
//!
//! ## Architecture
//!
//! 1. Create a pipe (`std::io::pipe`). Failure is `PipeCreation`.
//! 2. Spawn the child with the write end as its stdout. The write end is
//!    consumed by the launch, so the parent's copy is closed on both the
//!    success and the `Spawn` failure path.
//! 3. Drain the read end into the buffer until a zero-length read.
//! 4. Close the read end, then wait for the child.
//! 5. Return the bytes only if both the drain and the wait succeeded.
//!
//! The read end is closed before the wait: a child still writing when the
//! drain failed gets `EPIPE` instead of blocking on a full pipe, which would
//! otherwise make the wait hang.
//!
use super::{spawn, Cmd, Proc, ProcessError};
use std::io::{self, ErrorKind, Read};
use std::process::Stdio;
use tracing::{debug, error};

/// Buffer size used for the first read; doubled every time it fills up.
pub const INITIAL_CAPACITY: usize = 256;

/// # Run And Capture (`run_capture`)
///
/// Runs `cmd` to completion and returns its standard output.
///
/// ## Arguments
///
/// * `cmd` - The program and arguments to run. Consumed.
///
/// ## Returns
///
/// * `Ok(Vec<u8>)` - Everything the child wrote, in order. May be empty.
/// * `Err(ProcessError)` - `PipeCreation`, `Spawn`, `Io`, `ChildExit` or
///   `Wait`. Partial output is discarded on every error.
pub fn run_capture(cmd: Cmd) -> Result<Vec<u8>, ProcessError> {
    let (reader, writer) = io::pipe().map_err(|source| {
        error!("Could not create pipe: {}", source);
        ProcessError::PipeCreation(source)
    })?;
    let proc = spawn(cmd, Some(Stdio::from(writer)))?;
    finish(proc, reader)
}

/// # Finish Captured Run (`finish`)
///
/// Drains `reader` (the child's output), closes it, waits for `proc` and
/// combines both outcomes. The child is waited on even when the drain fails.
/// A failed wait turns an otherwise complete drain into an error.
pub fn finish<R: Read>(proc: Proc, mut reader: R) -> Result<Vec<u8>, ProcessError> {
    let cmd = proc.label().to_string();

    let mut out = Vec::new();
    let drained = drain(&mut reader, &mut out);
    drop(reader);
    let waited = proc.wait();

    match (drained, waited) {
        (Ok(n), Ok(())) => {
            debug!("Captured {} bytes from '{}'", n, cmd);
            Ok(out)
        }
        (Ok(_), Err(e)) => Err(e),
        (Err(source), waited) => {
            error!("Could not read output of '{}': {}", cmd, source);
            if let Err(e) = waited {
                // Read error wins; the exit failure was already logged by wait.
                debug!("Ignoring secondary failure: {}", e);
            }
            Err(ProcessError::Io { cmd, source })
        }
    }
}

/// # Drain Reader (`drain`)
///
/// Reads `reader` until end-of-stream, appending to `out`.
///
/// The buffer starts at `INITIAL_CAPACITY` bytes and doubles whenever it is
/// full, so reads always have spare room. `Interrupted` reads are retried.
///
/// ## Returns
///
/// * `Ok(n)` - Number of bytes appended.
/// * `Err(io::Error)` - Any other read error. `out` then holds only the bytes
///   appended before the failure.
pub fn drain<R: Read + ?Sized>(reader: &mut R, out: &mut Vec<u8>) -> io::Result<usize> {
    let start = out.len();
    let mut filled = start;
    loop {
        if filled == out.len() {
            let grown = if out.is_empty() {
                INITIAL_CAPACITY
            } else {
                out.len() * 2
            };
            out.resize(grown, 0);
        }
        match reader.read(&mut out[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                out.truncate(filled);
                return Err(e);
            }
        }
    }
    out.truncate(filled);
    Ok(filled - start)
}
