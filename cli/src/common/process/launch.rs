//! # Process Launcher
//!
//! File: cli/src/common/process/launch.rs
//! Author: Christi Mahu
//!
//! Starts external programs and owns the resulting child handles until they
//! are waited on.
//!
use super::{Cmd, ProcessError};
use std::process::{Child, Command, Stdio};
use tracing::{debug, error, warn};

/// A started child process.
///
/// `wait` consumes the handle, so a child is waited on at most once. A handle
/// dropped without `wait` (for example while unwinding) reaps the child in
/// its destructor so it never lingers as a zombie.
#[derive(Debug)]
pub struct Proc {
    child: Child,
    label: String,
    reaped: bool,
}

impl Proc {
    /// OS process id of the child.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// The rendered command line this process was started from.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Blocks until the child terminates and reclaims it.
    ///
    /// ## Returns
    ///
    /// * `Ok(())` - The child exited with status 0.
    /// * `Err(ProcessError::ChildExit)` - Non-zero exit or killed by a signal.
    /// * `Err(ProcessError::Wait)` - The OS wait call failed.
    pub fn wait(mut self) -> Result<(), ProcessError> {
        self.reaped = true;
        let cmd = std::mem::take(&mut self.label);
        match self.child.wait() {
            Ok(status) if status.success() => {
                debug!("'{}' exited successfully", cmd);
                Ok(())
            }
            Ok(status) => {
                error!("'{}' failed with {}", cmd, status);
                Err(ProcessError::ChildExit {
                    cmd,
                    status: status.to_string(),
                })
            }
            Err(source) => {
                error!("Could not wait for '{}': {}", cmd, source);
                Err(ProcessError::Wait { cmd, source })
            }
        }
    }
}

impl Drop for Proc {
    fn drop(&mut self) {
        if !self.reaped {
            warn!("'{}' dropped without wait, reaping it now", self.label);
            if let Err(e) = self.child.wait() {
                warn!("Could not reap '{}': {}", self.label, e);
            }
        }
    }
}

/// # Spawn Process (`spawn`)
///
/// Starts `cmd` as a child process, taking ownership of the command.
///
/// ## Arguments
///
/// * `cmd` - The program and arguments to run. Consumed.
/// * `stdout` - Where the child's standard output goes. `None` inherits the
///   parent's stdout. The target is moved into the child configuration and
///   the parent's copy is closed before this function returns, whether the
///   launch succeeded or not.
///
/// ## Returns
///
/// * `Result<Proc, ProcessError>` - The running child, or `Spawn` with the OS
///   error if the program could not be found or executed.
pub fn spawn(cmd: Cmd, stdout: Option<Stdio>) -> Result<Proc, ProcessError> {
    let label = cmd.to_string();
    let (program, args) = cmd.into_parts();

    let mut command = Command::new(program);
    command.args(args);
    if let Some(target) = stdout {
        command.stdout(target);
    }

    debug!("Spawning: {}", label);
    match command.spawn() {
        Ok(child) => {
            debug!("Spawned '{}' as pid {}", label, child.id());
            Ok(Proc {
                child,
                label,
                reaped: false,
            })
        }
        Err(source) => {
            error!("Could not start '{}': {}", label, source);
            Err(ProcessError::Spawn { cmd: label, source })
        }
    }
}

/// # Run Synchronously (`run_sync`)
///
/// Runs `cmd` with inherited stdio and waits for it to finish.
pub fn run_sync(cmd: Cmd) -> Result<(), ProcessError> {
    spawn(cmd, None)?.wait()
}
