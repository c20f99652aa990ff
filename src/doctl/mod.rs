//! DigitalOcean CLI adapter.
//!
//! Every provider operation shells out to `doctl`; no REST calls are made
//! directly. Progress and diagnostics written by `doctl` to stderr reach the
//! user's terminal, while stdout is captured for parsing.

use std::ffi::OsString;

use thiserror::Error;
use tracing::debug;

use crate::process::{CommandOutput, CommandRunner, ProcessError};

mod types;

pub use types::{DropletSpec, InstanceRecord, SshKeyList, droplet_lines};

/// Default `doctl` binary name.
pub const DEFAULT_DOCTL_BIN: &str = "doctl";

/// Image every droplet is created from.
pub const DROPLET_IMAGE: &str = "centos-stream-9-x64";

/// Errors returned by the `doctl` adapter.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DoctlError {
    /// Raised when `doctl` returns a non-zero exit status. The captured
    /// stdout is preserved so the provider's own message is not lost.
    #[error("{program} {operation} exited with status {status_text}: {output}")]
    CommandFailure {
        /// Program that failed (typically `doctl`).
        program: String,
        /// Operation being attempted (for example `droplet create`).
        operation: String,
        /// Exit status reported by the OS.
        status: Option<i32>,
        /// Human readable representation of the exit status.
        status_text: String,
        /// Stdout captured up to the failure.
        output: String,
    },
    /// Raised when a droplet listing line lacks an ID, name, and address.
    #[error("malformed droplet listing line: {line:?}")]
    MalformedListing {
        /// The offending line.
        line: String,
    },
    /// Raised when command execution fails.
    #[error(transparent)]
    Runner(#[from] ProcessError),
}

/// Thin wrapper around the `doctl` binary.
#[derive(Clone, Debug)]
pub struct Doctl<R: CommandRunner> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> Doctl<R> {
    /// Creates a new adapter invoking `program` through `runner`.
    #[must_use]
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Reports whether `doctl account get` succeeds. Spawn failures (for
    /// example a missing binary) count as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.runner.run(&self.program, &os_args(&["account", "get"])) {
            Ok(output) => output.is_success(),
            Err(err) => {
                debug!(error = %err, "doctl account check could not run");
                false
            }
        }
    }

    /// Fetches every SSH key registered with the account.
    ///
    /// # Errors
    ///
    /// Returns [`DoctlError`] when `doctl` cannot run or exits non-zero.
    pub fn list_ssh_keys(&self) -> Result<SshKeyList, DoctlError> {
        let args = os_args(&["compute", "ssh-key", "list", "--format", "ID", "--no-header"]);
        let output = self.run_checked(&args, "ssh-key list")?;
        let keys = SshKeyList::from_listing(&output.stdout);
        debug!(count = keys.len(), "fetched ssh keys");
        Ok(keys)
    }

    /// Creates a droplet and returns `doctl`'s stdout.
    ///
    /// # Errors
    ///
    /// Returns [`DoctlError::CommandFailure`] carrying the captured output
    /// when creation fails.
    pub fn create_droplet(&self, spec: &DropletSpec<'_>) -> Result<String, DoctlError> {
        let output = self.run_checked(&spec.to_args(), "droplet create")?;
        Ok(output.stdout)
    }

    /// Lists droplets as `ID Name PublicIPv4` lines without a header.
    ///
    /// # Errors
    ///
    /// Returns [`DoctlError`] when `doctl` cannot run or exits non-zero.
    pub fn list_droplets(&self) -> Result<String, DoctlError> {
        let args = os_args(&[
            "compute",
            "droplet",
            "list",
            "--format",
            "ID,Name,PublicIPv4",
            "--no-header",
        ]);
        self.run_checked(&args, "droplet list")
            .map(|output| output.stdout)
    }

    fn run_checked(&self, args: &[OsString], operation: &str) -> Result<CommandOutput, DoctlError> {
        let output = self.runner.run(&self.program, args)?;
        if output.is_success() {
            return Ok(output);
        }

        Err(DoctlError::CommandFailure {
            program: self.program.clone(),
            operation: operation.to_owned(),
            status: output.code,
            status_text: output.status_text(),
            output: output.stdout,
        })
    }
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}
