//! Error types for the DigitalOcean pipelines.

use thiserror::Error;

use crate::doctl::DoctlError;
use crate::process::ProcessError;
use crate::repo::RepoError;

/// Errors raised by [`super::DigitalOcean`] operations. Each one is fatal for
/// the current invocation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DigitalOceanError {
    /// Raised when `doctl` is missing or has no valid credentials.
    #[error("DigitalOcean CLI (`doctl`) is not authenticated. Run `doctl auth init` first.")]
    NotAuthenticated,
    /// Raised when the repository option is missing or blank.
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// Raised when the SSH key listing fails.
    #[error("failed to fetch SSH keys: {0}")]
    SshKeys(#[source] DoctlError),
    /// Raised when droplet creation fails; carries `doctl`'s captured output.
    #[error("failed to create droplet.\nOutput: {output}")]
    CreateFailed {
        /// Stdout captured from `doctl` up to the failure.
        output: String,
        /// Underlying adapter error.
        #[source]
        source: DoctlError,
    },
    /// Raised when the droplet listing cannot be retrieved.
    #[error("could not retrieve droplets: {0}")]
    ListFailed(#[source] DoctlError),
    /// Raised when the user made no selection.
    #[error("No droplet selected")]
    NoSelection,
    /// Raised when the selected line carries no public address.
    #[error("selected droplet has no public IPv4 address: {0}")]
    InvalidSelection(#[source] DoctlError),
    /// Raised when the SSH client cannot start.
    #[error("error connecting via SSH: {0}")]
    SshLaunch(#[source] ProcessError),
    /// Raised when the SSH session ends unsuccessfully.
    #[error("error connecting via SSH: {program} exited with status {status_text}")]
    SshExit {
        /// SSH client that was run.
        program: String,
        /// Exit status, absent when terminated by a signal.
        status: Option<i32>,
        /// Human readable representation of the exit status.
        status_text: String,
    },
}
