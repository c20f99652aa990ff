//! DigitalOcean provisioning and connection pipelines.
//!
//! [`DigitalOcean::create`] resolves options, renders cloud-init, and creates
//! a droplet through `doctl`. [`DigitalOcean::ssh`] lists droplets, lets the
//! user pick one with `fzf`, and hands the terminal to `ssh`. Both run
//! strictly in sequence; errors propagate to the caller, which decides how
//! the process exits.

use crate::config::ProConfig;
use crate::doctl::Doctl;
use crate::process::{CommandRunner, ProcessCommandRunner};
use crate::selector::{FzfSelector, Selector};

mod create;
mod error;
mod ssh;

pub use create::{
    CreateOptions, DEFAULT_BRANCH, DEFAULT_NAME, DEFAULT_PLAYBOOK_PATH, DEFAULT_REGION,
    DEFAULT_SIZE, DropletCreated,
};
pub use error::DigitalOceanError;
pub use ssh::SSH_USER;

/// Provider tag applied to every droplet.
pub const PROVIDER_TAG: &str = "digitalocean";

/// Entry point for DigitalOcean operations.
///
/// Droplets are picked through `S`, which defaults to `fzf` driven by the
/// same runner as `doctl`.
#[derive(Clone, Debug)]
pub struct DigitalOcean<R: CommandRunner, S: Selector = FzfSelector<R>> {
    doctl: Doctl<R>,
    selector: S,
    ssh_bin: String,
    runner: R,
}

impl DigitalOcean<ProcessCommandRunner> {
    /// Wires the pipelines to the real process runner.
    #[must_use]
    pub fn with_process_runner(config: &ProConfig) -> Self {
        Self::new(config, ProcessCommandRunner)
    }
}

impl<R: CommandRunner + Clone> DigitalOcean<R> {
    /// Creates the pipelines using the binaries named in `config`.
    #[must_use]
    pub fn new(config: &ProConfig, runner: R) -> Self {
        Self {
            doctl: Doctl::new(config.doctl_bin.clone(), runner.clone()),
            selector: FzfSelector::new(config.fzf_bin.clone(), runner.clone()),
            ssh_bin: config.ssh_bin.clone(),
            runner,
        }
    }
}

impl<R: CommandRunner, S: Selector> DigitalOcean<R, S> {
    /// Replaces the droplet picker.
    #[must_use]
    pub fn with_selector<T: Selector>(self, selector: T) -> DigitalOcean<R, T> {
        DigitalOcean {
            doctl: self.doctl,
            selector,
            ssh_bin: self.ssh_bin,
            runner: self.runner,
        }
    }

    fn ensure_authenticated(&self) -> Result<(), DigitalOceanError> {
        if self.doctl.is_authenticated() {
            return Ok(());
        }
        Err(DigitalOceanError::NotAuthenticated)
    }
}
