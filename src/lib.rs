//! Core library for the `pro` provisioning tool.
//!
//! The crate creates short-lived DigitalOcean droplets that bootstrap
//! themselves by running an Ansible playbook fetched from git, and connects
//! the user to existing droplets through an interactive picker. All provider
//! work is delegated to the `doctl` CLI.

pub mod cloud_init;
pub mod config;
pub mod digitalocean;
pub mod doctl;
pub mod help;
pub mod logging;
pub mod process;
pub mod repo;
pub mod selector;
pub mod tags;
#[cfg(test)]
pub mod test_helpers;
pub mod test_support;

pub use cloud_init::{CloudInit, generate_cloud_init};
pub use config::{ConfigError, ProConfig};
pub use digitalocean::{CreateOptions, DigitalOcean, DigitalOceanError, DropletCreated};
pub use doctl::{Doctl, DoctlError, InstanceRecord, SshKeyList};
pub use process::{CommandOutput, CommandRunner, ProcessCommandRunner, ProcessError};
pub use repo::{RepoError, RepoUrl, normalize_repo_url};
pub use selector::{FzfSelector, Selector};
pub use tags::{TagSet, compose_tags};
