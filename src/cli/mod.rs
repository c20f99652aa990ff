//! Command-line interface definitions for the `pro` binary.
//!
//! This module centralises the clap parser structures so both the main binary
//! and the build script can reuse them when generating the manual page. The
//! whole tree is declared here; nothing registers commands at runtime.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI for the `pro` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pro",
    about = "PRO is a CLI tool for provisioning, configuring, and managing cloud servers.",
    long_about = "PRO is a CLI tool for provisioning, configuring, and managing cloud servers.\n\
                  Supports multiple cloud providers including DigitalOcean, AWS, Azure, GCP, and OpenStack."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

/// Subcommands of `pro`. A provider given without an action prints its own
/// help.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Manage DigitalOcean droplets.
    #[command(name = "digitalocean", about = "Manage DigitalOcean droplets")]
    Digitalocean {
        #[command(subcommand)]
        action: Option<DigitalOceanCommand>,
    },
    /// Manage AWS EC2 instances.
    #[command(name = "aws", about = "Manage AWS EC2 instances")]
    Aws {
        #[command(subcommand)]
        action: Option<AwsCommand>,
    },
    /// Manage Azure VMs.
    #[command(name = "azure", about = "Manage Azure VMs")]
    Azure {
        #[command(subcommand)]
        action: Option<AzureCommand>,
    },
    /// Manage Google Cloud Compute Engine instances.
    #[command(name = "gcp", about = "Manage Google Cloud Compute Engine instances")]
    Gcp {
        #[command(subcommand)]
        action: Option<GcpCommand>,
    },
    /// Manage OpenStack instances.
    #[command(name = "openstack", about = "Manage OpenStack instances")]
    Openstack {
        #[command(subcommand)]
        action: Option<OpenstackCommand>,
    },
    /// Generate the autocompletion script for the specified shell.
    #[command(
        name = "completion",
        about = "Generate the autocompletion script for the specified shell"
    )]
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `pro digitalocean` subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum DigitalOceanCommand {
    /// Create a new DigitalOcean droplet.
    #[command(name = "create", about = "Create a new DigitalOcean droplet")]
    Create(CreateArgs),
    /// SSH into a selected DigitalOcean droplet.
    #[command(name = "ssh", about = "SSH into a selected DigitalOcean droplet")]
    Ssh,
}

/// Arguments for `pro digitalocean create`.
#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Git repository to clone (URL or `owner/name`).
    #[arg(short = 'r', long, required = true, value_name = "REPO")]
    pub(crate) repo: String,
    /// Git branch.
    #[arg(short = 'b', long, default_value = "main")]
    pub(crate) branch: String,
    /// Path to the playbook directory inside the repository.
    #[arg(short = 'p', long = "playbook-path", default_value = "src/pro")]
    pub(crate) playbook_path: String,
    /// Droplet name.
    #[arg(short = 'n', long, default_value = "QuickSearch")]
    pub(crate) name: String,
    /// Droplet region.
    #[arg(short = 'R', long, default_value = "sfo3")]
    pub(crate) region: String,
    /// Droplet size.
    #[arg(short = 's', long, default_value = "s-1vcpu-1gb")]
    pub(crate) size: String,
    /// Comma-separated tags.
    #[arg(long, default_value = "")]
    pub(crate) tags: String,
}

/// `pro aws` subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum AwsCommand {
    /// Create a new AWS EC2 instance.
    #[command(name = "create", about = "Create a new AWS EC2 instance")]
    Create,
}

/// `pro azure` subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum AzureCommand {
    /// Deploy a new Azure VM.
    #[command(name = "create", about = "Deploy a new Azure VM")]
    Create,
    /// List existing Azure VMs.
    #[command(name = "list", about = "List existing Azure VMs")]
    List,
}

/// `pro gcp` subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum GcpCommand {
    /// Launch a new GCE instance.
    #[command(name = "create", about = "Launch a new GCE instance")]
    Create,
    /// List existing GCE instances.
    #[command(name = "list", about = "List existing GCE instances")]
    List,
}

/// `pro openstack` subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum OpenstackCommand {
    /// Launch a new OpenStack instance.
    #[command(name = "create", about = "Launch a new OpenStack instance")]
    Create,
    /// List existing OpenStack instances.
    #[command(name = "list", about = "List existing OpenStack instances")]
    List,
}
