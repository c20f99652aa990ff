//! Binary entry point for the `pro` CLI.
//!
//! Every failure is propagated here and mapped to a single diagnostic line on
//! stderr plus a non-zero exit code.

use std::io::{self, Write};
use std::process;

use clap::{Command, CommandFactory, FromArgMatches};
use thiserror::Error;

use pro::help::render_root_help;
use pro::{ConfigError, CreateOptions, DigitalOcean, DigitalOceanError, ProConfig, logging};

mod cli;

use cli::{
    AwsCommand, AzureCommand, Cli, Commands, CreateArgs, DigitalOceanCommand, GcpCommand,
    OpenstackCommand,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    DigitalOcean(#[from] DigitalOceanError),
}

fn main() {
    logging::init();
    let cli = parse_cli();
    let exit_code = match dispatch(cli, &mut io::stdout()) {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    io::stdout().flush().ok();
    process::exit(exit_code);
}

/// Builds the command tree with the grouped root help installed.
fn cli_command() -> Command {
    let mut command = Cli::command();
    command.build();
    let help = render_root_help(&command);
    command.override_help(help)
}

fn parse_cli() -> Cli {
    let matches = cli_command().get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

fn dispatch(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        write!(out, "{}", render_root_help(&cli_command())).ok();
        return Ok(());
    };

    match command {
        Commands::Digitalocean { action: Some(action) } => digitalocean(action, out),
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pro", out);
            Ok(())
        }
        Commands::Aws { action: Some(AwsCommand::Create) } => {
            announce(out, "Creating an AWS EC2 instance...");
            Ok(())
        }
        Commands::Azure { action: Some(action) } => {
            announce(
                out,
                match action {
                    AzureCommand::Create => "Creating an Azure VM...",
                    AzureCommand::List => "Listing Azure VMs...",
                },
            );
            Ok(())
        }
        Commands::Gcp { action: Some(action) } => {
            announce(
                out,
                match action {
                    GcpCommand::Create => "Creating a Google Cloud Compute Engine instance...",
                    GcpCommand::List => "Listing Google Cloud Compute Engine instances...",
                },
            );
            Ok(())
        }
        Commands::Openstack { action: Some(action) } => {
            announce(
                out,
                match action {
                    OpenstackCommand::Create => "Creating an OpenStack instance...",
                    OpenstackCommand::List => "Listing OpenStack instances...",
                },
            );
            Ok(())
        }
        Commands::Digitalocean { action: None } => {
            group_help(out, "digitalocean");
            Ok(())
        }
        Commands::Aws { action: None } => {
            group_help(out, "aws");
            Ok(())
        }
        Commands::Azure { action: None } => {
            group_help(out, "azure");
            Ok(())
        }
        Commands::Gcp { action: None } => {
            group_help(out, "gcp");
            Ok(())
        }
        Commands::Openstack { action: None } => {
            group_help(out, "openstack");
            Ok(())
        }
    }
}

/// Prints the help of the provider group `name`.
fn group_help(out: &mut impl Write, name: &str) {
    let mut command = cli_command();
    if let Some(group) = command.find_subcommand_mut(name) {
        write!(out, "{}", group.render_help()).ok();
    }
}

fn create_options(args: CreateArgs) -> CreateOptions {
    CreateOptions {
        repo: args.repo,
        branch: args.branch,
        playbook_path: args.playbook_path,
        name: args.name,
        region: args.region,
        size: args.size,
        tags: args.tags,
    }
}

fn announce(out: &mut impl Write, line: &str) {
    writeln!(out, "{line}").ok();
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "Error: {err}").ok();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
