//! Root help rendering.
//!
//! The root help groups subcommands into cloud providers and general
//! commands instead of clap's single flat list.

use clap::Command;

/// Subcommands listed under "General Commands"; everything else is a
/// provider.
pub const GENERAL_COMMANDS: [&str; 2] = ["completion", "help"];

/// Renders the grouped root help for `command`.
#[must_use]
pub fn render_root_help(command: &Command) -> String {
    let mut subcommands = command
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .collect::<Vec<_>>();
    subcommands.sort_by(|left, right| left.get_name().cmp(right.get_name()));
    let (general, providers): (Vec<&Command>, Vec<&Command>) = subcommands
        .into_iter()
        .partition(|sub| GENERAL_COMMANDS.contains(&sub.get_name()));

    let mut help = String::new();
    help.push_str("🚀 PRO CLI: Cloud Server Provisioning\n");
    help.push_str("Usage:\n");
    help.push_str(&format!("  {} [command]\n\n", command.get_name()));
    help.push_str("🌐 Cloud Providers:\n");
    push_entries(&mut help, &providers);
    help.push_str("\n⌘ General Commands:\n");
    push_entries(&mut help, &general);
    help.push_str(&format!(
        "\nUse '{} [command] --help' for more details.\n",
        command.get_name()
    ));
    help
}

fn push_entries(help: &mut String, commands: &[&Command]) {
    for sub in commands {
        let about = sub
            .get_about()
            .map(ToString::to_string)
            .unwrap_or_default();
        help.push_str(&format!("  {:<15} {about}\n", sub.get_name()));
    }
}
