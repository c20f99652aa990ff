//! Build script for the `pro` man pages and shell completions.
//!
//! One man page is rendered per command path (`pro.1`,
//! `pro-digitalocean.1`, `pro-digitalocean-create.1`, ...) and completion
//! scripts for bash, zsh and fish are written under `completions/`, all in
//! the build output directory for packaging.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::Shell;
use clap_mangen::Man;

#[path = "src/cli/mod.rs"]
mod cli;

use cli::Cli;

const BIN_NAME: &str = "pro";
const COMPLETION_SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    writeln!(stdout, "cargo:rerun-if-changed=build.rs")?;
    writeln!(stdout, "cargo:rerun-if-changed=src/cli/mod.rs")?;

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR was not set")
    })?);

    let mut command = Cli::command();
    command.build();
    render_man_pages(&command, BIN_NAME, &out_dir)?;

    let completions = out_dir.join("completions");
    fs::create_dir_all(&completions)?;
    for shell in COMPLETION_SHELLS {
        clap_complete::generate_to(shell, &mut command, BIN_NAME, &completions)?;
    }

    Ok(())
}

/// Renders `page.1` for `command`, then recurses into its visible
/// subcommands as `page-<sub>.1`. clap's generated `help` is skipped.
fn render_man_pages(command: &Command, page: &str, out_dir: &Path) -> io::Result<()> {
    let mut buffer = Vec::new();
    Man::new(command.clone()).title(page).render(&mut buffer)?;
    fs::write(out_dir.join(format!("{page}.1")), buffer)?;

    for sub in command
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
    {
        render_man_pages(sub, &format!("{page}-{}", sub.get_name()), out_dir)?;
    }
    Ok(())
}
