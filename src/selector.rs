//! Interactive selection through an external fuzzy-finder.
//!
//! Options are piped to `fzf` on stdin; `fzf` draws on the controlling
//! terminal and prints the chosen line on stdout. An empty string means
//! nothing was chosen, whatever the reason (no match, Esc, Ctrl-C, missing
//! binary).

use std::ffi::OsString;

use tracing::debug;

use crate::process::{CommandRunner, ProcessCommandRunner};

/// Default fuzzy-finder binary name.
pub const DEFAULT_FZF_BIN: &str = "fzf";

/// Picks one entry from a list of options.
pub trait Selector {
    /// Offers `options` and returns the chosen line, or an empty string when
    /// nothing was selected.
    fn select(&self, options: &[String]) -> String;
}

/// Presents options through `fzf`.
#[derive(Clone, Debug)]
pub struct FzfSelector<R: CommandRunner> {
    program: String,
    runner: R,
}

impl FzfSelector<ProcessCommandRunner> {
    /// Creates a selector wired to the real process runner.
    #[must_use]
    pub fn with_process_runner(program: impl Into<String>) -> Self {
        Self::new(program, ProcessCommandRunner)
    }
}

impl<R: CommandRunner> FzfSelector<R> {
    /// Creates a selector invoking `program` through `runner`.
    #[must_use]
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

impl<R: CommandRunner> Selector for FzfSelector<R> {
    /// Offers `options` one per line and returns the trimmed selection.
    fn select(&self, options: &[String]) -> String {
        let input = options.join("\n");
        let no_args: [OsString; 0] = [];
        match self.runner.run_with_input(&self.program, &no_args, &input) {
            Ok(output) if output.is_success() => output.stdout.trim().to_owned(),
            Ok(output) => {
                debug!(status = %output.status_text(), "selector exited without a selection");
                String::new()
            }
            Err(err) => {
                debug!(error = %err, "selector could not run");
                String::new()
            }
        }
    }
}
