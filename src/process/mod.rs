//! External process execution for the provider CLI, the fuzzy-finder, and the
//! SSH client.
//!
//! All three runner operations keep an asymmetric stream contract. Standard
//! output is captured so callers can parse it, while standard error is
//! inherited from the parent. `doctl` reports progress and diagnostics on
//! stderr, so the user sees them live even though the caller consumes stdout.
//! `fzf` draws its interface on the controlling terminal for the same reason.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use std::thread;

use shell_escape::unix::escape;
use thiserror::Error;
use tracing::debug;

/// Result of running an external command with captured standard output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandOutput {
    /// Exit code reported by the process, if available.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
}

impl CommandOutput {
    /// Returns `true` when the exit code equals zero.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Human readable representation of the exit status.
    #[must_use]
    pub fn status_text(&self) -> String {
        status_text(self.code)
    }
}

/// Renders an optional exit code, using `unknown` for signal termination.
#[must_use]
pub fn status_text(code: Option<i32>) -> String {
    code.map_or_else(|| String::from("unknown"), |value| value.to_string())
}

/// Errors raised when an external command cannot be driven to completion.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ProcessError {
    /// Raised when a command cannot be spawned.
    #[error("failed to spawn {program}: {message}")]
    Spawn {
        /// Command that failed to start.
        program: String,
        /// Operating system error string.
        message: String,
    },
    /// Raised when input cannot be delivered to the child's standard input.
    #[error("failed to write input to {program}: {message}")]
    Input {
        /// Command that was receiving input.
        program: String,
        /// Operating system error string.
        message: String,
    },
    /// Raised when waiting for a spawned child fails.
    #[error("failed to wait for {program}: {message}")]
    Wait {
        /// Command that was being waited on.
        program: String,
        /// Operating system error string.
        message: String,
    },
}

/// Abstraction over command execution to support fakes in tests.
pub trait CommandRunner {
    /// Runs `program` with the given arguments. Standard output is captured
    /// and standard error is forwarded to the parent's terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the command cannot be started or awaited.
    /// A non-zero exit is not an error; inspect [`CommandOutput::code`].
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError>;

    /// Runs `program` like [`CommandRunner::run`] while feeding `input` to its
    /// standard input.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the command cannot be started, fed, or
    /// awaited.
    fn run_with_input(
        &self,
        program: &str,
        args: &[OsString],
        input: &str,
    ) -> Result<CommandOutput, ProcessError>;

    /// Runs `program` attached to the parent's standard input, output, and
    /// error, returning its exit code once it finishes. The parent performs no
    /// I/O on those streams while the child holds them.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the command cannot be started or awaited.
    fn run_attached(&self, program: &str, args: &[OsString]) -> Result<Option<i32>, ProcessError>;
}

/// Real command runner that shells out to the host operating system.
///
/// Arguments are passed verbatim; no shell is involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError> {
        debug!(command = %render_command(program, args), "running command");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| spawn_error(program, &err))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        debug!(program, status = %result.status_text(), "command finished");
        Ok(result)
    }

    fn run_with_input(
        &self,
        program: &str,
        args: &[OsString],
        input: &str,
    ) -> Result<CommandOutput, ProcessError> {
        debug!(command = %render_command(program, args), "running command with input");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| spawn_error(program, &err))?;

        let output = feed_and_wait(program, &mut child, input)?;
        debug!(program, status = %output.status_text(), "command finished");
        Ok(output)
    }

    fn run_attached(&self, program: &str, args: &[OsString]) -> Result<Option<i32>, ProcessError> {
        debug!(command = %render_command(program, args), "handing terminal to command");
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| spawn_error(program, &err))?;
        debug!(program, status = %status_text(status.code()), "attached command finished");
        Ok(status.code())
    }
}

/// Writes `input` on a scoped thread while the child's stdout is drained, so a
/// child that writes before consuming all of its input cannot deadlock us.
fn feed_and_wait(
    program: &str,
    child: &mut Child,
    input: &str,
) -> Result<CommandOutput, ProcessError> {
    let stdin = child.stdin.take();
    let stdout = child.stdout.take();

    let (write_result, read_result) = thread::scope(|scope| {
        let writer = scope.spawn(move || write_input(stdin, input));
        let read_result = read_stdout(stdout);
        let write_result = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("input writer panicked")));
        (write_result, read_result)
    });

    let status = child.wait().map_err(|err| ProcessError::Wait {
        program: program.to_owned(),
        message: err.to_string(),
    })?;

    write_result.map_err(|err| ProcessError::Input {
        program: program.to_owned(),
        message: err.to_string(),
    })?;
    let stdout_bytes = read_result.map_err(|err| ProcessError::Wait {
        program: program.to_owned(),
        message: err.to_string(),
    })?;

    Ok(CommandOutput {
        code: status.code(),
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
    })
}

fn write_input(stdin: Option<std::process::ChildStdin>, input: &str) -> io::Result<()> {
    let Some(mut pipe) = stdin else {
        return Ok(());
    };
    match pipe.write_all(input.as_bytes()) {
        // The child may exit (for example after a selection) before reading
        // everything we offered.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn read_stdout(stdout: Option<std::process::ChildStdout>) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = stdout {
        io::Read::read_to_end(&mut pipe, &mut buffer)?;
    }
    Ok(buffer)
}

fn spawn_error(program: &str, err: &io::Error) -> ProcessError {
    ProcessError::Spawn {
        program: program.to_owned(),
        message: err.to_string(),
    }
}

/// Renders a program and its arguments as a shell-escaped command line for
/// diagnostics.
#[must_use]
pub fn render_command(program: &str, args: &[OsString]) -> String {
    let mut rendered = String::from(escape(program.into()));
    for arg in args {
        rendered.push(' ');
        rendered.push_str(escape(arg.to_string_lossy()).as_ref());
    }
    rendered
}

#[cfg(test)]
mod tests;
