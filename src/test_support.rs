//! Test support utilities shared across unit and integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::rc::Rc;

use crate::process::{CommandOutput, CommandRunner, ProcessError};

/// Scripted command runner that returns pre-seeded outputs in FIFO order.
///
/// One queue serves every runner operation, so a test scripts the whole
/// conversation (`doctl`, then `fzf`, then `ssh`) in call order. Clones share
/// the queue and the invocation log.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRunner {
    responses: Rc<RefCell<VecDeque<CommandOutput>>>,
    invocations: Rc<RefCell<Vec<CommandInvocation>>>,
}

/// How a scripted invocation was issued.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvocationMode {
    /// Stdout captured, stderr forwarded.
    Captured,
    /// Stdin fed from a string, stdout captured.
    WithInput,
    /// All streams attached to the terminal.
    Attached,
}

/// Records a single invocation made through [`ScriptedRunner`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandInvocation {
    /// Program name as passed to the runner.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<OsString>,
    /// Standard input supplied with the call, if any.
    pub input: Option<String>,
    /// Runner operation used for the call.
    pub mode: InvocationMode,
}

impl CommandInvocation {
    /// Returns a shell-like command string for assertions.
    #[must_use]
    pub fn command_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.clone());
        parts.extend(
            self.args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }

    /// Returns the argument following `flag`, if present.
    #[must_use]
    pub fn flag_value(&self, flag: &str) -> Option<String> {
        self.args
            .iter()
            .skip_while(|arg| arg.to_string_lossy() != flag)
            .nth(1)
            .map(|arg| arg.to_string_lossy().into_owned())
    }
}

impl ScriptedRunner {
    /// Creates a new runner with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all invocations recorded so far.
    #[must_use]
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.borrow().clone()
    }

    /// Pushes a successful exit status with no output.
    pub fn push_success(&self) {
        self.push_output(Some(0), "");
    }

    /// Pushes a failing exit code with no output.
    pub fn push_failure(&self, code: i32) {
        self.push_output(Some(code), "");
    }

    /// Pushes an explicit exit code and stdout.
    pub fn push_output(&self, code: Option<i32>, stdout: impl Into<String>) {
        self.responses.borrow_mut().push_back(CommandOutput {
            code,
            stdout: stdout.into(),
        });
    }

    fn record(
        &self,
        program: &str,
        args: &[OsString],
        input: Option<&str>,
        mode: InvocationMode,
    ) -> Result<CommandOutput, ProcessError> {
        self.invocations.borrow_mut().push(CommandInvocation {
            program: program.to_owned(),
            args: args.to_vec(),
            input: input.map(str::to_owned),
            mode,
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ProcessError::Spawn {
                program: program.to_owned(),
                message: String::from("no scripted response available"),
            })
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, ProcessError> {
        self.record(program, args, None, InvocationMode::Captured)
    }

    fn run_with_input(
        &self,
        program: &str,
        args: &[OsString],
        input: &str,
    ) -> Result<CommandOutput, ProcessError> {
        self.record(program, args, Some(input), InvocationMode::WithInput)
    }

    fn run_attached(&self, program: &str, args: &[OsString]) -> Result<Option<i32>, ProcessError> {
        self.record(program, args, None, InvocationMode::Attached)
            .map(|output| output.code)
    }
}
