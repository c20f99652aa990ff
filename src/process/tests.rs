//! Tests for the process runner stream contract.

use super::*;
use rstest::rstest;

fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[rstest]
fn run_captures_stdout_verbatim() {
    let output = ProcessCommandRunner
        .run("echo", &args(&["hello"]))
        .expect("echo should run");

    assert!(output.is_success());
    assert_eq!(output.stdout, "hello\n");
}

#[rstest]
fn run_does_not_capture_stderr() {
    let output = ProcessCommandRunner
        .run("sh", &args(&["-c", "printf out; printf err 1>&2"]))
        .expect("sh should run");

    assert_eq!(output.stdout, "out");
}

#[rstest]
fn run_reports_non_zero_exit_with_partial_output() {
    let output = ProcessCommandRunner
        .run("sh", &args(&["-c", "printf partial; exit 42"]))
        .expect("sh should run");

    assert!(!output.is_success());
    assert_eq!(output.code, Some(42));
    assert_eq!(output.stdout, "partial");
    assert_eq!(output.status_text(), "42");
}

#[rstest]
fn run_passes_arguments_without_shell_interpolation() {
    let output = ProcessCommandRunner
        .run("echo", &args(&["$HOME", "a;b"]))
        .expect("echo should run");

    assert_eq!(output.stdout, "$HOME a;b\n");
}

#[rstest]
fn run_with_input_feeds_stdin() {
    let output = ProcessCommandRunner
        .run_with_input("cat", &[], "alpha\nbeta")
        .expect("cat should run");

    assert!(output.is_success());
    assert_eq!(output.stdout, "alpha\nbeta");
}

#[rstest]
fn run_with_input_tolerates_child_ignoring_input() {
    let large = "x\n".repeat(200_000);
    let output = ProcessCommandRunner
        .run_with_input("sh", &args(&["-c", "echo picked"]), &large)
        .expect("sh should run");

    assert_eq!(output.stdout, "picked\n");
}

#[rstest]
fn run_attached_returns_exit_code() {
    let code = ProcessCommandRunner
        .run_attached("sh", &args(&["-c", "exit 3"]))
        .expect("sh should run");

    assert_eq!(code, Some(3));
}

#[rstest]
#[case::run(|program: &str| ProcessCommandRunner.run(program, &[]).map(|_| ()))]
#[case::input(|program: &str| ProcessCommandRunner.run_with_input(program, &[], "").map(|_| ()))]
#[case::attached(|program: &str| ProcessCommandRunner.run_attached(program, &[]).map(|_| ()))]
fn missing_binary_returns_spawn_error(#[case] invoke: fn(&str) -> Result<(), ProcessError>) {
    let result = invoke("definitely-not-a-real-binary-xyz");

    match result {
        Err(ProcessError::Spawn { program, .. }) => {
            assert_eq!(program, "definitely-not-a-real-binary-xyz");
        }
        other => panic!("expected ProcessError::Spawn, got {other:?}"),
    }
}

#[rstest]
fn render_command_escapes_arguments() {
    let rendered = render_command("doctl", &args(&["compute", "a b", "c'd"]));

    assert_eq!(rendered, "doctl compute 'a b' 'c'\\''d'");
}

#[rstest]
#[case(None, "unknown")]
#[case(Some(0), "0")]
#[case(Some(127), "127")]
fn status_text_renders_codes(#[case] code: Option<i32>, #[case] expected: &str) {
    assert_eq!(status_text(code), expected);
}
