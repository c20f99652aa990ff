//! Fake `doctl`, `fzf`, and `ssh` executables for driving the `pro` binary.
//!
//! Each fake is a small shell script written into a temporary directory. The
//! scripts append their arguments to `calls.log` so tests can assert on the
//! exact command lines the binary produced.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Droplet listing printed by the fake `doctl compute droplet list`.
pub const DROPLET_LISTING: &str = "101 alpha 10.0.0.1\n102 beta 10.0.0.2\n";

/// Behaviour switches for the fake toolbox.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeBehaviour {
    /// `doctl account get` fails when set.
    pub unauthenticated: bool,
    /// `doctl compute droplet create` fails when set.
    pub create_fails: bool,
    /// Fake `fzf` selects nothing when set.
    pub cancel_selection: bool,
    /// Exit code of the fake `ssh`.
    pub ssh_exit: i32,
}

/// Temporary directory holding the fake executables and their call log.
pub struct FakeToolbox {
    dir: TempDir,
}

impl FakeToolbox {
    pub fn new(behaviour: FakeBehaviour) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let toolbox = Self { dir };
        toolbox.write_script("doctl", &doctl_script(behaviour));
        toolbox.write_script("fzf", &fzf_script(behaviour));
        toolbox.write_script("ssh", &ssh_script(behaviour));
        toolbox
    }

    /// Builds a `pro` command wired to the fakes and isolated from user
    /// configuration.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pro");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env_remove("PRO_CONFIG_PATH")
            .env_remove("PRO_LOG")
            .env("PRO_DOCTL_BIN", self.path("doctl"))
            .env("PRO_FZF_BIN", self.path("fzf"))
            .env("PRO_SSH_BIN", self.path("ssh"));
        cmd
    }

    /// Raw call log. Each invocation starts a new line with the program
    /// name; multi-line arguments such as user data span several lines.
    pub fn call_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Input the fake `fzf` received.
    pub fn fzf_input(&self) -> String {
        fs::read_to_string(self.dir.path().join("fzf.input")).unwrap_or_default()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    fn write_script(&self, name: &str, body: &str) {
        let path = self.path(name);
        let script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> '{log}'\n{body}",
            log = self.log_path().display()
        );
        fs::write(&path, script).expect("write fake script");
        make_executable(&path);
    }
}

fn make_executable(path: &Path) {
    let mut permissions = fs::metadata(path).expect("script metadata").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).expect("chmod fake script");
}

fn doctl_script(behaviour: FakeBehaviour) -> String {
    let auth_status = if behaviour.unauthenticated { 1 } else { 0 };
    let create_status = if behaviour.create_fails { 1 } else { 0 };
    format!(
        r#"case "$1 $2 $3" in
  "account get "*)
    exit {auth_status}
    ;;
  "compute ssh-key list")
    printf '111\n222\n'
    ;;
  "compute droplet create")
    if [ {create_status} -ne 0 ]; then
      echo "Error: quota exceeded"
      exit {create_status}
    fi
    printf 'ID    Name\n555   created\n'
    ;;
  "compute droplet list")
    printf '{listing}'
    ;;
  *)
    exit 64
    ;;
esac
"#,
        listing = DROPLET_LISTING.replace('\n', "\\n"),
    )
}

fn fzf_script(behaviour: FakeBehaviour) -> String {
    let pick = if behaviour.cancel_selection {
        "exit 130"
    } else {
        "tail -n 1 \"$(dirname \"$0\")/fzf.input\""
    };
    format!("cat > \"$(dirname \"$0\")/fzf.input\"\n{pick}\n")
}

fn ssh_script(behaviour: FakeBehaviour) -> String {
    format!("exit {}\n", behaviour.ssh_exit)
}
