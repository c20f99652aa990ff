//! Cloud-init user-data synthesis.
//!
//! The generated `#cloud-config` document installs git and Ansible on first
//! boot, clones the playbook repository into `/opt/ansible`, and runs
//! `playbook.yml` against localhost. The exact bytes are a compatibility
//! surface: instances created by older releases must be reproducible.
//!
//! `python3-pip` appears both in the package stanza and in an explicit
//! `dnf install`, since image package stanzas vary across providers.

use std::fmt;

/// Directory on the instance that receives the cloned repository.
pub const CHECKOUT_DIR: &str = "/opt/ansible";

/// Parameters for the bootstrap document.
///
/// All three values are interpolated verbatim; callers must avoid characters
/// that would break the YAML or the shell commands it contains.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CloudInit<'a> {
    /// Clone URL of the playbook repository.
    pub repo_url: &'a str,
    /// Branch checked out on the instance.
    pub branch: &'a str,
    /// Directory inside the repository that holds `playbook.yml`.
    pub playbook_path: &'a str,
}

impl CloudInit<'_> {
    /// Renders the `#cloud-config` document.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CloudInit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            repo_url,
            branch,
            playbook_path,
        } = self;
        writeln!(f, "#cloud-config")?;
        writeln!(f, "packages:")?;
        writeln!(f, "  - git")?;
        writeln!(f, "  - python3-pip")?;
        writeln!(f, "runcmd:")?;
        writeln!(f, "  - echo \"Updating system packages...\"")?;
        writeln!(f, "  - dnf install -y python3-pip")?;
        writeln!(f, "  - pip3 install --upgrade pip ansible")?;
        writeln!(f, "  - echo \"Cloning repository...\"")?;
        writeln!(
            f,
            "  - git clone -b {branch} {repo_url} {CHECKOUT_DIR} || (cd {CHECKOUT_DIR} && git pull)"
        )?;
        writeln!(f, "  - echo \"Running playbook...\"")?;
        writeln!(f, "  - cd {CHECKOUT_DIR}/{playbook_path}")?;
        writeln!(
            f,
            "  - ansible-playbook -i \"localhost,\" -c local playbook.yml"
        )
    }
}

/// Renders the bootstrap document for the given repository, branch, and
/// playbook directory.
#[must_use]
pub fn generate_cloud_init(repo_url: &str, branch: &str, playbook_path: &str) -> String {
    CloudInit {
        repo_url,
        branch,
        playbook_path,
    }
    .render()
}
