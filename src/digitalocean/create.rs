//! Droplet creation pipeline.

use std::io::Write;

use tracing::debug;

use super::{DigitalOcean, DigitalOceanError, PROVIDER_TAG};
use crate::cloud_init::CloudInit;
use crate::doctl::{DoctlError, DropletSpec};
use crate::process::CommandRunner;
use crate::repo::RepoUrl;
use crate::selector::Selector;
use crate::tags::TagSet;

/// Branch cloned when none is given.
pub const DEFAULT_BRANCH: &str = "main";
/// Repository directory holding `playbook.yml` when none is given.
pub const DEFAULT_PLAYBOOK_PATH: &str = "src/pro";
/// Droplet name when none is given.
pub const DEFAULT_NAME: &str = "QuickSearch";
/// Region slug when none is given.
pub const DEFAULT_REGION: &str = "sfo3";
/// Size slug when none is given.
pub const DEFAULT_SIZE: &str = "s-1vcpu-1gb";

/// Options for a single `create` run. Blank values fall back to the
/// defaults above when the pipeline resolves them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateOptions {
    /// Repository URL or GitHub `owner/name` shorthand. Required.
    pub repo: String,
    /// Branch to clone.
    pub branch: String,
    /// Directory inside the repository that holds `playbook.yml`.
    pub playbook_path: String,
    /// Droplet name.
    pub name: String,
    /// Region slug.
    pub region: String,
    /// Size slug.
    pub size: String,
    /// Additional comma-separated tags, appended verbatim.
    pub tags: String,
}

impl CreateOptions {
    /// Builds options for `repo` with every other field defaulted.
    #[must_use]
    pub fn for_repo(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_owned(),
            playbook_path: DEFAULT_PLAYBOOK_PATH.to_owned(),
            name: DEFAULT_NAME.to_owned(),
            region: DEFAULT_REGION.to_owned(),
            size: DEFAULT_SIZE.to_owned(),
            tags: String::new(),
        }
    }
}

/// Outcome of a successful creation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DropletCreated {
    /// Name given to the droplet.
    pub name: String,
    /// Tags applied to the droplet.
    pub tags: TagSet,
    /// Stdout reported by `doctl`.
    pub output: String,
}

struct Resolved<'a> {
    repo_url: RepoUrl,
    branch: &'a str,
    playbook_path: &'a str,
    name: &'a str,
    region: &'a str,
    size: &'a str,
    tags: TagSet,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn resolve(options: &CreateOptions) -> Result<Resolved<'_>, DigitalOceanError> {
    let repo_url = RepoUrl::parse(&options.repo)?;
    Ok(Resolved {
        repo_url,
        branch: or_default(&options.branch, DEFAULT_BRANCH),
        playbook_path: or_default(&options.playbook_path, DEFAULT_PLAYBOOK_PATH),
        name: or_default(&options.name, DEFAULT_NAME),
        region: or_default(&options.region, DEFAULT_REGION),
        size: or_default(&options.size, DEFAULT_SIZE),
        tags: TagSet::compose(PROVIDER_TAG, &options.tags),
    })
}

impl<R: CommandRunner, S: Selector> DigitalOcean<R, S> {
    /// Creates a droplet that bootstraps itself from `options.repo`.
    ///
    /// Progress lines are written to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`DigitalOceanError::NotAuthenticated`] when `doctl` has no
    /// credentials, [`DigitalOceanError::Repo`] when the repository is empty,
    /// and [`DigitalOceanError::SshKeys`] or
    /// [`DigitalOceanError::CreateFailed`] when `doctl` fails.
    pub fn create(
        &self,
        options: &CreateOptions,
        out: &mut impl Write,
    ) -> Result<DropletCreated, DigitalOceanError> {
        self.ensure_authenticated()?;
        let resolved = resolve(options)?;
        let tags = resolved.tags.to_string();
        debug!(
            repo = %resolved.repo_url,
            branch = resolved.branch,
            playbook_path = resolved.playbook_path,
            "resolved create options"
        );

        writeln!(out, "Generating Cloud Init script for DigitalOcean...").ok();
        let user_data = CloudInit {
            repo_url: resolved.repo_url.as_str(),
            branch: resolved.branch,
            playbook_path: resolved.playbook_path,
        }
        .render();

        let ssh_keys = self
            .doctl
            .list_ssh_keys()
            .map_err(DigitalOceanError::SshKeys)?;

        writeln!(
            out,
            "Creating DigitalOcean droplet '{}' in region '{}' with tags: {tags}...",
            resolved.name, resolved.region
        )
        .ok();
        let spec = DropletSpec {
            name: resolved.name,
            region: resolved.region,
            size: resolved.size,
            ssh_keys: &ssh_keys,
            user_data: &user_data,
            tags: &tags,
        };
        let output = self
            .doctl
            .create_droplet(&spec)
            .map_err(|source| DigitalOceanError::CreateFailed {
                output: captured_output(&source),
                source,
            })?;

        writeln!(
            out,
            "Droplet '{}' created successfully with tags: {tags}.",
            resolved.name
        )
        .ok();

        Ok(DropletCreated {
            name: resolved.name.to_owned(),
            tags: resolved.tags,
            output,
        })
    }
}

fn captured_output(err: &DoctlError) -> String {
    match err {
        DoctlError::CommandFailure { output, .. } => output.clone(),
        other => other.to_string(),
    }
}
