//! Values exchanged with `doctl`.

use std::ffi::OsString;
use std::fmt;

use super::{DROPLET_IMAGE, DoctlError};

/// Comma-separated SSH key identifiers registered with the provider.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SshKeyList(Vec<String>);

impl SshKeyList {
    /// Parses newline-delimited identifiers as printed by
    /// `doctl compute ssh-key list --format ID --no-header`.
    ///
    /// ```
    /// use pro::doctl::SshKeyList;
    ///
    /// assert_eq!(SshKeyList::from_listing("123456\n789012\n").to_string(), "123456,789012");
    /// ```
    #[must_use]
    pub fn from_listing(listing: &str) -> Self {
        Self(
            listing
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Number of keys in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SshKeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Arguments for `doctl compute droplet create`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DropletSpec<'a> {
    /// Droplet name.
    pub name: &'a str,
    /// Region slug.
    pub region: &'a str,
    /// Size slug.
    pub size: &'a str,
    /// SSH keys granted root access.
    pub ssh_keys: &'a SshKeyList,
    /// Cloud-init user-data.
    pub user_data: &'a str,
    /// Comma-separated tags.
    pub tags: &'a str,
}

impl DropletSpec<'_> {
    /// Builds the argument vector, image fixed to [`DROPLET_IMAGE`].
    #[must_use]
    pub fn to_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("compute"),
            OsString::from("droplet"),
            OsString::from("create"),
            OsString::from(self.name),
            OsString::from("--region"),
            OsString::from(self.region),
            OsString::from("--image"),
            OsString::from(DROPLET_IMAGE),
            OsString::from("--size"),
            OsString::from(self.size),
            OsString::from("--ssh-keys"),
            OsString::from(self.ssh_keys.to_string()),
            OsString::from("--user-data"),
            OsString::from(self.user_data),
            OsString::from("--tag-names"),
            OsString::from(self.tags),
        ]
    }
}

/// One droplet from a `doctl compute droplet list` listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceRecord {
    /// Provider identifier.
    pub id: String,
    /// Droplet name.
    pub name: String,
    /// Public IPv4 address.
    pub public_ipv4: String,
}

impl InstanceRecord {
    /// Parses a whitespace-separated `ID Name PublicIPv4` line; the address is
    /// the third field.
    ///
    /// # Errors
    ///
    /// Returns [`DoctlError::MalformedListing`] when fewer than three fields
    /// are present.
    pub fn parse_line(line: &str) -> Result<Self, DoctlError> {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(name), Some(address)) => Ok(Self {
                id: id.to_owned(),
                name: name.to_owned(),
                public_ipv4: address.to_owned(),
            }),
            _ => Err(DoctlError::MalformedListing {
                line: line.to_owned(),
            }),
        }
    }
}

/// Splits a droplet listing into selectable lines, dropping blank ones.
#[must_use]
pub fn droplet_lines(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}
