//! Interactive SSH connection pipeline.

use std::ffi::OsString;
use std::io::Write;

use tracing::debug;

use super::{DigitalOcean, DigitalOceanError};
use crate::doctl::{InstanceRecord, droplet_lines};
use crate::process::{CommandRunner, status_text};
use crate::selector::Selector;

/// Remote user for SSH sessions.
pub const SSH_USER: &str = "root";

impl<R: CommandRunner, S: Selector> DigitalOcean<R, S> {
    /// Lets the user pick a droplet and opens an interactive SSH session to
    /// it. The session owns the terminal until it ends.
    ///
    /// # Errors
    ///
    /// Returns [`DigitalOceanError::NotAuthenticated`],
    /// [`DigitalOceanError::ListFailed`], [`DigitalOceanError::NoSelection`],
    /// [`DigitalOceanError::InvalidSelection`], or one of the SSH variants
    /// when the session cannot start or exits unsuccessfully.
    pub fn ssh(&self, out: &mut impl Write) -> Result<InstanceRecord, DigitalOceanError> {
        self.ensure_authenticated()?;

        let listing = self
            .doctl
            .list_droplets()
            .map_err(DigitalOceanError::ListFailed)?;
        let selected = self.selector.select(&droplet_lines(&listing));
        if selected.is_empty() {
            return Err(DigitalOceanError::NoSelection);
        }

        let record =
            InstanceRecord::parse_line(&selected).map_err(DigitalOceanError::InvalidSelection)?;
        debug!(id = %record.id, name = %record.name, "droplet selected");

        writeln!(out, "Connecting to {}...", record.public_ipv4).ok();
        out.flush().ok();

        let args = [
            OsString::from("-t"),
            OsString::from(format!("{SSH_USER}@{}", record.public_ipv4)),
        ];
        let code = self
            .runner
            .run_attached(&self.ssh_bin, &args)
            .map_err(DigitalOceanError::SshLaunch)?;
        if code != Some(0) {
            return Err(DigitalOceanError::SshExit {
                program: self.ssh_bin.clone(),
                status: code,
                status_text: status_text(code),
            });
        }

        Ok(record)
    }
}
