//! Configuration loading via `ortho-config`.
//!
//! Only the locations of the external tools are configurable. Values merge
//! defaults, `pro.toml` discovery, and `PRO_*` environment variables.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Locations of the external binaries the pipelines shell out to.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(
    prefix = "PRO",
    discovery(
        app_name = "pro",
        env_var = "PRO_CONFIG_PATH",
        config_file_name = "pro.toml",
        dotfile_name = ".pro.toml",
        project_file_name = "pro.toml"
    )
)]
pub struct ProConfig {
    /// Path to the DigitalOcean CLI.
    #[ortho_config(default = "doctl".to_owned())]
    pub doctl_bin: String,
    /// Path to the fuzzy-finder used for interactive selection.
    #[ortho_config(default = "fzf".to_owned())]
    pub fzf_bin: String,
    /// Path to the SSH client.
    #[ortho_config(default = "ssh".to_owned())]
    pub ssh_bin: String,
}

impl ProConfig {
    /// Configuration that resolves every tool from `PATH`.
    #[must_use]
    pub fn from_path_lookup() -> Self {
        Self {
            doctl_bin: String::from("doctl"),
            fzf_bin: String::from("fzf"),
            ssh_bin: String::from("ssh"),
        }
    }

    /// Loads configuration without attempting to parse CLI arguments. Values
    /// still merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails, or
    /// [`ConfigError::MissingField`] when a binary path is blank.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        let config = Self::load_from_iter([std::ffi::OsString::from("pro")])
            .map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Ensures every binary path is present after trimming whitespace. Error
    /// messages name both the environment variable and the TOML key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when a path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_field(&self.doctl_bin, "doctl_bin")?;
        Self::require_field(&self.fzf_bin, "fzf_bin")?;
        Self::require_field(&self.ssh_bin, "ssh_bin")?;
        Ok(())
    }

    fn require_field(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "{field} is empty: set PRO_{} or add {field} to pro.toml",
                field.to_uppercase()
            )));
        }
        Ok(())
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a required configuration field is empty.
    #[error("missing configuration field: {0}")]
    MissingField(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::EnvGuard;
    use rstest::rstest;

    #[rstest]
    fn defaults_name_plain_binaries() {
        let config = ProConfig::from_path_lookup();

        assert_eq!(config.doctl_bin, "doctl");
        assert_eq!(config.fzf_bin, "fzf");
        assert_eq!(config.ssh_bin, "ssh");
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::doctl(|cfg: &mut ProConfig| cfg.doctl_bin.clear(), "PRO_DOCTL_BIN", "doctl_bin")]
    #[case::fzf(|cfg: &mut ProConfig| cfg.fzf_bin = String::from("  "), "PRO_FZF_BIN", "fzf_bin")]
    #[case::ssh(|cfg: &mut ProConfig| cfg.ssh_bin.clear(), "PRO_SSH_BIN", "ssh_bin")]
    fn validation_errors_are_actionable(
        #[case] mutate: fn(&mut ProConfig),
        #[case] env_var: &str,
        #[case] toml_key: &str,
    ) {
        let mut config = ProConfig::from_path_lookup();
        mutate(&mut config);

        let message = config
            .validate()
            .expect_err("blank path should fail")
            .to_string();
        assert!(message.contains(env_var), "message: {message}");
        assert!(message.contains(toml_key), "message: {message}");
        assert!(message.contains("pro.toml"), "message: {message}");
    }

    #[rstest]
    fn environment_overrides_binary_paths() {
        let _guard = EnvGuard::set_vars(&[
            ("PRO_DOCTL_BIN", "/opt/bin/doctl"),
            ("PRO_SSH_BIN", "/usr/local/bin/ssh"),
        ]);

        let config = ProConfig::load_without_cli_args().expect("config should load");

        assert_eq!(config.doctl_bin, "/opt/bin/doctl");
        assert_eq!(config.ssh_bin, "/usr/local/bin/ssh");
        assert_eq!(config.fzf_bin, "fzf");
    }
}
