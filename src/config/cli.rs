use crate::config::toml_config::LaunchProfile;
use crate::config::CliConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl CliConfig {
    /// Defaults, then the TOML profile, then command-line overrides.
    pub fn load_profile(&self) -> Result<LaunchProfile> {
        let profile = match &self.config {
            Some(path) => {
                tracing::debug!("Loading launch profile from {}", path.display());
                LaunchProfile::from_file(path)?
            }
            None => LaunchProfile::default(),
        };

        let profile = self.apply_overrides(profile);
        profile.validate()?;
        Ok(profile)
    }

    pub fn apply_overrides(&self, mut profile: LaunchProfile) -> LaunchProfile {
        if let Some(expected) = &self.expected_service {
            profile.service.expected = expected.clone();
        }
        if let Some(var) = &self.identity_var {
            profile.service.identity_var = var.clone();
        }
        if let Some(var) = &self.host_var {
            profile.service.host_var = var.clone();
        }
        if let Some(var) = &self.port_var {
            profile.service.port_var = var.clone();
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bare_invocation_uses_defaults() {
        let cli = CliConfig::parse_from(["entrypoint"]);
        let profile = cli.load_profile().unwrap();

        assert_eq!(profile, LaunchProfile::default());
        assert!(!cli.dry_run);
        assert!(!cli.no_exec);
    }

    #[test]
    fn test_flags_override_profile_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nexpected = \"from-file\"\nport_var = \"APP_PORT\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "entrypoint",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--expected-service",
            "from-flag",
        ]);
        let profile = cli.load_profile().unwrap();

        assert_eq!(profile.service.expected, "from-flag");
        assert_eq!(profile.service.port_var, "APP_PORT");
        assert_eq!(profile.service.host_var, "HOST");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from(["entrypoint", "--identity-var", "BAD=NAME"]);
        assert!(cli.load_profile().is_err());
    }

    #[test]
    fn test_missing_profile_file_is_config_error() {
        let cli = CliConfig::parse_from(["entrypoint", "--config", "/nonexistent/entrypoint.toml"]);
        let err = cli.load_profile().unwrap_err();

        assert!(matches!(
            err,
            crate::utils::error::BootstrapError::ProfileReadError { .. }
        ));
        assert_eq!(err.exit_code(), 2);
    }
}
