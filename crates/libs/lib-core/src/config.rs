//! # Application Configuration
//!
//! This module manages the deletion-service configuration loaded from environment
//! variables. All configuration is validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `sqlite:data/expenzez_site.db` |
//! | `DELETION_RETENTION_DAYS` | `30` |
//! | `DELETION_SWEEP_INTERVAL_SECS` | `3600` |

use lib_utils::envs::{self, get_env_or, get_env_parse_or};

/// Longest retention the published privacy policy allows.
pub const MAX_RETENTION_DAYS: u32 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Days between accepting a deletion request and erasing the account data
    ///
    /// Valid range: 1-30 days
    pub retention_days: u32,

    /// Seconds between sweeps for requests whose purge deadline has passed
    pub sweep_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/expenzez_site.db".to_string(),
            retention_days: MAX_RETENTION_DAYS,
            sweep_interval_secs: 3600,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envs::Error> {
        let defaults = Self::default();

        Ok(Self {
            database_url: get_env_or("DATABASE_URL", &defaults.database_url),
            retention_days: get_env_parse_or("DELETION_RETENTION_DAYS", defaults.retention_days)?,
            sweep_interval_secs: get_env_parse_or(
                "DELETION_SWEEP_INTERVAL_SECS",
                defaults.sweep_interval_secs,
            )?,
        })
    }

    /// Validate configuration values against the published deletion policy.
    pub fn validate(&self) -> Result<(), String> {
        if self.retention_days < 1 || self.retention_days > MAX_RETENTION_DAYS {
            return Err(format!(
                "DELETION_RETENTION_DAYS must be between 1 and {}",
                MAX_RETENTION_DAYS
            ));
        }

        if self.sweep_interval_secs < 1 {
            return Err("DELETION_SWEEP_INTERVAL_SECS must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_retention_beyond_policy_rejected() {
        let config = Config {
            retention_days: 31,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            retention_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        let config = Config {
            sweep_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err("DELETION_SWEEP_INTERVAL_SECS must be at least 1".to_string())
        );
    }
}
