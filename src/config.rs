//! Configuration management for the contact store.
//!
//! Settings are read from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Upper bound accepted for `CONTACT_STORE_MAX_ID_ATTEMPTS`.
pub const MAX_ID_ATTEMPTS_LIMIT: u32 = 64;

/// Configuration for a contact store and the demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory export files are written to (default: ".")
    pub export_dir: PathBuf,

    /// File stem used by the demo export (default: "contacts")
    pub export_name: String,

    /// How many identifiers to try before create gives up (default: 8)
    pub max_id_attempts: u32,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_STORE_EXPORT_DIR`: Export directory (default: ".")
    /// - `CONTACT_STORE_EXPORT_NAME`: Export file stem (default: "contacts")
    /// - `CONTACT_STORE_MAX_ID_ATTEMPTS`: ID regeneration attempts, 1-64 (default: 8)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let export_dir = env::var("CONTACT_STORE_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        let export_name =
            env::var("CONTACT_STORE_EXPORT_NAME").unwrap_or(defaults.export_name);
        if export_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_STORE_EXPORT_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_id_attempts =
            Self::parse_env_u32("CONTACT_STORE_MAX_ID_ATTEMPTS", defaults.max_id_attempts)?;
        if max_id_attempts == 0 || max_id_attempts > MAX_ID_ATTEMPTS_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_STORE_MAX_ID_ATTEMPTS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_ID_ATTEMPTS_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            export_dir,
            export_name,
            max_id_attempts,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_dir: PathBuf::from("."),
            export_name: "contacts".to_string(),
            max_id_attempts: 8,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "CONTACT_STORE_EXPORT_DIR",
        "CONTACT_STORE_EXPORT_NAME",
        "CONTACT_STORE_MAX_ID_ATTEMPTS",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.export_name, "contacts");
        assert_eq!(config.max_id_attempts, 8);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.export_name, "contacts");
        assert_eq!(config.max_id_attempts, 8);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_STORE_EXPORT_DIR", "/tmp/exports");
        guard.set("CONTACT_STORE_EXPORT_NAME", "backup");
        guard.set("CONTACT_STORE_MAX_ID_ATTEMPTS", "3");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.export_name, "backup");
        assert_eq!(config.max_id_attempts, 3);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_blank_export_name() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_STORE_EXPORT_NAME", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_STORE_EXPORT_NAME");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_out_of_range_attempts() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_STORE_MAX_ID_ATTEMPTS", "0");
        assert!(Config::from_env().is_err());

        guard.set("CONTACT_STORE_MAX_ID_ATTEMPTS", "65");
        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_STORE_MAX_ID_ATTEMPTS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "not-a-number");

        let result = Config::parse_env_u32("TEST_U32_INVALID", 10);
        assert!(result.is_err());

        let result = Config::parse_env_u32("NONEXISTENT_U32", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
