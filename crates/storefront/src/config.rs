//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//!
//! - `STOREFRONT_DATA_PATH` - Store file location (default: `.sonero/store.json`)
//! - `STOREFRONT_KEY_PREFIX` - Prefix for storage keys (default: `sonero`)
//! - `STOREFRONT_QUOTA_BYTES` - Store size limit in bytes, `0` for unlimited
//!   (default: 5242880, the usual browser local storage limit)
//! - `STOREFRONT_SEED_FILE` - YAML seed file replacing the bundled presets

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StorageKeys;

const DEFAULT_DATA_PATH: &str = ".sonero/store.json";
const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Path of the store file
    pub data_path: PathBuf,
    /// Prefix for every storage key
    pub key_prefix: String,
    /// Store size limit in bytes (`None` = unlimited)
    pub quota_bytes: Option<usize>,
    /// Seed file overriding the bundled presets
    pub seed_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            key_prefix: StorageKeys::DEFAULT_PREFIX.to_string(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
            seed_file: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = PathBuf::from(get_or_default(&lookup, "STOREFRONT_DATA_PATH", DEFAULT_DATA_PATH));

        let key_prefix = get_or_default(&lookup, "STOREFRONT_KEY_PREFIX", StorageKeys::DEFAULT_PREFIX);
        if key_prefix.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_KEY_PREFIX".to_string(),
                "must not contain whitespace".to_string(),
            ));
        }

        let quota_bytes = match get_optional(&lookup, "STOREFRONT_QUOTA_BYTES") {
            Some(raw) => parse_quota(&raw)?,
            None => Some(DEFAULT_QUOTA_BYTES),
        };

        let seed_file = get_optional(&lookup, "STOREFRONT_SEED_FILE").map(PathBuf::from);

        Ok(Self {
            data_path,
            key_prefix,
            quota_bytes,
            seed_file,
        })
    }

    /// Storage keys derived from the configured prefix.
    #[must_use]
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.key_prefix)
    }
}

/// Get an optional variable, treating empty values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse a quota in bytes. `0` disables the limit.
fn parse_quota(raw: &str) -> Result<Option<usize>, ConfigError> {
    let bytes = raw.trim().parse::<usize>().map_err(|e| {
        ConfigError::InvalidEnvVar("STOREFRONT_QUOTA_BYTES".to_string(), e.to_string())
    })?;
    Ok((bytes > 0).then_some(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.storage_keys().catalog, "sonero_watches");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STOREFRONT_DATA_PATH", "/var/lib/sonero/store.json"),
            ("STOREFRONT_KEY_PREFIX", "demo"),
            ("STOREFRONT_QUOTA_BYTES", "1024"),
            ("STOREFRONT_SEED_FILE", "seed.yaml"),
        ])
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/var/lib/sonero/store.json"));
        assert_eq!(config.storage_keys().orders, "demo_orders");
        assert_eq!(config.quota_bytes, Some(1024));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.yaml")));
    }

    #[test]
    fn test_zero_quota_is_unlimited() {
        let config = config_from(&[("STOREFRONT_QUOTA_BYTES", "0")]).unwrap();
        assert_eq!(config.quota_bytes, None);
    }

    #[test]
    fn test_invalid_quota() {
        let err = config_from(&[("STOREFRONT_QUOTA_BYTES", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "STOREFRONT_QUOTA_BYTES"));
    }

    #[test]
    fn test_blank_prefix_falls_back_to_default() {
        let config = config_from(&[("STOREFRONT_KEY_PREFIX", "  ")]).unwrap();
        assert_eq!(config.key_prefix, "sonero");
    }

    #[test]
    fn test_prefix_with_whitespace_is_rejected() {
        assert!(config_from(&[("STOREFRONT_KEY_PREFIX", "my shop")]).is_err());
    }
}
