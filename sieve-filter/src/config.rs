//! Filter builder configuration, read from the `[filter]` section of a TOML
//! file such as `sieve.toml`:
//!
//! ```toml
//! [filter]
//! duplicate-keys = "reject"      # or "first-wins"
//! max-values-per-key = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::FilterResult;

/// What to do when input keys collide case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeyPolicy {
    /// Fail the whole filter with a duplicate or ambiguous key error.
    #[default]
    Reject,
    /// Bind the first matching key in input order and drop the rest.
    FirstWins,
}

/// Settings for [`crate::FilterBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Upper bound on raw values accepted under one bound key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values_per_key: Option<usize>,
}

impl FilterConfig {
    /// Loads config from `path`, falling back to defaults with a warning if
    /// the file is missing, unreadable or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No filter config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded filter config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse filter config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read filter config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Parses config from TOML text. A missing `[filter]` section yields defaults.
    pub fn from_toml_str(contents: &str) -> FilterResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.filter)
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_max_values_per_key(mut self, limit: usize) -> Self {
        self.max_values_per_key = Some(limit);
        self
    }
}

/// Raw TOML structure matching the config file format.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    filter: FilterConfig,
}
