//! Optional TOML configuration.
//!
//! ```toml
//! # concord.toml
//! on_missing = "skip"
//! ```
//!
//! Values given on the command line take precedence over the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::agreement::MissingIdPolicy;
use crate::error::{Error, Result};

/// Settings that can be stored in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgreementConfig {
    /// Policy for reference ids missing from the comparison corpus
    #[serde(default)]
    pub on_missing: Option<MissingIdPolicy>,
}

impl AgreementConfig {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Effective missing-id policy: the flag if given, else the file, else
    /// the default.
    pub fn missing_id_policy(&self, flag: Option<MissingIdPolicy>) -> MissingIdPolicy {
        flag.or(self.on_missing).unwrap_or_default()
    }
}
