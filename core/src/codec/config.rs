// ## 📂 File: `src/codec/config.rs`

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PASSPHRASE, MAX_CONTAINER_LEN, PASSPHRASE_ENV};
use crate::types::VacError;

fn default_max_container_len() -> u64 {
    MAX_CONTAINER_LEN
}

/// Explicit codec configuration, passed into every file-level call.
///
/// ```json
/// { "passphrase": "hello mario", "max_container_len": 1073741824 }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Passphrase the container key is derived from.
    pub passphrase: String,

    /// Largest input read into memory, in bytes.
    #[serde(default = "default_max_container_len")]
    pub max_container_len: u64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PASSPHRASE)
    }
}

impl fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecConfig")
            .field("passphrase", &"<redacted>")
            .field("max_container_len", &self.max_container_len)
            .finish()
    }
}

impl CodecConfig {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
            max_container_len: MAX_CONTAINER_LEN,
        }
    }

    pub fn with_max_container_len(mut self, max: u64) -> Self {
        self.max_container_len = max;
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, VacError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VacError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            VacError::Config(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Replace the passphrase with `VAC_PASSPHRASE` when it is set and non-empty.
    pub fn with_env_override(self) -> Self {
        match std::env::var(PASSPHRASE_ENV) {
            Ok(p) if !p.is_empty() => Self { passphrase: p, ..self },
            _ => self,
        }
    }

    pub fn validate(&self) -> Result<(), VacError> {
        if self.passphrase.is_empty() {
            return Err(VacError::Config("passphrase must not be empty".into()));
        }
        if self.max_container_len == 0 {
            return Err(VacError::Config("max_container_len must be non-zero".into()));
        }
        Ok(())
    }
}
