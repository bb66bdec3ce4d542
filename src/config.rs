//! Signer configuration.
//!
//! Configuration picks the algorithm, payload format and default freshness
//! window. The secret itself is never stored in configuration: only the
//! name of the environment variable that holds it.
//!
//! # Example (TOML, requires `config-file`)
//!
//! ```toml
//! algorithm = "hmac-sha256"
//! format = "json"
//! max_age_ms = 3600000
//! key_env = "SIGNET_SECRET_KEY"
//! ```

use crate::codec::PayloadFormat;
use crate::error::{Error, Result};
use crate::key::SecretKey;
use crate::mac::MacAlgorithm;
use crate::signer::Signer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default environment variable holding the secret key.
pub const DEFAULT_KEY_ENV: &str = "SIGNET_SECRET_KEY";

/// Settings for building a [`Signer`] at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignerConfig {
    /// MAC algorithm.
    pub algorithm: MacAlgorithm,
    /// Payload serialization format.
    pub format: PayloadFormat,
    /// Default maximum token age in milliseconds; 0 disables expiry.
    pub max_age_ms: u64,
    /// Environment variable holding the secret key.
    pub key_env: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            algorithm: MacAlgorithm::default(),
            format: PayloadFormat::default(),
            max_age_ms: 0,
            key_env: DEFAULT_KEY_ENV.to_string(),
        }
    }
}

impl SignerConfig {
    /// Parses a TOML document.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// The configured default maximum age.
    #[must_use]
    pub const fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms)
    }

    /// Reads the secret key from [`key_env`](Self::key_env).
    ///
    /// Fails with [`Error::Config`] if the variable is unset or not UTF-8,
    /// and with [`Error::InvalidKey`] if it is empty.
    pub fn load_key(&self) -> Result<SecretKey> {
        let value = std::env::var(&self.key_env)
            .map_err(|e| Error::Config(format!("{}: {e}", self.key_env)))?;
        SecretKey::new(value.into_bytes())
    }

    /// Builds a wall-clock signer with this configuration.
    pub fn build_signer(&self, key: SecretKey) -> Result<Signer<PayloadFormat>> {
        Signer::builder(key)
            .algorithm(self.algorithm)
            .format(self.format)
            .build()
    }
}
