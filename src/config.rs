//! Configuration for token generation and validation.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Number of random characters in a token built from the default config.
pub const DEFAULT_PAYLOAD_LENGTH: usize = 30;
/// Number of checksum digits in a token built from the default config.
pub const DEFAULT_CHECKSUM_LENGTH: usize = 6;

const DEFAULT_PAYLOAD: NonZeroUsize = NonZeroUsize::new(DEFAULT_PAYLOAD_LENGTH).unwrap();
const DEFAULT_CHECKSUM: NonZeroUsize = NonZeroUsize::new(DEFAULT_CHECKSUM_LENGTH).unwrap();

/// Shape of the tokens a factory produces and accepts.
///
/// A token is `prefix + payload + checksum`, where the payload is
/// `payload_length` random alphanumeric characters and the checksum is
/// `checksum_length` decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Count of random alphanumeric characters.
    pub payload_length: NonZeroUsize,
    /// Count of decimal checksum digits.
    pub checksum_length: NonZeroUsize,
    /// Literal prefix (e.g. "bzt_"). Not randomized, not checksummed.
    pub prefix: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            payload_length: DEFAULT_PAYLOAD,
            checksum_length: DEFAULT_CHECKSUM,
            prefix: String::new(),
        }
    }
}

impl TokenConfig {
    /// Create a config, rejecting zero lengths.
    pub fn new(
        payload_length: usize,
        checksum_length: usize,
        prefix: impl Into<String>,
    ) -> Result<Self> {
        let payload_length = NonZeroUsize::new(payload_length)
            .ok_or(TokenError::InvalidConfig("payload_length must be > 0"))?;
        let checksum_length = NonZeroUsize::new(checksum_length)
            .ok_or(TokenError::InvalidConfig("checksum_length must be > 0"))?;
        Ok(Self {
            payload_length,
            checksum_length,
            prefix: prefix.into(),
        })
    }

    /// Replace the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Load a config from a YAML document. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TokenConfig = serde_yaml::from_str(yaml)?;
        log::debug!(
            "Loaded token config: payload_length={}, checksum_length={}, prefix={:?}",
            config.payload_length,
            config.checksum_length,
            config.prefix
        );
        Ok(config)
    }

    /// Length of everything after the prefix: payload plus checksum.
    pub fn expected_body_len(&self) -> usize {
        self.payload_length.get() + self.checksum_length.get()
    }

    /// Length of a complete token string.
    pub fn token_len(&self) -> usize {
        self.prefix.len() + self.expected_body_len()
    }
}
