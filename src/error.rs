//! Error types for token operations.

use thiserror::Error;

/// Errors that can occur while generating, parsing or configuring tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The secure random source could not supply entropy.
    #[error("Random source unavailable: {0}")]
    RandomSource(#[source] rand::Error),

    /// Token body (everything after the prefix) has the wrong length.
    #[error("Invalid length: expected {expected} bytes after prefix, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Token prefix doesn't match the configured value.
    #[error("Invalid prefix: expected '{expected}', got '{got}'")]
    InvalidPrefix { expected: String, got: String },

    /// Recomputed checksum doesn't match the one carried by the token.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// Input contains characters outside the base62 alphabet.
    #[error("Cannot parse base62: {input:?}")]
    Base62Parse { input: String },

    /// Payload bytes are not valid UTF-8 and cannot be rendered as text.
    #[error("Invalid payload: not valid UTF-8")]
    InvalidPayload,

    /// Configuration values violate an invariant.
    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),

    /// Configuration document could not be parsed.
    #[error("Cannot parse config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl TokenError {
    /// True when the error describes a malformed or forged token string, as
    /// opposed to a problem with the environment or configuration.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidLength { .. }
                | TokenError::InvalidPrefix { .. }
                | TokenError::InvalidChecksum
                | TokenError::Base62Parse { .. }
                | TokenError::InvalidPayload
        )
    }

    /// Short, stable name of the error kind. Never includes token material,
    /// so it is safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::RandomSource(_) => "random_source",
            TokenError::InvalidLength { .. } => "invalid_length",
            TokenError::InvalidPrefix { .. } => "invalid_prefix",
            TokenError::InvalidChecksum => "invalid_checksum",
            TokenError::Base62Parse { .. } => "base62_parse",
            TokenError::InvalidPayload => "invalid_payload",
            TokenError::InvalidConfig(_) => "invalid_config",
            TokenError::Config(_) => "config",
        }
    }
}

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
