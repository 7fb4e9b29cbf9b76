//! Self-validating secret tokens with an embedded checksum.
//!
//! This crate provides functionality for:
//! - Generating random alphanumeric tokens from a secure RNG
//! - Appending a CRC32-derived decimal checksum so corrupted or forged
//!   tokens can be rejected without a database lookup
//! - Rendering tokens raw or as base62 of the raw bytes, and parsing both
//!   forms back
//!
//! # Token Format
//!
//! Tokens follow the format: `{prefix}{payload}{checksum}`
//!
//! With the default config (30 payload characters, 6 checksum digits, no
//! prefix) a token matches `^[A-Za-z0-9]{30}[0-9]{6}$`.
//!
//! Example: `bzt_Zq3vN0pLk8WmX2rT5yB7cD9fG1hJ4s108278`
//!
//! The base62 form keeps the prefix literal and encodes only the body.
//!
//! # Example
//!
//! ```rust
//! use secret_token::{TokenConfig, TokenFactory, TokenError};
//!
//! let factory = TokenFactory::new(TokenConfig::new(30, 6, "bzt_").unwrap());
//!
//! // Generate a new token
//! let token = factory.new_token().unwrap();
//! assert!(token.to_string().starts_with("bzt_"));
//!
//! // Later, check a token presented by a client
//! let parsed = factory.from_string(&token.to_string()).unwrap();
//! assert_eq!(parsed, token);
//!
//! // Base62 form parses back to the same token
//! let parsed = factory.from_base62(&token.base62()).unwrap();
//! assert_eq!(parsed, token);
//!
//! // Anything else is rejected with the reason attached
//! let err = factory.from_string("bzt_not-a-token").unwrap_err();
//! assert!(matches!(err, TokenError::InvalidLength { .. }));
//! ```

mod checksum;
mod codec;
mod config;
mod error;
mod factory;
mod random;
mod token;

// Public re-exports
pub use checksum::{checksum, checksum_matches};
pub use codec::{decode as decode_base62, encode as encode_base62};
pub use config::{DEFAULT_CHECKSUM_LENGTH, DEFAULT_PAYLOAD_LENGTH, TokenConfig};
pub use error::{Result, TokenError};
pub use factory::TokenFactory;
pub use random::{ALPHABET, generate_payload};
pub use token::Token;
