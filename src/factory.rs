//! Token generation and parsing against a fixed configuration.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::checksum::{checksum, checksum_matches};
use crate::codec;
use crate::config::TokenConfig;
use crate::error::{Result, TokenError};
use crate::random::generate_payload;
use crate::token::Token;

/// Produces and validates tokens of one shape.
///
/// The factory holds nothing but its [`TokenConfig`] and never mutates it, so
/// a single instance can be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TokenFactory {
    config: TokenConfig,
}

impl TokenFactory {
    /// Create a factory bound to `config`.
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// The configuration this factory was built with.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Generate a new token from the operating system's secure RNG.
    ///
    /// Fails only when the OS cannot supply entropy.
    pub fn new_token(&self) -> Result<Token> {
        self.new_token_with_rng(&mut OsRng)
    }

    /// Generate a new token from the given secure RNG.
    pub fn new_token_with_rng<R>(&self, rng: &mut R) -> Result<Token>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let payload = generate_payload(rng, self.config.payload_length.get())
            .inspect_err(|e| log::error!("Failed to generate token payload: {}", e))?;
        let checksum = self.checksum(payload.as_bytes());

        log::trace!(
            "Generated token with prefix {:?} ({} bytes)",
            self.config.prefix,
            self.config.token_len()
        );

        Ok(Token::new(self.config.prefix.clone(), payload, checksum))
    }

    /// Parse a token from its raw `prefix + payload + checksum` form and
    /// verify it.
    pub fn from_string(&self, s: &str) -> Result<Token> {
        self.parse(s, |body| Ok(body.to_vec()))
    }

    /// Parse a token whose body (everything after the prefix) is base62
    /// encoded, and verify it.
    pub fn from_base62(&self, s: &str) -> Result<Token> {
        self.parse(s, |body| match std::str::from_utf8(body) {
            Ok(text) => codec::decode(text),
            Err(_) => Err(TokenError::Base62Parse {
                input: String::from_utf8_lossy(body).into_owned(),
            }),
        })
    }

    /// Compute the checksum of `payload` using this factory's width.
    pub fn checksum(&self, payload: &[u8]) -> String {
        checksum(payload, self.config.checksum_length.get())
    }

    /// Returns true if the token's checksum has this factory's width and
    /// matches its payload.
    pub fn validate(&self, token: &Token) -> bool {
        token.checksum().len() == self.config.checksum_length.get()
            && checksum_matches(token.payload().as_bytes(), token.checksum().as_bytes())
    }

    fn parse<F>(&self, s: &str, decode: F) -> Result<Token>
    where
        F: FnOnce(&[u8]) -> Result<Vec<u8>>,
    {
        self.try_parse(s, decode).inspect_err(|e| {
            log::debug!(
                "Rejected token (prefix {:?}): {}",
                self.config.prefix,
                e.kind()
            )
        })
    }

    /// Checks run in a fixed order and stop at the first failure:
    /// decode, body length, prefix, checksum. A payload whose bytes are not
    /// valid UTF-8 cannot be rendered and is rejected last.
    fn try_parse<F>(&self, s: &str, decode: F) -> Result<Token>
    where
        F: FnOnce(&[u8]) -> Result<Vec<u8>>,
    {
        let expected = self.config.expected_body_len();

        // Byte-offset split; input shorter than the prefix has no body at all
        let Some((prefix, body)) = s.as_bytes().split_at_checked(self.config.prefix.len()) else {
            return Err(TokenError::InvalidLength { expected, got: 0 });
        };

        let body = Zeroizing::new(decode(body)?);

        if body.len() != expected {
            return Err(TokenError::InvalidLength {
                expected,
                got: body.len(),
            });
        }

        if prefix != self.config.prefix.as_bytes() {
            return Err(TokenError::InvalidPrefix {
                expected: self.config.prefix.clone(),
                got: String::from_utf8_lossy(prefix).into_owned(),
            });
        }

        let (payload, sum) = body.split_at(self.config.payload_length.get());
        if !checksum_matches(payload, sum) {
            return Err(TokenError::InvalidChecksum);
        }

        // A decoded base62 body can carry bytes that are not text
        let payload = std::str::from_utf8(payload).map_err(|_| TokenError::InvalidPayload)?;
        let sum = std::str::from_utf8(sum).map_err(|_| TokenError::InvalidPayload)?;

        Ok(Token::new(
            self.config.prefix.clone(),
            payload.to_owned(),
            sum.to_owned(),
        ))
    }
}
