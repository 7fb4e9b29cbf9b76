//! The token entity.

use std::fmt;

use zeroize::Zeroize;

use crate::codec;

/// A generated or parsed token that passed every structural and checksum
/// check.
///
/// Only a [`TokenFactory`](crate::TokenFactory) builds tokens, so holding a
/// `Token` means it is well-formed for the factory that produced it. The
/// `Display` form is `prefix + payload + checksum`.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    prefix: String,
    payload: String,
    checksum: String,
}

impl Token {
    pub(crate) fn new(prefix: String, payload: String, checksum: String) -> Self {
        Self {
            prefix,
            payload,
            checksum,
        }
    }

    /// The literal prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The random portion of the token.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The checksum digits.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Prefix followed by the base62 encoding of payload and checksum.
    pub fn base62(&self) -> String {
        let mut body = Vec::with_capacity(self.payload.len() + self.checksum.len());
        body.extend_from_slice(self.payload.as_bytes());
        body.extend_from_slice(self.checksum.as_bytes());
        let encoded = codec::encode(&body);
        body.zeroize();

        format!("{}{}", self.prefix, encoded)
    }

    /// Length of the `Display` form in bytes.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.payload.len() + self.checksum.len()
    }

    /// True when prefix, payload and checksum are all empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.payload, self.checksum)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("prefix", &self.prefix)
            .field("payload", &"<redacted>")
            .field("checksum", &self.checksum)
            .finish()
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        // Clear the secret from memory when dropped
        self.payload.zeroize();
    }
}
