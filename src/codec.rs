//! Base62 encoding of byte strings as big integers.
//!
//! The input bytes are read as the big-endian representation of a
//! non-negative integer, which is then written out in base 62. Digit values
//! run `0-9`, then `a-z` (10-35), then `A-Z` (36-61).
//!
//! # Leading zero bytes
//!
//! The integer form has no notion of width, so leading `0x00` bytes are
//! dropped: `decode(&encode(&[0, 0, 1]))` yields `[1]`. Callers must not
//! rely on byte length surviving a round trip. Token bodies are ASCII
//! alphanumerics and never start with `0x00`, so they are unaffected.
//! Carrying an explicit length would change the wire format and is not done
//! here.

use num_bigint::BigUint;

use crate::error::{Result, TokenError};

const RADIX: u32 = 62;

/// Digit alphabet, indexed by digit value.
pub const DIGITS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encode bytes as a base62 string.
///
/// An empty or all-zero input encodes to `"0"`.
pub fn encode(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes)
        .to_radix_be(RADIX)
        .into_iter()
        .map(|d| DIGITS[usize::from(d)] as char)
        .collect()
}

/// Decode a base62 string back into big-endian bytes.
///
/// Fails with [`TokenError::Base62Parse`] on an empty string or any
/// character outside [`DIGITS`]. A zero value decodes to an empty vector.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let parse_error = || TokenError::Base62Parse {
        input: s.to_string(),
    };

    if s.is_empty() {
        return Err(parse_error());
    }

    let digits = s
        .bytes()
        .map(digit_value)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(parse_error)?;

    let value = BigUint::from_radix_be(&digits, RADIX).ok_or_else(parse_error)?;
    if value.bits() == 0 {
        return Ok(Vec::new());
    }

    Ok(value.to_bytes_be())
}

fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        b'A'..=b'Z' => Some(c - b'A' + 36),
        _ => None,
    }
}
