//! Random payload generation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Result, TokenError};

/// Characters a payload is drawn from: digits, uppercase, lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generate `n` random alphanumeric characters.
///
/// Each byte from the RNG is reduced modulo 62 onto [`ALPHABET`]. Since
/// 256 is not a multiple of 62, the first eight symbols (`0`-`7`) come up
/// slightly more often than the rest. Tokens already in circulation rely on
/// this mapping, so it is kept as is.
///
/// Fails with [`TokenError::RandomSource`] when the RNG cannot supply
/// entropy. There is no fallback source.
pub fn generate_payload<R>(rng: &mut R, n: usize) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut bytes = vec![0u8; n];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        bytes.zeroize();
        return Err(TokenError::RandomSource(e));
    }

    let payload = bytes
        .iter()
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect();
    bytes.zeroize();

    Ok(payload)
}
