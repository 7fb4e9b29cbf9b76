//! CRC32-derived decimal checksums.

use subtle::ConstantTimeEq;

/// Compute a `width`-digit decimal checksum over `payload`.
///
/// The CRC-32 (IEEE) of the payload is written in decimal, left-padded with
/// zeros to at least `width` digits, and cut to its first `width` digits.
/// The most significant digits are the ones kept.
pub fn checksum(payload: &[u8], width: usize) -> String {
    let sum = crc32fast::hash(payload);
    let mut digits = format!("{sum:0width$}");
    digits.truncate(width);
    digits
}

/// Recompute the checksum of `payload` and compare it with `expected` in
/// constant time. The width is taken from `expected`.
pub fn checksum_matches(payload: &[u8], expected: &[u8]) -> bool {
    let computed = checksum(payload, expected.len());
    computed.as_bytes().ct_eq(expected).into()
}
