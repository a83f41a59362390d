//! Fixed-width blocks from big integers.
//!
//! `BigUint::to_bytes_be` drops leading zero bytes, while blobs and encoded
//! messages are always exactly as wide as the modulus. The helpers here put
//! the dropped zeros back.

use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{CryptoError, Result};

/// Copies `input` into the low end of a zeroed block of `width` bytes.
#[inline]
fn fill_block(input: &[u8], width: usize) -> Result<Vec<u8>> {
    let offset = width
        .checked_sub(input.len())
        .ok_or(CryptoError::InvalidPadLen)?;

    let mut block = vec![0u8; width];
    block[offset..].copy_from_slice(input);
    Ok(block)
}

/// Serializes the output of the private-key operation as a blob of `width`
/// bytes.
#[inline]
pub(crate) fn uint_to_block(input: BigUint, width: usize) -> Result<Vec<u8>> {
    fill_block(&input.to_bytes_be(), width)
}

/// Serializes the output of the public-key operation as an encoded message
/// of `width` bytes, so the `00 01` header is back in place for unpadding.
///
/// The encoded message holds the payload, so every buffer along the way is
/// wiped on drop.
#[inline]
pub(crate) fn uint_to_zeroizing_block(
    input: BigUint,
    width: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let m = Zeroizing::new(input);
    let m = Zeroizing::new(m.to_bytes_be());
    fill_block(&m, width).map(Zeroizing::new)
}
