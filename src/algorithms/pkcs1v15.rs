//! PKCS#1 v1.5 block type 1 as described in [RFC8017 § 9.2], without the
//! DigestInfo wrapping: the payload is carried as-is.
//!
//! [RFC8017 § 9.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-9.2

use alloc::vec::Vec;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Bytes taken by the block header, the shortest padding string and the
/// separator.
pub(crate) const PKCS1V15_OVERHEAD: usize = 11;

/// Shortest padding string a well-formed block carries.
const MIN_PS_LEN: usize = 8;

/// Last padding byte followed by the separator.
const MARKER: [u8; 2] = [0xff, 0x00];

/// How much of the block structure is verified when stripping the padding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaddingCheck {
    /// Require the `0x00 0x01` header and a padding string of at least eight
    /// `0xFF` bytes in front of the separator.
    #[default]
    Strict,

    /// Only locate the separator: everything after the first `0xFF 0x00`
    /// found at or after offset 2 is the payload.
    Lenient,
}

/// Largest payload a block of `k` bytes can carry.
#[inline]
pub(crate) fn pkcs1v15_max_payload_len(k: usize) -> usize {
    k.saturating_sub(PKCS1V15_OVERHEAD)
}

/// Applies the type 1 padding. The payload must be no longer than `k - 11`.
#[inline]
pub(crate) fn pkcs1v15_type1_pad(payload: &[u8], k: usize) -> Result<Zeroizing<Vec<u8>>> {
    let max = pkcs1v15_max_payload_len(k);
    if payload.len() > max || k < PKCS1V15_OVERHEAD {
        return Err(Error::PayloadTooLarge {
            len: payload.len(),
            max,
        });
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || M
    let mut em = Zeroizing::new(vec![0xff; k]);
    em[0] = 0;
    em[1] = 1;
    em[k - payload.len() - 1] = 0;
    em[k - payload.len()..].copy_from_slice(payload);

    Ok(em)
}

/// Strips the type 1 padding from a full-width block and returns the payload.
///
/// The payload starts right after the first `0xFF 0x00` at or after offset 2.
/// Since the padding string consists of `0xFF` bytes only, that marker is the
/// separator of any well-formed block, whatever the payload contains.
#[inline]
pub(crate) fn pkcs1v15_type1_unpad(em: &[u8], check: PaddingCheck) -> Result<&[u8]> {
    // offset of the separator
    let sep = em
        .get(2..)
        .and_then(|body| body.windows(MARKER.len()).position(|w| w == MARKER))
        .map(|i| i + 2 + 1)
        .ok_or(Error::MalformedPadding)?;

    if check == PaddingCheck::Strict {
        let ps = &em[2..sep];

        let mut ok = em[0].ct_eq(&0u8);
        ok &= em[1].ct_eq(&1u8);
        ok &= Choice::from((ps.len() >= MIN_PS_LEN) as u8);
        for el in ps {
            ok &= el.ct_eq(&0xff);
        }

        if ok.unwrap_u8() != 1 {
            return Err(Error::MalformedPadding);
        }
    }

    Ok(&em[sep + 1..])
}
