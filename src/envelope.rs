//! Private-key encryption and public-key decryption of short payloads.
//!
//! The payload is wrapped into a PKCS#1 v1.5 type 1 block as described in
//! [RFC8017 § 9.2], without the DigestInfo prefix a signature would carry,
//! and run through the RSA private-key primitive. Anyone holding the public
//! key can invert the blob and strip the padding to get the payload back.
//!
//! Blobs are bit-for-bit the same as unprefixed PKCS#1 v1.5 signatures over
//! the payload, so they interoperate with other implementations of that
//! scheme.
//!
//! # Usage
//!
//! See [code example in the toplevel rustdoc](../index.html#usage).
//!
//! [RFC8017 § 9.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-9.2

mod blob;
mod decrypting_key;
mod encrypting_key;

pub use self::{blob::Blob, decrypting_key::DecryptingKey, encrypting_key::EncryptingKey};
pub use crate::algorithms::pkcs1v15::PaddingCheck;

use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::algorithms::pad::{uint_to_block, uint_to_zeroizing_block};
use crate::algorithms::pkcs1v15::*;
use crate::algorithms::rsa::{rsa_decrypt_and_check, rsa_encrypt};
use crate::dummy_rng::DummyRng;
use crate::errors::{Error, Result};
use crate::key::{self, RsaPrivateKey, RsaPublicKey};
use crate::traits::PublicKeyParts;

/// Knobs for [`decode_with_options`].
///
/// The default requires full-width blobs, strict padding and a non-empty
/// payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeOptions {
    allow_empty_payload: bool,
    require_full_width: bool,
    padding: PaddingCheck,
}

impl DecodeOptions {
    /// Default options.
    pub const fn new() -> Self {
        Self {
            allow_empty_payload: false,
            require_full_width: true,
            padding: PaddingCheck::Strict,
        }
    }

    /// Accept blocks that carry no payload after the separator.
    pub const fn allow_empty_payload(self, allow: bool) -> Self {
        Self {
            allow_empty_payload: allow,
            ..self
        }
    }

    /// Require the blob to be exactly as wide as the modulus. When disabled,
    /// shorter blobs are treated as if they had leading zero bytes. Blobs
    /// wider than the modulus are rejected either way.
    pub const fn require_full_width(self, require: bool) -> Self {
        Self {
            require_full_width: require,
            ..self
        }
    }

    /// How thoroughly the padding is checked.
    pub const fn padding(self, padding: PaddingCheck) -> Self {
        Self { padding, ..self }
    }

    /// Whether empty payloads are accepted.
    pub const fn allows_empty_payload(&self) -> bool {
        self.allow_empty_payload
    }

    /// Whether blobs must be exactly as wide as the modulus.
    pub const fn requires_full_width(&self) -> bool {
        self.require_full_width
    }

    /// Padding check performed on decode.
    pub const fn padding_check(&self) -> PaddingCheck {
        self.padding
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Encrypts `payload` with the private key.
///
/// The payload must not be empty and must be no longer than the modulus
/// size minus 11 bytes. The returned blob is exactly as wide as the modulus.
pub fn encode(priv_key: &RsaPrivateKey, payload: &[u8]) -> Result<Vec<u8>> {
    encrypt::<DummyRng>(None, priv_key, payload)
}

/// Like [`encode`], but blinds the private-key operation with randomness
/// drawn from `rng`. The output is the same.
pub fn encode_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    priv_key: &RsaPrivateKey,
    payload: &[u8],
) -> Result<Vec<u8>> {
    encrypt(Some(rng), priv_key, payload)
}

/// Recovers the payload of a blob produced by [`encode`] with the matching
/// private key, using the default [`DecodeOptions`].
pub fn decode(pub_key: &RsaPublicKey, blob: &[u8]) -> Result<Vec<u8>> {
    decode_with_options(pub_key, blob, &DecodeOptions::default())
}

/// Recovers the payload of a blob produced by [`encode`].
pub fn decode_with_options(
    pub_key: &RsaPublicKey,
    blob: &[u8],
    options: &DecodeOptions,
) -> Result<Vec<u8>> {
    decrypt(pub_key, blob, options).map_err(|err| {
        tracing::debug!("blob rejected: {}", err);
        err
    })
}

#[inline]
fn encrypt<R: CryptoRngCore + ?Sized>(
    rng: Option<&mut R>,
    priv_key: &RsaPrivateKey,
    payload: &[u8],
) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let k = priv_key.size();
    tracing::trace!(
        "encoding {} byte payload for a {} byte modulus",
        payload.len(),
        k
    );

    let em = pkcs1v15_type1_pad(payload, k)?;
    let m = BigUint::from_bytes_be(&em);

    uint_to_block(rsa_decrypt_and_check(priv_key, rng, &m)?, k)
}

#[inline]
fn decrypt(pub_key: &RsaPublicKey, blob: &[u8], options: &DecodeOptions) -> Result<Vec<u8>> {
    key::check_public_structure(pub_key)?;

    if blob.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let k = pub_key.size();
    if blob.len() > k || (options.require_full_width && blob.len() != k) {
        return Err(Error::InvalidBlobLength {
            expected: k,
            actual: blob.len(),
        });
    }

    let c = BigUint::from_bytes_be(blob);
    let em = uint_to_zeroizing_block(rsa_encrypt(pub_key, &c)?, k)?;
    let payload = pkcs1v15_type1_unpad(&em, options.padding)?;

    if payload.is_empty() && !options.allow_empty_payload {
        return Err(Error::EmptyPayload);
    }

    tracing::trace!("recovered {} byte payload", payload.len());

    Ok(payload.to_vec())
}
