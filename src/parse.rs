//! Key parsing from PEM containers and raw DER.
//!
//! Only the first PEM block of the input is looked at. Text in front of it
//! and any blocks after it are ignored. The block body may be wrapped at any
//! line length, and `Name: value` header lines in front of it are skipped.

#[cfg(feature = "pem")]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "pem")]
use base64ct::{Base64, Encoding};
#[cfg(feature = "pem")]
use pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
#[cfg(feature = "pem")]
use zeroize::Zeroizing;
use pkcs8::{DecodePrivateKey, DecodePublicKey};

use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};

#[cfg(feature = "pem")]
const BEGIN: &[u8] = b"-----BEGIN ";
#[cfg(feature = "pem")]
const END: &[u8] = b"-----END ";
#[cfg(feature = "pem")]
const DASHES: &[u8] = b"-----";

#[cfg(feature = "pem")]
const SPKI_LABEL: &str = "PUBLIC KEY";
#[cfg(feature = "pem")]
const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";
#[cfg(feature = "pem")]
const PKCS8_LABEL: &str = "PRIVATE KEY";
#[cfg(feature = "pem")]
const PKCS1_PRIVATE_LABEL: &str = "RSA PRIVATE KEY";

/// An RSA key decoded from a PEM block, tagged by its kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyMaterial {
    /// Public key from a `PUBLIC KEY` or `RSA PUBLIC KEY` block.
    Public(RsaPublicKey),

    /// Private key from a `PRIVATE KEY` or `RSA PRIVATE KEY` block.
    Private(RsaPrivateKey),
}

impl KeyMaterial {
    /// Returns the public key, failing with [`Error::UnsupportedKeyEncoding`]
    /// for private key material.
    pub fn into_public(self) -> Result<RsaPublicKey> {
        match self {
            KeyMaterial::Public(key) => Ok(key),
            KeyMaterial::Private(_) => Err(Error::UnsupportedKeyEncoding),
        }
    }

    /// Returns the private key, failing with [`Error::UnsupportedKeyEncoding`]
    /// for public key material.
    pub fn into_private(self) -> Result<RsaPrivateKey> {
        match self {
            KeyMaterial::Private(key) => Ok(key),
            KeyMaterial::Public(_) => Err(Error::UnsupportedKeyEncoding),
        }
    }

    /// Public half of the key, whichever kind was parsed.
    pub fn to_public_key(&self) -> RsaPublicKey {
        match self {
            KeyMaterial::Public(key) => key.clone(),
            KeyMaterial::Private(key) => key.to_public_key(),
        }
    }

    /// Returns true if the block held a private key.
    pub fn is_private(&self) -> bool {
        matches!(self, KeyMaterial::Private(_))
    }
}

/// Parse the first PEM block of `encoded` into a public or private key,
/// depending on the block's label.
#[cfg(feature = "pem")]
pub fn parse_key(encoded: &[u8]) -> Result<KeyMaterial> {
    let block = first_block(encoded).ok_or(Error::MalformedContainer)?;
    let (label, der) = decode_block(block).ok_or(Error::MalformedContainer)?;
    let der = Zeroizing::new(der);

    tracing::debug!("decoded PEM block labelled {:?} ({} bytes)", label, der.len());

    let key = match label {
        SPKI_LABEL => KeyMaterial::Public(RsaPublicKey::from_public_key_der(&der)?),
        PKCS1_PUBLIC_LABEL => KeyMaterial::Public(RsaPublicKey::from_pkcs1_der(&der)?),
        PKCS8_LABEL => KeyMaterial::Private(RsaPrivateKey::from_pkcs8_der(&der)?),
        PKCS1_PRIVATE_LABEL => KeyMaterial::Private(RsaPrivateKey::from_pkcs1_der(&der)?),
        _ => {
            tracing::debug!("rejecting PEM block labelled {:?}", label);
            return Err(Error::UnsupportedKeyEncoding);
        }
    };

    Ok(key)
}

/// Parse an RSA public key from the first PEM block of `encoded`.
///
/// Accepts `PUBLIC KEY` (SubjectPublicKeyInfo) and `RSA PUBLIC KEY` (PKCS#1)
/// blocks.
#[cfg(feature = "pem")]
pub fn parse_public_key(encoded: &[u8]) -> Result<RsaPublicKey> {
    parse_key(encoded)?.into_public()
}

/// Parse an RSA private key from the first PEM block of `encoded`.
///
/// Accepts `PRIVATE KEY` (PKCS#8) and `RSA PRIVATE KEY` (PKCS#1) blocks.
#[cfg(feature = "pem")]
pub fn parse_private_key(encoded: &[u8]) -> Result<RsaPrivateKey> {
    parse_key(encoded)?.into_private()
}

/// Parse an RSA public key from a DER encoded SubjectPublicKeyInfo.
pub fn parse_public_key_der(der: &[u8]) -> Result<RsaPublicKey> {
    Ok(RsaPublicKey::from_public_key_der(der)?)
}

/// Parse an RSA private key from a DER encoded PKCS#8 PrivateKeyInfo.
pub fn parse_private_key_der(der: &[u8]) -> Result<RsaPrivateKey> {
    Ok(RsaPrivateKey::from_pkcs8_der(der)?)
}

/// Slice covering the first `-----BEGIN ...-----` through the matching
/// `-----END ...-----` line.
#[cfg(feature = "pem")]
fn first_block(input: &[u8]) -> Option<&[u8]> {
    let start = find(input, BEGIN)?;
    let body = start + BEGIN.len();
    let end = body + find(&input[body..], END)?;
    let label_start = end + END.len();
    let stop = label_start + find(&input[label_start..], DASHES)? + DASHES.len();

    Some(&input[start..stop])
}

/// Label and decoded body of a block returned by [`first_block`].
///
/// The `-----END` label has to match the `-----BEGIN` one.
#[cfg(feature = "pem")]
fn decode_block(block: &[u8]) -> Option<(&str, Vec<u8>)> {
    let text = core::str::from_utf8(block).ok()?;
    let mut lines = text.lines();
    let label = lines
        .next()?
        .trim_end()
        .strip_prefix("-----BEGIN ")?
        .strip_suffix("-----")?;

    let mut body = Zeroizing::new(String::new());
    let mut in_headers = true;

    for line in lines {
        let line = line.trim();

        if let Some(end) = line.strip_prefix("-----END ") {
            if end.strip_suffix("-----")? != label {
                return None;
            }

            let der = Base64::decode_vec(&body).ok()?;
            return Some((label, der));
        }

        if in_headers && line.contains(':') {
            continue;
        }
        in_headers = false;

        for chunk in line.split_whitespace() {
            body.push_str(chunk);
        }
    }

    None
}

#[cfg(feature = "pem")]
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
