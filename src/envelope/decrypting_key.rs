use super::{decode_with_options, Blob, DecodeOptions};
use crate::{traits::PublicDecryptor, Result, RsaPublicKey};
use alloc::vec::Vec;

/// Public-key decryption key, recovering payloads encrypted with the
/// matching [`EncryptingKey`](super::EncryptingKey).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptingKey {
    inner: RsaPublicKey,
    options: DecodeOptions,
}

impl DecryptingKey {
    /// Create a new decrypting key from an RSA public key.
    pub fn new(key: RsaPublicKey) -> Self {
        Self::with_options(key, DecodeOptions::default())
    }

    /// Create a new decrypting key which decodes with the given options.
    pub fn with_options(key: RsaPublicKey, options: DecodeOptions) -> Self {
        Self {
            inner: key,
            options,
        }
    }

    /// Options used when decoding.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Recover the payload carried by `blob`.
    pub fn decrypt_blob(&self, blob: &Blob) -> Result<Vec<u8>> {
        self.decrypt(blob.as_bytes())
    }
}

impl PublicDecryptor for DecryptingKey {
    fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>> {
        decode_with_options(&self.inner, blob, &self.options)
    }
}

impl AsRef<RsaPublicKey> for DecryptingKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl From<RsaPublicKey> for DecryptingKey {
    fn from(key: RsaPublicKey) -> Self {
        Self::new(key)
    }
}

impl From<DecryptingKey> for RsaPublicKey {
    fn from(key: DecryptingKey) -> Self {
        key.inner
    }
}
