use super::{encode, encode_with_rng, Blob, DecryptingKey};
use crate::{
    traits::{DecryptingKeypair, PrivateEncryptor, RandomizedPrivateEncryptor},
    Result, RsaPrivateKey,
};
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use signature::{Keypair, RandomizedSigner, Signer};
use zeroize::ZeroizeOnDrop;

/// Private-key encryption key.
///
/// Also usable as a [`Signer`] producing unprefixed PKCS#1 v1.5 signatures
/// over the raw message, which is what the encryption amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptingKey {
    inner: RsaPrivateKey,
}

impl EncryptingKey {
    /// Create a new encrypting key from an RSA private key.
    pub fn new(key: RsaPrivateKey) -> Self {
        Self { inner: key }
    }
}

impl PrivateEncryptor for EncryptingKey {
    fn encrypt(&self, payload: &[u8]) -> Result<Vec<u8>> {
        encode(&self.inner, payload)
    }
}

impl RandomizedPrivateEncryptor for EncryptingKey {
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        payload: &[u8],
    ) -> Result<Vec<u8>> {
        encode_with_rng(rng, &self.inner, payload)
    }
}

impl DecryptingKeypair for EncryptingKey {
    type DecryptingKey = DecryptingKey;

    fn decrypting_key(&self) -> DecryptingKey {
        DecryptingKey::new(self.inner.to_public_key())
    }
}

//
// `*Signer` trait impls
//

impl Signer<Blob> for EncryptingKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Blob> {
        encode(&self.inner, msg)?.try_into()
    }
}

impl RandomizedSigner<Blob> for EncryptingKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Blob> {
        encode_with_rng(rng, &self.inner, msg)?.try_into()
    }
}

//
// Other trait impls
//

impl Keypair for EncryptingKey {
    type VerifyingKey = DecryptingKey;

    fn verifying_key(&self) -> DecryptingKey {
        self.decrypting_key()
    }
}

impl AsRef<RsaPrivateKey> for EncryptingKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl From<RsaPrivateKey> for EncryptingKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self::new(key)
    }
}

impl From<EncryptingKey> for RsaPrivateKey {
    fn from(key: EncryptingKey) -> Self {
        key.inner
    }
}

impl ZeroizeOnDrop for EncryptingKey {}
