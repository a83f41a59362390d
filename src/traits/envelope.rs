//! Private-key encryption and public-key decryption traits.

use alloc::vec::Vec;
use rand_core::CryptoRngCore;

use crate::errors::Result;

/// Encrypt a payload with the private half of a keypair.
pub trait PrivateEncryptor {
    /// Encrypt the given payload.
    fn encrypt(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Encrypt a payload with the private half of a keypair, blinding the
/// exponentiation with the provided random source.
pub trait RandomizedPrivateEncryptor {
    /// Encrypt the given payload.
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        payload: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Recover a payload with the public half of a keypair.
pub trait PublicDecryptor {
    /// Decrypt the given blob.
    fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>>;
}

/// Encryption keypair with an associated decryption key.
pub trait DecryptingKeypair {
    /// Decrypting key type for this keypair.
    type DecryptingKey: Clone;

    /// Get the decrypting key which can recover payloads encrypted by the
    /// encrypting key portion of this keypair.
    fn decrypting_key(&self) -> Self::DecryptingKey;
}
