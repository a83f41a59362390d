//! RSA-related trait definitions.

mod envelope;
pub(crate) mod keys;

pub use envelope::{
    DecryptingKeypair, PrivateEncryptor, PublicDecryptor, RandomizedPrivateEncryptor,
};
pub use keys::{PrivateKeyParts, PublicKeyParts};
