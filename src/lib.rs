#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Encrypting with the private key
//!
#![cfg_attr(feature = "pem", doc = "```")]
#![cfg_attr(not(feature = "pem"), doc = "```ignore")]
//! use rsa_privenc::{decode, encode, parse_private_key, parse_public_key};
//!
//! let private_key = parse_private_key(include_bytes!("../tests/keys/rsa2048-priv.pem"))
//!     .expect("failed to parse private key");
//! let public_key = parse_public_key(include_bytes!("../tests/keys/rsa2048-pub.pem"))
//!     .expect("failed to parse public key");
//!
//! // Encrypt
//! let session_key = b"e!Ym1D6n,N7JcdQMV04hh2B71bqaKMZq";
//! let blob = encode(&private_key, session_key).expect("failed to encrypt");
//! assert_eq!(blob.len(), 256);
//!
//! // Decrypt
//! let payload = decode(&public_key, &blob).expect("failed to decrypt");
//! assert_eq!(&payload[..], &session_key[..]);
//! ```
//!
//! ## Typed keys
//!
//! [`envelope::EncryptingKey`] and [`envelope::DecryptingKey`] wrap the key
//! types. The encrypting key doubles as a [`signature::Signer`] producing
//! [`envelope::Blob`]s, which are unprefixed PKCS#1 v1.5 signatures.
//!
//! ```
//! use rsa_privenc::envelope::{Blob, DecodeOptions, DecryptingKey, EncryptingKey, PaddingCheck};
//! use rsa_privenc::signature::{Keypair, RandomizedSigner};
//! use rsa_privenc::traits::{PrivateEncryptor, PublicDecryptor};
//! # use rsa_privenc::{pkcs8::DecodePrivateKey, RsaPrivateKey};
//! # let der = include_bytes!("../tests/keys/rsa2048-priv.der");
//! # let private_key = RsaPrivateKey::from_pkcs8_der(der).unwrap();
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let encrypting_key = EncryptingKey::new(private_key);
//! let decrypting_key: DecryptingKey = encrypting_key.verifying_key();
//!
//! let blob: Blob = encrypting_key.sign_with_rng(&mut rng, b"hello world");
//! assert_eq!(decrypting_key.decrypt_blob(&blob).unwrap(), b"hello world");
//!
//! let bytes = encrypting_key.encrypt(b"hello world").unwrap();
//! assert_eq!(bytes, blob.as_bytes());
//!
//! let lenient = DecryptingKey::with_options(
//!     decrypting_key.into(),
//!     DecodeOptions::new().padding(PaddingCheck::Lenient),
//! );
//! assert_eq!(lenient.decrypt(&bytes).unwrap(), b"hello world");
//! ```
//!
//! ## Key formats
//!
//! [`parse_key`] looks at the first PEM block of its input and picks the
//! inner encoding from the block's label:
//!
//! | label             | encoding                     |
//! |-------------------|------------------------------|
//! | `PUBLIC KEY`      | X.509 SubjectPublicKeyInfo   |
//! | `RSA PUBLIC KEY`  | PKCS#1 `RSAPublicKey`        |
//! | `PRIVATE KEY`     | PKCS#8 `PrivateKeyInfo`      |
//! | `RSA PRIVATE KEY` | PKCS#1 `RSAPrivateKey`       |
//!
//! Keys are also decodable through the [`pkcs1`] and [`pkcs8`] traits, both of
//! which are re-exported from the toplevel of this crate:
//!
//! - [`pkcs1::DecodeRsaPrivateKey`]: decode RSA private keys from PKCS#1
//! - [`pkcs1::DecodeRsaPublicKey`]: decode RSA public keys from PKCS#1
//! - [`pkcs8::DecodePrivateKey`]: decode private keys from PKCS#8
//! - [`pkcs8::DecodePublicKey`]: decode public keys from PKCS#8
//!
//! [`pkcs8::DecodePublicKey`]: https://docs.rs/pkcs8/latest/pkcs8/trait.DecodePublicKey.html

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;
pub use signature;

mod algorithms;
pub mod envelope;
pub mod errors;
mod parse;
pub mod traits;

mod dummy_rng;
mod encoding;
mod key;

pub use pkcs1;
pub use pkcs8;

pub use crate::{
    envelope::{decode, decode_with_options, encode, encode_with_rng, DecodeOptions},
    errors::{CryptoError, Error, Result},
    key::{RsaPrivateKey, RsaPublicKey},
    parse::{parse_private_key_der, parse_public_key_der, KeyMaterial},
};

#[cfg(feature = "pem")]
pub use crate::parse::{parse_key, parse_private_key, parse_public_key};

#[cfg(feature = "hazmat")]
pub mod hazmat;
