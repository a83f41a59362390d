//! Property-based tests.

#![cfg(feature = "pem")]

use proptest::prelude::*;
use rsa_privenc::{
    decode, encode,
    envelope::EncryptingKey,
    parse_private_key,
    signature::{Keypair, SignatureEncoding, Signer},
    traits::PublicKeyParts,
    Error, RsaPrivateKey,
};

fn private_key() -> RsaPrivateKey {
    parse_private_key(include_bytes!("keys/rsa2048-priv.pem")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip(payload in proptest::collection::vec(any::<u8>(), 1..=245)) {
        let private_key = private_key();
        let blob = encode(&private_key, &payload).unwrap();

        prop_assert_eq!(blob.len(), private_key.size());
        prop_assert_eq!(decode(&private_key.to_public_key(), &blob).unwrap(), payload);
    }

    #[test]
    fn oversized_payloads_rejected(len in 246usize..1024) {
        let private_key = private_key();
        prop_assert_eq!(
            encode(&private_key, &vec![0x5a; len]),
            Err(Error::PayloadTooLarge { len, max: 245 })
        );
    }

    #[test]
    fn arbitrary_blobs_never_panic(blob in proptest::collection::vec(any::<u8>(), 0..300)) {
        let public_key = private_key().to_public_key();
        let _ = decode(&public_key, &blob);
    }

    #[test]
    fn signer_roundtrip(msg in proptest::collection::vec(any::<u8>(), 1..=245)) {
        let encrypting_key = EncryptingKey::new(private_key());
        let blob = encrypting_key.sign(&msg);

        let decrypting_key = encrypting_key.verifying_key();
        prop_assert_eq!(decrypting_key.decrypt_blob(&blob).unwrap(), msg.clone());
        prop_assert_eq!(blob.to_vec(), encode(encrypting_key.as_ref(), &msg).unwrap());
    }
}
