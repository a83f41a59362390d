//! End-to-end tests against PEM fixtures.

#![cfg(feature = "pem")]

use hex_literal::hex;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_privenc::{
    decode, decode_with_options, encode, encode_with_rng,
    envelope::{DecryptingKey, EncryptingKey},
    parse_key, parse_private_key, parse_private_key_der, parse_public_key,
    traits::{DecryptingKeypair, PrivateEncryptor, PublicDecryptor, PublicKeyParts},
    CryptoError, DecodeOptions, Error, KeyMaterial,
};

const PRIVATE_KEY_PEM: &str = include_str!("keys/rsa2048-priv.pem");
const PRIVATE_KEY_DER: &[u8] = include_bytes!("keys/rsa2048-priv.der");
const PUBLIC_KEY_PEM: &str = include_str!("keys/rsa2048-pub.pem");
const PKCS1_PRIVATE_KEY_PEM: &str = include_str!("keys/rsa2048-pkcs1-priv.pem");
const PKCS1_PUBLIC_KEY_PEM: &str = include_str!("keys/rsa2048-pkcs1-pub.pem");
const PKCS1_PRIVATE_KEY_HEADERS_PEM: &str = include_str!("keys/rsa2048-pkcs1-priv-headers.pem");
const PUBLIC_KEY_ONE_LINE_PEM: &str = include_str!("keys/rsa2048-pub-oneline.pem");
const OTHER_PRIVATE_KEY_PEM: &str = include_str!("keys/rsa2048-other-priv.pem");
const OTHER_PUBLIC_KEY_PEM: &str = include_str!("keys/rsa2048-other-pub.pem");
const EC_PUBLIC_KEY_PEM: &str = include_str!("keys/p256-pub.pem");

const SESSION_KEY: &[u8] = b"e!Ym1D6n,N7JcdQMV04hh2B71bqaKMZq";

// `SESSION_KEY` encrypted with `rsa2048-priv.pem`
const SESSION_KEY_BLOB: [u8; 256] = hex!(
    "600a0c095c223d472b6c9648c05311c51696084b7c3bbc0fabe3eebfb965ce8e"
    "e350d80249307b17684cf4f806e7b9b141e9f465e08274c1d9c7ab4d2a41a30c"
    "fe188fe9df317df3d1b1b2ff703664957987eb21c9d3917d0b43fdba8697cf3e"
    "ec66044230901d3f50d1c88155710ee268034b4a751750c323ae5546d13c4a09"
    "742771facfa22f9b57bf51fe3acf9c356bb54c7f0ddc1de6e1a8557ac75a8059"
    "180fef94da612a95b7837868e278c09cdde5bd3da0d8f3d69a54e0af2ebf94ad"
    "e05416ad00587eaf5603238a1841eb896b6b2879ac76cbd5949457b5987a9e87"
    "7d9c1a80d596c97c83005bfe3b5eae1ca94a75033f66f05b9724ed3f2b7b468e"
);

#[test]
fn session_key_roundtrip() {
    let private_key = parse_private_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let public_key = parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap();

    let blob = encode(&private_key, SESSION_KEY).unwrap();
    assert_eq!(blob.len(), public_key.size());
    assert_eq!(blob, SESSION_KEY_BLOB);

    assert_eq!(decode(&public_key, &blob).unwrap(), SESSION_KEY);
}

#[test]
fn blinded_encode_is_deterministic() {
    let mut rng = ChaCha8Rng::from_seed([1; 32]);
    let private_key = parse_private_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();

    let blob = encode_with_rng(&mut rng, &private_key, SESSION_KEY).unwrap();
    assert_eq!(blob, SESSION_KEY_BLOB);
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let second = parse_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    assert_eq!(first, second);

    let first = parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap();
    let second = parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn pkcs1_containers() {
    let private_key = parse_private_key(PKCS1_PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let public_key = parse_public_key(PKCS1_PUBLIC_KEY_PEM.as_bytes()).unwrap();

    assert_eq!(
        private_key,
        parse_private_key_der(PRIVATE_KEY_DER).unwrap()
    );
    assert_eq!(
        decode(&public_key, &encode(&private_key, SESSION_KEY).unwrap()).unwrap(),
        SESSION_KEY
    );
}

#[test]
fn loosely_wrapped_containers() {
    let private_key = parse_private_key(PKCS1_PRIVATE_KEY_HEADERS_PEM.as_bytes()).unwrap();
    let public_key = parse_public_key(PUBLIC_KEY_ONE_LINE_PEM.as_bytes()).unwrap();

    assert_eq!(
        private_key,
        parse_private_key_der(PRIVATE_KEY_DER).unwrap()
    );
    assert_eq!(
        public_key,
        parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap()
    );
    assert_eq!(decode(&public_key, &SESSION_KEY_BLOB).unwrap(), SESSION_KEY);

    let crlf = PUBLIC_KEY_ONE_LINE_PEM.replace('\n', "\r\n");
    assert_eq!(parse_public_key(crlf.as_bytes()).unwrap(), public_key);
}

#[test]
fn only_first_block_is_read() {
    let input = format!("leading comment\n{}{}", PUBLIC_KEY_PEM, OTHER_PUBLIC_KEY_PEM);
    assert_eq!(
        parse_public_key(input.as_bytes()).unwrap(),
        parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap()
    );

    let input = format!("{}-----BEGIN GARBAGE-----\n", PRIVATE_KEY_PEM);
    assert!(parse_private_key(input.as_bytes()).is_ok());
}

#[test]
fn parse_rejections() {
    assert_eq!(
        parse_public_key(b"not a key at all"),
        Err(Error::MalformedContainer)
    );
    assert_eq!(
        parse_public_key(EC_PUBLIC_KEY_PEM.as_bytes()),
        Err(Error::UnsupportedKeyEncoding)
    );
    assert_eq!(
        parse_public_key(PRIVATE_KEY_PEM.as_bytes()),
        Err(Error::UnsupportedKeyEncoding)
    );
    assert!(matches!(
        parse_key(PUBLIC_KEY_PEM.as_bytes()),
        Ok(KeyMaterial::Public(_))
    ));

    let truncated = PUBLIC_KEY_PEM.replace("-----END PUBLIC KEY-----", "");
    assert_eq!(
        parse_public_key(truncated.as_bytes()),
        Err(Error::MalformedContainer)
    );
}

#[test]
fn key_mismatch_never_yields_payload() {
    let private_key = parse_private_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let other_public_key = parse_public_key(OTHER_PUBLIC_KEY_PEM.as_bytes()).unwrap();

    let blob = encode(&private_key, SESSION_KEY).unwrap();
    match decode(&other_public_key, &blob) {
        Ok(payload) => assert_ne!(payload, SESSION_KEY),
        Err(err) => assert!(matches!(
            err,
            Error::MalformedPadding
                | Error::EmptyPayload
                | Error::Crypto(CryptoError::RepresentativeOutOfRange)
        )),
    }

    let lenient = DecodeOptions::new()
        .padding(rsa_privenc::envelope::PaddingCheck::Lenient)
        .allow_empty_payload(true);
    if let Ok(payload) = decode_with_options(&other_public_key, &blob, &lenient) {
        assert_ne!(payload, SESSION_KEY);
    }
}

#[test]
fn payload_limits() {
    let private_key = parse_private_key(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let public_key = private_key.to_public_key();

    assert_eq!(encode(&private_key, b""), Err(Error::EmptyPayload));
    assert_eq!(
        encode(&private_key, &[0x41; 246]),
        Err(Error::PayloadTooLarge { len: 246, max: 245 })
    );

    let payload = [0x41; 245];
    let blob = encode(&private_key, &payload).unwrap();
    assert_eq!(decode(&public_key, &blob).unwrap(), payload);
}

#[test]
fn blob_rejections() {
    let public_key = parse_public_key(PUBLIC_KEY_PEM.as_bytes()).unwrap();

    assert_eq!(decode(&public_key, b""), Err(Error::EmptyPayload));
    assert_eq!(
        decode(&public_key, &SESSION_KEY_BLOB[..255]),
        Err(Error::InvalidBlobLength {
            expected: 256,
            actual: 255
        })
    );
    assert_eq!(
        decode(&public_key, &[0xff; 256]),
        Err(Error::Crypto(CryptoError::RepresentativeOutOfRange))
    );

    // flipping a bit scrambles the whole block
    let mut corrupted = SESSION_KEY_BLOB;
    corrupted[128] ^= 0x01;
    assert_eq!(decode(&public_key, &corrupted), Err(Error::MalformedPadding));
}

#[test]
fn typed_keys() {
    let private_key = parse_private_key(OTHER_PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let encrypting_key = EncryptingKey::new(private_key);
    let decrypting_key = encrypting_key.decrypting_key();

    assert_eq!(
        decrypting_key,
        DecryptingKey::new(parse_public_key(OTHER_PUBLIC_KEY_PEM.as_bytes()).unwrap())
    );

    let blob = encrypting_key.encrypt(SESSION_KEY).unwrap();
    assert_eq!(decrypting_key.decrypt(&blob).unwrap(), SESSION_KEY);
}
