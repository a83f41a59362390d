#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_privenc::{decode, encode, encode_with_rng, parse_private_key, RsaPrivateKey};
use test::Bencher;

const SESSION_KEY: &[u8] = b"e!Ym1D6n,N7JcdQMV04hh2B71bqaKMZq";

fn get_key() -> RsaPrivateKey {
    // 2048 bits
    parse_private_key(include_bytes!("../tests/keys/rsa2048-priv.pem")).unwrap()
}

#[bench]
fn bench_encode(b: &mut Bencher) {
    let priv_key = get_key();

    b.iter(|| {
        test::black_box(encode(&priv_key, SESSION_KEY).unwrap());
    });
}

#[bench]
fn bench_encode_blinded(b: &mut Bencher) {
    let priv_key = get_key();
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    b.iter(|| {
        test::black_box(encode_with_rng(&mut rng, &priv_key, SESSION_KEY).unwrap());
    });
}

#[bench]
fn bench_decode(b: &mut Bencher) {
    let priv_key = get_key();
    let pub_key = priv_key.to_public_key();
    let blob = encode(&priv_key, SESSION_KEY).unwrap();

    b.iter(|| {
        test::black_box(decode(&pub_key, &blob).unwrap());
    });
}

#[bench]
fn bench_parse(b: &mut Bencher) {
    b.iter(|| {
        test::black_box(get_key());
    });
}
