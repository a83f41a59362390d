//! Generic RSA implementation

use alloc::borrow::Cow;
use alloc::vec;
use num_bigint::{BigInt, BigUint, IntoBigUint, ModInverse, Sign};
use num_traits::{One, Signed, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{CryptoError, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Extra random bytes drawn for a blinding factor so that the reduction
/// modulo `n` is close to uniform.
const BLINDING_OVERSAMPLE: usize = 8;

/// ⚠️ Raw RSA public-key operation: `m^e mod n`. No padding is performed.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> Result<BigUint> {
    if m >= key.n() {
        return Err(CryptoError::RepresentativeOutOfRange.into());
    }

    Ok(m.modpow(key.e(), key.n()))
}

/// ⚠️ Raw RSA private-key operation with no padding or error checking.
///
/// Returns `c^d mod n` as a `BigUint`. Performs RSA blinding if an `Rng` is passed.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt<R: CryptoRngCore + ?Sized>(
    mut rng: Option<&mut R>,
    priv_key: &impl PrivateKeyParts,
    c: &BigUint,
) -> Result<BigUint> {
    if c >= priv_key.n() {
        return Err(CryptoError::RepresentativeOutOfRange.into());
    }

    if priv_key.n().is_zero() {
        return Err(CryptoError::InvalidModulus.into());
    }

    let mut ir = None;

    let c = if let Some(ref mut rng) = rng {
        let (blinded, unblinder) = blind(rng, priv_key, c)?;
        ir = Some(unblinder);
        Cow::Owned(blinded)
    } else {
        Cow::Borrowed(c)
    };

    let m = match (priv_key.dp(), priv_key.dq(), priv_key.qinv()) {
        (Some(dp), Some(dq), Some(qinv)) => {
            // We have the precalculated values needed for the CRT.
            let p = &priv_key.primes()[0];
            let q = &priv_key.primes()[1];

            let mut m = BigInt::from_biguint(Sign::Plus, c.modpow(dp, p));
            let mut m2 = BigInt::from_biguint(Sign::Plus, c.modpow(dq, q));

            m -= &m2;

            let mut primes = vec![
                BigInt::from_biguint(Sign::Plus, p.clone()),
                BigInt::from_biguint(Sign::Plus, q.clone()),
            ];

            while m.is_negative() {
                m += &primes[0];
            }
            m *= qinv;
            m %= &primes[0];
            m *= &primes[1];
            m += &m2;

            // clear tmp values
            primes.zeroize();
            m2.zeroize();

            m.into_biguint().ok_or(CryptoError::Internal)?
        }
        _ => c.modpow(priv_key.d(), priv_key.n()),
    };

    match ir {
        Some(ref ir) => {
            // unblind
            Ok(unblind(priv_key, &m, ir))
        }
        None => Ok(m),
    }
}

/// ⚠️ Raw RSA private-key operation with no padding.
///
/// Returns `c^d mod n` as a `BigUint`. Performs RSA blinding if an `Rng` is passed. This will
/// also check for errors in the CRT computation.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt_and_check<R: CryptoRngCore + ?Sized>(
    priv_key: &impl PrivateKeyParts,
    rng: Option<&mut R>,
    c: &BigUint,
) -> Result<BigUint> {
    let m = rsa_decrypt(rng, priv_key, c)?;

    // In order to defend against errors in the CRT computation, m^e is
    // calculated, which should match the original input.
    let check = rsa_encrypt(priv_key, &m)?;

    if c != &check {
        return Err(CryptoError::Internal.into());
    }

    Ok(m)
}

/// Returns the blinded c, along with the unblinding factor.
fn blind<R: CryptoRngCore + ?Sized, K: PublicKeyParts>(
    rng: &mut R,
    key: &K,
    c: &BigUint,
) -> Result<(BigUint, BigUint)> {
    // Blinding involves multiplying c by r^e.
    // Then the private-key operation performs (m^e * r^e)^d mod n
    // which equals mr mod n. The factor of r can then be removed
    // by multiplying by the multiplicative inverse of r.

    let mut buf = Zeroizing::new(vec![0u8; key.size() + BLINDING_OVERSAMPLE]);
    let mut r: BigUint;
    let unblinder;
    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(|_| CryptoError::RandomSource)?;
        r = BigUint::from_bytes_be(&buf) % key.n();
        if r.is_zero() {
            r = BigUint::one();
        }
        if let Some(ir) = r.clone().mod_inverse(key.n()) {
            if let Some(ub) = ir.into_biguint() {
                unblinder = ub;
                break;
            }
        }
    }

    let c = {
        let mut rpowe = r.modpow(key.e(), key.n()); // N != 0
        let mut c = c * &rpowe;
        c %= key.n();

        rpowe.zeroize();
        r.zeroize();

        c
    };

    Ok((c, unblinder))
}

/// Given an m and and unblinding factor, unblind the m.
fn unblind(key: &impl PublicKeyParts, m: &BigUint, unblinder: &BigUint) -> BigUint {
    (m * unblinder) % key.n()
}
