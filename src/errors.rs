//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-privenc` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The payload (or the payload recovered from a blob) is empty.
    #[error("payload must not be empty")]
    EmptyPayload,

    /// The payload does not fit into a padded block of the key's modulus size.
    #[error("payload of {len} bytes exceeds the {max} byte capacity of the key")]
    PayloadTooLarge {
        /// Length of the rejected payload.
        len: usize,
        /// Largest payload the key can carry.
        max: usize,
    },

    /// The blob is not as wide as the key's modulus.
    #[error("blob must be {expected} bytes wide, got {actual}")]
    InvalidBlobLength {
        /// Modulus size in bytes.
        expected: usize,
        /// Length of the rejected blob.
        actual: usize,
    },

    /// No key container could be decoded from the input.
    #[error("malformed key container")]
    MalformedContainer,

    /// The key inside the container could not be parsed.
    #[error("malformed key encoding: {0}")]
    MalformedKeyEncoding(pkcs8::Error),

    /// The container holds something other than the expected kind of RSA key.
    #[error("unsupported key encoding")]
    UnsupportedKeyEncoding,

    /// The recovered block is not a PKCS#1 v1.5 type 1 block.
    #[error("malformed padding")]
    MalformedPadding,

    /// Failure in the key material, the exponentiation or the random source.
    #[error("underlying crypto failure: {0}")]
    Crypto(#[from] CryptoError),
}

/// Failures raised by the RSA primitive itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CryptoError {
    /// Private keys must consist of exactly two primes.
    #[error("expected exactly two prime factors")]
    NprimesMismatch,

    /// Invalid prime value.
    #[error("invalid prime value")]
    InvalidPrime,

    /// Invalid modulus.
    #[error("invalid modulus")]
    InvalidModulus,

    /// Invalid exponent.
    #[error("invalid exponent")]
    InvalidExponent,

    /// Invalid coefficient.
    #[error("invalid coefficient")]
    InvalidCoefficient,

    /// Modulus too large.
    #[error("modulus too large")]
    ModulusTooLarge,

    /// Public exponent too small.
    #[error("public exponent too small")]
    PublicExponentTooSmall,

    /// Public exponent too large.
    #[error("public exponent too large")]
    PublicExponentTooLarge,

    /// The integer representative of a block is not smaller than the modulus.
    #[error("integer representative out of range")]
    RepresentativeOutOfRange,

    /// Integer does not fit into the requested width.
    #[error("invalid padding length")]
    InvalidPadLen,

    /// The random source failed to produce a blinding factor.
    #[error("random source failure")]
    RandomSource,

    /// The CRT result failed its consistency check.
    #[error("internal error")]
    Internal,
}

impl From<pkcs8::Error> for Error {
    fn from(err: pkcs8::Error) -> Error {
        match err {
            pkcs8::Error::PublicKey(spki::Error::OidUnknown { .. }) => {
                Error::UnsupportedKeyEncoding
            }
            err => Error::MalformedKeyEncoding(err),
        }
    }
}

impl From<spki::Error> for Error {
    fn from(err: spki::Error) -> Error {
        pkcs8::Error::PublicKey(err).into()
    }
}

impl From<pkcs1::Error> for Error {
    fn from(err: pkcs1::Error) -> Error {
        pkcs8::Error::from(err).into()
    }
}

impl From<Error> for signature::Error {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        {
            Self::from_source(err)
        }
        #[cfg(not(feature = "std"))]
        {
            core::convert::identity(err);
            Self::new()
        }
    }
}
