use alloc::{boxed::Box, string::ToString, vec::Vec};
use core::fmt::{Debug, Display, Formatter, LowerHex, UpperHex};
use signature::SignatureEncoding;

use crate::errors::Error;

/// Output of the private-key encryption, as wide as the modulus of the key
/// that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    inner: Box<[u8]>,
}

impl Blob {
    /// Big-endian bytes of the blob.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Width of the blob in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always false, the constructors reject empty input.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl SignatureEncoding for Blob {
    type Repr = Box<[u8]>;
}

impl TryFrom<&[u8]> for Blob {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyPayload.into());
        }

        Ok(Self {
            inner: bytes.into(),
        })
    }
}

impl TryFrom<Vec<u8>> for Blob {
    type Error = signature::Error;

    fn try_from(bytes: Vec<u8>) -> signature::Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyPayload.into());
        }

        Ok(Self {
            inner: bytes.into_boxed_slice(),
        })
    }
}

impl From<Blob> for Box<[u8]> {
    fn from(blob: Blob) -> Box<[u8]> {
        blob.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl Debug for Blob {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        fmt.debug_tuple("Blob").field(&self.to_string()).finish()
    }
}

impl LowerHex for Blob {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in self.inner.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl UpperHex for Blob {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in self.inner.iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl Display for Blob {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:X}", self)
    }
}
