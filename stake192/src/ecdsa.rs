//! ECDSA signature creation and verification over secp192r1.
//!
//! Digests cross this boundary as raw bytes and are read as little-endian
//! 32-bit words truncated to six digits; callers choose the hash
//! function. Signatures travel as fixed 48-byte `r ‖ s` pairs. There is
//! no ASN.1/DER layer.

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::Scalar;
use core::fmt::{self, Debug};

/// ECDSA signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// ECDSA signature: the pair `(r, s)` of integers modulo the group order.
///
/// Signing always produces nonzero components. Parsing is permissive and
/// takes the digits as-is; verification rejects degenerate values
/// arithmetically.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Size of an encoded signature in bytes.
    pub const BYTE_SIZE: usize = 2 * crate::ELEMENT_BYTES;

    /// Creates a signature from its `r` and `s` components.
    pub const fn from_scalars(r: Scalar, s: Scalar) -> Self {
        Self { r, s }
    }

    /// Parses a signature from its `r ‖ s` little-endian encoding.
    pub fn from_bytes(bytes: &SignatureBytes) -> Self {
        let mut r = [0; 24];
        let mut s = [0; 24];
        r.copy_from_slice(&bytes[..24]);
        s.copy_from_slice(&bytes[24..]);

        Self {
            r: Scalar::from_bytes(&r),
            s: Scalar::from_bytes(&s),
        }
    }

    /// Serializes the signature as `r ‖ s` little-endian bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut bytes = [0; Self::BYTE_SIZE];
        bytes[..24].copy_from_slice(&self.r.to_bytes());
        bytes[24..].copy_from_slice(&self.s.to_bytes());
        bytes
    }

    /// The `r` component.
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Scalar {
        &self.s
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}
