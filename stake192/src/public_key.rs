//! Long-term public keys.

use crate::{AffinePoint, Error, Result};

/// Public key: an affine point known to satisfy the curve equation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wraps an affine point, rejecting points that are not on the curve.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve);
        }

        Ok(Self { point })
    }

    /// Wraps a point that is on the curve by construction.
    pub(crate) fn from_affine_unchecked(point: AffinePoint) -> Self {
        Self { point }
    }

    /// Parses a public key from its 48-byte `X ‖ Y` little-endian
    /// encoding, rejecting off-curve points.
    pub fn from_bytes(bytes: &[u8; 48]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_bytes(bytes))
    }

    /// Returns the 48-byte `X ‖ Y` little-endian encoding of the key.
    pub fn to_bytes(&self) -> [u8; 48] {
        self.point.to_bytes()
    }

    /// Borrows the underlying affine point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}
