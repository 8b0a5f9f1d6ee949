//! ECDSA verification.

use super::Signature;
use crate::{AffinePoint, Error, PublicKey, Result, Scalar};

/// Public point wrapper used to verify ECDSA signatures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    point: AffinePoint,
}

impl VerifyingKey {
    /// Creates a verifying key from a validated public key.
    pub fn new(public_key: PublicKey) -> Self {
        Self {
            point: *public_key.as_affine(),
        }
    }

    /// Creates a verifying key from a raw affine point, without a curve
    /// membership check.
    pub(crate) fn from_affine(point: AffinePoint) -> Self {
        Self { point }
    }

    /// Parses a verifying key from a 48-byte `X ‖ Y` encoding, rejecting
    /// off-curve points.
    pub fn from_bytes(bytes: &[u8; 48]) -> Result<Self> {
        PublicKey::from_bytes(bytes).map(Self::new)
    }

    /// Borrows the public point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Verifies a signature over a message digest.
    ///
    /// Computes `R = [e·s⁻¹]G + [r·s⁻¹]P` and accepts exactly when the
    /// raw digits of `X(R)` equal `r`. `X(R)` is deliberately not reduced
    /// modulo the order before the comparison; peers depend on this
    /// acceptance behavior.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        let e = Scalar::from_prehash(prehash);
        let s_inv = signature.s().invert();
        let u1 = e.mul_mod(&s_inv);
        let u2 = signature.r().mul_mod(&s_inv);

        let r_point = AffinePoint::lincomb(&AffinePoint::GENERATOR, &u1, &self.point, &u2)
            .map_err(|_| Error::BadSignature)?;

        if r_point.x().to_words() == signature.r().to_words() {
            Ok(())
        } else {
            Err(Error::BadSignature)
        }
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey::new(public_key)
    }
}
