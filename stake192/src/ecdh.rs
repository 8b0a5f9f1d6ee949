//! Diffie-Hellman style shared-secret derivation.
//!
//! The shared info is the 24-octet little-endian x-coordinate of
//! `[x]P`, computed only after `P` passes the curve-membership gate.

use core::fmt;
use crate::{AffinePoint, Result, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared secret: the x-coordinate of the agreed point.
pub struct SharedSecret([u8; 24]);

impl SharedSecret {
    /// Borrows the raw shared-secret octets.
    pub fn as_bytes(&self) -> &[u8; 24] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

/// Computes the ECDH shared info between `secret` and a peer point.
///
/// Fails with [`crate::Error::NotOnCurve`] when the peer point does not
/// satisfy the curve equation and with [`crate::Error::PointAtInfinity`]
/// when the product degenerates; the output buffer is untouched in both
/// cases.
pub fn diffie_hellman(secret: &SecretKey, peer: &AffinePoint) -> Result<SharedSecret> {
    let point = peer.mul_checked(secret.scalar())?;
    Ok(SharedSecret(point.x().to_bytes()))
}
