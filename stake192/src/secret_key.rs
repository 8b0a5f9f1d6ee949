//! Long-term secret keys.

use crate::{AffinePoint, PublicKey, Result, Scalar};
use core::fmt::{self, Debug};
use mpnat as mp;
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret scalar for key agreement and signing.
///
/// Generated keys are always in `[2, n)`. Keys parsed from bytes are taken
/// as-is; supplying a well-formed scalar below the group order is the
/// caller's responsibility.
#[derive(Clone)]
pub struct SecretKey {
    scalar: Scalar,
}

impl SecretKey {
    /// Generates a secret key from `rng`: random digits are drawn and
    /// reduced modulo the group order until the value is at least 2.
    pub fn try_from_rng<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        loop {
            let scalar = Scalar::try_from_rng(rng)?;

            if mp::cmp_digit(&scalar.0, 2) != core::cmp::Ordering::Less {
                return Ok(Self { scalar });
            }
        }
    }

    /// Parses a secret key from its 24-byte little-endian encoding,
    /// without validation.
    pub fn from_bytes(bytes: &[u8; 24]) -> Self {
        Self {
            scalar: Scalar::from_bytes(bytes),
        }
    }

    /// Returns the 24-byte little-endian encoding of the key.
    ///
    /// This value is key material; treat it accordingly.
    pub fn to_bytes(&self) -> [u8; 24] {
        self.scalar.to_bytes()
    }

    /// Borrows the secret scalar.
    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Computes the corresponding public key `[x]G`.
    pub fn public_key(&self) -> Result<PublicKey> {
        let point = AffinePoint::GENERATOR.mul(&self.scalar)?;
        Ok(PublicKey::from_affine_unchecked(point))
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}
