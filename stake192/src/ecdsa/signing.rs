//! ECDSA signing.

use super::Signature;
use crate::ecdsa::VerifyingKey;
use crate::{AffinePoint, Result, Scalar, SecretKey};
use core::fmt::{self, Debug};
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret scalar wrapper used to produce ECDSA signatures.
#[derive(Clone)]
pub struct SigningKey {
    secret_scalar: Scalar,
}

impl SigningKey {
    /// Creates a signing key from a secret key.
    pub fn new(secret_key: &SecretKey) -> Self {
        Self::from_scalar(*secret_key.scalar())
    }

    /// Creates a signing key directly from a scalar.
    pub(crate) fn from_scalar(secret_scalar: Scalar) -> Self {
        Self { secret_scalar }
    }

    /// Parses a signing key from its 24-byte little-endian encoding,
    /// without validation.
    pub fn from_bytes(bytes: &[u8; 24]) -> Self {
        Self::from_scalar(Scalar::from_bytes(bytes))
    }

    /// Computes the corresponding [`VerifyingKey`].
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        let point = AffinePoint::GENERATOR.mul(&self.secret_scalar)?;
        Ok(VerifyingKey::from_affine(point))
    }

    /// Signs a message digest, drawing the per-signature nonce from `rng`.
    ///
    /// The whole derivation is retried until both signature components
    /// are nonzero:
    ///
    /// 1. draw `k`, reduced modulo the order, redrawing on zero;
    /// 2. `r = X([k]G) mod n`, redrawing on zero;
    /// 3. `e` = the digest read as little-endian words;
    /// 4. `s = k⁻¹ (r·x + e) mod n`, restarting on zero.
    pub fn sign_prehash_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        prehash: &[u8],
    ) -> Result<Signature> {
        let e = Scalar::from_prehash(prehash);

        loop {
            let k = loop {
                let k = Scalar::try_from_rng(rng)?;

                if !k.is_zero() {
                    break k;
                }
            };

            let r_point = match AffinePoint::GENERATOR.mul(&k) {
                Ok(point) => point,
                Err(_) => continue,
            };

            let r = Scalar::from_words_reduced(r_point.x().to_words());

            if r.is_zero() {
                continue;
            }

            let k_inv = k.invert();

            // t = r·x + e; the closing multiplication reduces any
            // non-canonical representative left by the carry-only add.
            let t = r.mul_mod(&self.secret_scalar).add_carry_only(&e);
            let s = t.mul_mod(&k_inv);

            if s.is_zero() {
                continue;
            }

            return Ok(Signature::from_scalars(r, s));
        }
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}
