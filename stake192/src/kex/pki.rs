//! PKI: ephemeral Diffie-Hellman with ECDSA-authenticated points.
//!
//! Each party sends its ephemeral public point together with an ECDSA
//! signature over the point's x-coordinate under its long-term key. The
//! peer multiplies the received point by its own ephemeral secret only
//! after the point passes the curve gate, and accepts the session only
//! if the signature verifies against the peer's long-term public key.
//!
//! The two failure modes stay distinct: curve/multiplication failures
//! surface as [`Error::NotOnCurve`] / [`Error::PointAtInfinity`],
//! authentication failures as [`Error::BadSignature`].

use crate::ecdsa::{Signature, SigningKey, VerifyingKey};
use crate::kex::{self, SessionKey};
use crate::{AffinePoint, Error, PublicKey, Result, Scalar, SecretKey};
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One party's state in a PKI session.
pub struct Pki {
    static_secret: Scalar,
    peer_public: AffinePoint,
    eph_secret: Scalar,
    eph_public: AffinePoint,
    shared: Option<AffinePoint>,
}

impl Pki {
    /// Initializes a session: copies the long-term material and generates
    /// the ephemeral key pair from `rng`.
    pub fn try_from_rng<R: TryCryptoRng + ?Sized>(
        secret: &SecretKey,
        peer: &PublicKey,
        rng: &mut R,
    ) -> Result<Self> {
        let eph = SecretKey::try_from_rng(rng)?;
        let eph_public = *eph.public_key()?.as_affine();

        Ok(Self {
            static_secret: *secret.scalar(),
            peer_public: *peer.as_affine(),
            eph_secret: *eph.scalar(),
            eph_public,
            shared: None,
        })
    }

    /// First pass: the ephemeral public point and an ECDSA signature over
    /// its x-coordinate under the long-term key. Signing draws its nonce
    /// from `rng`.
    pub fn q1_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(AffinePoint, Signature)> {
        let q1 = self.eph_public;
        let signature = SigningKey::from_scalar(self.static_secret)
            .sign_prehash_with_rng(rng, &q1.x().to_bytes())?;

        Ok((q1, signature))
    }

    /// Second pass: multiplies the peer's authenticated point into the
    /// shared point `[ae]Q1` and verifies the accompanying signature.
    ///
    /// The shared point is stored only when both the curve gate and the
    /// signature check pass.
    pub fn q2(&mut self, q1_peer: &AffinePoint, sig_peer: &Signature) -> Result<()> {
        let shared = q1_peer.mul_checked(&self.eph_secret)?;

        VerifyingKey::from_affine(self.peer_public)
            .verify_prehash(&q1_peer.x().to_bytes(), sig_peer)?;

        self.shared = Some(shared);
        Ok(())
    }

    /// Derives the session key with the wire-compatible packing.
    ///
    /// Fails with [`Error::NotReady`] until [`Pki::q2`] has succeeded.
    pub fn session_key(&self) -> Result<SessionKey> {
        self.shared
            .as_ref()
            .map(kex::derive_session_key)
            .ok_or(Error::NotReady)
    }

    /// Derives the session key with little-endian packing; see
    /// [`Pki::session_key`] for the interoperable variant.
    pub fn session_key_le(&self) -> Result<SessionKey> {
        self.shared
            .as_ref()
            .map(kex::derive_session_key_le)
            .ok_or(Error::NotReady)
    }
}

impl Drop for Pki {
    fn drop(&mut self) {
        self.static_secret.zeroize();
        self.eph_secret.zeroize();

        if let Some(shared) = &mut self.shared {
            shared.zeroize();
        }
    }
}

impl ZeroizeOnDrop for Pki {}
