//! STAKE: static-ephemeral authenticated key exchange.
//!
//! Each party holds a long-term key pair and the peer's long-term public
//! key, and contributes a per-session ephemeral scalar. The exchanged
//! points chain both parties' static and ephemeral secrets into one
//! shared point:
//!
//! ```text
//! A:  Q1A = [ae_A]B          ──►  B:  Q2B = [ae_B]Q1A
//! B:  Q1B = [ae_B]A          ──►  A:  Q2A = [ae_A]Q1B
//! A:  Q3A = [a]Q2B,  B:  Q3B = [b]Q2A
//! ```
//!
//! Both ends arrive at `[a·b·ae_A·ae_B]G` and hash its x-coordinate into
//! the session key. Every peer-supplied point is checked against the
//! curve equation before it is multiplied.

use crate::kex::{self, SessionKey};
use crate::{AffinePoint, Error, PublicKey, Result, Scalar, SecretKey};
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One party's state in a STAKE session.
pub struct Stake {
    static_secret: Scalar,
    peer_public: AffinePoint,
    eph_secret: Scalar,
    eph_public: AffinePoint,
    shared: Option<AffinePoint>,
}

impl Stake {
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

    /// The ephemeral public key generated for this session.
    pub fn ephemeral_public(&self) -> &AffinePoint {
        &self.eph_public
    }

    /// First pass: computes the point to send, `[ae]B`.
    pub fn q1(&self) -> Result<AffinePoint> {
        self.peer_public.mul_checked(&self.eph_secret)
    }

    /// Second pass: folds the peer's first point into `[ae]Q1`, yielding
    /// the point to send back.
    pub fn q2(&self, q1_peer: &AffinePoint) -> Result<AffinePoint> {
        q1_peer.mul_checked(&self.eph_secret)
    }

    /// Third pass: closes the chain with the static secret, `[a]Q2`, and
    /// stores the shared point.
    pub fn q3(&mut self, q2_peer: &AffinePoint) -> Result<()> {
        self.shared = Some(q2_peer.mul_checked(&self.static_secret)?);
        Ok(())
    }

    /// Derives the session key with the wire-compatible packing.
    ///
    /// Fails with [`Error::NotReady`] until [`Stake::q3`] has succeeded.
    pub fn session_key(&self) -> Result<SessionKey> {
        self.shared
            .as_ref()
            .map(kex::derive_session_key)
            .ok_or(Error::NotReady)
    }

    /// Derives the session key with little-endian packing; see
    /// [`Stake::session_key`] for the interoperable variant.
    pub fn session_key_le(&self) -> Result<SessionKey> {
        self.shared
            .as_ref()
            .map(kex::derive_session_key_le)
            .ok_or(Error::NotReady)
    }
}

impl Drop for Stake {
    fn drop(&mut self) {
        self.static_secret.zeroize();
        self.eph_secret.zeroize();

        if let Some(shared) = &mut self.shared {
            shared.zeroize();
        }
    }
}

impl ZeroizeOnDrop for Stake {}
