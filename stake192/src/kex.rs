//! Authenticated key-exchange protocols.
//!
//! Two protocols derive a 16-octet session key from an elliptic-curve
//! shared point and bind it to long-term identities:
//!
//! - [`stake::Stake`] runs static-ephemeral Diffie-Hellman on both the
//!   long-term and ephemeral keys across three point exchanges;
//! - [`pki::Pki`] runs ephemeral Diffie-Hellman with ECDSA authentication
//!   of the exchanged ephemeral public points.
//!
//! Both sides of a protocol execute the same fixed step sequence; every
//! step either advances the context by exactly one state or fails and
//! leaves the session unusable (its session key stays unavailable).

pub mod pki;
pub mod stake;

use crate::AffinePoint;
use crate::aes::{Aes128, BLOCK_BYTES};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Session key derived from a completed key exchange.
#[derive(Clone, Eq, PartialEq)]
pub struct SessionKey([u8; BLOCK_BYTES]);

impl SessionKey {
    /// Borrows the raw session-key octets.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKey").finish_non_exhaustive()
    }
}

impl Drop for SessionKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SessionKey {}

/// Derives the session key from a shared point, wire-compatible packing.
///
/// The AES key takes byte `i` from `(x.words[i / 4] >> (i % 4)) & 0xFF`,
/// a bit-granular shift rather than a byte extraction. This reads far less
/// of the coordinate's entropy than intended, but deployed peers derive
/// their keys this way, so the packing is load-bearing; see
/// [`derive_session_key_le`] for the well-formed variant. The session key
/// is the AES-128 encryption of an all-zero block under that key.
pub(crate) fn derive_session_key(shared: &AffinePoint) -> SessionKey {
    let words = shared.x().to_words();
    let mut key = [0; BLOCK_BYTES];

    for (i, k) in key.iter_mut().enumerate() {
        *k = (words[i / 4] >> (i % 4)) as u8;
    }

    encrypt_zero_block(&key)
}

/// Derives the session key from a shared point, little-endian packing.
///
/// The AES key is the first 16 little-endian octets of the shared
/// x-coordinate. Not interoperable with [`derive_session_key`]; both ends
/// of a session must pick the same variant.
pub(crate) fn derive_session_key_le(shared: &AffinePoint) -> SessionKey {
    let bytes = shared.x().to_bytes();
    let mut key = [0; BLOCK_BYTES];
    key.copy_from_slice(&bytes[..BLOCK_BYTES]);

    encrypt_zero_block(&key)
}

fn encrypt_zero_block(key: &[u8; BLOCK_BYTES]) -> SessionKey {
    let cipher = Aes128::new(key);
    let mut block = [0; BLOCK_BYTES];
    cipher.encrypt_block(&mut block);
    SessionKey(block)
}
