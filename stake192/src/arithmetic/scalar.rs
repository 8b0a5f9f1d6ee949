//! Arithmetic modulo the secp192r1 group order.

use crate::{Error, ORDER_DIGITS, Result};
use core::cmp::Ordering;
use core::fmt::{self, Debug};
use mpnat::{self as mp, Digit};
use rand_core::TryCryptoRng;
use zeroize::Zeroize;

/// n = 0xFFFFFFFF FFFFFFFF FFFFFFFF 99DEF836 146BC9B1 B4D22831
pub(crate) const ORDER: [Digit; ORDER_DIGITS] = [
    0xB4D2_2831,
    0x146B_C9B1,
    0x99DE_F836,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// Integer modulo the order of the secp192r1 base point.
///
/// Scalars are six little-endian 32-bit digits. Construction from raw
/// digits or bytes does not reduce; the randomized and reducing
/// constructors do.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Scalar(pub(crate) [Digit; ORDER_DIGITS]);

impl Scalar {
    /// Additive identity.
    pub const ZERO: Self = Self([0; ORDER_DIGITS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0]);

    /// Creates a scalar from little-endian digits, without reduction.
    pub const fn from_words(words: [Digit; ORDER_DIGITS]) -> Self {
        Self(words)
    }

    /// Returns the scalar as little-endian digits.
    pub const fn to_words(self) -> [Digit; ORDER_DIGITS] {
        self.0
    }

    /// Parses a scalar from its 24-byte little-endian encoding, without
    /// reduction.
    pub fn from_bytes(bytes: &[u8; 24]) -> Self {
        let mut words = [0; ORDER_DIGITS];

        for (i, w) in words.iter_mut().enumerate() {
            *w = Digit::from_le_bytes([
                bytes[4 * i],
                bytes[4 * i + 1],
                bytes[4 * i + 2],
                bytes[4 * i + 3],
            ]);
        }

        Self(words)
    }

    /// Returns the 24-byte little-endian encoding of the scalar.
    pub fn to_bytes(self) -> [u8; 24] {
        let mut bytes = [0; 24];

        for (i, w) in self.0.iter().enumerate() {
            bytes[4 * i..4 * i + 4].copy_from_slice(&w.to_le_bytes());
        }

        bytes
    }

    /// Reduces six digits modulo the order and wraps them.
    pub(crate) fn from_words_reduced(mut words: [Digit; ORDER_DIGITS]) -> Self {
        reduce_in_place(&mut words);
        Self(words)
    }

    /// Builds the ECDSA message integer from digest bytes.
    ///
    /// The first `min(⌊len/4⌋, 6)` little-endian 32-bit words of the
    /// digest become the low digits; trailing bytes that do not fill a
    /// word are dropped, and the result is deliberately not reduced
    /// modulo the order.
    pub fn from_prehash(digest: &[u8]) -> Self {
        let words = core::cmp::min(digest.len() / 4, ORDER_DIGITS);
        let mut out = [0; ORDER_DIGITS];

        for (i, w) in out[..words].iter_mut().enumerate() {
            *w = Digit::from_le_bytes([
                digest[4 * i],
                digest[4 * i + 1],
                digest[4 * i + 2],
                digest[4 * i + 3],
            ]);
        }

        Self(out)
    }

    /// Draws a uniformly random scalar below the order from `rng`.
    pub fn try_from_rng<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0; 24];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| Error::RngUnavailable)?;
        Ok(Self::from_words_reduced(Self::from_bytes(&bytes).0))
    }

    /// Returns whether the scalar is zero.
    pub fn is_zero(&self) -> bool {
        mp::is_zero(&self.0)
    }

    /// Returns bit `i` of the scalar.
    pub(crate) fn bit(&self, i: usize) -> Digit {
        mp::get_bit(&self.0, i)
    }

    /// Addition with a single conditional subtract of the order on
    /// carry-out only.
    ///
    /// A carry-free sum at or above the order is left as a non-canonical
    /// representative; callers follow up with a reducing multiplication.
    pub(crate) fn add_carry_only(&self, rhs: &Self) -> Self {
        let mut w = self.0;

        if mp::add(&mut w, &rhs.0) != 0 {
            mp::sub(&mut w, &ORDER);
        }

        Self(w)
    }

    /// Modular multiplication.
    pub fn mul_mod(&self, rhs: &Self) -> Self {
        let mut wide = [0; 2 * ORDER_DIGITS];
        mp::mul(&mut wide, &self.0, &rhs.0);
        reduce_in_place(&mut wide);

        let mut out = [0; ORDER_DIGITS];
        out.copy_from_slice(&wide[..ORDER_DIGITS]);
        Self(out)
    }

    /// Inversion modulo the order via the binary extended Euclidean
    /// algorithm. Inverting zero yields zero; callers gate zero where it
    /// matters.
    pub fn invert(&self) -> Self {
        let mut w = self.0;
        mp::invert_mod_prime(&mut w, &ORDER);
        Self(w)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x")?;

        for w in self.0.iter().rev() {
            write!(f, "{w:08X}")?;
        }

        write!(f, ")")
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Reduces a number of at least [`ORDER_DIGITS`] digits modulo the group
/// order, in place. The result occupies the low [`ORDER_DIGITS`] digits.
///
/// High digits are retired one at a time: subtract that digit's multiple
/// of the order from the window below it, then keep subtracting the order
/// from the window until the retired digit is zero, and slide the window
/// down.
pub(crate) fn reduce_in_place(dst: &mut [Digit]) {
    let mut n = dst.len();

    while n > ORDER_DIGITS {
        n -= 1;
        let lo = n - ORDER_DIGITS;

        let top = dst[n];
        let borrow = mp::sub_mul_digit(&mut dst[lo..n], &ORDER, top);
        dst[n] = dst[n].wrapping_sub(borrow);

        while dst[n] != 0 {
            let borrow = mp::sub(&mut dst[lo..n], &ORDER);
            dst[n] = dst[n].wrapping_sub(borrow);
        }
    }

    if mp::cmp(&dst[..ORDER_DIGITS], &ORDER) != Ordering::Less {
        mp::sub(&mut dst[..ORDER_DIGITS], &ORDER);
    }
}
