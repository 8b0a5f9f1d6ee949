//! Field arithmetic modulo p = 2^{192} − 2^{64} − 1.
//!
//! Elements are six 32-bit digits, least-significant first, always kept
//! reduced to `[0, p)`. Products are reduced with the curve's fast
//! Solinas-style folding instead of a general division.

use crate::FP_DIGITS;
use core::fmt::{self, Debug};
use core::ops::{Add, Mul, Neg, Sub};
use mpnat::{self as mp, Digit};
use zeroize::Zeroize;

/// p = 2^{192} − 2^{64} − 1
pub(crate) const MODULUS: [Digit; FP_DIGITS] = [
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFE,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// Element of the secp192r1 base field used for curve coordinates.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct FieldElement(pub(crate) [Digit; FP_DIGITS]);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0; FP_DIGITS]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0]);

    /// (p + 1) / 2, the inverse of 2 modulo p. The point-addition formula
    /// ends in a halving, which this turns into a multiplication.
    pub(crate) const INV_OF_2: Self = Self([
        0x0000_0000,
        0x8000_0000,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x7FFF_FFFF,
    ]);

    /// Creates an element from little-endian digits.
    ///
    /// The value is the caller's responsibility to keep below the modulus;
    /// out-of-range digits are not reduced.
    pub const fn from_words(words: [Digit; FP_DIGITS]) -> Self {
        Self(words)
    }

    /// Returns the element as little-endian digits.
    pub const fn to_words(self) -> [Digit; FP_DIGITS] {
        self.0
    }

    /// Parses an element from its 24-byte little-endian encoding.
    pub fn from_bytes(bytes: &[u8; 24]) -> Self {
        let mut words = [0; FP_DIGITS];

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

    /// Returns the 24-byte little-endian encoding of the element.
    pub fn to_bytes(self) -> [u8; 24] {
        let mut bytes = [0; 24];

        for (i, w) in self.0.iter().enumerate() {
            bytes[4 * i..4 * i + 4].copy_from_slice(&w.to_le_bytes());
        }

        bytes
    }

    /// Returns whether the element is zero.
    pub fn is_zero(&self) -> bool {
        mp::is_zero(&self.0)
    }

    /// Returns whether the element is one.
    pub fn is_one(&self) -> bool {
        mp::cmp_digit(&self.0, 1) == core::cmp::Ordering::Equal
    }

    /// Field addition.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut w = self.0;

        if mp::add(&mut w, &rhs.0) != 0 {
            mp::sub(&mut w, &MODULUS);
        } else if mp::cmp(&w, &MODULUS) != core::cmp::Ordering::Less {
            mp::sub(&mut w, &MODULUS);
        }

        Self(w)
    }

    /// Field subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut w = self.0;

        if mp::sub(&mut w, &rhs.0) != 0 {
            mp::add(&mut w, &MODULUS);
        }

        Self(w)
    }

    /// Field multiplication.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut wide = [0; 2 * FP_DIGITS];
        mp::mul(&mut wide, &self.0, &rhs.0);
        Self::reduce_wide(wide)
    }

    /// Field squaring.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Additive inverse: `p − self` for nonzero elements, zero otherwise.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return *self;
        }

        let mut w = MODULUS;
        mp::sub(&mut w, &self.0);
        Self(w)
    }

    /// Multiplicative inverse via the binary extended Euclidean algorithm.
    ///
    /// Inverting zero yields zero; callers gate zero where it matters.
    pub fn invert(&self) -> Self {
        let mut w = self.0;
        mp::invert_mod_prime(&mut w, &MODULUS);
        Self(w)
    }

    /// Reduces a double-width product modulo p.
    ///
    /// With the low half `L` and high half `H = (h0..h5)`, p's shape gives
    /// `H * 2^192 ≡ H + (h0..h3) * 2^64 + (h4, h5, h4, h5, 0, 0) (mod p)`,
    /// so three additions fold the high half down; accumulated carries are
    /// peeled off by subtracting p, with one final conditional subtract.
    pub(crate) fn reduce_wide(mut wide: [Digit; 2 * FP_DIGITS]) -> Self {
        let (lo, hi) = wide.split_at_mut(FP_DIGITS);

        let mut carry = mp::add(lo, hi);
        carry += mp::add(&mut lo[2..], &hi[..FP_DIGITS - 2]);

        let fold = [hi[4], hi[5], hi[4], hi[5], 0, 0];
        carry += mp::add(lo, &fold);

        while carry > 0 {
            carry -= mp::sub(lo, &MODULUS);
        }

        if mp::cmp(lo, &MODULUS) != core::cmp::Ordering::Less {
            mp::sub(lo, &MODULUS);
        }

        let mut out = [0; FP_DIGITS];
        out.copy_from_slice(lo);
        Self(out)
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;

        for w in self.0.iter().rev() {
            write!(f, "{w:08X}")?;
        }

        write!(f, ")")
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement::add(&self, &rhs)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &rhs)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &rhs)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}
