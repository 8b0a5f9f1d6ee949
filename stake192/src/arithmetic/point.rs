//! Elliptic-curve points on secp192r1 in affine and Jacobian coordinates.
//!
//! The short-Weierstrass equation is `y² = x³ − 3x + b`; the `a = −3`
//! specialization shapes the doubling formula. A Jacobian triple
//! `(X, Y, Z)` with `Z ≠ 0` stands for the affine point `(X/Z², Y/Z³)`,
//! and `Z = 0` is the point at infinity, written `(1, 1, 0)`.

use crate::arithmetic::field::FieldElement;
use crate::arithmetic::scalar::Scalar;
use crate::{Error, FP_DIGITS, ORDER_BITS, Result};
use mpnat::Digit;
use zeroize::Zeroize;

const THREE: FieldElement = FieldElement::from_words([3, 0, 0, 0, 0, 0]);

/// Point on the curve in affine coordinates.
///
/// The point at infinity has no affine representation; operations that
/// could produce it return [`Error::PointAtInfinity`] instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    x: FieldElement,
    y: FieldElement,
}

impl AffinePoint {
    /// Base point of secp192r1.
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_words([
            0x82FF_1012,
            0xF4FF_0AFD,
            0x43A1_8800,
            0x7CBF_20EB,
            0xB030_90F6,
            0x188D_A80E,
        ]),
        y: FieldElement::from_words([
            0x1E79_4811,
            0x73F9_77A1,
            0x6B24_CDD5,
            0x6310_11ED,
            0xFFC8_DA78,
            0x0719_2B95,
        ]),
    };

    /// Creates a point from coordinates without checking curve membership.
    ///
    /// Use [`AffinePoint::is_on_curve`] (or the gated entry points that
    /// call it) before trusting a peer-supplied point.
    pub const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Creates a point from `X ‖ Y` little-endian digits, unchecked.
    pub fn from_words(words: [Digit; 2 * FP_DIGITS]) -> Self {
        let mut x = [0; FP_DIGITS];
        let mut y = [0; FP_DIGITS];
        x.copy_from_slice(&words[..FP_DIGITS]);
        y.copy_from_slice(&words[FP_DIGITS..]);

        Self {
            x: FieldElement::from_words(x),
            y: FieldElement::from_words(y),
        }
    }

    /// Returns the point as `X ‖ Y` little-endian digits.
    pub fn to_words(self) -> [Digit; 2 * FP_DIGITS] {
        let mut words = [0; 2 * FP_DIGITS];
        words[..FP_DIGITS].copy_from_slice(&self.x.to_words());
        words[FP_DIGITS..].copy_from_slice(&self.y.to_words());
        words
    }

    /// Parses a point from its 48-byte `X ‖ Y` little-endian encoding,
    /// unchecked.
    pub fn from_bytes(bytes: &[u8; 48]) -> Self {
        let mut x = [0; 24];
        let mut y = [0; 24];
        x.copy_from_slice(&bytes[..24]);
        y.copy_from_slice(&bytes[24..]);

        Self {
            x: FieldElement::from_bytes(&x),
            y: FieldElement::from_bytes(&y),
        }
    }

    /// Returns the 48-byte `X ‖ Y` little-endian encoding of the point.
    pub fn to_bytes(self) -> [u8; 48] {
        let mut bytes = [0; 48];
        bytes[..24].copy_from_slice(&self.x.to_bytes());
        bytes[24..].copy_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Checks that the point satisfies the curve equation.
    ///
    /// Rather than storing `b`, the test compares the point's equation
    /// residue against the generator's:
    /// `y_G² − y_P² − (x_G² − 3)·x_G + (x_P² − 3)·x_P = 0`
    /// holds exactly when both points evaluate `y² − x³ + 3x` to the same
    /// constant, which for the generator is `b`.
    pub fn is_on_curve(&self) -> bool {
        let g = &Self::GENERATOR;

        let mut acc = g.y.square() - self.y.square();
        acc = acc - (g.x.square() - THREE) * g.x;
        acc = acc + (self.x.square() - THREE) * self.x;
        acc.is_zero()
    }

    /// Scalar multiplication `[k] self` by a signed-digit ladder.
    ///
    /// The binary expansion of `k` is recoded on the fly into a
    /// `{−1, 0, +1}` sequence (equivalent to a non-adjacent form) carrying
    /// one extra bit, so the loop runs [`ORDER_BITS`] + 1 steps with a
    /// final carry-flush step. Returns [`Error::PointAtInfinity`] when the
    /// product is the group identity.
    pub fn mul(&self, k: &Scalar) -> Result<Self> {
        let mut acc = ProjectivePoint::IDENTITY;
        let mut base = ProjectivePoint::from_affine(self);

        let mut bit = k.bit(0);
        let mut carry = 0;

        for i in 0..=ORDER_BITS {
            let bit_next = if i < ORDER_BITS - 1 { k.bit(i + 1) } else { 0 };
            let carry_next = (bit + bit_next + carry) / 2;
            let digit = bit as i32 + carry as i32 - 2 * carry_next as i32;
            bit = bit_next;
            carry = carry_next;

            if digit != 0 {
                acc = acc.add_signed(&base, digit < 0);
            }

            base = base.double();
        }

        acc.to_affine()
    }

    /// Scalar multiplication gated by curve membership.
    ///
    /// Peer-supplied points go through here: an off-curve input is
    /// rejected with [`Error::NotOnCurve`] before any group operation
    /// touches it.
    pub fn mul_checked(&self, k: &Scalar) -> Result<Self> {
        if !self.is_on_curve() {
            return Err(Error::NotOnCurve);
        }

        self.mul(k)
    }

    /// Simultaneous scalar product `[kp] p + [kq] q` (Shamir's trick).
    ///
    /// Precomputes `p + q` and walks both scalars high bit first with a
    /// single shared doubling per step.
    pub fn lincomb(p: &Self, kp: &Scalar, q: &Self, kq: &Scalar) -> Result<Self> {
        let base_p = ProjectivePoint::from_affine(p);
        let base_q = ProjectivePoint::from_affine(q);
        let base_pq = base_p.add(&base_q);

        let mut acc = ProjectivePoint::IDENTITY;

        for i in (0..ORDER_BITS).rev() {
            acc = acc.double();

            match (kp.bit(i), kq.bit(i)) {
                (1, 1) => acc = acc.add(&base_pq),
                (1, 0) => acc = acc.add(&base_p),
                (0, 1) => acc = acc.add(&base_q),
                _ => (),
            }
        }

        acc.to_affine()
    }
}

impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

/// Point on the curve in Jacobian projective coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Lifts an affine point (`Z = 1`).
    pub fn from_affine(p: &AffinePoint) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        }
    }

    /// Returns whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Converts to affine coordinates; the point at infinity has none.
    pub fn to_affine(&self) -> Result<AffinePoint> {
        if self.z.is_zero() {
            return Err(Error::PointAtInfinity);
        }

        let z_inv = self.z.invert();
        let y = self.y * z_inv;
        let z_inv2 = z_inv.square();

        Ok(AffinePoint {
            x: self.x * z_inv2,
            y: y * z_inv2,
        })
    }

    /// Point doubling `[2] self` with the `a = −3` formulas:
    /// `M = 3(X − Z²)(X + Z²)`, `Z' = 2YZ`, `S = 4XY²`, `X' = M² − 2S`,
    /// `Y' = M(S − X') − 8Y⁴`.
    pub fn double(&self) -> Self {
        if self.y.is_zero() || self.z.is_zero() {
            return Self::IDENTITY;
        }

        let zz = self.z.square();
        let m = {
            let t = (self.x - zz) * (self.x + zz);
            t + t + t
        };

        let z3 = {
            let t = self.y * self.z;
            t + t
        };

        let yy = self.y.square();
        let s = {
            let t = self.x * yy;
            let t = t + t;
            t + t
        };

        let x3 = m.square() - s - s;

        let t8 = {
            let t = yy.square();
            let t = t + t;
            let t = t + t;
            t + t
        };

        Self {
            x: x3,
            y: m * (s - x3) - t8,
            z: z3,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        self.add_signed(other, false)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add_signed(other, true)
    }

    /// Jacobian point addition of `self` and `±other`.
    ///
    /// `other` is usually a lifted affine point (`Z = 1`); the general
    /// `Z ≠ 1` normalization is applied when it is not. Equal-x inputs
    /// fall through to doubling (equal points) or the identity (opposite
    /// points). The formulas here are the symmetric variant working on
    /// `U1 ± U2` and `S1 ± S2`, which computes twice the result's
    /// y-coordinate and halves it at the end through a multiplication by
    /// the field's inverse of two.
    pub(crate) fn add_signed(&self, other: &Self, negate_other: bool) -> Self {
        let qx = other.x;
        let qy = if negate_other { -other.y } else { other.y };

        if self.z.is_zero() {
            return Self {
                x: qx,
                y: qy,
                z: other.z,
            };
        }

        if other.z.is_zero() {
            return *self;
        }

        // Normalize both inputs to a shared denominator.
        let (mut u1, mut s1) = (self.x, self.y);
        if !other.z.is_one() {
            let qzz = other.z.square();
            u1 = u1 * qzz;
            s1 = s1 * (qzz * other.z);
        }

        let pzz = self.z.square();
        let u2 = qx * pzz;
        let s2 = qy * (pzz * self.z);

        let w = u1 - u2;
        let r = s1 - s2;

        if w.is_zero() {
            if r.is_zero() {
                let q = Self {
                    x: qx,
                    y: qy,
                    z: other.z,
                };
                return q.double();
            }

            return Self::IDENTITY;
        }

        let u_sum = u1 + u1 - w; // u1 + u2
        let s_sum = s1 + s1 - r; // s1 + s2

        let mut z3 = self.z;
        if !other.z.is_one() {
            z3 = z3 * other.z;
        }
        z3 = z3 * w;

        let ww = w.square();
        let www = w * ww;
        let t = ww * u_sum;
        let x3 = r.square() - t;
        let y3 = (r * (t - x3 - x3) - www * s_sum) * FieldElement::INV_OF_2;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        Self::from_affine(&p)
    }
}
