//! Curve group tests: ladder closure, identities, order behavior.

use hex_literal::hex;
use proptest::prelude::*;
use stake192::{AffinePoint, Error, Scalar};

/// The group order as a little-endian scalar encoding.
fn order_bytes() -> [u8; 24] {
    let mut bytes = hex!("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831");
    bytes.reverse();
    bytes
}

#[test]
fn order_times_generator_is_infinity() {
    let n = Scalar::from_bytes(&order_bytes());
    assert_eq!(
        AffinePoint::GENERATOR.mul(&n),
        Err(Error::PointAtInfinity)
    );
}

#[test]
fn order_minus_one_negates_generator() {
    let mut bytes = order_bytes();
    bytes[0] -= 1;

    let g = AffinePoint::GENERATOR;
    let neg_g = g.mul(&Scalar::from_bytes(&bytes)).unwrap();

    assert_eq!(neg_g.x(), g.x());
    assert_eq!(neg_g.y(), g.y().neg());
}

#[test]
fn zero_scalar_is_infinity() {
    assert_eq!(
        AffinePoint::GENERATOR.mul(&Scalar::ZERO),
        Err(Error::PointAtInfinity)
    );
}

#[test]
fn lincomb_reaching_infinity_is_reported() {
    let mut bytes = order_bytes();
    bytes[0] -= 1;
    let n_minus_one = Scalar::from_bytes(&bytes);

    // [n - 1]G + [1]G = [n]G
    let g = AffinePoint::GENERATOR;
    assert_eq!(
        AffinePoint::lincomb(&g, &n_minus_one, &g, &Scalar::ONE),
        Err(Error::PointAtInfinity)
    );
}

#[test]
fn checked_mul_rejects_off_curve_points() {
    let mut words = AffinePoint::GENERATOR.to_words();
    words[0] ^= 1;
    let bogus = AffinePoint::from_words(words);

    assert_eq!(
        bogus.mul_checked(&Scalar::ONE),
        Err(Error::NotOnCurve)
    );
    assert!(AffinePoint::GENERATOR.mul_checked(&Scalar::ONE).is_ok());
}

prop_compose! {
    /// Nonzero scalar below the group order.
    fn scalar()(mut bytes in any::<[u8; 24]>()) -> Scalar {
        bytes[23] &= 0x7F;
        bytes[0] |= 1;
        Scalar::from_bytes(&bytes)
    }
}

proptest! {
    // Scalar multiples of the generator stay on the curve.
    #[test]
    fn ladder_output_is_on_curve(k in scalar()) {
        let p = AffinePoint::GENERATOR.mul(&k).unwrap();
        prop_assert!(p.is_on_curve());
    }

    // [a]([b]G) = [b]([a]G)
    #[test]
    fn ladder_commutes(a in scalar(), b in scalar()) {
        let ab = AffinePoint::GENERATOR.mul(&a).unwrap().mul(&b).unwrap();
        let ba = AffinePoint::GENERATOR.mul(&b).unwrap().mul(&a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    // Shamir's trick agrees with two separate ladders composed through
    // the scalar relation [k]G + [k]G = [2k mod n]G.
    #[test]
    fn lincomb_matches_doubled_scalar(k in scalar()) {
        let p = AffinePoint::GENERATOR.mul(&k).unwrap();
        let two = Scalar::from_words([2, 0, 0, 0, 0, 0]);

        let via_lincomb = AffinePoint::lincomb(&p, &Scalar::ONE, &p, &Scalar::ONE);
        let via_ladder = p.mul(&two);

        match (via_lincomb, via_ladder) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn point_bytes_round_trip(k in scalar()) {
        let p = AffinePoint::GENERATOR.mul(&k).unwrap();
        prop_assert_eq!(AffinePoint::from_bytes(&p.to_bytes()), p);
    }
}
