//! Field arithmetic invariants.

use proptest::prelude::*;
use stake192::FieldElement;

prop_compose! {
    /// Arbitrary field element below 2^191 (and so below the modulus).
    fn field_element()(mut bytes in any::<[u8; 24]>()) -> FieldElement {
        bytes[23] &= 0x7F;
        FieldElement::from_bytes(&bytes)
    }
}

proptest! {
    #[test]
    fn add_sub_round_trip(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
        prop_assert_eq!(a.sub(&b).add(&b), a);
    }

    #[test]
    fn neg_is_involutive(a in field_element()) {
        prop_assert_eq!(a.neg().neg(), a);
        prop_assert_eq!(a.add(&a.neg()), FieldElement::ZERO);
    }

    #[test]
    fn mul_commutes(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn invert_round_trips(a in field_element()) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(a.mul(&a.invert()), FieldElement::ONE);
        prop_assert_eq!(a.invert().invert(), a);
    }

    #[test]
    fn square_matches_mul(a in field_element()) {
        prop_assert_eq!(a.square(), a.mul(&a));
    }

    #[test]
    fn bytes_round_trip(a in field_element()) {
        prop_assert_eq!(FieldElement::from_bytes(&a.to_bytes()), a);
    }
}

#[test]
fn zero_stays_fixed() {
    assert_eq!(FieldElement::ZERO.neg(), FieldElement::ZERO);
    assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
}
