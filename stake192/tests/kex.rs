//! STAKE and PKI key-exchange protocol tests.

use rand_core::OsRng;
use stake192::{
    AffinePoint, Error, FieldElement, PublicKey, SecretKey,
    kex::{pki::Pki, stake::Stake},
};

fn keypair() -> (SecretKey, PublicKey) {
    let secret = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public = secret.public_key().unwrap();
    (secret, public)
}

fn off_curve_point() -> AffinePoint {
    AffinePoint::new(FieldElement::ONE, FieldElement::ONE)
}

#[test]
fn stake_full_run_agrees() {
    let (alice_secret, alice_public) = keypair();
    let (bob_secret, bob_public) = keypair();

    let mut alice = Stake::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    let mut bob = Stake::try_from_rng(&bob_secret, &alice_public, &mut OsRng).unwrap();

    let q1_alice = alice.q1().unwrap();
    let q1_bob = bob.q1().unwrap();

    let q2_alice = alice.q2(&q1_bob).unwrap();
    let q2_bob = bob.q2(&q1_alice).unwrap();

    alice.q3(&q2_bob).unwrap();
    bob.q3(&q2_alice).unwrap();

    assert_eq!(
        alice.session_key().unwrap().as_bytes(),
        bob.session_key().unwrap().as_bytes()
    );
    assert_eq!(
        alice.session_key_le().unwrap().as_bytes(),
        bob.session_key_le().unwrap().as_bytes()
    );
}

#[test]
fn stake_with_unit_long_term_keys_agrees() {
    // Degenerate long-term scalars; the ephemerals still randomize the
    // shared point.
    let mut one = [0u8; 24];
    one[0] = 1;
    let secret = SecretKey::from_bytes(&one);
    let public = secret.public_key().unwrap();

    let mut alice = Stake::try_from_rng(&secret, &public, &mut OsRng).unwrap();
    let mut bob = Stake::try_from_rng(&secret, &public, &mut OsRng).unwrap();

    let q1_alice = alice.q1().unwrap();
    let q1_bob = bob.q1().unwrap();
    let q2_alice = alice.q2(&q1_bob).unwrap();
    let q2_bob = bob.q2(&q1_alice).unwrap();
    alice.q3(&q2_bob).unwrap();
    bob.q3(&q2_alice).unwrap();

    assert_eq!(
        alice.session_key().unwrap().as_bytes(),
        bob.session_key().unwrap().as_bytes()
    );
}

#[test]
fn stake_rejects_off_curve_inputs() {
    let (alice_secret, _) = keypair();
    let (_, bob_public) = keypair();

    let mut alice = Stake::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();

    assert_eq!(alice.q2(&off_curve_point()).unwrap_err(), Error::NotOnCurve);
    assert_eq!(alice.q3(&off_curve_point()).unwrap_err(), Error::NotOnCurve);

    // A failed step leaves the session key unavailable.
    assert_eq!(alice.session_key().unwrap_err(), Error::NotReady);
}

#[test]
fn stake_session_key_requires_q3() {
    let (alice_secret, _) = keypair();
    let (_, bob_public) = keypair();

    let alice = Stake::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    assert_eq!(alice.session_key().unwrap_err(), Error::NotReady);
}

#[test]
fn pki_full_run_agrees() {
    let (alice_secret, alice_public) = keypair();
    let (bob_secret, bob_public) = keypair();

    let mut alice = Pki::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    let mut bob = Pki::try_from_rng(&bob_secret, &alice_public, &mut OsRng).unwrap();

    let (q1_alice, sig_alice) = alice.q1_with_rng(&mut OsRng).unwrap();
    let (q1_bob, sig_bob) = bob.q1_with_rng(&mut OsRng).unwrap();

    alice.q2(&q1_bob, &sig_bob).unwrap();
    bob.q2(&q1_alice, &sig_alice).unwrap();

    assert_eq!(
        alice.session_key().unwrap().as_bytes(),
        bob.session_key().unwrap().as_bytes()
    );
}

#[test]
fn pki_failure_modes_stay_distinct() {
    let (alice_secret, alice_public) = keypair();
    let (bob_secret, bob_public) = keypair();

    let mut alice = Pki::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    let bob = Pki::try_from_rng(&bob_secret, &alice_public, &mut OsRng).unwrap();

    let (q1_bob, sig_bob) = bob.q1_with_rng(&mut OsRng).unwrap();

    // Off-curve point: the curve failure wins, before authentication.
    assert_eq!(
        alice.q2(&off_curve_point(), &sig_bob).unwrap_err(),
        Error::NotOnCurve
    );

    // Wrong signer: signature failure.
    let (mallory_secret, _) = keypair();
    let mut mallory = Pki::try_from_rng(&mallory_secret, &alice_public, &mut OsRng).unwrap();
    let (q1_mallory, sig_mallory) = mallory.q1_with_rng(&mut OsRng).unwrap();
    assert_eq!(
        alice.q2(&q1_mallory, &sig_mallory).unwrap_err(),
        Error::BadSignature
    );

    // Signature for a different point: also a signature failure.
    assert_eq!(
        alice.q2(&q1_bob, &sig_mallory).unwrap_err(),
        Error::BadSignature
    );

    assert_eq!(alice.session_key().unwrap_err(), Error::NotReady);

    // A clean exchange still succeeds afterwards on a fresh context.
    let mut alice = Pki::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    let mut bob2 = Pki::try_from_rng(&bob_secret, &alice_public, &mut OsRng).unwrap();
    let (q1_alice, sig_alice) = alice.q1_with_rng(&mut OsRng).unwrap();
    let (q1_bob2, sig_bob2) = bob2.q1_with_rng(&mut OsRng).unwrap();
    alice.q2(&q1_bob2, &sig_bob2).unwrap();
    bob2.q2(&q1_alice, &sig_alice).unwrap();
    assert_eq!(
        alice.session_key().unwrap().as_bytes(),
        bob2.session_key().unwrap().as_bytes()
    );
}

#[test]
fn legacy_and_le_derivations_differ() {
    let (alice_secret, alice_public) = keypair();
    let (bob_secret, bob_public) = keypair();

    let mut alice = Stake::try_from_rng(&alice_secret, &bob_public, &mut OsRng).unwrap();
    let mut bob = Stake::try_from_rng(&bob_secret, &alice_public, &mut OsRng).unwrap();

    let q1_alice = alice.q1().unwrap();
    let q1_bob = bob.q1().unwrap();
    let q2_alice = alice.q2(&q1_bob).unwrap();
    let q2_bob = bob.q2(&q1_alice).unwrap();
    alice.q3(&q2_bob).unwrap();
    bob.q3(&q2_alice).unwrap();

    // The wire-compatible packing reads different key bytes than the
    // little-endian packing, so the two variants must not collide.
    assert_ne!(
        alice.session_key().unwrap().as_bytes(),
        alice.session_key_le().unwrap().as_bytes()
    );
}
