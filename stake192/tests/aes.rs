//! AES-128 CBC tests.

use hex_literal::hex;
use stake192::aes::Aes128;

#[test]
fn sp800_38a_cbc_first_block() {
    let cipher = Aes128::new(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
    let iv = hex!("000102030405060708090a0b0c0d0e0f");
    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a");

    let mut ciphertext = [0; 32];
    let written = cipher.cbc_encrypt(&mut ciphertext, &plaintext, &iv);

    // One data block plus the mandatory pad block.
    assert_eq!(written, 32);
    assert_eq!(
        &ciphertext[..16],
        &hex!("7649abac8119b246cee98e9b12e9197d")
    );

    let mut recovered = [0; 32];
    let len = cipher.cbc_decrypt(&mut recovered, &ciphertext, &iv);
    assert_eq!(&recovered[..len], &plaintext);
}

#[test]
fn single_zero_byte_under_zero_key() {
    let cipher = Aes128::new(&[0; 16]);
    let iv = [0; 16];

    let mut ciphertext = [0; 16];
    let written = cipher.cbc_encrypt(&mut ciphertext, &[0], &iv);
    assert_eq!(written, 16);

    // With a zero IV and a one-byte zero plaintext the padded block is
    // (00, 0F x 15); the ciphertext is its single-block encryption.
    let mut expected = [0x0F; 16];
    expected[0] = 0x00;
    cipher.encrypt_block(&mut expected);
    assert_eq!(ciphertext, expected);

    let mut recovered = [0; 16];
    let len = cipher.cbc_decrypt(&mut recovered, &ciphertext, &iv);
    assert_eq!(&recovered[..len], &[0]);
}

#[test]
fn cbc_round_trips_all_tail_lengths() {
    let cipher = Aes128::new(&hex!("000102030405060708090a0b0c0d0e0f"));
    let iv = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

    let data: [u8; 40] = core::array::from_fn(|i| (7 * i + 3) as u8);

    for len in 0..=data.len() {
        let mut ciphertext = [0; 56];
        let ct_len = cipher.cbc_encrypt(&mut ciphertext, &data[..len], &iv);

        assert_eq!(ct_len % 16, 0);
        assert!(ct_len > len);

        let mut recovered = [0; 56];
        let pt_len = cipher.cbc_decrypt(&mut recovered, &ciphertext[..ct_len], &iv);

        assert_eq!(pt_len, len);
        assert_eq!(&recovered[..pt_len], &data[..len]);
    }
}

#[test]
fn chaining_differs_from_ecb() {
    let cipher = Aes128::new(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
    let iv = hex!("000102030405060708090a0b0c0d0e0f");

    // Two identical plaintext blocks must encrypt differently under CBC.
    let plaintext = [0xAB; 32];
    let mut ciphertext = [0; 48];
    cipher.cbc_encrypt(&mut ciphertext, &plaintext, &iv);

    assert_ne!(&ciphertext[..16], &ciphertext[16..32]);
}
