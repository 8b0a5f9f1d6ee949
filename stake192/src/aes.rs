//! AES-128 block cipher and the CBC mode used by the key-exchange layer.
//!
//! Ten-round AES per FIPS-197 on 16-byte blocks with a 176-byte expanded
//! key. The S-box and its inverse are derived at compile time from the
//! GF(2⁸) inversion and affine transform instead of being transcribed.
//!
//! The CBC mode always pads: encryption appends `16 − len % 16` bytes of
//! that same value (a full block when the input is block-aligned), so the
//! ciphertext is strictly longer than the plaintext. Decryption reads the
//! pad length from the final byte and strips it without validating the
//! remaining pad bytes.

/// Cipher block size in bytes.
pub const BLOCK_BYTES: usize = 16;

/// Key size in bytes.
pub const KEY_BYTES: usize = 16;

/// Expanded-key size in bytes.
const EKEY_BYTES: usize = 176;

/// Multiplication by `x` in GF(2⁸) modulo `x⁸ + x⁴ + x³ + x + 1`.
const fn mul_by_x(b: u8) -> u8 {
    if b & 0x80 != 0 { (b << 1) ^ 0x1B } else { b << 1 }
}

/// GF(2⁸) product (Russian-peasant multiplication).
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut acc = 0;

    while b != 0 {
        if b & 1 != 0 {
            acc ^= a;
        }
        a = mul_by_x(a);
        b >>= 1;
    }

    acc
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0; 256];
    let mut x = 0usize;

    while x < 256 {
        // Multiplicative inverse, with 0 mapped to 0.
        let mut inv = 0u8;
        let mut y = 1usize;
        while y < 256 {
            if gf_mul(x as u8, y as u8) == 1 {
                inv = y as u8;
                break;
            }
            y += 1;
        }

        // Affine transform: s = inv ^ rotl1 ^ rotl2 ^ rotl3 ^ rotl4 ^ 0x63.
        sbox[x] = inv
            ^ inv.rotate_left(1)
            ^ inv.rotate_left(2)
            ^ inv.rotate_left(3)
            ^ inv.rotate_left(4)
            ^ 0x63;
        x += 1;
    }

    sbox
}

const fn build_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0; 256];
    let mut x = 0;

    while x < 256 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }

    inv
}

const SBOX: [u8; 256] = build_sbox();
const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);

fn xor_block(dst: &mut [u8; BLOCK_BYTES], src: &[u8]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// AES-128 with a precomputed key schedule.
#[derive(Clone)]
pub struct Aes128 {
    ekey: [u8; EKEY_BYTES],
}

impl Aes128 {
    /// Expands `key` into the ten round keys.
    pub fn new(key: &[u8; KEY_BYTES]) -> Self {
        let mut ekey = [0; EKEY_BYTES];
        ekey[..KEY_BYTES].copy_from_slice(key);

        let mut rc = 0x01u8;
        let mut i = KEY_BYTES;

        while i < EKEY_BYTES {
            let mut word = [
                ekey[i - 4],
                ekey[i - 3],
                ekey[i - 2],
                ekey[i - 1],
            ];

            if i % KEY_BYTES == 0 {
                // SubWord, RotWord, and the round constant.
                word = [
                    SBOX[word[1] as usize] ^ rc,
                    SBOX[word[2] as usize],
                    SBOX[word[3] as usize],
                    SBOX[word[0] as usize],
                ];
                rc = mul_by_x(rc);
            }

            for (j, w) in word.iter().enumerate() {
                ekey[i + j] = w ^ ekey[i + j - KEY_BYTES];
            }

            i += 4;
        }

        Self { ekey }
    }

    fn round_key(&self, round: usize) -> &[u8] {
        &self.ekey[BLOCK_BYTES * round..BLOCK_BYTES * (round + 1)]
    }

    /// Encrypts one block in place.
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        xor_block(block, self.round_key(0));

        for round in 1..=10 {
            sub_bytes(block);
            shift_rows(block);

            if round < 10 {
                mix_columns(block);
            }

            xor_block(block, self.round_key(round));
        }
    }

    /// Decrypts one block in place.
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        xor_block(block, self.round_key(10));

        for round in (0..10).rev() {
            inv_shift_rows(block);
            inv_sub_bytes(block);
            xor_block(block, self.round_key(round));

            if round > 0 {
                inv_mix_columns(block);
            }
        }
    }

    /// CBC encryption with implicit padding.
    ///
    /// `out` must hold `input.len() + (16 − input.len() % 16)` bytes;
    /// the number of ciphertext bytes written is returned and is always a
    /// multiple of the block size, strictly greater than `input.len()`.
    pub fn cbc_encrypt(&self, out: &mut [u8], mut input: &[u8], iv: &[u8; BLOCK_BYTES]) -> usize {
        let mut buf = [0; BLOCK_BYTES];
        xor_block(&mut buf, iv);

        let mut written = 0;

        while input.len() >= BLOCK_BYTES {
            xor_block(&mut buf, &input[..BLOCK_BYTES]);
            self.encrypt_block(&mut buf);
            out[written..written + BLOCK_BYTES].copy_from_slice(&buf);
            written += BLOCK_BYTES;
            input = &input[BLOCK_BYTES..];
        }

        let pad = (BLOCK_BYTES - input.len()) as u8;

        for (i, &b) in input.iter().enumerate() {
            buf[i] ^= b;
        }

        for b in &mut buf[input.len()..] {
            *b ^= pad;
        }

        self.encrypt_block(&mut buf);
        out[written..written + BLOCK_BYTES].copy_from_slice(&buf);
        written + BLOCK_BYTES
    }

    /// CBC decryption.
    ///
    /// `input` must be a nonzero multiple of the block size. The pad
    /// length is read from the last plaintext byte and stripped without
    /// validation; the number of plaintext bytes written is returned.
    pub fn cbc_decrypt(&self, out: &mut [u8], mut input: &[u8], iv: &[u8; BLOCK_BYTES]) -> usize {
        let mut chain = [0; BLOCK_BYTES];
        xor_block(&mut chain, iv);

        let mut written = 0;

        while input.len() > BLOCK_BYTES {
            let mut block = [0; BLOCK_BYTES];
            block.copy_from_slice(&input[..BLOCK_BYTES]);
            self.decrypt_block(&mut block);
            xor_block(&mut block, &chain);
            out[written..written + BLOCK_BYTES].copy_from_slice(&block);

            chain.copy_from_slice(&input[..BLOCK_BYTES]);
            input = &input[BLOCK_BYTES..];
            written += BLOCK_BYTES;
        }

        let mut block = [0; BLOCK_BYTES];
        block.copy_from_slice(&input[..BLOCK_BYTES]);
        self.decrypt_block(&mut block);
        xor_block(&mut block, &chain);

        let take = BLOCK_BYTES.saturating_sub(block[BLOCK_BYTES - 1] as usize);
        out[written..written + take].copy_from_slice(&block[..take]);
        written + take
    }
}

fn sub_bytes(block: &mut [u8; BLOCK_BYTES]) {
    for b in block.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

fn inv_sub_bytes(block: &mut [u8; BLOCK_BYTES]) {
    for b in block.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

/// Rotates row `r` of the column-major state left by `r` cells.
fn shift_rows(block: &mut [u8; BLOCK_BYTES]) {
    let old = *block;

    for row in 1..4 {
        for col in 0..4 {
            block[4 * col + row] = old[4 * ((col + row) % 4) + row];
        }
    }
}

fn inv_shift_rows(block: &mut [u8; BLOCK_BYTES]) {
    let old = *block;

    for row in 1..4 {
        for col in 0..4 {
            block[4 * ((col + row) % 4) + row] = old[4 * col + row];
        }
    }
}

fn mix_columns(block: &mut [u8; BLOCK_BYTES]) {
    for col in block.chunks_exact_mut(4) {
        let [a, b, c, d] = [col[0], col[1], col[2], col[3]];
        col[0] = gf_mul(a, 2) ^ gf_mul(b, 3) ^ c ^ d;
        col[1] = a ^ gf_mul(b, 2) ^ gf_mul(c, 3) ^ d;
        col[2] = a ^ b ^ gf_mul(c, 2) ^ gf_mul(d, 3);
        col[3] = gf_mul(a, 3) ^ b ^ c ^ gf_mul(d, 2);
    }
}

fn inv_mix_columns(block: &mut [u8; BLOCK_BYTES]) {
    for col in block.chunks_exact_mut(4) {
        let [a, b, c, d] = [col[0], col[1], col[2], col[3]];
        col[0] = gf_mul(a, 14) ^ gf_mul(b, 11) ^ gf_mul(c, 13) ^ gf_mul(d, 9);
        col[1] = gf_mul(a, 9) ^ gf_mul(b, 14) ^ gf_mul(c, 11) ^ gf_mul(d, 13);
        col[2] = gf_mul(a, 13) ^ gf_mul(b, 9) ^ gf_mul(c, 14) ^ gf_mul(d, 11);
        col[3] = gf_mul(a, 11) ^ gf_mul(b, 13) ^ gf_mul(c, 9) ^ gf_mul(d, 14);
    }
}
