//! AES-ECB block encryption/decryption, generic over `KEY_LEN` (16, 24, or
//! 32 bytes). Ports `AES_ECBEncrypt`/`AES_ECBDecrypt`, keeping the
//! "straightforward" (non-equivalent) inverse cipher ordering the original
//! used for decryption: `AddRoundKey`, `InvMixColumns`, `InvShiftRows`,
//! `InvSubBytes` per round, rather than reordering into the textbook
//! equivalent-inverse-cipher form.

use super::schedule::KeySchedule;
use super::tables::{gf_mul, INV_SBOX, SBOX};

/// Length of an AES block, in bytes.
pub const BLOCK_LEN: usize = 16;

type State = [[u8; 4]; 4];

fn bytes_to_state(block: &[u8; 16]) -> State {
    let mut s = [[0u8; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            s[r][c] = block[4 * c + r];
        }
    }
    s
}

fn state_to_bytes(s: &State) -> [u8; 16] {
    let mut out = [0u8; 16];
    for c in 0..4 {
        for r in 0..4 {
            out[4 * c + r] = s[r][c];
        }
    }
    out
}

fn sub_bytes(s: &mut State, table: &[u8; 256]) {
    for row in s.iter_mut() {
        for byte in row.iter_mut() {
            *byte = table[*byte as usize];
        }
    }
}

fn shift_rows(s: &mut State) {
    for (r, row) in s.iter_mut().enumerate().skip(1) {
        row.rotate_left(r);
    }
}

fn inv_shift_rows(s: &mut State) {
    for (r, row) in s.iter_mut().enumerate().skip(1) {
        row.rotate_right(r);
    }
}

fn mix_columns(s: &mut State) {
    for c in 0..4 {
        let a = [s[0][c], s[1][c], s[2][c], s[3][c]];
        s[0][c] = gf_mul(a[0], 2) ^ gf_mul(a[1], 3) ^ a[2] ^ a[3];
        s[1][c] = a[0] ^ gf_mul(a[1], 2) ^ gf_mul(a[2], 3) ^ a[3];
        s[2][c] = a[0] ^ a[1] ^ gf_mul(a[2], 2) ^ gf_mul(a[3], 3);
        s[3][c] = gf_mul(a[0], 3) ^ a[1] ^ a[2] ^ gf_mul(a[3], 2);
    }
}

fn inv_mix_columns(s: &mut State) {
    for c in 0..4 {
        let a = [s[0][c], s[1][c], s[2][c], s[3][c]];
        s[0][c] = gf_mul(a[0], 0x0e) ^ gf_mul(a[1], 0x0b) ^ gf_mul(a[2], 0x0d) ^ gf_mul(a[3], 0x09);
        s[1][c] = gf_mul(a[0], 0x09) ^ gf_mul(a[1], 0x0e) ^ gf_mul(a[2], 0x0b) ^ gf_mul(a[3], 0x0d);
        s[2][c] = gf_mul(a[0], 0x0d) ^ gf_mul(a[1], 0x09) ^ gf_mul(a[2], 0x0e) ^ gf_mul(a[3], 0x0b);
        s[3][c] = gf_mul(a[0], 0x0b) ^ gf_mul(a[1], 0x0d) ^ gf_mul(a[2], 0x09) ^ gf_mul(a[3], 0x0e);
    }
}

fn add_round_key(s: &mut State, round_key: &[u8; 16]) {
    for c in 0..4 {
        for r in 0..4 {
            s[r][c] ^= round_key[4 * c + r];
        }
    }
}

/// Encrypts a single block under a freshly derived key schedule.
pub fn encrypt_block<const KEY_LEN: usize>(key: &[u8; KEY_LEN], block: &[u8; 16]) -> [u8; 16] {
    let mut schedule = KeySchedule::new(key);
    let nr = KeySchedule::<KEY_LEN>::NUM_ROUNDS;
    let mut s = bytes_to_state(block);

    add_round_key(&mut s, &schedule.round_key_forward(0));
    for round in 1..nr {
        sub_bytes(&mut s, &SBOX);
        shift_rows(&mut s);
        mix_columns(&mut s);
        add_round_key(&mut s, &schedule.round_key_forward(round));
    }
    sub_bytes(&mut s, &SBOX);
    shift_rows(&mut s);
    add_round_key(&mut s, &schedule.round_key_forward(nr));

    state_to_bytes(&s)
}

/// Decrypts a single block under a freshly derived key schedule.
pub fn decrypt_block<const KEY_LEN: usize>(key: &[u8; KEY_LEN], block: &[u8; 16]) -> [u8; 16] {
    let mut schedule = KeySchedule::new(key);
    let nr = KeySchedule::<KEY_LEN>::NUM_ROUNDS;
    schedule.advance_to_end();
    let mut s = bytes_to_state(block);

    for round in (1..=nr).rev() {
        add_round_key(&mut s, &schedule.round_key_backward(round));
        if round != nr {
            inv_mix_columns(&mut s);
        }
        inv_shift_rows(&mut s);
        sub_bytes(&mut s, &INV_SBOX);
    }
    add_round_key(&mut s, &schedule.round_key_backward(0));

    state_to_bytes(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FIPS-197 Appendix B: AES-128 ECB known-answer test.
    #[test]
    fn aes_128_ecb_kat() {
        let key = [
            0x2bu8, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let plaintext = [
            0x32u8, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ];
        let expected = [
            0x39u8, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ];

        let ciphertext = encrypt_block(&key, &plaintext);
        assert_eq!(ciphertext, expected);
        assert_eq!(decrypt_block(&key, &ciphertext), plaintext);
    }

    #[test]
    fn aes_256_round_trips() {
        let key = [0x5au8; 32];
        let plaintext = *b"sixteen byte msg";
        let ciphertext = encrypt_block(&key, &plaintext);
        assert_ne!(ciphertext, plaintext);
        assert_eq!(decrypt_block(&key, &ciphertext), plaintext);
    }

    #[test]
    fn aes_192_round_trips() {
        let key = [0x99u8; 24];
        let plaintext = *b"another block!!!";
        let ciphertext = encrypt_block(&key, &plaintext);
        assert_eq!(decrypt_block(&key, &ciphertext), plaintext);
    }
}
