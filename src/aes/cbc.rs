//! AES-CBC chaining, operating block-by-block over [`super::ecb`].
//!
//! [`cbc_encrypt`]/[`cbc_decrypt`] preserve the original's non-standard
//! behavior: the IV is *encrypted* before it is chained in (`A = Ek(iv)`),
//! rather than used directly as the first block's chaining value. This
//! means a given `(key, iv)` pair produces different ciphertext here than
//! in any standard CBC implementation. Interoperability with other AES-CBC
//! implementations requires the IV to be pre-encrypted the same way on both
//! sides, which is easy to get wrong. [`cbc_encrypt_standard_iv`]/
//! [`cbc_decrypt_standard_iv`] implement textbook CBC (`A = iv` used directly)
//! for callers that need to interoperate with other implementations.

use crate::error::Error;

use super::ecb::{decrypt_block, encrypt_block, BLOCK_LEN};

fn block_at(buf: &[u8], i: usize) -> [u8; BLOCK_LEN] {
    let mut b = [0u8; BLOCK_LEN];
    b.copy_from_slice(&buf[i * BLOCK_LEN..(i + 1) * BLOCK_LEN]);
    b
}

fn xor_in_place(a: &mut [u8; BLOCK_LEN], b: &[u8; BLOCK_LEN]) {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x ^= y;
    }
}

fn check_block_aligned(data: &[u8]) -> Result<(), Error> {
    if data.len() % BLOCK_LEN != 0 {
        return Err(Error::CbcLengthNotBlockAligned { length: data.len() });
    }
    Ok(())
}

/// Encrypts `data` in place under `(key, iv)`, pre-encrypting the IV before
/// the first block is chained (non-standard; see module docs).
pub fn cbc_encrypt<const KEY_LEN: usize>(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    data: &mut [u8],
) -> Result<(), Error> {
    check_block_aligned(data)?;
    let mut chain = encrypt_block(key, iv);

    for block_start in (0..data.len()).step_by(BLOCK_LEN) {
        let mut block = block_at(data, block_start / BLOCK_LEN);
        xor_in_place(&mut block, &chain);
        let cipher = encrypt_block(key, &block);
        data[block_start..block_start + BLOCK_LEN].copy_from_slice(&cipher);
        chain = cipher;
    }
    Ok(())
}

/// Decrypts `data` in place under `(key, iv)`, matching [`cbc_encrypt`]'s
/// pre-encrypted-IV chaining.
pub fn cbc_decrypt<const KEY_LEN: usize>(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    data: &mut [u8],
) -> Result<(), Error> {
    check_block_aligned(data)?;
    let mut chain = encrypt_block(key, iv);

    for block_start in (0..data.len()).step_by(BLOCK_LEN) {
        let cipher = block_at(data, block_start / BLOCK_LEN);
        let mut plain = decrypt_block(key, &cipher);
        xor_in_place(&mut plain, &chain);
        data[block_start..block_start + BLOCK_LEN].copy_from_slice(&plain);
        chain = cipher;
    }
    Ok(())
}

/// Encrypts `data` in place under `(key, iv)` using textbook CBC (the IV is
/// chained in directly, not pre-encrypted).
pub fn cbc_encrypt_standard_iv<const KEY_LEN: usize>(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    data: &mut [u8],
) -> Result<(), Error> {
    check_block_aligned(data)?;
    let mut chain = *iv;

    for block_start in (0..data.len()).step_by(BLOCK_LEN) {
        let mut block = block_at(data, block_start / BLOCK_LEN);
        xor_in_place(&mut block, &chain);
        let cipher = encrypt_block(key, &block);
        data[block_start..block_start + BLOCK_LEN].copy_from_slice(&cipher);
        chain = cipher;
    }
    Ok(())
}

/// Decrypts `data` in place under `(key, iv)` using textbook CBC.
pub fn cbc_decrypt_standard_iv<const KEY_LEN: usize>(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    data: &mut [u8],
) -> Result<(), Error> {
    check_block_aligned(data)?;
    let mut chain = *iv;

    for block_start in (0..data.len()).step_by(BLOCK_LEN) {
        let cipher = block_at(data, block_start / BLOCK_LEN);
        let mut plain = decrypt_block(key, &cipher);
        xor_in_place(&mut plain, &chain);
        data[block_start..block_start + BLOCK_LEN].copy_from_slice(&plain);
        chain = cipher;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_pre_encrypted_iv_variant() {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let mut data = *b"two AES blocks here, exactly!!!";
        let original = data;

        cbc_encrypt(&key, &iv, &mut data).unwrap();
        assert_ne!(data, original);
        cbc_decrypt(&key, &iv, &mut data).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn round_trips_standard_variant() {
        let key = [0x33u8; 16];
        let iv = [0x44u8; 16];
        let mut data = *b"two AES blocks here, exactly!!!";
        let original = data;

        cbc_encrypt_standard_iv(&key, &iv, &mut data).unwrap();
        assert_ne!(data, original);
        cbc_decrypt_standard_iv(&key, &iv, &mut data).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn pre_encrypted_and_standard_variants_diverge() {
        let key = [0x55u8; 16];
        let iv = [0x66u8; 16];
        let mut a = *b"identical plaintext block!!!!!!";
        let mut b = a;

        cbc_encrypt(&key, &iv, &mut a).unwrap();
        cbc_encrypt_standard_iv(&key, &iv, &mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn chaining_makes_identical_blocks_diverge() {
        let key = [0x77u8; 16];
        let iv = [0x88u8; 16];
        let mut data = [0x01u8; 32]; // two identical plaintext blocks
        cbc_encrypt(&key, &iv, &mut data).unwrap();
        assert_ne!(&data[..16], &data[16..]);
    }

    #[test]
    fn rejects_unaligned_length() {
        let key = [0x00u8; 16];
        let iv = [0x00u8; 16];
        let mut data = [0u8; 17];
        assert_eq!(
            cbc_encrypt(&key, &iv, &mut data),
            Err(Error::CbcLengthNotBlockAligned { length: 17 })
        );
    }
}
