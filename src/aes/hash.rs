//! An AES-keyed Davies-Meyer compression hash.
//!
//! Each message block is used as the AES *key* to encrypt the running
//! 16-byte hash state as plaintext: `hash' = AES_ECB_encrypt(key = block,
//! plain = hash)`. Padding is fixed and short: a single `0x80` byte
//! followed by zeros to fill the final `KEY_LEN`-byte block, with no
//! encoded message length.
//!
//! # Known weaknesses (carried over deliberately, not fixed)
//!
//! This construction omits the feed-forward XOR that Davies-Meyer normally
//! applies (`hash' = E(block, hash) XOR hash`), and its padding carries no
//! length suffix. Both make it unsuitable as a general-purpose collision-
//! resistant hash or as a MAC over attacker-influenced messages:
//!
//! - Without feed-forward, the compression function is invertible given the
//!   key (the block), which weakens collision resistance compared to
//!   standard Davies-Meyer.
//! - Without a length suffix, messages that are equal modulo block-length
//!   padding differences can collide, and the construction is vulnerable to
//!   length-extension: anyone who knows `finish()`'s output and the length
//!   of the original message can compute the hash of that message with
//!   attacker-chosen data appended, without knowing the original message.
//!
//! Use this for fixed-format checksums or KDFs over trusted input, not as a
//! MAC over data an adversary can choose.

use super::ecb::encrypt_block;

/// An AES-keyed Davies-Meyer hash over `KEY_LEN`-byte message blocks
/// (`KEY_LEN` is also the AES key length used for each block compression:
/// 16, 24, or 32).
pub struct AesHash<const KEY_LEN: usize> {
    hash: [u8; 16],
    buffer: [u8; KEY_LEN],
    filled: usize,
}

impl<const KEY_LEN: usize> AesHash<KEY_LEN> {
    /// Starts a new hash with the all-zero initial state.
    pub fn new() -> Self {
        AesHash {
            hash: [0u8; 16],
            buffer: [0u8; KEY_LEN],
            filled: 0,
        }
    }

    /// Starts a new hash from a caller-supplied initial state, e.g. to
    /// chain a prior hash's output into a new one.
    pub fn new_with_iv(iv: [u8; 16]) -> Self {
        AesHash {
            hash: iv,
            buffer: [0u8; KEY_LEN],
            filled: 0,
        }
    }

    fn compress(&mut self, block: &[u8; KEY_LEN]) {
        self.hash = encrypt_block(block, &self.hash);
    }

    /// Absorbs more input. May be called any number of times before
    /// [`Self::finish`].
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (KEY_LEN - self.filled).min(data.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
            if self.filled == KEY_LEN {
                let block = self.buffer;
                self.compress(&block);
                self.filled = 0;
            }
        }
    }

    /// Pads and compresses the final block, returning the 16-byte digest.
    pub fn finish(mut self) -> [u8; 16] {
        self.buffer[self.filled] = 0x80;
        for b in self.buffer[self.filled + 1..].iter_mut() {
            *b = 0;
        }
        let block = self.buffer;
        self.compress(&block);
        self.hash
    }

    /// Convenience one-shot: hashes `data` and returns the digest.
    pub fn digest(data: &[u8]) -> [u8; 16] {
        let mut state = Self::new();
        state.update(data);
        state.finish()
    }
}

impl<const KEY_LEN: usize> Default for AesHash<KEY_LEN> {
    fn default() -> Self {
        Self::new()
    }
}

/// AES-128-keyed Davies-Meyer hash (16-byte message blocks).
pub type AesHash128 = AesHash<16>;
/// AES-192-keyed Davies-Meyer hash (24-byte message blocks).
pub type AesHash192 = AesHash<24>;
/// AES-256-keyed Davies-Meyer hash (32-byte message blocks).
pub type AesHash256 = AesHash<32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn different_inputs_hash_differently() {
        assert_ne!(AesHash128::digest(b"hello"), AesHash128::digest(b"world"));
    }

    #[test]
    fn multi_block_update_matches_one_shot() {
        let mut incremental = AesHash128::new();
        incremental.update(b"sixteen byte msg");
        incremental.update(b"and a second one");
        let incremental_digest = incremental.finish();

        let one_shot = AesHash128::digest(b"sixteen byte msgand a second one");
        assert_eq!(incremental_digest, one_shot);
    }

    #[test]
    fn different_initial_state_changes_the_digest() {
        let digest_a = AesHash128::new_with_iv([0xaa; 16]).finish();
        let digest_b = AesHash128::new_with_iv([0xbb; 16]).finish();
        assert_ne!(digest_a, digest_b);
    }

    #[test]
    fn compression_has_no_feed_forward() {
        // hash' = E(block, hash), with no XOR of hash back in -- so given
        // the pad-only final block, the digest is exactly one AES
        // encryption of the all-zero IV under that block as key.
        let mut block = [0u8; 16];
        block[0] = 0x80;
        let expected = encrypt_block(&block, &[0u8; 16]);
        assert_eq!(AesHash128::digest(b""), expected);
    }
}
