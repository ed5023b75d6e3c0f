//! The on-the-fly AES key schedule: a `KEY_LEN`-byte ring buffer that holds
//! exactly the last `Nk` key-schedule words, advanced forward to derive
//! each encryption round key and walked backward to derive each decryption
//! round key, rather than a fully precomputed table of all round keys.
//!
//! This mirrors the original `AESKeyExpansionInternal`/`AESKeyExpansion`/
//! `AESInvKeyExpansion`, collapsed into a single `step` that both
//! directions share: the schedule step is its own inverse (`w[i] = w[i-Nk]
//! XOR g(w[i-1])`, so XOR-ing `g(w[i-1])` into the slot that currently
//! holds `w[i]` turns it back into `w[i-Nk]`), which the original expressed
//! as two near-duplicate functions walking `i` in opposite directions.

use super::tables::{RCON, SBOX};

/// `Nk` words resident at a time, indexed by absolute word position modulo
/// `KEY_LEN` bytes. `i` is one past the highest word index currently valid
/// in the buffer.
pub(crate) struct KeySchedule<const KEY_LEN: usize> {
    buf: [u8; KEY_LEN],
    i: usize,
}

impl<const KEY_LEN: usize> KeySchedule<KEY_LEN> {
    const NK: usize = KEY_LEN / 4;

    /// `N_R`: number of cipher rounds for this key length.
    pub(crate) const NUM_ROUNDS: usize = KEY_LEN / 4 + 6;

    pub(crate) fn new(key: &[u8; KEY_LEN]) -> Self {
        KeySchedule {
            buf: *key,
            i: Self::NK,
        }
    }

    /// Applies the key-schedule step for word index `i`, XORing the
    /// derived value into the ring slot `w[i]` shares with `w[i - Nk]`.
    fn step(&mut self, i: usize) {
        let nk = Self::NK;
        let mut temp = [0u8; 4];
        for (j, t) in temp.iter_mut().enumerate() {
            *t = self.buf[(4 * i + KEY_LEN - 4 + j) % KEY_LEN];
        }
        if i % nk == 0 {
            temp = [temp[1], temp[2], temp[3], temp[0]];
            for t in temp.iter_mut() {
                *t = SBOX[*t as usize];
            }
            temp[0] ^= RCON[i / nk - 1];
        } else if nk == 8 && i % nk == 4 {
            for t in temp.iter_mut() {
                *t = SBOX[*t as usize];
            }
        }
        for (j, t) in temp.iter().enumerate() {
            let idx = (4 * i + j) % KEY_LEN;
            self.buf[idx] ^= t;
        }
    }

    fn word_bytes(&self, word_index: usize) -> [u8; 4] {
        let slot = (4 * word_index) % KEY_LEN;
        let mut out = [0u8; 4];
        for (b, o) in out.iter_mut().enumerate() {
            *o = self.buf[(slot + b) % KEY_LEN];
        }
        out
    }

    fn round_key_bytes(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for w in 0..4 {
            out[4 * w..4 * w + 4].copy_from_slice(&self.word_bytes(4 * round + w));
        }
        out
    }

    /// Returns round key `round`, advancing the schedule forward as
    /// needed. Rounds must be requested in non-decreasing order starting
    /// from 0.
    pub(crate) fn round_key_forward(&mut self, round: usize) -> [u8; 16] {
        while self.i < 4 * (round + 1) {
            self.step(self.i);
            self.i += 1;
        }
        self.round_key_bytes(round)
    }

    /// Runs the schedule forward to its final state, from which
    /// [`Self::round_key_backward`] can walk back down to round 0.
    pub(crate) fn advance_to_end(&mut self) {
        let _ = self.round_key_forward(Self::NUM_ROUNDS);
    }

    /// Returns round key `round`, walking the schedule backward as needed.
    /// Rounds must be requested in non-increasing order, and
    /// [`Self::advance_to_end`] must have been called first.
    pub(crate) fn round_key_backward(&mut self, round: usize) -> [u8; 16] {
        while self.i > 4 * (round + 1) {
            self.i -= 1;
            self.step(self.i);
        }
        self.round_key_bytes(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_zero_is_the_raw_key() {
        let key = [
            0x00u8, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ];
        let mut schedule = KeySchedule::new(&key);
        assert_eq!(schedule.round_key_forward(0), key);
    }

    #[test]
    fn forward_then_backward_recovers_same_round_keys() {
        let key = [0x2bu8; 16];
        let mut fwd = KeySchedule::new(&key);
        let mut keys = [[0u8; 16]; 11];
        for (round, k) in keys.iter_mut().enumerate() {
            *k = fwd.round_key_forward(round);
        }

        let mut bwd = KeySchedule::new(&key);
        bwd.advance_to_end();
        for round in (0..=10).rev() {
            assert_eq!(bwd.round_key_backward(round), keys[round]);
        }
    }

    #[test]
    fn aes_192_and_256_round_counts() {
        assert_eq!(KeySchedule::<24>::NUM_ROUNDS, 12);
        assert_eq!(KeySchedule::<32>::NUM_ROUNDS, 14);
    }
}
