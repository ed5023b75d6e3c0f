//! A generic Keccak sponge: absorb/squeeze/encrypt/decrypt byte operations
//! driven by a rate and a byte cursor, with multirate padding on `finish`.
//!
//! This is layer L1 (§2 of the design notes), built directly on
//! [`crate::keccak::Permutation`]. [`crate::sha3`] and [`crate::aead`] are
//! both thin instantiations of this type; neither reimplements the byte
//! loop.
//!
//! The teacher's `Cyclist` duplex (`up`/`down`, lazy block-boundary padding)
//! models a different sponge discipline than this crate's target: an
//! explicit `absorb` stream followed by an explicit `finish(pad)` call, with
//! encrypt/decrypt as a stream cipher over the running state rather than a
//! duplex round-trip. The struct shape (generic over a zero-sized
//! `Permutation<WIDTH>` marker, `#[derive(ZeroizeOnDrop)]` on secret state)
//! follows the teacher; the byte semantics follow the original `KeccakProcessData`/
//! `FunctionAbsorb`/`FunctionSqueeze`/`FunctionEncrypt`/`FunctionDecrypt`/`finish`.

use core::marker::PhantomData;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keccak::Permutation;

/// The in-place byte-level sponge operations. A closed enum matched once
/// per byte inside [`Sponge::process`], rather than a function pointer per
/// byte (the original's `function_ptr` indirection) or separate duplicated
/// loops. [`Sponge::absorb`] takes a read-only input and so is not modeled
/// here; it has its own loop below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpongeOp {
    Squeeze,
    Encrypt,
    Decrypt,
}

/// A Keccak sponge over a `WIDTH`-byte state, operating at a fixed `RATE`
/// (in bytes, `RATE <= WIDTH`).
#[derive(Clone, ZeroizeOnDrop)]
pub struct Sponge<P, const WIDTH: usize> {
    state: [u8; WIDTH],
    /// Byte cursor into `state`, always `< RATE` of the caller's choosing at
    /// the end of a call (callers pick their own rate per operation, so it
    /// is not baked into the type).
    num: usize,
    #[zeroize(skip)]
    _permutation: PhantomData<P>,
}

impl<P, const WIDTH: usize> Sponge<P, WIDTH>
where
    P: Permutation<WIDTH>,
{
    /// An all-zero sponge state, ready to absorb.
    pub fn new() -> Self {
        Sponge {
            state: [0u8; WIDTH],
            num: 0,
            _permutation: PhantomData,
        }
    }

    /// Direct access to the underlying state bytes, e.g. for domain-specific
    /// initialization (the AEAD key/nonce IV construction).
    pub(crate) fn state_mut(&mut self) -> &mut [u8; WIDTH] {
        &mut self.state
    }

    pub(crate) fn num(&self) -> usize {
        self.num
    }

    pub(crate) fn set_num(&mut self, num: usize) {
        self.num = num;
    }

    fn permute(&mut self, rounds: usize) {
        P::permute(&mut self.state, rounds);
        self.num = 0;
    }

    /// Applies `op` byte-by-byte to `data` in place, permuting with `rounds`
    /// rounds every time the cursor reaches `rate`. For [`SpongeOp::Absorb`]
    /// and [`SpongeOp::Squeeze`] the "other side" of the byte (the
    /// plaintext read for absorb, the written byte for squeeze) is driven
    /// entirely by `data` itself, so the same in-place buffer works for all
    /// four operations without a separate read-only path.
    fn process(&mut self, op: SpongeOp, rate: usize, rounds: usize, data: &mut [u8]) {
        debug_assert!(rate > 0 && rate <= WIDTH);
        for byte in data.iter_mut() {
            match op {
                SpongeOp::Squeeze => {
                    *byte = self.state[self.num];
                }
                SpongeOp::Encrypt => {
                    self.state[self.num] ^= *byte;
                    *byte = self.state[self.num];
                }
                SpongeOp::Decrypt => {
                    let plain = self.state[self.num] ^ *byte;
                    self.state[self.num] = *byte;
                    *byte = plain;
                }
            }
            self.num += 1;
            if self.num == rate {
                self.permute(rounds);
            }
        }
    }

    /// XORs `data` into the state at `rate`, permuting on every rate
    /// boundary crossed. `data` is unchanged on return.
    pub fn absorb(&mut self, data: &[u8], rate: usize, rounds: usize) {
        debug_assert!(rate > 0 && rate <= WIDTH);
        for &byte in data {
            self.state[self.num] ^= byte;
            self.num += 1;
            if self.num == rate {
                self.permute(rounds);
            }
        }
    }

    /// Reads `out.len()` bytes from the state, permuting on every rate
    /// boundary crossed.
    pub fn squeeze(&mut self, out: &mut [u8], rate: usize, rounds: usize) {
        self.process(SpongeOp::Squeeze, rate, rounds, out);
    }

    /// Encrypts `data` in place (sponge duplex: ciphertext byte is the
    /// post-absorb state byte).
    pub fn encrypt(&mut self, data: &mut [u8], rate: usize, rounds: usize) {
        self.process(SpongeOp::Encrypt, rate, rounds, data);
    }

    /// Decrypts `data` in place (inverse of [`Sponge::encrypt`]: state
    /// absorbs the ciphertext byte, output is the recovered plaintext).
    pub fn decrypt(&mut self, data: &mut [u8], rate: usize, rounds: usize) {
        self.process(SpongeOp::Decrypt, rate, rounds, data);
    }

    /// Finalizes the current block: XORs in `pad` at the cursor and `0x80`
    /// at `rate - 1` (multirate padding), then permutes and resets the
    /// cursor to zero.
    pub fn finish(&mut self, rate: usize, rounds: usize, pad: u8) {
        self.state[self.num] ^= pad;
        self.state[rate - 1] ^= 0x80;
        self.permute(rounds);
    }

    /// Zeroes the entire state and cursor, discarding all accumulated
    /// input/output history. Used by the AEAD ratchet operation.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.num = 0;
    }
}

impl<P, const WIDTH: usize> Default for Sponge<P, WIDTH>
where
    P: Permutation<WIDTH>,
{
    fn default() -> Self {
        Self::new()
    }
}
