//! SHA-3 and SHAKE, instantiated as fixed-parameter sponges over
//! [`KeccakP64`] (the standard Keccak-f[1600] permutation).
//!
//! Also exposes the non-standard small-width hash/XOF constructions from
//! §4.3 of the design notes, generic over any lane width: a hash rate of
//! `state_size - 2 * output_len`, falling back to `state_size - output_len`
//! when the first formula would leave a non-positive rate (only reachable
//! at w=8 with a large requested output).

use crate::keccak::{KeccakP64, Permutation};
use crate::sponge::Sponge;

const PAD_SHA3: u8 = 0x06;
const PAD_SHAKE: u8 = 0x1f;

macro_rules! sha3_fixed {
    ($name:ident, $rate:expr, $output:expr, $doc:expr) => {
        #[doc = $doc]
        pub struct $name {
            sponge: Sponge<KeccakP64, 200>,
        }

        impl $name {
            const RATE: usize = $rate;
            /// Output length in bytes.
            pub const OUTPUT_LEN: usize = $output;

            /// Creates a new, empty hash state.
            pub fn new() -> Self {
                $name {
                    sponge: Sponge::new(),
                }
            }

            /// Absorbs more input. May be called any number of times before
            /// [`Self::finish`].
            pub fn update(&mut self, data: &[u8]) {
                self.sponge.absorb(data, Self::RATE, 24);
            }

            /// Pads, permutes, and writes the digest to `out`.
            pub fn finish(mut self, out: &mut [u8; $output]) {
                self.sponge.finish(Self::RATE, 24, PAD_SHA3);
                self.sponge.squeeze(out, Self::RATE, 24);
            }

            /// Convenience one-shot: hashes `data` and returns the digest.
            pub fn digest(data: &[u8]) -> [u8; $output] {
                let mut state = Self::new();
                state.update(data);
                let mut out = [0u8; $output];
                state.finish(&mut out);
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

sha3_fixed!(Sha3_224, 144, 28, "SHA3-224 (rate 144 bytes, 28-byte digest).");
sha3_fixed!(Sha3_256, 136, 32, "SHA3-256 (rate 136 bytes, 32-byte digest).");
sha3_fixed!(Sha3_384, 104, 48, "SHA3-384 (rate 104 bytes, 48-byte digest).");
sha3_fixed!(Sha3_512, 72, 64, "SHA3-512 (rate 72 bytes, 64-byte digest).");

macro_rules! shake {
    ($name:ident, $rate:expr, $doc:expr) => {
        #[doc = $doc]
        pub struct $name {
            sponge: Sponge<KeccakP64, 200>,
            finished: bool,
        }

        impl $name {
            const RATE: usize = $rate;

            /// Creates a new, empty XOF state.
            pub fn new() -> Self {
                $name {
                    sponge: Sponge::new(),
                    finished: false,
                }
            }

            /// Absorbs more input. Must not be called after
            /// [`Self::squeeze`].
            pub fn update(&mut self, data: &[u8]) {
                debug_assert!(!self.finished, "update() after squeeze()");
                self.sponge.absorb(data, Self::RATE, 24);
            }

            /// Absorbs a domain-separation string, then immediately
            /// finishes the absorb phase, enabling domain-separated key
            /// derivation: callers who want distinct output streams for
            /// the same input under different purposes absorb the input,
            /// then call `domain(b"purpose")` instead of `squeeze`ing
            /// directly.
            pub fn domain(&mut self, domain_bytes: &[u8]) {
                self.update(domain_bytes);
                self.sponge.finish(Self::RATE, 24, PAD_SHAKE);
                self.finished = true;
            }

            /// Squeezes `out.len()` bytes of output. The first call to
            /// `squeeze` pads and permutes (the "domain" step, unless
            /// [`Self::domain`] already ran it); subsequent calls continue
            /// squeezing from where the last call left off, so a XOF of
            /// arbitrary output length can be read in chunks.
            pub fn squeeze(&mut self, out: &mut [u8]) {
                if !self.finished {
                    self.sponge.finish(Self::RATE, 24, PAD_SHAKE);
                    self.finished = true;
                }
                self.sponge.squeeze(out, Self::RATE, 24);
            }

            /// Convenience one-shot: absorbs `data` and returns a
            /// fixed-size output of `N` bytes.
            pub fn digest<const N: usize>(data: &[u8]) -> [u8; N] {
                let mut state = Self::new();
                state.update(data);
                let mut out = [0u8; N];
                state.squeeze(&mut out);
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

shake!(Shake128, 168, "SHAKE128 (rate 168 bytes, arbitrary-length output).");
shake!(Shake256, 136, "SHAKE256 (rate 136 bytes, arbitrary-length output).");

/// Computes `rate = state_size - 2 * output_len`, falling back to
/// `state_size - output_len` when that would be non-positive (the w=8
/// fallback described by the design notes).
const fn small_hash_rate(state_size: usize, output_len: usize) -> usize {
    if state_size > 2 * output_len {
        state_size - 2 * output_len
    } else {
        state_size - output_len
    }
}

/// A fixed-output Keccak hash generic over any permutation width, used for
/// the narrow lane widths (w ∈ {8,16,32}) that SHA-3 itself does not cover.
/// `STATE` is `25 * lane_bytes`; `OUTPUT` is the digest length in bytes.
pub struct KeccakHash<P, const STATE: usize, const OUTPUT: usize> {
    sponge: Sponge<P, STATE>,
    rounds: usize,
}

impl<P, const STATE: usize, const OUTPUT: usize> KeccakHash<P, STATE, OUTPUT>
where
    P: Permutation<STATE>,
{
    const RATE: usize = small_hash_rate(STATE, OUTPUT);

    /// Creates a new, empty hash state, permuting with `rounds` rounds
    /// (`<= P::MAX_ROUNDS`).
    pub fn new(rounds: usize) -> Self {
        debug_assert!(rounds <= P::MAX_ROUNDS);
        KeccakHash {
            sponge: Sponge::new(),
            rounds,
        }
    }

    /// Absorbs more input.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data, Self::RATE, self.rounds);
    }

    /// Pads, permutes, and writes the digest to `out`.
    pub fn finish(mut self, out: &mut [u8; OUTPUT]) {
        self.sponge.finish(Self::RATE, self.rounds, PAD_SHA3);
        self.sponge.squeeze(out, Self::RATE, self.rounds);
    }
}

/// An arbitrary-output Keccak XOF generic over any permutation width, the
/// small-lane-width companion to [`Shake128`]/[`Shake256`] for w ∈
/// {8,16,32}. `STATE` is `25 * lane_bytes`; `OUTPUT` parameterizes the rate
/// the same way [`KeccakHash`] does, using a caller-chosen nominal output
/// length even though the XOF itself can squeeze any number of bytes.
pub struct KeccakXof<P, const STATE: usize, const OUTPUT: usize> {
    sponge: Sponge<P, STATE>,
    rounds: usize,
    finished: bool,
}

impl<P, const STATE: usize, const OUTPUT: usize> KeccakXof<P, STATE, OUTPUT>
where
    P: Permutation<STATE>,
{
    const RATE: usize = small_hash_rate(STATE, OUTPUT);

    /// Creates a new, empty XOF state, permuting with `rounds` rounds
    /// (`<= P::MAX_ROUNDS`).
    pub fn new(rounds: usize) -> Self {
        debug_assert!(rounds <= P::MAX_ROUNDS);
        KeccakXof {
            sponge: Sponge::new(),
            rounds,
            finished: false,
        }
    }

    /// Absorbs more input. Must not be called after [`Self::squeeze`].
    pub fn update(&mut self, data: &[u8]) {
        debug_assert!(!self.finished, "update() after squeeze()");
        self.sponge.absorb(data, Self::RATE, self.rounds);
    }

    /// Absorbs a domain-separation string, then immediately finishes the
    /// absorb phase (§4.3: "absorbs a domain string then finishes absorb
    /// with 0x1F"), enabling domain-separated key derivation.
    pub fn domain(&mut self, domain_bytes: &[u8]) {
        self.update(domain_bytes);
        self.sponge.finish(Self::RATE, self.rounds, PAD_SHAKE);
        self.finished = true;
    }

    /// Squeezes `out.len()` bytes of output, finishing the absorb phase on
    /// the first call if [`Self::domain`] wasn't already used to do so.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if !self.finished {
            self.sponge.finish(Self::RATE, self.rounds, PAD_SHAKE);
            self.finished = true;
        }
        self.sponge.squeeze(out, Self::RATE, self.rounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_empty() {
        let digest = Sha3_256::digest(b"");
        assert_eq!(
            digest,
            [
                0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
                0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
                0x80, 0xf8, 0x43, 0x4a,
            ]
        );
    }

    #[test]
    fn sha3_256_abc() {
        let digest = Sha3_256::digest(b"abc");
        assert_eq!(
            digest,
            [
                0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3,
                0x90, 0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45,
                0x11, 0x43, 0x15, 0x32,
            ]
        );
    }

    #[test]
    fn shake128_empty_32_bytes() {
        let out: [u8; 32] = Shake128::digest(b"");
        assert_eq!(
            out,
            [
                0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d, 0x61, 0x60, 0x45, 0x50, 0x76, 0x05,
                0x85, 0x3e, 0xd7, 0x3b, 0x80, 0x93, 0xf6, 0xef, 0xbc, 0x88, 0xeb, 0x1a, 0x6e, 0xac,
                0xfa, 0x66, 0xef, 0x26,
            ]
        );
    }

    #[test]
    fn shake128_squeeze_in_chunks_matches_one_shot() {
        let one_shot: [u8; 32] = Shake128::digest(b"chunked");

        let mut chunked = Shake128::new();
        chunked.update(b"chunked");
        let mut first = [0u8; 16];
        let mut second = [0u8; 16];
        chunked.squeeze(&mut first);
        chunked.squeeze(&mut second);

        assert_eq!(&one_shot[..16], &first[..]);
        assert_eq!(&one_shot[16..], &second[..]);
    }

    #[test]
    fn shake_domain_separation_changes_output() {
        let mut a = Shake128::new();
        a.update(b"same input");
        a.domain(b"purpose-a");
        let mut out_a = [0u8; 32];
        a.squeeze(&mut out_a);

        let mut b = Shake128::new();
        b.update(b"same input");
        b.domain(b"purpose-b");
        let mut out_b = [0u8; 32];
        b.squeeze(&mut out_b);

        assert_ne!(out_a, out_b);
    }

    #[test]
    fn keccak_hash_and_xof_small_width_agree_on_rate() {
        use crate::keccak::KeccakP32;

        let mut hash: KeccakHash<KeccakP32, 100, 32> = KeccakHash::new(22);
        hash.update(b"tiny target");
        let mut digest = [0u8; 32];
        hash.finish(&mut digest);
        assert_ne!(digest, [0u8; 32]);

        let mut xof: KeccakXof<KeccakP32, 100, 32> = KeccakXof::new(22);
        xof.update(b"tiny target");
        let mut first = [0u8; 16];
        let mut second = [0u8; 16];
        xof.squeeze(&mut first);
        xof.squeeze(&mut second);
        assert_ne!(first, [0u8; 16]);
        assert_ne!(second, [0u8; 16]);
    }
}
