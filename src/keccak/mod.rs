//! The Keccak-_p_ permutation, parameterized over lane width.
//!
//! This is layer L0 of the crate (§2 of the design notes): a pure,
//! allocation-free, table-driven round function over a 25-lane state. It has
//! no notion of rate, padding, or domain separation; those live one layer
//! up in [`crate::sponge`].

mod tables;

use crate::lane::Lane;
use tables::{max_rounds, IIP1, IIP2, PI, RC, RHO};

/// A permutation over a fixed-size byte state, selected by the generic
/// `WIDTH`. Mirrors the teacher's `Permutation<const WIDTH: usize>` trait:
/// a zero-sized marker type per concrete instantiation, monomorphized by the
/// compiler rather than dispatched through a vtable.
pub trait Permutation<const WIDTH: usize> {
    /// Number of rounds `KECCAK_f` runs at full strength (`N_R`).
    const MAX_ROUNDS: usize;

    /// Runs `rounds` rounds of the permutation over `state`, then resets the
    /// byte cursor tracked by the caller (the cursor itself lives in
    /// [`crate::sponge::Sponge`], not here).
    ///
    /// # Panics
    ///
    /// Panics if `rounds > Self::MAX_ROUNDS` (checked with `debug_assert!`
    /// in `permute_rounds`; out-of-range rounds are a build-time-checkable
    /// precondition per the design notes, not a runtime `Error`).
    fn permute(state: &mut [u8; WIDTH], rounds: usize);
}

/// Applies one Keccak-_p_ round (θ∘ρ∘π∘χ∘ι) to `lanes`, using round constant
/// `rc` (already reduced to the lane's width by the caller).
#[inline]
fn round<L: Lane>(lanes: &mut [L; 25], rc: L) {
    // θ, ρ, π combined.
    let mut c = [L::default(); 5];
    for x in 0..5 {
        c[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
    }

    let mut b = [L::default(); 25];
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        let mut k = x;
        while k < 25 {
            b[PI[k]] = (lanes[k] ^ d).rotate_left(RHO[k]);
            k += 5;
        }
    }

    // χ.
    for i in 0..25 {
        lanes[i] = b[i] ^ ((!b[IIP1[i]]) & b[IIP2[i]]);
    }

    // ι.
    lanes[0] ^= rc;
}

/// Runs `rounds` rounds of Keccak-_p_ over a byte-serialized state of
/// `25 * L::BYTES` bytes, counting rounds from `max_rounds - rounds` as
/// spec'd by `KECCAK_f` (§4.1: "run rounds with index r = N_R-R .. N_R-1").
fn permute_rounds<L: Lane>(state: &mut [u8], rounds: usize, max_rounds: usize) {
    debug_assert_eq!(state.len(), 25 * L::BYTES);
    debug_assert!(rounds <= max_rounds);

    let mut lanes = [L::default(); 25];
    L::read_lanes(state, &mut lanes);

    for r in (max_rounds - rounds)..max_rounds {
        round(&mut lanes, L::round_constant(RC[r]));
    }

    L::write_lanes(&lanes, state);
}

macro_rules! keccak_p {
    ($name:ident, $lane:ty, $width:expr) => {
        #[doc = concat!(
            "Keccak-p permutation over a ", stringify!($width),
            "-byte state (", stringify!($width), "/8 bits per lane)."
        )]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Permutation<{ $width }> for $name {
            const MAX_ROUNDS: usize = max_rounds(<$lane as Lane>::BITS);

            #[inline]
            fn permute(state: &mut [u8; $width], rounds: usize) {
                permute_rounds::<$lane>(state, rounds, Self::MAX_ROUNDS);
            }
        }
    };
}

keccak_p!(KeccakP8, u8, 25);
keccak_p!(KeccakP16, u16, 50);
keccak_p!(KeccakP32, u32, 100);
keccak_p!(KeccakP64, u64, 200);
