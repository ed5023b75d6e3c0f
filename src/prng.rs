//! A Keccak-sponge-based PRNG: an entropy pool absorbed once at `seed`
//! time, then drawn down via repeated short permutations.
//!
//! The original `KeccakPrngSeed`/`KeccakPrngRandom` kept the entropy pool in
//! a linker section deliberately left uninitialized at boot (`.noinit`), so
//! that power-on jitter in SRAM contributed unpredictable bits before the
//! first explicit seed. That trick has no portable Rust equivalent and is
//! unsound to emulate (reading uninitialized memory is undefined behavior
//! in Rust regardless of what a microcontroller's SRAM happens to contain).
//! [`KeccakPrng`] is redesigned to be always explicitly seeded, from an OS
//! entropy source via [`OsEntropy`] (feature `getrandom`), from caller-
//! supplied bytes, or, for reproducible test vectors, from an all-zero
//! state via the `prng-debug` feature.
use crate::error::Error;
use crate::keccak::{KeccakP16, KeccakP32, KeccakP64, KeccakP8, Permutation};
use crate::sponge::Sponge;

const PAD_MULTIRATE: u8 = 0x01;
const NR_START: usize = 12;
const NR_STEP: usize = 1;

/// A source of seed bytes for [`KeccakPrng::seed_from`].
pub trait SeedSource {
    /// Fills `buf` with fresh entropy.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

/// Seeds from the host operating system's CSPRNG via the `getrandom` crate.
#[cfg(feature = "getrandom")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

#[cfg(feature = "getrandom")]
impl SeedSource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(buf).map_err(|_| Error::Entropy("getrandom failed"))
    }
}

/// A Keccak-sponge PRNG over a `WIDTH`-byte state, drawing output at
/// `RATE` bytes per permutation.
///
/// Holds no `ZeroizeOnDrop` derive of its own; the embedded [`Sponge`]
/// already zeroizes on drop (see [`crate::aead::KeccakAead`]'s docs for
/// why re-deriving here would be redundant).
pub struct KeccakPrng<P, const WIDTH: usize, const RATE: usize> {
    sponge: Sponge<P, WIDTH>,
}

impl<P, const WIDTH: usize, const RATE: usize> KeccakPrng<P, WIDTH, RATE>
where
    P: Permutation<WIDTH>,
{
    /// Seeds the pool directly from caller-supplied bytes (e.g. a KAT
    /// fixture, or entropy gathered by the caller).
    pub fn seed_from_bytes(seed: &[u8]) -> Self {
        let mut sponge = Sponge::new();
        sponge.absorb(seed, WIDTH, NR_STEP);
        sponge.finish(WIDTH, NR_START, PAD_MULTIRATE);
        KeccakPrng { sponge }
    }

    /// Seeds the pool by drawing `WIDTH` bytes from `source`.
    pub fn seed(source: &mut impl SeedSource) -> Result<Self, Error> {
        let mut buf = [0u8; WIDTH];
        source.fill(&mut buf)?;
        Ok(Self::seed_from_bytes(&buf))
    }

    /// Fills `out` with pseudorandom bytes, permuting every `RATE` bytes
    /// produced. Encrypts `out` in place with the sponge, so whatever
    /// `out` already holds is mixed back into the pool at the same time
    /// fresh output is drawn, exactly as the original `KeccakPrngRandom`
    /// calls `KeccakEncrypt` directly on the caller's buffer.
    ///
    /// Under the `prng-debug` feature, draws with a plain squeeze instead,
    /// for reproducible test vectors.
    #[cfg(not(feature = "prng-debug"))]
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.sponge.encrypt(out, RATE, NR_STEP);
    }

    /// Debug build: plain squeeze, per §4.5's deterministic-debug mode.
    #[cfg(feature = "prng-debug")]
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out, RATE, NR_STEP);
    }

    /// Draws a single `u64`, little-endian.
    pub fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// Re-seeds from fresh entropy without allocating a new sponge,
    /// discarding all previously produced output from the state.
    pub fn reseed(&mut self, seed: &[u8]) {
        self.sponge.reset();
        self.sponge.absorb(seed, WIDTH, NR_STEP);
        self.sponge.finish(WIDTH, NR_START, PAD_MULTIRATE);
    }
}

/// The w=8 PRNG (25-byte state, 2-byte rate per §4.5's `PRNG_RATE` table).
pub type Keccak8Prng = KeccakPrng<KeccakP8, 25, 2>;
/// The w=16 PRNG (50-byte state, 4-byte rate).
pub type Keccak16Prng = KeccakPrng<KeccakP16, 50, 4>;
/// The w=32 PRNG (100-byte state, 16-byte rate).
pub type Keccak32Prng = KeccakPrng<KeccakP32, 100, 16>;
/// The standard-width (w=64) PRNG, keyed on [`KeccakP64`].
pub type Keccak64Prng = KeccakPrng<KeccakP64, 200, 32>;

/// Process-wide PRNG facade, for callers who don't want to thread a
/// `KeccakPrng` through their own state. Requires `std` for the backing
/// `Mutex`.
#[cfg(feature = "std")]
pub mod global {
    use std::sync::{Mutex, OnceLock};

    use super::Keccak64Prng;
    use crate::error::Error;

    static PRNG: OnceLock<Mutex<Keccak64Prng>> = OnceLock::new();

    /// Seeds the global PRNG. Must be called once before
    /// [`fill_bytes`]/[`next_u64`]; calling it again reseeds in place.
    #[cfg(feature = "getrandom")]
    pub fn seed_from_os() -> Result<(), Error> {
        use super::{KeccakPrng, OsEntropy};
        let prng = KeccakPrng::seed(&mut OsEntropy)?;
        match PRNG.set(Mutex::new(prng)) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Already seeded: reseed the existing instance instead of
                // leaking a second sponge.
                let mut buf = [0u8; 200];
                OsEntropy.fill(&mut buf)?;
                PRNG.get().unwrap().lock().unwrap().reseed(&buf);
                Ok(())
            }
        }
    }

    /// Fills `out` from the global PRNG.
    ///
    /// # Panics
    ///
    /// Panics if the global PRNG has not been seeded yet.
    pub fn fill_bytes(out: &mut [u8]) {
        PRNG.get()
            .expect("global PRNG not seeded; call seed_from_os() first")
            .lock()
            .unwrap()
            .fill_bytes(out);
    }
}
