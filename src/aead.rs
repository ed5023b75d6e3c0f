//! A Ketje-style authenticated encryption state machine: a four-phase
//! (`K`/`A`/`BC`/`D`) domain-separated sponge, driven by the same
//! [`crate::sponge::Sponge`] that backs [`crate::sha3`].
//!
//! Usage follows the phase order the state machine enforces:
//!
//! 1. [`KeccakAead::init`] absorbs the key (phase `K`) and leaves the sponge
//!    ready for phase `A`.
//! 2. Zero or more [`KeccakAead::absorb_associated_data`] calls absorb the
//!    nonce and any associated data (phase `A`).
//! 3. [`KeccakAead::encrypt`] / [`KeccakAead::decrypt`] process the message
//!    body (phases `B`/`C`, sharing one pad byte).
//! 4. [`KeccakAead::squeeze_tag`] (sender) or [`KeccakAead::verify_tag`]
//!    (receiver) finalizes and produces/checks the authentication tag
//!    (phase `D`).
//!
//! Calling phases out of order is legal (the sponge detects the pad byte
//! mismatch and runs an extra `finish` to transition, exactly as the
//! original `KeccakSecretAbsorbA`/`EncryptB`/`DecryptC`/`SqueezeD`/`VerifyD`
//! did), but callers should follow the order above for a well-formed
//! session.

use subtle::ConstantTimeEq;

use crate::error::Error;
use crate::keccak::{KeccakP16, KeccakP32, KeccakP64, KeccakP8, Permutation};
use crate::sponge::Sponge;

const PAD_K: u8 = 0x3f;
const PAD_A: u8 = 0x3e;
const PAD_BC: u8 = 0x3d;
const PAD_D: u8 = 0x3c;

const NR_START: usize = 12;
const NR_STEP: usize = 8;
const NR_STRIDE: usize = 12;

/// A Ketje-style AEAD state machine over a `STATE`-byte sponge at rate
/// `RATE`, with `KEY_LEN`/`NONCE_LEN`/`TAG_LEN`-byte keys, nonces, and tags.
///
/// Holds no `Zeroize`/`ZeroizeOnDrop` derive of its own: the embedded
/// [`Sponge`] already zeroizes itself on drop, and that runs automatically
/// when this struct is dropped (following the teacher's `CyclistHash`/
/// `CyclistKeyed`, which likewise don't re-derive on top of `CyclistCore`).
pub struct KeccakAead<
    P,
    const STATE: usize,
    const RATE: usize,
    const KEY_LEN: usize,
    const NONCE_LEN: usize,
    const TAG_LEN: usize,
> {
    sponge: Sponge<P, STATE>,
    pad: u8,
}

impl<P, const STATE: usize, const RATE: usize, const KEY_LEN: usize, const NONCE_LEN: usize, const TAG_LEN: usize>
    KeccakAead<P, STATE, RATE, KEY_LEN, NONCE_LEN, TAG_LEN>
where
    P: Permutation<STATE>,
{
    /// Absorbs `key` and transitions to phase `A`. `NONCE_LEN` is not
    /// consumed here; pass the nonce as the first
    /// [`Self::absorb_associated_data`] call so it is bound into the
    /// session the same way any other associated data is.
    pub fn init(key: &[u8; KEY_LEN]) -> Self {
        let mut sponge = Sponge::new();
        sponge.absorb(key, RATE, NR_START);
        sponge.finish(RATE, NR_START, PAD_K);
        KeccakAead { sponge, pad: PAD_A }
    }

    /// Byte-slice-based counterpart to [`Self::init`], for callers who
    /// receive a key as a runtime-length buffer (e.g. deserialized from a
    /// wire format) rather than a compile-time-sized array. The original C
    /// source accepts any key up to `rate` bytes; this rejects a longer key
    /// at call time instead of trusting the caller (§7: "new in the
    /// rewrite, since the C source trusts callers").
    pub fn try_init(key: &[u8]) -> Result<Self, Error> {
        if key.len() > RATE {
            return Err(Error::KeyTooLong {
                got: key.len(),
                max: RATE,
            });
        }
        let mut sponge = Sponge::new();
        sponge.absorb(key, RATE, NR_START);
        sponge.finish(RATE, NR_START, PAD_K);
        Ok(KeccakAead { sponge, pad: PAD_A })
    }

    /// Transitions the sponge to `pad`, running an extra `finish` at
    /// `switch_rounds` first if the current phase doesn't already match.
    fn switch_to(&mut self, pad: u8, switch_rounds: usize) {
        if self.pad != pad {
            self.sponge.finish(RATE, switch_rounds, self.pad);
            self.pad = pad;
        }
    }

    /// Absorbs nonce/associated-data bytes (phase `A`).
    pub fn absorb_associated_data(&mut self, data: &[u8]) {
        self.switch_to(PAD_A, NR_STEP);
        self.sponge.absorb(data, RATE, NR_STEP);
    }

    /// Encrypts `data` in place (phase `B`).
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.switch_to(PAD_BC, NR_STEP);
        self.sponge.encrypt(data, RATE, NR_STEP);
    }

    /// Decrypts `data` in place (phase `C`).
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.switch_to(PAD_BC, NR_STEP);
        self.sponge.decrypt(data, RATE, NR_STEP);
    }

    /// Finalizes the session and writes the authentication tag (phase `D`).
    pub fn squeeze_tag(&mut self, tag: &mut [u8; TAG_LEN]) {
        self.switch_to(PAD_D, NR_STRIDE);
        self.sponge.squeeze(tag, RATE, NR_STEP);
    }

    /// Finalizes the session and checks `tag` against the computed
    /// authentication tag, without early-exiting on the first mismatched
    /// byte (`subtle::ConstantTimeEq`, following the teacher's
    /// `CyclistKeyed::open`, and satisfying the non-early-out requirement
    /// the original's hand-folded `retval &= (byte == 0)` loop was for).
    pub fn verify_tag(&mut self, tag: &[u8; TAG_LEN]) -> bool {
        self.switch_to(PAD_D, NR_STRIDE);
        let mut diff = *tag;
        self.sponge.decrypt(&mut diff, RATE, NR_STEP);
        let zero = [0u8; TAG_LEN];
        bool::from(diff[..].ct_eq(&zero[..]))
    }

    /// Byte-slice-based counterpart to [`Self::squeeze_tag`]: writes the
    /// tag into `tag`, which must be at least `TAG_LEN` bytes. Rejects a
    /// too-short buffer at call time rather than panicking.
    pub fn try_squeeze_tag(&mut self, tag: &mut [u8]) -> Result<(), Error> {
        if tag.len() < TAG_LEN {
            return Err(Error::OutputTooShort {
                got: tag.len(),
                needed: TAG_LEN,
            });
        }
        self.switch_to(PAD_D, NR_STRIDE);
        self.sponge.squeeze(&mut tag[..TAG_LEN], RATE, NR_STEP);
        Ok(())
    }

    /// Byte-slice-based counterpart to [`Self::verify_tag`]: `tag` must be
    /// exactly `TAG_LEN` bytes, since a short or long tag can never match.
    pub fn try_verify_tag(&mut self, tag: &[u8]) -> Result<bool, Error> {
        if tag.len() != TAG_LEN {
            return Err(Error::OutputTooShort {
                got: tag.len(),
                needed: TAG_LEN,
            });
        }
        self.switch_to(PAD_D, NR_STRIDE);
        let mut diff = [0u8; TAG_LEN];
        diff.copy_from_slice(tag);
        self.sponge.decrypt(&mut diff, RATE, NR_STEP);
        let zero = [0u8; TAG_LEN];
        Ok(bool::from(diff[..].ct_eq(&zero[..])))
    }

    /// Discards the accumulated session state and starts a new key phase.
    /// Useful for reseeding long-lived sessions (e.g. a PRNG built on the
    /// same primitive) without allocating a new sponge.
    pub fn ratchet(&mut self) {
        self.sponge.reset();
        self.pad = PAD_A;
    }
}

macro_rules! aead_alias {
    ($name:ident, $permutation:ty, $state:expr, $rate:expr, $key:expr, $nonce:expr, $tag:expr, $doc:expr) => {
        #[doc = $doc]
        pub type $name = KeccakAead<$permutation, $state, $rate, $key, $nonce, $tag>;
    };
}

aead_alias!(
    AeadW8,
    KeccakP8,
    25,
    13,
    12,
    12,
    12,
    "AEAD over Keccak-p[200] (w=8): 12-byte key/nonce/tag, rate 13."
);
aead_alias!(
    AeadW16,
    KeccakP16,
    50,
    26,
    24,
    16,
    16,
    "AEAD over Keccak-p[400] (w=16): 24-byte key, 16-byte nonce/tag, rate 26."
);
aead_alias!(
    AeadW32,
    KeccakP32,
    100,
    68,
    32,
    16,
    16,
    "AEAD over Keccak-p[800] (w=32): 32-byte key, 16-byte nonce/tag, rate 68."
);
aead_alias!(
    AeadW64,
    KeccakP64,
    200,
    168,
    32,
    16,
    16,
    "AEAD over Keccak-p[1600] (w=64): 32-byte key, 16-byte nonce/tag, rate 168."
);
