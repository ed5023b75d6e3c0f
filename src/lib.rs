#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Layout
//!
//! - [`keccak`], the Keccak-_p_ permutation (layer L0), generic over lane
//!   width (w ∈ {8,16,32,64} bits).
//! - [`sponge`], the generic absorb/squeeze/encrypt/decrypt sponge engine
//!   (L1) built on any [`keccak::Permutation`].
//! - [`sha3`], SHA-3-224/256/384/512 and SHAKE-128/256 (L2a), plus the
//!   non-standard small-lane-width `KeccakHash`/`KeccakXof` generics.
//! - [`aead`], a Ketje-style four-phase authenticated encryption sponge
//!   (L2b).
//! - [`prng`], a Keccak-sponge pseudo-random generator (L2c), explicitly
//!   seeded rather than relying on uninitialized memory.
//! - [`aes`], the AES block cipher (ECB, CBC, and an AES-keyed
//!   Davies-Meyer hash), independent of the Keccak stack (L3).
//! - [`sha1`], legacy SHA-1, behind the `sha1` feature (L4). Not used
//!   internally by anything else in this crate.
//! - [`error`], the call-time-checkable [`error::Error`] enum shared by
//!   the fallible operations above.

pub mod aead;
pub mod aes;
pub mod error;
pub mod keccak;
mod lane;
pub mod prng;
#[cfg(feature = "sha1")]
pub mod sha1;
pub mod sha3;
pub mod sponge;

pub use error::Error;
