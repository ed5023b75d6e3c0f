//! Call-time-checkable error conditions.
//!
//! Parameters that can be validated at compile time (lane width, rate,
//! key/nonce/tag length for a given AEAD instantiation) are encoded as
//! const generics or fixed type aliases instead, so mismatches are build
//! errors rather than values of this enum; this type only covers
//! preconditions that genuinely depend on a runtime value (a caller-
//! supplied buffer length, the health of the entropy source).

use thiserror::Error as ThisError;

/// Errors returned by the fallible operations in this crate.
#[derive(Debug, ThisError, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// CBC input was not a multiple of the block length.
    #[error("CBC input length {length} is not a multiple of the block length")]
    CbcLengthNotBlockAligned {
        /// The offending input length, in bytes.
        length: usize,
    },

    /// A key was longer than the maximum this construction supports.
    #[error("key length {got} exceeds the maximum of {max}")]
    KeyTooLong {
        /// The supplied key length, in bytes.
        got: usize,
        /// The maximum supported key length, in bytes.
        max: usize,
    },

    /// An output buffer was too short for the requested operation.
    #[error("output buffer of {got} bytes is too short, need at least {needed}")]
    OutputTooShort {
        /// The supplied buffer length, in bytes.
        got: usize,
        /// The minimum required buffer length, in bytes.
        needed: usize,
    },

    /// The configured entropy source failed to produce bytes.
    #[error("entropy source failed: {0}")]
    Entropy(&'static str),
}
