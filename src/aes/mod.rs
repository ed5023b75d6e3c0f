//! AES-128/192/256: ECB block encryption, CBC chaining (both the original's
//! non-standard pre-encrypted-IV variant and a textbook-standard one), and
//! an AES-keyed Davies-Meyer hash.
//!
//! Grounded on `source/aes.c`/`include/aes.h`: the original's single
//! compile-time `AES_KEY_LEN` becomes a const generic parameter here, so
//! AES-128/192/256 are distinct monomorphizations rather than a single
//! runtime-branching implementation.

mod cbc;
mod ecb;
mod hash;
mod schedule;
mod tables;

pub use cbc::{cbc_decrypt, cbc_decrypt_standard_iv, cbc_encrypt, cbc_encrypt_standard_iv};
pub use ecb::{decrypt_block, encrypt_block, BLOCK_LEN};
pub use hash::{AesHash, AesHash128, AesHash192, AesHash256};

/// AES-128 key, in bytes.
pub const KEY_LEN_128: usize = 16;
/// AES-192 key, in bytes.
pub const KEY_LEN_192: usize = 24;
/// AES-256 key, in bytes.
pub const KEY_LEN_256: usize = 32;
