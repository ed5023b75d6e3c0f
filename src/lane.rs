//! The `Lane` trait abstracts the Keccak state word size (w ∈ {8,16,32,64}
//! bits) so the permutation, round constants, and byte/lane conversions are
//! written once and monomorphized per width, the way the teacher's
//! `Permutation<WIDTH>` trait monomorphizes per state size.

use byteorder::{ByteOrder, LittleEndian};
use core::ops::{BitAnd, BitXor, BitXorAssign, Not};

/// One word of Keccak state. Implemented for `u8`, `u16`, `u32`, and `u64`,
/// corresponding to the four standard lane widths.
pub trait Lane:
    Copy
    + Default
    + PartialEq
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + Not<Output = Self>
{
    /// Width of the lane in bits.
    const BITS: u32;

    /// Width of the lane in bytes.
    const BYTES: usize = (Self::BITS / 8) as usize;

    /// Truncates a 64-bit round constant to this lane's width (§4.1: "Krc[..]
    /// truncated (bitwise-AND) to w bits").
    fn round_constant(rc: u64) -> Self;

    /// Rotates left by `n` bits, reduced modulo the lane width (§4.1: "Krho
    /// offsets ... reduced modulo w").
    fn rotate_left(self, n: u32) -> Self;

    /// Reads 25 lanes from a little-endian byte slice of length `25 *
    /// Self::BYTES`.
    fn read_lanes(bytes: &[u8], lanes: &mut [Self; 25]);

    /// Writes 25 lanes back to a little-endian byte slice of length `25 *
    /// Self::BYTES`.
    fn write_lanes(lanes: &[Self; 25], bytes: &mut [u8]);
}

impl Lane for u8 {
    const BITS: u32 = 8;

    #[inline(always)]
    fn round_constant(rc: u64) -> Self {
        rc as Self
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u8::rotate_left(self, n % Self::BITS)
    }

    #[inline]
    fn read_lanes(bytes: &[u8], lanes: &mut [Self; 25]) {
        lanes.copy_from_slice(bytes);
    }

    #[inline]
    fn write_lanes(lanes: &[Self; 25], bytes: &mut [u8]) {
        bytes.copy_from_slice(lanes);
    }
}

impl Lane for u16 {
    const BITS: u32 = 16;

    #[inline(always)]
    fn round_constant(rc: u64) -> Self {
        rc as Self
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u16::rotate_left(self, n % Self::BITS)
    }

    #[inline]
    fn read_lanes(bytes: &[u8], lanes: &mut [Self; 25]) {
        LittleEndian::read_u16_into(bytes, lanes);
    }

    #[inline]
    fn write_lanes(lanes: &[Self; 25], bytes: &mut [u8]) {
        LittleEndian::write_u16_into(lanes, bytes);
    }
}

impl Lane for u32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn round_constant(rc: u64) -> Self {
        rc as Self
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u32::rotate_left(self, n % Self::BITS)
    }

    #[inline]
    fn read_lanes(bytes: &[u8], lanes: &mut [Self; 25]) {
        LittleEndian::read_u32_into(bytes, lanes);
    }

    #[inline]
    fn write_lanes(lanes: &[Self; 25], bytes: &mut [u8]) {
        LittleEndian::write_u32_into(lanes, bytes);
    }
}

impl Lane for u64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn round_constant(rc: u64) -> Self {
        rc
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        u64::rotate_left(self, n % Self::BITS)
    }

    #[inline]
    fn read_lanes(bytes: &[u8], lanes: &mut [Self; 25]) {
        LittleEndian::read_u64_into(bytes, lanes);
    }

    #[inline]
    fn write_lanes(lanes: &[Self; 25], bytes: &mut [u8]) {
        LittleEndian::write_u64_into(lanes, bytes);
    }
}
