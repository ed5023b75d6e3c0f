//! Round constants and the π/χ/ρ index tables, shared across all lane
//! widths. Ported from `Krc`/`Krho`/`Kpi`/`Kiip1`/`Kiip2` in the original C
//! source; widths narrower than 64 bits simply use a prefix of `RC` and
//! reduce `RHO` modulo the lane width (handled by `Lane::rotate_left`).

/// The standard 24 Keccak round constants. Narrower lane widths use a
/// prefix (18 for w=8, 20 for w=16, 22 for w=32, all 24 for w=64) and
/// truncate each value to the lane width.
pub(crate) const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ρ rotation offsets, indexed by linear lane index (i = 5y + x). Reduced
/// modulo the lane width by `Lane::rotate_left`.
pub(crate) const RHO: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// π output index for each input lane index.
pub(crate) const PI: [usize; 25] = [
    0, 10, 20, 5, 15, 16, 1, 11, 21, 6, 7, 17, 2, 12, 22, 23, 8, 18, 3, 13, 14, 24, 9, 19, 4,
];

/// χ's "i+1 in its row" index table.
pub(crate) const IIP1: [usize; 25] = [
    1, 2, 3, 4, 0, 6, 7, 8, 9, 5, 11, 12, 13, 14, 10, 16, 17, 18, 19, 15, 21, 22, 23, 24, 20,
];

/// χ's "i+2 in its row" index table.
pub(crate) const IIP2: [usize; 25] = [
    2, 3, 4, 0, 1, 7, 8, 9, 5, 6, 12, 13, 14, 10, 11, 17, 18, 19, 15, 16, 22, 23, 24, 20, 21,
];

/// Returns `N_R = 12 + 2*log2(w)` for lane width `w` (in bits).
pub(crate) const fn max_rounds(lane_bits: u32) -> usize {
    match lane_bits {
        8 => 18,
        16 => 20,
        32 => 22,
        64 => 24,
        _ => 0,
    }
}
