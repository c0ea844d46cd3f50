//! MSB-first bit arithmetic over byte slices.
//!
//! Bit 0 of a byte is its most significant bit; byte `i` precedes byte `i + 1`.

/// Mask selecting bit `offset` (0..8) within a byte, counted from the MSB.
#[inline(always)]
pub(crate) const fn bit_mask(offset: usize) -> u8 {
    0x80 >> offset
}

/// Bytes needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Number of significant bits in `value`; zero has none.
#[inline(always)]
pub(crate) const fn bit_len(value: u64) -> usize {
    (u64::BITS - value.leading_zeros()) as usize
}

/// Mask keeping the first `used` bits of a byte (`used` in 1..=8).
#[inline(always)]
pub(crate) fn keep_mask(used: usize) -> u8 {
    !(0xFFu8.checked_shr(used as u32).unwrap_or(0))
}

/// Shifts the whole slice left by `n` bits, moving later bits towards index 0.
///
/// Whole bytes are dropped first, then one rolling pass pulls the high bits
/// of each following byte across the boundary. Vacated positions at the tail
/// are zero.
pub(crate) fn shift_bytes_left(bytes: &mut [u8], n: usize) {
    let len = bytes.len();
    if len == 0 || n == 0 {
        return;
    }

    let lop = n / 8;
    if lop >= len {
        bytes.fill(0);
        return;
    }
    let shift = (n % 8) as u32;

    bytes.copy_within(lop.., 0);
    bytes[len - lop..].fill(0);

    if shift == 0 {
        return;
    }
    let live = len - lop;
    for i in 0..live - 1 {
        bytes[i] = (bytes[i] << shift) | (bytes[i + 1] >> (8 - shift));
    }
    bytes[live - 1] <<= shift;
}
