// src/float/bitrev.rs

use core::mem::size_of;

/// Reversed bit pattern of every byte value, built at compile time.
pub const BIT_REV_LUT: [u8; 256] = build_lut();

const fn build_lut() -> [u8; 256] {
    let mut lut = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut rev = 0u8;
        let mut j = 0;
        while j < 8 {
            rev |= (((i >> j) & 1) as u8) << (7 - j);
            j += 1;
        }
        lut[i] = rev;
        i += 1;
    }
    lut
}

/// Reverses the low `order` bits of `index`.
///
/// The whole word is reversed one byte at a time through [`BIT_REV_LUT`]
/// and then shifted down so only the `order` reversed bits remain.
/// `order` must be in `1..=usize::BITS` and `index` must fit in `order` bits.
#[inline]
pub fn reverse_index(index: usize, order: u32) -> usize {
    debug_assert!(order >= 1 && order <= usize::BITS);

    let mut rest = index;
    let mut rev = 0usize;
    for _ in 0..size_of::<usize>() {
        rev = (rev << 8) | BIT_REV_LUT[rest & 0xff] as usize;
        rest >>= 8;
    }
    rev >> (usize::BITS - order)
}

/// Reorders `buffer` so that element `i` moves to the bit-reversed index.
///
/// Each pair is swapped once, from the side with the smaller index.
/// `buffer.len()` must be a power of two, at least 2.
pub(crate) fn bit_reverse_permute<T>(buffer: &mut [T]) {
    let n = buffer.len();
    let order = n.trailing_zeros();

    // 0 and n-1 are always fixed points
    for i in 1..(n - 1) {
        let j = reverse_index(i, order);
        if j > i {
            buffer.swap(i, j);
        }
    }
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
