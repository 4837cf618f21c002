// src/float/core.rs

use num_complex::{Complex, Complex64};
use num_traits::Float;
use core::f64::consts::PI;

use crate::common::FftError;
use super::bitrev::bit_reverse_permute;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point component type of a sample buffer (`f32` or `f64`).
///
/// Twiddle factors are always generated in `f64` and narrowed through
/// [`Sample::from_f64`] right before they multiply a sample.
pub trait Sample: Float + sealed::Sealed {
    fn from_f64(value: f64) -> Self;
    fn from_len(len: usize) -> Self;
}

impl Sample for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn from_len(len: usize) -> Self {
        len as f32
    }
}

impl Sample for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn from_len(len: usize) -> Self {
        len as f64
    }
}

/// Checks the transform length. Must run before the buffer is touched.
pub(crate) fn validate_len(n: usize) -> Result<(), FftError> {
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }
    if n < 2 {
        return Err(FftError::TooShort(n));
    }
    Ok(())
}

/// Agnostic sin/cos helper.
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Twiddle step of one butterfly stage: `w_n^(n / group_size)`, which is
/// the principal `group_size`-th root of unity `exp(i * 2pi * sign / group_size)`.
pub(crate) fn stage_twiddle<const INVERSE: bool>(group_size: usize) -> Complex64 {
    let sign = if INVERSE { 1.0 } else { -1.0 };
    let angle = sign * 2.0 * PI / (group_size as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

#[inline(always)]
fn narrow<T: Sample>(w: Complex64) -> Complex<T> {
    Complex::new(T::from_f64(w.re), T::from_f64(w.im))
}

/// Iterative radix-2 decimation-in-time transform over an already validated
/// buffer. The forward direction divides the result by `n`; the inverse
/// direction is left unscaled.
pub(crate) fn radix_2_dit_fft_core<T: Sample, const INVERSE: bool>(buffer: &mut [Complex<T>]) {
    let n = buffer.len();

    // 1. Bit-reverse
    bit_reverse_permute(buffer);

    // 2. Butterfly
    //
    // group_size is the width of the current set of overlapping butterflies.
    // Adjacent pairs first, then groups of 4, doubling every stage until a
    // single group spans the whole buffer.
    let mut group_size = 2;
    while group_size <= n {
        let half = group_size >> 1;
        let w_step = stage_twiddle::<INVERSE>(group_size);

        for group in buffer.chunks_exact_mut(group_size) {
            let (evens, odds) = group.split_at_mut(half);
            let mut w_curr = Complex64::new(1.0, 0.0);

            for (even, odd) in evens.iter_mut().zip(odds.iter_mut()) {
                let a = *even;
                let t = *odd * narrow::<T>(w_curr);

                *even = a + t;
                *odd = a - t;

                w_curr = w_curr * w_step;
            }
        }
        group_size <<= 1;
    }

    // 3. Forward normalization by 1/n
    if !INVERSE {
        let scale = T::from_len(n);
        for sample in buffer.iter_mut() {
            *sample = sample.unscale(scale);
        }
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
