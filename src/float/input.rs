// src/float/input.rs
//
// Helpers for callers that start from real-valued samples. The transform
// itself never pads or converts.

use crate::common::FftError;
use num_complex::Complex;
use super::core::{validate_len, Sample};

/// Smallest valid transform length that holds `len` samples.
pub fn padded_len(len: usize) -> usize {
    len.max(2).next_power_of_two()
}

/// Loads real `samples` into `buffer` as `re + 0i` and zero-fills the tail.
///
/// `buffer.len()` must be a valid transform length and at least
/// `samples.len()`. Returns the number of padding entries written. The
/// buffer is untouched on error.
pub fn load_real<T: Sample>(samples: &[T], buffer: &mut [Complex<T>]) -> Result<usize, FftError> {
    validate_len(buffer.len())?;
    if buffer.len() < samples.len() {
        return Err(FftError::BufferTooSmall {
            needed: samples.len(),
            actual: buffer.len(),
        });
    }

    let (head, tail) = buffer.split_at_mut(samples.len());
    for (slot, &sample) in head.iter_mut().zip(samples) {
        *slot = Complex::new(sample, T::zero());
    }
    tail.fill(Complex::new(T::zero(), T::zero()));

    Ok(tail.len())
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
