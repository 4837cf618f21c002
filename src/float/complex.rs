use crate::common::{FftError, FftProcess};
use num_complex::Complex;
use super::core::{radix_2_dit_fft_core, validate_len, Sample};

/// Forward transform in place, scaled by `1/n`.
///
/// `buffer.len()` must be a power of two and at least 2. On error the
/// buffer is left untouched.
pub fn fft<T: Sample>(buffer: &mut [Complex<T>]) -> Result<(), FftError> {
    validate_len(buffer.len())?;
    radix_2_dit_fft_core::<T, false>(buffer);
    Ok(())
}

/// Inverse transform in place, unscaled, so that `ifft(fft(x)) == x`.
pub fn ifft<T: Sample>(buffer: &mut [Complex<T>]) -> Result<(), FftError> {
    validate_len(buffer.len())?;
    radix_2_dit_fft_core::<T, true>(buffer);
    Ok(())
}

/// Forward transform of `input` written into `output`.
///
/// Both slices must have the same valid length. Neither is written on error.
pub fn fft_into<T: Sample>(input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), FftError> {
    prepare_output(input, output)?;
    radix_2_dit_fft_core::<T, false>(output);
    Ok(())
}

/// Inverse transform of `input` written into `output`.
pub fn ifft_into<T: Sample>(input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), FftError> {
    prepare_output(input, output)?;
    radix_2_dit_fft_core::<T, true>(output);
    Ok(())
}

fn prepare_output<T: Sample>(input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), FftError> {
    validate_len(input.len())?;
    if output.len() != input.len() {
        return Err(FftError::SizeMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }
    output.copy_from_slice(input);
    Ok(())
}

/// Stateless radix-2 engine behind the [`FftProcess`] seam.
///
/// Nothing is precomputed: twiddles are derived per call and the bit
/// reversal table is a compile-time constant, so one value can serve any
/// buffer size and any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Radix2Fft;

impl Radix2Fft {
    pub const fn new() -> Self {
        Self
    }

    /// Executes the FFT in place. `inverse` selects the unscaled direction.
    pub fn process<T: Sample>(&self, buffer: &mut [Complex<T>], inverse: bool) -> Result<(), FftError> {
        if inverse {
            ifft(buffer)
        } else {
            fft(buffer)
        }
    }
}

impl<T: Sample> FftProcess<Complex<T>> for Radix2Fft {
    fn process(&self, buffer: &mut [Complex<T>], inverse: bool) -> Result<(), FftError> {
        Radix2Fft::process(self, buffer, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
