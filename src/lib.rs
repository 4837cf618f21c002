#![no_std]

// The standard library comes in for tests and for the `std` feature,
// which adds the `std::error::Error` impl on `FftError`.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess};
pub use float::{Radix2Fft, Sample, fft, fft_into, ifft, ifft_into, load_real, padded_len};
