pub mod bitrev;
pub mod complex;
pub mod input;
mod core;

pub use crate::common::{ FftError, FftProcess };
pub use complex::{ Radix2Fft, fft, fft_into, ifft, ifft_into };
pub use self::core::Sample;
pub use input::{ load_real, padded_len };
