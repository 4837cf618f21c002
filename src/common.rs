// src/common.rs

/// Every variant is an invalid-argument failure; the payload says which
/// length precondition was violated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Buffer length is not a power of two (this includes zero).
    NotPowerOfTwo(usize),
    /// Buffer length is a power of two but below the minimum of 2.
    TooShort(usize),
    /// Output buffer length differs from the input length.
    SizeMismatch { expected: usize, actual: usize },
    /// Destination buffer cannot hold the source samples.
    BufferTooSmall { needed: usize, actual: usize },
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfTwo(len) => write!(f, "Size must be a power of 2, got {}", len),
            FftError::TooShort(len) => write!(f, "Size must be at least 2, got {}", len),
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Output buffer size {} does not match input size {}",
                actual, expected
            ),
            FftError::BufferTooSmall { needed, actual } => write!(
                f,
                "Buffer of size {} is too small, {} entries needed",
                actual, needed
            ),
        }
    }
}

/// In-place transform over a buffer of `T`.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
