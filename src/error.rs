use thiserror::Error;

/// Errors reported by the transforms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The signal length is not a power of two (zero included).
    #[error("FFT length must be a power of two, but it was {len}")]
    InvalidLength { len: usize },
    /// A planned FFT was applied to a buffer of another length.
    #[error("buffer length {actual} does not match the planned FFT size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Rejects lengths the radix-2 decomposition cannot handle.
#[inline]
pub(crate) fn check_length(len: usize) -> Result<()> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(Error::InvalidLength { len })
    }
}

#[inline]
pub(crate) fn check_size(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::SizeMismatch { expected, actual })
    }
}
