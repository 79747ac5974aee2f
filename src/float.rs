use core::fmt::{Debug, Display};
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing fast Fourier transforms.
pub trait FftFloat:
    Float + FloatConst + FromPrimitive + NumAssign + Default + Debug + Display + Send + Sync + 'static
{
    /// Converts an `f64`, rounding to the nearest representable value.
    fn from_f64_lossy(x: f64) -> Self;

    /// Converts a buffer length.
    fn from_len(len: usize) -> Self {
        Self::from_f64_lossy(len as f64)
    }
}

impl FftFloat for f32 {
    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }
}

impl FftFloat for f64 {
    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x
    }
}
