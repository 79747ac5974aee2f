use num_complex::Complex;
use crate::error::{check_size, Result};
use crate::float::FftFloat;

/// Specifies a type of transform to perform.
///
/// The scaled variants divide by `√N`, which makes the forward transform unitary: `Ifft` undoes
/// `Fft` exactly, and applying `Fft` to the conjugate of its own output yields the conjugate of
/// the input.  Many references instead put the whole `1 / N` on the inverse; use the unscaled
/// variants and scale manually for that convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Transform {
    /// Forward FFT scaled by `1 / √N`
    #[default]
    Fft,
    /// Inverse FFT scaled by `1 / √N`
    Ifft,
    /// Forward FFT without scaling
    UnscaledFft,
    /// Inverse FFT without scaling
    UnscaledIfft,
}

impl Transform {
    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Fft | Self::UnscaledFft => true,
            Self::Ifft | Self::UnscaledIfft => false,
        }
    }

    /// Returns the transform in the opposite direction with the same scaling.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Fft => Self::Ifft,
            Self::Ifft => Self::Fft,
            Self::UnscaledFft => Self::UnscaledIfft,
            Self::UnscaledIfft => Self::UnscaledFft,
        }
    }

    /// Returns the output scale for an FFT of `size`, or `None` if the output is unscaled.
    #[inline]
    pub fn scale<T: FftFloat>(&self, size: usize) -> Option<T> {
        match self {
            Self::Fft | Self::Ifft => Some(T::one() / T::from_len(size).sqrt()),
            Self::UnscaledFft | Self::UnscaledIfft => None,
        }
    }
}

/// Applies the output scaling of `transform` to an already transformed buffer.
#[inline]
pub(crate) fn normalize<T: FftFloat>(data: &mut [Complex<T>], transform: Transform) {
    if let Some(factor) = transform.scale::<T>(data.len()) {
        for x in data.iter_mut() {
            *x = x.scale(factor);
        }
    }
}

/// The interface for performing FFTs.
pub trait Fft: core::fmt::Debug {
    /// The real type used by the FFT.
    type Real: FftFloat;

    /// The size of the FFT.
    fn size(&self) -> usize;

    /// Apply an FFT or IFFT in-place.
    ///
    /// Fails without touching `input` if its length is not `size()`.
    fn transform_in_place(
        &self,
        input: &mut [Complex<Self::Real>],
        transform: Transform,
    ) -> Result<()>;

    /// Apply an FFT or IFFT out-of-place.
    fn transform(
        &self,
        input: &[Complex<Self::Real>],
        output: &mut [Complex<Self::Real>],
        transform: Transform,
    ) -> Result<()> {
        check_size(self.size(), input.len())?;
        check_size(self.size(), output.len())?;
        output.copy_from_slice(input);
        self.transform_in_place(output, transform)
    }

    /// Apply an FFT in-place.
    fn fft_in_place(&self, input: &mut [Complex<Self::Real>]) -> Result<()> {
        self.transform_in_place(input, Transform::Fft)
    }

    /// Apply an IFFT in-place.
    fn ifft_in_place(&self, input: &mut [Complex<Self::Real>]) -> Result<()> {
        self.transform_in_place(input, Transform::Ifft)
    }

    /// Apply an FFT out-of-place.
    fn fft(&self, input: &[Complex<Self::Real>], output: &mut [Complex<Self::Real>]) -> Result<()> {
        self.transform(input, output, Transform::Fft)
    }

    /// Apply an IFFT out-of-place.
    fn ifft(&self, input: &[Complex<Self::Real>], output: &mut [Complex<Self::Real>]) -> Result<()> {
        self.transform(input, output, Transform::Ifft)
    }
}
