//! This crate provides radix-2 Cooley-Tukey fast Fourier transforms (FFT) in pure Rust.
//!
//! The forward transform is orthonormal: element `k` of the output of a length `N` signal `x` is
//!
//! ```text
//! X[k] = 1/√N · Σ x[j] · exp(-2πi·j·k/N)
//! ```
//!
//! so the transform preserves energy, and transforming the conjugate of `X` gives back the
//! conjugate of `x`.  Only power-of-two lengths are supported; any other length is rejected
//! with [`Error::InvalidLength`] before any work is done.
//!
//! ```
//! use cooley_tukey::{transform, Complex64};
//!
//! let signal = [1f64, 0., -1., 0.].map(Complex64::from).to_vec();
//! let spectrum = transform(signal)?;
//! assert_eq!(spectrum, [0f64, 1., 0., 1.].map(Complex64::from).to_vec());
//! # Ok::<(), cooley_tukey::Error>(())
//! ```
//!
//! # Implementation
//! [`CooleyTukey`] is the recursive decimation-in-time algorithm, splitting every level by
//! index parity.  [`Iterative`] performs the same butterflies in place after a bit-reversal
//! permutation.
//!
//! Complex numbers are [`num_complex::Complex`], re-exported here.  Formatting with `{:.6}`
//! prints both parts with six fractional digits, the imaginary part signed and suffixed by `i`.
//!
//! # Optional features
//! -  **`rayon`** - Transforms the two halves of large recursive levels in parallel.
//! -  **`serde`** - Enables `num-complex/serde`, so [`Complex`] implements `Serialize` and
//!    `Deserialize`.
mod error;
mod fft;
mod float;
mod iterative;
mod recursive;
mod twiddle;

pub use error::{Error, Result};
pub use fft::{Fft, Transform};
pub use float::FftFloat;
pub use iterative::Iterative;
pub use num_complex::{Complex, Complex32, Complex64};
#[cfg(feature = "rayon")]
pub use recursive::PARALLEL_THRESHOLD;
pub use recursive::CooleyTukey;
pub use twiddle::{compute_twiddle, Twiddles};

/// The available FFT implementations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Engine {
    /// [`CooleyTukey`]
    #[default]
    Recursive,
    /// [`Iterative`]
    Iterative,
}

/// Create a complex-valued FFT over `T` with the specified size.
pub fn create_fft<T: FftFloat>(
    size: usize,
    engine: Engine,
) -> Result<Box<dyn Fft<Real = T> + Send + Sync>> {
    let fft: Box<dyn Fft<Real = T> + Send + Sync> = match engine {
        Engine::Recursive => Box::new(CooleyTukey::new(size)?),
        Engine::Iterative => Box::new(Iterative::new(size)?),
    };
    Ok(fft)
}

/// Computes the orthonormal FFT of `signal` in place.
pub fn transform_in_place<T: FftFloat>(signal: &mut [Complex<T>]) -> Result<()> {
    CooleyTukey::new(signal.len())?.fft_in_place(signal)
}

/// Computes the orthonormal FFT of `signal`.
pub fn transform<T: FftFloat>(mut signal: Vec<Complex<T>>) -> Result<Vec<Complex<T>>> {
    transform_in_place(&mut signal)?;
    Ok(signal)
}

/// Computes the orthonormal inverse FFT of `spectrum`, undoing [`transform`].
pub fn inverse_transform<T: FftFloat>(mut spectrum: Vec<Complex<T>>) -> Result<Vec<Complex<T>>> {
    CooleyTukey::new(spectrum.len())?.ifft_in_place(&mut spectrum)?;
    Ok(spectrum)
}

/// Conjugates every element of `signal`.
pub fn conjugate<T: FftFloat>(signal: &mut [Complex<T>]) {
    for x in signal.iter_mut() {
        *x = x.conj();
    }
}
