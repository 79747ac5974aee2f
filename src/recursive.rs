//! Recursive radix-2 decimation-in-time.
//!
//! Each level splits its input by index parity, transforms both halves and recombines them with
//! one butterfly per output pair:
//!
//! ```text
//! X[k]       = E[k] + w^k O[k]
//! X[k + N/2] = E[k] - w^k O[k]        w = exp(-2πi / N)
//! ```
//!
//! The recursion itself is unscaled; the `1 / √N` scaling is applied once to the full-length
//! result.
use num_complex::Complex;
use crate::error::{check_length, check_size, Result};
use crate::fft::{normalize, Fft, Transform};
use crate::float::FftFloat;
use crate::twiddle::Twiddles;
use core::marker::PhantomData;

/// Half length at which the two sub-transforms are handed to rayon.
#[cfg(feature = "rayon")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// A recursive Cooley-Tukey FFT of a fixed power-of-two size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CooleyTukey<T> {
    size: usize,
    real: PhantomData<T>,
}

impl<T: FftFloat> CooleyTukey<T> {
    /// Create a new FFT.
    ///
    /// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless `size` is a power
    /// of two.
    pub fn new(size: usize) -> Result<Self> {
        check_length(size)?;
        log::debug!("planned recursive radix-2 FFT of size {}", size);
        Ok(Self {
            size,
            real: PhantomData,
        })
    }
}

impl<T: FftFloat> Fft for CooleyTukey<T> {
    type Real = T;

    fn size(&self) -> usize {
        self.size
    }

    fn transform_in_place(&self, input: &mut [Complex<T>], transform: Transform) -> Result<()> {
        check_size(self.size, input.len())?;
        log::trace!("{:?} of size {} (recursive)", transform, self.size);
        decimate(input, transform.is_forward());
        normalize(input, transform);
        Ok(())
    }
}

fn decimate<T: FftFloat>(data: &mut [Complex<T>], forward: bool) {
    let n = data.len();
    if n == 1 {
        return;
    }
    let half = n / 2;

    let mut even = data.iter().step_by(2).copied().collect::<Vec<_>>();
    let mut odd = data.iter().skip(1).step_by(2).copied().collect::<Vec<_>>();
    decimate_halves(&mut even, &mut odd, forward);

    let twiddles = Twiddles::<T>::new(n, forward);
    for (i, ((p, q), w)) in even.into_iter().zip(odd).zip(twiddles).enumerate() {
        let q = w * q;
        data[i] = p + q;
        data[i + half] = p - q;
    }
}

#[cfg(not(feature = "rayon"))]
#[inline]
fn decimate_halves<T: FftFloat>(even: &mut [Complex<T>], odd: &mut [Complex<T>], forward: bool) {
    decimate(even, forward);
    decimate(odd, forward);
}

#[cfg(feature = "rayon")]
#[inline]
fn decimate_halves<T: FftFloat>(even: &mut [Complex<T>], odd: &mut [Complex<T>], forward: bool) {
    if even.len() >= PARALLEL_THRESHOLD {
        rayon::join(|| decimate(even, forward), || decimate(odd, forward));
    } else {
        decimate(even, forward);
        decimate(odd, forward);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    fn reals(values: &[f64]) -> Vec<Complex<f64>> {
        values.iter().copied().map(Complex::from).collect()
    }

    fn forward(values: &[f64]) -> Vec<Complex<f64>> {
        let mut data = reals(values);
        CooleyTukey::new(data.len())
            .unwrap()
            .fft_in_place(&mut data)
            .unwrap();
        data
    }

    #[test]
    fn single_sample_is_unchanged() {
        let sample = Complex::new(0.3, -7.25);
        let mut data = [sample];
        let fft = CooleyTukey::new(1).unwrap();
        fft.fft_in_place(&mut data).unwrap();
        assert_eq!(data, [sample]);
        fft.ifft_in_place(&mut data).unwrap();
        assert_eq!(data, [sample]);
    }

    #[test]
    fn constant() {
        assert_eq!(forward(&[1., 1., 1., 1.]), reals(&[2., 0., 0., 0.]));
    }

    #[test]
    fn delta() {
        assert_eq!(forward(&[1., 0., 0., 0.]), reals(&[0.5, 0.5, 0.5, 0.5]));
    }

    #[test]
    fn single_high_frequency() {
        assert_eq!(forward(&[1., -1., 1., -1.]), reals(&[0., 0., 2., 0.]));
    }

    #[test]
    fn single_low_frequency() {
        assert_eq!(forward(&[1., 0., -1., -0.]), reals(&[0., 1., 0., 1.]));
    }

    #[test]
    fn high_frequency_plus_dc() {
        assert_eq!(forward(&[1., 0., 1., 0.]), reals(&[1., 0., 1., 0.]));
    }

    #[test]
    fn real_input_has_hermitian_output() {
        let output = forward(&[
            -0.03480425839330703,
            0.07910192950176387,
            0.7233322451735928,
            0.1659819820667019,
        ]);
        let expected_re = [
            0.9336118983487516,
            -0.7581365035668999,
            0.44344407521182005,
            -0.7581365035668999,
        ];
        let expected_im = [0., 0.08688005256493803, 0., -0.08688005256493803];
        for ((actual, re), im) in output.iter().zip(expected_re).zip(expected_im) {
            let expected = Complex::new(re, im).scale(0.5);
            assert!((*actual - expected).norm() < 1e-15, "{} != {}", actual, expected);
        }
    }

    #[test]
    fn invalid_lengths_fail_before_transforming() {
        assert_eq!(
            CooleyTukey::<f64>::new(3).unwrap_err(),
            Error::InvalidLength { len: 3 }
        );
        assert_eq!(
            CooleyTukey::<f32>::new(0).unwrap_err(),
            Error::InvalidLength { len: 0 }
        );
    }

    #[test]
    fn size_mismatch_leaves_input_untouched() {
        let fft = CooleyTukey::new(8).unwrap();
        let mut data = reals(&[1., 2., 3., 4.]);
        assert_eq!(
            fft.fft_in_place(&mut data),
            Err(Error::SizeMismatch {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(data, reals(&[1., 2., 3., 4.]));
    }

    #[test]
    fn deterministic() {
        let input = (0..256)
            .map(|i| Complex::new((i as f64 * 0.37).sin(), (i as f64 * 1.3).cos()))
            .collect::<Vec<_>>();
        let fft = CooleyTukey::new(input.len()).unwrap();
        let mut first = input.clone();
        let mut second = input;
        fft.fft_in_place(&mut first).unwrap();
        fft.fft_in_place(&mut second).unwrap();
        let bits = |v: &[Complex<f64>]| {
            v.iter()
                .map(|z| (z.re.to_bits(), z.im.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_levels_match_iterative() {
        use crate::iterative::Iterative;

        let size = 4 * PARALLEL_THRESHOLD;
        let input = (0..size)
            .map(|i| Complex::new((i % 17) as f64 - 8.0, (i % 5) as f64))
            .collect::<Vec<_>>();
        let mut recursive = input.clone();
        let mut iterative = input;
        CooleyTukey::new(size)
            .unwrap()
            .fft_in_place(&mut recursive)
            .unwrap();
        Iterative::new(size)
            .unwrap()
            .fft_in_place(&mut iterative)
            .unwrap();
        for (a, b) in recursive.iter().zip(&iterative) {
            assert!((*a - *b).norm() < 1e-7, "{} != {}", a, b);
        }
    }

    #[test]
    fn inverse_undoes_forward() {
        let input = (0..64)
            .map(|i| Complex::new(i as f64, -(i as f64) / 2.0))
            .collect::<Vec<_>>();
        let fft = CooleyTukey::new(input.len()).unwrap();
        let mut data = input.clone();
        fft.fft_in_place(&mut data).unwrap();
        fft.ifft_in_place(&mut data).unwrap();
        for (actual, expected) in data.iter().zip(&input) {
            assert!((*actual - *expected).norm() < 1e-12);
        }
    }
}
