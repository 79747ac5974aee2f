use num_complex::Complex;
use crate::float::FftFloat;

/// Computes `exp(-2πi * index / size)`, or its conjugate for an inverse transform.
#[inline]
pub fn compute_twiddle<T: FftFloat>(index: usize, size: usize, forward: bool) -> Complex<T> {
    let theta = (index * 2) as f64 * core::f64::consts::PI / size as f64;
    let twiddle = Complex::new(
        T::from_f64_lossy(theta.cos()),
        T::from_f64_lossy(-theta.sin()),
    );
    if forward {
        twiddle
    } else {
        twiddle.conj()
    }
}

/// The twiddle factors `w^0, w^1, w^2, ...` of one butterfly level, where `w` is the
/// principal `size`-th root of unity.
///
/// Each factor is the previous one multiplied by `w`, so only one pair of transcendental calls
/// is made per level.
#[derive(Clone, Debug)]
pub struct Twiddles<T> {
    current: Complex<T>,
    step: Complex<T>,
}

impl<T: FftFloat> Twiddles<T> {
    pub fn new(size: usize, forward: bool) -> Self {
        Self {
            current: Complex::new(T::one(), T::zero()),
            step: compute_twiddle(1, size, forward),
        }
    }
}

impl<T: FftFloat> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let twiddle = self.current;
        self.current = self.current * self.step;
        Some(twiddle)
    }
}
