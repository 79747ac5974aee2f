//! In-place radix-2 decimation-in-time.
//!
//! Repeatedly splitting a signal by index parity leaves sample `i` at the position given by
//! reversing the `log2 N` bits of `i`.  This implementation applies that permutation up front
//! and then performs the same butterflies as the recursive algorithm, level by level, without
//! allocating.
use num_complex::Complex;
use crate::error::{check_length, check_size, Result};
use crate::fft::{normalize, Fft, Transform};
use crate::float::FftFloat;
use crate::twiddle::compute_twiddle;

/// An iterative Cooley-Tukey FFT of a fixed power-of-two size.
#[derive(Clone, Debug, PartialEq)]
pub struct Iterative<T> {
    size: usize,
    twiddles: Box<[Complex<T>]>,
    permutation: Box<[usize]>,
}

impl<T: FftFloat> Iterative<T> {
    /// Create a new FFT, precomputing the twiddle factors and the bit-reversal permutation.
    ///
    /// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless `size` is a power
    /// of two.
    pub fn new(size: usize) -> Result<Self> {
        check_length(size)?;
        let twiddles = (0..size / 2)
            .map(|i| compute_twiddle(i, size, true))
            .collect();
        let bits = size.trailing_zeros();
        let permutation = (0..size).map(|i| reverse_bits(i, bits)).collect();
        log::debug!("planned iterative radix-2 FFT of size {}", size);
        Ok(Self {
            size,
            twiddles,
            permutation,
        })
    }
}

fn reverse_bits(index: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        index.reverse_bits() >> (usize::BITS - bits)
    }
}

impl<T: FftFloat> Fft for Iterative<T> {
    type Real = T;

    fn size(&self) -> usize {
        self.size
    }

    fn transform_in_place(&self, input: &mut [Complex<T>], transform: Transform) -> Result<()> {
        check_size(self.size, input.len())?;
        log::trace!("{:?} of size {} (iterative)", transform, self.size);

        for (i, &j) in self.permutation.iter().enumerate() {
            if i < j {
                input.swap(i, j);
            }
        }

        let forward = transform.is_forward();
        let mut len = 2;
        while len <= self.size {
            let half = len / 2;
            let stride = self.size / len;
            for chunk in input.chunks_exact_mut(len) {
                let (even, odd) = chunk.split_at_mut(half);
                for (k, (p, q)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
                    let w = self.twiddles[k * stride];
                    let w = if forward { w } else { w.conj() };
                    let a = *p;
                    let b = w * *q;
                    *p = a + b;
                    *q = a - b;
                }
            }
            len *= 2;
        }

        normalize(input, transform);
        Ok(())
    }
}
