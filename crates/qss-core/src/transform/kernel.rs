//! One-dimensional DCT-II / DCT-III kernels for 48 and 64 samples.
//!
//! Both run through a complex FFT of the same length (Makhoul's reordering):
//!
//! - DCT-II: `v[n] = x[2n]`, `v[L-1-n] = x[2n+1]`, `V = FFT(v)`,
//!   `Y[k] = 2 Re(e^{-iπk/2L} V[k])`
//!   which equals `2 Σ x[n] cos(π(2n+1)k / 2L)`.
//! - DCT-III: `V[k] = e^{iπk/2L} (X[k] - i X[L-k])` with `X[L] = 0`,
//!   `v = IFFT(V)`, `y[2n] = Re v[n]`, `y[2n+1] = Re v[L-1-n]`
//!   which equals `X[0] + 2 Σ_{k>0} X[k] cos(πk(2n+1) / 2L)`.
//!
//! Unnormalized, `DCT-III(DCT-II(x)) = 2L x`.

use ndarray::{ArrayView1, ArrayViewMut1};
use num_complex::Complex;

use crate::sample::Sample;

use super::fft::{mixed48, radix2, Direction};
use super::tables::{QUARTER_48_COS, QUARTER_48_SIN, QUARTER_64_COS, QUARTER_64_SIN};

/// Longest supported transform; sizes the stack scratch buffer.
const MAX_LEN: usize = 64;

/// A transform length the kernel is specialized for.
pub(crate) trait FixedLength {
    const LEN: usize;
    /// `cos(πk / 2L)` for `k` in `0..L`.
    const QUARTER_COS: &'static [f64];
    /// `sin(πk / 2L)` for `k` in `0..L`.
    const QUARTER_SIN: &'static [f64];

    fn fft<T: Sample>(buf: &mut [Complex<T>], direction: Direction);
}

pub(crate) struct Len48;
pub(crate) struct Len64;

impl FixedLength for Len48 {
    const LEN: usize = 48;
    const QUARTER_COS: &'static [f64] = &QUARTER_48_COS;
    const QUARTER_SIN: &'static [f64] = &QUARTER_48_SIN;

    #[inline(always)]
    fn fft<T: Sample>(buf: &mut [Complex<T>], direction: Direction) {
        mixed48(buf, direction);
    }
}

impl FixedLength for Len64 {
    const LEN: usize = 64;
    const QUARTER_COS: &'static [f64] = &QUARTER_64_COS;
    const QUARTER_SIN: &'static [f64] = &QUARTER_64_SIN;

    #[inline(always)]
    fn fft<T: Sample>(buf: &mut [Complex<T>], direction: Direction) {
        radix2(buf, direction);
    }
}

/// Orthonormal output scaling of the forward transform: (DC, AC).
///
/// `sqrt(1/L)/2` for the DC term, `sqrt(2/L)/2` elsewhere; this undoes the
/// factor 2 of the unnormalized DCT-II and applies the orthonormal weights.
pub(crate) fn forward_scale<T: Sample>(len: usize) -> (T, T) {
    let l = len as f64;
    (T::of((1.0 / l).sqrt() / 2.0), T::of((2.0 / l).sqrt() / 2.0))
}

/// Orthonormal input scaling of the inverse transform: (DC, AC).
///
/// The unnormalized DCT-III weights the DC term by 1 and the rest by 2, so
/// the orthonormal weights `sqrt(1/L)` and `sqrt(2/L)` become `sqrt(1/L)`
/// and `sqrt(2/L)/2`.
pub(crate) fn inverse_scale<T: Sample>(len: usize) -> (T, T) {
    let l = len as f64;
    (T::of((1.0 / l).sqrt()), T::of((2.0 / l).sqrt() / 2.0))
}

/// DCT-II of one lane.
pub(crate) fn dct_ii<T: Sample, L: FixedLength>(
    input: ArrayView1<'_, T>,
    mut output: ArrayViewMut1<'_, T>,
    normalize: bool,
) {
    let n = L::LEN;
    debug_assert_eq!(input.len(), n);
    debug_assert_eq!(output.len(), n);

    let zero = T::zero();
    let mut scratch = [Complex::new(zero, zero); MAX_LEN];
    let v = &mut scratch[..n];
    for i in 0..n / 2 {
        v[i] = Complex::new(input[2 * i], zero);
        v[n - 1 - i] = Complex::new(input[2 * i + 1], zero);
    }

    L::fft(v, Direction::Forward);

    let two = T::of(2.0);
    let (dc, ac) = if normalize {
        forward_scale::<T>(n)
    } else {
        (T::one(), T::one())
    };
    for k in 0..n {
        let c = T::of(L::QUARTER_COS[k]);
        let s = T::of(L::QUARTER_SIN[k]);
        let y = two * (c * v[k].re + s * v[k].im);
        output[k] = y * if k == 0 { dc } else { ac };
    }
}

/// DCT-III of one lane (inverse of [`dct_ii`] up to `2L`, exact inverse when
/// both sides are normalized).
pub(crate) fn dct_iii<T: Sample, L: FixedLength>(
    input: ArrayView1<'_, T>,
    mut output: ArrayViewMut1<'_, T>,
    normalize: bool,
) {
    let n = L::LEN;
    debug_assert_eq!(input.len(), n);
    debug_assert_eq!(output.len(), n);

    let (dc, ac) = if normalize {
        inverse_scale::<T>(n)
    } else {
        (T::one(), T::one())
    };
    let coeff = |k: usize| input[k] * if k == 0 { dc } else { ac };

    let zero = T::zero();
    let mut scratch = [Complex::new(zero, zero); MAX_LEN];
    let v = &mut scratch[..n];
    for (k, slot) in v.iter_mut().enumerate() {
        let re = coeff(k);
        let im = if k == 0 { zero } else { -coeff(n - k) };
        let c = T::of(L::QUARTER_COS[k]);
        let s = T::of(L::QUARTER_SIN[k]);
        *slot = Complex::new(c * re - s * im, s * re + c * im);
    }

    L::fft(v, Direction::Inverse);

    for i in 0..n / 2 {
        output[2 * i] = v[i].re;
        output[2 * i + 1] = v[n - 1 - i].re;
    }
}
