//! Complex FFTs hard-wired to 16, 48 and 64 points.
//!
//! - 16 and 64 points: iterative radix-2 Cooley-Tukey, twiddles read from the
//!   64-point table with a stride.
//! - 48 points: three interleaved 16-point transforms combined with 48-point
//!   twiddles (decimation in time, radix 3 over radix 2).
//!
//! Transforms are unnormalized in both directions: `inverse(forward(x)) = L * x`.

use num_complex::Complex;

use crate::sample::Sample;

use super::tables::{TWIDDLE_48_COS, TWIDDLE_48_SIN, TWIDDLE_64_COS, TWIDDLE_64_SIN};

/// Sign of the exponent: forward uses `e^{-2πi nk/L}`, inverse `e^{+2πi nk/L}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    #[inline(always)]
    fn twiddle<T: Sample>(self, cos: f64, sin: f64) -> Complex<T> {
        match self {
            Self::Forward => Complex::new(T::of(cos), T::of(-sin)),
            Self::Inverse => Complex::new(T::of(cos), T::of(sin)),
        }
    }
}

/// 64-point transform in place.
pub fn fft64<T: Sample>(buf: &mut [Complex<T>; 64], direction: Direction) {
    radix2(buf, direction);
}

/// 48-point transform in place.
pub fn fft48<T: Sample>(buf: &mut [Complex<T>; 48], direction: Direction) {
    mixed48(buf, direction);
}

/// 16-point transform in place.
pub fn fft16<T: Sample>(buf: &mut [Complex<T>; 16], direction: Direction) {
    radix2(buf, direction);
}

/// Radix-2 transform for 2, 4, ..., 64 points.
pub(crate) fn radix2<T: Sample>(buf: &mut [Complex<T>], direction: Direction) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two() && n >= 2 && n <= 64);
    let bits = n.trailing_zeros();

    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            buf.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = 64 / len;
        for start in (0..n).step_by(len) {
            for j in 0..half {
                let k = j * stride;
                let w = direction.twiddle::<T>(TWIDDLE_64_COS[k], TWIDDLE_64_SIN[k]);
                let u = buf[start + j];
                let v = buf[start + j + half] * w;
                buf[start + j] = u + v;
                buf[start + j + half] = u - v;
            }
        }
        len <<= 1;
    }
}

/// 48 = 3 x 16: X[k] = F0[k mod 16] + W^k F1[k mod 16] + W^2k F2[k mod 16].
pub(crate) fn mixed48<T: Sample>(buf: &mut [Complex<T>], direction: Direction) {
    debug_assert_eq!(buf.len(), 48);
    let zero = Complex::new(T::zero(), T::zero());
    let mut sub = [[zero; 16]; 3];

    for (r, lane) in sub.iter_mut().enumerate() {
        for (m, slot) in lane.iter_mut().enumerate() {
            *slot = buf[3 * m + r];
        }
        radix2(lane, direction);
    }

    for (k, out) in buf.iter_mut().enumerate() {
        let k16 = k % 16;
        let w1 = direction.twiddle::<T>(TWIDDLE_48_COS[k], TWIDDLE_48_SIN[k]);
        let k2 = (2 * k) % 48;
        let w2 = direction.twiddle::<T>(TWIDDLE_48_COS[k2], TWIDDLE_48_SIN[k2]);
        *out = sub[0][k16] + sub[1][k16] * w1 + sub[2][k16] * w2;
    }
}
