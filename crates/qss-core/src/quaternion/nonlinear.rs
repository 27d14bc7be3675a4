//! Elementwise magnitude, squared magnitude and signum of planar quaternions.
//!
//! Each function accepts three-channel (pure, `a = 0`) or four-channel input;
//! the magnitude is taken jointly over all channels of a pixel.

use ndarray::{ArrayView3, ArrayViewMut2, ArrayViewMut3, Axis, Zip};

use crate::sample::Sample;

fn squared_norm_at<T: Sample>(planes: &ArrayView3<'_, T>, row: usize, col: usize) -> T {
    planes
        .axis_iter(Axis(0))
        .fold(T::zero(), |acc, plane| {
            let v = plane[[row, col]];
            acc + v * v
        })
}

/// Largest absolute channel value of a pixel, and the pixel's magnitude
/// divided by it. `(0, 0)` when every channel is zero.
fn scaled_norm_at<T: Sample>(planes: &ArrayView3<'_, T>, row: usize, col: usize) -> (T, T) {
    let max = planes.axis_iter(Axis(0)).fold(T::zero(), |m, plane| {
        let v = plane[[row, col]].abs();
        if v > m {
            v
        } else {
            m
        }
    });
    if max == T::zero() {
        return (T::zero(), T::zero());
    }
    let sum = planes.axis_iter(Axis(0)).fold(T::zero(), |acc, plane| {
        let r = plane[[row, col]] / max;
        acc + r * r
    });
    (max, sum.sqrt())
}

/// `|q|^2 = a^2 + b^2 + c^2 + d^2` per pixel, clamped at zero.
///
/// Non-positive and NaN sums are written as exactly zero.
pub fn squared_magnitude<T: Sample>(planes: ArrayView3<'_, T>, out: ArrayViewMut2<'_, T>) {
    Zip::indexed(out).for_each(|(row, col), o| {
        let sq = squared_norm_at(&planes, row, col);
        *o = if sq > T::zero() { sq } else { T::zero() };
    });
}

/// `|q| = sqrt(a^2 + b^2 + c^2 + d^2)` per pixel.
pub fn magnitude<T: Sample>(planes: ArrayView3<'_, T>, out: ArrayViewMut2<'_, T>) {
    Zip::indexed(out).for_each(|(row, col), o| {
        let (max, norm) = scaled_norm_at(&planes, row, col);
        let abs = max * norm;
        *o = if abs > T::zero() { abs } else { T::zero() };
    });
}

/// `q / |q|` per pixel, or the zero quaternion where every channel is zero
/// or any channel is not finite.
///
/// The magnitude is taken after dividing by the largest channel, so tiny and
/// huge but finite pixels still normalize to unit length.
///
/// `out` has the same channel count as `planes`.
pub fn signum<T: Sample>(planes: ArrayView3<'_, T>, mut out: ArrayViewMut3<'_, T>) {
    debug_assert_eq!(planes.dim(), out.dim());
    let (channels, rows, cols) = planes.dim();
    for row in 0..rows {
        for col in 0..cols {
            let (max, norm) = scaled_norm_at(&planes, row, col);
            if max > T::zero() && norm.is_finite() {
                for ch in 0..channels {
                    out[[ch, row, col]] = planes[[ch, row, col]] / max / norm;
                }
            } else {
                for ch in 0..channels {
                    out[[ch, row, col]] = T::zero();
                }
            }
        }
    }
}
