//! Type-II DCT and its type-III inverse, specialized for 48x64 planes.
//!
//! Planes are (rows, cols) = (48, 64). The 2-D forward transform runs the
//! 64-point kernel along every row, then the 48-point kernel down every
//! column; the inverse runs columns first, then rows.
//!
//! With `normalize = true` both directions are orthonormal and
//! `idct2(dct2(x, true), true) == x` up to rounding. With `normalize = false`
//! each axis contributes a factor `2L`, so the unnormalized round trip
//! returns `4 * 48 * 64 * x`.
//!
//! No shape checks are performed here; callers hand in 48x64 views.

pub mod fft;
mod kernel;
mod tables;

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Axis, Zip};

use crate::consts::{M, N};
use crate::plane::Plane;
use crate::sample::Sample;

use kernel::{dct_ii, dct_iii, Len48, Len64};

/// Direction of the 1-D transform within a 48x64 plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformAxis {
    /// 48-point transform down each of the 64 columns.
    Columns,
    /// 64-point transform along each of the 48 rows.
    Rows,
}

impl TransformAxis {
    /// Number of samples transformed per lane.
    pub fn length(self) -> usize {
        match self {
            Self::Columns => M,
            Self::Rows => N,
        }
    }

    /// Length-based lookup: 48 selects columns, 64 selects rows.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            M => Some(Self::Columns),
            N => Some(Self::Rows),
            _ => None,
        }
    }

    fn ndarray_axis(self) -> Axis {
        match self {
            Self::Columns => Axis(0),
            Self::Rows => Axis(1),
        }
    }
}

impl std::fmt::Display for TransformAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Columns => write!(f, "Columns (48-point)"),
            Self::Rows => write!(f, "Rows (64-point)"),
        }
    }
}

type LaneKernel<T> = fn(ArrayView1<'_, T>, ArrayViewMut1<'_, T>, bool);

fn apply_lanes<T: Sample>(
    input: ArrayView2<'_, T>,
    mut output: ArrayViewMut2<'_, T>,
    axis: Axis,
    kernel: LaneKernel<T>,
    normalize: bool,
) {
    Zip::from(input.lanes(axis))
        .and(output.lanes_mut(axis))
        .for_each(|src, dst| kernel(src, dst, normalize));
}

fn forward_lanes<T: Sample>(
    axis: TransformAxis,
    input: ArrayView2<'_, T>,
    output: ArrayViewMut2<'_, T>,
    normalize: bool,
) {
    match axis {
        TransformAxis::Columns => {
            apply_lanes(input, output, axis.ndarray_axis(), dct_ii::<T, Len48>, normalize)
        }
        TransformAxis::Rows => {
            apply_lanes(input, output, axis.ndarray_axis(), dct_ii::<T, Len64>, normalize)
        }
    }
}

fn inverse_lanes<T: Sample>(
    axis: TransformAxis,
    input: ArrayView2<'_, T>,
    output: ArrayViewMut2<'_, T>,
    normalize: bool,
) {
    match axis {
        TransformAxis::Columns => {
            apply_lanes(input, output, axis.ndarray_axis(), dct_iii::<T, Len48>, normalize)
        }
        TransformAxis::Rows => {
            apply_lanes(input, output, axis.ndarray_axis(), dct_iii::<T, Len64>, normalize)
        }
    }
}

/// 1-D type-II DCT of every lane along `axis`.
pub fn dct1<T: Sample>(
    axis: TransformAxis,
    input: ArrayView2<'_, T>,
    output: ArrayViewMut2<'_, T>,
    normalize: bool,
) {
    forward_lanes(axis, input, output, normalize);
}

/// 1-D type-III DCT (inverse of [`dct1`]) of every lane along `axis`.
pub fn idct1<T: Sample>(
    axis: TransformAxis,
    input: ArrayView2<'_, T>,
    output: ArrayViewMut2<'_, T>,
    normalize: bool,
) {
    inverse_lanes(axis, input, output, normalize);
}

/// 2-D type-II DCT: rows (64-point), then columns (48-point).
pub fn dct2<T: Sample>(input: ArrayView2<'_, T>, output: ArrayViewMut2<'_, T>, normalize: bool) {
    let mut rows = Array2::<T>::zeros((M, N));
    forward_lanes(TransformAxis::Rows, input, rows.view_mut(), normalize);
    forward_lanes(TransformAxis::Columns, rows.view(), output, normalize);
}

/// 2-D type-III DCT: columns (48-point), then rows (64-point).
pub fn idct2<T: Sample>(input: ArrayView2<'_, T>, output: ArrayViewMut2<'_, T>, normalize: bool) {
    let mut cols = Array2::<T>::zeros((M, N));
    inverse_lanes(TransformAxis::Columns, input, cols.view_mut(), normalize);
    inverse_lanes(TransformAxis::Rows, cols.view(), output, normalize);
}

/// [`dct1`] into a new plane.
pub fn dct1_array<T: Sample>(axis: TransformAxis, input: &Plane<T>, normalize: bool) -> Plane<T> {
    let mut out = Array2::<T>::zeros((M, N));
    dct1(axis, input.view(), out.view_mut(), normalize);
    out
}

/// [`idct1`] into a new plane.
pub fn idct1_array<T: Sample>(axis: TransformAxis, input: &Plane<T>, normalize: bool) -> Plane<T> {
    let mut out = Array2::<T>::zeros((M, N));
    idct1(axis, input.view(), out.view_mut(), normalize);
    out
}

/// [`dct2`] into a new plane.
pub fn dct2_array<T: Sample>(input: &Plane<T>, normalize: bool) -> Plane<T> {
    let mut out = Array2::<T>::zeros((M, N));
    dct2(input.view(), out.view_mut(), normalize);
    out
}

/// [`idct2`] into a new plane.
pub fn idct2_array<T: Sample>(input: &Plane<T>, normalize: bool) -> Plane<T> {
    let mut out = Array2::<T>::zeros((M, N));
    idct2(input.view(), out.view_mut(), normalize);
    out
}

/// Factor by which an unnormalized 1-D round trip scales its input (`2L`).
pub fn unnormalized_gain(axis: TransformAxis) -> f64 {
    2.0 * axis.length() as f64
}

/// Factor by which an unnormalized 2-D round trip scales its input.
pub fn unnormalized_gain_2d() -> f64 {
    unnormalized_gain(TransformAxis::Columns) * unnormalized_gain(TransformAxis::Rows)
}
