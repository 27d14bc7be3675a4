//! Elementwise Hamilton products over planar quaternion buffers.
//!
//! Every variant writes a four-channel `(4, rows, cols)` output. Inputs are
//! `(4, rows, cols)` for full quaternions or `(3, rows, cols)` for pure
//! imaginary ones. Shapes are not checked beyond debug assertions.

use ndarray::{ArrayView3, ArrayViewMut3};

use crate::consts::{FULL_CHANNEL_COUNT, PURE_CHANNEL_COUNT};
use crate::sample::Sample;

use super::value::{hamilton_product_imaginary, Quaternion};

#[inline(always)]
fn full_at<T: Sample>(planes: &ArrayView3<'_, T>, row: usize, col: usize) -> Quaternion<T> {
    Quaternion::new(
        planes[[0, row, col]],
        planes[[1, row, col]],
        planes[[2, row, col]],
        planes[[3, row, col]],
    )
}

#[inline(always)]
fn pure_at<T: Sample>(planes: &ArrayView3<'_, T>, row: usize, col: usize) -> Quaternion<T> {
    Quaternion::pure(
        planes[[0, row, col]],
        planes[[1, row, col]],
        planes[[2, row, col]],
    )
}

#[inline(always)]
fn store<T: Sample>(out: &mut ArrayViewMut3<'_, T>, row: usize, col: usize, q: Quaternion<T>) {
    out[[0, row, col]] = q.a;
    out[[1, row, col]] = q.b;
    out[[2, row, col]] = q.c;
    out[[3, row, col]] = q.d;
}

fn for_each_pixel<T, F>(out: &mut ArrayViewMut3<'_, T>, mut product: F)
where
    T: Sample,
    F: FnMut(usize, usize) -> Quaternion<T>,
{
    debug_assert_eq!(out.dim().0, FULL_CHANNEL_COUNT);
    let (_, rows, cols) = out.dim();
    for row in 0..rows {
        for col in 0..cols {
            let q = product(row, col);
            store(out, row, col, q);
        }
    }
}

/// `C = A * B`, both operands four-channel.
pub fn product_matrices<T: Sample>(
    lhs: ArrayView3<'_, T>,
    rhs: ArrayView3<'_, T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(lhs.dim().0, FULL_CHANNEL_COUNT);
    debug_assert_eq!(rhs.dim().0, FULL_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| {
        full_at(&lhs, row, col) * full_at(&rhs, row, col)
    });
}

/// `C = x * A`: constant quaternion on the left of every pixel.
pub fn product_scalar_matrix<T: Sample>(
    x: Quaternion<T>,
    matrix: ArrayView3<'_, T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(matrix.dim().0, FULL_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| x * full_at(&matrix, row, col));
}

/// `C = A * x`: constant quaternion on the right of every pixel.
pub fn product_matrix_scalar<T: Sample>(
    matrix: ArrayView3<'_, T>,
    x: Quaternion<T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(matrix.dim().0, FULL_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| full_at(&matrix, row, col) * x);
}

/// `C = A * B`, both operands three-channel pure imaginary.
pub fn product_imaginary_matrices<T: Sample>(
    lhs: ArrayView3<'_, T>,
    rhs: ArrayView3<'_, T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(lhs.dim().0, PURE_CHANNEL_COUNT);
    debug_assert_eq!(rhs.dim().0, PURE_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| {
        let (a, b, c, d) = hamilton_product_imaginary(
            lhs[[0, row, col]],
            lhs[[1, row, col]],
            lhs[[2, row, col]],
            rhs[[0, row, col]],
            rhs[[1, row, col]],
            rhs[[2, row, col]],
        );
        Quaternion::new(a, b, c, d)
    });
}

/// `C = x * A` with a full constant `x` and a three-channel pure matrix.
pub fn product_scalar_imaginary_matrix<T: Sample>(
    x: Quaternion<T>,
    matrix: ArrayView3<'_, T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(matrix.dim().0, PURE_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| x * pure_at(&matrix, row, col));
}

/// `C = A * x` with a three-channel pure matrix and a full constant `x`.
pub fn product_imaginary_matrix_scalar<T: Sample>(
    matrix: ArrayView3<'_, T>,
    x: Quaternion<T>,
    mut out: ArrayViewMut3<'_, T>,
) {
    debug_assert_eq!(matrix.dim().0, PURE_CHANNEL_COUNT);
    for_each_pixel(&mut out, |row, col| pure_at(&matrix, row, col) * x);
}
