use ndarray::{Array2, Array3, ArrayView3, ArrayViewMut2};

use crate::consts::{FULL_CHANNEL_COUNT, M, N, PURE_CHANNEL_COUNT};
use crate::plane::{Plane, QuaternionImage};
use crate::quaternion::{
    product_scalar_imaginary_matrix, product_scalar_matrix, signum, squared_magnitude, Quaternion,
};
use crate::sample::Sample;
use crate::transform::{dct2, idct2};

use super::axis::Axis;

/// Saliency of a validated quaternion image.
///
/// Returns a 48x64 map with every entry `>= 0`.
pub fn qdct_saliency<T: Sample>(image: &QuaternionImage<T>, axis: &Axis<T>) -> Plane<T> {
    let mut map = Array2::<T>::zeros((M, N));
    qdct_saliency_planes(image.view(), axis.quaternion(), map.view_mut());
    map
}

/// [`qdct_saliency`] with the default axis `(0, -1, -1, -1) / sqrt(3)`.
pub fn qdct_saliency_default<T: Sample>(image: &QuaternionImage<T>) -> Plane<T> {
    qdct_saliency(image, &Axis::default())
}

/// Saliency kernel over raw planar buffers.
///
/// `image` is `(3 | 4, 48, 64)`, `output` is `(48, 64)`. Nothing is validated;
/// a non-unit `axis` silently rescales the result.
///
/// 1. `axis * image` (left multiplication, always four channels out)
/// 2. unnormalized 2-D DCT-II of each channel
/// 3. quaternion signum across the four channels of each coefficient
/// 4. `axis * spectrum` (same side, same axis)
/// 5. unnormalized 2-D DCT-III of each channel
/// 6. squared quaternion magnitude, clamped at zero
pub fn qdct_saliency_planes<T: Sample>(
    image: ArrayView3<'_, T>,
    axis: Quaternion<T>,
    output: ArrayViewMut2<'_, T>,
) {
    let mut rotated = Array3::<T>::zeros((FULL_CHANNEL_COUNT, M, N));
    if image.dim().0 == PURE_CHANNEL_COUNT {
        product_scalar_imaginary_matrix(axis, image, rotated.view_mut());
    } else {
        product_scalar_matrix(axis, image, rotated.view_mut());
    }

    let mut spectrum = Array3::<T>::zeros((FULL_CHANNEL_COUNT, M, N));
    for (src, dst) in rotated.outer_iter().zip(spectrum.outer_iter_mut()) {
        dct2(src, dst, false);
    }

    let mut whitened = Array3::<T>::zeros((FULL_CHANNEL_COUNT, M, N));
    signum(spectrum.view(), whitened.view_mut());

    product_scalar_matrix(axis, whitened.view(), rotated.view_mut());

    for (src, dst) in rotated.outer_iter().zip(spectrum.outer_iter_mut()) {
        idct2(src, dst, false);
    }

    squared_magnitude(spectrum.view(), output);
}
