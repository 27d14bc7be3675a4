use ndarray::Array2;

use crate::consts::EPSILON;

/// Rescale to [0, 1] by the map's own minimum and maximum.
///
/// Maps whose range is below [`EPSILON`] (including constant maps) become
/// all zeros. Non-finite values are ignored when finding the range and are
/// written as zero.
pub fn min_max_normalize(data: &Array2<f32>) -> Array2<f32> {
    let (lo, hi) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = hi - lo;
    if !range.is_finite() || range < EPSILON {
        return Array2::zeros(data.dim());
    }
    data.mapv(|v| if v.is_finite() { (v - lo) / range } else { 0.0 })
}

/// Clamp every value to [0, 1]; NaN becomes 0.
pub fn clamp_unit(data: &Array2<f32>) -> Array2<f32> {
    data.mapv(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) })
}
