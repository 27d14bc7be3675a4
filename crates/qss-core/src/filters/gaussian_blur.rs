use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Sigma in pixels for a map `width` pixels wide.
pub fn smoothing_sigma(sigma_fraction: f32, width: usize) -> f32 {
    sigma_fraction * width as f32
}

/// Separable Gaussian blur with clamped borders.
///
/// A non-positive or non-finite `sigma` returns the input unchanged. The
/// kernel radius is capped at the longer side of `data`.
pub fn gaussian_blur(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return data.clone();
    }
    let (h, w) = data.dim();
    let kernel = make_gaussian_kernel(sigma, h.max(w));
    let row_pass = convolve(data, &kernel, Axis(1));
    convolve(&row_pass, &kernel, Axis(0))
}

fn make_gaussian_kernel(sigma: f32, max_radius: usize) -> Vec<f32> {
    let reach = (sigma * 3.0).ceil();
    let radius = if reach < max_radius as f32 {
        reach as usize
    } else {
        max_radius
    };
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Convolve every lane along `axis`, clamping out-of-range taps to the edge.
fn convolve(data: &Array2<f32>, kernel: &[f32], axis: Axis) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;
    let along_rows = axis == Axis(1);

    let tap = |row: usize, col: usize| -> f32 {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let offset = ki as isize - radius;
            let v = if along_rows {
                let c = (col as isize + offset).clamp(0, w as isize - 1) as usize;
                data[[row, c]]
            } else {
                let r = (row as isize + offset).clamp(0, h as isize - 1) as usize;
                data[[r, col]]
            };
            sum += v * kv;
        }
        sum
    };

    let mut result = Array2::<f32>::zeros((h, w));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out_row)| {
                for col in 0..w {
                    out_row[col] = tap(row, col);
                }
            });
    } else {
        for row in 0..h {
            for col in 0..w {
                result[[row, col]] = tap(row, col);
            }
        }
    }
    result
}
