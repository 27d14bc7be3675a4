#![allow(dead_code)]

use ndarray::{Array2, Array3};
use qss_core::consts::{M, N};

/// Small deterministic generator for synthetic test data.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    /// Uniform in [-1, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// A 48x64 plane of pseudo-random values in [-1, 1).
pub fn random_plane(seed: u64) -> Array2<f64> {
    let mut rng = Lcg::new(seed);
    Array2::from_shape_fn((M, N), |_| rng.next_f64())
}

/// A `(channels, 48, 64)` stack of pseudo-random values in [-1, 1).
pub fn random_planes(channels: usize, seed: u64) -> Array3<f64> {
    let mut rng = Lcg::new(seed);
    Array3::from_shape_fn((channels, M, N), |_| rng.next_f64())
}

/// Direct O(L^2) type-II DCT of a 1-D signal: `2 Σ x[n] cos(π(2n+1)k / 2L)`.
pub fn direct_dct_ii(x: &[f64]) -> Vec<f64> {
    let l = x.len() as f64;
    (0..x.len())
        .map(|k| {
            2.0 * x
                .iter()
                .enumerate()
                .map(|(n, v)| v * (std::f64::consts::PI * (2.0 * n as f64 + 1.0) * k as f64 / (2.0 * l)).cos())
                .sum::<f64>()
        })
        .collect()
}

/// Direct orthonormal type-II DCT.
pub fn direct_dct_ii_ortho(x: &[f64]) -> Vec<f64> {
    let l = x.len() as f64;
    direct_dct_ii(x)
        .into_iter()
        .enumerate()
        .map(|(k, v)| {
            let w = if k == 0 { (1.0 / l).sqrt() } else { (2.0 / l).sqrt() };
            v / 2.0 * w
        })
        .collect()
}

/// Largest absolute elementwise difference.
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0f64, |m, (x, y)| m.max((x - y).abs()))
}
