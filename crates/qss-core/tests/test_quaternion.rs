mod common;

use approx::assert_abs_diff_eq;
use ndarray::{s, Array2, Array3};

use qss_core::consts::{M, N};
use qss_core::quaternion::{
    hamilton_product, hamilton_product_imaginary, magnitude, product_imaginary_matrices,
    product_imaginary_matrix_scalar, product_matrices, product_matrix_scalar,
    product_scalar_imaginary_matrix, product_scalar_matrix, signum, squared_magnitude, Quaternion,
};

use common::random_planes;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn q(a: f64, b: f64, c: f64, d: f64) -> Quaternion<f64> {
    Quaternion::new(a, b, c, d)
}

fn pixel(planes: &Array3<f64>, row: usize, col: usize) -> Quaternion<f64> {
    if planes.dim().0 == 3 {
        Quaternion::pure(
            planes[[0, row, col]],
            planes[[1, row, col]],
            planes[[2, row, col]],
        )
    } else {
        Quaternion::new(
            planes[[0, row, col]],
            planes[[1, row, col]],
            planes[[2, row, col]],
            planes[[3, row, col]],
        )
    }
}

fn assert_quat_eq(got: Quaternion<f64>, want: Quaternion<f64>) {
    assert_abs_diff_eq!(got.a, want.a, epsilon = 1e-12);
    assert_abs_diff_eq!(got.b, want.b, epsilon = 1e-12);
    assert_abs_diff_eq!(got.c, want.c, epsilon = 1e-12);
    assert_abs_diff_eq!(got.d, want.d, epsilon = 1e-12);
}

fn with_zero_real(pure: &Array3<f64>) -> Array3<f64> {
    let mut full = Array3::<f64>::zeros((4, M, N));
    full.slice_mut(s![1.., .., ..]).assign(pure);
    full
}

// ---------------------------------------------------------------------------
// Single-value algebra
// ---------------------------------------------------------------------------

#[test]
fn test_hamilton_product_formula() {
    let (a, b, c, d) = hamilton_product(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    assert_eq!((a, b, c, d), (-60.0, 12.0, 30.0, 24.0));
}

#[test]
fn test_unit_identities() {
    let i = q(0.0, 1.0, 0.0, 0.0);
    let j = q(0.0, 0.0, 1.0, 0.0);
    let k = q(0.0, 0.0, 0.0, 1.0);
    let one = q(1.0, 0.0, 0.0, 0.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(i * i, -one);
    assert_eq!(i * j * k, -one);
}

#[test]
fn test_product_is_not_commutative() {
    let p = q(1.0, 2.0, -1.0, 0.5);
    let r = q(-0.5, 1.0, 3.0, 2.0);
    assert_ne!(p * r, r * p);
}

#[test]
fn test_imaginary_product_matches_full_product() {
    let (b1, c1, d1, b2, c2, d2) = (0.3, -1.2, 2.0, 1.5, 0.25, -0.75);
    let (a, b, c, d) = hamilton_product_imaginary(b1, c1, d1, b2, c2, d2);
    assert_quat_eq(
        q(a, b, c, d),
        Quaternion::pure(b1, c1, d1) * Quaternion::pure(b2, c2, d2),
    );
}

#[test]
fn test_magnitude_is_multiplicative() {
    let p = q(1.0, 2.0, -1.0, 0.5);
    let r = q(-0.5, 1.0, 3.0, 2.0);
    assert_abs_diff_eq!((p * r).magnitude(), p.magnitude() * r.magnitude(), epsilon = 1e-12);
}

#[test]
fn test_conjugate_gives_squared_magnitude() {
    let p = q(1.0, 2.0, -1.0, 0.5);
    let n = p * p.conjugate();
    assert_quat_eq(n, q(p.squared_magnitude(), 0.0, 0.0, 0.0));
}

#[test]
fn test_signum_of_zero_and_nan_is_zero() {
    assert_eq!(Quaternion::<f64>::zero().signum(), Quaternion::zero());
    assert_eq!(q(f64::NAN, 1.0, 0.0, 0.0).signum(), Quaternion::zero());
    assert_abs_diff_eq!(q(0.0, 3.0, 0.0, 4.0).signum().magnitude(), 1.0, epsilon = 1e-15);
}

#[test]
fn test_signum_and_magnitude_at_extreme_scales() {
    assert_quat_eq(q(1e-200, 0.0, 0.0, 0.0).signum(), q(1.0, 0.0, 0.0, 0.0));
    assert_quat_eq(q(0.0, 1e200, 0.0, 0.0).signum(), q(0.0, 1.0, 0.0, 0.0));
    assert_quat_eq(q(0.0, 3e-300, 0.0, -4e-300).signum(), q(0.0, 0.6, 0.0, -0.8));
    assert_abs_diff_eq!(q(0.0, 3e200, 0.0, 4e200).magnitude() / 5e200, 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(q(3e-200, 4e-200, 0.0, 0.0).magnitude() / 5e-200, 1.0, epsilon = 1e-15);
    assert_eq!(q(f64::INFINITY, 1.0, 0.0, 0.0).signum(), Quaternion::zero());
}

// ---------------------------------------------------------------------------
// Planar products
// ---------------------------------------------------------------------------

#[test]
fn test_product_matrices_per_pixel() {
    let lhs = random_planes(4, 1);
    let rhs = random_planes(4, 2);
    let mut out = Array3::<f64>::zeros((4, M, N));
    product_matrices(lhs.view(), rhs.view(), out.view_mut());
    for (row, col) in [(0, 0), (7, 13), (47, 63), (20, 40)] {
        assert_quat_eq(pixel(&out, row, col), pixel(&lhs, row, col) * pixel(&rhs, row, col));
    }
}

#[test]
fn test_scalar_side_matters() {
    let m = random_planes(4, 3);
    let x = q(0.5, -0.25, 1.0, 0.75);
    let mut left = Array3::<f64>::zeros((4, M, N));
    let mut right = Array3::<f64>::zeros((4, M, N));
    product_scalar_matrix(x, m.view(), left.view_mut());
    product_matrix_scalar(m.view(), x, right.view_mut());

    for (row, col) in [(0, 0), (11, 5), (47, 63)] {
        assert_quat_eq(pixel(&left, row, col), x * pixel(&m, row, col));
        assert_quat_eq(pixel(&right, row, col), pixel(&m, row, col) * x);
    }
    assert_ne!(left, right);
}

#[test]
fn test_pure_variants_equal_full_variants_with_zero_real() {
    let a3 = random_planes(3, 4);
    let b3 = random_planes(3, 5);
    let a4 = with_zero_real(&a3);
    let b4 = with_zero_real(&b3);
    let x = q(0.2, -0.4, 0.6, 0.8);

    let mut pure_out = Array3::<f64>::zeros((4, M, N));
    let mut full_out = Array3::<f64>::zeros((4, M, N));

    product_imaginary_matrices(a3.view(), b3.view(), pure_out.view_mut());
    product_matrices(a4.view(), b4.view(), full_out.view_mut());
    assert_eq!(pure_out, full_out);

    product_scalar_imaginary_matrix(x, a3.view(), pure_out.view_mut());
    product_scalar_matrix(x, a4.view(), full_out.view_mut());
    assert_eq!(pure_out, full_out);

    product_imaginary_matrix_scalar(a3.view(), x, pure_out.view_mut());
    product_matrix_scalar(a4.view(), x, full_out.view_mut());
    assert_eq!(pure_out, full_out);
}

#[test]
fn test_scalar_imaginary_uses_every_axis_component() {
    // A unit i on the left maps the pure pixel (b, c, d) to (-b, 0, -d, c).
    let mut m = Array3::<f64>::zeros((3, M, N));
    m[[0, 0, 0]] = 1.0;
    m[[1, 0, 0]] = 2.0;
    m[[2, 0, 0]] = 3.0;
    let mut out = Array3::<f64>::zeros((4, M, N));
    product_scalar_imaginary_matrix(q(0.0, 1.0, 0.0, 0.0), m.view(), out.view_mut());
    assert_quat_eq(pixel(&out, 0, 0), q(-1.0, 0.0, -3.0, 2.0));
}

// ---------------------------------------------------------------------------
// Magnitude and signum
// ---------------------------------------------------------------------------

#[test]
fn test_squared_magnitude_and_magnitude() {
    let planes = random_planes(4, 6);
    let mut sq = Array2::<f64>::zeros((M, N));
    let mut abs = Array2::<f64>::zeros((M, N));
    squared_magnitude(planes.view(), sq.view_mut());
    magnitude(planes.view(), abs.view_mut());

    for ((row, col), v) in sq.indexed_iter() {
        let p = pixel(&planes, row, col);
        assert_abs_diff_eq!(*v, p.squared_magnitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(abs[[row, col]], p.magnitude(), epsilon = 1e-12);
    }
}

#[test]
fn test_magnitude_of_pure_planes() {
    let mut planes = Array3::<f64>::zeros((3, M, N));
    planes[[0, 2, 2]] = 3.0;
    planes[[2, 2, 2]] = 4.0;
    let mut abs = Array2::<f64>::zeros((M, N));
    magnitude(planes.view(), abs.view_mut());
    assert_abs_diff_eq!(abs[[2, 2]], 5.0);
    assert_eq!(abs[[0, 0]], 0.0);
}

#[test]
fn test_squared_magnitude_nan_is_zero() {
    let mut planes = Array3::<f64>::zeros((4, M, N));
    planes[[1, 3, 3]] = f64::NAN;
    let mut sq = Array2::<f64>::from_elem((M, N), -1.0);
    squared_magnitude(planes.view(), sq.view_mut());
    assert_eq!(sq[[3, 3]], 0.0);
    assert!(sq.iter().all(|&v| v == 0.0));
}

#[test]
fn test_signum_unit_or_zero() {
    let mut planes = random_planes(4, 7);
    planes.slice_mut(s![.., 10, 10]).fill(0.0);
    let mut out = Array3::<f64>::zeros((4, M, N));
    signum(planes.view(), out.view_mut());

    for row in 0..M {
        for col in 0..N {
            let u = pixel(&out, row, col);
            if (row, col) == (10, 10) {
                assert_eq!(u, Quaternion::zero());
            } else {
                assert_abs_diff_eq!(u.magnitude(), 1.0, epsilon = 1e-12);
                assert_quat_eq(u, pixel(&planes, row, col).signum());
            }
        }
    }
}

#[test]
fn test_planar_signum_at_extreme_scales() {
    let mut planes = Array3::<f64>::zeros((4, M, N));
    planes[[0, 1, 1]] = 1e-200;
    planes[[1, 2, 2]] = 1e200;
    planes[[2, 3, 3]] = 3e-300;
    planes[[3, 3, 3]] = 4e-300;
    let mut out = Array3::<f64>::zeros((4, M, N));
    signum(planes.view(), out.view_mut());
    assert_quat_eq(pixel(&out, 1, 1), q(1.0, 0.0, 0.0, 0.0));
    assert_quat_eq(pixel(&out, 2, 2), q(0.0, 1.0, 0.0, 0.0));
    assert_quat_eq(pixel(&out, 3, 3), q(0.0, 0.0, 0.6, 0.8));

    let mut abs = Array2::<f64>::zeros((M, N));
    magnitude(planes.view(), abs.view_mut());
    assert_abs_diff_eq!(abs[[2, 2]] / 1e200, 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(abs[[3, 3]] / 5e-300, 1.0, epsilon = 1e-15);
    assert!(abs[[1, 1]] > 0.0);
}

#[test]
fn test_signum_keeps_three_channels() {
    let planes = random_planes(3, 8);
    let mut out = Array3::<f64>::zeros((3, M, N));
    signum(planes.view(), out.view_mut());

    let norm = (0..3)
        .map(|ch| out[[ch, 5, 9]] * out[[ch, 5, 9]])
        .sum::<f64>()
        .sqrt();
    assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-12);
}
