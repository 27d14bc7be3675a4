mod common;

use approx::assert_abs_diff_eq;
use ndarray::{Array2, Array3};

use qss_core::consts::{M, N};
use qss_core::error::ErrorKind;
use qss_core::plane::QuaternionImage;
use qss_core::quaternion::Quaternion;
use qss_core::saliency::{
    qdct_saliency, qdct_saliency_batch, qdct_saliency_default, qdct_saliency_planes, Axis,
};

use common::{random_plane, random_planes};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn random_image(channels: usize, seed: u64) -> QuaternionImage<f64> {
    QuaternionImage::from_planes(random_planes(channels, seed)).unwrap()
}

fn max_value(map: &Array2<f64>) -> f64 {
    map.iter().cloned().fold(0.0, f64::max)
}

// ---------------------------------------------------------------------------
// Map contract
// ---------------------------------------------------------------------------

#[test]
fn test_zero_input_gives_zero_map() {
    for channels in [3, 4] {
        let image = QuaternionImage::<f64>::zeros(channels).unwrap();
        let map = qdct_saliency_default(&image);
        assert!(map.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn test_constant_input_gives_constant_map() {
    let b = Array2::from_elem((M, N), 0.2);
    let c = Array2::from_elem((M, N), 0.5);
    let d = Array2::from_elem((M, N), 0.9);
    let image = QuaternionImage::pure(b, c, d).unwrap();
    let map = qdct_saliency_default(&image);

    // Only the DC coefficient survives, and its unit signum inverts to 1.
    let first = map[[0, 0]];
    assert_abs_diff_eq!(first, 1.0, epsilon = 1e-9);
    for v in map.iter() {
        assert_abs_diff_eq!(*v, first, epsilon = 1e-9 * first);
    }
}

#[test]
fn test_map_shape_and_non_negative() {
    for channels in [3, 4] {
        let map = qdct_saliency_default(&random_image(channels, 1));
        assert_eq!(map.dim(), (M, N));
        assert!(map.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(max_value(&map) > 0.0);
    }
}

#[test]
fn test_pure_equals_full_with_zero_real_plane() {
    let pure = random_image(3, 2);
    let full = pure.to_full();
    assert_eq!(full.channels(), 4);
    let axis = Axis::default();
    assert_eq!(qdct_saliency(&pure, &axis), qdct_saliency(&full, &axis));
}

#[test]
fn test_deterministic() {
    let image = random_image(4, 3);
    assert_eq!(qdct_saliency_default(&image), qdct_saliency_default(&image));
}

#[test]
fn test_invariant_to_positive_input_scale() {
    let planes = random_planes(3, 4);
    let image = QuaternionImage::from_planes(planes.clone()).unwrap();
    let scaled = QuaternionImage::from_planes(planes.mapv(|v| v * 7.5)).unwrap();

    let a = qdct_saliency_default(&image);
    let b = qdct_saliency_default(&scaled);
    let tol = 1e-9 * max_value(&a);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = tol);
    }
}

#[test]
fn test_negated_axis_gives_same_map() {
    let image = random_image(3, 5);
    let axis = Axis::<f64>::default();
    let negated = Axis::new(-axis.quaternion()).unwrap();

    let a = qdct_saliency(&image, &axis);
    let b = qdct_saliency(&image, &negated);
    let tol = 1e-9 * max_value(&a);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = tol);
    }
}

#[test]
fn test_unit_axes_give_same_map() {
    // sgn(mu X) = mu sgn(X) for unit mu, and mu * mu = -1 leaves the
    // squared magnitude unchanged: the map does not depend on the direction.
    let image = random_image(3, 6);
    let a = qdct_saliency(&image, &Axis::default());
    let tol = 1e-9 * max_value(&a);
    for (b, c, d) in [(1.0, 0.0, 0.0), (0.3, -0.2, 0.9), (0.0, 1.0, 1.0)] {
        let axis = Axis::from_direction(b, c, d).unwrap();
        let other = qdct_saliency(&image, &axis);
        for (x, y) in a.iter().zip(other.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = tol);
        }
    }
}

#[test]
fn test_axis_norm_scales_map() {
    let image = random_image(3, 6);
    let unit = qdct_saliency_default(&image);

    let mut doubled = Array2::<f64>::zeros((M, N));
    qdct_saliency_planes(image.view(), Quaternion::pure(2.0, 0.0, 0.0), doubled.view_mut());

    // Step 1 is undone by the signum, step 4 scales by |mu|.
    let tol = 1e-9 * 4.0 * max_value(&unit);
    for (x, y) in unit.iter().zip(doubled.iter()) {
        assert_abs_diff_eq!(*y, 4.0 * *x, epsilon = tol);
    }
}

#[test]
fn test_single_precision_survives_tiny_input_scale() {
    let planes = random_planes(3, 9).mapv(|v| v as f32);
    let image = QuaternionImage::from_planes(planes.clone()).unwrap();
    let tiny = QuaternionImage::from_planes(planes.mapv(|v| v * 1e-25)).unwrap();

    let a = qdct_saliency_default(&image);
    let b = qdct_saliency_default(&tiny);
    let peak = a.iter().cloned().fold(0.0f32, f32::max);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-3 * peak);
    }
}

#[test]
fn test_single_precision_tracks_double() {
    let planes = random_planes(3, 7);
    let image64 = QuaternionImage::from_planes(planes.clone()).unwrap();
    let image32 = QuaternionImage::from_planes(planes.mapv(|v| v as f32)).unwrap();

    let a = qdct_saliency_default(&image64);
    let b = qdct_saliency_default(&image32);
    let tol = 1e-3 * max_value(&a);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, f64::from(*y), epsilon = tol);
    }
}

#[test]
fn test_planar_entry_matches_validated_entry() {
    let image = random_image(4, 8);
    let axis = Axis::<f64>::default();
    let mut out = Array2::<f64>::zeros((M, N));
    qdct_saliency_planes(image.view(), axis.quaternion(), out.view_mut());
    assert_eq!(out, qdct_saliency(&image, &axis));
}

#[test]
fn test_batch_matches_serial_in_order() {
    let images: Vec<_> = (0..6).map(|seed| random_image(3 + seed as usize % 2, seed)).collect();
    let axis = Axis::default();
    let batch = qdct_saliency_batch(&images, &axis);
    assert_eq!(batch.len(), images.len());
    for (image, map) in images.iter().zip(batch.iter()) {
        assert_eq!(*map, qdct_saliency(image, &axis));
    }

    let small = qdct_saliency_batch(&images[..2], &axis);
    assert_eq!(small[1], batch[1]);
    assert!(qdct_saliency_batch::<f64>(&[], &axis).is_empty());
}

// ---------------------------------------------------------------------------
// QuaternionImage
// ---------------------------------------------------------------------------

#[test]
fn test_image_rejects_bad_shapes() {
    let err = QuaternionImage::from_planes(Array3::<f64>::zeros((2, M, N))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let err = QuaternionImage::from_planes(Array3::<f64>::zeros((3, N, M))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let err = QuaternionImage::pure(random_plane(1), random_plane(2), Array2::zeros((4, 4)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn test_image_from_channels_order() {
    let b = random_plane(1);
    let c = random_plane(2);
    let d = random_plane(3);
    let image = QuaternionImage::pure(b.clone(), c.clone(), d.clone()).unwrap();
    assert!(image.is_pure());
    assert_eq!(image.plane(0), b.view());
    assert_eq!(image.plane(2), d.view());

    let full = image.to_full();
    assert!(full.plane(0).iter().all(|&v| v == 0.0));
    assert_eq!(full.plane(1), b.view());
    assert_eq!(full.into_inner().dim(), (4, M, N));
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

#[test]
fn test_default_axis_components() {
    let [a, b, c, d] = Axis::<f64>::default().to_array();
    let k = -1.0 / 3f64.sqrt();
    assert_eq!(a, 0.0);
    assert_abs_diff_eq!(b, k, epsilon = 1e-15);
    assert_abs_diff_eq!(c, k, epsilon = 1e-15);
    assert_abs_diff_eq!(d, k, epsilon = 1e-15);
}

#[test]
fn test_axis_validation() {
    assert!(Axis::new(Quaternion::pure(0.0, 1.0, 0.0)).is_ok());
    assert!(Axis::new(Quaternion::pure(0.0, 1.000001, 0.0)).is_ok());

    let err = Axis::new(Quaternion::new(0.1, 1.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateAxis);

    let err = Axis::new(Quaternion::pure(0.0, 2.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateAxis);

    let err = Axis::new(Quaternion::pure(f64::NAN, 1.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateAxis);
}

#[test]
fn test_axis_from_slice_length() {
    let err = Axis::<f64>::from_slice(&[0.0, 1.0, 0.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert!(Axis::<f32>::from_slice(&[0.0, 0.0, 0.0, 1.0]).is_ok());
}

#[test]
fn test_axis_from_direction_normalizes() {
    let axis = Axis::<f64>::from_direction(3.0, 0.0, 4.0).unwrap();
    assert_eq!(axis.quaternion(), Quaternion::pure(0.6, 0.0, 0.8));
    assert!(Axis::<f64>::from_direction(0.0, 0.0, 0.0).is_err());
}
