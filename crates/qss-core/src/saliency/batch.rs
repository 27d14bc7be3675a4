use rayon::prelude::*;
use tracing::debug;

use crate::consts::PARALLEL_PATCH_THRESHOLD;
use crate::plane::{Plane, QuaternionImage};
use crate::sample::Sample;

use super::axis::Axis;
use super::qdct::qdct_saliency;

/// Saliency maps for many patches, in input order.
///
/// Patches are processed in parallel once the batch reaches
/// [`PARALLEL_PATCH_THRESHOLD`].
pub fn qdct_saliency_batch<T: Sample>(
    images: &[QuaternionImage<T>],
    axis: &Axis<T>,
) -> Vec<Plane<T>> {
    let parallel = images.len() >= PARALLEL_PATCH_THRESHOLD;
    debug!(
        patches = images.len(),
        parallel,
        precision = T::NAME,
        "Computing saliency batch"
    );

    if parallel {
        images
            .par_iter()
            .map(|image| qdct_saliency(image, axis))
            .collect()
    } else {
        images.iter().map(|image| qdct_saliency(image, axis)).collect()
    }
}
