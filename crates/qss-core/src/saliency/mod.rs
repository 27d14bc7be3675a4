//! Quaternion DCT image-signature saliency for 48x64 patches.

mod axis;
mod batch;
mod qdct;

pub use axis::Axis;
pub use batch::qdct_saliency_batch;
pub use qdct::{qdct_saliency, qdct_saliency_default, qdct_saliency_planes};
