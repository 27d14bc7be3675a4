pub mod adapter;
pub mod color;
pub mod consts;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod plane;
pub mod quaternion;
pub mod saliency;
pub mod sample;
pub mod transform;
