pub mod gaussian_blur;
pub mod normalize;
pub mod resize;

pub use gaussian_blur::{gaussian_blur, smoothing_sigma};
pub use normalize::{clamp_unit, min_max_normalize};
pub use resize::{resize_map, ResizeFilter};
