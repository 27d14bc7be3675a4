pub mod image_io;

pub use image_io::{load_gray_plane, load_patch, patch_from_image, save_map, LoadedPatch};
