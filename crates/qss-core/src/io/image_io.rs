use std::path::Path;

use image::{imageops, DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};
use ndarray::{Array2, Array3};

use crate::color::encode_planes;
use crate::consts::{M, N};
use crate::error::{QssError, Result};
use crate::filters::{clamp_unit, ResizeFilter};
use crate::pipeline::config::PreprocessConfig;
use crate::plane::QuaternionImage;
use crate::sample::Sample;

/// A decoded image, reduced to the kernel's 48x64 patch.
#[derive(Clone, Debug)]
pub struct LoadedPatch<T> {
    pub image: QuaternionImage<T>,
    pub source_width: usize,
    pub source_height: usize,
}

/// Decode an image file and encode it as a three-channel 48x64 patch.
pub fn load_patch<T: Sample>(path: &Path, config: &PreprocessConfig) -> Result<LoadedPatch<T>> {
    let img = image::open(path)?;
    patch_from_image(&img, config)
}

/// Encode an already decoded image as a three-channel 48x64 patch.
pub fn patch_from_image<T: Sample>(
    img: &DynamicImage,
    config: &PreprocessConfig,
) -> Result<LoadedPatch<T>> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w == 0 || h == 0 {
        return Err(QssError::Shape(format!("image has no pixels ({}x{})", w, h)));
    }

    let rgb = img.to_rgb32f();
    let small = imageops::resize(
        &rgb,
        N as u32,
        M as u32,
        config.resize_filter.filter_type(),
    );
    let interleaved = Array3::from_shape_vec((M, N, 3), small.into_raw())
        .map_err(|e| QssError::Shape(e.to_string()))?;
    let planes = encode_planes(config.color_space, &interleaved).mapv(|v| T::of(f64::from(v)));

    Ok(LoadedPatch {
        image: QuaternionImage::from_planes(planes)?,
        source_width: w,
        source_height: h,
    })
}

/// Decode an image file as grayscale in [0, 1], resized to 48x64.
///
/// Returns the plane and the source `(width, height)`.
pub fn load_gray_plane(path: &Path, filter: ResizeFilter) -> Result<(Array2<f32>, (usize, usize))> {
    let img = image::open(path)?;
    let source = (img.width() as usize, img.height() as usize);
    let gray = img.to_luma32f();
    let small = imageops::resize(&gray, N as u32, M as u32, filter.filter_type());
    let plane = Array2::from_shape_vec((M, N), small.into_raw())
        .map_err(|e| QssError::Shape(e.to_string()))?;
    Ok((plane, source))
}

/// Save a map as 16-bit grayscale TIFF, values clamped to [0, 1].
pub fn save_tiff(map: &Array2<f32>, path: &Path) -> Result<()> {
    let (h, w) = map.dim();
    let pixels: Vec<u16> = clamp_unit(map)
        .iter()
        .map(|&v| (v * 65535.0).round() as u16)
        .collect();

    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| QssError::Shape(format!("map buffer does not match {}x{}", w, h)))?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a map as 8-bit grayscale PNG, values clamped to [0, 1].
pub fn save_png(map: &Array2<f32>, path: &Path) -> Result<()> {
    let (h, w) = map.dim();
    let map = clamp_unit(map);
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (map[[row, col]] * 255.0).round() as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a map, choosing the format from the file extension (TIFF otherwise).
pub fn save_map(map: &Array2<f32>, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => save_png(map, path),
        _ => save_tiff(map, path),
    }
}
