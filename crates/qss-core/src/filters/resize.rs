use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;
use crate::error::{QssError, Result};

/// Interpolation used when resizing images and maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// Resize a single-channel map to `width` x `height`.
///
/// The image crate clamps float pixels to [0, 1] while resampling, so values
/// are mapped into that range by the map's own min and max first and mapped
/// back afterwards.
pub fn resize_map(
    data: &Array2<f32>,
    width: usize,
    height: usize,
    filter: ResizeFilter,
) -> Result<Array2<f32>> {
    let (h, w) = data.dim();
    if (h, w) == (height, width) {
        return Ok(data.clone());
    }
    if width == 0 || height == 0 || w == 0 || h == 0 {
        return Err(QssError::Shape(format!(
            "cannot resize a {}x{} map to {}x{}",
            w, h, width, height
        )));
    }

    let (lo, hi) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;
    if !range.is_finite() || range < EPSILON {
        let fill = if lo.is_finite() { lo } else { 0.0 };
        return Ok(Array2::from_elem((height, width), fill));
    }

    let pixels: Vec<f32> = data
        .iter()
        .map(|&v| if v.is_finite() { (v - lo) / range } else { 0.0 })
        .collect();
    let src = ImageBuffer::<Luma<f32>, Vec<f32>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| QssError::Shape(format!("map buffer does not match {}x{}", w, h)))?;
    let resized = imageops::resize(&src, width as u32, height as u32, filter.filter_type());

    let unit = Array2::from_shape_vec((height, width), resized.into_raw())
        .map_err(|e| QssError::Shape(e.to_string()))?;
    Ok(unit.mapv(|v| v * range + lo))
}
