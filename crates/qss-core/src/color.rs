use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::consts::{D65_WHITE, LAB_AB_SCALE, LAB_L_SCALE, SRGB_TO_XYZ};

/// Color encoding of the three imaginary channels of an image patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    /// sRGB values in [0, 1], unchanged.
    #[default]
    Rgb,
    /// CIE L*a*b* (D65), scaled to L/100, a/128, b/128.
    Lab,
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Lab => write!(f, "CIE Lab"),
        }
    }
}

/// Undo the sRGB transfer curve.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB in [0, 1] to CIE XYZ under D65.
pub fn rgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    let lin = rgb.map(srgb_to_linear);
    let mut xyz = [0.0f32; 3];
    for (out, row) in xyz.iter_mut().zip(SRGB_TO_XYZ.iter()) {
        *out = row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2];
    }
    xyz
}

fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// sRGB in [0, 1] to unscaled CIE L*a*b*: L in [0, 100], a and b roughly in [-128, 127].
pub fn rgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let xyz = rgb_to_xyz(rgb);
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Encode one pixel into the channel values fed to the saliency kernel.
pub fn encode_pixel(space: ColorSpace, rgb: [f32; 3]) -> [f32; 3] {
    match space {
        ColorSpace::Rgb => rgb,
        ColorSpace::Lab => {
            let [l, a, b] = rgb_to_lab(rgb);
            [l / LAB_L_SCALE, a / LAB_AB_SCALE, b / LAB_AB_SCALE]
        }
    }
}

/// Encode an interleaved `(h, w, 3)` RGB array into planar `(3, h, w)` channels.
pub fn encode_planes(space: ColorSpace, rgb: &Array3<f32>) -> Array3<f32> {
    let (h, w, _) = rgb.dim();
    let mut planes = Array3::<f32>::zeros((3, h, w));

    for row in 0..h {
        for col in 0..w {
            let px = [rgb[[row, col, 0]], rgb[[row, col, 1]], rgb[[row, col, 2]]];
            let encoded = encode_pixel(space, px);
            for (ch, v) in encoded.into_iter().enumerate() {
                planes[[ch, row, col]] = v;
            }
        }
    }

    planes
}
