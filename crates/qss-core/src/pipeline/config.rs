use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::consts::DEFAULT_SMOOTHING_SIGMA_FRACTION;
use crate::error::{QssError, Result};
use crate::filters::ResizeFilter;
use crate::quaternion::Quaternion;
use crate::sample::Sample;
use crate::saliency::Axis;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encoding of maps written by directory runs; single files follow the
    /// extension of `output`.
    #[serde(default)]
    pub format: MapFormat,
    #[serde(default)]
    pub saliency: SaliencyConfig,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub postprocess: PostprocessConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("saliency.tiff"),
            format: MapFormat::default(),
            saliency: SaliencyConfig::default(),
            preprocess: PreprocessConfig::default(),
            postprocess: PostprocessConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| QssError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QssError::Config(e.to_string()))
    }

    /// Check the axis and the smoothing parameters.
    pub fn validate(&self) -> Result<()> {
        self.saliency.axis::<f64>()?;
        if let Some(sigma) = self.postprocess.smoothing.active_fraction() {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(QssError::Config(format!(
                    "smoothing sigma_fraction must be finite and >= 0, got {}",
                    sigma
                )));
            }
        }
        Ok(())
    }
}

/// Image format of written maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapFormat {
    /// 16-bit grayscale.
    #[default]
    Tiff,
    /// 8-bit grayscale.
    Png,
}

impl MapFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tiff => "tiff",
            Self::Png => "png",
        }
    }
}

impl std::fmt::Display for MapFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tiff => write!(f, "TIFF (16-bit)"),
            Self::Png => write!(f, "PNG (8-bit)"),
        }
    }
}

/// Floating-point width the kernel runs at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single (f32)"),
            Self::Double => write!(f, "Double (f64)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaliencyConfig {
    /// Unit pure quaternion `[a, b, c, d]`.
    pub axis: [f64; 4],
    pub precision: Precision,
}

impl Default for SaliencyConfig {
    fn default() -> Self {
        Self {
            axis: Axis::<f64>::default().to_array(),
            precision: Precision::default(),
        }
    }
}

impl SaliencyConfig {
    /// The configured axis, validated and converted to `T`.
    pub fn axis<T: Sample>(&self) -> Result<Axis<T>> {
        Axis::new(Quaternion::from_array(self.axis.map(T::of)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    pub color_space: ColorSpace,
    pub resize_filter: ResizeFilter,
}

/// How the final map's values are scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleOutput {
    /// Rescale to [0, 1] by the map's min and max.
    #[default]
    MinMax,
    /// Keep raw values.
    Raw,
}

impl std::fmt::Display for ScaleOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinMax => write!(f, "Min-max"),
            Self::Raw => write!(f, "Raw"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Gaussian sigma as a fraction of the map width.
    pub sigma_fraction: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sigma_fraction: DEFAULT_SMOOTHING_SIGMA_FRACTION,
        }
    }
}

impl SmoothingConfig {
    /// `Some(sigma_fraction)` when smoothing is on.
    pub fn active_fraction(&self) -> Option<f32> {
        self.enabled.then_some(self.sigma_fraction)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostprocessConfig {
    pub scale_output: ScaleOutput,
    /// Resize the map back to the source image's dimensions.
    pub resize_to_input: bool,
    pub smoothing: SmoothingConfig,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            scale_output: ScaleOutput::default(),
            resize_to_input: true,
            smoothing: SmoothingConfig::default(),
        }
    }
}
