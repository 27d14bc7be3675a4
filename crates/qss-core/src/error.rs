use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QssError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid plane shape: expected 48x64, got {rows}x{cols}")]
    InvalidPlaneShape { rows: usize, cols: usize },

    #[error("Invalid channel count {0}: expected 3 or 4")]
    InvalidChannelCount(usize),

    #[error("Axis must have exactly 4 components, got {0}")]
    InvalidAxisLength(usize),

    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(String),

    #[error("Axis is not a unit pure quaternion (real part {real}, imaginary norm {norm})")]
    DegenerateAxis { real: f64, norm: f64 },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("No images found in {0}")]
    EmptyInput(PathBuf),
}

/// Coarse classification of [`QssError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Type,
    DegenerateAxis,
    Io,
    Config,
}

impl QssError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPlaneShape { .. }
            | Self::InvalidChannelCount(_)
            | Self::InvalidAxisLength(_)
            | Self::Shape(_) => ErrorKind::Shape,
            Self::UnsupportedElementType(_) => ErrorKind::Type,
            Self::DegenerateAxis { .. } => ErrorKind::DegenerateAxis,
            Self::Io(_) | Self::ImageError(_) | Self::EmptyInput(_) => ErrorKind::Io,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, QssError>;
