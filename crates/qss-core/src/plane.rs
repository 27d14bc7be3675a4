use ndarray::{stack, Array2, Array3, ArrayView2, ArrayView3, Axis};

use crate::consts::{FULL_CHANNEL_COUNT, M, N, PURE_CHANNEL_COUNT};
use crate::error::{QssError, Result};
use crate::sample::Sample;

/// A single real channel, shape = (48, 64), row-major.
pub type Plane<T> = Array2<T>;

/// Planar quaternion image.
///
/// Channel planes are stacked along axis 0, shape = (channels, 48, 64).
/// Three channels hold the imaginary parts (b, c, d) with an implicit zero
/// real part; four channels hold (a, b, c, d).
#[derive(Clone, Debug, PartialEq)]
pub struct QuaternionImage<T> {
    planes: Array3<T>,
}

impl<T: Sample> QuaternionImage<T> {
    /// Wrap an already stacked (channels, 48, 64) array.
    pub fn from_planes(planes: Array3<T>) -> Result<Self> {
        let (channels, rows, cols) = planes.dim();
        check_channel_count(channels)?;
        check_plane_shape(rows, cols)?;
        Ok(Self { planes })
    }

    /// Stack separate channel planes in (a,) b, c, d order.
    pub fn from_channels(channels: &[Plane<T>]) -> Result<Self> {
        check_channel_count(channels.len())?;
        for plane in channels {
            let (rows, cols) = plane.dim();
            check_plane_shape(rows, cols)?;
        }
        let views: Vec<ArrayView2<T>> = channels.iter().map(|p| p.view()).collect();
        let planes = stack(Axis(0), &views).map_err(|e| QssError::Shape(e.to_string()))?;
        Ok(Self { planes })
    }

    /// Pure-imaginary image from three planes (b, c, d).
    pub fn pure(b: Plane<T>, c: Plane<T>, d: Plane<T>) -> Result<Self> {
        Self::from_channels(&[b, c, d])
    }

    /// Full quaternion image from four planes (a, b, c, d).
    pub fn full(a: Plane<T>, b: Plane<T>, c: Plane<T>, d: Plane<T>) -> Result<Self> {
        Self::from_channels(&[a, b, c, d])
    }

    /// All-zero image with the given channel count.
    pub fn zeros(channels: usize) -> Result<Self> {
        check_channel_count(channels)?;
        Ok(Self {
            planes: Array3::zeros((channels, M, N)),
        })
    }

    pub fn channels(&self) -> usize {
        self.planes.len_of(Axis(0))
    }

    pub fn is_pure(&self) -> bool {
        self.channels() == PURE_CHANNEL_COUNT
    }

    pub fn plane(&self, channel: usize) -> ArrayView2<'_, T> {
        self.planes.index_axis(Axis(0), channel)
    }

    pub fn view(&self) -> ArrayView3<'_, T> {
        self.planes.view()
    }

    pub fn into_inner(self) -> Array3<T> {
        self.planes
    }

    /// Four-channel copy; a pure image gains an explicit zero real plane.
    pub fn to_full(&self) -> Self {
        if !self.is_pure() {
            return self.clone();
        }
        let mut planes = Array3::zeros((FULL_CHANNEL_COUNT, M, N));
        planes
            .slice_mut(ndarray::s![1.., .., ..])
            .assign(&self.planes);
        Self { planes }
    }
}

pub(crate) fn check_plane_shape(rows: usize, cols: usize) -> Result<()> {
    if rows != M || cols != N {
        return Err(QssError::InvalidPlaneShape { rows, cols });
    }
    Ok(())
}

pub(crate) fn check_channel_count(channels: usize) -> Result<()> {
    if channels != PURE_CHANNEL_COUNT && channels != FULL_CHANNEL_COUNT {
        return Err(QssError::InvalidChannelCount(channels));
    }
    Ok(())
}
