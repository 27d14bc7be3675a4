//! Boundary for hosts that hand over untyped, dynamically shaped buffers.
//!
//! The kernel trusts its inputs; everything a foreign caller can get wrong
//! (dimensions, channel count, element type, axis length and norm) is
//! checked here before any arithmetic runs.

use ndarray::{Array2, Array3, ShapeBuilder};

use crate::consts::{M, N};
use crate::error::{QssError, Result};
use crate::plane::{check_channel_count, check_plane_shape, QuaternionImage};
use crate::sample::Sample;
use crate::saliency::{qdct_saliency, Axis};
use crate::transform::{dct1_array, dct2_array, idct1_array, idct2_array, TransformAxis};

/// Linear memory order of a host buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemoryOrder {
    /// Last dimension varies fastest.
    #[default]
    RowMajor,
    /// First dimension varies fastest (Fortran / MATLAB order).
    ColumnMajor,
}

/// Typed payload of a host buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum HostData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    I32(Vec<i32>),
}

impl HostData {
    pub fn element_type(&self) -> &'static str {
        match self {
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::I32(_) => "i32",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::I32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dense n-dimensional host buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct HostArray {
    pub dims: Vec<usize>,
    pub order: MemoryOrder,
    pub data: HostData,
}

impl HostArray {
    pub fn new(dims: Vec<usize>, order: MemoryOrder, data: HostData) -> Self {
        Self { dims, order, data }
    }

    /// One-dimensional buffer, e.g. an axis.
    pub fn vector(data: HostData) -> Self {
        Self {
            dims: vec![data.len()],
            order: MemoryOrder::RowMajor,
            data,
        }
    }

    /// Product of the dimensions, or `None` when it overflows `usize`.
    fn element_count(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    fn check_length(&self) -> Result<()> {
        match self.element_count() {
            Some(expected) if expected == self.data.len() => Ok(()),
            Some(expected) => Err(QssError::Shape(format!(
                "buffer holds {} elements but dimensions {:?} need {}",
                self.data.len(),
                self.dims,
                expected
            ))),
            None => Err(QssError::Shape(format!(
                "dimensions {:?} overflow the addressable size",
                self.dims
            ))),
        }
    }
}

/// Floating-point result handed back to the host, in the input's precision.
#[derive(Clone, Debug, PartialEq)]
pub enum HostMatrix {
    F32(Array2<f32>),
    F64(Array2<f64>),
}

impl HostMatrix {
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::F32(a) => a.dim(),
            Self::F64(a) => a.dim(),
        }
    }

    /// Values widened to `f64`.
    pub fn to_f64(&self) -> Array2<f64> {
        match self {
            Self::F32(a) => a.mapv(f64::from),
            Self::F64(a) => a.clone(),
        }
    }
}

/// Options of the stand-alone transform entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformRequest {
    /// Run the type-III inverse instead of the type-II transform.
    pub inverse: bool,
    /// Orthonormal scaling.
    pub normalize: bool,
    /// Transform each 48-sample column only.
    pub one_dimensional: bool,
}

impl Default for TransformRequest {
    fn default() -> Self {
        Self {
            inverse: false,
            normalize: true,
            one_dimensional: false,
        }
    }
}

/// Float element types accepted from a host.
trait HostElement: Sample {
    fn slice(data: &HostData) -> Option<&[Self]>;
}

impl HostElement for f32 {
    fn slice(data: &HostData) -> Option<&[Self]> {
        match data {
            HostData::F32(v) => Some(v),
            _ => None,
        }
    }
}

impl HostElement for f64 {
    fn slice(data: &HostData) -> Option<&[Self]> {
        match data {
            HostData::F64(v) => Some(v),
            _ => None,
        }
    }
}

/// Saliency of a host image of shape `48 x 64 x C`, `C` in {3, 4}.
///
/// `axis`, when given, must hold exactly four values of the image's element
/// type and be a unit pure quaternion; otherwise the default axis is used.
pub fn saliency_host(image: &HostArray, axis: Option<&HostArray>) -> Result<HostMatrix> {
    let (rows, cols, channels) = match image.dims.as_slice() {
        &[rows, cols, channels] => (rows, cols, channels),
        dims => {
            return Err(QssError::Shape(format!(
                "expected a 48 x 64 x 3 or 48 x 64 x 4 image, got dimensions {:?}",
                dims
            )))
        }
    };
    check_plane_shape(rows, cols)?;
    check_channel_count(channels)?;
    image.check_length()?;

    match &image.data {
        HostData::F32(values) => saliency_typed(image, values, axis).map(HostMatrix::F32),
        HostData::F64(values) => saliency_typed(image, values, axis).map(HostMatrix::F64),
        other => Err(unsupported(other)),
    }
}

/// Stand-alone 48x64 transform of a host matrix.
pub fn transform_host(input: &HostArray, request: TransformRequest) -> Result<HostMatrix> {
    match input.dims.as_slice() {
        &[rows, cols] => check_plane_shape(rows, cols)?,
        dims => {
            return Err(QssError::Shape(format!(
                "expected a 48 x 64 matrix, got dimensions {:?}",
                dims
            )))
        }
    }
    input.check_length()?;

    match &input.data {
        HostData::F32(values) => transform_typed(values, input.order, request).map(HostMatrix::F32),
        HostData::F64(values) => transform_typed(values, input.order, request).map(HostMatrix::F64),
        other => Err(unsupported(other)),
    }
}

fn unsupported(data: &HostData) -> QssError {
    QssError::UnsupportedElementType(format!(
        "{} (only f32 and f64 are supported)",
        data.element_type()
    ))
}

fn saliency_typed<T: HostElement>(
    image: &HostArray,
    values: &[T],
    axis: Option<&HostArray>,
) -> Result<Array2<T>> {
    let axis = match axis {
        Some(host_axis) => host_axis_typed::<T>(host_axis, &image.data)?,
        None => Axis::default(),
    };
    let channels = image.dims[2];
    let interleaved = match image.order {
        MemoryOrder::RowMajor => Array3::from_shape_vec((M, N, channels), values.to_vec()),
        MemoryOrder::ColumnMajor => Array3::from_shape_vec((M, N, channels).f(), values.to_vec()),
    }
    .map_err(|e| QssError::Shape(e.to_string()))?;
    let planes = interleaved
        .permuted_axes([2, 0, 1])
        .as_standard_layout()
        .into_owned();
    let image = QuaternionImage::from_planes(planes)?;
    Ok(qdct_saliency(&image, &axis))
}

fn host_axis_typed<T: HostElement>(axis: &HostArray, image_data: &HostData) -> Result<Axis<T>> {
    if axis.data.len() != 4 || axis.element_count() != Some(4) {
        return Err(QssError::InvalidAxisLength(axis.data.len()));
    }
    let components = T::slice(&axis.data).ok_or_else(|| {
        QssError::UnsupportedElementType(format!(
            "axis is {} but image is {}",
            axis.data.element_type(),
            image_data.element_type()
        ))
    })?;
    Axis::from_slice(components)
}

fn transform_typed<T: HostElement>(
    values: &[T],
    order: MemoryOrder,
    request: TransformRequest,
) -> Result<Array2<T>> {
    let plane = match order {
        MemoryOrder::RowMajor => Array2::from_shape_vec((M, N), values.to_vec()),
        MemoryOrder::ColumnMajor => Array2::from_shape_vec((M, N).f(), values.to_vec()),
    }
    .map_err(|e| QssError::Shape(e.to_string()))?
    .as_standard_layout()
    .into_owned();

    let out = match (request.inverse, request.one_dimensional) {
        (false, false) => dct2_array(&plane, request.normalize),
        (true, false) => idct2_array(&plane, request.normalize),
        (false, true) => dct1_array(TransformAxis::Columns, &plane, request.normalize),
        (true, true) => idct1_array(TransformAxis::Columns, &plane, request.normalize),
    };
    Ok(out)
}
