//! Quaternion algebra over single values and planar quaternion images.
//!
//! Planar buffers are `(channels, rows, cols)` arrays: four channels hold
//! (a, b, c, d), three channels hold (b, c, d) with an implicit `a = 0`.

pub mod nonlinear;
pub mod planar;
mod value;

pub use nonlinear::{magnitude, signum, squared_magnitude};
pub use planar::{
    product_imaginary_matrices, product_imaginary_matrix_scalar, product_matrices,
    product_matrix_scalar, product_scalar_imaginary_matrix, product_scalar_matrix,
};
pub use value::{hamilton_product, hamilton_product_imaginary, Quaternion};
