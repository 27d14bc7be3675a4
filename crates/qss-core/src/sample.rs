use std::fmt::Debug;

use num_traits::Float;

/// Floating-point element type the kernel is instantiated for.
///
/// Only `f32` and `f64` implement it. Constant tables are stored as `f64`
/// and narrowed through [`Sample::of`] at the point of use.
pub trait Sample: Float + Default + Debug + Send + Sync + 'static {
    /// Short type name used in logs and error messages.
    const NAME: &'static str;

    /// Convert an `f64` constant to this type (rounding for `f32`).
    fn of(value: f64) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;
}

impl Sample for f32 {
    const NAME: &'static str = "f32";

    #[inline(always)]
    fn of(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    const NAME: &'static str = "f64";

    #[inline(always)]
    fn of(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}
