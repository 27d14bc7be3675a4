use crate::consts::{AXIS_TOLERANCE, DEFAULT_AXIS_DIRECTION};
use crate::error::{QssError, Result};
use crate::quaternion::Quaternion;
use crate::sample::Sample;

/// Unit pure-imaginary quaternion folding color channels into the
/// imaginary basis before and after the spectral whitening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis<T> {
    q: Quaternion<T>,
}

impl<T: Sample> Axis<T> {
    /// Validate `a = 0` and `b^2 + c^2 + d^2 = 1` within [`AXIS_TOLERANCE`].
    pub fn new(q: Quaternion<T>) -> Result<Self> {
        let real = q.a.as_f64();
        let norm_sq = q.b.as_f64().powi(2) + q.c.as_f64().powi(2) + q.d.as_f64().powi(2);
        if !real.is_finite()
            || !norm_sq.is_finite()
            || real.abs() > AXIS_TOLERANCE
            || (norm_sq - 1.0).abs() > AXIS_TOLERANCE
        {
            return Err(QssError::DegenerateAxis {
                real,
                norm: norm_sq.sqrt(),
            });
        }
        Ok(Self { q })
    }

    /// Validate a host-supplied `[a, b, c, d]` slice.
    pub fn from_slice(components: &[T]) -> Result<Self> {
        match components {
            [a, b, c, d] => Self::new(Quaternion::new(*a, *b, *c, *d)),
            _ => Err(QssError::InvalidAxisLength(components.len())),
        }
    }

    /// Normalize the direction `(b, c, d)` to a unit pure quaternion.
    pub fn from_direction(b: f64, c: f64, d: f64) -> Result<Self> {
        let norm = (b * b + c * c + d * d).sqrt();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(QssError::DegenerateAxis { real: 0.0, norm });
        }
        Self::new(Quaternion::pure(
            T::of(b / norm),
            T::of(c / norm),
            T::of(d / norm),
        ))
    }

    pub fn quaternion(&self) -> Quaternion<T> {
        self.q
    }

    pub fn to_array(&self) -> [T; 4] {
        self.q.to_array()
    }
}

impl<T: Sample> Default for Axis<T> {
    /// `(0, -1, -1, -1) / sqrt(3)`.
    fn default() -> Self {
        let [b, c, d] = DEFAULT_AXIS_DIRECTION;
        let norm = (b * b + c * c + d * d).sqrt();
        Self {
            q: Quaternion::pure(T::of(b / norm), T::of(c / norm), T::of(d / norm)),
        }
    }
}
