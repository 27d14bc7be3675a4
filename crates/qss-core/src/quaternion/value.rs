use std::ops::{Add, Mul, Neg, Sub};

use crate::sample::Sample;

/// A quaternion `a + bi + cj + dk`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: Sample> Quaternion<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Pure-imaginary quaternion `bi + cj + dk`.
    pub fn pure(b: T, c: T, d: T) -> Self {
        Self::new(T::zero(), b, c, d)
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn from_array(q: [T; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    pub fn to_array(self) -> [T; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    pub fn squared_magnitude(self) -> T {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Largest absolute component, and the magnitude divided by it.
    ///
    /// Dividing first keeps the squares clear of underflow and overflow.
    fn scaled_norm(self) -> (T, T) {
        let parts = self.to_array();
        let max = parts
            .iter()
            .fold(T::zero(), |m, &v| if v.abs() > m { v.abs() } else { m });
        if max > T::zero() {
            let sum = parts.iter().fold(T::zero(), |acc, &v| {
                let r = v / max;
                acc + r * r
            });
            (max, sum.sqrt())
        } else {
            (T::zero(), T::zero())
        }
    }

    pub fn magnitude(self) -> T {
        let (max, norm) = self.scaled_norm();
        max * norm
    }

    /// Unit quaternion in the same direction, or zero when no component is
    /// non-zero or any component is not finite.
    pub fn signum(self) -> Self {
        let (max, norm) = self.scaled_norm();
        if max > T::zero() && norm.is_finite() {
            let scale = |v: T| v / max / norm;
            Self::new(scale(self.a), scale(self.b), scale(self.c), scale(self.d))
        } else {
            Self::zero()
        }
    }

    pub fn scale(self, factor: T) -> Self {
        Self::new(self.a * factor, self.b * factor, self.c * factor, self.d * factor)
    }
}

/// Hamilton product of `(a1, b1, c1, d1)` and `(a2, b2, c2, d2)`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn hamilton_product<T: Sample>(
    a1: T,
    b1: T,
    c1: T,
    d1: T,
    a2: T,
    b2: T,
    c2: T,
    d2: T,
) -> (T, T, T, T) {
    (
        a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
        a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
        a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
        a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
    )
}

/// Hamilton product of two pure quaternions `(0, b1, c1, d1)` and `(0, b2, c2, d2)`.
///
/// The real part of the result is generally non-zero.
#[inline(always)]
pub fn hamilton_product_imaginary<T: Sample>(
    b1: T,
    c1: T,
    d1: T,
    b2: T,
    c2: T,
    d2: T,
) -> (T, T, T, T) {
    (
        -(b1 * b2) - c1 * c2 - d1 * d2,
        c1 * d2 - d1 * c2,
        d1 * b2 - b1 * d2,
        b1 * c2 - c1 * b2,
    )
}

/// Hamilton product; `p * q != q * p` in general.
impl<T: Sample> Mul for Quaternion<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b, c, d) = hamilton_product(
            self.a, self.b, self.c, self.d, rhs.a, rhs.b, rhs.c, rhs.d,
        );
        Self { a, b, c, d }
    }
}

impl<T: Sample> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c, self.d + rhs.d)
    }
}

impl<T: Sample> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a - rhs.a, self.b - rhs.b, self.c - rhs.c, self.d - rhs.d)
    }
}

impl<T: Sample> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}
