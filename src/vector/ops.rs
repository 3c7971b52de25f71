//! Implementations of `std::ops` and the `approx` comparison traits.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, Neg, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Dimension, Number};

use super::Vector;

impl<T> Index<Dimension> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, dim: Dimension) -> &Self::Output {
        match dim {
            Dimension::X => &self.x,
            Dimension::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Dimension> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, dim: Dimension) -> &mut Self::Output {
        match dim {
            Dimension::X => &mut self.x,
            Dimension::Y => &mut self.y,
        }
    }
}

/// Element-wise negation.
impl<T: Number> Neg for Vector<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        *self.negate()
    }
}

// The assigning operators forward to the in-place methods, so `v += w` and `v.add_vector(&w)` are
// interchangeable. Non-assigning `Add`, `Sub` etc. are left out: `v.add(..)` would then resolve
// to `Add::add` instead of the chaining methods as soon as the trait is imported.

/// Element-wise addition.
impl<T: Number> AddAssign<Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: Vector<T>) {
        self.add_vector(&rhs);
    }
}

/// Adds a scalar to both components.
impl<T: Number> AddAssign<T> for Vector<T> {
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar(rhs);
    }
}

/// Element-wise subtraction.
impl<T: Number> SubAssign<Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: Vector<T>) {
        self.sub_vector(&rhs);
    }
}

/// Subtracts a scalar from both components.
impl<T: Number> SubAssign<T> for Vector<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_scalar(rhs);
    }
}

/// Element-wise multiplication.
impl<T: Number> MulAssign<Vector<T>> for Vector<T> {
    fn mul_assign(&mut self, rhs: Vector<T>) {
        self.mul_vector(&rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_scalar(rhs);
    }
}

/// Element-wise division.
impl<T: Number> DivAssign<Vector<T>> for Vector<T> {
    fn div_assign(&mut self, rhs: Vector<T>) {
        self.div_vector(&rhs);
    }
}

/// Vector-Scalar division (scaling).
impl<T: Number> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        self.div_scalar(rhs);
    }
}

impl<T> AbsDiffEq for Vector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Vector<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
