use std::fmt;

use crate::{CartError, CastFrom, Dimension, Number, One, Zero};

mod ops;

/// Short alias for [`Vector`].
pub type Vec2<T> = Vector<T>;
/// A [`Vector`] with [`f32`] components.
pub type Vec2f = Vector<f32>;

/// A point or displacement in the 2D cartesian plane, storing components of type `T`.
///
/// # Construction
///
/// - [`Vector::new`] and the freestanding [`vec2`] function create a vector from both components.
/// - [`Vector::splat`] copies a single value into both components.
/// - [`Vector::convert_from`] and [`Vector::cast`] convert between numeric types like `as` does.
/// - [`Vector::ZERO`], [`Vector::X`] and [`Vector::Y`] are the origin and the unit vectors.
/// - Vectors can be created from `[T; 2]` arrays and `(T, T)` tuples via [`From`].
///
/// # Mutation
///
/// The arithmetic and geometric operations modify the vector in place and return `&mut Self`, so
/// they can be chained:
///
/// ```
/// # use cart::*;
/// let mut v = vec2(1, 2);
/// v.add_vector(&vec2(3, 4)).mul_scalar(2).invert();
/// assert_eq!(v, vec2(12, 8));
/// ```
///
/// Use [`Clone`]/[`Copy`] to keep the original around. The `*Assign` operator traits are
/// implemented in terms of the same in-place operations, and [`Neg`][std::ops::Neg] returns a
/// negated copy.
///
/// # Element Access
///
/// The components are public fields. They can also be addressed by [`Dimension`], either through
/// [`Vector::dim`] and [`Vector::set_dim`] or by indexing (`v[Dimension::X]`), or by the name of
/// the dimension via [`Vector::get_by_name`] and [`Vector::set_by_name`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector<T> {}

impl<T: Zero> Vector<T> {
    /// A vector with both components set to 0.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };
}

impl<T: Zero + One> Vector<T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self {
        x: T::ONE,
        y: T::ZERO,
    };
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::ONE,
    };
}

impl<T> Vector<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// assert_eq!(Vector::splat(2), vec2(2, 2));
    /// ```
    #[inline]
    pub fn splat(s: T) -> Self
    where
        T: Copy,
    {
        Self { x: s, y: s }
    }

    /// Converts a vector with components of type `U`, converting each component like an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let v = Vector::<i32>::convert_from(vec2(1.9, -2.7));
    /// assert_eq!(v, vec2(1, -2));
    /// ```
    pub fn convert_from<U>(v: Vector<U>) -> Self
    where
        T: CastFrom<U>,
    {
        Self {
            x: T::cast_from(v.x),
            y: T::cast_from(v.y),
        }
    }

    /// Converts this vector to one with components of type `U`, like an `as` cast.
    ///
    /// This is the by-value counterpart of [`Vector::convert_from`].
    pub fn cast<U>(self) -> Vector<U>
    where
        U: CastFrom<T>,
    {
        Vector::convert_from(self)
    }

    /// Applies a closure to both components, returning a new vector.
    ///
    /// Also see [`Vector::apply`] for the in-place version.
    pub fn map<U, F>(self, mut f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Converts this vector into a `[x, y]` array.
    #[inline]
    pub fn into_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Returns the component addressed by `dim`.
    #[inline]
    pub fn dim(&self, dim: Dimension) -> T
    where
        T: Copy,
    {
        match dim {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }

    /// Sets the component addressed by `dim` to `value`.
    #[inline]
    pub fn set_dim(&mut self, dim: Dimension, value: T) -> &mut Self {
        match dim {
            Dimension::X => self.x = value,
            Dimension::Y => self.y = value,
        }
        self
    }

    /// Returns the component named by `name` (`"x"` or `"y"`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::InvalidDimensionName`] if `name` does not name a dimension.
    pub fn get_by_name(&self, name: &str) -> Result<T, CartError>
    where
        T: Copy,
    {
        Ok(self.dim(Dimension::from_name(name)?))
    }

    /// Sets the component named by `name` (`"x"` or `"y"`, case-insensitive) to `value`.
    ///
    /// # Errors
    ///
    /// Fails with [`CartError::InvalidDimensionName`] if `name` does not name a dimension. The
    /// vector is left unchanged in that case.
    pub fn set_by_name(&mut self, name: &str, value: T) -> Result<&mut Self, CartError> {
        let dim = Dimension::from_name(name)?;
        Ok(self.set_dim(dim, value))
    }

    /// Overwrites both components with those of `other`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self
    where
        T: Copy,
    {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// Sets both components.
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets both components to `s`.
    pub fn set_scalar(&mut self, s: T) -> &mut Self
    where
        T: Copy,
    {
        self.set(s, s)
    }

    /// Swaps the X and Y components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let mut v = vec2(1, 2);
    /// v.invert();
    /// assert_eq!(v, vec2(2, 1));
    /// ```
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.x, &mut self.y);
        self
    }

    /// Replaces both components with the result of calling `f` on them.
    ///
    /// A [`Function`][crate::Function] can be applied via [`Function::as_fn`][crate::Function::as_fn].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let square = Function::new(|x: i32| x * x);
    /// let mut v = vec2(3, -4);
    /// v.apply(square.as_fn());
    /// assert_eq!(v, vec2(9, 16));
    /// ```
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where
        T: Copy,
        F: FnMut(T) -> T,
    {
        self.x = f(self.x);
        self.y = f(self.y);
        self
    }
}

impl<T: Number> Vector<T> {
    /// Sets both components to 0.
    pub fn zero(&mut self) -> &mut Self {
        self.set_scalar(T::ZERO)
    }

    /// Returns whether both components are equal to 0.
    pub fn is_zero(&self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO
    }

    /// Element-wise addition of `other`.
    pub fn add_vector(&mut self, other: &Self) -> &mut Self {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self
    }

    /// Adds `s` to both components.
    pub fn add_scalar(&mut self, s: T) -> &mut Self {
        self.x = self.x + s;
        self.y = self.y + s;
        self
    }

    /// Element-wise subtraction of `other`.
    pub fn sub_vector(&mut self, other: &Self) -> &mut Self {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self
    }

    /// Subtracts `s` from both components.
    pub fn sub_scalar(&mut self, s: T) -> &mut Self {
        self.x = self.x - s;
        self.y = self.y - s;
        self
    }

    /// Element-wise multiplication with `other`.
    ///
    /// This is *not* a dot product: each component is multiplied with its counterpart.
    pub fn mul_vector(&mut self, other: &Self) -> &mut Self {
        self.x = self.x * other.x;
        self.y = self.y * other.y;
        self
    }

    /// Multiplies both components with `s`.
    pub fn mul_scalar(&mut self, s: T) -> &mut Self {
        self.x = self.x * s;
        self.y = self.y * s;
        self
    }

    /// Element-wise division by `other`.
    ///
    /// Division by a zero component follows the semantics of `T`: integers panic, floats produce
    /// an infinity or NaN.
    pub fn div_vector(&mut self, other: &Self) -> &mut Self {
        self.x = self.x / other.x;
        self.y = self.y / other.y;
        self
    }

    /// Divides both components by `s`.
    pub fn div_scalar(&mut self, s: T) -> &mut Self {
        self.x = self.x / s;
        self.y = self.y / s;
        self
    }

    /// Element-wise minimum of `self` and `other`.
    ///
    /// A component is only replaced if it compares greater than its counterpart, so a NaN in
    /// either vector leaves the component of `self` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let mut v = vec2(1, 5);
    /// v.min(&vec2(3, 2));
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn min(&mut self, other: &Self) -> &mut Self {
        self.x = min(self.x, other.x);
        self.y = min(self.y, other.y);
        self
    }

    /// Limits both components to at most `s`.
    pub fn min_scalar(&mut self, s: T) -> &mut Self {
        self.min(&Self::splat(s))
    }

    /// Element-wise maximum of `self` and `other`.
    ///
    /// A component is only replaced if it compares less than its counterpart, so a NaN in either
    /// vector leaves the component of `self` untouched.
    pub fn max(&mut self, other: &Self) -> &mut Self {
        self.x = max(self.x, other.x);
        self.y = max(self.y, other.y);
        self
    }

    /// Raises both components to at least `s`.
    pub fn max_scalar(&mut self, s: T) -> &mut Self {
        self.max(&Self::splat(s))
    }

    /// Element-wise range clamp of `self` between `min` and `max`.
    ///
    /// This is [`Vector::max`] with `min` followed by [`Vector::min`] with `max`. The bounds are
    /// not checked: if a component of `min` exceeds the one of `max`, that component ends up
    /// equal to the one of `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let mut v = vec2(-3.0, 7.5);
    /// v.clamp(&vec2(0.0, 0.0), &vec2(5.0, 5.0));
    /// assert_eq!(v, vec2(0.0, 5.0));
    /// ```
    pub fn clamp(&mut self, min: &Self, max: &Self) -> &mut Self {
        self.max(min).min(max)
    }

    /// Clamps both components to the range `[min, max]`.
    pub fn clamp_scalar(&mut self, min: T, max: T) -> &mut Self {
        self.max_scalar(min).min_scalar(max)
    }

    /// Negates both components.
    ///
    /// Unsigned components wrap around (see [`Negate`][crate::Negate]).
    pub fn negate(&mut self) -> &mut Self {
        self.x = self.x.negate();
        self.y = self.y.negate();
        self
    }

    /// Returns whether `other` lies within `tolerance` of `self` in both dimensions.
    ///
    /// Each component of `other` has to lie strictly inside the open interval
    /// `(component - tolerance, component + tolerance)` around the matching component of `self`.
    /// Values exactly `tolerance` apart are *not* considered equal, and any comparison involving
    /// NaN fails.
    ///
    /// Also see the [`approx`] trait impls for closed-interval comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let origin = vec2(0.0, 0.0);
    /// assert!(origin.almost_equals(&vec2(0.999, 0.999), 1.0));
    /// assert!(!origin.almost_equals(&vec2(1.0, 1.0), 1.0));
    /// ```
    pub fn almost_equals(&self, other: &Self, tolerance: T) -> bool {
        within(self.x, other.x, tolerance) && within(self.y, other.y, tolerance)
    }
}

fn min<T: PartialOrd>(current: T, other: T) -> T {
    if current > other {
        other
    } else {
        current
    }
}

fn max<T: PartialOrd>(current: T, other: T) -> T {
    if current < other {
        other
    } else {
        current
    }
}

fn within<T: Number>(center: T, value: T, tolerance: T) -> bool {
    // Compare the distance instead of `center ± tolerance`, which can overflow for integers. A
    // saturated distance is never below `tolerance`. NaN fails both comparisons.
    if value >= center {
        value.saturating_sub(center) < tolerance
    } else {
        center.saturating_sub(value) < tolerance
    }
}

impl<T> From<[T; 2]> for Vector<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector<T>> for [T; 2] {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.into_array()
    }
}

impl<T> From<(T, T)> for Vector<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector<T>> for (T, T) {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        (value.x, value.y)
    }
}

impl<T> fmt::Debug for Vector<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("").field(&self.x).field(&self.y).finish()
    }
}

/// Formats the vector as `(x, y)`, using the [`Display`][fmt::Display] impl of the components.
impl<T> fmt::Display for Vector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Constructs a [`Vector`] from its two components.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T> {
    Vector { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        assert_eq!(Vector::new(1, 2), vec2(1, 2));
        assert_eq!(Vector::splat(7u8), vec2(7, 7));
        assert_eq!(Vector::<f32>::ZERO, vec2(0.0, 0.0));
        assert_eq!(Vec2f::X, vec2(1.0, 0.0));
        assert_eq!(Vector::<i64>::Y, vec2(0, 1));
        assert_eq!(Vector::<i32>::default(), Vector::ZERO);
        assert_eq!(Vector::from([3, 4]), vec2(3, 4));
        assert_eq!(Vector::from((3, 4)), vec2(3, 4));
        assert_eq!(<[i32; 2]>::from(vec2(5, 6)), [5, 6]);
        assert_eq!(<(i32, i32)>::from(vec2(5, 6)), (5, 6));
    }

    #[test]
    fn convert() {
        assert_eq!(Vector::<i32>::convert_from(vec2(1.9f64, -1.9)), vec2(1, -1));
        assert_eq!(Vector::<u8>::convert_from(vec2(256i32, -1)), vec2(0, 255));
        assert_eq!(vec2(2u16, 3).cast::<f32>(), vec2(2.0, 3.0));
        assert_eq!(vec2(-4, 9).map(|c| c > 0), vec2(false, true));
    }

    #[test]
    fn access() {
        let mut v = vec2(0, 1);
        assert_eq!(v.dim(Dimension::X), 0);
        assert_eq!(v.dim(Dimension::Y), 1);

        v.set_dim(Dimension::X, 777);
        assert_eq!(v, vec2(777, 1));
        assert_eq!(v.get_by_name("X"), Ok(777));
        assert_eq!(v.get_by_name("y"), Ok(1));

        v.set_by_name("Y", 9).unwrap().set_by_name("x", 8).unwrap();
        assert_eq!(v, vec2(8, 9));
    }

    #[test]
    fn access_by_bad_name() {
        let mut v = vec2(1.0, 2.0);
        assert_eq!(
            v.get_by_name("z"),
            Err(CartError::InvalidDimensionName {
                name: "z".to_string()
            })
        );
        assert!(v.set_by_name("xx", 5.0).is_err());
        assert_eq!(v, vec2(1.0, 2.0));
    }

    #[test]
    fn assignment() {
        let mut v = vec2(1, 2);
        v.set(3, 4);
        assert_eq!(v, vec2(3, 4));
        v.set_scalar(-1);
        assert_eq!(v, vec2(-1, -1));
        v.copy_from(&vec2(10, 20));
        assert_eq!(v, vec2(10, 20));
        assert!(!v.is_zero());
        v.zero();
        assert!(v.is_zero());
        assert_eq!(v, Vector::ZERO);
    }

    #[test]
    fn arithmetic() {
        let mut v = vec2(6, 8);
        v.add_vector(&vec2(1, 2));
        assert_eq!(v, vec2(7, 10));
        v.sub_vector(&vec2(2, 4));
        assert_eq!(v, vec2(5, 6));
        v.mul_vector(&vec2(2, 3));
        assert_eq!(v, vec2(10, 18));
        v.div_vector(&vec2(5, 9));
        assert_eq!(v, vec2(2, 2));

        v.add_scalar(4).mul_scalar(3).sub_scalar(2).div_scalar(4);
        assert_eq!(v, vec2(4, 4));
    }

    #[test]
    fn integer_division_truncates() {
        let mut v = vec2(7, -7);
        v.div_scalar(2);
        assert_eq!(v, vec2(3, -3));
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        vec2(1, 1).div_vector(&vec2(1, 0));
    }

    #[test]
    fn float_division_by_zero() {
        let mut v = vec2(1.0f64, 0.0);
        v.div_scalar(0.0);
        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
    }

    #[test]
    fn min_max() {
        let mut v = vec2(1, 5);
        v.min(&vec2(3, 2));
        assert_eq!(v, vec2(1, 2));
        v.max(&vec2(0, 4));
        assert_eq!(v, vec2(1, 4));
        v.min_scalar(3);
        assert_eq!(v, vec2(1, 3));
        v.max_scalar(2);
        assert_eq!(v, vec2(2, 3));
    }

    #[test]
    fn min_max_nan() {
        let mut v = vec2(f32::NAN, 1.0);
        v.min(&vec2(0.0, f32::NAN));
        assert!(v.x.is_nan());
        assert_eq!(v.y, 1.0);
        v.max_scalar(5.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 5.0);
    }

    #[test]
    fn clamp() {
        let min = vec2(0, 10);
        let max = vec2(5, 20);
        assert_eq!(*vec2(-3, 15).clamp(&min, &max), vec2(0, 15));
        assert_eq!(*vec2(9, 25).clamp(&min, &max), vec2(5, 20));
        assert_eq!(*vec2(2.5, -1.0).clamp_scalar(0.0, 1.0), vec2(1.0, 0.0));
    }

    #[test]
    fn clamp_inverted_bounds() {
        // `max` is applied last, so it wins.
        assert_eq!(*vec2(3, 3).clamp(&vec2(5, 5), &vec2(1, 1)), vec2(1, 1));
        assert_eq!(*vec2(-9, 9).clamp_scalar(4, 2), vec2(2, 2));
    }

    #[test]
    fn negate_invert() {
        assert_eq!(*vec2(1, -2).negate(), vec2(-1, 2));
        assert_eq!(*vec2(1u8, 0).negate(), vec2(255, 0));
        assert_eq!(*vec2(1, 2).invert(), vec2(2, 1));
        assert_eq!(*vec2(1.5, -2.5).negate().invert(), vec2(2.5, -1.5));
    }

    #[test]
    fn apply() {
        assert_eq!(*vec2(1, 2).apply(|c| c * 10), vec2(10, 20));
        let mut calls = 0;
        vec2(0.0, 0.0).apply(|c| {
            calls += 1;
            c
        });
        assert_eq!(calls, 2);
    }

    #[test]
    fn almost_equals() {
        let origin = vec2(0.0, 0.0);
        assert!(origin.almost_equals(&vec2(0.999, 0.999), 1.0));
        assert!(origin.almost_equals(&vec2(-0.999, 0.5), 1.0));
        assert!(!origin.almost_equals(&vec2(1.0, 1.0), 1.0));
        assert!(!origin.almost_equals(&vec2(-1.0, 0.0), 1.0));
        assert!(!origin.almost_equals(&vec2(0.0, 1.5), 1.0));
        assert!(!origin.almost_equals(&origin, 0.0));
        assert!(!origin.almost_equals(&vec2(f64::NAN, 0.0), 1.0));

        assert!(vec2(5, 5).almost_equals(&vec2(6, 4), 2));
        assert!(!vec2(5, 5).almost_equals(&vec2(7, 5), 2));
    }

    #[test]
    fn almost_equals_integer_bounds() {
        let origin = vec2(0u32, 0);
        assert!(!origin.almost_equals(&vec2(5, 5), 1));
        assert!(origin.almost_equals(&vec2(0, 0), 1));
        assert!(!origin.almost_equals(&vec2(1, 0), 1));
        assert!(vec2(5u32, 5).almost_equals(&vec2(4, 6), 2));
        assert!(!vec2(5u32, 5).almost_equals(&vec2(3, 5), 2));

        let max = vec2(i32::MAX, 0);
        assert!(max.almost_equals(&vec2(i32::MAX, 0), 1));
        assert!(max.almost_equals(&vec2(i32::MAX - 1, 1), 2));
        assert!(!max.almost_equals(&vec2(i32::MAX - 1, 0), 1));
        assert!(!vec2(i32::MIN, 0).almost_equals(&vec2(i32::MAX, 0), i32::MAX));
        assert!(!vec2(i32::MAX, 0).almost_equals(&vec2(i32::MIN, 0), i32::MAX));
        assert!(vec2(i8::MIN, i8::MIN).almost_equals(&vec2(i8::MIN, i8::MIN + 1), 2));
    }

    #[test]
    fn equality() {
        assert_eq!(vec2(1, 2), vec2(1, 2));
        assert_ne!(vec2(1, 2), vec2(2, 1));
        assert_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
        assert!(vec2(0.0, -0.0).is_zero());
    }

    #[test]
    fn fmt() {
        assert_eq!(vec2(1, 2).to_string(), "(1, 2)");
        assert_eq!(vec2(1.0, -2.5).to_string(), "(1, -2.5)");
        assert_eq!(format!("{:?}", vec2(1.0, -2.5)), "(1.0, -2.5)");
        assert_eq!(format!("{:?}", Vec2f::ZERO), "(0.0, 0.0)");
    }

    #[test]
    fn pod_cast() {
        let v = vec2(1.0f32, 2.0);
        let floats: &[f32; 2] = bytemuck::cast_ref(&v);
        assert_eq!(floats, &[1.0, 2.0]);
    }
}
