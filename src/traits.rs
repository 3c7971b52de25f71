use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that can be negated.
///
/// Unlike [`ops::Neg`], this is also implemented for unsigned integers. All integer types negate
/// with two's-complement wrapping (see [`i32::wrapping_neg`]), so `1u8.negate()` is `255` and
/// `i32::MIN.negate()` is `i32::MIN`. [`f32`] and [`f64`] simply flip their sign.
pub trait Negate {
    /// Returns `-self`, wrapping around for integers.
    fn negate(self) -> Self;
}

/// Subtraction that clamps to the bounds of the type instead of overflowing.
///
/// Integers forward to their inherent `saturating_sub` (so `2u8.saturating_sub(5)` is `0`), floats
/// subtract normally.
pub trait SaturatingSub {
    /// Returns `self - other`, clamped to the range of `Self`.
    fn saturating_sub(self, other: Self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations and ordering.
///
/// This is the bound used by every type in this crate. It is implemented for all built-in integer
/// types as well as [`f32`] and [`f64`].
///
/// Arithmetic errors are whatever the underlying type makes of them: integer division by zero
/// panics, integer overflow panics in debug builds and wraps in release builds, and floating-point
/// operations produce infinities or NaN.
pub trait Number:
    Zero
    + One
    + Negate
    + SaturatingSub
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + Negate
        + SaturatingSub
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialOrd
        + Copy
{
}

/// Explicit numeric conversion from `U` to `Self`.
///
/// This behaves exactly like an `as` cast: floats are truncated towards zero and saturate at the
/// bounds of integer types (NaN becomes 0), and integers are truncated or sign-extended.
pub trait CastFrom<U> {
    /// Converts `value` to `Self`.
    fn cast_from(value: U) -> Self;
}

/// The reciprocal of [`CastFrom`], implemented automatically.
pub trait CastInto<T> {
    /// Converts `self` to `T`, see [`CastFrom::cast_from`].
    fn cast_into(self) -> T;
}

impl<T, U> CastInto<T> for U
where
    T: CastFrom<U>,
{
    #[inline]
    fn cast_into(self) -> T {
        T::cast_from(self)
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Negate for $types {
                #[inline]
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }
            }

            impl SaturatingSub for $types {
                #[inline]
                fn saturating_sub(self, other: Self) -> Self {
                    <$types>::saturating_sub(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Negate for $types {
                #[inline]
                fn negate(self) -> Self {
                    -self
                }
            }

            impl SaturatingSub for $types {
                #[inline]
                fn saturating_sub(self, other: Self) -> Self {
                    self - other
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! cast_impls {
    (@dst [$($dst:ty),+] $src:tt) => {
        $(
            cast_impls!(@src $dst $src);
        )+
    };
    (@src $dst:ty [$($src:ty),+]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )+
    };
    ($($types:ty),+) => {
        cast_impls!(@dst [$($types),+] [$($types),+]);
    };
}
cast_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
