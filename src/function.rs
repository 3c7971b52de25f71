use std::{any, fmt, sync::Arc};

use crate::{vec2, CastFrom, Dimension, Number, Vector};

mod ops;

/// A function `y = f(x)` on the cartesian plane, mapping one `x` input to one `y` output.
///
/// Functions are immutable: every combinator returns a new [`Function`] and leaves its operands
/// untouched. Cloning a [`Function`] is cheap, as the underlying transform is shared. Functions are
/// [`Send`] and [`Sync`], so they can be evaluated from multiple threads at once.
///
/// # Examples
///
/// ```
/// # use cart::*;
/// let f = Function::new(|x: f64| x * x);
/// let g = Function::constant(1.0);
///
/// // h(x) = 2 * (x^2 + 1)
/// let h = f.add(&g).mul_const(2.0);
/// assert_eq!(h.eval(3.0), 20.0);
///
/// // f(h(x)) = (2 * (x^2 + 1))^2
/// assert_eq!(f.of(&h).eval(1.0), 16.0);
/// ```
///
/// # Errors
///
/// Evaluation fails exactly when the wrapped transform does. In particular, [`Function::div`] and
/// [`Function::div_const`] inherit the division semantics of `T`: integer division by zero panics,
/// while floats produce infinities or NaN.
pub struct Function<T> {
    f: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Clone for Function<T> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<T> Function<T>
where
    T: Number + Send + Sync + 'static,
{
    /// Creates the function `n(x) = f(x)`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Creates the constant function `n(x) = c`.
    pub fn constant(c: T) -> Self {
        Self::new(move |_| c)
    }

    /// Creates the identity function `n(x) = x`.
    pub fn identity() -> Self {
        Self::new(|x| x)
    }

    /// Converts a function over `U` into a function over `T`.
    ///
    /// The input is converted to `U` before invoking `f`, and the result converted back to `T`.
    /// Both conversions behave like `as` casts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let half = Function::new(|x: f64| x / 2.0);
    /// let half = Function::<i32>::convert_from(&half);
    /// assert_eq!(half.eval(5), 2);
    /// assert_eq!(half.eval(-5), -2);
    /// ```
    pub fn convert_from<U>(f: &Function<U>) -> Self
    where
        U: Number + Send + Sync + 'static + CastFrom<T>,
        T: CastFrom<U>,
    {
        let f = f.clone();
        Self::new(move |x| T::cast_from(f.eval(U::cast_from(x))))
    }

    /// Evaluates the function at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        (self.f)(x)
    }

    /// Returns a closure that evaluates this function.
    ///
    /// This allows passing a [`Function`] wherever a closure is expected, for example to
    /// [`Vector::apply`].
    pub fn as_fn(&self) -> impl Fn(T) -> T + '_ {
        move |x: T| self.eval(x)
    }

    /// Evaluates the function at each of the given inputs, yielding the points `(x, f(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// let f = Function::new(|x: i32| 2 * x);
    /// let points: Vec<_> = f.sample(0..3).collect();
    /// assert_eq!(points, [vec2(0, 0), vec2(1, 2), vec2(2, 4)]);
    /// ```
    pub fn sample<'a, I>(&'a self, inputs: I) -> impl Iterator<Item = Vector<T>> + 'a
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        inputs.into_iter().map(move |x| vec2(x, self.eval(x)))
    }

    fn combine(&self, g: &Self, op: fn(T, T) -> T) -> Self {
        let (f, g) = (self.clone(), g.clone());
        Self::new(move |x| op(f.eval(x), g.eval(x)))
    }

    fn combine_const(&self, c: T, op: fn(T, T) -> T) -> Self {
        let f = self.clone();
        Self::new(move |x| op(f.eval(x), c))
    }

    /// Returns the function `n(x) = f(x) + g(x)`.
    pub fn add(&self, g: &Self) -> Self {
        self.combine(g, |a, b| a + b)
    }

    /// Returns the function `n(x) = f(x) + c`.
    pub fn add_const(&self, c: T) -> Self {
        self.combine_const(c, |a, b| a + b)
    }

    /// Returns the function `n(x) = f(x) - g(x)`.
    pub fn sub(&self, g: &Self) -> Self {
        self.combine(g, |a, b| a - b)
    }

    /// Returns the function `n(x) = f(x) - c`.
    pub fn sub_const(&self, c: T) -> Self {
        self.combine_const(c, |a, b| a - b)
    }

    /// Returns the function `n(x) = f(x) * g(x)`.
    pub fn mul(&self, g: &Self) -> Self {
        self.combine(g, |a, b| a * b)
    }

    /// Returns the function `n(x) = f(x) * c`.
    pub fn mul_const(&self, c: T) -> Self {
        self.combine_const(c, |a, b| a * b)
    }

    /// Returns the function `n(x) = f(x) / g(x)`.
    ///
    /// Inputs where `g(x)` is zero are not guarded against.
    pub fn div(&self, g: &Self) -> Self {
        self.combine(g, |a, b| a / b)
    }

    /// Returns the function `n(x) = f(x) / c`.
    pub fn div_const(&self, c: T) -> Self {
        self.combine_const(c, |a, b| a / b)
    }

    /// Returns the composition `n(x) = f(g(x))`.
    pub fn of(&self, g: &Self) -> Self {
        let (f, g) = (self.clone(), g.clone());
        Self::new(move |x| f.eval(g.eval(x)))
    }

    /// Reflects the function over the given axis.
    ///
    /// See [`Function::reflect_x`] and [`Function::reflect_y`].
    pub fn reflect(&self, axis: Dimension) -> Self {
        match axis {
            Dimension::X => self.reflect_x(),
            Dimension::Y => self.reflect_y(),
        }
    }

    /// Reflects the function over the X axis, returning `n(x) = -f(x)`.
    pub fn reflect_x(&self) -> Self {
        let f = self.clone();
        Self::new(move |x| f.eval(x).negate())
    }

    /// Reflects the function over the Y axis, returning `n(x) = f(-x)`.
    pub fn reflect_y(&self) -> Self {
        let f = self.clone();
        Self::new(move |x: T| f.eval(x.negate()))
    }
}

impl<T, F> From<F> for Function<T>
where
    T: Number + Send + Sync + 'static,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Prints an opaque description of the function, not its formula.
impl<T> fmt::Display for Function<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function<{}>", any::type_name::<T>())
    }
}

impl<T> fmt::Debug for Function<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
