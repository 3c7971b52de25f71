//! Operator overloads for `&Function`.
//!
//! These are only implemented for references, so that method calls like `f.add(&g)` always
//! resolve to the inherent combinators, even when `std::ops::Add` is in scope.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Number;

use super::Function;

macro_rules! binary_ops {
    ($($trait:ident :: $method:ident => $func:ident, $func_const:ident;)+) => {
        $(
            impl<'a, T> $trait<&'a Function<T>> for &'a Function<T>
            where
                T: Number + Send + Sync + 'static,
            {
                type Output = Function<T>;

                fn $method(self, rhs: &'a Function<T>) -> Function<T> {
                    self.$func(rhs)
                }
            }

            impl<T> $trait<T> for &Function<T>
            where
                T: Number + Send + Sync + 'static,
            {
                type Output = Function<T>;

                fn $method(self, rhs: T) -> Function<T> {
                    self.$func_const(rhs)
                }
            }
        )+
    };
}

binary_ops! {
    Add::add => add, add_const;
    Sub::sub => sub, sub_const;
    Mul::mul => mul, mul_const;
    Div::div => div, div_const;
}

/// Reflection over the X axis (see [`Function::reflect_x`]).
impl<T> Neg for &Function<T>
where
    T: Number + Send + Sync + 'static,
{
    type Output = Function<T>;

    fn neg(self) -> Function<T> {
        self.reflect_x()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Add;

    use crate::Function;

    #[test]
    fn operators() {
        let f = Function::new(|x: i32| x * x);
        let g = Function::new(|x: i32| x + 1);

        assert_eq!((&f + &g).eval(2), 7);
        assert_eq!((&f - &g).eval(2), 1);
        assert_eq!((&f * &g).eval(2), 12);
        assert_eq!((&f / &g).eval(2), 1);
        assert_eq!((-&f).eval(3), -9);

        assert_eq!((&f + 1).eval(3), 10);
        assert_eq!((&f - 1).eval(3), 8);
        assert_eq!((&f * 2).eval(3), 18);
        assert_eq!((&f / 2).eval(3), 4);
    }

    #[test]
    fn inherent_methods_win() {
        let f = Function::constant(1.5f32);
        // With `Add` in scope, this still calls `Function::add`.
        assert_eq!(f.add(&f).eval(0.0), 3.0);
        assert_eq!(Add::add(&f, 0.5).eval(0.0), 2.0);
    }
}
