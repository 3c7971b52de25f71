//! 2D cartesian vectors and single-variable functions, generic over the numeric type.
//!
//! The crate provides three types:
//!
//! - [`Dimension`] selects the X or Y axis.
//! - [`Vector`] is a mutable point or displacement `(x, y)`. Its operations modify the vector in
//!   place and return `&mut Self` for chaining.
//! - [`Function`] is an immutable `y = f(x)` that can be combined with other functions or
//!   constants, composed, and reflected over either axis.
//!
//! All of them work with any type implementing [`Number`], which covers every built-in integer
//! type as well as [`f32`] and [`f64`]. Conversions between numeric types ([`Vector::convert_from`],
//! [`Function::convert_from`]) behave like `as` casts.
//!
//! # Errors
//!
//! The only fallible operations are the ones looking up a [`Dimension`] by name, which return
//! [`CartError::InvalidDimensionName`]. Arithmetic errors are not translated: they follow the
//! semantics of the numeric type, so integer division by zero panics while float division by zero
//! yields an infinity or NaN.
//!
//! # Logging
//!
//! The types in this crate never log. Applications can use [`init_logger!`] to set up the [`log`]
//! facade; the `RUST_LOG` environment variable overrides the default filter.

use log::LevelFilter;

mod dimension;
mod error;
mod function;
mod traits;
mod vector;

pub use dimension::*;
pub use error::*;
pub use function::*;
pub use traits::*;
pub use vector::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level, unless overridden via `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
