//! Error types.

use thiserror::Error;

/// Errors returned by fallible operations of this crate.
///
/// Arithmetic errors (eg. integer division by zero) are not represented here: they follow the
/// semantics of the numeric type in use. See [`Number`][crate::Number].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CartError {
    /// A string did not name a [`Dimension`][crate::Dimension].
    #[error("invalid dimension name {name:?}, expected \"x\" or \"y\"")]
    InvalidDimensionName {
        /// The rejected input.
        name: String,
    },
}
