use std::{fmt, str::FromStr};

use crate::CartError;

/// One of the two axes of the cartesian plane.
///
/// Used to address the components of a [`Vector`][crate::Vector] and to select the axis of
/// [`Function::reflect`][crate::Function::reflect].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Dimension {
    /// Both dimensions, in component order.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Looks up a dimension by its case-insensitive name (`"x"` or `"y"`).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidDimensionName`] for any other input, including names with
    /// surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cart::*;
    /// assert_eq!(Dimension::from_name("X").unwrap(), Dimension::X);
    /// assert_eq!(Dimension::from_name("y").unwrap(), Dimension::Y);
    /// assert!(Dimension::from_name("z").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, CartError> {
        match name {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            _ => Err(CartError::InvalidDimensionName {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the lowercase name of this dimension.
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    /// Returns the index of the vector component this dimension addresses.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    /// Returns the perpendicular dimension.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl FromStr for Dimension {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
