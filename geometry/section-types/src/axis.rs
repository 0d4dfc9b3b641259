//! Flexural axes of a cross-section.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the two orthogonal in-plane axes about which a section bends.
///
/// The label names the axis the section rotates about. For a
/// [`Rectangle`](crate::Rectangle), bending about `X-X` cubes the depth and
/// bending about `Y-Y` cubes the width.
///
/// # Example
///
/// ```
/// use section_types::FlexuralAxis;
///
/// let axis: FlexuralAxis = "X-X".parse().unwrap();
/// assert_eq!(axis, FlexuralAxis::XX);
/// assert_eq!(axis.orthogonal(), FlexuralAxis::YY);
/// assert_eq!(axis.to_string(), "X-X");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexuralAxis {
    /// Axis through the centroid parallel to the local X (width) direction.
    XX,
    /// Axis through the centroid parallel to the local Y (depth) direction.
    YY,
}

impl FlexuralAxis {
    /// Both axes, `X-X` first.
    pub const ALL: [Self; 2] = [Self::XX, Self::YY];

    /// The perpendicular in-plane axis.
    #[must_use]
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::XX => Self::YY,
            Self::YY => Self::XX,
        }
    }

    /// Conventional engineering label (`"X-X"` or `"Y-Y"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::XX => "X-X",
            Self::YY => "Y-Y",
        }
    }
}

/// Text that does not name a flexural axis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown flexural axis: {0:?} (expected \"X-X\" or \"Y-Y\")")]
pub struct ParseAxisError(String);

impl ParseAxisError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlexuralAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlexuralAxis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x-x" | "xx" | "x" => Ok(Self::XX),
            "y-y" | "yy" | "y" => Ok(Self::YY),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(FlexuralAxis::XX.label(), "X-X");
        assert_eq!(FlexuralAxis::YY.to_string(), "Y-Y");
    }

    #[test]
    fn test_orthogonal_is_involution() {
        for axis in FlexuralAxis::ALL {
            assert_ne!(axis.orthogonal(), axis);
            assert_eq!(axis.orthogonal().orthogonal(), axis);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("X-X".parse::<FlexuralAxis>(), Ok(FlexuralAxis::XX));
        assert_eq!("y-y".parse::<FlexuralAxis>(), Ok(FlexuralAxis::YY));
        assert_eq!(" yy ".parse::<FlexuralAxis>(), Ok(FlexuralAxis::YY));
        assert_eq!("x".parse::<FlexuralAxis>(), Ok(FlexuralAxis::XX));

        let err = "Z-Z".parse::<FlexuralAxis>().unwrap_err();
        assert_eq!(err.input(), "Z-Z");
        assert!(err.to_string().contains("Z-Z"));
    }

    #[test]
    fn test_display_parse_agree() {
        for axis in FlexuralAxis::ALL {
            assert_eq!(axis.to_string().parse::<FlexuralAxis>(), Ok(axis));
        }
    }
}
