//! Error types for section construction.

use std::fmt;

use thiserror::Error;

/// Result type alias for section operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// A named dimension of a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Rectangle width (parallel to the local X axis).
    Width,
    /// Rectangle depth (parallel to the local Y axis).
    Depth,
    /// Circle diameter.
    Diameter,
}

impl Dimension {
    /// Lower-case name of the dimension.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Depth => "depth",
            Self::Diameter => "diameter",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when constructing a section.
///
/// Construction is the only fallible step, and its only failure is a
/// dimension that is not strictly positive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SectionError {
    /// A dimension was zero, negative, or NaN.
    #[error("invalid geometry: {dimension} must be greater than 0, got {value}")]
    InvalidGeometry {
        /// The dimension that failed validation.
        dimension: Dimension,
        /// The rejected value.
        value: f64,
    },
}

impl SectionError {
    /// Create an invalid geometry error.
    #[must_use]
    pub const fn invalid_geometry(dimension: Dimension, value: f64) -> Self {
        Self::InvalidGeometry { dimension, value }
    }

    /// The dimension that failed validation.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::InvalidGeometry { dimension, .. } => *dimension,
        }
    }

    /// The rejected value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::InvalidGeometry { value, .. } => *value,
        }
    }
}

/// Check that `value` is strictly positive.
///
/// NaN fails the comparison and is rejected along with zero and negatives.
pub(crate) fn require_positive(dimension: Dimension, value: f64) -> SectionResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(%dimension, value, "rejecting non-positive dimension");
        Err(SectionError::invalid_geometry(dimension, value))
    }
}
