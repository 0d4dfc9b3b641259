//! Rectangular sections.

use crate::error::{Dimension, require_positive};
use crate::{FlexuralAxis, SectionResult, TwoDimensional};

/// An axis-aligned rectangular cross-section.
///
/// Width runs along the local X axis and depth along the local Y axis.
/// Both are strictly positive for the lifetime of the value.
///
/// # Example
///
/// ```
/// use section_types::{FlexuralAxis, Rectangle, TwoDimensional};
///
/// let rect = Rectangle::new(4.0, 6.0).unwrap();
/// assert!((rect.area() - 24.0).abs() < 1e-10);
/// assert!((rect.perimeter() - 20.0).abs() < 1e-10);
/// assert!((rect.second_moment_of_area(FlexuralAxis::XX) - 72.0).abs() < 1e-10);
/// assert!((rect.second_moment_of_area(FlexuralAxis::YY) - 32.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    depth: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and depth.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::InvalidGeometry`](crate::SectionError::InvalidGeometry)
    /// if `width` or `depth` is not strictly positive. Width is checked
    /// first.
    pub fn new(width: f64, depth: f64) -> SectionResult<Self> {
        let width = require_positive(Dimension::Width, width)?;
        let depth = require_positive(Dimension::Depth, depth)?;
        tracing::trace!(width, depth, "rectangle section");
        Ok(Self { width, depth })
    }

    /// Create a square with the given side length.
    ///
    /// # Errors
    ///
    /// Returns an error reporting the width if `side` is not strictly
    /// positive.
    pub fn square(side: f64) -> SectionResult<Self> {
        Self::new(side, side)
    }

    /// Width, parallel to the local X axis.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Depth, parallel to the local Y axis.
    #[must_use]
    pub const fn depth(&self) -> f64 {
        self.depth
    }
}

impl TwoDimensional for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.depth
    }

    fn perimeter(&self) -> f64 {
        2.0 * self.width + 2.0 * self.depth
    }

    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.width * self.depth.powi(3) / 12.0,
            FlexuralAxis::YY => self.depth * self.width.powi(3) / 12.0,
        }
    }
}
