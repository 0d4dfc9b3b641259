//! Circular sections.
//!
//! A solid disk is symmetric under rotation, so both flexural axes give the
//! same second moment of area.

use std::f64::consts::PI;

use crate::error::{Dimension, require_positive};
use crate::{FlexuralAxis, SectionResult, TwoDimensional};

/// A solid circular cross-section.
///
/// The radius is derived once at construction and always equals half the
/// diameter.
///
/// # Example
///
/// ```
/// use section_types::{Circle, FlexuralAxis, TwoDimensional};
/// use std::f64::consts::PI;
///
/// let circle = Circle::new(10.0).unwrap();
/// assert_eq!(circle.radius(), 5.0);
/// assert!((circle.area() - 25.0 * PI).abs() < 1e-10);
/// assert!((circle.perimeter() - 10.0 * PI).abs() < 1e-10);
/// assert_eq!(
///     circle.second_moment_of_area(FlexuralAxis::XX),
///     circle.second_moment_of_area(FlexuralAxis::YY),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    diameter: f64,
    radius: f64,
}

impl Circle {
    /// Create a circle from its diameter.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::InvalidGeometry`](crate::SectionError::InvalidGeometry)
    /// if `diameter` is not strictly positive.
    pub fn new(diameter: f64) -> SectionResult<Self> {
        let diameter = require_positive(Dimension::Diameter, diameter)?;
        tracing::trace!(diameter, "circle section");
        Ok(Self {
            diameter,
            radius: diameter / 2.0,
        })
    }

    /// Diameter.
    #[must_use]
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Radius (half the diameter).
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl TwoDimensional for Circle {
    fn area(&self) -> f64 {
        PI * self.diameter.powi(2) / 4.0
    }

    fn perimeter(&self) -> f64 {
        PI * self.diameter
    }

    // Axis has no effect for a disk.
    fn second_moment_of_area(&self, _axis: FlexuralAxis) -> f64 {
        PI * self.diameter.powi(4) / 64.0
    }
}
