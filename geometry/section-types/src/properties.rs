//! Evaluated section properties.

use crate::FlexuralAxis;

/// Snapshot of every property of a section.
///
/// Produced by [`TwoDimensional::section_properties`](crate::TwoDimensional::section_properties).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProperties {
    /// Enclosed area.
    pub area: f64,
    /// Boundary length.
    pub perimeter: f64,
    /// Second moment of area about `X-X`.
    pub second_moment_xx: f64,
    /// Second moment of area about `Y-Y`.
    pub second_moment_yy: f64,
}

impl SectionProperties {
    /// Stored second moment of area about `axis`.
    #[must_use]
    pub const fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.second_moment_xx,
            FlexuralAxis::YY => self.second_moment_yy,
        }
    }
}
