//! Capability traits shared by all section shapes.
//!
//! New shapes slot in by implementing [`TwoDimensional`]; nothing else in
//! the crate needs to change.

use crate::{FlexuralAxis, SectionProperties};

/// A planar cross-section with computable section properties.
///
/// Downstream structural calculations (bending stress, deflection) consume
/// these three queries per shape. The trait is object safe, so mixed shape
/// collections can be held as `Box<dyn TwoDimensional>`.
///
/// # Implementors
///
/// - [`Rectangle`](crate::Rectangle)
/// - [`Circle`](crate::Circle)
///
/// # Example
///
/// ```
/// use section_types::{Circle, FlexuralAxis, Rectangle, TwoDimensional};
///
/// let shapes: Vec<Box<dyn TwoDimensional>> = vec![
///     Box::new(Rectangle::new(4.0, 6.0).unwrap()),
///     Box::new(Circle::new(10.0).unwrap()),
/// ];
///
/// let total_area: f64 = shapes.iter().map(|s| s.area()).sum();
/// assert!(total_area > 24.0);
///
/// let stiffest = shapes
///     .iter()
///     .map(|s| s.second_moment_of_area(FlexuralAxis::XX))
///     .fold(0.0, f64::max);
/// assert!(stiffest > 72.0);
/// ```
pub trait TwoDimensional {
    /// Enclosed area (length²).
    fn area(&self) -> f64;

    /// Length of the boundary.
    fn perimeter(&self) -> f64;

    /// Second moment of area about a centroidal flexural axis (length⁴).
    ///
    /// # Parameters
    ///
    /// - `axis`: The axis about which the section bends
    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64;

    /// Evaluate every section property at once.
    fn section_properties(&self) -> SectionProperties {
        SectionProperties {
            area: self.area(),
            perimeter: self.perimeter(),
            second_moment_xx: self.second_moment_of_area(FlexuralAxis::XX),
            second_moment_yy: self.second_moment_of_area(FlexuralAxis::YY),
        }
    }
}

/// A solid with a computable volume.
///
/// Reserved for solid-geometry shapes. No type in this crate implements it
/// yet.
pub trait ThreeDimensional {
    /// Enclosed volume (length³).
    fn volume(&self) -> f64;
}
