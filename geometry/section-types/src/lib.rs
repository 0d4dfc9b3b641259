//! Section properties for planar structural cross-sections.
//!
//! This crate computes the geometric properties that bending and deflection
//! formulas consume:
//!
//! - [`Rectangle`] - Axis-aligned rectangle defined by width and depth
//! - [`Circle`] - Solid circle defined by its diameter
//!
//! # Core Traits
//!
//! Every shape implements [`TwoDimensional`], which provides:
//!
//! - **Area**: Enclosed area
//! - **Perimeter**: Boundary length
//! - **Second moment of area**: Bending resistance about a [`FlexuralAxis`]
//!
//! [`ThreeDimensional`] declares `volume` for solids. It has no implementors
//! in this crate.
//!
//! # Example
//!
//! ```
//! use section_types::{Circle, FlexuralAxis, Rectangle, SectionError, TwoDimensional};
//!
//! let beam = Rectangle::new(4.0, 6.0).unwrap();
//! assert!((beam.second_moment_of_area(FlexuralAxis::XX) - 72.0).abs() < 1e-10);
//!
//! let rod = Circle::new(10.0).unwrap();
//! let props = rod.section_properties();
//! assert_eq!(props.second_moment_xx, props.second_moment_yy);
//!
//! // Construction is the only step that can fail
//! let err = Rectangle::new(0.0, 5.0).unwrap_err();
//! assert!(matches!(err, SectionError::InvalidGeometry { .. }));
//! assert!(err.to_string().contains("width"));
//! ```
//!
//! # Coordinate System
//!
//! - X: width (left/right)
//! - Y: depth (up/down in the section plane)
//!
//! Axis labels name the axis the section rotates about, so `X-X` bending of
//! a rectangle cubes its depth.
//!
//! # Thread Safety
//!
//! Shapes are immutable `Copy` values and can be shared across threads
//! freely.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod circle;
mod error;
mod properties;
mod rectangle;
mod traits;

pub use axis::{FlexuralAxis, ParseAxisError};
pub use circle::Circle;
pub use error::{Dimension, SectionError, SectionResult};
pub use properties::SectionProperties;
pub use rectangle::Rectangle;
pub use traits::{ThreeDimensional, TwoDimensional};
