//! Generic value types for 2d and 3d geometry: points (also used as vectors) and axis-aligned
//! rects, parameterized by the numeric [`Precision`] of their components.
//!
//! ```
//! use metron_types::cartesian::{Point2d, Point2i, Rect2d};
//!
//! let mut direction = Point2d::new(3.0, 4.0);
//! assert_eq!(direction.length(), 5.0);
//!
//! direction.normalize();
//! assert!((direction.x - 0.6).abs() < 1e-6);
//!
//! // Points of different precisions can be added and compared.
//! assert_eq!(Point2d::new(1.0, 2.0) + Point2i::new(1, 1), Point2i::new(2, 3));
//!
//! let rect = Rect2d::new(Point2d::new(0.0, 0.0), Point2d::new(5.0, 5.0));
//! assert_eq!(rect, Rect2d::new(Point2d::new(0.0, 0.0), Point2d::new(5.0, 5.0)));
//! ```
//!
//! All types expose static [reflection descriptors](reflect) for external tooling.

pub mod cartesian;
pub mod error;
pub mod hash;
mod impls;
pub mod precision;
pub mod reflect;

pub use cartesian::*;
pub use error::MetronTypesError;
pub use precision::Precision;
