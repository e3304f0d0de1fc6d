//! Points, vectors and rects in 2d and 3d cartesian coordinates.

mod ops;
mod point2;
mod point3;
mod products;
mod rect;

pub use point2::{Point2, Vector2};
pub use point3::{Point3, Vector3};
pub use products::{cross, dot};
pub use rect::{Rect2, Rect3};

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;
/// 2d point with `f32` coordinates.
pub type Point2f = Point2<f32>;
/// 2d point with `i32` coordinates.
pub type Point2i = Point2<i32>;
/// 2d point with `u32` coordinates.
pub type Point2ui = Point2<u32>;

/// 3d point with `f64` coordinates.
pub type Point3d = Point3<f64>;
/// 3d point with `f32` coordinates.
pub type Point3f = Point3<f32>;
/// 3d point with `i32` coordinates.
pub type Point3i = Point3<i32>;
/// 3d point with `u32` coordinates.
pub type Point3ui = Point3<u32>;

/// 2d vector with `f64` coordinates.
pub type Vector2d = Vector2<f64>;
/// 2d vector with `f32` coordinates.
pub type Vector2f = Vector2<f32>;
/// 2d vector with `i32` coordinates.
pub type Vector2i = Vector2<i32>;
/// 2d vector with `u32` coordinates.
pub type Vector2ui = Vector2<u32>;

/// 3d vector with `f64` coordinates.
pub type Vector3d = Vector3<f64>;
/// 3d vector with `f32` coordinates.
pub type Vector3f = Vector3<f32>;
/// 3d vector with `i32` coordinates.
pub type Vector3i = Vector3<i32>;
/// 3d vector with `u32` coordinates.
pub type Vector3ui = Vector3<u32>;

/// Rect with `f64` coordinates.
pub type Rect2d = Rect2<f64>;
/// Rect with `f32` coordinates.
pub type Rect2f = Rect2<f32>;
/// Rect with `i32` coordinates.
pub type Rect2i = Rect2<i32>;
/// Rect with `u32` coordinates.
pub type Rect2ui = Rect2<u32>;

/// Box with `f64` coordinates.
pub type Rect3d = Rect3<f64>;
/// Box with `f32` coordinates.
pub type Rect3f = Rect3<f32>;
/// Box with `i32` coordinates.
pub type Rect3i = Rect3<i32>;
/// Box with `u32` coordinates.
pub type Rect3ui = Rect3<u32>;
