use std::f32::consts::FRAC_PI_2;

use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::ops::impl_point_ops;
use super::Point2;
use crate::error::MetronTypesError;
use crate::precision::{checked_cast, Precision};

/// A point in 3-dimensional cartesian coordinate space.
///
/// The same type is used both for positions and for displacements, see [`Vector3`].
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Point3<Num = f64> {
    /// X coordinate.
    pub x: Num,
    /// Y coordinate.
    pub y: Num,
    /// Z coordinate.
    pub z: Num,
}

/// Vector (displacement or direction) in 3-dimensional cartesian coordinate space.
pub type Vector3<Num = f64> = Point3<Num>;

impl<Num> Point3<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }

    /// Returns coordinates of the point as an array.
    pub fn coords(&self) -> [Num; 3]
    where
        Num: Copy,
    {
        [self.x, self.y, self.z]
    }
}

impl<Num: Precision> Point3<Num> {
    /// Converts the point into another precision, casting every component with `as` semantics.
    pub fn cast<Q: Precision>(&self) -> Point3<Q>
    where
        Num: AsPrimitive<Q>,
    {
        Point3 {
            x: AsPrimitive::<Q>::as_(self.x),
            y: AsPrimitive::<Q>::as_(self.y),
            z: AsPrimitive::<Q>::as_(self.z),
        }
    }

    /// Converts the point into another precision, failing if a component does not fit into it.
    pub fn try_cast<Q: Precision>(&self) -> Result<Point3<Q>, MetronTypesError> {
        Ok(Point3 {
            x: checked_cast(self.x)?,
            y: checked_cast(self.y)?,
            z: checked_cast(self.z)?,
        })
    }

    /// Drops the `z` coordinate.
    pub fn truncate(&self) -> Point2<Num> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance to the other point, computed in single precision.
    pub fn distance_to(&self, rhs: &Self) -> f32 {
        let dx = self.x.as_f32() - rhs.x.as_f32();
        let dy = self.y.as_f32() - rhs.y.as_f32();
        let dz = self.z.as_f32() - rhs.z.as_f32();
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Squared length of the vector. Can overflow for integer precisions.
    pub fn length_squared(&self) -> Num {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of the vector, computed in single precision.
    pub fn length(&self) -> f32 {
        self.length_squared().as_f32().sqrt()
    }

    /// Dot product of two vectors. See [`dot`](super::dot).
    pub fn dot(&self, rhs: &Self) -> Num {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product of two vectors. See [`cross`](super::cross).
    pub fn cross(&self, rhs: &Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Angle between two vectors in radians, in range `[0, PI]`.
    ///
    /// The result is NaN if either of the vectors has zero length.
    pub fn angle_to(&self, rhs: &Self) -> f32 {
        let dot = self.dot(rhs).as_f32();
        (dot / (self.length_squared().as_f32() * rhs.length_squared().as_f32()).sqrt()).acos()
    }

    /// Yaw in radians of the direction from `self` to `rhs`: `-atan2(dz, dx)`.
    pub fn yaw_to(&self, rhs: &Self) -> f32 {
        let dx = rhs.x.as_f32() - self.x.as_f32();
        let dz = rhs.z.as_f32() - self.z.as_f32();
        -dz.atan2(dx)
    }

    /// Pitch in radians of the direction from `self` to `rhs`:
    /// `PI / 2 - atan2(sqrt(dz * dz + dx * dx), dy)`.
    pub fn pitch_to(&self, rhs: &Self) -> f32 {
        let dx = rhs.x.as_f32() - self.x.as_f32();
        let dy = rhs.y.as_f32() - self.y.as_f32();
        let dz = rhs.z.as_f32() - self.z.as_f32();
        -(dz * dz + dx * dx).sqrt().atan2(dy) + FRAC_PI_2
    }

    /// Scales the vector in place to the length of 1. See [`Point3::normalize_to`].
    pub fn normalize(&mut self) {
        self.normalize_to(1.0);
    }

    /// Scales the vector in place so that its length becomes `desired_length`.
    ///
    /// A vector of zero length is left unchanged.
    pub fn normalize_to(&mut self, desired_length: f32) {
        let length = self.length();
        if length > 0.0 {
            let factor = desired_length / length;
            self.x = self.x.scale(factor);
            self.y = self.y.scale(factor);
            self.z = self.z.scale(factor);
        } else {
            log::trace!("Skipping normalization of zero length vector {:?}", self);
        }
    }
}

impl<Num> From<[Num; 3]> for Point3<Num> {
    fn from([x, y, z]: [Num; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<Num: Precision> From<Point2<Num>> for Point3<Num> {
    fn from(value: Point2<Num>) -> Self {
        value.extend()
    }
}

impl_point_ops!(Point3 { x => 0, y => 1, z => 2 });
