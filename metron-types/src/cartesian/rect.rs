use approx::AbsDiffEq;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::{Point2, Point3};
use crate::precision::Precision;

/// Axis-aligned rectangle given by its `position` and `size`.
///
/// No constraint is put on the sign of the size, callers decide how to treat negative values.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Rect2<Num = f64> {
    /// Position of the rectangle.
    pub position: Point2<Num>,
    /// Size of the rectangle along each axis.
    pub size: Point2<Num>,
}

/// Axis-aligned box given by its `position` and `size`.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Rect3<Num = f64> {
    /// Position of the box.
    pub position: Point3<Num>,
    /// Size of the box along each axis.
    pub size: Point3<Num>,
}

impl<Num> Rect2<Num> {
    /// Creates a new rect.
    pub const fn new(position: Point2<Num>, size: Point2<Num>) -> Self {
        Self { position, size }
    }
}

impl<Num: Precision> Rect2<Num> {
    /// Converts the rect into another precision with `as` semantics.
    pub fn cast<Q: Precision>(&self) -> Rect2<Q>
    where
        Num: AsPrimitive<Q>,
    {
        Rect2::new(self.position.cast(), self.size.cast())
    }

    /// Converts the rect into a box with zero `z` position and depth.
    pub fn extend(&self) -> Rect3<Num> {
        Rect3::new(self.position.extend(), self.size.extend())
    }
}

impl<Num> Rect3<Num> {
    /// Creates a new box.
    pub const fn new(position: Point3<Num>, size: Point3<Num>) -> Self {
        Self { position, size }
    }
}

impl<Num: Precision> Rect3<Num> {
    /// Converts the box into another precision with `as` semantics.
    pub fn cast<Q: Precision>(&self) -> Rect3<Q>
    where
        Num: AsPrimitive<Q>,
    {
        Rect3::new(self.position.cast(), self.size.cast())
    }

    /// Drops the `z` axis of the box.
    pub fn truncate(&self) -> Rect2<Num> {
        Rect2::new(self.position.truncate(), self.size.truncate())
    }
}

impl<Num: Precision> From<Rect2<Num>> for Rect3<Num> {
    fn from(value: Rect2<Num>) -> Self {
        value.extend()
    }
}

impl<Num: Precision> From<Rect3<Num>> for Rect2<Num> {
    fn from(value: Rect3<Num>) -> Self {
        value.truncate()
    }
}

macro_rules! impl_rect_eq {
    ($rect:ident) => {
        impl<Num: Precision> PartialEq for $rect<Num> {
            fn eq(&self, other: &Self) -> bool {
                self.position == other.position && self.size == other.size
            }
        }

        impl<Num: Precision + Eq> Eq for $rect<Num> {}

        impl<Num> AbsDiffEq for $rect<Num>
        where
            Num: Precision + AbsDiffEq<Num, Epsilon = Num>,
        {
            type Epsilon = Num;

            fn default_epsilon() -> Self::Epsilon {
                Num::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.position.abs_diff_eq(&other.position, epsilon)
                    && self.size.abs_diff_eq(&other.size, epsilon)
            }
        }
    };
}

impl_rect_eq!(Rect2);
impl_rect_eq!(Rect3);
