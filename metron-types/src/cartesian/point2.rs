use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::ops::impl_point_ops;
use super::Point3;
use crate::error::MetronTypesError;
use crate::precision::{checked_cast, Precision};

/// A point in 2-dimensional cartesian coordinate space.
///
/// The same type is used both for positions and for displacements, see [`Vector2`].
/// Components are independent: nothing (e.g. normalization) is enforced between them.
///
/// Equality is exact, including for floating point precisions. Use [`approx`] traits to compare
/// with tolerance.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    /// X coordinate.
    pub x: Num,
    /// Y coordinate.
    pub y: Num,
}

/// Vector (displacement or direction) in 2-dimensional cartesian coordinate space.
pub type Vector2<Num = f64> = Point2<Num>;

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num: Precision> Point2<Num> {
    /// Converts the point into another precision, casting every component with `as` semantics.
    ///
    /// The conversion is lossy: fractional parts are truncated when converting into an integer
    /// precision, out of range values are saturated.
    pub fn cast<Q: Precision>(&self) -> Point2<Q>
    where
        Num: AsPrimitive<Q>,
    {
        Point2 {
            x: AsPrimitive::<Q>::as_(self.x),
            y: AsPrimitive::<Q>::as_(self.y),
        }
    }

    /// Converts the point into another precision, failing if a component does not fit into it.
    pub fn try_cast<Q: Precision>(&self) -> Result<Point2<Q>, MetronTypesError> {
        Ok(Point2 {
            x: checked_cast(self.x)?,
            y: checked_cast(self.y)?,
        })
    }

    /// Converts the point into a 3d point with zero `z`.
    pub fn extend(&self) -> Point3<Num> {
        Point3::new(self.x, self.y, Num::zero())
    }

    /// Euclidean distance to the other point, computed in single precision.
    pub fn distance_to(&self, rhs: &Self) -> f32 {
        let dx = self.x.as_f32() - rhs.x.as_f32();
        let dy = self.y.as_f32() - rhs.y.as_f32();
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared length of the vector, `x * x + y * y`.
    ///
    /// Computed in the precision of the vector, so it can overflow for integer precisions.
    pub fn length_squared(&self) -> Num {
        self.x * self.x + self.y * self.y
    }

    /// Length of the vector, computed in single precision.
    pub fn length(&self) -> f32 {
        self.length_squared().as_f32().sqrt()
    }

    /// Angle in radians given by `atan2(y - rhs.y, rhs.x - x)`.
    ///
    /// Note the sign convention: the `y` difference is taken from `rhs` to `self` while the `x`
    /// difference is taken from `self` to `rhs`. With a y axis pointing down (screen space) this
    /// is the usual counterclockwise angle from `self` towards `rhs`.
    pub fn angle_to(&self, rhs: &Self) -> f32 {
        (self.y.as_f32() - rhs.y.as_f32()).atan2(rhs.x.as_f32() - self.x.as_f32())
    }

    /// Scales the vector in place to the length of 1. See [`Point2::normalize_to`].
    pub fn normalize(&mut self) {
        self.normalize_to(1.0);
    }

    /// Scales the vector in place so that its length becomes `desired_length`, keeping the
    /// direction.
    ///
    /// A vector of zero length is left unchanged. For integer precisions the resulting
    /// components are truncated.
    pub fn normalize_to(&mut self, desired_length: f32) {
        let length = self.length();
        if length > 0.0 {
            let factor = desired_length / length;
            self.x = self.x.scale(factor);
            self.y = self.y.scale(factor);
        } else {
            log::trace!("Skipping normalization of zero length vector {:?}", self);
        }
    }
}

impl<Num> From<[Num; 2]> for Point2<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self { x, y }
    }
}

impl<Num: Precision> From<Point3<Num>> for Point2<Num> {
    fn from(value: Point3<Num>) -> Self {
        value.truncate()
    }
}

impl_point_ops!(Point2 { x => 0, y => 1 });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2d, Point2f, Point2i, Point2ui, Point3d};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn default_is_zero() {
        assert_eq!(Point2d::default(), Point2d::new(0.0, 0.0));
        assert_eq!(Point2ui::default(), Point2ui::new(0, 0));
    }

    #[test]
    fn add_then_sub_restores_value() {
        let a = Point2i::new(3, -7);
        let b = Point2i::new(-12, 5);
        assert_eq!(a + b - b, a);

        let a = Point2d::new(1.5, -2.25);
        let b = Point2d::new(0.5, 4.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn add_then_sub_restores_edge_values() {
        let values = [0, 1, -1, 17, -250, i32::MIN / 2, i32::MAX / 2];
        for x in values {
            for y in values {
                let a = Point2i::new(x, y);
                for dx in values {
                    let b = Point2i::new(dx, -y);
                    assert_eq!(a + b - b, a, "a = {a:?}, b = {b:?}");
                }
            }
        }

        let values = [0.0, -0.5, 3.25, -1e6, 1e-3];
        for x in values {
            for dx in values {
                let a = Point2d::new(x, -x);
                let b = Point2d::new(dx, 0.25);
                assert_abs_diff_eq!(a + b - b, a, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn signed_delta_on_unsigned_point() {
        assert_eq!(
            Point2ui::new(1, 1) + Point2i::new(-1, -1),
            Point2ui::new(0, 0)
        );
        assert_eq!(
            Point2ui::new(5, 3) - Point2i::new(-2, 3),
            Point2ui::new(7, 0)
        );

        let mut a = Point2ui::new(10, 10);
        a += Point2i::new(-4, 6);
        assert_eq!(a, Point2ui::new(6, 16));
        a -= Point2i::new(6, -1);
        assert_eq!(a, Point2ui::new(0, 17));
    }

    #[test]
    fn add_and_sub_across_precisions() {
        let a = Point2d::new(1.5, 2.5);
        assert_eq!(a + Point2i::new(1, 2), Point2d::new(2.5, 4.5));
        assert_eq!(a - Point2f::new(0.5, 0.5), Point2d::new(1.0, 2.0));

        let mut b = Point2i::new(10, 10);
        b += Point2d::new(1.9, -1.9);
        assert_eq!(b, Point2i::new(11, 9));
        b -= Point2ui::new(1, 9);
        assert_eq!(b, Point2i::new(10, 0));
    }

    #[test]
    fn mul_and_div() {
        let a = Point2i::new(6, 8);
        assert_eq!(a * Point2i::new(2, 3), Point2i::new(12, 24));
        assert_eq!(a * 2, Point2i::new(12, 16));
        assert_eq!(a / Point2i::new(3, 4), Point2i::new(2, 2));
        assert_eq!(a / 2, Point2i::new(3, 4));
    }

    #[test]
    fn compound_mul_and_div_mutate_receiver() {
        let mut a = Point2d::new(1.0, 2.0);
        a *= 3.0;
        assert_eq!(a, Point2d::new(3.0, 6.0));
        a *= Point2d::new(2.0, 0.5);
        assert_eq!(a, Point2d::new(6.0, 3.0));
        a /= Point2d::new(3.0, 3.0);
        assert_eq!(a, Point2d::new(2.0, 1.0));
        a /= 2.0;
        assert_eq!(a, Point2d::new(1.0, 0.5));
    }

    #[test]
    fn neg() {
        assert_eq!(-Point2i::new(1, -2), Point2i::new(-1, 2));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point2d::new(1.0, 2.0), Point2i::new(1, 2));
        assert_ne!(Point2d::new(1.5, 2.0), Point2i::new(1, 2));
        assert_ne!(Point2i::new(1, 2), Point2d::new(1.5, 2.0));
        assert_ne!(Point2d::new(0.1 + 0.2, 0.0), Point2d::new(0.3, 0.0));
        assert_ne!(Point2f::new(f32::NAN, 0.0), Point2f::new(f32::NAN, 0.0));
        assert_ne!(Point2ui::new(0, 0), Point2i::new(-1, 0));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point2d::new(-13.25, 72.0);
        assert_eq!(p.distance_to(&p), 0.0);
        let p = Point2ui::new(u32::MAX, 5);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn distance_to() {
        let a = Point2d::new(1.0, 2.0);
        let b = Point2d::new(4.0, 5.0);
        assert_abs_diff_eq!(a.distance_to(&b), 4.242_641, epsilon = 1e-6);

        let a = Point2ui::new(5, 5);
        let b = Point2ui::new(2, 1);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn length() {
        assert_eq!(Point2d::new(3.0, 4.0).length(), 5.0f32);
        assert_eq!(Point2i::new(-3, 4).length_squared(), 25);
        assert_eq!(Point2d::new(0.0, 0.0).length(), 0.0);
    }

    #[test]
    fn angle_to_keeps_sign_convention() {
        let origin = Point2d::new(0.0, 0.0);
        assert_abs_diff_eq!(origin.angle_to(&Point2d::new(1.0, 0.0)), 0.0);
        assert_abs_diff_eq!(origin.angle_to(&Point2d::new(0.0, -1.0)), FRAC_PI_2);
        assert_abs_diff_eq!(origin.angle_to(&Point2d::new(0.0, 1.0)), -FRAC_PI_2);
        assert_abs_diff_eq!(origin.angle_to(&Point2d::new(-1.0, 0.0)), PI);
        assert_abs_diff_eq!(
            Point2i::new(1, 1).angle_to(&Point2i::new(2, 0)),
            FRAC_PI_4
        );
    }

    #[test]
    fn angle_to_unsigned() {
        let a = Point2ui::new(0, 1);
        let b = Point2ui::new(1, 0);
        assert_abs_diff_eq!(a.angle_to(&b), FRAC_PI_4);
    }

    #[test]
    fn normalize() {
        let mut v = Point2d::new(3.0, 4.0);
        v.normalize();
        assert_abs_diff_eq!(v, Point2d::new(0.6, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_to_length() {
        let mut v = Point2f::new(0.0, -2.0);
        v.normalize_to(5.0);
        assert_eq!(v, Point2f::new(0.0, -5.0));

        let mut v = Point2i::new(3, 4);
        v.normalize_to(10.0);
        assert_eq!(v, Point2i::new(6, 8));
    }

    #[test]
    fn normalize_zero_vector_is_noop() {
        let mut v = Point2d::new(0.0, 0.0);
        v.normalize();
        assert_eq!(v, Point2d::new(0.0, 0.0));

        let mut v = Point2i::default();
        v.normalize_to(3.0);
        assert_eq!(v, Point2i::default());
    }

    #[test]
    fn cast_truncates() {
        let p = Point2d::new(1.9, -2.7);
        assert_eq!(p.cast::<i32>(), Point2i::new(1, -2));
        assert_eq!(p.cast::<u32>(), Point2ui::new(1, 0));
        assert_eq!(Point2i::new(1, 2).cast::<f64>(), Point2d::new(1.0, 2.0));
    }

    #[test]
    fn try_cast() {
        assert_eq!(Point2d::new(1.9, 2.0).try_cast::<i32>(), Ok(Point2i::new(1, 2)));
        assert_matches!(
            Point2i::new(1, -2).try_cast::<u32>(),
            Err(MetronTypesError::Conversion(_))
        );
    }

    #[test]
    fn extend_to_3d() {
        assert_eq!(Point2d::new(1.0, 2.0).extend(), Point3d::new(1.0, 2.0, 0.0));
        assert_eq!(Point3d::from(Point2d::new(1.0, 2.0)), Point3d::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn indexing() {
        let mut p = Point2i::from([4, 5]);
        assert_eq!(p[0], 4);
        assert_eq!(p[1], 5);
        p[1] = 7;
        assert_eq!(p.coords(), [4, 7]);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_range() {
        let p = Point2i::new(4, 5);
        let _value = p[2];
    }

    #[test]
    fn serialization() {
        let p = Point2i::new(1, -2);
        let json = serde_json::to_string(&p).expect("serialization failed");
        assert_eq!(json, r#"{"x":1,"y":-2}"#);
        let restored: Point2i = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(restored, p);
    }
}
