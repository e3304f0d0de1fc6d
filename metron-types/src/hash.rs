//! Hashing of points, so that points can be used as keys of hash maps and sets.
//!
//! Components are fed into the hasher in order, so `(1, 2)` and `(2, 1)` hash differently.
//! Points of every precision implement [`Hash`], see [`Precision::hash_component`]. Map and set
//! keys also need [`Eq`], which only integer points implement.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::cartesian::{Point2, Point3};
use crate::precision::Precision;

/// Hasher builder used by [`PointHashMap`] and [`PointHashSet`].
///
/// Seeds are random for every builder instance. Hashes of equal points are equal within one map,
/// but are not stable between runs of the program.
pub type PointHash = ahash::RandomState;

/// Hash map keyed by 2d points.
pub type PointHashMap<Num, V> = HashMap<Point2<Num>, V, PointHash>;

/// Hash set of 2d points.
pub type PointHashSet<Num> = HashSet<Point2<Num>, PointHash>;

impl<Num: Precision> Hash for Point2<Num> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_component(state);
        self.y.hash_component(state);
    }
}

impl<Num: Precision> Hash for Point3<Num> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_component(state);
        self.y.hash_component(state);
        self.z.hash_component(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2d, Point2f, Point2i, Point2ui, Point3d, Point3i};
    use std::hash::BuildHasher;

    #[test]
    fn equal_points_hash_equally() {
        let state = PointHash::new();
        assert_eq!(
            state.hash_one(Point2i::new(3, -4)),
            state.hash_one(Point2i::new(3, -4))
        );
        assert_eq!(
            state.hash_one(Point3i::new(1, 2, 3)),
            state.hash_one(Point3i::new(1, 2, 3))
        );
    }

    #[test]
    fn float_points_hash() {
        let state = PointHash::new();
        assert_eq!(
            state.hash_one(Point2d::new(0.5, -1.25)),
            state.hash_one(Point2d::new(0.5, -1.25))
        );
        assert_ne!(
            state.hash_one(Point2f::new(0.5, 1.0)),
            state.hash_one(Point2f::new(1.0, 0.5))
        );
        assert_eq!(
            state.hash_one(Point3d::new(1.0, 2.0, 3.0)),
            state.hash_one(Point3d::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn signed_zero_points_hash_equally() {
        let state = PointHash::new();
        assert_eq!(Point2d::new(0.0, -0.0), Point2d::new(-0.0, 0.0));
        assert_eq!(
            state.hash_one(Point2d::new(0.0, -0.0)),
            state.hash_one(Point2d::new(-0.0, 0.0))
        );
        assert_eq!(
            state.hash_one(Point3d::new(-0.0, 1.0, -0.0)),
            state.hash_one(Point3d::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn hash_is_order_sensitive() {
        let state = PointHash::new();
        assert_ne!(
            state.hash_one(Point2i::new(1, 2)),
            state.hash_one(Point2i::new(2, 1))
        );
    }

    #[test]
    fn points_as_map_keys() {
        let mut map = PointHashMap::default();
        map.insert(Point2ui::new(1, 1), "a");
        map.insert(Point2ui::new(2, 1), "b");
        map.insert(Point2ui::new(1, 1), "c");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Point2ui::new(1, 1)), Some(&"c"));
        assert_eq!(map.get(&Point2ui::new(1, 2)), None);
    }

    #[test]
    fn points_in_set() {
        let set: PointHashSet<i32> = [Point2i::new(0, 0), Point2i::new(0, 1), Point2i::new(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point2i::new(0, 1)));
    }
}
