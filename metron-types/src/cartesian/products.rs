use super::Vector3;
use crate::precision::Precision;

/// Cross product of two 3d vectors.
///
/// ```
/// use metron_types::cartesian::{cross, Vector3d};
///
/// let z = cross(&Vector3d::new(1.0, 0.0, 0.0), &Vector3d::new(0.0, 1.0, 0.0));
/// assert_eq!(z, Vector3d::new(0.0, 0.0, 1.0));
/// ```
pub fn cross<Num: Precision>(v: &Vector3<Num>, v2: &Vector3<Num>) -> Vector3<Num> {
    v.cross(v2)
}

/// Dot product of two 3d vectors, computed in their precision.
///
/// ```
/// use metron_types::cartesian::{dot, Vector3d};
///
/// assert_eq!(dot(&Vector3d::new(1.0, 2.0, 3.0), &Vector3d::new(4.0, 5.0, 6.0)), 32.0);
/// ```
pub fn dot<Num: Precision>(v: &Vector3<Num>, v2: &Vector3<Num>) -> Num {
    v.dot(v2)
}
