use nalgebra::Scalar;

use crate::cartesian::{Point2, Point3};

impl<Num: Scalar + Copy> From<nalgebra::Point2<Num>> for Point2<Num> {
    fn from(value: nalgebra::Point2<Num>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl<Num: Scalar> From<Point2<Num>> for nalgebra::Point2<Num> {
    fn from(value: Point2<Num>) -> Self {
        nalgebra::Point2::new(value.x, value.y)
    }
}

impl<Num: Scalar + Copy> From<nalgebra::Vector2<Num>> for Point2<Num> {
    fn from(value: nalgebra::Vector2<Num>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl<Num: Scalar> From<Point2<Num>> for nalgebra::Vector2<Num> {
    fn from(value: Point2<Num>) -> Self {
        nalgebra::Vector2::new(value.x, value.y)
    }
}

impl<Num: Scalar + Copy> From<nalgebra::Point3<Num>> for Point3<Num> {
    fn from(value: nalgebra::Point3<Num>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl<Num: Scalar> From<Point3<Num>> for nalgebra::Point3<Num> {
    fn from(value: Point3<Num>) -> Self {
        nalgebra::Point3::new(value.x, value.y, value.z)
    }
}

impl<Num: Scalar + Copy> From<nalgebra::Vector3<Num>> for Point3<Num> {
    fn from(value: nalgebra::Vector3<Num>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl<Num: Scalar> From<Point3<Num>> for nalgebra::Vector3<Num> {
    fn from(value: Point3<Num>) -> Self {
        nalgebra::Vector3::new(value.x, value.y, value.z)
    }
}
