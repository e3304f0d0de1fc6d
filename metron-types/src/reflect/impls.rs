use std::any::Any;

use super::{arg, FieldDescriptor, MethodDescriptor, Reflect, TypeDescriptor};
use crate::cartesian::{Point2, Point3, Rect2, Rect3};
use crate::precision::Precision;

impl<Num: Precision> Reflect for Point2<Num> {
    const DESCRIPTOR: TypeDescriptor<Self> = TypeDescriptor {
        name: "Point2",
        fields: &[
            FieldDescriptor::<Self>::new("x", |p| &p.x, |p| &mut p.x),
            FieldDescriptor::<Self>::new("y", |p| &p.y, |p| &mut p.y),
        ],
        methods: &[
            MethodDescriptor::<Self>::new("getDistanceTo", 1, 1, |p, args| {
                let rhs = arg::<Self>("getDistanceTo", args, 0)?;
                Ok(Box::new(p.distance_to(rhs)) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("getLength", 0, 0, |p, _| {
                Ok(Box::new(p.length()) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("getAngleTo", 1, 1, |p, args| {
                let rhs = arg::<Self>("getAngleTo", args, 0)?;
                Ok(Box::new(p.angle_to(rhs)) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("normalize", 0, 1, |p, args| {
                if args.is_empty() {
                    p.normalize();
                } else {
                    p.normalize_to(*arg::<f32>("normalize", args, 0)?);
                }
                Ok(Box::new(()) as Box<dyn Any>)
            }),
        ],
    };
}

impl<Num: Precision> Reflect for Point3<Num> {
    const DESCRIPTOR: TypeDescriptor<Self> = TypeDescriptor {
        name: "Point3",
        fields: &[
            FieldDescriptor::<Self>::new("x", |p| &p.x, |p| &mut p.x),
            FieldDescriptor::<Self>::new("y", |p| &p.y, |p| &mut p.y),
            FieldDescriptor::<Self>::new("z", |p| &p.z, |p| &mut p.z),
        ],
        methods: &[
            MethodDescriptor::<Self>::new("getDistanceTo", 1, 1, |p, args| {
                let rhs = arg::<Self>("getDistanceTo", args, 0)?;
                Ok(Box::new(p.distance_to(rhs)) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("getLength", 0, 0, |p, _| {
                Ok(Box::new(p.length()) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("getYawTo", 1, 1, |p, args| {
                let rhs = arg::<Self>("getYawTo", args, 0)?;
                Ok(Box::new(p.yaw_to(rhs)) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("getPitchTo", 1, 1, |p, args| {
                let rhs = arg::<Self>("getPitchTo", args, 0)?;
                Ok(Box::new(p.pitch_to(rhs)) as Box<dyn Any>)
            }),
            MethodDescriptor::<Self>::new("normalize", 0, 1, |p, args| {
                if args.is_empty() {
                    p.normalize();
                } else {
                    p.normalize_to(*arg::<f32>("normalize", args, 0)?);
                }
                Ok(Box::new(()) as Box<dyn Any>)
            }),
        ],
    };
}

impl<Num: Precision> Reflect for Rect2<Num> {
    const DESCRIPTOR: TypeDescriptor<Self> = TypeDescriptor {
        name: "Rect2",
        fields: &[
            FieldDescriptor::<Self>::new("position", |r| &r.position, |r| &mut r.position),
            FieldDescriptor::<Self>::new("size", |r| &r.size, |r| &mut r.size),
        ],
        methods: &[],
    };
}

impl<Num: Precision> Reflect for Rect3<Num> {
    const DESCRIPTOR: TypeDescriptor<Self> = TypeDescriptor {
        name: "Rect3",
        fields: &[
            FieldDescriptor::<Self>::new("position", |r| &r.position, |r| &mut r.position),
            FieldDescriptor::<Self>::new("size", |r| &r.size, |r| &mut r.size),
        ],
        methods: &[],
    };
}
