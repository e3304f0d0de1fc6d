//! Prints reflection schemas of all value types as JSON and edits a point through its
//! descriptor.
//!
//! Run with `RUST_LOG=trace` to see the messages logged by the library.

use metron_types::cartesian::{Point2d, Point3d, Rect2d, Rect3d};
use metron_types::reflect::Reflect;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let schemas = [
        Point2d::DESCRIPTOR.schema(),
        Point3d::DESCRIPTOR.schema(),
        Rect2d::DESCRIPTOR.schema(),
        Rect3d::DESCRIPTOR.schema(),
    ];
    println!("{}", serde_json::to_string_pretty(&schemas)?);

    let descriptor = Point2d::DESCRIPTOR;
    let mut point = Point2d::default();
    descriptor.set(&mut point, "x", 3.0f64)?;
    descriptor.set(&mut point, "y", 4.0f64)?;

    let length = descriptor.invoke(&mut point, "getLength", &[])?;
    if let Some(length) = length.downcast_ref::<f32>() {
        println!("length of {point:?} is {length}");
    }

    descriptor.invoke(&mut point, "normalize", &[])?;
    println!("normalized: {}", serde_json::to_string(&point)?);

    let mut zero = Point2d::default();
    descriptor.invoke(&mut zero, "normalize", &[])?;
    println!("zero vector stays {}", serde_json::to_string(&zero)?);

    Ok(())
}
