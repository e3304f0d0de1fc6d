//! Scalar types the geometry types can be parameterized with.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use num_traits::{AsPrimitive, NumCast};

use crate::error::MetronTypesError;

/// Numeric type of the components of points, vectors and rects.
///
/// Metric operations (distances, lengths, angles) are always computed in `f32`, whatever the
/// precision of the components is. Conversions to and from `f32` follow `as` cast rules: floats
/// are truncated toward zero and saturated when converted into integers.
pub trait Precision:
    num_traits::Num
    + NumCast
    + AsPrimitive<f32>
    + AsPrimitive<Self>
    + Copy
    + PartialOrd
    + Default
    + Debug
    + 'static
{
    /// Converts the value into `f32`.
    fn as_f32(self) -> f32 {
        AsPrimitive::<f32>::as_(self)
    }

    /// Converts an `f32` into this precision.
    fn from_f32(value: f32) -> Self;

    /// Multiplies the value by an `f32` factor.
    ///
    /// Floating point values keep their own precision. Integers are multiplied in `f32` and the
    /// result is truncated.
    fn scale(self, factor: f32) -> Self;

    /// Adds `rhs`, wrapping around on integer overflow.
    ///
    /// Combined with `as` casts this gives the expected result for mixed signed and unsigned
    /// operands, e.g. `1u32` plus `-1i32` cast into `u32` is `0`.
    fn add_component(self, rhs: Self) -> Self;

    /// Subtracts `rhs`, wrapping around on integer overflow.
    fn sub_component(self, rhs: Self) -> Self;

    /// Feeds the value into `state`.
    ///
    /// Floating point values are hashed by their bits, with `-0.0` hashed as `0.0` so that values
    /// equal by `==` hash equally.
    fn hash_component<H: Hasher>(self, state: &mut H);
}

macro_rules! impl_precision_float {
    ($($t:ty),*) => {
        $(
            impl Precision for $t {
                fn from_f32(value: f32) -> Self {
                    AsPrimitive::<$t>::as_(value)
                }

                fn scale(self, factor: f32) -> Self {
                    self * Self::from_f32(factor)
                }

                fn add_component(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn sub_component(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn hash_component<H: Hasher>(self, state: &mut H) {
                    let value = if self == 0.0 { 0.0 } else { self };
                    value.to_bits().hash(state);
                }
            }
        )*
    };
}

macro_rules! impl_precision_int {
    ($($t:ty),*) => {
        $(
            impl Precision for $t {
                fn from_f32(value: f32) -> Self {
                    AsPrimitive::<$t>::as_(value)
                }

                fn scale(self, factor: f32) -> Self {
                    Self::from_f32(self.as_f32() * factor)
                }

                fn add_component(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn sub_component(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn hash_component<H: Hasher>(self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

impl_precision_float!(f32, f64);
impl_precision_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Converts `value` into `Q`, failing if it is out of range of `Q` or is NaN.
///
/// Fractional parts are dropped when converting into integers, same as the lossy cast.
pub(crate) fn checked_cast<T: Precision, Q: Precision>(value: T) -> Result<Q, MetronTypesError> {
    <Q as NumCast>::from(value).ok_or_else(|| {
        MetronTypesError::Conversion(format!(
            "{value:?} cannot be represented as {}",
            std::any::type_name::<Q>()
        ))
    })
}
