//! Component-wise operators shared by [`Point2`](super::Point2) and [`Point3`](super::Point3).

/// Implements arithmetic, comparison and indexing traits for a point type with the given
/// components. Components are listed together with their array index.
macro_rules! impl_point_ops {
    ($point:ident { $($comp:ident => $idx:tt),+ }) => {
        // The right-hand side is cast into the receiver's precision. Integer components wrap, so
        // a negative delta moves an unsigned point down instead of overflowing.
        impl<Num, Q> std::ops::Add<$point<Q>> for $point<Num>
        where
            Num: Precision,
            Q: Precision + AsPrimitive<Num>,
        {
            type Output = $point<Num>;

            fn add(self, rhs: $point<Q>) -> Self::Output {
                Self {
                    $($comp: self.$comp.add_component(AsPrimitive::<Num>::as_(rhs.$comp))),+
                }
            }
        }

        impl<Num, Q> std::ops::AddAssign<$point<Q>> for $point<Num>
        where
            Num: Precision,
            Q: Precision + AsPrimitive<Num>,
        {
            fn add_assign(&mut self, rhs: $point<Q>) {
                *self = *self + rhs;
            }
        }

        impl<Num, Q> std::ops::Sub<$point<Q>> for $point<Num>
        where
            Num: Precision,
            Q: Precision + AsPrimitive<Num>,
        {
            type Output = $point<Num>;

            fn sub(self, rhs: $point<Q>) -> Self::Output {
                Self {
                    $($comp: self.$comp.sub_component(AsPrimitive::<Num>::as_(rhs.$comp))),+
                }
            }
        }

        impl<Num, Q> std::ops::SubAssign<$point<Q>> for $point<Num>
        where
            Num: Precision,
            Q: Precision + AsPrimitive<Num>,
        {
            fn sub_assign(&mut self, rhs: $point<Q>) {
                *self = *self - rhs;
            }
        }

        impl<Num: Precision> std::ops::Mul<$point<Num>> for $point<Num> {
            type Output = $point<Num>;

            fn mul(self, rhs: $point<Num>) -> Self::Output {
                Self {
                    $($comp: self.$comp * rhs.$comp),+
                }
            }
        }

        impl<Num: Precision> std::ops::Mul<Num> for $point<Num> {
            type Output = $point<Num>;

            fn mul(self, rhs: Num) -> Self::Output {
                Self {
                    $($comp: self.$comp * rhs),+
                }
            }
        }

        impl<Num: Precision> std::ops::MulAssign<$point<Num>> for $point<Num> {
            fn mul_assign(&mut self, rhs: $point<Num>) {
                *self = *self * rhs;
            }
        }

        impl<Num: Precision> std::ops::MulAssign<Num> for $point<Num> {
            fn mul_assign(&mut self, rhs: Num) {
                *self = *self * rhs;
            }
        }

        impl<Num: Precision> std::ops::Div<$point<Num>> for $point<Num> {
            type Output = $point<Num>;

            fn div(self, rhs: $point<Num>) -> Self::Output {
                Self {
                    $($comp: self.$comp / rhs.$comp),+
                }
            }
        }

        impl<Num: Precision> std::ops::Div<Num> for $point<Num> {
            type Output = $point<Num>;

            fn div(self, rhs: Num) -> Self::Output {
                Self {
                    $($comp: self.$comp / rhs),+
                }
            }
        }

        impl<Num: Precision> std::ops::DivAssign<$point<Num>> for $point<Num> {
            fn div_assign(&mut self, rhs: $point<Num>) {
                *self = *self / rhs;
            }
        }

        impl<Num: Precision> std::ops::DivAssign<Num> for $point<Num> {
            fn div_assign(&mut self, rhs: Num) {
                *self = *self / rhs;
            }
        }

        impl<Num> std::ops::Neg for $point<Num>
        where
            Num: Precision + std::ops::Neg<Output = Num>,
        {
            type Output = $point<Num>;

            fn neg(self) -> Self::Output {
                Self {
                    $($comp: -self.$comp),+
                }
            }
        }

        // Components are compared after casting each side into the other's precision, so
        // `1i32` equals `1.0f64` but not `1.5f64`.
        impl<Num, Q> PartialEq<$point<Q>> for $point<Num>
        where
            Num: Precision + AsPrimitive<Q>,
            Q: Precision + AsPrimitive<Num>,
        {
            fn eq(&self, other: &$point<Q>) -> bool {
                $(
                    self.$comp == AsPrimitive::<Num>::as_(other.$comp)
                        && other.$comp == AsPrimitive::<Q>::as_(self.$comp)
                )&&+
            }
        }

        impl<Num: Precision + Eq> Eq for $point<Num> {}

        impl<Num> std::ops::Index<usize> for $point<Num> {
            type Output = Num;

            fn index(&self, index: usize) -> &Num {
                match index {
                    $($idx => &self.$comp,)+
                    _ => panic!(
                        "index {index} is out of range for {}",
                        stringify!($point)
                    ),
                }
            }
        }

        impl<Num> std::ops::IndexMut<usize> for $point<Num> {
            fn index_mut(&mut self, index: usize) -> &mut Num {
                match index {
                    $($idx => &mut self.$comp,)+
                    _ => panic!(
                        "index {index} is out of range for {}",
                        stringify!($point)
                    ),
                }
            }
        }

        impl<Num> AbsDiffEq for $point<Num>
        where
            Num: Precision + AbsDiffEq<Num, Epsilon = Num>,
        {
            type Epsilon = Num;

            fn default_epsilon() -> Self::Epsilon {
                Num::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$comp.abs_diff_eq(&other.$comp, epsilon))&&+
            }
        }

        impl<Num> RelativeEq for $point<Num>
        where
            Num: Precision + RelativeEq<Num, Epsilon = Num>,
        {
            fn default_max_relative() -> Self::Epsilon {
                Num::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$comp.relative_eq(&other.$comp, epsilon, max_relative))&&+
            }
        }
    };
}

pub(crate) use impl_point_ops;
