//! Storage layouts for vectors.
//!
//! Every layout owns exactly one [`Components`] buffer. The specialized
//! layouts ([`Xy`], [`Xyz`] and [`Xyzw`]) additionally name their positions:
//! index 0 is `x`, 1 is `y`, 2 is `z` and 3 is `w`. The named accessors read
//! and write the buffer itself, so both views always observe the same value.

use crate::Scalar;
use std::ops::{Deref, DerefMut};

/// A fixed-length, contiguous sequence of `N` components.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Components<T, N> {
    /// Returns the components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the components as a mutable array reference.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; N] { &mut self.0 }
}

impl<T, const N: usize> Deref for Components<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T, const N: usize> DerefMut for Components<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<T, const N: usize> From<[T; N]> for Components<T, N> {
    fn from(array: [T; N]) -> Self { Self(array) }
}

/// Storage backing a [`Vector`](crate::Vector) of dimension `N`.
pub trait Layout<T, const N: usize>: Copy {
    /// Names of the components in index order. Empty if the layout has no
    /// named components.
    const NAMES: &'static [&'static str];

    /// Creates the layout from its component buffer.
    fn from_components(components: Components<T, N>) -> Self;

    /// Returns the component buffer.
    fn components(&self) -> &Components<T, N>;

    /// Returns the component buffer mutably.
    fn components_mut(&mut self) -> &mut Components<T, N>;

    /// Returns the name of the component at `index`, if it has one.
    fn name_of(index: usize) -> Option<&'static str> { Self::NAMES.get(index).copied() }
}

/// Layout without named components, used for any dimension other than 2, 3
/// and 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generic<T, const N: usize> {
    data: Components<T, N>,
}

impl<T: Scalar, const N: usize> Layout<T, N> for Generic<T, N> {
    const NAMES: &'static [&'static str] = &[];

    #[inline]
    fn from_components(components: Components<T, N>) -> Self { Self { data: components } }

    #[inline]
    fn components(&self) -> &Components<T, N> { &self.data }

    #[inline]
    fn components_mut(&mut self) -> &mut Components<T, N> { &mut self.data }
}

macro_rules! named_layout {
    ($(#[$meta:meta])* $layout:ident, $n:literal; $($name:ident => $idx:literal),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $layout<T> {
            data: Components<T, $n>,
        }

        impl<T: Scalar> Layout<T, $n> for $layout<T> {
            const NAMES: &'static [&'static str] = &[$(stringify!($name)),+];

            #[inline]
            fn from_components(components: Components<T, $n>) -> Self { Self { data: components } }

            #[inline]
            fn components(&self) -> &Components<T, $n> { &self.data }

            #[inline]
            fn components_mut(&mut self) -> &mut Components<T, $n> { &mut self.data }
        }

        impl<T: Scalar> $layout<T> {
            $(
                #[doc = concat!("Returns the `", stringify!($name), "` component.")]
                #[inline]
                pub fn $name(&self) -> T { self.data.0[$idx] }

                paste::paste! {
                    #[doc = "Returns the `" $name "` component mutably."]
                    #[inline]
                    pub fn [<$name _mut>](&mut self) -> &mut T { &mut self.data.0[$idx] }

                    #[doc = "Sets the `" $name "` component."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: T) { self.data.0[$idx] = value; }
                }
            )+
        }
    };
}

named_layout!(
    /// Two-dimensional layout with `x` and `y`.
    Xy, 2; x => 0, y => 1
);

named_layout!(
    /// Three-dimensional layout with `x`, `y` and `z`.
    Xyz, 3; x => 0, y => 1, z => 2
);

named_layout!(
    /// Four-dimensional layout with `x`, `y`, `z` and `w`.
    Xyzw, 4; x => 0, y => 1, z => 2, w => 3
);

impl<T: Scalar> Xy<T> {
    /// Returns the signed area spanned by `self` and `rhs`,
    /// `self.x * rhs.y - self.y * rhs.x`.
    ///
    /// Can also be called as `Xy::cross(&v, &w)`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T { self.x() * rhs.y() - self.y() * rhs.x() }
}

impl<T: Scalar> Xyz<T> {
    /// Overwrites `self` with the cross product of `self` and `rhs`.
    ///
    /// Call as `Xyz::cross_assign(&mut v, &w)` for the free-function form.
    #[inline]
    pub fn cross_assign(&mut self, rhs: &Self) {
        let [x0, y0, z0] = self.data.0;
        let [x1, y1, z1] = rhs.data.0;
        self.data.0 = [y0 * z1 - z0 * y1, z0 * x1 - x0 * z1, x0 * y1 - y0 * x1];
    }
}
