//! Compile-time dispatch helpers.
//!
//! Everything in here is resolved during monomorphization: the shared length
//! of two dimensions, the storage layout bound to a dimension and the
//! constructor arity accepted by a dimension.

use crate::layout::{Generic, Layout, Xy, Xyz, Xyzw};
use crate::Scalar;

/// Returns the smaller of two dimensions.
#[inline(always)]
pub const fn min_dim(a: usize, b: usize) -> usize {
    if a < b {
        a
    } else {
        b
    }
}

/// Number of components shared by an `A`-dimensional and a `B`-dimensional
/// vector.
pub struct Shared<const A: usize, const B: usize>;

impl<const A: usize, const B: usize> Shared<A, B> {
    /// Length of the common prefix, `min(A, B)`.
    pub const LEN: usize = min_dim(A, B);
}

/// Type-level dimension tag.
pub struct Dim<const N: usize>;

/// Storage layout selector.
///
/// `Dim<2>`, `Dim<3>` and `Dim<4>` bind to the layouts with named components,
/// any other supported dimension binds to [`Generic`].
pub trait SelectBase<T, const N: usize> {
    /// Layout used by an `N`-dimensional vector of `T`.
    type Base: Layout<T, N>;
}

impl<T: Scalar> SelectBase<T, 2> for Dim<2> {
    type Base = Xy<T>;
}

impl<T: Scalar> SelectBase<T, 3> for Dim<3> {
    type Base = Xyz<T>;
}

impl<T: Scalar> SelectBase<T, 4> for Dim<4> {
    type Base = Xyzw<T>;
}

macro_rules! select_generic {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> SelectBase<T, $n> for Dim<$n> {
                type Base = Generic<T, $n>;
            }
        )*
    };
}

select_generic!(1, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 32, 64);

/// Constructor arity gate.
///
/// Only argument packs with exactly `N` components implement `Arity<T, N>`,
/// so handing a pack of the wrong size to [`Vector::new`] fails to compile.
///
/// [`Vector::new`]: crate::Vector::new
pub trait Arity<T, const N: usize> {
    /// Unpacks the arguments in order.
    fn into_array(self) -> [T; N];
}

impl<T, const N: usize> Arity<T, N> for [T; N] {
    #[inline(always)]
    fn into_array(self) -> [T; N] { self }
}

macro_rules! impl_tuple_arity {
    (@ty $v:ident) => { T };
    ($($n:literal => ($($v:ident),+));* $(;)?) => {
        $(
            impl<T> Arity<T, $n> for ($(impl_tuple_arity!(@ty $v),)+) {
                #[inline(always)]
                fn into_array(self) -> [T; $n] {
                    let ($($v,)+) = self;
                    [$($v),+]
                }
            }
        )*
    };
}

impl_tuple_arity! {
    1 => (a);
    2 => (a, b);
    3 => (a, b, c);
    4 => (a, b, c, d);
    5 => (a, b, c, d, e);
    6 => (a, b, c, d, e, f);
    7 => (a, b, c, d, e, f, g);
    8 => (a, b, c, d, e, f, g, h);
}
