//! Scalar kinds usable as vector components.

use cfg_if::cfg_if;
use num_traits::{AsPrimitive, One, Zero};
use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// Numeric type that can be stored in a [`Vector`](crate::Vector).
///
/// Implemented for every type that supports equality and the four basic
/// arithmetic operations (plus their compound-assignment forms) with itself.
/// The [`AsPrimitive<Self>`] bound lets same-kind operands go through the same
/// conversion path as mixed-kind ones.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + AsPrimitive<Self>
    + 'static
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
        + Debug
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + AsPrimitive<T>
        + 'static
{
}

/// Square root of a scalar.
///
/// Behaves like the real square root for floating point types; a negative
/// input gives NaN. Integers return the exact floor of the real root, with
/// negative inputs mapping to zero.
pub trait Sqrt {
    /// Returns the square root of `self`.
    fn sqrt(self) -> Self;
}

cfg_if! {
    if #[cfg(feature = "libm")] {
        #[inline(always)]
        fn sqrt_f32(x: f32) -> f32 { libm::sqrtf(x) }

        #[inline(always)]
        fn sqrt_f64(x: f64) -> f64 { libm::sqrt(x) }
    } else {
        #[inline(always)]
        fn sqrt_f32(x: f32) -> f32 { x.sqrt() }

        #[inline(always)]
        fn sqrt_f64(x: f64) -> f64 { x.sqrt() }
    }
}

impl Sqrt for f32 {
    #[inline]
    fn sqrt(self) -> Self { sqrt_f32(self) }
}

impl Sqrt for f64 {
    #[inline]
    fn sqrt(self) -> Self { sqrt_f64(self) }
}

macro_rules! impl_int_sqrt {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    // `f64` cannot hold every 64-bit value; step to the exact floor.
                    let mut root = sqrt_f64(self as f64) as $t;
                    while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > self) {
                        root -= 1;
                    }
                    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= self) {
                        root += 1;
                    }
                    root
                }
            }
        )*
    };
}

impl_int_sqrt!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
