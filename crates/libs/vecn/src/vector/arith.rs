//! Arithmetic and comparison operators.

use super::Vector;
use crate::{layout::Layout, ops, Scalar};
use num_traits::AsPrimitive;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Compares the first `min(N, M)` components.
///
/// Components of different kinds are equal only if they convert into each
/// other without loss, so the result is the same in both operand orders.
impl<T, U, const N: usize, const M: usize, B, C> PartialEq<Vector<U, M, C>> for Vector<T, N, B>
where
    T: Scalar + AsPrimitive<U>,
    U: Scalar + AsPrimitive<T>,
    B: Layout<T, N>,
    C: Layout<U, M>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, M, C>) -> bool { ops::equals(self.data(), other.data()) }
}

impl<T, const N: usize, B> Neg for Vector<T, N, B>
where
    T: Scalar + Neg<Output = T>,
    B: Layout<T, N>,
{
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        ops::mul_scalar(self.data_mut(), -T::one());
        self
    }
}

impl<T, const N: usize, B> Neg for &Vector<T, N, B>
where
    T: Scalar + Neg<Output = T>,
    B: Layout<T, N>,
{
    type Output = Vector<T, N, B>;

    #[inline]
    fn neg(self) -> Self::Output { -*self }
}

macro_rules! impl_vector_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T, U, const N: usize, const M: usize, B, C> $assign_trait<Vector<U, M, C>> for Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: Vector<U, M, C>) { ops::$op(self.data_mut(), rhs.data()); }
            }

            impl<T, U, const N: usize, const M: usize, B, C> $assign_trait<&Vector<U, M, C>> for Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: &Vector<U, M, C>) { ops::$op(self.data_mut(), rhs.data()); }
            }

            impl<T, U, const N: usize, const M: usize, B, C> $trait<Vector<U, M, C>> for Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: Vector<U, M, C>) -> Self::Output {
                    ops::$op(self.data_mut(), rhs.data());
                    self
                }
            }

            impl<T, U, const N: usize, const M: usize, B, C> $trait<&Vector<U, M, C>> for Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: &Vector<U, M, C>) -> Self::Output {
                    ops::$op(self.data_mut(), rhs.data());
                    self
                }
            }

            impl<T, U, const N: usize, const M: usize, B, C> $trait<Vector<U, M, C>> for &Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                type Output = Vector<T, N, B>;

                #[inline]
                fn $op(self, rhs: Vector<U, M, C>) -> Self::Output { (*self).$op(&rhs) }
            }

            impl<T, U, const N: usize, const M: usize, B, C> $trait<&Vector<U, M, C>> for &Vector<T, N, B>
            where
                T: Scalar,
                U: Scalar + AsPrimitive<T>,
                B: Layout<T, N>,
                C: Layout<U, M>,
            {
                type Output = Vector<T, N, B>;

                #[inline]
                fn $op(self, rhs: &Vector<U, M, C>) -> Self::Output { (*self).$op(rhs) }
            }
        )*
    };
}

impl_vector_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign
}

macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident, $engine:ident);*) => {
        $(
            impl<T, const N: usize, B> $assign_trait<T> for Vector<T, N, B>
            where
                T: Scalar,
                B: Layout<T, N>,
            {
                #[inline]
                fn $assign_op(&mut self, rhs: T) { ops::$engine(self.data_mut(), rhs); }
            }

            impl<T, const N: usize, B> $trait<T> for Vector<T, N, B>
            where
                T: Scalar,
                B: Layout<T, N>,
            {
                type Output = Self;

                #[inline]
                fn $op(mut self, rhs: T) -> Self::Output {
                    ops::$engine(self.data_mut(), rhs);
                    self
                }
            }

            impl<T, const N: usize, B> $trait<T> for &Vector<T, N, B>
            where
                T: Scalar,
                B: Layout<T, N>,
            {
                type Output = Vector<T, N, B>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output { (*self).$op(rhs) }
            }
        )*
    };
}

impl_scalar_ops! {
    Mul, mul, MulAssign, mul_assign, mul_scalar;
    Div, div, DivAssign, div_assign, div_scalar
}

/// `a * b` between two vectors is their dot product.
impl<T, U, const N: usize, const M: usize, B, C> Mul<Vector<U, M, C>> for Vector<T, N, B>
where
    T: Scalar,
    U: Scalar + AsPrimitive<T>,
    B: Layout<T, N>,
    C: Layout<U, M>,
{
    type Output = T;

    #[inline]
    fn mul(self, rhs: Vector<U, M, C>) -> Self::Output { self.dot(&rhs) }
}

impl<T, U, const N: usize, const M: usize, B, C> Mul<&Vector<U, M, C>> for &Vector<T, N, B>
where
    T: Scalar,
    U: Scalar + AsPrimitive<T>,
    B: Layout<T, N>,
    C: Layout<U, M>,
{
    type Output = T;

    #[inline]
    fn mul(self, rhs: &Vector<U, M, C>) -> Self::Output { self.dot(rhs) }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize, B: Layout<$t, N>> Mul<Vector<$t, N, B>> for $t {
                type Output = Vector<$t, N, B>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N, B>) -> Self::Output { rhs * self }
            }

            impl<const N: usize, B: Layout<$t, N>> Mul<&Vector<$t, N, B>> for $t {
                type Output = Vector<$t, N, B>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N, B>) -> Self::Output { *rhs * self }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
