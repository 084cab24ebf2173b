//! Element-wise operations over fixed-length component buffers.
//!
//! Every routine takes its operands as arrays, so the number of iterations is
//! known at monomorphization time: `N` for unary operations and
//! [`Shared::<N, M>::LEN`](Shared::LEN) for binary ones. Elements past the
//! shared prefix of the longer operand are never read or written.
//!
//! When the two buffers hold different scalar kinds, the right-hand element is
//! converted into the left-hand kind with [`AsPrimitive`] before the operation.
//! Scalar multiplication and division follow the same rule. Comparison is the
//! exception: it converts both ways so that no lossy cast can make two
//! different values compare equal.

use crate::{dispatch::Shared, Scalar};
use num_traits::AsPrimitive;

/// Returns true if the first `min(N, M)` elements of `a` and `b` are equal.
///
/// Two elements are equal only if each one equals the other after conversion
/// into its kind, so `1 == 1.5`, `0u8 == 256i32` and `0 == NaN` are all false
/// and the result does not depend on the operand order.
#[inline]
pub fn equals<T, U, const N: usize, const M: usize>(a: &[T; N], b: &[U; M]) -> bool
where
    T: Scalar + AsPrimitive<U>,
    U: Scalar + AsPrimitive<T>,
{
    let len = Shared::<N, M>::LEN;
    a[..len]
        .iter()
        .zip(&b[..len])
        .all(|(&x, &y)| x == y.as_() && AsPrimitive::<U>::as_(x) == y)
}

/// Overwrites the first `min(N, M)` elements of `dst` with those of `src`.
#[inline]
pub fn set<T, U, const N: usize, const M: usize>(dst: &mut [T; N], src: &[U; M])
where
    T: Scalar,
    U: AsPrimitive<T>,
{
    let len = Shared::<N, M>::LEN;
    for (d, &s) in dst[..len].iter_mut().zip(&src[..len]) {
        *d = s.as_();
    }
}

/// Adds `src` to `dst` element by element over the shared prefix.
#[inline]
pub fn add<T, U, const N: usize, const M: usize>(dst: &mut [T; N], src: &[U; M])
where
    T: Scalar,
    U: AsPrimitive<T>,
{
    let len = Shared::<N, M>::LEN;
    for (d, &s) in dst[..len].iter_mut().zip(&src[..len]) {
        *d += s.as_();
    }
}

/// Subtracts `src` from `dst` element by element over the shared prefix.
#[inline]
pub fn sub<T, U, const N: usize, const M: usize>(dst: &mut [T; N], src: &[U; M])
where
    T: Scalar,
    U: AsPrimitive<T>,
{
    let len = Shared::<N, M>::LEN;
    for (d, &s) in dst[..len].iter_mut().zip(&src[..len]) {
        *d -= s.as_();
    }
}

/// Multiplies every element of `dst` by `scalar`.
#[inline]
pub fn mul_scalar<T, S, const N: usize>(dst: &mut [T; N], scalar: S)
where
    T: Scalar,
    S: AsPrimitive<T>,
{
    let s = scalar.as_();
    for d in dst.iter_mut() {
        *d *= s;
    }
}

/// Divides every element of `dst` by `scalar`.
///
/// No zero check: dividing by zero follows the native behaviour of `T`.
#[inline]
pub fn div_scalar<T, S, const N: usize>(dst: &mut [T; N], scalar: S)
where
    T: Scalar,
    S: AsPrimitive<T>,
{
    let s = scalar.as_();
    for d in dst.iter_mut() {
        *d /= s;
    }
}

/// Returns the sum of the squares of all elements.
#[inline]
pub fn sum_of_squares<T, const N: usize>(buf: &[T; N]) -> T
where
    T: Scalar,
{
    buf.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// Divides every element of `buf` by `magnitude`.
///
/// A zero magnitude yields whatever `T` produces for a division by zero.
#[inline]
pub fn normalize<T, const N: usize>(buf: &mut [T; N], magnitude: T)
where
    T: Scalar,
{
    for x in buf.iter_mut() {
        *x /= magnitude;
    }
}

/// Returns the sum of the products of the first `min(N, M)` elements.
#[inline]
pub fn dot<T, U, const N: usize, const M: usize>(a: &[T; N], b: &[U; M]) -> T
where
    T: Scalar,
    U: AsPrimitive<T>,
{
    let len = Shared::<N, M>::LEN;
    a[..len]
        .iter()
        .zip(&b[..len])
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y.as_())
}
