//! The generic vector value type.

mod arith;
mod dims;

use crate::{
    dispatch::{Arity, Dim, SelectBase},
    layout::{Components, Generic, Layout, Xy, Xyz, Xyzw},
    ops, Scalar, Sqrt, VectorError,
};
use num_traits::AsPrimitive;
use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    ops::{Deref, DerefMut, Index, IndexMut},
};

/// A vector of `N` components of scalar kind `T`, stored in layout `B`.
///
/// The layout decides which extra API the vector exposes: the named layouts
/// give access to `x`, `y`, `z`, `w` through `Deref`, and the 2 and 3
/// dimensional ones add a cross product. Use [`VecN`] to let the dimension
/// pick the layout.
///
/// Binary operations accept any other vector. Only the first `min(N, M)`
/// components take part; the remaining components of the left-hand side are
/// left untouched and the result always has the dimension of the left-hand
/// side. Components of a different scalar kind are converted into `T` with
/// [`AsPrimitive`] first.
///
/// Because `==` accepts a vector of any scalar kind on the right, the scalar
/// kind of the right-hand side must be known: write `v == Vec3::<f64>::zero()`
/// rather than `v == Vec3::zero()`.
#[derive(Clone, Copy)]
pub struct Vector<T, const N: usize, B> {
    base: B,
    marker: PhantomData<T>,
}

/// `N`-dimensional vector using the layout selected by [`SelectBase`].
///
/// Only defined for `N` in `1..=16`, `32` and `64`; use [`GenericVec`] for any
/// other dimension.
pub type VecN<T, const N: usize> = Vector<T, N, <Dim<N> as SelectBase<T, N>>::Base>;

/// `N`-dimensional vector without named components; available for any `N`.
pub type GenericVec<T, const N: usize> = Vector<T, N, Generic<T, N>>;

/// Two-dimensional vector.
pub type Vec2<T> = Vector<T, 2, Xy<T>>;

/// Three-dimensional vector.
pub type Vec3<T> = Vector<T, 3, Xyz<T>>;

/// Four-dimensional vector.
pub type Vec4<T> = Vector<T, 4, Xyzw<T>>;

impl<T, const N: usize, B> Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    /// Number of components.
    pub const DIM: usize = N;

    #[inline]
    fn from_base(base: B) -> Self {
        Self {
            base,
            marker: PhantomData,
        }
    }

    /// Creates a vector with every component set to zero.
    #[inline]
    pub fn zero() -> Self { Self::from_array([T::zero(); N]) }

    /// Creates a vector from an array of exactly `N` components.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self { Self::from_base(B::from_components(Components(data))) }

    /// Creates a vector from a pack of exactly `N` components.
    ///
    /// Accepts `[T; N]` or a tuple of `N` values; a pack of any other size
    /// does not compile.
    ///
    /// ```
    /// use vecn::Vec3;
    ///
    /// let v = Vec3::new((1i32, 2, 3));
    /// assert_eq!(v.z(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use vecn::Vec3;
    ///
    /// let v = Vec3::new((1, 2));
    /// ```
    #[inline]
    pub fn new<A: Arity<T, N>>(components: A) -> Self { Self::from_array(components.into_array()) }

    /// Returns the component buffer.
    #[inline]
    pub fn data(&self) -> &[T; N] { self.base.components().as_array() }

    /// Returns the component buffer mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T; N] { self.base.components_mut().as_array_mut() }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] { *self.data() }

    /// Returns the component at `index`, or zero if `index` is out of range.
    ///
    /// Use [`Vector::try_get`] to treat an out-of-range index as an error.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        match self.data().get(index) {
            Some(&value) => value,
            None => {
                log::trace!(
                    "read of component {} on a {}-dimensional vector, returning zero",
                    index,
                    N
                );
                T::zero()
            }
        }
    }

    /// Returns a mutable reference to the component at `index`, or `None` if
    /// `index` is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.data_mut().get_mut(index) }

    /// Returns the component at `index`.
    pub fn try_get(&self, index: usize) -> Result<T, VectorError> {
        self.data()
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds { index, dim: N })
    }

    /// Copies the first `min(N, M)` components of `other` into `self`.
    #[inline]
    pub fn set<U, const M: usize, C>(&mut self, other: &Vector<U, M, C>)
    where
        U: Scalar + AsPrimitive<T>,
        C: Layout<U, M>,
    {
        ops::set(self.data_mut(), other.data());
    }

    /// Same as [`Vector::set`], returning `self` for chaining.
    #[inline]
    pub fn assign<U, const M: usize, C>(&mut self, other: &Vector<U, M, C>) -> &mut Self
    where
        U: Scalar + AsPrimitive<T>,
        C: Layout<U, M>,
    {
        self.set(other);
        self
    }

    /// Converts into a vector of another dimension, scalar kind or layout.
    ///
    /// The first `min(N, M)` components are copied; any extra components of
    /// the target are zero.
    #[inline]
    pub fn convert<U, const M: usize, C>(&self) -> Vector<U, M, C>
    where
        U: Scalar,
        T: AsPrimitive<U>,
        C: Layout<U, M>,
    {
        let mut out = Vector::<U, M, C>::zero();
        out.set(self);
        out
    }

    /// Returns the sum of the squared components.
    #[inline]
    pub fn sqrt_magnitude(&self) -> T { ops::sum_of_squares(self.data()) }

    /// Returns the dot product over the first `min(N, M)` components.
    #[inline]
    pub fn dot<U, const M: usize, C>(&self, other: &Vector<U, M, C>) -> T
    where
        U: Scalar + AsPrimitive<T>,
        C: Layout<U, M>,
    {
        ops::dot(self.data(), other.data())
    }
}

impl<T, const N: usize, B> Vector<T, N, B>
where
    T: Scalar + Sqrt,
    B: Layout<T, N>,
{
    /// Returns the Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> T { self.sqrt_magnitude().sqrt() }

    /// Returns a copy scaled to unit length.
    ///
    /// The zero vector yields whatever `T` gives for a division by zero
    /// (NaN components for floats).
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_this();
        out
    }

    /// Scales `self` to unit length in place.
    #[inline]
    pub fn normalize_this(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        ops::normalize(self.data_mut(), magnitude);
        self
    }
}

impl<T, const N: usize, B> Default for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    fn default() -> Self { Self::zero() }
}

impl<T, const N: usize, B> Deref for Vector<T, N, B> {
    type Target = B;

    fn deref(&self) -> &Self::Target { &self.base }
}

impl<T, const N: usize, B> DerefMut for Vector<T, N, B> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.base }
}

/// Panics if `index >= N`. [`Vector::get`] returns zero instead and
/// [`Vector::try_get`] returns an error.
impl<T, const N: usize, B> Index<usize> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.data()[index] }
}

/// Panics if `index >= N`; see [`Vector::get_mut`] for a checked alternative.
impl<T, const N: usize, B> IndexMut<usize> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.data_mut()[index] }
}

impl<T, const N: usize, B> AsRef<[T]> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    fn as_ref(&self) -> &[T] { self.data() }
}

impl<T, const N: usize, B> AsMut<[T]> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    fn as_mut(&mut self) -> &mut [T] { self.data_mut() }
}

impl<T, const N: usize, B> From<[T; N]> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    fn from(data: [T; N]) -> Self { Self::from_array(data) }
}

impl<T, const N: usize, B> TryFrom<&[T]> for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice).map(Self::from_array).map_err(|_| {
            log::debug!(
                "cannot build a {}-dimensional vector from {} components",
                N,
                slice.len()
            );
            VectorError::LengthMismatch {
                expected: N,
                actual: slice.len(),
            }
        })
    }
}

impl<T, const N: usize, B> Debug for Vector<T, N, B>
where
    T: Scalar,
    B: Layout<T, N>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vector").field(self.data()).finish()
    }
}

/// Writes the dimension followed by the components, e.g. `3[ 1 2 3 ]`.
impl<T, const N: usize, B> Display for Vector<T, N, B>
where
    T: Scalar + Display,
    B: Layout<T, N>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[ ", N)?;
        for component in self.data() {
            write!(f, "{} ", component)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_for_each_specialized_dim() {
        let v2 = Vec2::<f32>::zero();
        let v3 = Vec3::<f64>::zero();
        let v4 = Vec4::<i32>::zero();
        for i in 0..2 {
            assert_eq!(v2.get(i), 0.0);
        }
        for i in 0..3 {
            assert_eq!(v3.get(i), 0.0);
        }
        for i in 0..4 {
            assert_eq!(v4.get(i), 0);
        }
        assert_eq!(GenericVec::<u8, 9>::default().into_array(), [0; 9]);
    }

    #[test]
    fn named_components_alias_indices() {
        let mut v = Vec3::from_array([1i32, 2, 3]);
        assert_eq!((v.x(), v.y(), v.z()), (1, 2, 3));
        assert_eq!((v[0], v[1], v[2]), (v.x(), v.y(), v.z()));

        v[1] = 20;
        assert_eq!(v.y(), 20);
        v.set_z(30);
        assert_eq!(v.data(), &[1, 20, 30]);

        v += Vec3::xyz(1i32, 1, 1);
        assert_eq!((v.x(), v.y(), v.z()), (2, 21, 31));

        let mut w = Vec4::xyzw(0.0f64, 3.0, 0.0, 4.0);
        w.normalize_this();
        assert_relative_eq!(w.w(), w[3]);
        assert_relative_eq!(w.w(), 0.8);
    }

    #[test]
    fn arity_constructor() {
        assert_eq!(Vec2::new((1.0f32, 2.0)).into_array(), [1.0, 2.0]);
        assert_eq!(Vec4::new([1i32, 2, 3, 4]).w(), 4);
        assert_eq!(VecN::<i32, 5>::new((1, 2, 3, 4, 5)).into_array(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn out_of_range_reads() {
        let mut v = Vec3::xyz(1.0f32, 2.0, 3.0);
        assert_eq!(v.get(5), 0.0);
        assert_eq!(v.get(3), 0.0);
        assert!(v.get_mut(3).is_none());
        assert!(std::panic::catch_unwind(|| v[5]).is_err());
        assert_eq!(v.try_get(2), Ok(3.0));
        assert_eq!(
            v.try_get(5),
            Err(VectorError::IndexOutOfBounds { index: 5, dim: 3 })
        );
    }

    #[test]
    fn set_truncates_to_shared_prefix() {
        let mut a = Vec3::xyz(1i32, 2, 3);
        a.set(&Vec2::xy(10i32, 20));
        assert_eq!(a.data(), &[10, 20, 3]);

        let mut b = Vec2::xy(0.0f32, 0.0);
        b.assign(&Vec4::xyzw(1i32, 2, 3, 4)).normalize_this();
        assert_relative_eq!(b.magnitude(), 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn convert_between_dims_and_kinds() {
        let a = Vec3::xyz(1.5f64, 2.5, 3.5);
        let b: Vec4<i32> = a.convert();
        assert_eq!(b.data(), &[1, 2, 3, 0]);
        let c: Vec2<f32> = a.convert();
        assert_eq!(c.data(), &[1.5, 2.5]);
        let d: GenericVec<f64, 3> = a.convert();
        assert_eq!(d, a);
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vec2::xy(3.0f64, 4.0);
        assert_eq!(v.sqrt_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);

        let n = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1.0e-12);
        assert_eq!(v.data(), &[3.0, 4.0]);

        let i = Vec2::xy(3i32, 4);
        assert_eq!(i.magnitude(), 5);

        let zero = Vec3::<f32>::zero().normalize();
        assert!(zero.data().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn dot_over_shared_prefix() {
        let a = Vec3::xyz(1i32, 2, 3);
        let b = Vec2::xy(4i32, 5);
        assert_eq!(a.dot(&b), 14);
        assert_eq!(b.dot(&a), 14);
        assert_eq!(Vector::dot(&a, &a), 14);
    }

    #[test]
    fn slice_conversions() {
        let v = Vec3::<i32>::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.as_ref(), &[1, 2, 3]);
        assert_eq!(
            Vec3::<i32>::try_from(&[1, 2][..]),
            Err(VectorError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        let mut w: Vec2<u16> = [7, 8].into();
        w.as_mut()[0] = 9;
        assert_eq!(w.into_array(), [9, 8]);
    }

    #[test]
    fn text_rendering() {
        assert_eq!(Vec3::xyz(1i32, 2, 3).to_string(), "3[ 1 2 3 ]");
        assert_eq!(format!("{:?}", Vec2::xy(1.5, -2.0)), "Vector([1.5, -2.0])");
        assert_eq!(GenericVec::<i8, 0>::zero().to_string(), "0[ ]");
    }
}
