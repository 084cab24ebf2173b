//! Dimension-specific constructors and cross products.

use super::{Vec2, Vec3, Vec4};
use crate::Scalar;

impl<T: Scalar> Vec2<T> {
    /// Creates a vector from its `x` and `y` components.
    #[inline]
    pub fn xy(x: T, y: T) -> Self { Self::from_array([x, y]) }

    /// Returns the 2D cross product `self.x * rhs.y - self.y * rhs.x`, the
    /// signed area of the parallelogram spanned by both vectors.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T { self.base.cross(&rhs.base) }
}

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from its `x`, `y` and `z` components.
    #[inline]
    pub fn xyz(x: T, y: T, z: T) -> Self { Self::from_array([x, y, z]) }

    /// Returns the cross product of `self` and `rhs`.
    #[inline]
    #[must_use]
    pub fn cross(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.cross_this(rhs);
        out
    }

    /// Replaces `self` with the cross product of `self` and `rhs`.
    #[inline]
    pub fn cross_this(&mut self, rhs: &Self) -> &mut Self {
        self.base.cross_assign(&rhs.base);
        self
    }
}

impl<T: Scalar> Vec4<T> {
    /// Creates a vector from its `x`, `y`, `z` and `w` components.
    #[inline]
    pub fn xyzw(x: T, y: T, z: T, w: T) -> Self { Self::from_array([x, y, z, w]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Xyz;

    #[test]
    fn cross_2d() {
        let e0 = Vec2::xy(1.0f32, 0.0);
        let e1 = Vec2::xy(0.0f32, 1.0);
        assert_eq!(Vec2::cross(&e0, &e1), 1.0);
        assert_eq!(e1.cross(&e0), -1.0);
        assert_eq!(e0.cross(&e0), 0.0);
    }

    #[test]
    fn cross_3d_basis() {
        let x = Vec3::xyz(1i32, 0, 0);
        let y = Vec3::xyz(0i32, 1, 0);
        let z = Vec3::xyz(0i32, 0, 1);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(Vec3::cross(&y, &x), -z);
    }

    #[test]
    fn cross_3d_forms_agree() {
        let a = Vec3::xyz(2.0f64, 3.0, 4.0);
        let b = Vec3::xyz(5.0f64, 6.0, 7.0);
        let expected = Vec3::xyz(-3.0f64, 6.0, -3.0);

        assert_eq!(a.cross(&b), expected);

        let mut c = a;
        c.cross_this(&b).normalize_this();
        assert_eq!(c, expected.normalize());

        let mut d = a;
        Xyz::cross_assign(&mut d, &b);
        assert_eq!(d, expected);
        // The product is orthogonal to both operands.
        assert_eq!(d.dot(&a), 0.0);
        assert_eq!(d.dot(&b), 0.0);
    }
}
