use approx::assert_relative_eq;
use proptest::prelude::*;
use vecn::{GenericVec, Layout, Vec2, Vec3, Vec4, VecN, VectorError, Xyz};

#[test]
fn zero_vectors() {
    let v2 = Vec2::<f32>::zero();
    let v3 = VecN::<f64, 3>::zero();
    let v4 = Vec4::<i64>::zero();
    assert!((0..2).all(|i| v2.get(i) == 0.0));
    assert!((0..3).all(|i| v3.get(i) == 0.0));
    assert!((0..4).all(|i| v4.get(i) == 0));
}

#[test]
fn named_and_indexed_views_agree() {
    let mut v = Vec3::from_array([1i32, 2, 3]);
    assert_eq!(v.x(), 1);
    assert_eq!(v.y(), 2);
    assert_eq!(v.z(), 3);
    assert_eq!(v[0], v.x());
    assert_eq!(v[1], v.y());
    assert_eq!(v[2], v.z());

    // Every mutation path keeps both views in sync.
    *v.y_mut() = 7;
    assert_eq!(v[1], 7);
    v.data_mut()[2] = 9;
    assert_eq!(v.z(), 9);
    v -= Vec2::xy(1i32, 1);
    assert_eq!((v.x(), v.y(), v.z()), (v[0], v[1], v[2]));
    assert_eq!(v.data(), &[0, 6, 9]);
}

#[test]
fn layout_selection_by_dimension() {
    let v: VecN<f32, 2> = Vec2::xy(1.0, 2.0);
    assert_eq!(v.y(), 2.0);
    let w: VecN<f32, 4> = Vec4::xyzw(1.0, 2.0, 3.0, 4.0);
    assert_eq!(w.w(), 4.0);
    assert_eq!(<Xyz<f32> as Layout<f32, 3>>::name_of(2), Some("z"));

    let g = VecN::<u32, 6>::new([1, 2, 3, 4, 5, 6]);
    assert_eq!(g.sqrt_magnitude(), 91);
    let big = GenericVec::<u8, 100>::zero();
    assert_eq!(GenericVec::<u8, 100>::DIM, 100);
    assert_eq!(big.get(99), 0);
}

#[test]
fn cross_products() {
    assert_eq!(
        Vec3::xyz(1.0f64, 0.0, 0.0).cross(&Vec3::xyz(0.0, 1.0, 0.0)),
        Vec3::xyz(0.0f64, 0.0, 1.0)
    );
    assert_eq!(Vec2::xy(1.0f64, 0.0).cross(&Vec2::xy(0.0, 1.0)), 1.0);
}

#[test]
fn truncation_follows_left_operand() {
    let a = Vec3::xyz(1i32, 2, 3);
    let b = Vec2::xy(10i32, 20);

    let sum = a + b;
    assert_eq!(sum.data(), &[11, 22, 3]);

    let mut c = a;
    c.set(&b);
    assert_eq!(c.data(), &[10, 20, 3]);

    let widened: Vec4<f32> = b.convert();
    assert_eq!(widened.data(), &[10.0, 20.0, 0.0, 0.0]);
}

#[test]
fn out_of_range_read_clamps() {
    let v = Vec3::xyz(1.0f32, 2.0, 3.0);
    assert_eq!(v.get(5), 0.0);
    assert_eq!(
        v.try_get(5),
        Err(VectorError::IndexOutOfBounds { index: 5, dim: 3 })
    );
}

#[test]
fn cross_kind_equality() {
    assert_eq!(Vec3::xyz(1i32, 2, 3), Vec3::xyz(1.0f64, 2.0, 3.0));
    assert_eq!(Vec3::xyz(1.0f64, 2.0, 3.0), Vec3::xyz(1i32, 2, 3));
    assert_ne!(Vec3::xyz(1i32, 2, 3), Vec3::xyz(1.5f64, 2.0, 3.0));
    assert_ne!(Vec3::xyz(1.5f64, 2.0, 3.0), Vec3::xyz(1i32, 2, 3));
}

#[test]
fn normalize_leaves_original() {
    let v = Vec3::xyz(1.0f32, 2.0, 2.0);
    let n = v.normalize();
    assert_eq!(v.magnitude(), 3.0);
    assert_relative_eq!(n.x(), 1.0 / 3.0);
    assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1.0e-6);
}

fn vec4() -> impl Strategy<Value = Vec4<f64>> {
    prop::array::uniform4(-1.0e3f64..1.0e3).prop_map(Vec4::from_array)
}

proptest! {
    #[test]
    fn commutative_addition(a in vec4(), b in vec4()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn subtracting_self_gives_zero(a in vec4()) {
        prop_assert_eq!(a - a, Vec4::<f64>::zero());
    }

    #[test]
    fn unit_length_after_normalize(a in vec4()) {
        prop_assume!(a.sqrt_magnitude() > 1.0e-6);
        prop_assert!((a.normalize().magnitude() - 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn symmetric_dot(a in vec4(), b in vec4()) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn scalar_multiplication_commutes(a in vec4(), s in -1.0e3f64..1.0e3) {
        prop_assert_eq!(a * s, s * a);
    }
}
