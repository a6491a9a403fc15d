//! Algebraic properties of the vector and matrix operations.
//!
//! Integer elements in a small range keep every product exact, so equality
//! checks need no tolerance.

use proptest::prelude::*;
use venus_core::prelude::*;

fn small() -> impl Strategy<Value = i64> {
    -50_i64..50
}

fn vec_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1_usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(small(), n),
            prop::collection::vec(small(), n),
        )
    })
}

fn three() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(small(), 3)
}

fn square() -> impl Strategy<Value = Matrix<i64>> {
    (1_usize..6).prop_flat_map(|n| {
        prop::collection::vec(small(), n * n)
            .prop_map(move |data| Matrix::from_vec(n, n, data).unwrap())
    })
}

fn rect() -> impl Strategy<Value = Matrix<i64>> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(r, c)| {
        prop::collection::vec(small(), r * c)
            .prop_map(move |data| Matrix::from_vec(r, c, data).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_dot_commutative((u, v) in vec_pair()) {
        let u = Vector::from_vec(u);
        let v = Vector::from_vec(v);
        prop_assert_eq!(u.dot(&v).unwrap(), v.dot(&u).unwrap());
    }

    #[test]
    fn prop_add_then_subtract_restores((u, v) in vec_pair()) {
        let u = Vector::from_vec(u);
        let v = Vector::from_vec(v);
        let mut sum = Vector::unshaped();
        sum.add(&u, &v).unwrap();
        let mut back = Vector::unshaped();
        back.subtract(&sum, &v).unwrap();
        prop_assert_eq!(back, u);
    }

    #[test]
    fn prop_color_add_then_subtract_restores(
        (u, v) in (1_usize..8).prop_flat_map(|n| {
            (prop::collection::vec(any::<u8>(), n), prop::collection::vec(any::<u8>(), n))
        })
    ) {
        let u = ColorVector::from_vec(u);
        let v = ColorVector::from_vec(v);
        let mut sum = ColorVector::unshaped();
        sum.add(&u, &v).unwrap();
        let mut back = ColorVector::unshaped();
        back.subtract(&sum, &v).unwrap();
        prop_assert_eq!(back, u);
    }

    #[test]
    fn prop_cross_anticommutative(u in three(), v in three()) {
        let u = Vector::from_vec(u);
        let v = Vector::from_vec(v);

        let mut uv = Vector::unshaped();
        uv.cross(&u, &v).unwrap();
        let mut vu = Vector::unshaped();
        vu.cross(&v, &u).unwrap();
        let mut neg_vu = Vector::unshaped();
        neg_vu.negate(&vu).unwrap();
        prop_assert_eq!(&uv, &neg_vu);

        // Destination aliasing the left operand.
        let mut aliased_lhs = u.clone();
        aliased_lhs.cross_assign(&v).unwrap();
        prop_assert_eq!(&aliased_lhs, &uv);

        // Destination aliasing the right operand.
        let mut aliased_rhs = u.clone();
        aliased_rhs.cross_assign_rhs(&v).unwrap();
        prop_assert_eq!(&aliased_rhs, &vu);
    }

    #[test]
    fn prop_cross_orthogonal(u in three(), v in three()) {
        let u = Vector::from_vec(u);
        let v = Vector::from_vec(v);
        let mut w = Vector::unshaped();
        w.cross(&u, &v).unwrap();
        prop_assert_eq!(w.dot(&u).unwrap(), 0);
        prop_assert_eq!(w.dot(&v).unwrap(), 0);
    }

    #[test]
    fn prop_transpose_involution(a in rect()) {
        let back = a.transposed().unwrap().transposed().unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_transpose_in_place_matches_copy(a in square()) {
        let copied = a.transposed().unwrap();
        let mut in_place = a.clone();
        in_place.transpose_in_place().unwrap();
        prop_assert_eq!(&in_place, &copied);
        in_place.transpose_in_place().unwrap();
        prop_assert_eq!(in_place, a);
    }

    #[test]
    fn prop_det_2x2(a in small(), b in small(), c in small(), d in small()) {
        let m = Matrix::from_vec(2, 2, vec![a, b, c, d]).unwrap();
        prop_assert_eq!(m.determinant().unwrap(), a * d - b * c);
    }

    #[test]
    fn prop_det_invariant_under_transpose(a in square()) {
        prop_assert_eq!(
            a.determinant().unwrap(),
            a.transposed().unwrap().determinant().unwrap()
        );
    }

    #[test]
    fn prop_multiply_identity(a in square()) {
        let eye = Matrix::identity(a.rows()).unwrap();
        prop_assert_eq!(a.matmul(&eye).unwrap(), a.clone());
        prop_assert_eq!(eye.matmul(&a).unwrap(), a);
    }

    #[test]
    fn prop_product_transpose(a in rect(), extra in 1_usize..5, seed in small()) {
        // (A·B)ᵀ = Bᵀ·Aᵀ for a B built to fit A.
        let k = a.cols();
        let data = (0..k * extra).map(|i| seed + i64::try_from(i).unwrap() % 7).collect();
        let b = Matrix::from_vec(k, extra, data).unwrap();
        let lhs = a.matmul(&b).unwrap().transposed().unwrap();
        let rhs = b.transposed().unwrap().matmul(&a.transposed().unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}

// ----------------------------------------------------------------------
// Fixed scenarios
// ----------------------------------------------------------------------

#[test]
fn add_length_mismatch_is_rejected() {
    let a = vector![1.0_f32, 2.0, 3.0];
    let b = vector![1.0_f32, 2.0, 3.0, 4.0];
    let mut c = Vector::unshaped();
    assert_eq!(
        c.add(&a, &b),
        Err(CoreError::ShapeMismatch {
            expected: Shape::vector(3),
            got: Shape::vector(4),
        })
    );
}

#[test]
fn multiply_2x3_by_2x2_is_rejected() {
    let a = Matrix::<f32>::zeros(2, 3).unwrap();
    let b = Matrix::<f32>::zeros(2, 2).unwrap();
    let mut c = Matrix::unshaped();
    assert!(matches!(
        c.multiply(&a, &b),
        Err(CoreError::ShapeMismatch { .. })
    ));
}

#[test]
fn transpose_2x4_into_fresh_destination() {
    let m = matrix![[1, 2, 3, 4], [5, 6, 7, 8]].unwrap();
    let mut t = Matrix::unshaped();
    t.transpose(&m).unwrap();
    let expected = matrix![[1, 5], [2, 6], [3, 7], [4, 8]].unwrap();
    assert_eq!(t.shape(), Shape::matrix(4, 2));
    assert_eq!(t, expected);
}

#[test]
fn resize_round_trip_keeps_prefix() {
    let mut v = Vector::<f32>::zeros(4).unwrap();
    v.as_mut_slice().copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
    v.resize(6).unwrap();
    assert_eq!(v.len(), 6);
    assert_eq!(&v.as_slice()[..4], &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn cross_on_non_three_vector_is_unsupported() {
    let a = vector![1, 2];
    let b = vector![3, 4];
    let mut c = Vector::unshaped();
    assert!(matches!(
        c.cross(&a, &b),
        Err(CoreError::UnsupportedOperation { .. })
    ));
}

#[test]
fn allocation_failure_is_reported() {
    assert!(matches!(
        Matrix::<f64>::zeros(usize::MAX, usize::MAX),
        Err(CoreError::AllocationFailure { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_validates_shape() {
    let m = matrix![[1, 2], [3, 4]].unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let bad = r#"{"shape":{"Matrix":{"rows":2,"cols":2}},"data":[1,2,3]}"#;
    assert!(serde_json::from_str::<Matrix<i32>>(bad).is_err());

    let as_vector = serde_json::from_str::<Vector<i32>>(&json);
    assert!(as_vector.is_err());
}
