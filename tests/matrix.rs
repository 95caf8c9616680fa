//! Algebraic properties and worked examples for `Matrix`, checked under
//! both storage layouts.

use lanemat::{make_matrix, ColumnMajor, LaneVector, Layout, Matrix, RowMajor};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_int<L: Layout, const M: usize, const N: usize>(rng: &mut StdRng) -> Matrix<i64, M, N, L> {
    Matrix::from_fn(|_, _| rng.random_range(-50..=50))
}

fn random_float<L: Layout, const M: usize, const N: usize>(
    rng: &mut StdRng,
) -> Matrix<f64, M, N, L> {
    Matrix::from_fn(|_, _| rng.random_range(-10.0..10.0))
}

fn to_ndarray<T, L, const M: usize, const N: usize>(m: &Matrix<T, M, N, L>) -> Array2<T>
where
    T: lanemat::Element,
    L: Layout,
{
    Array2::from_shape_fn((M, N), |(i, j)| m.element(i, j))
}

fn assert_close<L: Layout, const M: usize, const N: usize>(
    a: &Matrix<f64, M, N, L>,
    b: &Matrix<f64, M, N, L>,
    tolerance: f64,
) {
    for i in 0..M {
        for j in 0..N {
            let (x, y) = (a.element(i, j), b.element(i, j));
            assert!(
                (x - y).abs() <= tolerance * (1.0 + x.abs().max(y.abs())),
                "element ({i}, {j}): {x} vs {y}"
            );
        }
    }
}

fn identity_is_neutral<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let x: Matrix<i64, 4, 4, L> = random_int(&mut rng);
        let i = Matrix::<i64, 4, 4, L>::identity();
        assert_eq!(i * x, x);
        assert_eq!(x * i, x);

        let r: Matrix<i64, 3, 5, L> = random_int(&mut rng);
        assert_eq!(Matrix::<i64, 3, 3, L>::identity() * r, r);
        assert_eq!(r * Matrix::<i64, 5, 5, L>::identity(), r);
    }
}

fn double_transpose_round_trips<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let x: Matrix<i64, 3, 7, L> = random_int(&mut rng);
        let t = x.transpose();
        assert_eq!(t.transpose(), x);

        for i in 0..3 {
            for j in 0..7 {
                assert_eq!(t.element(j, i), x.element(i, j));
            }
        }
    }
}

fn addition_is_associative<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let a: Matrix<i64, 5, 3, L> = random_int(&mut rng);
        let b: Matrix<i64, 5, 3, L> = random_int(&mut rng);
        let c: Matrix<i64, 5, 3, L> = random_int(&mut rng);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b - b, a);
    }
}

fn multiplication_is_associative<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let a: Matrix<f64, 3, 4, L> = random_float(&mut rng);
        let b: Matrix<f64, 4, 5, L> = random_float(&mut rng);
        let c: Matrix<f64, 5, 2, L> = random_float(&mut rng);
        assert_close(&((a * b) * c), &(a * (b * c)), 1e-12);

        let x: Matrix<i64, 3, 4, L> = random_int(&mut rng);
        let y: Matrix<i64, 4, 4, L> = random_int(&mut rng);
        let z: Matrix<i64, 4, 2, L> = random_int(&mut rng);
        assert_eq!((x * y) * z, x * (y * z));
    }
}

fn product_matches_ndarray<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let a: Matrix<i64, 6, 5, L> = random_int(&mut rng);
        let b: Matrix<i64, 5, 7, L> = random_int(&mut rng);
        let v = LaneVector::from_array(std::array::from_fn::<i64, 5, _>(|i| i as i64 - 2));
        let w = LaneVector::from_array(std::array::from_fn::<i64, 6, _>(|i| 3 - i as i64));

        let expected = to_ndarray(&a).dot(&to_ndarray(&b));
        assert_eq!(to_ndarray(&(a * b)), expected);

        let av = to_ndarray(&a).dot(&ndarray::arr1(v.as_array()));
        assert_eq!((a * v).to_array().to_vec(), av.to_vec());

        let wa = ndarray::arr1(w.as_array()).dot(&to_ndarray(&a));
        assert_eq!((w * a).to_array().to_vec(), wa.to_vec());
    }
}

fn compound_multiply_matches_product<L: Layout>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..20 {
        let a: Matrix<i64, 3, 4, L> = random_int(&mut rng);
        let b: Matrix<i64, 4, 4, L> = random_int(&mut rng);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);

        let mut d = a;
        d *= 3;
        assert_eq!(d, a * 3);
        assert_eq!(d, 3 * a);
    }
}

macro_rules! for_both_layouts {
    ($($name:ident => $check:ident($seed:expr);)*) => {
        mod column_major {
            use super::*;
            $(
                #[test]
                fn $name() {
                    $check::<ColumnMajor>($seed);
                }
            )*
        }

        mod row_major {
            use super::*;
            $(
                #[test]
                fn $name() {
                    $check::<RowMajor>($seed);
                }
            )*
        }
    };
}

for_both_layouts! {
    test_identity_is_neutral => identity_is_neutral(1);
    test_double_transpose => double_transpose_round_trips(2);
    test_addition_is_associative => addition_is_associative(3);
    test_multiplication_is_associative => multiplication_is_associative(4);
    test_product_matches_ndarray => product_matches_ndarray(5);
    test_compound_multiply => compound_multiply_matches_product(6);
}

#[test]
fn test_identity_3x3() {
    let i = Matrix::<f32, 3, 3>::identity();
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(i.element(r, c), if r == c { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_make_matrix_fills_rows() {
    let m = make_matrix!(f32, 2, 2; 1.0, 2.0, 3.0, 4.0);
    assert_eq!(m.element(0, 0), 1.0);
    assert_eq!(m.element(0, 1), 2.0);
    assert_eq!(m.element(1, 0), 3.0);
    assert_eq!(m.element(1, 1), 4.0);

    let r = make_matrix!(f32, 2, 2, RowMajor; 1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.to_rows(), m.to_rows());
}

#[test]
fn test_integer_product_2x3_by_3x2() {
    let a = make_matrix!(i32, 2, 3, ColumnMajor; 1, 2, 3, 4, 5, 6);
    let b = make_matrix!(i32, 3, 2, ColumnMajor; 7, 8, 9, 10, 11, 12);
    assert_eq!((a * b).to_rows(), [[58, 64], [139, 154]]);

    let a = make_matrix!(i32, 2, 3, RowMajor; 1, 2, 3, 4, 5, 6);
    let b = make_matrix!(i32, 3, 2, RowMajor; 7, 8, 9, 10, 11, 12);
    assert_eq!((a * b).to_rows(), [[58, 64], [139, 154]]);
}

#[test]
fn test_divide_then_multiply_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    let s = 3.7f32;

    for _ in 0..20 {
        let m = Matrix::<f32, 3, 4>::from_fn(|_, _| rng.random_range(-100.0..100.0));
        let back = (m / s) * s;

        for i in 0..3 {
            for j in 0..4 {
                let (x, y) = (m.element(i, j), back.element(i, j));
                assert!((x - y).abs() <= 1e-5 * x.abs().max(1.0), "{x} vs {y}");
            }
        }
    }
}

#[test]
fn test_display_and_debug() {
    let m = make_matrix!(i32, 2, 2; 1, 2, 3, 4);
    assert_eq!(format!("{m}"), "[1, 2\n 3, 4]");
    assert!(format!("{m:?}").contains("rows: [[1, 2], [3, 4]]"));
}

#[test]
fn test_try_from_slice() {
    let values = [1.5f64, 2.5, 3.5, 4.5, 5.5, 6.5];

    let m = Matrix::<f64, 3, 2>::try_from(&values[..]).unwrap();
    assert_eq!(m.to_rows(), [[1.5, 2.5], [3.5, 4.5], [5.5, 6.5]]);

    let err = Matrix::<f64, 2, 2>::try_from(&values[..]).unwrap_err();
    assert_eq!(
        err,
        lanemat::LaneMatError::ElementCount {
            expected: 4,
            actual: 6
        }
    );
}
