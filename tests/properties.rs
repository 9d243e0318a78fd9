//! Свойства матричных операций на случайных входных данных

use matrix_calc::matrix::{
    add, col_reduce, determinant, inverse, multiply, row_reduce, subtract, transpose, Matrix,
};
use matrix_calc::MatrixError;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn matrix_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-100.0_f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_flat(rows, cols, data).expect("length matches shape"))
}

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(r, c)| matrix_with_shape(r, c))
}

/// Квадратные матрицы до `max`x`max` с целыми элементами
fn small_square(max: usize) -> impl Strategy<Value = Matrix> {
    (1_usize..=max).prop_flat_map(|n| {
        prop::collection::vec(-9_i32..10, n * n).prop_map(move |data| {
            Matrix::from_flat(n, n, data.into_iter().map(f64::from).collect())
                .expect("length matches shape")
        })
    })
}

proptest! {
    #[test]
    fn prop_add_then_subtract_recovers(
        (a, b) in (1_usize..6, 1_usize..6)
            .prop_flat_map(|(r, c)| (matrix_with_shape(r, c), matrix_with_shape(r, c)))
    ) {
        let back = subtract(&add(&a, &b).unwrap(), &b).unwrap();
        prop_assert!(back.approx_eq(&a, EPS));
    }

    #[test]
    fn prop_transpose_involution(a in any_matrix()) {
        prop_assert_eq!(transpose(&transpose(&a)), a);
    }

    #[test]
    fn prop_identity_is_neutral(a in any_matrix()) {
        let left = multiply(&Matrix::identity(a.rows()), &a).unwrap();
        let right = multiply(&a, &Matrix::identity(a.cols())).unwrap();
        prop_assert_eq!(&left, &a);
        prop_assert_eq!(&right, &a);
    }

    #[test]
    fn prop_inverse_gives_identity(a in small_square(3)) {
        let det = determinant(&a).unwrap();
        match inverse(&a) {
            Ok(inv) => {
                let product = multiply(&a, &inv).unwrap();
                prop_assert!(product.approx_eq(&Matrix::identity(a.rows()), 1e-6));
            }
            Err(err) => {
                prop_assert_eq!(det, 0.0);
                prop_assert_eq!(err, MatrixError::SingularMatrix);
            }
        }
    }

    #[test]
    fn prop_col_reduce_is_transposed_row_reduce(a in any_matrix()) {
        prop_assert_eq!(col_reduce(&a), transpose(&row_reduce(&transpose(&a))));
    }

    #[test]
    fn prop_row_reduce_of_invertible_is_identity(a in small_square(2)) {
        prop_assume!(determinant(&a).unwrap() != 0.0);
        prop_assert!(row_reduce(&a).approx_eq(&Matrix::identity(a.rows()), 1e-6));
    }

    #[test]
    fn prop_mismatched_product_fails(
        (a, b) in (1_usize..5, 1_usize..5, 1_usize..5)
            .prop_filter("inner dimensions differ", |(_, k, l)| k != l)
            .prop_flat_map(|(r, k, l)| (matrix_with_shape(r, k), matrix_with_shape(l, 2)))
    ) {
        let is_incompatible = matches!(
            multiply(&a, &b),
            Err(MatrixError::IncompatibleProduct { .. })
        );
        prop_assert!(is_incompatible);
    }
}
