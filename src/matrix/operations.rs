//! Операции над матрицами
//!
//! Все функции чистые: аргументы не изменяются, результат всегда новая
//! матрица или скаляр.

use tracing::trace;

use super::types::Matrix;
use crate::error::{MatrixError, Result};

/// Наибольший размер, для которого считается определитель
pub const MAX_DETERMINANT_SIZE: usize = 3;

fn elementwise(a: &Matrix, b: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_raw(a.rows(), a.cols(), data))
}

/// Поэлементная сумма A + B
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    elementwise(a, b, |x, y| x + y)
}

/// Поэлементная разность A − B
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    elementwise(a, b, |x, y| x - y)
}

/// Произведение A × B.
///
/// Каждый элемент накапливается слева направо по общему индексу.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::IncompatibleProduct {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let (rows, inner, cols) = (a.rows(), a.cols(), b.cols());
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut c = vec![0.0f64; rows * cols];

    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0.0f64;
            for k in 0..inner {
                sum += a[i * inner + k] * b[k * cols + j];
            }
            c[i * cols + j] = sum;
        }
    }

    Ok(Matrix::from_raw(rows, cols, c))
}

/// Транспонирование: `result[i][j] = A[j][i]`
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = a.shape();
    let src = a.as_slice();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(src[i * cols + j]);
        }
    }
    Matrix::from_raw(cols, rows, data)
}

/// Определитель квадратной матрицы размером до 3x3 по явным формулам
pub fn determinant(a: &Matrix) -> Result<f64> {
    let m = |i, j| a.get(i, j);
    match a.shape() {
        (1, 1) => Ok(m(0, 0)),
        (2, 2) => Ok(m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)),
        (3, 3) => Ok(m(0, 0) * m(1, 1) * m(2, 2)
            + m(0, 1) * m(1, 2) * m(2, 0)
            + m(0, 2) * m(1, 0) * m(2, 1)
            - m(0, 2) * m(1, 1) * m(2, 0)
            - m(0, 1) * m(1, 0) * m(2, 2)
            - m(0, 0) * m(1, 2) * m(2, 1)),
        (rows, cols) => Err(MatrixError::UnsupportedDeterminantSize { rows, cols }),
    }
}

fn ensure_supported(a: &Matrix) -> Result<()> {
    if !a.is_square() || a.rows() > MAX_DETERMINANT_SIZE {
        return Err(MatrixError::UnsupportedDeterminantSize {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

/// Алгебраическое дополнение элемента (i, j).
///
/// Определитель пустого минора матрицы 1x1 равен 1.
fn cofactor(a: &Matrix, i: usize, j: usize) -> Result<f64> {
    let minor_det = match a.minor(i, j) {
        Some(minor) => determinant(&minor)?,
        None => 1.0,
    };
    let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(sign * minor_det)
}

/// Присоединённая матрица: транспонированная матрица алгебраических дополнений
pub fn adjoint(a: &Matrix) -> Result<Matrix> {
    ensure_supported(a)?;

    let n = a.rows();
    let mut cofactors = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cofactors.push(cofactor(a, i, j)?);
        }
    }

    Ok(transpose(&Matrix::from_raw(n, n, cofactors)))
}

/// Обратная матрица через присоединённую: `adj(A) / det(A)`
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    let det = determinant(a)?;
    if det == 0.0 {
        return Err(MatrixError::SingularMatrix);
    }
    trace!(det, "inverse via adjoint");
    Ok(adjoint(a)?.map(|v| v / det))
}

/// Решение системы `A·X = B` как `X = A⁻¹ × B`.
///
/// A должна быть квадратной, B столбцом с тем же числом строк.
pub fn solve_by_inverse(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if !a.is_square() || b.cols() != 1 || b.rows() != a.rows() {
        return Err(MatrixError::SolveShapeMismatch {
            a: a.shape(),
            b: b.shape(),
        });
    }
    multiply(&inverse(a)?, b)
}
