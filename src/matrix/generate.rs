//! Генерация матриц заданного размера

use rand::Rng;

use super::types::{Matrix, MatrixFill};

/// Создаёт матрицу rows×cols, заполненную согласно `fill`.
///
/// Нулевые размеры заменяются на 1, как и в [`Matrix::zeros`].
pub fn initialize_matrix(fill: MatrixFill, rows: usize, cols: usize) -> Matrix {
    match fill {
        MatrixFill::Zeros => Matrix::zeros(rows, cols),
        MatrixFill::Identity => {
            let base = Matrix::zeros(rows, cols);
            let cols = base.cols();
            let data = (0..base.as_slice().len())
                .map(|idx| if idx / cols == idx % cols { 1.0 } else { 0.0 })
                .collect();
            Matrix::from_raw(base.rows(), cols, data)
        }
        MatrixFill::Random => {
            let (rows, cols) = (rows.max(1), cols.max(1));
            let mut rng = rand::thread_rng();
            let data = (0..rows * cols).map(|_| rng.gen_range(0.0..1.0)).collect();
            Matrix::from_raw(rows, cols, data)
        }
    }
}
