//! Модуль для работы с матрицами
//!
//! Предоставляет:
//! - Тип матрицы и её преобразования
//! - Арифметику, определитель, обратную матрицу
//! - Приведение к ступенчатому виду

mod types;
pub mod operations;
pub mod echelon;
pub mod generate;

pub use types::{Matrix, MatrixFill};
pub use operations::{
    add, adjoint, determinant, inverse, multiply, solve_by_inverse, subtract, transpose,
};
pub use echelon::{col_reduce, row_reduce, Axis};
pub use generate::initialize_matrix;
