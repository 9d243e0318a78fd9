//! Ошибки матричных операций

use thiserror::Error;

/// Результат операций библиотеки
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Нарушения предусловий матричных операций.
///
/// Все ошибки детерминированы: повторный вызов с теми же аргументами
/// вернёт ту же ошибку.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("матрица должна содержать хотя бы одну строку и один столбец")]
    EmptyMatrix,

    #[error("строка {row} содержит {found} элементов, ожидалось {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("некорректная размерность: {0:?}, ожидается вид 3x3")]
    InvalidShape(String),

    #[error("размерности матриц должны совпадать: {left:?} и {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("число столбцов A должно равняться числу строк B: {left:?} × {right:?}")]
    IncompatibleProduct {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("матрица должна быть квадратной размером не более 3x3, получено {rows}x{cols}")]
    UnsupportedDeterminantSize { rows: usize, cols: usize },

    #[error("матрица вырождена (определитель равен нулю)")]
    SingularMatrix,

    #[error("A должна быть квадратной, а B столбцом с тем же числом строк: A {a:?}, B {b:?}")]
    SolveShapeMismatch {
        a: (usize, usize),
        b: (usize, usize),
    },

    #[error("неизвестная операция: {0}")]
    UnknownOperation(String),

    #[error("операция {operation} требует матрицу B")]
    MissingOperand { operation: &'static str },
}
