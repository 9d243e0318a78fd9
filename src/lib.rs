//! Матричный калькулятор: арифметика, определители, обратные матрицы
//! и приведение к ступенчатому виду

pub mod calculator;
pub mod error;
pub mod matrix;
pub mod render;
pub mod utils;

// Макросы доступны на уровне крейта
#[macro_use]
mod macros {
    /// Макрос для записи матрицы построчно
    ///
    /// ```
    /// let m = matrix_calc::matrix![[1.0, 2.0], [3.0, 4.0]];
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    ///
    /// Паникует, если строки разной длины.
    #[macro_export]
    macro_rules! matrix {
        ($([$($x:expr),+ $(,)?]),+ $(,)?) => {
            $crate::matrix::Matrix::new(vec![$(vec![$(f64::from($x)),+]),+])
                .expect("matrix! requires rows of equal length")
        };
    }
}

// Реэкспорт основных типов для удобства
pub use calculator::{apply, Operation, Outcome, Value};
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, MatrixFill};
