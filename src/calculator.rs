//! Выбор и выполнение операции калькулятора

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{self, Matrix};

/// Операция над матрицами A и B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
    Adjoint,
    Inverse,
    SolveByInverse,
    RowReduce,
    ColReduce,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
        Operation::Adjoint,
        Operation::Inverse,
        Operation::SolveByInverse,
        Operation::RowReduce,
        Operation::ColReduce,
    ];

    /// Идентификатор операции
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
            Operation::Determinant => "determinant",
            Operation::Adjoint => "adjoint",
            Operation::Inverse => "inverse",
            Operation::SolveByInverse => "solve-by-inverse",
            Operation::RowReduce => "row-reduce",
            Operation::ColReduce => "col-reduce",
        }
    }

    /// Использует ли операция матрицу B
    pub fn requires_b(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::SolveByInverse
        )
    }

    /// Краткое описание выполненного действия
    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Поэлементное сложение.",
            Operation::Subtract => "Поэлементное вычитание.",
            Operation::Multiply => "Произведение матриц A × B.",
            Operation::Transpose => "Транспонирование матрицы A.",
            Operation::Determinant => "Вычислен определитель матрицы A.",
            Operation::Adjoint => "Вычислена присоединённая матрица A.",
            Operation::Inverse => "Вычислена обратная матрица A.",
            Operation::SolveByInverse => "Решение системы X = A⁻¹ × B найдено.",
            Operation::RowReduce => {
                "Матрица A приведена к ступенчатому виду элементарными преобразованиями строк."
            }
            Operation::ColReduce => {
                "Матрица A приведена к ступенчатому виду элементарными преобразованиями столбцов."
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" => Operation::Add,
            "subtract" => Operation::Subtract,
            "multiply" => Operation::Multiply,
            "transpose" => Operation::Transpose,
            "determinant" => Operation::Determinant,
            "adjoint" => Operation::Adjoint,
            "inverse" => Operation::Inverse,
            "solve-by-inverse" | "solve-inverse" => Operation::SolveByInverse,
            "row-reduce" | "obe" => Operation::RowReduce,
            "col-reduce" | "oke" => Operation::ColReduce,
            _ => return Err(MatrixError::UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

/// Значение результата: матрица или скаляр
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Matrix(Matrix),
    Scalar(f64),
}

impl Value {
    /// Матричное представление: скаляр отображается как матрица 1x1
    pub fn to_matrix(&self) -> Matrix {
        match self {
            Value::Matrix(m) => m.clone(),
            Value::Scalar(v) => Matrix::from_raw(1, 1, vec![*v]),
        }
    }
}

/// Результат операции калькулятора
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub operation: Operation,
    pub result: Value,
    pub description: &'static str,
}

/// Выполняет операцию `op` над A и (при необходимости) B
pub fn apply(op: Operation, a: &Matrix, b: Option<&Matrix>) -> Result<Outcome> {
    debug!(
        operation = %op,
        a = ?a.shape(),
        b = ?b.map(Matrix::shape),
        "applying operation"
    );

    let need_b = || {
        b.ok_or(MatrixError::MissingOperand {
            operation: op.as_str(),
        })
    };

    let result = match op {
        Operation::Add => Value::Matrix(matrix::add(a, need_b()?)?),
        Operation::Subtract => Value::Matrix(matrix::subtract(a, need_b()?)?),
        Operation::Multiply => Value::Matrix(matrix::multiply(a, need_b()?)?),
        Operation::Transpose => Value::Matrix(matrix::transpose(a)),
        Operation::Determinant => Value::Scalar(matrix::determinant(a)?),
        Operation::Adjoint => Value::Matrix(matrix::adjoint(a)?),
        Operation::Inverse => Value::Matrix(matrix::inverse(a)?),
        Operation::SolveByInverse => Value::Matrix(matrix::solve_by_inverse(a, need_b()?)?),
        Operation::RowReduce => Value::Matrix(matrix::row_reduce(a)),
        Operation::ColReduce => Value::Matrix(matrix::col_reduce(a)),
    };

    Ok(Outcome {
        operation: op,
        result,
        description: op.description(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn test_parse_ids_and_aliases() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
        assert_eq!("obe".parse::<Operation>().unwrap(), Operation::RowReduce);
        assert_eq!("OKE".parse::<Operation>().unwrap(), Operation::ColReduce);
        assert_eq!(
            "solve-inverse".parse::<Operation>().unwrap(),
            Operation::SolveByInverse
        );
        assert_eq!(
            "power".parse::<Operation>(),
            Err(MatrixError::UnknownOperation("power".to_string()))
        );
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Operation::SolveByInverse).unwrap();
        assert_eq!(json, "\"solve-by-inverse\"");
        let op: Operation = serde_json::from_str("\"col-reduce\"").unwrap();
        assert_eq!(op, Operation::ColReduce);
    }

    #[test]
    fn test_apply_determinant_is_scalar() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0]];
        let outcome = apply(Operation::Determinant, &a, None).unwrap();
        assert_eq!(outcome.result, Value::Scalar(-2.0));
        assert_eq!(outcome.result.to_matrix(), matrix![[-2.0]]);
        assert_eq!(outcome.description, Operation::Determinant.description());
    }

    #[test]
    fn test_apply_binary_requires_b() {
        let a = matrix![[1.0]];
        for op in Operation::ALL.into_iter().filter(|op| op.requires_b()) {
            assert_eq!(
                apply(op, &a, None),
                Err(MatrixError::MissingOperand {
                    operation: op.as_str()
                })
            );
        }
    }

    #[test]
    fn test_apply_unary_ignores_b() {
        let a = matrix![[2.0, 4.0], [1.0, 3.0]];
        let b = matrix![[9.0]];
        let outcome = apply(Operation::RowReduce, &a, Some(&b)).unwrap();
        assert_eq!(outcome.result, Value::Matrix(Matrix::identity(2)));
    }

    #[test]
    fn test_apply_propagates_errors() {
        let a = matrix![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(
            apply(Operation::Inverse, &a, None),
            Err(MatrixError::SingularMatrix)
        );
        let b = matrix![[1.0, 2.0, 3.0]];
        assert!(matches!(
            apply(Operation::Multiply, &a, Some(&b)),
            Err(MatrixError::IncompatibleProduct { .. })
        ));
    }

    #[test]
    fn test_apply_solve() {
        let a = matrix![[2.0, 0.0], [0.0, 2.0]];
        let b = matrix![[4.0], [6.0]];
        let outcome = apply(Operation::SolveByInverse, &a, Some(&b)).unwrap();
        assert_eq!(outcome.result, Value::Matrix(matrix![[2.0], [3.0]]));
    }
}
