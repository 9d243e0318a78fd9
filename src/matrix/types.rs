//! Типы матриц и связанные структуры

use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MatrixError, Result};

/// Способ заполнения генерируемой матрицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixFill {
    /// Все элементы равны нулю
    Zeros,
    /// Единицы на главной диагонали
    Identity,
    /// Случайные значения из [0, 1)
    Random,
}

/// Плотная матрица f64, хранение построчное.
///
/// Матрица всегда прямоугольная и содержит хотя бы один элемент.
/// Операции не изменяют аргументы, а возвращают новые значения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Создаёт матрицу из списка строк
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Создаёт матрицу из плоского буфера `data[i * cols + j]`
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(MatrixError::RaggedRows {
                row: data.len() / cols,
                expected: cols,
                found: data.len() % cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Нулевая матрица. Нулевые размеры заменяются на 1.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Единичная матрица n×n
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..m.rows {
            m.data[i * m.cols + i] = 1.0;
        }
        m
    }

    /// Разбирает матрицу из текста.
    ///
    /// Строки разделяются `;` или переводом строки, элементы пробелами или
    /// запятыми. Нечисловой элемент считается нулём, как в полях ввода
    /// калькулятора.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<f64>> = text
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| {
                        cell.parse::<f64>().unwrap_or_else(|_| {
                            warn!(cell, "нечисловой элемент заменён нулём");
                            0.0
                        })
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Размерность (строки, столбцы)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Элемент (i, j). Паникует при выходе за границы.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        self.data[i * self.cols + j]
    }

    /// Строка i как срез
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Плоский построчный буфер
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Применяет функцию к каждому элементу
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Минор: матрица без строки `row` и столбца `col`.
    ///
    /// Возвращает `None`, если после удаления не остаётся элементов.
    pub fn minor(&self, row: usize, col: usize) -> Option<Self> {
        if self.rows < 2 || self.cols < 2 {
            return None;
        }
        let data = (0..self.rows)
            .filter(|&i| i != row)
            .flat_map(|i| {
                (0..self.cols)
                    .filter(move |&j| j != col)
                    .map(move |j| self.data[i * self.cols + j])
            })
            .collect();
        Some(Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }

    /// Поэлементное сравнение с допуском
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Сборка из заведомо согласованных частей
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(array: Array2<f64>) -> Result<Self> {
        let (rows, cols) = array.dim();
        Self::from_flat(rows, cols, array.iter().copied().collect())
    }
}

impl From<&Matrix> for Array2<f64> {
    fn from(m: &Matrix) -> Self {
        Array2::from_shape_fn(m.shape(), |(i, j)| m.data[i * m.cols + j])
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_and_ragged() {
        assert_eq!(Matrix::new(vec![]), Err(MatrixError::EmptyMatrix));
        assert_eq!(Matrix::new(vec![vec![]]), Err(MatrixError::EmptyMatrix));
        assert_eq!(
            Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_shape_and_access() {
        let m = crate::matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert!(!m.is_square());
    }

    #[test]
    fn test_parse_is_lenient() {
        let m = Matrix::parse("1 2, 3; 4 x 6\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 6.0]]);

        assert!(matches!(
            Matrix::parse("1 2; 3"),
            Err(MatrixError::RaggedRows { row: 1, .. })
        ));
        assert_eq!(Matrix::parse("  ; "), Err(MatrixError::EmptyMatrix));
    }

    #[test]
    fn test_minor() {
        let m = crate::matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let minor = m.minor(1, 0).unwrap();
        assert_eq!(minor.to_rows(), vec![vec![2.0, 3.0], vec![8.0, 9.0]]);
        assert!(crate::matrix![[5.0]].minor(0, 0).is_none());
    }

    #[test]
    fn test_serde_validates_shape() {
        let m: Matrix = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1.0,2.0],[3.0,4.0]]");

        assert!(serde_json::from_str::<Matrix>("[[1, 2], [3]]").is_err());
        assert!(serde_json::from_str::<Matrix>("[]").is_err());
    }

    #[test]
    fn test_ndarray_conversion() {
        let m = crate::matrix![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let array = Array2::from(&m);
        assert_eq!(array.dim(), (3, 2));
        assert_eq!(array[[2, 1]], 6.0);
        assert_eq!(Matrix::try_from(array).unwrap(), m);

        let empty = Array2::<f64>::zeros((0, 3));
        assert_eq!(Matrix::try_from(empty), Err(MatrixError::EmptyMatrix));
    }

    #[test]
    fn test_zeros_and_identity() {
        assert_eq!(Matrix::zeros(0, 2).shape(), (1, 2));
        let eye = Matrix::identity(3);
        assert_eq!(eye.get(1, 1), 1.0);
        assert_eq!(eye.get(0, 2), 0.0);
    }
}
