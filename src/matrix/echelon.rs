//! Приведение к ступенчатому виду (метод Гаусса–Жордана)
//!
//! Построчное и постолбцовое приведение выполняет один и тот же алгоритм:
//! [`Axis`] задаёт, что считать "линией" (строкой или столбцом).

use tracing::trace;

use super::types::Matrix;

/// Ориентация элементарных преобразований
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Элементарные преобразования строк
    Row,
    /// Элементарные преобразования столбцов
    Column,
}

/// Рабочая копия матрицы, адресуемая как (линия, позиция)
struct Lines {
    matrix: Matrix,
    axis: Axis,
}

impl Lines {
    fn new(matrix: &Matrix, axis: Axis) -> Self {
        Self {
            matrix: matrix.clone(),
            axis,
        }
    }

    /// Число линий
    fn count(&self) -> usize {
        match self.axis {
            Axis::Row => self.matrix.rows(),
            Axis::Column => self.matrix.cols(),
        }
    }

    /// Длина одной линии
    fn len(&self) -> usize {
        match self.axis {
            Axis::Row => self.matrix.cols(),
            Axis::Column => self.matrix.rows(),
        }
    }

    fn index(&self, line: usize, pos: usize) -> usize {
        match self.axis {
            Axis::Row => line * self.matrix.cols() + pos,
            Axis::Column => pos * self.matrix.cols() + line,
        }
    }

    fn at(&self, line: usize, pos: usize) -> f64 {
        self.matrix.as_slice()[self.index(line, pos)]
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for pos in 0..self.len() {
            let (ia, ib) = (self.index(a, pos), self.index(b, pos));
            self.matrix.data_mut().swap(ia, ib);
        }
    }

    /// Делит линию на значение её ведущего элемента
    fn normalize(&mut self, line: usize, lead: usize) {
        let pivot = self.at(line, lead);
        if pivot == 0.0 {
            return;
        }
        for pos in 0..self.len() {
            let idx = self.index(line, pos);
            self.matrix.data_mut()[idx] /= pivot;
        }
    }

    /// Обнуляет позицию `lead` во всех линиях, кроме опорной
    fn eliminate(&mut self, pivot_line: usize, lead: usize) {
        for line in 0..self.count() {
            if line == pivot_line {
                continue;
            }
            let factor = self.at(line, lead);
            for pos in 0..self.len() {
                let value = self.at(pivot_line, pos);
                let idx = self.index(line, pos);
                self.matrix.data_mut()[idx] -= factor * value;
            }
        }
    }

    /// Ищет линию не выше `from` с ненулевым элементом в позиции `lead`
    fn find_pivot(&self, from: usize, lead: usize) -> Option<usize> {
        (from..self.count()).find(|&line| self.at(line, lead) != 0.0)
    }
}

/// Приводит матрицу к приведённому ступенчатому виду вдоль `axis`.
///
/// Опорный элемент выбирается как первый ненулевой; частичного выбора
/// ведущего элемента нет. Аргумент не изменяется.
pub fn reduce(matrix: &Matrix, axis: Axis) -> Matrix {
    let mut lines = Lines::new(matrix, axis);
    let (count, len) = (lines.count(), lines.len());
    let mut lead = 0;

    for r in 0..count {
        if lead >= len {
            break;
        }

        let pivot_line = loop {
            match lines.find_pivot(r, lead) {
                Some(line) => break line,
                None => {
                    lead += 1;
                    if lead == len {
                        return lines.matrix;
                    }
                }
            }
        };

        trace!(?axis, line = r, pivot_line, lead, "pivot selected");
        lines.swap(pivot_line, r);
        lines.normalize(r, lead);
        lines.eliminate(r, lead);
        lead += 1;
    }

    lines.matrix
}

/// Приведённый ступенчатый вид по строкам (элементарные преобразования строк)
pub fn row_reduce(matrix: &Matrix) -> Matrix {
    reduce(matrix, Axis::Row)
}

/// Приведённый ступенчатый вид по столбцам (элементарные преобразования столбцов)
pub fn col_reduce(matrix: &Matrix) -> Matrix {
    reduce(matrix, Axis::Column)
}
