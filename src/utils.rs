//! Вспомогательные функции и утилиты

use std::time::{Duration, Instant};

use crate::error::{MatrixError, Result};

/// Измеряет время выполнения функции
pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Разбирает размерность вида `3x4` (допускается `×` и `X`)
pub fn parse_shape(text: &str) -> Result<(usize, usize)> {
    let invalid = || MatrixError::InvalidShape(text.to_string());
    let (rows, cols) = text
        .trim()
        .split_once(['x', 'X', '×'])
        .ok_or_else(invalid)?;
    let rows: usize = rows.trim().parse().map_err(|_| invalid())?;
    let cols: usize = cols.trim().parse().map_err(|_| invalid())?;
    if rows == 0 || cols == 0 {
        return Err(invalid());
    }
    Ok((rows, cols))
}
