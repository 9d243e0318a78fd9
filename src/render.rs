//! Отображение результатов: таблицы и JSON

use prettytable::{Cell, Row, Table};
use serde_json::json;

use crate::calculator::{Outcome, Value};
use crate::matrix::Matrix;

/// Формат чисел в выводе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Фиксированное число знаков после запятой
    Fixed(usize),
    /// Целые без дробной части, остальные с тремя знаками
    Compact,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Fixed(2)
    }
}

/// Форматирует одно значение
pub fn format_value(value: f64, format: NumberFormat) -> String {
    // -0 выводится как 0
    let value = if value == 0.0 { 0.0 } else { value };
    match format {
        NumberFormat::Fixed(precision) => format!("{value:.precision$}"),
        NumberFormat::Compact if value.is_finite() && value.fract() == 0.0 => format!("{value}"),
        NumberFormat::Compact => format!("{value:.3}"),
    }
}

/// Строит таблицу из матрицы
pub fn render_table(matrix: &Matrix, format: NumberFormat) -> Table {
    let mut table = Table::new();
    for i in 0..matrix.rows() {
        let cells = matrix
            .row(i)
            .iter()
            .map(|&v| Cell::new(&format_value(v, format)).style_spec("r"))
            .collect();
        table.add_row(Row::new(cells));
    }
    table
}

/// Таблица результата и описание операции
pub fn render_outcome(outcome: &Outcome, format: NumberFormat) -> String {
    let table = render_table(&outcome.result.to_matrix(), format);
    format!("{table}{}\n", outcome.description)
}

/// JSON-представление результата
pub fn outcome_to_json(outcome: &Outcome) -> serde_json::Value {
    let result = match &outcome.result {
        Value::Matrix(m) => json!(m.to_rows()),
        Value::Scalar(v) => json!(v),
    };
    json!({
        "operation": outcome.operation,
        "description": outcome.description,
        "result": result,
    })
}
