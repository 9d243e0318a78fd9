//! Консольный матричный калькулятор

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use matrix_calc::{
    calculator::{apply, Operation},
    matrix::{initialize_matrix, Matrix, MatrixFill},
    render::{outcome_to_json, render_outcome, NumberFormat},
    utils::{measure_time, parse_shape},
};

#[derive(Parser, Debug)]
#[command(name = "matrix_calc", about = "Операции над матрицами A и B")]
struct Cli {
    /// Операция: add, subtract, multiply, transpose, determinant, adjoint,
    /// inverse, solve-by-inverse, row-reduce, col-reduce
    operation: String,

    #[command(flatten)]
    a: MatrixArgsA,

    #[command(flatten)]
    b: MatrixArgsB,

    /// Заполнение для --fill-a / --fill-b
    #[arg(long, value_enum, default_value_t = FillArg::Zeros)]
    fill: FillArg,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = OutputFormat::Fixed)]
    format: OutputFormat,

    /// Знаков после запятой для формата fixed
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Подробный журнал (уровень debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
#[group(id = "source_a", multiple = false)]
struct MatrixArgsA {
    /// Матрица A текстом: "1 2; 3 4"
    #[arg(long = "a", allow_hyphen_values = true)]
    a_text: Option<String>,

    /// Матрица A из JSON-файла (массив строк)
    #[arg(long = "a-file")]
    a_file: Option<PathBuf>,

    /// Сгенерировать A заданной размерности, например 3x3
    #[arg(long = "fill-a")]
    a_shape: Option<String>,
}

#[derive(Args, Debug)]
#[group(id = "source_b", multiple = false)]
struct MatrixArgsB {
    /// Матрица B текстом: "1 2; 3 4"
    #[arg(long = "b", allow_hyphen_values = true)]
    b_text: Option<String>,

    /// Матрица B из JSON-файла (массив строк)
    #[arg(long = "b-file")]
    b_file: Option<PathBuf>,

    /// Сгенерировать B заданной размерности, например 3x1
    #[arg(long = "fill-b")]
    b_shape: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FillArg {
    Zeros,
    Identity,
    Random,
}

impl From<FillArg> for MatrixFill {
    fn from(fill: FillArg) -> Self {
        match fill {
            FillArg::Zeros => MatrixFill::Zeros,
            FillArg::Identity => MatrixFill::Identity,
            FillArg::Random => MatrixFill::Random,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Fixed,
    Compact,
    Json,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Загружает матрицу из одного из источников
fn load_matrix(
    name: &str,
    text: Option<&str>,
    file: Option<&PathBuf>,
    shape: Option<&str>,
    fill: MatrixFill,
) -> Result<Option<Matrix>> {
    if let Some(text) = text {
        let m = Matrix::parse(text).with_context(|| format!("Не удалось разобрать матрицу {name}"))?;
        return Ok(Some(m));
    }
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Не удалось прочитать файл {}", path.display()))?;
        let m: Matrix = serde_json::from_str(&content)
            .with_context(|| format!("Некорректная матрица {name} в {}", path.display()))?;
        return Ok(Some(m));
    }
    if let Some(shape) = shape {
        let (rows, cols) = parse_shape(shape)?;
        debug!(name, rows, cols, ?fill, "generating matrix");
        return Ok(Some(initialize_matrix(fill, rows, cols)));
    }
    Ok(None)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let operation: Operation = cli.operation.parse()?;
    let fill = MatrixFill::from(cli.fill);

    let a = load_matrix(
        "A",
        cli.a.a_text.as_deref(),
        cli.a.a_file.as_ref(),
        cli.a.a_shape.as_deref(),
        fill,
    )?
    .context("Матрица A не задана: используйте --a, --a-file или --fill-a")?;
    let b = load_matrix(
        "B",
        cli.b.b_text.as_deref(),
        cli.b.b_file.as_ref(),
        cli.b.b_shape.as_deref(),
        fill,
    )?;

    if operation.requires_b() && b.is_none() {
        bail!("Операция {operation} требует матрицу B: используйте --b, --b-file или --fill-b");
    }

    info!(%operation, a = ?a.shape(), "starting calculation");
    let (outcome, duration) = measure_time(|| apply(operation, &a, b.as_ref()));
    debug!(?duration, "calculation finished");
    let outcome = outcome.with_context(|| format!("Операция {operation} не выполнена"))?;

    match cli.format {
        OutputFormat::Fixed => print!("{}", render_outcome(&outcome, NumberFormat::Fixed(cli.precision))),
        OutputFormat::Compact => print!("{}", render_outcome(&outcome, NumberFormat::Compact)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome_to_json(&outcome))?),
    }

    Ok(())
}
