use thiserror::Error;

/// Failures that escape to the top-level boundary in `main`.
///
/// Validation retries never become errors; they are handled locally by the
/// input loops. Everything here propagates untouched via `?`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("argumento inválido: {what}")]
    InvalidArgument { what: String },

    #[error("a lista de notas está vazia")]
    EmptyGrades,

    #[error("ano atual fora do intervalo: {year} (mínimo aceito: 1900)")]
    YearOutOfRange { year: i32 },

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
