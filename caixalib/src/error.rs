//! Единый тип ошибок публичного API.
//!
//! Расчётное ядро (теги, сборы, агрегаты) тотально и ошибок не возвращает;
//! Result появляется только на границе CSV/ввода-вывода.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaixaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CaixaError>;
