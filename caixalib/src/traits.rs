//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Transaction, report::Report};
use std::io::{BufRead, Write};

/// Чтение леджера завершённых транзакций.
pub trait ReadLedger {
    fn read<R: BufRead>(r: R) -> Result<Vec<Transaction>>;
}

/// Запись готового отчёта.
pub trait WriteReport {
    fn write<W: Write>(w: W, report: &Report) -> Result<()>;
}
