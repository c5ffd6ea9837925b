//! caixalib — кассовая математика барбершопа: split-теги оплат,
//! эквайринговые сборы, комиссии мастеров и отчётные агрегаты.

pub mod error;
pub mod fees;
pub mod model;
pub mod report;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod tag;
}
