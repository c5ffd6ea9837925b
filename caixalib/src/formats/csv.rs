//! CSV-леджер и CSV-отчёт. Заголовки леджера:
//! date,total_price,payment_method,barber_name,barber_commission_rate

use crate::{
    error::{CaixaError, Result},
    model::{Barber, Transaction},
    report::Report,
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct LedgerRow {
    date: String,
    total_price: String,
    payment_method: Option<String>,
    barber_name: Option<String>,
    barber_commission_rate: Option<String>,
}

#[derive(serde::Serialize)]
struct ReportRow<'a> {
    method: &'a str,
    label: &'a str,
    gross: String,
    card_fee: String,
    net: String,
    commission: String,
    count: u64,
}

pub struct Csv;

impl crate::traits::ReadLedger for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Transaction>> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut transactions = Vec::new();

        for rec in rdr.deserialize::<LedgerRow>() {
            let row = rec?;

            let barber = match row.barber_name {
                Some(name) if !name.is_empty() => Some(Barber {
                    name,
                    commission_rate: match row.barber_commission_rate.as_deref() {
                        Some(s) if !s.is_empty() => Some(s.parse::<Decimal>().map_err(|e| {
                            CaixaError::Parse(format!("barber_commission_rate: {e}"))
                        })?),
                        _ => None,
                    },
                }),
                _ => None,
            };

            transactions.push(Transaction {
                date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                    .map_err(|e| CaixaError::Parse(format!("date: {e}")))?,
                total_price: row
                    .total_price
                    .parse::<Decimal>()
                    .map_err(|e| CaixaError::Parse(format!("total_price: {e}")))?,
                // тег хранится дословно; пустая ячейка означает отсутствие
                payment_method: row.payment_method.filter(|s| !s.is_empty()),
                barber,
            });
        }

        Ok(transactions)
    }
}

impl crate::traits::WriteReport for Csv {
    fn write<W: Write>(mut w: W, report: &Report) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for (method, bucket) in &report.by_method {
            wrt.serialize(ReportRow {
                method: method.as_str(),
                label: method.label(),
                gross: money(bucket.total),
                card_fee: money(bucket.card_fee),
                net: money(bucket.net_value),
                commission: money(bucket.commission),
                count: bucket.count,
            })?;
        }

        // итоговая строка из плоских итогов; count здесь — число транзакций
        wrt.serialize(ReportRow {
            method: "total",
            label: "Total",
            gross: money(report.totals.gross),
            card_fee: money(report.totals.card_fees),
            net: money(report.totals.net),
            commission: money(report.totals.commission),
            count: report.transaction_count as u64,
        })?;

        wrt.flush()?;
        Ok(())
    }
}

/// Валютное представление: два знака, half-up только на выводе.
fn money(a: Decimal) -> String {
    format!(
        "{:.2}",
        a.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
