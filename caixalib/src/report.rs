//! Агрегация транзакций: плоские итоги, разбивка по способам оплаты,
//! отчётные периоды. Свёртка коммутативна — порядок транзакций не влияет
//! на результат.

use crate::fees;
use crate::formats::tag;
use crate::model::{PaymentMethod, Settings, Transaction};
use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Плоские итоги за период. Суммируются сырые значения без округления;
/// округление до валютных знаков — забота слоя вывода.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub gross: Decimal,
    pub card_fees: Decimal,
    pub net: Decimal,
    pub commission: Decimal,
    pub profit: Decimal,
}

/// Накопитель одного способа оплаты.
///
/// count растёт на каждую часть распределения: составной платёж увеличивает
/// счётчики двух способов, оставаясь при этом одной транзакцией. Это
/// намеренное свойство учёта, а не баг.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MethodBucket {
    pub total: Decimal,
    pub card_fee: Decimal,
    pub net_value: Decimal,
    pub commission: Decimal,
    pub count: u64,
}

/// Итоги по всем частям распределения всех транзакций. Часть с неопознанным
/// способом сюда попадает наравне с остальными.
pub fn aggregate(transactions: &[Transaction], settings: &Settings) -> Totals {
    let mut acc = Totals::default();
    for tx in transactions {
        let rate = tx.barber.as_ref().and_then(|b| b.commission_rate);
        for part in tag::distribution(tx.payment_method.as_deref(), tx.total_price) {
            acc.gross += part.amount;
            acc.card_fees += fees::card_fee(part.amount, &part.method, settings);
            acc.net += fees::net_value(part.amount, &part.method, settings);
            acc.commission += fees::commission(part.amount, &part.method, rate, settings);
            acc.profit += fees::profit(part.amount, &part.method, rate, settings);
        }
    }
    acc
}

/// Разбивка по шести известным способам. Части с тегом `Other` в карту
/// не попадают (молча отбрасываются), хотя в плоских итогах учитываются —
/// эту асимметрию сохраняем сознательно.
pub fn aggregate_by_method(
    transactions: &[Transaction],
    settings: &Settings,
) -> BTreeMap<PaymentMethod, MethodBucket> {
    let mut map: BTreeMap<PaymentMethod, MethodBucket> = PaymentMethod::KNOWN
        .iter()
        .cloned()
        .map(|m| (m, MethodBucket::default()))
        .collect();

    for tx in transactions {
        let rate = tx.barber.as_ref().and_then(|b| b.commission_rate);
        for part in tag::distribution(tx.payment_method.as_deref(), tx.total_price) {
            if let Some(bucket) = map.get_mut(&part.method) {
                bucket.total += part.amount;
                bucket.card_fee += fees::card_fee(part.amount, &part.method, settings);
                bucket.net_value += fees::net_value(part.amount, &part.method, settings);
                bucket.commission += fees::commission(part.amount, &part.method, rate, settings);
                bucket.count += 1;
            }
        }
    }
    map
}

/// Готовый отчёт, который потребляют writer-ы и CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub totals: Totals,
    pub by_method: BTreeMap<PaymentMethod, MethodBucket>,
    /// Число транзакций, не частей распределения.
    pub transaction_count: usize,
}

impl Report {
    pub fn build(transactions: &[Transaction], settings: &Settings) -> Self {
        Report {
            totals: aggregate(transactions, settings),
            by_method: aggregate_by_method(transactions, settings),
            transaction_count: transactions.len(),
        }
    }
}

/// Отчётный период; обе границы включительны.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Диапазон дат относительно опорной: неделя — ISO-неделя (пн–вс),
    /// месяц — календарный месяц опорной даты.
    pub fn date_range(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            Period::Today => (reference, reference),
            Period::Week => {
                let monday = reference
                    - Duration::days(i64::from(reference.weekday().num_days_from_monday()));
                (monday, monday + Duration::days(6))
            }
            Period::Month => {
                let start = reference.with_day(1).unwrap_or(reference);
                let end = match start.checked_add_months(Months::new(1)) {
                    Some(next_month) => next_month - Duration::days(1),
                    None => reference,
                };
                (start, end)
            }
            Period::Custom { start, end } => (start, end),
        }
    }

    /// Транзакции, попавшие в период.
    pub fn filter(&self, transactions: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
        let (start, end) = self.date_range(reference);
        transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect()
    }
}

/// Транзакции одного мастера (точное совпадение имени).
pub fn filter_by_barber(transactions: &[Transaction], name: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.barber.as_ref().is_some_and(|b| b.name == name))
        .cloned()
        .collect()
}
