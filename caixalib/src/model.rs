//! Доменные модели — единый «нормализованный» слой между леджером и расчётами.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Способ оплаты. Закрытый набор известных тегов плюс сквозной `Other`:
/// неопознанная строка сохраняется дословно и не считается ошибкой.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentMethod {
    Cash,
    Pix,
    DebitCard,
    CreditCard,
    Courtesy,
    FidelityCourtesy,
    Other(String),
}

impl PaymentMethod {
    /// Известные способы в порядке, в котором их показывает касса.
    pub const KNOWN: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::Pix,
        PaymentMethod::DebitCard,
        PaymentMethod::CreditCard,
        PaymentMethod::Courtesy,
        PaymentMethod::FidelityCourtesy,
    ];

    /// Тег в том виде, в котором он хранится в поле payment_method.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Pix => "pix",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Courtesy => "courtesy",
            PaymentMethod::FidelityCourtesy => "fidelity_courtesy",
            PaymentMethod::Other(s) => s,
        }
    }

    /// Подпись для отчётов (как в кассовом интерфейсе).
    pub fn label(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::DebitCard => "Débito",
            PaymentMethod::CreditCard => "Crédito",
            PaymentMethod::Courtesy => "Cortesia",
            PaymentMethod::FidelityCourtesy => "Fidelidade",
            PaymentMethod::Other(s) => s,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(s: &str) -> Self {
        match s {
            "cash" => PaymentMethod::Cash,
            "pix" => PaymentMethod::Pix,
            "debit_card" => PaymentMethod::DebitCard,
            "credit_card" => PaymentMethod::CreditCard,
            "courtesy" => PaymentMethod::Courtesy,
            "fidelity_courtesy" => PaymentMethod::FidelityCourtesy,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Сериализация — всегда строкой-тегом, чтобы round-trip был без потерь.
impl Serialize for PaymentMethod {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Ok(PaymentMethod::from(s.as_str()))
    }
}

/// Одна часть распределения платежа: способ и сумма, которая им закрыта.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitPart {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

/// Разобранное значение поля payment_method: либо один способ на всю сумму,
/// либо составной платёж ровно из двух частей с собственными суммами.
/// Строковая форма живёт только на границе сериализации (formats::tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentTag {
    Simple(PaymentMethod),
    Split([SplitPart; 2]),
}

/// База расчёта комиссии мастера: до или после эквайрингового сбора.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommissionBase {
    Gross,
    Net,
}

impl Default for CommissionBase {
    fn default() -> Self {
        CommissionBase::Gross
    }
}

/// Настройки сборов и комиссий. Проценты «человеческие»: 3.0 означает 3%.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub debit_card_fee_percent: Decimal,
    pub credit_card_fee_percent: Decimal,
    pub commission_base: CommissionBase,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debit_card_fee_percent: Decimal::new(15, 1),  // 1.5%
            credit_card_fee_percent: Decimal::new(30, 1), // 3.0%
            commission_base: CommissionBase::Gross,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Barber {
    pub name: String,
    /// Процент мастера; отсутствие означает ставку по умолчанию (50%).
    pub commission_rate: Option<Decimal>,
}

/// Завершённая транзакция, как её отдаёт слой данных.
/// payment_method хранится дословно (возможно, составной тег) и разбирается
/// только в момент расчёта.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub total_price: Decimal,
    pub payment_method: Option<String>,
    pub barber: Option<Barber>,
}
