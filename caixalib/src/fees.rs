//! Движок эквайринговых сборов и комиссий мастеров.
//!
//! Все функции тотальны и работают на паре (сумма, способ) — им всё равно,
//! пришла пара из простого платежа или из части составного. Никакого
//! особого правила для courtesy нет: комиссия считается по общей формуле,
//! а ноль получается потому, что сумма courtesy-части равна нулю.

use crate::model::{CommissionBase, PaymentMethod, Settings};
use rust_decimal::Decimal;

/// Ставка мастера по умолчанию, в процентах.
pub const DEFAULT_COMMISSION_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Эквайринговый сбор: берётся только с карточных способов.
pub fn card_fee(amount: Decimal, method: &PaymentMethod, settings: &Settings) -> Decimal {
    match method {
        PaymentMethod::DebitCard => amount * settings.debit_card_fee_percent / HUNDRED,
        PaymentMethod::CreditCard => amount * settings.credit_card_fee_percent / HUNDRED,
        _ => Decimal::ZERO,
    }
}

/// Сумма за вычетом сбора. Инвариант: net_value + card_fee == amount.
pub fn net_value(amount: Decimal, method: &PaymentMethod, settings: &Settings) -> Decimal {
    amount - card_fee(amount, method, settings)
}

/// Комиссия мастера. Отсутствующая ставка означает 50%;
/// база — брутто или нетто, согласно настройкам.
pub fn commission(
    amount: Decimal,
    method: &PaymentMethod,
    rate: Option<Decimal>,
    settings: &Settings,
) -> Decimal {
    let rate = rate.unwrap_or(DEFAULT_COMMISSION_RATE);
    let base = match settings.commission_base {
        CommissionBase::Gross => amount,
        CommissionBase::Net => net_value(amount, method, settings),
    };
    base * rate / HUNDRED
}

/// Прибыль заведения. Инвариант: profit + commission == net_value.
pub fn profit(
    amount: Decimal,
    method: &PaymentMethod,
    rate: Option<Decimal>,
    settings: &Settings,
) -> Decimal {
    net_value(amount, method, settings) - commission(amount, method, rate, settings)
}
