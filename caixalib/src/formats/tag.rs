//! Кодек split-тега: "method1:amount1|method2:amount2" (например "cash:20.00|pix:45.00").
//!
//! Единственный байтово-точный контракт библиотеки: суммы ровно с двумя
//! знаками после точки, точка как десятичный разделитель, без разделителей
//! тысяч. Строка хранится в поле payment_method дословно и обязана
//! переживать parse→encode без потерь.

use crate::model::{PaymentMethod, PaymentTag, SplitPart};
use rust_decimal::{Decimal, RoundingStrategy};

/// Тег считается составным, если содержит разделитель '|'.
pub fn is_split(tag: &str) -> bool {
    tag.contains('|')
}

/// Тотальный разбор: любой вход даёт валидный PaymentTag.
///
/// Составной тег режется по '|' (берутся первые два фрагмента), каждый
/// фрагмент — по первому ':'. Отсутствующая или нечисловая сумма
/// превращается в 0 — задокументированная политика тихой деградации,
/// а не ошибка. Суммы на совпадение с total_price и различие способов
/// при чтении не проверяются: тегу, записанному кассой, верим.
pub fn parse(tag: &str) -> PaymentTag {
    if !is_split(tag) {
        return PaymentTag::Simple(PaymentMethod::from(tag));
    }
    let mut fragments = tag.split('|');
    let first = part(fragments.next().unwrap_or(""));
    let second = part(fragments.next().unwrap_or(""));
    PaymentTag::Split([first, second])
}

fn part(fragment: &str) -> SplitPart {
    let mut halves = fragment.split(':');
    let method = PaymentMethod::from(halves.next().unwrap_or(""));
    let amount = halves
        .next()
        .and_then(|s| s.trim().parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO);
    SplitPart { method, amount }
}

/// Сериализация составного платежа. Округление half-up до двух знаков.
pub fn format_split(
    method1: &PaymentMethod,
    amount1: Decimal,
    method2: &PaymentMethod,
    amount2: Decimal,
) -> String {
    format!(
        "{}:{}|{}:{}",
        method1.as_str(),
        two_places(amount1),
        method2.as_str(),
        two_places(amount2)
    )
}

/// Обратная сторона parse: тег в том виде, в котором он уходит в хранилище.
pub fn encode(tag: &PaymentTag) -> String {
    match tag {
        PaymentTag::Simple(method) => method.as_str().to_string(),
        PaymentTag::Split([a, b]) => format_split(&a.method, a.amount, &b.method, b.amount),
    }
}

/// Каноническая точка входа для финансовых разбивок.
///
/// Пустой или отсутствующий тег трактуется как наличные на полную сумму
/// (политика «неизвестное считаем наличными», не ошибка). Для составного
/// тега суммы самодостаточны и total_price игнорируется; для простого —
/// одна часть на всю сумму транзакции.
pub fn distribution(tag: Option<&str>, total_price: Decimal) -> Vec<SplitPart> {
    match tag {
        None | Some("") => vec![SplitPart {
            method: PaymentMethod::Cash,
            amount: total_price,
        }],
        Some(t) => match parse(t) {
            PaymentTag::Split(parts) => parts.to_vec(),
            PaymentTag::Simple(method) => vec![SplitPart {
                method,
                amount: total_price,
            }],
        },
    }
}

fn two_places(a: Decimal) -> String {
    format!(
        "{:.2}",
        a.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
