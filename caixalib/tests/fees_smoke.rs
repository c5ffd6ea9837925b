use caixalib::fees::{card_fee, commission, net_value, profit, DEFAULT_COMMISSION_RATE};
use caixalib::model::{CommissionBase, PaymentMethod, Settings};
use rust_decimal::Decimal;

fn settings(base: CommissionBase) -> Settings {
    Settings {
        debit_card_fee_percent: Decimal::new(15, 1),  // 1.5%
        credit_card_fee_percent: Decimal::new(30, 1), // 3.0%
        commission_base: base,
    }
}

#[test]
fn fee_only_on_cards() {
    let s = settings(CommissionBase::Gross);
    let hundred = Decimal::from(100);

    assert_eq!(card_fee(hundred, &PaymentMethod::Cash, &s), Decimal::ZERO);
    assert_eq!(card_fee(hundred, &PaymentMethod::Pix, &s), Decimal::ZERO);
    assert_eq!(
        card_fee(hundred, &PaymentMethod::Courtesy, &s),
        Decimal::ZERO
    );
    assert_eq!(
        card_fee(hundred, &PaymentMethod::FidelityCourtesy, &s),
        Decimal::ZERO
    );
    assert_eq!(
        card_fee(hundred, &PaymentMethod::Other("voucher".into()), &s),
        Decimal::ZERO
    );

    assert_eq!(
        card_fee(hundred, &PaymentMethod::DebitCard, &s),
        Decimal::new(15, 1)
    );
    assert_eq!(
        card_fee(hundred, &PaymentMethod::CreditCard, &s),
        Decimal::from(3)
    );
}

#[test]
fn net_plus_fee_equals_amount() {
    let s = settings(CommissionBase::Gross);
    let amount = Decimal::new(12345, 2); // 123.45
    for method in &PaymentMethod::KNOWN {
        assert_eq!(
            net_value(amount, method, &s) + card_fee(amount, method, &s),
            amount
        );
    }
}

#[test]
fn default_rate_on_net_base() {
    // net = 100 - 1.5 = 98.5; комиссия = 98.5 * 50% = 49.25
    let s = settings(CommissionBase::Net);
    let c = commission(Decimal::from(100), &PaymentMethod::DebitCard, None, &s);
    assert_eq!(c, Decimal::new(4925, 2));
}

#[test]
fn explicit_rate_on_gross_base() {
    let s = settings(CommissionBase::Gross);
    let c = commission(
        Decimal::from(100),
        &PaymentMethod::DebitCard,
        Some(Decimal::from(40)),
        &s,
    );
    assert_eq!(c, Decimal::from(40));
}

#[test]
fn profit_plus_commission_equals_net() {
    let amount = Decimal::new(8050, 2); // 80.50
    let rate = Some(Decimal::from(45));
    for base in [CommissionBase::Gross, CommissionBase::Net] {
        let s = settings(base);
        for method in &PaymentMethod::KNOWN {
            assert_eq!(
                profit(amount, method, rate, &s) + commission(amount, method, rate, &s),
                net_value(amount, method, &s)
            );
        }
    }
}

#[test]
fn courtesy_commission_is_formula_driven() {
    // отдельного правила нет: на нулевой сумме ноль, на ненулевой — нет
    let s = settings(CommissionBase::Gross);
    assert_eq!(
        commission(Decimal::ZERO, &PaymentMethod::Courtesy, None, &s),
        Decimal::ZERO
    );
    assert_eq!(
        commission(Decimal::from(10), &PaymentMethod::Courtesy, None, &s),
        Decimal::from(5)
    );
}

#[test]
fn default_commission_rate_is_half() {
    assert_eq!(DEFAULT_COMMISSION_RATE, Decimal::from(50));
}
