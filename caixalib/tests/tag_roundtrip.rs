use caixalib::formats::tag;
use caixalib::model::{PaymentMethod, PaymentTag, SplitPart};
use rust_decimal::Decimal;

#[test]
fn simple_tag_takes_total_price() {
    let parts = tag::distribution(Some("pix"), Decimal::new(5000, 2));
    assert_eq!(
        parts,
        vec![SplitPart {
            method: PaymentMethod::Pix,
            amount: Decimal::new(5000, 2),
        }]
    );
}

#[test]
fn missing_tag_defaults_to_cash() {
    let parts = tag::distribution(None, Decimal::from(100));
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].method, PaymentMethod::Cash);
    assert_eq!(parts[0].amount, Decimal::from(100));

    // пустая строка трактуется так же
    let parts = tag::distribution(Some(""), Decimal::from(100));
    assert_eq!(parts[0].method, PaymentMethod::Cash);
    assert_eq!(parts[0].amount, Decimal::from(100));
}

#[test]
fn split_tag_ignores_total_price() {
    let parts = tag::distribution(Some("credit_card:30.00|pix:70.00"), Decimal::from(999));
    assert_eq!(
        parts,
        vec![
            SplitPart {
                method: PaymentMethod::CreditCard,
                amount: Decimal::new(3000, 2),
            },
            SplitPart {
                method: PaymentMethod::Pix,
                amount: Decimal::new(7000, 2),
            },
        ]
    );
}

#[test]
fn format_then_parse_roundtrip() {
    let s = tag::format_split(
        &PaymentMethod::Cash,
        Decimal::new(2000, 2),
        &PaymentMethod::Pix,
        Decimal::new(4550, 2),
    );
    assert_eq!(s, "cash:20.00|pix:45.50");

    match tag::parse(&s) {
        PaymentTag::Split(parts) => {
            assert_eq!(parts[0].method, PaymentMethod::Cash);
            assert_eq!(parts[0].amount, Decimal::new(2000, 2));
            assert_eq!(parts[1].method, PaymentMethod::Pix);
            assert_eq!(parts[1].amount, Decimal::new(4550, 2));
        }
        other => panic!("expected split, got {other:?}"),
    }

    // encode восстанавливает исходную строку
    assert_eq!(tag::encode(&tag::parse(&s)), s);
}

#[test]
fn format_pads_and_rounds_to_two_places() {
    let s = tag::format_split(
        &PaymentMethod::Cash,
        Decimal::from(20),
        &PaymentMethod::DebitCard,
        Decimal::new(45505, 3), // 45.505 -> half-up
    );
    assert_eq!(s, "cash:20.00|debit_card:45.51");
}

#[test]
fn malformed_amount_parses_to_zero() {
    match tag::parse("cash:abc|pix:70.00") {
        PaymentTag::Split(parts) => {
            assert_eq!(parts[0].amount, Decimal::ZERO);
            assert_eq!(parts[1].amount, Decimal::new(7000, 2));
        }
        other => panic!("expected split, got {other:?}"),
    }

    // сумма вообще отсутствует
    match tag::parse("cash|pix:70.00") {
        PaymentTag::Split(parts) => {
            assert_eq!(parts[0].method, PaymentMethod::Cash);
            assert_eq!(parts[0].amount, Decimal::ZERO);
        }
        other => panic!("expected split, got {other:?}"),
    }
}

#[test]
fn unknown_method_passes_through() {
    let parts = tag::distribution(Some("voucher"), Decimal::from(10));
    assert_eq!(parts[0].method, PaymentMethod::Other("voucher".into()));
    assert_eq!(parts[0].amount, Decimal::from(10));
}

#[test]
fn is_split_checks_separator() {
    assert!(tag::is_split("cash:20.00|pix:45.00"));
    assert!(!tag::is_split("cash"));
    assert!(!tag::is_split(""));
}
