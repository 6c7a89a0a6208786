#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn txn(amount: Option<rust_decimal::Decimal>, kind: Kind) -> Transaction {
    Transaction {
        raw: vec![],
        amount,
        timestamp: None,
        date: None,
        month: None,
        weekday: None,
        kind,
        merchant: None,
        bank: None,
    }
}

// ── RawTable ──────────────────────────────────────────────────

#[test]
fn test_raw_table_pads_ragged_rows() {
    let table = RawTable::new(
        vec!["Date".into(), "Amount".into(), "Message".into()],
        vec![vec!["2024-01-01".into(), "-50".into()]],
    );
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.cell(0, 2), "");
}

#[test]
fn test_raw_table_cell_out_of_range() {
    let table = RawTable::new(vec!["A".into()], vec![vec!["x".into()]]);
    assert_eq!(table.cell(0, 5), "");
    assert_eq!(table.cell(9, 0), "");
}

#[test]
fn test_raw_table_column_iterates_rows_in_order() {
    let table = RawTable::new(
        vec!["A".into(), "B".into()],
        vec![
            vec!["1".into(), "x".into()],
            vec!["2".into(), "y".into()],
        ],
    );
    let col: Vec<&str> = table.column(1).collect();
    assert_eq!(col, vec!["x", "y"]);
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_abs_amount() {
    assert_eq!(txn(Some(dec!(-50)), Kind::Debit).abs_amount(), Some(dec!(50)));
    assert_eq!(txn(Some(dec!(100)), Kind::Credit).abs_amount(), Some(dec!(100)));
    assert_eq!(txn(None, Kind::Unknown).abs_amount(), None);
}

#[test]
fn test_kind_display_lowercase() {
    assert_eq!(Kind::Debit.to_string(), "debit");
    assert_eq!(Kind::Credit.to_string(), "credit");
    assert_eq!(Kind::Unknown.to_string(), "unknown");
}
