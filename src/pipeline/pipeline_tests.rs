#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Kind;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|s| s.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
}

#[test]
fn test_one_transaction_per_row_in_order() {
    let t = table(
        &["Date", "Amount"],
        &[
            &["2024-01-01", "-50"],
            &["not a date", "junk"],
            &["2024-01-03", "10"],
        ],
    );
    let ledger = run_pipeline(&t);
    // Unparseable rows are kept, not dropped.
    assert_eq!(ledger.transactions.len(), 3);
    assert_eq!(ledger.transactions[0].raw[1], "-50");
    assert_eq!(ledger.transactions[1].amount, None);
    assert_eq!(ledger.transactions[2].raw[0], "2024-01-03");
}

#[test]
fn test_daily_debit_scenario_from_signed_amounts() {
    // Stored sign does not double-negate: the debit of "-50" reports as 50.
    let t = table(
        &["Date", "Amount", "Type"],
        &[
            &["2024-01-01", "-50", "Debit"],
            &["2024-01-01", "100", "Credit"],
        ],
    );
    let ledger = run_pipeline(&t);
    let agg = Aggregates::compute(&ledger);

    let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(agg.daily_debit, vec![(jan1, dec!(50))]);
    assert_eq!(agg.summary.total_debit, dec!(50));
    assert_eq!(agg.summary.total_credit, dec!(100));
}

#[test]
fn test_message_keyword_fires_before_amount_sign() {
    let t = table(
        &["Date", "Amount", "Message"],
        &[&["2024-01-01", "-20", "Paid to Acme Corp for supplies"]],
    );
    let ledger = run_pipeline(&t);
    let txn = &ledger.transactions[0];
    assert_eq!(txn.kind, Kind::Debit);
    assert_eq!(txn.merchant.as_deref(), Some("Acme Corp for supplies"));
}

#[test]
fn test_explicit_type_wins_over_message() {
    let t = table(
        &["Date", "Amount", "Type", "Message"],
        &[&["2024-01-01", "10", "Debit", "amount credited to you"]],
    );
    let ledger = run_pipeline(&t);
    assert_eq!(ledger.transactions[0].kind, Kind::Debit);
}

#[test]
fn test_empty_dataset_is_not_an_error() {
    let ledger = run_pipeline(&RawTable::default());
    assert!(ledger.transactions.is_empty());

    let agg = Aggregates::compute(&ledger);
    assert_eq!(agg.summary.transaction_count, 0);
    assert!(agg.daily_debit.is_empty());
    assert!(agg.monthly.is_empty());
    assert!(agg.top_merchants.is_empty());
    assert!(agg.bank_totals.is_none());
    assert!(agg.debit_amounts.is_empty());
}

#[test]
fn test_all_non_numeric_amount_column() {
    let t = table(
        &["Date", "Amount", "Type"],
        &[
            &["2024-01-01", "N/A", "Debit"],
            &["2024-01-02", "N/A", "Credit"],
        ],
    );
    let ledger = run_pipeline(&t);
    assert!(ledger.transactions.iter().all(|t| t.amount.is_none()));

    let agg = Aggregates::compute(&ledger);
    assert_eq!(agg.monthly.len(), 1);
    assert_eq!(agg.monthly[0].debit, dec!(0));
    assert_eq!(agg.monthly[0].credit, dec!(0));
    assert_eq!(agg.monthly[0].unknown, dec!(0));
}

#[test]
fn test_unknown_headers_still_produce_transactions() {
    // Nothing resolves; the amount comes from the uniformly numeric column,
    // the date from the first column with a parseable value.
    let t = table(
        &["When", "What", "HowMuch"],
        &[
            &["2024-05-01", "groceries", "-12.50"],
            &["2024-05-02", "salary", "2000"],
        ],
    );
    let ledger = run_pipeline(&t);
    assert_eq!(ledger.roles, RoleMap::default());

    let debit = &ledger.transactions[0];
    assert_eq!(debit.amount, Some(dec!(-12.50)));
    assert_eq!(debit.kind, Kind::Debit);
    assert_eq!(debit.month.as_deref(), Some("2024-05"));

    let credit = &ledger.transactions[1];
    assert_eq!(credit.kind, Kind::Credit);
}

#[test]
fn test_bank_column_passthrough_and_grouping() {
    let t = table(
        &["Date", "Bank", "Amount", "Type"],
        &[
            &["2024-01-01", "HDFC", "-10", "Debit"],
            &["2024-01-02", "", "-5", "Debit"],
        ],
    );
    let ledger = run_pipeline(&t);
    assert_eq!(ledger.transactions[0].bank.as_deref(), Some("HDFC"));
    assert_eq!(ledger.transactions[1].bank, None);

    let agg = Aggregates::compute(&ledger);
    let banks = agg.bank_totals.unwrap();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].bank, "HDFC");
}

#[test]
fn test_raw_fields_preserved_alongside_derived() {
    let t = table(
        &["Date", "Amount", "Suspicious"],
        &[&["2024-01-01", "-50", "yes"]],
    );
    let ledger = run_pipeline(&t);
    assert_eq!(ledger.headers[2], "Suspicious");
    assert_eq!(ledger.transactions[0].raw, vec!["2024-01-01", "-50", "yes"]);
}
