#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn classifier() -> Classifier {
    Classifier::default()
}

// ── Precedence ────────────────────────────────────────────────

#[test]
fn test_explicit_type_exact_match() {
    let c = classifier();
    assert_eq!(c.classify(Some("Debit"), None, Some(dec!(100))), Kind::Debit);
    assert_eq!(c.classify(Some(" credit "), None, Some(dec!(-5))), Kind::Credit);
}

#[test]
fn test_explicit_type_beats_message_keyword() {
    // type="Debit" with a message containing "credited" is still a debit.
    let c = classifier();
    let kind = c.classify(Some("Debit"), Some("amount credited to you"), Some(dec!(10)));
    assert_eq!(kind, Kind::Debit);
}

#[test]
fn test_type_substring_rules() {
    let c = classifier();
    assert_eq!(c.classify(Some("debited from a/c"), None, None), Kind::Debit);
    assert_eq!(c.classify(Some("CREDIT CARD"), None, None), Kind::Credit);
}

#[test]
fn test_unrecognized_type_falls_to_amount_sign_not_message() {
    let c = classifier();
    // Type column exists but the value matches nothing; the message would
    // say credit, but precedence goes straight to the amount sign.
    let kind = c.classify(Some("transfer"), Some("credited to account"), Some(dec!(-30)));
    assert_eq!(kind, Kind::Debit);
}

#[test]
fn test_message_keywords_when_no_type_column() {
    let c = classifier();
    assert_eq!(
        c.classify(None, Some("Paid to Acme Corp for supplies"), Some(dec!(-20))),
        Kind::Debit
    );
    assert_eq!(
        c.classify(None, Some("salary credited"), Some(dec!(-1))),
        Kind::Credit
    );
    assert_eq!(
        c.classify(None, Some("ATM withdrawal at Main St"), None),
        Kind::Debit
    );
}

#[test]
fn test_message_step_fires_before_amount_sign() {
    let c = classifier();
    // "Paid" matches before the sign is even consulted; a positive amount
    // does not flip the result.
    assert_eq!(
        c.classify(None, Some("Paid to Acme"), Some(dec!(20))),
        Kind::Debit
    );
}

#[test]
fn test_amount_sign_fallback() {
    let c = classifier();
    assert_eq!(c.classify(None, None, Some(dec!(-50))), Kind::Debit);
    assert_eq!(c.classify(None, None, Some(dec!(100))), Kind::Credit);
    assert_eq!(c.classify(None, None, Some(dec!(0))), Kind::Unknown);
    assert_eq!(c.classify(None, None, None), Kind::Unknown);
}

#[test]
fn test_bland_message_falls_to_amount_sign() {
    let c = classifier();
    assert_eq!(
        c.classify(None, Some("monthly settlement"), Some(dec!(40))),
        Kind::Credit
    );
}

#[test]
fn test_custom_keywords() {
    let c = Classifier::new(&["spent"], &["received"]);
    assert_eq!(c.classify(None, Some("spent on groceries"), None), Kind::Debit);
    assert_eq!(c.classify(None, Some("received refund"), None), Kind::Credit);
    // Default vocabulary no longer applies.
    assert_eq!(c.classify(None, Some("paid rent"), None), Kind::Unknown);
}

// ── Merchant extraction ───────────────────────────────────────

#[test]
fn test_merchant_after_to() {
    let c = classifier();
    assert_eq!(
        c.merchant("Paid to Acme Corp for supplies").as_deref(),
        Some("Acme Corp for supplies")
    );
}

#[test]
fn test_merchant_after_at() {
    let c = classifier();
    assert_eq!(
        c.merchant("Card swipe at Blue Bottle Coffee").as_deref(),
        Some("Blue Bottle Coffee")
    );
}

#[test]
fn test_merchant_after_at_sign() {
    let c = classifier();
    assert_eq!(c.merchant("UPI @SwiftPay Groceries").as_deref(), Some("SwiftPay Groceries"));
}

#[test]
fn test_merchant_absent_when_no_pattern() {
    let c = classifier();
    assert_eq!(c.merchant("monthly interest"), None);
    assert_eq!(c.merchant(""), None);
}

#[test]
fn test_merchant_requires_three_characters() {
    let c = classifier();
    assert_eq!(c.merchant("sent to ab"), None);
}

#[test]
fn test_merchant_does_not_match_inside_words() {
    let c = classifier();
    // "auto" must not trigger the "to" pattern.
    assert_eq!(c.merchant("auto-renewal fee"), None);
}
