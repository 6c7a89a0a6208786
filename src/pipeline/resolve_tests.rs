#![allow(clippy::unwrap_used)]

use super::*;

fn h(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolve_all_roles() {
    let headers = h(&["DateTime", "Bank", "Type", "Amount", "Message"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles.date, Some(0));
    assert_eq!(roles.bank, Some(1));
    assert_eq!(roles.kind, Some(2));
    assert_eq!(roles.amount, Some(3));
    assert_eq!(roles.message, Some(4));
}

#[test]
fn test_resolve_case_insensitive() {
    let headers = h(&["DATE", "AMT", "MSG"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles.date, Some(0));
    assert_eq!(roles.amount, Some(1));
    assert_eq!(roles.message, Some(2));
}

#[test]
fn test_resolve_synonym_order_datetime_beats_date() {
    let headers = h(&["Date", "DateTime"]);
    let roles = resolve_roles(&headers);
    // "datetime" is the first synonym, so it wins even though "Date" is first.
    assert_eq!(roles.date, Some(1));
}

#[test]
fn test_resolve_synonym_order_amount_beats_amt() {
    let headers = h(&["Amt", "Amount"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles.amount, Some(1));
}

#[test]
fn test_resolve_trims_header_whitespace() {
    let headers = h(&["  amount ", " date"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles.amount, Some(0));
    assert_eq!(roles.date, Some(1));
}

#[test]
fn test_resolve_unknown_headers_stay_unresolved() {
    let headers = h(&["Foo", "Bar", "Baz"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles, RoleMap::default());
}

#[test]
fn test_resolve_empty_headers() {
    let roles = resolve_roles(&[]);
    assert_eq!(roles, RoleMap::default());
}

#[test]
fn test_resolve_no_partial_substring_match() {
    // Synonyms are exact matches, not substrings.
    let headers = h(&["Transaction Amount", "Posting Date"]);
    let roles = resolve_roles(&headers);
    assert_eq!(roles.amount, None);
    assert_eq!(roles.date, None);
}

#[test]
fn test_resolved_indexes_are_in_range() {
    let headers = h(&["bank", "type", "msg", "amt", "date"]);
    let roles = resolve_roles(&headers);
    for role in Role::all() {
        if let Some(idx) = roles.get(*role) {
            assert!(idx < headers.len());
        }
    }
}
