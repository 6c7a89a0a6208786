//! The normalization pipeline: resolve columns to roles, normalize fields,
//! classify each record, aggregate. All four stages are pure; the only I/O
//! in the program lives in `sheets` and the UI.

mod aggregate;
mod classify;
mod normalize;
mod resolve;

pub(crate) use aggregate::{histogram, weekday_name, Aggregates};
pub(crate) use classify::Classifier;
pub(crate) use resolve::{resolve_roles, Role, RoleMap};

use crate::models::{RawTable, Transaction};

/// The cleaned table: headers and role assignments from the schema pass,
/// plus one Transaction per raw row, in input order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    pub(crate) headers: Vec<String>,
    pub(crate) roles: RoleMap,
    pub(crate) transactions: Vec<Transaction>,
}

/// Run the full pipeline over one fetched table. Never fails: unparseable
/// fields go absent, unclassifiable records go unknown, and zero rows
/// produce an empty ledger.
pub(crate) fn run_pipeline(table: &RawTable) -> Ledger {
    let roles = resolve_roles(&table.headers);
    let plan = normalize::plan_columns(table, &roles);
    let classifier = Classifier::default();

    let transactions = table
        .rows
        .iter()
        .map(|row| {
            let (amount, timestamp) = normalize::normalize_row(row, &plan);
            let (date, month, weekday) = normalize::derive_calendar(timestamp);

            let type_value = roles.get(Role::Type).and_then(|i| row.get(i)).map(String::as_str);
            let message = roles
                .get(Role::Message)
                .and_then(|i| row.get(i))
                .map(String::as_str);
            let kind = classifier.classify(type_value, message, amount);
            let merchant = message.and_then(|m| classifier.merchant(m));
            let bank = roles
                .get(Role::Bank)
                .and_then(|i| row.get(i))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());

            Transaction {
                raw: row.clone(),
                amount,
                timestamp,
                date,
                month,
                weekday,
                kind,
                merchant,
                bank,
            }
        })
        .collect();

    Ledger {
        headers: table.headers.clone(),
        roles,
        transactions,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
