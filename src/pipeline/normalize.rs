use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::RawTable;
use crate::pipeline::resolve::RoleMap;

/// Schema-level decisions for typed fields, made once per dataset and then
/// applied uniformly to every row. When a role is unresolved the plan falls
/// back to inference over the whole table; per-row parse failures still just
/// yield `None` for that row.
#[derive(Debug)]
pub(crate) struct ColumnPlan {
    pub(crate) amount_column: Option<usize>,
    pub(crate) date_column: Option<usize>,
    /// Last-resort amount extraction: first signed decimal anywhere in the
    /// row text. Only built when no amount column could be chosen.
    amount_scan: Option<Regex>,
}

pub(crate) fn plan_columns(table: &RawTable, roles: &RoleMap) -> ColumnPlan {
    let amount_column = roles.amount.or_else(|| {
        (0..table.headers.len()).find(|&col| uniformly_numeric(table, col))
    });

    let date_column = roles.date.or_else(|| {
        (0..table.headers.len())
            .find(|&col| table.column(col).any(|c| parse_timestamp(c).is_some()))
    });

    let amount_scan = if amount_column.is_none() && !table.is_empty() {
        Regex::new(r"-?\d+(?:\.\d+)?").ok()
    } else {
        None
    };

    ColumnPlan {
        amount_column,
        date_column,
        amount_scan,
    }
}

/// Typed `amount` and `timestamp` for one row. Failures are soft: a value
/// that will not parse leaves the field absent for that row only.
pub(crate) fn normalize_row(
    row: &[String],
    plan: &ColumnPlan,
) -> (Option<Decimal>, Option<NaiveDateTime>) {
    let amount = match plan.amount_column {
        Some(col) => row.get(col).and_then(|s| parse_amount(s)),
        None => plan.amount_scan.as_ref().and_then(|re| {
            let joined = row.join(" ");
            re.find(&joined)
                .and_then(|m| Decimal::from_str(m.as_str()).ok())
        }),
    };

    let timestamp = plan
        .date_column
        .and_then(|col| row.get(col))
        .and_then(|s| parse_timestamp(s));

    (amount, timestamp)
}

/// Calendar fields derived from the timestamp; all absent together when the
/// timestamp is.
pub(crate) fn derive_calendar(
    timestamp: Option<NaiveDateTime>,
) -> (Option<NaiveDate>, Option<String>, Option<Weekday>) {
    match timestamp {
        Some(ts) => {
            let date = ts.date();
            (
                Some(date),
                Some(date.format("%Y-%m").to_string()),
                Some(date.weekday()),
            )
        }
        None => (None, None, None),
    }
}

/// Parse a cell as money. Tolerates currency symbols, thousands separators
/// and accountant parentheses; anything else is absent, never zero.
pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s
        .replace(['$', ',', '"'], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%m/%d/%y",
];

/// Parse a cell as a point in time, trying common formats in a fixed order.
/// Date-only values land at midnight.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// True when the column has at least one non-empty value and every non-empty
/// value parses as a number.
fn uniformly_numeric(table: &RawTable, col: usize) -> bool {
    let mut seen_value = false;
    for cell in table.column(col) {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if parse_amount(cell).is_none() {
            return false;
        }
        seen_value = true;
    }
    seen_value
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
