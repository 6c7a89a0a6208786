use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Debit,
    Credit,
    Unknown,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One cleaned transaction. Every raw row produces exactly one of these, in
/// input order; fields that could not be parsed are `None`, never dropped
/// rows or zero defaults.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// The original row, untouched, aligned with the table headers.
    pub raw: Vec<String>,
    pub amount: Option<Decimal>,
    pub timestamp: Option<NaiveDateTime>,
    pub date: Option<NaiveDate>,
    /// "YYYY-MM", present exactly when `timestamp` is.
    pub month: Option<String>,
    pub weekday: Option<Weekday>,
    pub kind: Kind,
    /// Best-effort merchant name pulled out of the message text.
    pub merchant: Option<String>,
    pub bank: Option<String>,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.kind == Kind::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.kind == Kind::Credit
    }

    /// Reporting magnitude: charts and totals use the absolute value so a
    /// sheet that stores debits as "-50" and one that stores them as "50"
    /// summarize the same way.
    pub fn abs_amount(&self) -> Option<Decimal> {
        self.amount.map(|a| a.abs())
    }
}
