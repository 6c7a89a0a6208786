use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Kind, Transaction};
use crate::pipeline::Ledger;

/// Calendar order for the weekday view, fixed regardless of which weekdays
/// actually have data.
pub(crate) const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Headline metrics for the summary cards.
#[derive(Debug, Clone, Default)]
pub(crate) struct Summary {
    pub(crate) total_debit: Decimal,
    pub(crate) total_credit: Decimal,
    pub(crate) transaction_count: usize,
    pub(crate) latest: Option<NaiveDateTime>,
}

/// One month pivoted to a column per kind, zero where a kind has no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthlyRow {
    pub(crate) month: String,
    pub(crate) debit: Decimal,
    pub(crate) credit: Decimal,
    pub(crate) unknown: Decimal,
}

impl MonthlyRow {
    pub(crate) fn total(&self, kind: Kind) -> Decimal {
        match kind {
            Kind::Debit => self.debit,
            Kind::Credit => self.credit,
            Kind::Unknown => self.unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BankRow {
    pub(crate) bank: String,
    pub(crate) debit: Decimal,
    pub(crate) credit: Decimal,
    pub(crate) unknown: Decimal,
}

/// All derived views, recomputed from scratch on every fetch. Amounts are
/// absolute magnitudes; records with an absent amount are excluded from
/// sums and averages rather than counted as zero.
#[derive(Debug, Clone, Default)]
pub(crate) struct Aggregates {
    pub(crate) summary: Summary,
    pub(crate) daily_debit: Vec<(NaiveDate, Decimal)>,
    pub(crate) monthly: Vec<MonthlyRow>,
    /// Always seven entries, Monday..Sunday; `None` where no debit has data.
    pub(crate) weekday_average_debit: Vec<(Weekday, Option<Decimal>)>,
    pub(crate) top_merchants: Vec<(String, Decimal)>,
    /// `None` when the sheet has no bank column at all.
    pub(crate) bank_totals: Option<Vec<BankRow>>,
    pub(crate) debit_amounts: Vec<Decimal>,
}

impl Aggregates {
    pub(crate) fn compute(ledger: &Ledger) -> Self {
        let txns = &ledger.transactions;
        Self {
            summary: summary(txns),
            daily_debit: daily_debit(txns),
            monthly: monthly_totals(txns),
            weekday_average_debit: weekday_average_debit(txns),
            top_merchants: top_merchants(txns, 10),
            bank_totals: ledger.roles.bank.map(|_| bank_totals(txns)),
            debit_amounts: txns
                .iter()
                .filter(|t| t.is_debit())
                .filter_map(Transaction::abs_amount)
                .collect(),
        }
    }
}

fn summary(txns: &[Transaction]) -> Summary {
    let mut s = Summary {
        transaction_count: txns.len(),
        ..Summary::default()
    };
    for t in txns {
        if let Some(a) = t.abs_amount() {
            match t.kind {
                Kind::Debit => s.total_debit += a,
                Kind::Credit => s.total_credit += a,
                Kind::Unknown => {}
            }
        }
        if let Some(ts) = t.timestamp {
            if s.latest.is_none_or(|latest| ts > latest) {
                s.latest = Some(ts);
            }
        }
    }
    s
}

fn daily_debit(txns: &[Transaction]) -> Vec<(NaiveDate, Decimal)> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.is_debit()) {
        if let (Some(date), Some(amount)) = (t.date, t.abs_amount()) {
            *by_date.entry(date).or_default() += amount;
        }
    }
    by_date.into_iter().collect()
}

fn monthly_totals(txns: &[Transaction]) -> Vec<MonthlyRow> {
    // A month appears as soon as any record carries it, even when all its
    // amounts are unparseable; those rows report zero, not an error.
    let mut by_month: BTreeMap<String, (Decimal, Decimal, Decimal)> = BTreeMap::new();
    for t in txns {
        let Some(month) = &t.month else { continue };
        let slot = by_month.entry(month.clone()).or_default();
        if let Some(a) = t.abs_amount() {
            match t.kind {
                Kind::Debit => slot.0 += a,
                Kind::Credit => slot.1 += a,
                Kind::Unknown => slot.2 += a,
            }
        }
    }
    by_month
        .into_iter()
        .map(|(month, (debit, credit, unknown))| MonthlyRow {
            month,
            debit,
            credit,
            unknown,
        })
        .collect()
}

fn weekday_average_debit(txns: &[Transaction]) -> Vec<(Weekday, Option<Decimal>)> {
    let mut sums: BTreeMap<u8, (Decimal, u64)> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.is_debit()) {
        if let (Some(weekday), Some(amount)) = (t.weekday, t.abs_amount()) {
            let slot = sums.entry(weekday.num_days_from_monday() as u8).or_default();
            slot.0 += amount;
            slot.1 += 1;
        }
    }
    WEEKDAYS
        .iter()
        .map(|&w| {
            let avg = sums
                .get(&(w.num_days_from_monday() as u8))
                .map(|(sum, count)| sum / Decimal::from(*count));
            (w, avg)
        })
        .collect()
}

fn top_merchants(txns: &[Transaction], limit: usize) -> Vec<(String, Decimal)> {
    let mut by_merchant: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in txns {
        let Some(merchant) = t.merchant.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        if let Some(a) = t.abs_amount() {
            *by_merchant.entry(merchant.to_string()).or_default() += a;
        }
    }
    let mut rows: Vec<(String, Decimal)> = by_merchant.into_iter().collect();
    // Descending by spend; the BTreeMap gives a stable name order for ties.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(limit);
    rows
}

fn bank_totals(txns: &[Transaction]) -> Vec<BankRow> {
    let mut by_bank: BTreeMap<String, (Decimal, Decimal, Decimal)> = BTreeMap::new();
    for t in txns {
        let Some(bank) = t.bank.as_deref().filter(|b| !b.is_empty()) else {
            continue;
        };
        if let Some(a) = t.abs_amount() {
            let slot = by_bank.entry(bank.to_string()).or_default();
            match t.kind {
                Kind::Debit => slot.0 += a,
                Kind::Credit => slot.1 += a,
                Kind::Unknown => slot.2 += a,
            }
        }
    }
    by_bank
        .into_iter()
        .map(|(bank, (debit, credit, unknown))| BankRow {
            bank,
            debit,
            credit,
            unknown,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistogramBucket {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) count: u64,
}

/// Equal-width buckets over the observed min/max. Empty input produces no
/// buckets; a single distinct value collapses to one bucket.
pub(crate) fn histogram(amounts: &[Decimal], buckets: usize) -> Vec<HistogramBucket> {
    if amounts.is_empty() || buckets == 0 {
        return Vec::new();
    }
    let values: Vec<f64> = amounts.iter().filter_map(|a| a.to_f64()).collect();
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![HistogramBucket {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let width = (max - min) / buckets as f64;
    let mut out: Vec<HistogramBucket> = (0..buckets)
        .map(|i| HistogramBucket {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for v in values {
        let idx = (((v - min) / width) as usize).min(buckets - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
