use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::Ledger;

/// Write the cleaned ledger to CSV: the original columns first, then the
/// derived ones. Absent values export as empty cells. Returns the number of
/// rows written.
pub(crate) fn export_to_csv(ledger: &Ledger, path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    let mut header: Vec<&str> = ledger.headers.iter().map(String::as_str).collect();
    header.extend([
        "Amount", "DateTime", "Date", "Month", "Weekday", "Kind", "Merchant",
    ]);
    writer.write_record(&header)?;

    for txn in &ledger.transactions {
        let mut record: Vec<String> = txn.raw.clone();
        record.push(opt_text(txn.amount.map(|a| a.to_string())));
        record.push(opt_text(
            txn.timestamp.map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        ));
        record.push(opt_text(txn.date.map(|d| d.to_string())));
        record.push(opt_text(txn.month.clone()));
        record.push(opt_text(
            txn.weekday.map(|w| crate::pipeline::weekday_name(w).to_string()),
        ));
        record.push(txn.kind.to_string());
        record.push(opt_text(txn.merchant.clone()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(ledger.transactions.len())
}

fn opt_text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
