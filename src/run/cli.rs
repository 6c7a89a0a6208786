use anyhow::Result;

use crate::config::Config;
use crate::pipeline::{run_pipeline, weekday_name, Aggregates, Ledger};
use crate::sheets::{RecordSource, SheetsClient};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(config),
        "export" => cli_export(&args[2..], config),
        "worksheets" => cli_worksheets(config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spenddash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendDash — live expense dashboard over a Google Sheet");
    println!();
    println!("Usage: spenddash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print totals and monthly breakdown");
    println!("  export [path]                 Export cleaned transactions to CSV");
    println!("  worksheets                    List worksheets in the configured sheet");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --sheet <id>                  Spreadsheet id (overrides config)");
    println!("  --worksheet <name>            Worksheet to read (overrides config)");
}

fn fetch_ledger(config: &Config) -> Result<Ledger> {
    config.validate()?;
    let client = SheetsClient::new(&config.sheet_id, &config.api_key)?;
    let table = client.fetch_table(&config.worksheet)?;
    Ok(run_pipeline(&table))
}

fn cli_summary(config: &Config) -> Result<()> {
    let ledger = fetch_ledger(config)?;
    if ledger.transactions.is_empty() {
        println!("No records in worksheet '{}'", config.worksheet);
        return Ok(());
    }
    let agg = Aggregates::compute(&ledger);

    println!("SpendDash — {}", config.worksheet);
    println!("{}", "─".repeat(44));
    println!("  Total Spent:   {}", format_amount(agg.summary.total_debit));
    println!("  Total Credit:  {}", format_amount(agg.summary.total_credit));
    println!("  Transactions:  {}", agg.summary.transaction_count);
    if let Some(latest) = agg.summary.latest {
        println!("  Latest:        {}", latest.format("%Y-%m-%d %H:%M"));
    }

    if !agg.monthly.is_empty() {
        println!();
        println!("Monthly (debit / credit):");
        for row in &agg.monthly {
            println!(
                "  {:<10} {:>14} / {}",
                row.month,
                format_amount(row.debit),
                format_amount(row.credit)
            );
        }
    }

    if agg.weekday_average_debit.iter().any(|(_, avg)| avg.is_some()) {
        println!();
        println!("Average debit by weekday:");
        for (weekday, avg) in &agg.weekday_average_debit {
            let text = avg.map(format_amount).unwrap_or_else(|| "—".into());
            println!("  {:<10} {text}", weekday_name(*weekday));
        }
    }

    if let Some(banks) = &agg.bank_totals {
        println!();
        println!("By bank (debit / credit):");
        for row in banks {
            println!(
                "  {:<16} {:>14} / {}",
                row.bank,
                format_amount(row.debit),
                format_amount(row.credit)
            );
        }
    }

    Ok(())
}

fn cli_export(args: &[String], config: &Config) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let stamp = chrono::Local::now().format("%Y-%m-%d");
            format!("{home}/spenddash-export-{stamp}.csv")
        });

    let ledger = fetch_ledger(config)?;
    let count = crate::export::export_to_csv(&ledger, std::path::Path::new(&output_path))?;
    if count == 0 {
        println!("No records in worksheet '{}'", config.worksheet);
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

fn cli_worksheets(config: &Config) -> Result<()> {
    config.validate()?;
    let client = SheetsClient::new(&config.sheet_id, &config.api_key)?;
    let names = client.list_worksheets()?;
    if names.is_empty() {
        println!("No worksheets");
        return Ok(());
    }
    for name in &names {
        if *name == config.worksheet {
            println!("* {name}");
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
