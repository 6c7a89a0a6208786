mod config;
mod export;
mod models;
mod pipeline;
mod run;
mod sheets;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::load()?;
    let args = apply_connection_flags(args, &mut config);

    match args.len() {
        1 => run::as_tui(&config),
        _ => run::as_cli(&args, &config),
    }
}

/// `--sheet <id>` and `--worksheet <name>` override the config everywhere;
/// they are stripped so command dispatch only sees the subcommand.
fn apply_connection_flags(args: Vec<String>, config: &mut config::Config) -> Vec<String> {
    if let Some(w) = args.windows(2).find(|w| w[0] == "--sheet") {
        config.sheet_id = w[1].clone();
    }
    if let Some(w) = args.windows(2).find(|w| w[0] == "--worksheet") {
        config.worksheet = w[1].clone();
    }

    let mut out = Vec::with_capacity(args.len());
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if arg == "--sheet" || arg == "--worksheet" {
            skip = true;
            continue;
        }
        out.push(arg);
    }
    out
}
