use chrono::{DateTime, Local};

use crate::config::Config;
use crate::pipeline::{run_pipeline, Aggregates, Ledger};
use crate::run::cli::shellexpand;
use crate::sheets::RecordSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Breakdown,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Breakdown, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Breakdown => write!(f, "Breakdown"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) config: Config,

    // Data, refreshed on demand; None until the first successful fetch.
    pub(crate) ledger: Option<Ledger>,
    pub(crate) aggregates: Option<Aggregates>,
    pub(crate) last_fetched: Option<DateTime<Local>>,

    // Worksheet cycling
    pub(crate) worksheets: Vec<String>,
    pub(crate) worksheet_index: usize,

    // Transactions screen
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            status_message: String::new(),
            show_help: false,
            config,
            ledger: None,
            aggregates: None,
            last_fetched: None,
            worksheets: Vec::new(),
            worksheet_index: 0,
            transaction_index: 0,
            transaction_scroll: 0,
            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn current_worksheet(&self) -> &str {
        self.worksheets
            .get(self.worksheet_index)
            .map(String::as_str)
            .unwrap_or(&self.config.worksheet)
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.ledger.as_ref().map_or(0, |l| l.transactions.len())
    }

    /// Populate the worksheet list and point the cursor at the configured
    /// worksheet. Failure here is non-fatal: cycling is just disabled.
    pub(crate) fn load_worksheets(&mut self, source: &dyn RecordSource) {
        match source.list_worksheets() {
            Ok(names) => {
                self.worksheet_index = names
                    .iter()
                    .position(|n| *n == self.config.worksheet)
                    .unwrap_or(0);
                self.worksheets = names;
            }
            Err(e) => self.set_status(format!("Could not list worksheets: {e}")),
        }
    }

    /// Fetch the current worksheet and recompute everything. A fetch error
    /// keeps the previous data on screen; an empty worksheet is reported,
    /// not treated as an error.
    pub(crate) fn refresh(&mut self, source: &dyn RecordSource) {
        match source.fetch_table(self.current_worksheet()) {
            Ok(table) => {
                let ledger = run_pipeline(&table);
                self.last_fetched = Some(Local::now());
                if ledger.transactions.is_empty() {
                    self.set_status(format!(
                        "Worksheet '{}' has no records",
                        self.current_worksheet()
                    ));
                    self.aggregates = None;
                } else {
                    self.set_status(format!(
                        "Loaded {} records from '{}'",
                        ledger.transactions.len(),
                        self.current_worksheet()
                    ));
                    self.aggregates = Some(Aggregates::compute(&ledger));
                }
                self.ledger = Some(ledger);
                self.transaction_index = 0;
                self.transaction_scroll = 0;
            }
            Err(e) => self.set_status(format!("Refresh failed: {e}")),
        }
    }

    pub(crate) fn next_worksheet(&mut self, source: &dyn RecordSource) {
        if self.worksheets.len() < 2 {
            self.set_status("No other worksheets");
            return;
        }
        self.worksheet_index = (self.worksheet_index + 1) % self.worksheets.len();
        self.refresh(source);
    }

    /// Write the cleaned ledger to a CSV in the home directory.
    pub(crate) fn export(&mut self) {
        let Some(ledger) = &self.ledger else {
            self.set_status("Nothing to export yet");
            return;
        };
        let stamp = Local::now().format("%Y-%m-%d");
        let path = shellexpand(&format!("~/spenddash-export-{stamp}.csv"));
        match crate::export::export_to_csv(ledger, std::path::Path::new(&path)) {
            Ok(count) => self.set_status(format!("Exported {count} transactions to {path}")),
            Err(e) => self.set_status(format!("Export failed: {e}")),
        }
    }
}
