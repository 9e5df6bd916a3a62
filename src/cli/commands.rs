use crate::cli::prompt::{prompt_sort_order, ChoiceReader};
use crate::cli::table::render;
use crate::config::Config;
use crate::error::Result;
use crate::history::load_history;
use clap::Parser;
use comfy_table::ContentArrangement;
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};

/// Shows router traffic history in human-readable units, sorted the way you choose.
///
/// Reads `history_traffic.dat` from the directory holding this program, or the
/// path in `TRAFFIC_HISTORY_FILE`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// CLI application
pub struct App {
    config: Config,
    arrangement: ContentArrangement,
}

impl App {
    /// Create a new CLI application
    ///
    /// The table wraps to the terminal width only when stdout is a terminal.
    pub fn new(config: Config) -> Self {
        let arrangement = if io::stdout().is_terminal() {
            ContentArrangement::Dynamic
        } else {
            ContentArrangement::Disabled
        };
        Self {
            config,
            arrangement,
        }
    }

    /// Overrides how table cells are fitted to the terminal width.
    pub fn with_arrangement(mut self, arrangement: ContentArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Loads the history, asks for a sort order, and writes the sorted table to `out`.
    ///
    /// Rejected menu answers are reported on `diag`. Nothing is written to
    /// `out` unless the history file loads completely.
    pub fn run<C, W, D>(&self, reader: &mut C, out: &mut W, diag: &mut D) -> Result<()>
    where
        C: ChoiceReader + ?Sized,
        W: Write,
        D: Write,
    {
        let mut records = load_history(&self.config.data_file)?;
        if records.is_empty() {
            warn!("Traffic history contains no data lines");
        }

        let order = prompt_sort_order(reader, out, diag)?;
        order.apply(&mut records);
        info!("Sorted {} records {}", records.len(), order);

        render(&records, self.arrangement.clone(), out)
    }
}
