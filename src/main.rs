mod cli;
mod config;
mod error;
mod format;
mod history;
mod models;

use clap::Parser;
use cli::prompt::{LineReader, TerminalReader};
use cli::{App, Cli};
use colored::*;
use config::Config;
use error::{AppError, Result};
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging on stderr so the table on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Only --help and --version; there are no operational flags
    let _cli = Cli::parse();

    let app = App::new(Config::from_env());
    info!("Initializing traffic history viewer...");

    if let Err(e) = run(&app) {
        report_failure(&e, &mut io::stderr());
    }
}

/// Runs the app against the real stdin, picking a terminal prompt when one is attached.
fn run(app: &App) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    if stdin.is_terminal() {
        app.run(&mut TerminalReader::new(), &mut stdout, &mut stderr)
    } else {
        let mut reader = LineReader::new(stdin.lock(), io::stdout());
        app.run(&mut reader, &mut stdout, &mut stderr)
    }
}

/// Top-level failure handler.
///
/// Details stay below the default `error` log level; the user only sees
/// `AppError::user_message`.
fn report_failure<W: Write>(err: &AppError, out: &mut W) {
    if err.is_input_file_error() {
        info!("Input file unavailable: {}", err);
    } else {
        warn!("Processing failed: {:?}", err);
    }
    // Nothing left to report to if stderr itself fails
    let _ = writeln!(out, "{}", err.user_message().red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory log sink for a test subscriber.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Reports `err` under the filter used when `RUST_LOG` is unset.
    fn report_with_default_filter(err: &AppError) -> (String, String) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("error"))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut out = Vec::new();
        tracing::subscriber::with_default(subscriber, || report_failure(err, &mut out));
        (String::from_utf8(out).unwrap(), logs.contents())
    }

    #[test]
    fn test_report_failure_hides_parse_details() {
        let err = AppError::Parse {
            line: 3,
            reason: "invalid upload value 'oops'".to_string(),
        };
        let (message, logs) = report_with_default_filter(&err);

        assert!(message.contains(GENERIC_FAILURE_MESSAGE));
        assert!(!message.contains("line 3"));
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[test]
    fn test_report_failure_describes_missing_file() {
        let err = AppError::FileNotFound(PathBuf::from("history_traffic.dat"));
        let (message, logs) = report_with_default_filter(&err);

        assert!(message.contains("does not exist"));
        assert!(message.contains("same directory as this program"));
        assert!(logs.is_empty());
    }
}
