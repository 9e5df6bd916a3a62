//! Parses the traffic history log into `TrafficRecord`s.
//!
//! The file starts with a header line that is always skipped. Every other
//! non-blank line has the form `<date> <upload>/<download>`.

use crate::error::{AppError, Result};
use crate::models::TrafficRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parses a single data line. `line_no` is 1-based and only used for error reporting.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns `AppError::Parse` if the line does not have exactly a date and an
/// `upload/download` pair, or if either counter is not a non-negative integer.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<TrafficRecord>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parse_err = |reason: String| AppError::Parse {
        line: line_no,
        reason,
    };

    let mut tokens = line.split_whitespace();
    let (date, counters) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(date), Some(counters), None) => (date, counters),
        (Some(_), None, _) => return Err(parse_err("missing traffic counters".to_string())),
        _ => {
            return Err(parse_err(format!(
                "expected '<date> <upload>/<download>', got '{}'",
                line
            )))
        },
    };

    let (upload, download) = counters
        .split_once('/')
        .ok_or_else(|| parse_err(format!("missing '/' in '{}'", counters)))?;

    let upload_bytes = parse_counter(upload, "upload").map_err(parse_err)?;
    let download_bytes = parse_counter(download, "download").map_err(parse_err)?;

    Ok(Some(TrafficRecord::new(date, upload_bytes, download_bytes)))
}

fn parse_counter(value: &str, field: &str) -> std::result::Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|e| format!("invalid {} value '{}': {}", field, value, e))
}

/// Parses the full contents of a history file, skipping the header line and blank lines.
pub fn parse_history(contents: &str) -> Result<Vec<TrafficRecord>> {
    let mut records = Vec::new();

    for (index, line) in contents.lines().enumerate().skip(1) {
        if let Some(record) = parse_line(line, index + 1)? {
            records.push(record);
        }
    }

    debug!("Parsed {} records", records.len());
    Ok(records)
}

/// Loads and parses the history file at `path`.
///
/// # Errors
///
/// - `AppError::FileNotFound` if nothing exists at `path`.
/// - `AppError::NotAFile` if `path` is a directory or another non-regular file.
/// - `AppError::Io` if the file cannot be read as UTF-8 text.
/// - `AppError::Parse` for the first malformed data line.
pub fn load_history(path: &Path) -> Result<Vec<TrafficRecord>> {
    info!("Loading traffic history from {}", path.display());

    if !path.exists() {
        warn!("Traffic history file {} does not exist", path.display());
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }
    if !fs::metadata(path)?.is_file() {
        warn!("Traffic history path {} is not a file", path.display());
        return Err(AppError::NotAFile(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let records = parse_history(&contents)?;

    info!("Loaded {} traffic records", records.len());
    Ok(records)
}
