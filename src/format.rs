//! Converts raw traffic counters into human-readable display strings.

/// Returned in place of a display string when the count is not a valid amount.
pub const INVALID_DATA: &str = "Invalid data";

const KB_THRESHOLD: f64 = 1024.0;
const MB_THRESHOLD: f64 = 1024.0 * 1024.0;

/// Formats a raw counter value with two decimals and a KB, MB or GB unit.
///
/// The router log counts in kilobytes, so values below 1024 are labelled `KB`
/// as-is, values below 1024² are divided once and labelled `MB`, and anything
/// larger is divided twice and labelled `GB`. NaN and negative values yield
/// [`INVALID_DATA`].
pub fn format_bytes(value: f64) -> String {
    if value.is_nan() || value < 0.0 {
        return INVALID_DATA.to_string();
    }

    if value < KB_THRESHOLD {
        format!("{:.2} KB", value)
    } else if value < MB_THRESHOLD {
        format!("{:.2} MB", value / KB_THRESHOLD)
    } else {
        format!("{:.2} GB", value / MB_THRESHOLD)
    }
}
