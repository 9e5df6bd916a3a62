//! Defines the traffic history record and the sort orders applied to a collection of them.

use crate::format::format_bytes;
use std::cmp::Ordering;
use std::fmt;

/// One day of traffic from the history log.
///
/// Display strings are computed once at construction; records are never
/// modified afterwards, only reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficRecord {
    date: String,
    upload_bytes: u64,
    download_bytes: u64,
    upload_display: String,
    download_display: String,
}

impl TrafficRecord {
    /// Creates a record and formats both counters for display.
    pub fn new(date: impl Into<String>, upload_bytes: u64, download_bytes: u64) -> Self {
        Self {
            date: date.into(),
            upload_bytes,
            download_bytes,
            upload_display: format_bytes(upload_bytes as f64),
            download_display: format_bytes(download_bytes as f64),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn upload_bytes(&self) -> u64 {
        self.upload_bytes
    }

    pub fn download_bytes(&self) -> u64 {
        self.download_bytes
    }

    pub fn upload_display(&self) -> &str {
        &self.upload_display
    }

    pub fn download_display(&self) -> &str {
        &self.download_display
    }
}

/// The ways a traffic history can be ordered, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DateAsc,
    DateDesc,
    UploadAsc,
    UploadDesc,
    DownloadAsc,
    DownloadDesc,
}

impl SortOrder {
    /// All orders, indexed by menu choice minus one.
    pub const ALL: [SortOrder; 6] = [
        SortOrder::DateAsc,
        SortOrder::DateDesc,
        SortOrder::UploadAsc,
        SortOrder::UploadDesc,
        SortOrder::DownloadAsc,
        SortOrder::DownloadDesc,
    ];

    /// Maps a menu answer (`"1"`..`"6"`) to its order. Surrounding whitespace is ignored.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SortOrder::DateAsc),
            "2" => Some(SortOrder::DateDesc),
            "3" => Some(SortOrder::UploadAsc),
            "4" => Some(SortOrder::UploadDesc),
            "5" => Some(SortOrder::DownloadAsc),
            "6" => Some(SortOrder::DownloadDesc),
            _ => None,
        }
    }

    /// Menu label shown next to the choice number.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DateAsc => "By Date (Ascending)",
            SortOrder::DateDesc => "By Date (Descending)",
            SortOrder::UploadAsc => "By Upload (Ascending)",
            SortOrder::UploadDesc => "By Upload (Descending)",
            SortOrder::DownloadAsc => "By Download (Ascending)",
            SortOrder::DownloadDesc => "By Download (Descending)",
        }
    }

    /// Compares two records under this order.
    ///
    /// Dates compare lexically, which orders ISO-style dates chronologically.
    pub fn compare(&self, a: &TrafficRecord, b: &TrafficRecord) -> Ordering {
        match self {
            SortOrder::DateAsc => a.date().cmp(b.date()),
            SortOrder::DateDesc => b.date().cmp(a.date()),
            SortOrder::UploadAsc => a.upload_bytes().cmp(&b.upload_bytes()),
            SortOrder::UploadDesc => b.upload_bytes().cmp(&a.upload_bytes()),
            SortOrder::DownloadAsc => a.download_bytes().cmp(&b.download_bytes()),
            SortOrder::DownloadDesc => b.download_bytes().cmp(&a.download_bytes()),
        }
    }

    /// Sorts the records in place. The sort is stable.
    pub fn apply(&self, records: &mut [TrafficRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
