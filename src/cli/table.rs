//! Renders traffic records as a terminal table using `comfy-table`.

use crate::error::Result;
use crate::models::TrafficRecord;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::io::Write;

pub const DATE_HEADER: &str = "🗓️  Date";
pub const UPLOAD_HEADER: &str = "⬆️  Uploaded Data";
pub const DOWNLOAD_HEADER: &str = "⬇️  Downloaded Data";

/// Builds a three-column table with one row per record, in collection order.
///
/// `arrangement` decides whether cells wrap to the terminal width
/// (`Dynamic`) or keep their full content on one line (`Disabled`).
pub fn build_table(records: &[TrafficRecord], arrangement: ContentArrangement) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(arrangement)
        .set_header(
            [DATE_HEADER, UPLOAD_HEADER, DOWNLOAD_HEADER]
                .into_iter()
                .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
        );

    for record in records {
        table.add_row(vec![
            record.date(),
            record.upload_display(),
            record.download_display(),
        ]);
    }

    table
}

/// Writes the rendered table to `out`.
pub fn render<W: Write>(
    records: &[TrafficRecord],
    arrangement: ContentArrangement,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", build_table(records, arrangement))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TrafficRecord> {
        vec![
            TrafficRecord::new("2024-01-02", 2048, 1_048_576),
            TrafficRecord::new("2024-01-01", 500, 2000),
        ]
    }

    #[test]
    fn test_build_table_rows_follow_collection_order() {
        let table = build_table(&sample(), ContentArrangement::Disabled);
        assert_eq!(table.row_iter().count(), 2);

        let text = table.to_string();
        let first = text.find("2024-01-02").unwrap();
        let second = text.find("2024-01-01").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_contains_headers_and_values() {
        let mut out = Vec::new();
        render(&sample(), ContentArrangement::Disabled, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Date"));
        assert!(text.contains("Uploaded Data"));
        assert!(text.contains("Downloaded Data"));
        assert!(text.contains("2.00 MB"));
        assert!(text.contains("1.00 GB"));
        assert!(text.contains("500.00 KB"));
        assert!(text.contains("1.95 MB"));
    }

    #[test]
    fn test_disabled_arrangement_ignores_narrow_width() {
        let mut table = build_table(&sample(), ContentArrangement::Disabled);
        table.set_width(12);
        let text = table.to_string();

        assert!(text.contains("2024-01-02"));
        assert!(text.contains("500.00 KB"));
        assert!(text.contains("Downloaded Data"));
    }

    #[test]
    fn test_render_empty_collection() {
        let mut out = Vec::new();
        render(&[], ContentArrangement::Disabled, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Uploaded Data"));
        assert!(!text.contains("KB"));
    }
}
