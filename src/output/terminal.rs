//! Terminal output.
//!
//! Plain text listing of the blocks per range, plus the quoted field
//! formatting shared with the CSV output.

use crate::processing::RangeReport;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render reports as text: a header line per range, then one block per line.
///
/// Headers are colored when `color` is set.
pub fn render_text(reports: &[RangeReport], color: bool) -> String {
    let mut out = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let count = report.cidrs.len();
        let header = format!(
            "{start} - {end} ({count} {blocks})",
            start = report.start,
            end = report.end,
            blocks = if count == 1 { "block" } else { "blocks" }
        );
        if color {
            out.push_str(&header.bold().cyan().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');
        out.push_str(&report.cidrs.iter().join("\n"));
        out.push('\n');
    }
    out
}
