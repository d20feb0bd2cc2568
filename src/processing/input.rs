//! Reading ranges from command-line arguments and files.

use crate::error::DecomposeError;
use crate::models::AddressRange;
use std::error::Error;
use std::path::Path;

/// Ranges decomposed when no input is given.
pub const DEMO_RANGES: [(&str, &str); 2] = [
    ("192.168.1.0", "192.168.2.255"),
    (
        "2400:ee00:101c:6100:0:9d41:e2a9:efcf",
        "2400:ee00:101c:6100:0:9d41:e2a9:efd7",
    ),
];

/// One input range with the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEntry {
    /// Source text, kept for error reporting.
    pub input: String,
    /// The parsed range, or why it could not be parsed.
    pub range: Result<AddressRange, DecomposeError>,
}

impl RangeEntry {
    pub fn parse(input: &str) -> RangeEntry {
        RangeEntry {
            input: input.trim().to_string(),
            range: input.parse(),
        }
    }
}

/// The built-in demonstration ranges.
pub fn demo_ranges() -> Vec<RangeEntry> {
    DEMO_RANGES
        .iter()
        .map(|(start, end)| RangeEntry {
            input: format!("{start}-{end}"),
            range: AddressRange::parse(start, end),
        })
        .collect()
}

/// Parse ranges given as command-line arguments.
pub fn ranges_from_args<S: AsRef<str>>(args: &[S]) -> Vec<RangeEntry> {
    args.iter().map(|a| RangeEntry::parse(a.as_ref())).collect()
}

/// Parse line-oriented range text.
///
/// Blank lines and lines starting with `#` are skipped. Anything after a
/// `#` on a line is a comment.
pub fn parse_range_lines(text: &str) -> Vec<RangeEntry> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(RangeEntry::parse)
        .collect()
}

/// Parse a JSON array of `{"start": ..., "end": ...}` objects.
///
/// Fails as a whole on the first bad element, naming its JSON path.
pub fn parse_range_json(json: &str) -> Result<Vec<RangeEntry>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let ranges: Vec<AddressRange> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing JSON ranges: path={} error={}", e.path(), e))?;
    Ok(ranges
        .into_iter()
        .map(|range| RangeEntry {
            input: range.to_string(),
            range: Ok(range),
        })
        .collect())
}

/// Read ranges from a file, JSON when the name ends in `.json`.
pub fn read_range_file(file: &str) -> Result<Vec<RangeEntry>, Box<dyn Error>> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(format!("Range file does not exist: {file}").into());
    }
    log::info!("Reading ranges from file: {file}");
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading range file {file}: {e}"))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let entries = if is_json {
        parse_range_json(&text)?
    } else {
        parse_range_lines(&text)
    };
    log::debug!("Read {} ranges from {file}", entries.len());
    Ok(entries)
}
