//! Decomposing a batch of input ranges.

use super::input::RangeEntry;
use crate::error::DecomposeError;
use crate::models::{Address, AddressRange, CidrBlock};
use serde::Serialize;

/// The blocks covering one range.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub start: Address,
    pub end: Address,
    pub cidrs: Vec<CidrBlock>,
}

impl RangeReport {
    pub fn new(range: &AddressRange) -> RangeReport {
        RangeReport {
            start: range.start(),
            end: range.end(),
            cidrs: range.to_cidrs(),
        }
    }
}

/// An input that could not be decomposed.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFailure {
    pub input: String,
    pub error: DecomposeError,
}

/// Decompose every entry, keeping successes and failures apart.
///
/// A failing entry does not stop the others.
pub fn process_ranges(entries: Vec<RangeEntry>) -> (Vec<RangeReport>, Vec<RangeFailure>) {
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for entry in entries {
        match entry.range {
            Ok(range) => {
                let report = RangeReport::new(&range);
                log::debug!("{range}: {} blocks", report.cidrs.len());
                reports.push(report);
            }
            Err(error) => failures.push(RangeFailure {
                input: entry.input,
                error,
            }),
        }
    }

    log::info!(
        "Processed {} ranges ({} failed)",
        reports.len() + failures.len(),
        failures.len()
    );
    (reports, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::input::parse_range_lines;

    #[test]
    fn test_process_ranges() {
        let entries = parse_range_lines("192.168.1.0-192.168.2.255\nbad\n10.0.0.1-10.0.0.6\n");
        let (reports, failures) = process_ranges(entries);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].cidrs.len(), 2);
        assert_eq!(reports[1].cidrs.len(), 4);
        assert_eq!(reports[1].start.to_string(), "10.0.0.1");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].input, "bad");
        assert!(matches!(failures[0].error, DecomposeError::InvalidInput(_)));
    }

    #[test]
    fn test_report_serializes_as_strings() {
        let range: AddressRange = "192.168.1.0-192.168.2.255".parse().unwrap();
        let json = serde_json::to_string(&RangeReport::new(&range)).unwrap();
        assert_eq!(
            json,
            r#"{"start":"192.168.1.0","end":"192.168.2.255","cidrs":["192.168.1.0/24","192.168.2.0/24"]}"#
        );
    }
}
