//! Output formatting for decomposed ranges.
//!
//! This module handles rendering the results:
//! - [`terminal`] - plain text listing with colored headers
//! - [`csv`] - CSV output, one row per block
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::render_csv;
pub use json::render_json;
pub use terminal::{format_field, render_text};

use crate::processing::RangeReport;
use clap::ValueEnum;
use std::error::Error;

/// Output format selected on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render reports in the given format.
pub fn render(
    format: OutputFormat,
    reports: &[RangeReport],
    color: bool,
) -> Result<String, Box<dyn Error>> {
    log::debug!("Rendering {} reports as {format}", reports.len());
    match format {
        OutputFormat::Text => Ok(render_text(reports, color)),
        OutputFormat::Csv => Ok(render_csv(reports)),
        OutputFormat::Json => render_json(reports),
    }
}
