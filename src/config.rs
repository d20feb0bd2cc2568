//! Command-line and environment configuration.
//!
//! Options can come from arguments or from `IP_RANGE_CIDR_*` environment
//! variables, which may be set in a `.env` file.

use crate::output::OutputFormat;
use crate::processing::{demo_ranges, ranges_from_args, read_range_file, RangeEntry};
use clap::Parser;
use std::error::Error;

/// Convert inclusive IP address ranges to the fewest covering CIDR blocks.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ip-range-cidr")]
#[command(about = "Convert inclusive IP address ranges to CIDR blocks")]
pub struct Config {
    /// Ranges as START-END, START,END or "START END"
    pub ranges: Vec<String>,

    /// Read ranges from a file, one per line, or a JSON array if it ends in .json
    #[arg(short, long)]
    pub file: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, env = "IP_RANGE_CIDR_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decompose the built-in demonstration ranges
    #[arg(long)]
    pub demo: bool,

    /// log4rs configuration file
    #[arg(long, env = "IP_RANGE_CIDR_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: String,
}

impl Config {
    /// Load `.env`, then parse the process arguments. Exits on bad arguments.
    pub fn load() -> Config {
        dotenv::dotenv().ok();
        Config::parse()
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    /// The demo runs when asked for, or when no input was given.
    pub fn use_demo(&self) -> bool {
        self.demo || (self.ranges.is_empty() && self.file.is_none())
    }

    /// Gather the input ranges: arguments first, then the file.
    pub fn collect_ranges(&self) -> Result<Vec<RangeEntry>, Box<dyn Error>> {
        if self.use_demo() {
            log::info!("No ranges given, running demo ranges");
            return Ok(demo_ranges());
        }
        let mut entries = ranges_from_args(&self.ranges);
        if let Some(file) = &self.file {
            entries.extend(read_range_file(file)?);
        }
        Ok(entries)
    }
}
