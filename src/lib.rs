//! Convert inclusive IP address ranges into the fewest CIDR blocks that
//! cover them exactly, for IPv4 and IPv6.
//!
//! ```
//! use ip_range_cidr::decompose_str;
//! let blocks = decompose_str("192.168.1.5", "192.168.1.5").unwrap();
//! assert_eq!(blocks[0].to_string(), "192.168.1.5/32");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::DecomposeError;
pub use models::{Address, AddressRange, CidrBlock, Family};
pub use processing::{decompose, decompose_bytes, decompose_ip, decompose_str};

use colored::Colorize;
use config::Config;
use processing::{process_ranges, RangeFailure};
use std::error::Error;
use std::io::IsTerminal;

/// Run the command line tool: read ranges, decompose them, print the result.
///
/// Returns the inputs that failed. They are reported on stderr and do not
/// stop the remaining ranges.
pub fn run(config: &Config) -> Result<Vec<RangeFailure>, Box<dyn Error>> {
    log::info!("#Start run() format={}", config.format);

    let entries = config.collect_ranges()?;
    let (reports, failures) = process_ranges(entries);

    for failure in &failures {
        log::warn!("Skipping range '{}': {}", failure.input, failure.error);
        eprintln!(
            "{} {}: {}",
            "error".on_red(),
            failure.input.on_blue(),
            failure.error
        );
    }

    let color = std::io::stdout().is_terminal();
    print!("{}", output::render(config.format, &reports, color)?);

    Ok(failures)
}
