//! Range processing logic.
//!
//! This module contains the business logic of the crate:
//! - [`decomposer`] - the range to CIDR algorithm
//! - [`input`] - reading ranges from arguments and files
//! - [`report`] - decomposing batches of ranges

mod decomposer;
mod input;
mod report;

// Re-export public functions
pub use decomposer::{decompose, decompose_bytes, decompose_ip, decompose_str, CidrBlocks};
pub use input::{
    demo_ranges, parse_range_json, parse_range_lines, ranges_from_args, read_range_file,
    RangeEntry, DEMO_RANGES,
};
pub use report::{process_ranges, RangeFailure, RangeReport};
