//! Errors returned by range decomposition.

use crate::models::{Address, Family};
use thiserror::Error;

/// Reasons a range can not be turned into CIDR blocks.
///
/// No partial result is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// An address was missing or could not be normalized to 4 or 16 bytes.
    #[error("invalid address: {0}")]
    InvalidInput(String),

    /// Start and end belong to different address families.
    #[error("address family mismatch: start is {start}, end is {end}")]
    FamilyMismatch { start: Family, end: Family },

    /// Start is greater than end.
    #[error("inverted range: start {start} is greater than end {end}")]
    InvertedRange { start: Address, end: Address },
}
