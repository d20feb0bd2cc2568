//! Inclusive address ranges.

use super::address::{Address, Family};
use crate::error::DecomposeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex splitting `START-END`, `START,END` or `START END` text.
static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_range_regex() -> &'static Regex {
    RANGE_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(\S+?)\s*(?:-|,|\s)\s*(\S+)\s*$").expect("Invalid Regex")
    })
}

/// Raw form used when deserializing, validated into an [`AddressRange`].
#[derive(Deserialize)]
struct RawRange {
    start: String,
    end: String,
}

/// An inclusive range `start..=end` of addresses from one family.
///
/// Construction guarantees both ends share a family and `start <= end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    pub fn new(start: Address, end: Address) -> Result<AddressRange, DecomposeError> {
        if start.family() != end.family() {
            return Err(DecomposeError::FamilyMismatch {
                start: start.family(),
                end: end.family(),
            });
        }
        if start.value() > end.value() {
            return Err(DecomposeError::InvertedRange { start, end });
        }
        Ok(AddressRange { start, end })
    }

    /// Parse both ends from text. IPv4-mapped IPv6 ends are read as IPv4.
    pub fn parse(start: &str, end: &str) -> Result<AddressRange, DecomposeError> {
        let start: Address = start.parse()?;
        let end: Address = end.parse()?;
        AddressRange::new(start.to_canonical(), end.to_canonical())
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family()
            && self.start.value() <= addr.value()
            && addr.value() <= self.end.value()
    }
}

impl TryFrom<RawRange> for AddressRange {
    type Error = DecomposeError;

    fn try_from(raw: RawRange) -> Result<AddressRange, DecomposeError> {
        AddressRange::parse(&raw.start, &raw.end)
    }
}

impl FromStr for AddressRange {
    type Err = DecomposeError;

    fn from_str(s: &str) -> Result<AddressRange, DecomposeError> {
        let caps = get_range_regex()
            .captures(s)
            .ok_or_else(|| DecomposeError::InvalidInput(format!("not a range: {}", s.trim())))?;
        AddressRange::parse(&caps[1], &caps[2])
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
