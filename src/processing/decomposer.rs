//! Range to CIDR decomposition.
//!
//! Splits an inclusive address range into the fewest CIDR blocks that cover
//! it exactly. Each step takes the largest block that both starts at the
//! current address (alignment) and ends at or before the range end
//! (containment), then moves past it.

use crate::error::DecomposeError;
use crate::models::{host_mask, Address, AddressRange, CidrBlock};
use std::iter::FusedIterator;
use std::net::IpAddr;

/// Decompose `start..=end` into CIDR blocks in ascending order.
///
/// The addresses are used as given; the `decompose_*` helpers below read
/// IPv4-mapped IPv6 ends as IPv4 first.
///
/// # Examples
/// ```
/// use ip_range_cidr::processing::decompose;
/// let blocks = decompose(
///     "192.168.1.0".parse().unwrap(),
///     "192.168.2.255".parse().unwrap(),
/// )
/// .unwrap();
/// let text: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
/// assert_eq!(text, ["192.168.1.0/24", "192.168.2.0/24"]);
/// ```
pub fn decompose(start: Address, end: Address) -> Result<Vec<CidrBlock>, DecomposeError> {
    let range = AddressRange::new(start, end)?;
    Ok(range.to_cidrs())
}

/// Decompose a range given as standard library addresses.
pub fn decompose_ip(start: IpAddr, end: IpAddr) -> Result<Vec<CidrBlock>, DecomposeError> {
    decompose(
        Address::from(start).to_canonical(),
        Address::from(end).to_canonical(),
    )
}

/// Decompose a range given in raw big-endian byte form (4 or 16 bytes each).
pub fn decompose_bytes(
    start: Option<&[u8]>,
    end: Option<&[u8]>,
) -> Result<Vec<CidrBlock>, DecomposeError> {
    let start = start.ok_or_else(|| DecomposeError::InvalidInput("missing start address".into()))?;
    let end = end.ok_or_else(|| DecomposeError::InvalidInput("missing end address".into()))?;
    decompose(
        Address::from_bytes(start)?.to_canonical(),
        Address::from_bytes(end)?.to_canonical(),
    )
}

/// Decompose a range given as address text.
pub fn decompose_str(start: &str, end: &str) -> Result<Vec<CidrBlock>, DecomposeError> {
    Ok(AddressRange::parse(start, end)?.to_cidrs())
}

impl AddressRange {
    /// Lazily yield the blocks covering this range.
    pub fn cidrs(&self) -> CidrBlocks {
        CidrBlocks {
            next: Some(self.start()),
            end: self.end(),
        }
    }

    /// All blocks covering this range.
    pub fn to_cidrs(&self) -> Vec<CidrBlock> {
        self.cidrs().collect()
    }
}

/// Iterator over the CIDR blocks of an [`AddressRange`].
///
/// Created by [`AddressRange::cidrs`].
#[derive(Debug, Clone)]
pub struct CidrBlocks {
    next: Option<Address>,
    end: Address,
}

impl Iterator for CidrBlocks {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<CidrBlock> {
        let start = self.next?;
        let end = self.end.value();

        let max_size = max_block_exponent(end - start.value(), start.width());
        let exponent = aligned_block_exponent(start.value(), end, max_size);
        let block = CidrBlock::from_exponent(start, exponent);
        log::trace!("block {block} (max_size={max_size}, exponent={exponent})");

        // The block may end on the last address of the family.
        let last = block.last().value();
        self.next = if last >= end {
            None
        } else {
            Some(start.with_value(last + 1))
        };
        Some(block)
    }
}

impl FusedIterator for CidrBlocks {}

/// Largest `k` with `2^k <= span + 1`, searched upward from 0.
///
/// `span` is `end - start`, so the whole 128 bit space (2^128 addresses)
/// still fits.
fn max_block_exponent(span: u128, width: u8) -> u8 {
    let mut max_size = 0;
    for k in 0..=width {
        if host_mask(k) > span {
            break;
        }
        max_size = k;
    }
    max_size
}

/// Largest `k <= max_size` whose block is rooted exactly at `start` and
/// ends at or before `end`.
fn aligned_block_exponent(start: u128, end: u128, max_size: u8) -> u8 {
    let mut k = max_size;
    // a single address (k = 0) is always aligned and inside the range
    while k > 0 {
        let mask = host_mask(k);
        let network_start = start & !mask;
        if network_start == start && start | mask <= end {
            break;
        }
        k -= 1;
    }
    k
}
