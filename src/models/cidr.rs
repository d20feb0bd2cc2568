//! CIDR block notation.
//!
//! Provides [`CidrBlock`], a network address plus prefix length whose host
//! bits are all zero.

use super::address::{host_mask, Address};
use crate::error::DecomposeError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A network address with a prefix length, e.g. `192.168.1.0/24`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    network: Address,
    prefix_len: u8,
}

impl CidrBlock {
    /// Create a block, checking the prefix length and that no host bits are set.
    pub fn new(network: Address, prefix_len: u8) -> Result<CidrBlock, DecomposeError> {
        let width = network.width();
        if prefix_len > width {
            return Err(DecomposeError::InvalidInput(format!(
                "prefix length /{prefix_len} is too long for {}",
                network.family()
            )));
        }
        if network.value() & host_mask(width - prefix_len) != 0 {
            return Err(DecomposeError::InvalidInput(format!(
                "{network}/{prefix_len} has host bits set"
            )));
        }
        Ok(CidrBlock {
            network,
            prefix_len,
        })
    }

    /// Block of `2^exponent` addresses starting at `network`.
    ///
    /// Caller guarantees `network` is aligned to the block size.
    pub(crate) fn from_exponent(network: Address, exponent: u8) -> CidrBlock {
        debug_assert!(exponent <= network.width());
        debug_assert_eq!(network.value() & host_mask(exponent), 0);
        CidrBlock {
            network,
            prefix_len: network.width() - exponent,
        }
    }

    pub fn network(&self) -> Address {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Number of host bits, the base 2 exponent of the block size.
    pub fn host_bits(&self) -> u8 {
        self.network.width() - self.prefix_len
    }

    /// Lowest address in the block (the network address).
    pub fn first(&self) -> Address {
        self.network
    }

    /// Highest address in the block.
    pub fn last(&self) -> Address {
        self.network
            .with_value(self.network.value() | host_mask(self.host_bits()))
    }

    /// Number of addresses in the block.
    ///
    /// `None` only for `::/0`, whose 2^128 addresses do not fit in a `u128`.
    pub fn num_addresses(&self) -> Option<u128> {
        1u128.checked_shl(self.host_bits() as u32)
    }

    /// Is `addr` inside this block? Always false across families.
    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.network.family()
            && self.first().value() <= addr.value()
            && addr.value() <= self.last().value()
    }
}

impl FromStr for CidrBlock {
    type Err = DecomposeError;

    /// Parse `addr/len` text. The address must be the network address.
    fn from_str(s: &str) -> Result<CidrBlock, DecomposeError> {
        let s = s.trim();
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| DecomposeError::InvalidInput(format!("missing prefix length: {s}")))?;
        let network: Address = addr.parse()?;
        let prefix_len: u8 = len
            .parse()
            .map_err(|_| DecomposeError::InvalidInput(format!("invalid prefix length: {len}")))?;
        CidrBlock::new(network, prefix_len)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::from_str(&s).map_err(de::Error::custom)
    }
}
