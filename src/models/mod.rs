//! Domain models for range decomposition.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Address`] - IPv4 or IPv6 address as a fixed-width integer
//! - [`CidrBlock`] - network address with prefix length
//! - [`AddressRange`] - validated inclusive range of addresses

mod address;
mod cidr;
mod range;

// Re-export public types
pub use address::{host_mask, Address, Family, IPV4_BITS, IPV6_BITS};
pub use cidr::CidrBlock;
pub use range::AddressRange;
