//! Fixed-width IP addresses.
//!
//! Provides [`Address`], an IPv4 or IPv6 address held as an unsigned integer
//! of the family's width, along with the mask helpers the decomposition is
//! built on.

use crate::error::DecomposeError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Width of an IPv4 address in bits.
pub const IPV4_BITS: u8 = 32;

/// Width of an IPv6 address in bits.
pub const IPV6_BITS: u8 = 128;

/// Mask with the low `bits` bits set.
///
/// # Examples
/// ```
/// use ip_range_cidr::models::host_mask;
/// assert_eq!(host_mask(0), 0);
/// assert_eq!(host_mask(8), 0xFF);
/// assert_eq!(host_mask(128), u128::MAX);
/// ```
pub fn host_mask(bits: u8) -> u128 {
    if bits >= IPV6_BITS {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

/// IP address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "ipv4")]
    V4,
    #[serde(rename = "ipv6")]
    V6,
}

impl Family {
    /// Address width in bits (32 or 128).
    pub fn width(self) -> u8 {
        match self {
            Family::V4 => IPV4_BITS,
            Family::V6 => IPV6_BITS,
        }
    }

    /// Length of the big-endian byte form (4 or 16).
    pub fn byte_len(self) -> usize {
        self.width() as usize / 8
    }

    /// The all-ones address value of this family.
    pub fn max_value(self) -> u128 {
        host_mask(self.width())
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address as a fixed-width unsigned integer.
///
/// Addresses of different families never compare as ordered:
/// `partial_cmp` returns `None` for them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    /// Build an address from its integer value.
    ///
    /// Fails when `value` does not fit in the family's width.
    pub fn new(family: Family, value: u128) -> Result<Address, DecomposeError> {
        if value > family.max_value() {
            return Err(DecomposeError::InvalidInput(format!(
                "value {value:#x} does not fit in an {family} address"
            )));
        }
        Ok(Address { family, value })
    }

    /// Read a big-endian byte form: 4 bytes give IPv4, 16 bytes give IPv6.
    pub fn from_bytes(bytes: &[u8]) -> Result<Address, DecomposeError> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            return Ok(Address::from(Ipv4Addr::from(octets)));
        }
        if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            return Ok(Address::from(Ipv6Addr::from(octets)));
        }
        Err(DecomposeError::InvalidInput(format!(
            "expected 4 or 16 bytes, got {}",
            bytes.len()
        )))
    }

    /// Same family, different value. `value` must fit the width.
    pub(crate) fn with_value(&self, value: u128) -> Address {
        debug_assert!(value <= self.family.max_value());
        Address {
            family: self.family,
            value,
        }
    }

    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) as IPv4, others unchanged.
    ///
    /// Range ends read from text, bytes or `IpAddr` are normalized this way;
    /// `FromStr` and `Display` keep the family as written so text round-trips.
    pub fn to_canonical(&self) -> Address {
        match self.to_ip() {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Address::from(v4),
                None => *self,
            },
            IpAddr::V4(_) => *self,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// Width of the address in bits.
    pub fn width(&self) -> u8 {
        self.family.width()
    }

    /// The big-endian byte form (4 or 16 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.family {
            Family::V4 => (self.value as u32).to_be_bytes().to_vec(),
            Family::V6 => self.value.to_be_bytes().to_vec(),
        }
    }

    /// Convert back to a standard library address.
    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address {
            family: Family::V4,
            value: u32::from(addr) as u128,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address {
            family: Family::V6,
            value: u128::from(addr),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => Address::from(v4),
            IpAddr::V6(v6) => Address::from(v6),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        addr.to_ip()
    }
}

impl FromStr for Address {
    type Err = DecomposeError;

    fn from_str(s: &str) -> Result<Address, DecomposeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecomposeError::InvalidInput("empty address".to_string()));
        }
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| DecomposeError::InvalidInput(s.to_string()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        if self.family == other.family {
            Some(self.value.cmp(&other.value))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_mask() {
        assert_eq!(host_mask(0), 0);
        assert_eq!(host_mask(1), 1);
        assert_eq!(host_mask(32), 0xFFFF_FFFF);
        assert_eq!(host_mask(127), u128::MAX >> 1);
        assert_eq!(host_mask(128), u128::MAX);
    }

    #[test]
    fn test_family() {
        assert_eq!(Family::V4.width(), 32);
        assert_eq!(Family::V6.width(), 128);
        assert_eq!(Family::V4.byte_len(), 4);
        assert_eq!(Family::V6.byte_len(), 16);
        assert_eq!(Family::V4.max_value(), u32::MAX as u128);
        assert_eq!(Family::V6.max_value(), u128::MAX);
    }

    #[test]
    fn test_new_checks_width() {
        assert!(Address::new(Family::V4, 0xFFFF_FFFF).is_ok());
        assert!(Address::new(Family::V4, 0x1_0000_0000).is_err());
        assert!(Address::new(Family::V6, u128::MAX).is_ok());
    }

    #[test]
    fn test_from_bytes() {
        let addr = Address::from_bytes(&[192, 168, 1, 5]).unwrap();
        assert_eq!(addr.family(), Family::V4);
        assert_eq!(addr.value(), 0xC0A8_0105);
        assert_eq!(addr.to_bytes(), vec![192, 168, 1, 5]);

        let mut v6 = [0u8; 16];
        v6[0] = 0x24;
        v6[15] = 0x01;
        let addr = Address::from_bytes(&v6).unwrap();
        assert_eq!(addr.family(), Family::V6);
        assert_eq!(addr.to_bytes(), v6.to_vec());

        assert!(matches!(
            Address::from_bytes(&[10, 0, 0]),
            Err(DecomposeError::InvalidInput(_))
        ));
        assert!(Address::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_ipv4_mapped_keeps_family_until_canonical() {
        let mapped: Address = "::ffff:10.1.2.3".parse().unwrap();
        assert_eq!(mapped.family(), Family::V6);
        assert_eq!(mapped.to_string(), "::ffff:10.1.2.3");
        assert_eq!(mapped.to_string().parse::<Address>().unwrap(), mapped);

        let canonical = mapped.to_canonical();
        assert_eq!(canonical.family(), Family::V4);
        assert_eq!(canonical.to_string(), "10.1.2.3");

        let mut bytes = [0u8; 16];
        bytes[10] = 0xFF;
        bytes[11] = 0xFF;
        bytes[12..].copy_from_slice(&[10, 1, 2, 3]);
        assert_eq!(Address::from_bytes(&bytes).unwrap(), mapped);

        let plain: Address = "2400:ee00::1".parse().unwrap();
        assert_eq!(plain.to_canonical(), plain);
        let v4: Address = "10.1.2.3".parse().unwrap();
        assert_eq!(v4.to_canonical(), v4);
    }

    #[test]
    fn test_parse_and_display() {
        let addr: Address = " 192.168.1.0 ".parse().unwrap();
        assert_eq!(addr.to_string(), "192.168.1.0");

        let addr: Address = "2400:ee00:101c:6100:0:9d41:e2a9:efcf".parse().unwrap();
        assert_eq!(addr.family(), Family::V6);
        assert_eq!(addr.to_string(), "2400:ee00:101c:6100:0:9d41:e2a9:efcf");

        assert!(matches!(
            "10.0.0.256".parse::<Address>(),
            Err(DecomposeError::InvalidInput(_))
        ));
        assert!("".parse::<Address>().is_err());
        assert!("10.0.0.0/24".parse::<Address>().is_err());
    }

    #[test]
    fn test_cmp_only_within_family() {
        let a: Address = "10.0.0.1".parse().unwrap();
        let b: Address = "10.0.0.2".parse().unwrap();
        let c: Address = "::1".parse().unwrap();

        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.partial_cmp(&c), None);
    }

    #[test]
    fn test_serde_as_string() {
        let addr: Address = "10.0.0.1".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"10.0.0.1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"nope\"").is_err());
    }
}
