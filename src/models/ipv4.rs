//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for an address/mask pair exactly as the caller
//! supplied it, along with the bit helpers the partitioner builds on.

use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses AWS reserves in every subnet.
pub const AWS_RESERVED_HOSTS: u64 = 5;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_cidr_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(len.into()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Returns the IP address following the given subnet.
pub fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(cidr)?;
    let subnet_size = 1u64 << (MAX_LENGTH - cidr);
    let network_bits = (u32::from(addr) & mask) as u64;
    let next_subnet_bits = network_bits + subnet_size;
    if next_subnet_bits > u32::MAX as u64 {
        return Err(AddressError::Overflow(format!("{addr}/{cidr}")));
    }
    Ok(Ipv4Addr::from(next_subnet_bits as u32))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of usable host addresses in an AWS subnet of the given length.
pub fn usable_hosts(len: u8) -> Result<u64, AddressError> {
    if len > MAX_LENGTH {
        return Err(AddressError::PrefixTooLong(len.into()));
    }
    let total = 1u64 << (MAX_LENGTH - len);
    Ok(total.saturating_sub(AWS_RESERVED_HOSTS))
}

/// IPv4 address with CIDR notation support.
///
/// The address is kept as given, host bits included. Use
/// [`crate::models::NetworkBlock`] for the normalized form.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, AddressError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(AddressError::InvalidFormat(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| AddressError::InvalidAddress(parts[0].to_string()))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| AddressError::InvalidMask(parts[1].to_string()))?;
        if mask > MAX_LENGTH {
            return Err(AddressError::PrefixTooLong(mask.into()));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The network address for this mask, host bits cleared.
    pub fn network(&self) -> Result<Ipv4Addr, AddressError> {
        cut_addr(self.addr, self.mask)
    }

    /// True when the supplied address has host bits set.
    pub fn has_host_bits(&self) -> bool {
        self.network().map(|n| n != self.addr).unwrap_or(false)
    }
}

impl FromStr for Ipv4 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33), Err(AddressError::PrefixTooLong(33)));
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_ip_after_subnet() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            ip_after_subnet(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 2, 0)
        );
        assert_eq!(
            ip_after_subnet(ip, 16).unwrap(),
            Ipv4Addr::new(192, 169, 0, 0)
        );
        assert_eq!(ip_after_subnet(ip, 8).unwrap(), Ipv4Addr::new(193, 0, 0, 0));
        assert_eq!(
            ip_after_subnet(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert!(matches!(
            ip_after_subnet(Ipv4Addr::new(255, 255, 255, 255), 24),
            Err(AddressError::Overflow(_))
        ));
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
    }

    #[test]
    fn test_usable_hosts() {
        assert_eq!(usable_hosts(16).unwrap(), 65531);
        assert_eq!(usable_hosts(24).unwrap(), 251);
        assert_eq!(usable_hosts(28).unwrap(), 11);
        assert_eq!(usable_hosts(30).unwrap(), 0);
        assert!(usable_hosts(33).is_err());
    }

    #[test]
    fn test_new_parse_errors() {
        assert_eq!(
            Ipv4::new("10.0.0.0"),
            Err(AddressError::InvalidFormat("10.0.0.0".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.300/16"),
            Err(AddressError::InvalidAddress("10.0.0.300".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/x"),
            Err(AddressError::InvalidMask("x".to_string()))
        );
        assert_eq!(Ipv4::new("10.0.0.0/33"), Err(AddressError::PrefixTooLong(33)));
    }

    #[test]
    fn test_host_bits() {
        let ip = Ipv4::new(" 10.0.12.7/16 ").unwrap();
        assert!(ip.has_host_bits());
        assert_eq!(ip.network().unwrap(), Ipv4Addr::new(10, 0, 0, 0));
        assert!(!Ipv4::new("10.0.0.0/16").unwrap().has_host_bits());
    }

    #[test]
    fn test_serde_string_form() {
        let ip: Ipv4 = serde_json::from_str("\"172.16.4.0/22\"").unwrap();
        assert_eq!(ip, Ipv4::new("172.16.4.0/22").unwrap());
        assert_eq!(serde_json::to_string(&ip).unwrap(), "\"172.16.4.0/22\"");
        assert!(serde_json::from_str::<Ipv4>("\"172.16.4.0\"").is_err());
    }
}
