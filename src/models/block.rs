//! Canonical network block.

use super::ipv4::{broadcast_addr, cut_addr, ip_after_subnet, usable_hosts, Ipv4, MAX_LENGTH};
use crate::error::AddressError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 range as (network address, prefix length) with all host bits zero.
///
/// Fields are private so every value goes through normalization.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Normalize a caller-supplied address/mask pair to its network block.
    pub fn new(ipv4: Ipv4) -> Result<Self, AddressError> {
        Ok(NetworkBlock {
            addr: cut_addr(ipv4.addr, ipv4.mask)?,
            prefix: ipv4.mask,
        })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Highest address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        // prefix is always <= 32 here
        broadcast_addr(self.addr, self.prefix).unwrap_or(self.addr)
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn usable_hosts(&self) -> u64 {
        usable_hosts(self.prefix).unwrap_or(0)
    }

    /// Split into the two equal children one prefix bit longer.
    pub fn halve(&self) -> Result<(NetworkBlock, NetworkBlock), AddressError> {
        let child = self.prefix + 1;
        if child > MAX_LENGTH {
            return Err(AddressError::PrefixTooLong(child.into()));
        }
        let first = NetworkBlock {
            addr: self.addr,
            prefix: child,
        };
        let second = NetworkBlock {
            addr: ip_after_subnet(self.addr, child)?,
            prefix: child,
        };
        Ok((first, second))
    }

    /// All subnets of length `prefix` tiling this block, in address order.
    pub fn subnets(&self, prefix: u8) -> Result<Vec<NetworkBlock>, AddressError> {
        if prefix > MAX_LENGTH {
            return Err(AddressError::PrefixTooLong(prefix.into()));
        }
        if prefix < self.prefix {
            return Err(AddressError::NotSmaller {
                block: self.to_string(),
                prefix,
            });
        }
        let count = 1usize << (prefix - self.prefix);
        let mut blocks = Vec::with_capacity(count);
        let mut addr = self.addr;
        for i in 0..count {
            if i > 0 {
                addr = ip_after_subnet(addr, prefix)?;
            }
            blocks.push(NetworkBlock { addr, prefix });
        }
        Ok(blocks)
    }

    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        self.addr <= addr && addr <= self.broadcast()
    }

    /// True when `other` lies completely inside this block.
    pub fn contains(&self, other: &NetworkBlock) -> bool {
        other.prefix >= self.prefix && self.contains_addr(other.addr)
    }

    pub fn overlaps(&self, other: &NetworkBlock) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl FromStr for NetworkBlock {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkBlock::new(Ipv4::new(s)?)
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
