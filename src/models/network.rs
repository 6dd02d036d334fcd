//! IPv4 network and CIDR notation utilities.
//!
//! Provides [`Network`] for representing an aligned IPv4 block, along with the
//! bit-level helpers the sizer and allocator build on.

use crate::error::{Result, VlsmError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// One past the highest IPv4 address, as a 64-bit position.
pub const ADDRESS_SPACE_END: u64 = 1 << MAX_LENGTH;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(VlsmError::InvalidBaseNetwork(format!(
            "prefix /{len} is longer than {MAX_LENGTH} bits"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
///
/// This is the shortest prefix for which `ip` is a valid network address.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// An aligned IPv4 block: a network address plus prefix length.
///
/// The address always has its host bits cleared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Create a network, rejecting addresses with host bits set.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network> {
        let network_addr = cut_addr(addr, prefix)?;
        if network_addr != addr {
            return Err(VlsmError::InvalidBaseNetwork(format!(
                "{addr}/{prefix} has host bits set, network address is {network_addr}"
            )));
        }
        Ok(Network { addr, prefix })
    }

    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// Host bits in the address are cleared, so "192.168.1.42/24" yields
    /// 192.168.1.0/24.
    pub fn parse(addr_cidr: &str) -> Result<Network> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(|| {
            VlsmError::InvalidBaseNetwork(format!("'{addr_cidr}' is not in a.b.c.d/prefix form"))
        })?;
        let addr: Ipv4Addr = addr
            .trim()
            .parse()
            .map_err(|_| VlsmError::InvalidBaseNetwork(format!("invalid address '{addr}'")))?;
        let prefix: u8 = mask
            .trim()
            .parse()
            .map_err(|_| VlsmError::InvalidBaseNetwork(format!("invalid prefix '{mask}'")))?;

        let network_addr = cut_addr(addr, prefix)?;
        if network_addr != addr {
            log::warn!("{addr}/{prefix} has host bits set, using {network_addr}/{prefix}");
        }
        Ok(Network {
            addr: network_addr,
            prefix,
        })
    }

    /// Build a network from a raw address and prefix, clearing host bits.
    pub(crate) fn from_bits(bits: u32, prefix: u8) -> Network {
        debug_assert!(prefix <= MAX_LENGTH, "prefix /{prefix} out of range");
        let right_len = MAX_LENGTH - prefix;
        let addr = ((bits as u64 >> right_len) << right_len) as u32;
        Network {
            addr: Ipv4Addr::from(addr),
            prefix,
        }
    }

    /// The network (lowest) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Total number of addresses in the block, including network and broadcast.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Position of the network address in the 32-bit space.
    pub fn start(&self) -> u64 {
        u32::from(self.addr) as u64
    }

    /// Position one past the broadcast address.
    pub fn end(&self) -> u64 {
        self.start() + self.num_addresses()
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from((self.end() - 1) as u32)
    }

    /// First usable host address.
    ///
    /// A /31 has no usable range; a /32 is a single usable host.
    pub fn first_usable(&self) -> Option<Ipv4Addr> {
        match self.prefix {
            32 => Some(self.addr),
            31 => None,
            _ => Some(Ipv4Addr::from(u32::from(self.addr) + 1)),
        }
    }

    /// Last usable host address, see [`Network::first_usable`].
    pub fn last_usable(&self) -> Option<Ipv4Addr> {
        match self.prefix {
            32 => Some(self.addr),
            31 => None,
            _ => Some(Ipv4Addr::from(u32::from(self.broadcast()) - 1)),
        }
    }

    /// Number of usable host addresses.
    pub fn usable_hosts(&self) -> u64 {
        match self.prefix {
            32 => 1,
            31 => 0,
            _ => self.num_addresses() - 2,
        }
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let pos = u32::from(ip) as u64;
        self.start() <= pos && pos < self.end()
    }

    /// True if `other` lies entirely inside this network.
    pub fn contains_network(&self, other: &Network) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    pub fn overlaps(&self, other: &Network) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}

impl FromStr for Network {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<Network> {
        Network::parse(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (addr, mask) = s
            .split_once('/')
            .ok_or_else(|| de::Error::custom(format!("invalid CIDR format: {s}")))?;
        let addr = Ipv4Addr::from_str(addr)
            .map_err(|_| de::Error::custom(format!("invalid IP address: {addr}")))?;
        let mask = u8::from_str(mask)
            .map_err(|_| de::Error::custom(format!("invalid subnet mask: {mask}")))?;

        Network::new(addr, mask).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
