//! Subnet sizing.
//!
//! Finds the smallest power-of-two block that holds a host requirement plus
//! the network and broadcast addresses.

use crate::error::{Result, VlsmError};
use crate::models::MAX_LENGTH;
use serde::Serialize;

/// Network and broadcast addresses reserved in every subnet.
pub const RESERVED_ADDRESSES: u64 = 2;

/// Most host bits a single subnet may use. A /0 block would be the whole
/// address space, so the largest carvable subnet is a /1.
pub const MAX_HOST_BITS: u32 = MAX_LENGTH as u32 - 1;

/// Size of the subnet needed for a host requirement.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetSize {
    /// Block size in addresses, always a power of two.
    pub subnet_size: u64,
    pub prefix: u8,
    /// `subnet_size - (hosts + 2)`.
    pub wasted: u64,
}

/// Exact `ceil(log2(total))`, with `total <= 1` giving 0.
pub fn host_bits(total: u64) -> u32 {
    if total <= 1 {
        0
    } else {
        u64::BITS - (total - 1).leading_zeros()
    }
}

/// Compute the smallest subnet that holds `hosts_required` hosts.
///
/// # Examples
/// ```
/// use vlsm_planner::processing::size_for;
/// let size = size_for(30).unwrap();
/// assert_eq!((size.subnet_size, size.prefix, size.wasted), (32, 27, 0));
/// ```
pub fn size_for(hosts_required: u64) -> Result<SubnetSize> {
    let too_large = || VlsmError::RequirementTooLarge {
        hosts: hosts_required,
    };
    let total = hosts_required
        .checked_add(RESERVED_ADDRESSES)
        .ok_or_else(too_large)?;

    let bits = host_bits(total);
    if bits > MAX_HOST_BITS {
        return Err(too_large());
    }

    let subnet_size = 1u64 << bits;
    Ok(SubnetSize {
        subnet_size,
        prefix: MAX_LENGTH - bits as u8,
        wasted: subnet_size - total,
    })
}
