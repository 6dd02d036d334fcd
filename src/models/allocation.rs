//! Allocation results produced by the VLSM allocator.

use super::Network;
use crate::error::VlsmError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Hosts needed in one requested subnet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HostRequirement {
    /// Position of the requirement in the caller's input.
    pub index: usize,
    /// Number of hosts needed.
    pub hosts: u64,
}

/// A subnet carved for one [`HostRequirement`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub requirement: HostRequirement,
    pub network: Network,
    /// Addresses in the subnet beyond `hosts + 2`.
    pub wasted: u64,
}

impl Allocation {
    pub fn subnet_size(&self) -> u64 {
        self.network.num_addresses()
    }

    pub fn first_usable(&self) -> Option<Ipv4Addr> {
        self.network.first_usable()
    }

    pub fn last_usable(&self) -> Option<Ipv4Addr> {
        self.network.last_usable()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }
}

/// The requirement that stopped an allocation run and why.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationFailure {
    pub requirement: HostRequirement,
    #[serde(serialize_with = "serialize_error")]
    pub error: VlsmError,
}

fn serialize_error<S>(error: &VlsmError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

/// Outcome of one allocation run.
///
/// `allocations` are in allocation order (largest requirement first). When
/// `failure` is set the run stopped at that requirement; everything before it
/// is still valid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    pub base: Network,
    pub allocations: Vec<Allocation>,
    /// Addresses of the base network not covered by any allocation.
    pub remaining: u64,
    pub failure: Option<AllocationFailure>,
    /// Unallocated tail of the base network as maximal aligned blocks.
    pub leftover: Vec<Network>,
}

impl AllocationPlan {
    /// True when the run stopped because the base network ran out of room.
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self.failure,
            Some(AllocationFailure {
                error: VlsmError::AddressSpaceExhausted { .. },
                ..
            })
        )
    }

    /// True when every requirement was allocated.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn allocated_addresses(&self) -> u64 {
        self.allocations.iter().map(Allocation::subnet_size).sum()
    }

    pub fn total_wasted(&self) -> u64 {
        self.allocations.iter().map(|a| a.wasted).sum()
    }

    /// Allocations reordered to match the caller's input order.
    pub fn in_input_order(&self) -> Vec<&Allocation> {
        let mut allocations: Vec<&Allocation> = self.allocations.iter().collect();
        allocations.sort_by_key(|a| a.requirement.index);
        allocations
    }
}
