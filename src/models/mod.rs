//! Domain models for VLSM planning.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - aligned IPv4 block with CIDR notation support
//! - [`HostRequirement`] and [`Allocation`] - one requested subnet and its result
//! - [`AllocationPlan`] - the outcome of a whole allocation run

mod allocation;
mod network;

// Re-export public types
pub use allocation::{Allocation, AllocationFailure, AllocationPlan, HostRequirement};
pub use network::{cut_addr, get_cidr_mask, lo_mask, Network, ADDRESS_SPACE_END, MAX_LENGTH};
