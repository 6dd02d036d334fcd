//! VLSM planning logic.
//!
//! This module contains the allocation algorithm:
//! - [`sizer`] - smallest power-of-two subnet for a host count
//! - [`allocator`] - greedy largest-first carving of a base network
//! - [`leftover`] - unused space as maximal aligned blocks

mod allocator;
mod leftover;
mod sizer;

// Re-export public functions
pub use allocator::{allocate, sort_requirements, AllocationRun};
pub use leftover::leftover_blocks;
pub use sizer::{host_bits, size_for, SubnetSize, MAX_HOST_BITS, RESERVED_ADDRESSES};
