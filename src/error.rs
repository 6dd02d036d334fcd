//! Error types for VLSM planning.

use thiserror::Error;

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, VlsmError>;

/// Planner errors.
///
/// Allocation failures ([`VlsmError::RequirementTooLarge`] and
/// [`VlsmError::AddressSpaceExhausted`]) stop a run but never discard the
/// subnets already carved; they are carried inside the returned plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VlsmError {
    #[error("Invalid base network: {0}")]
    InvalidBaseNetwork(String),

    #[error("Requirement of {hosts} hosts does not fit in a 32-bit address space")]
    RequirementTooLarge { hosts: u64 },

    #[error(
        "Address space exhausted: no room for a /{prefix} subnet ({hosts} hosts), {available} addresses left"
    )]
    AddressSpaceExhausted {
        hosts: u64,
        prefix: u8,
        available: u64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VlsmError {
    /// True for failures that stop an allocation run part way through.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            VlsmError::RequirementTooLarge { .. } | VlsmError::AddressSpaceExhausted { .. }
        )
    }
}
