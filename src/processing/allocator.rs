//! Greedy VLSM allocation.
//!
//! Requirements are carved largest first from a cursor that walks the base
//! network. Because every block is a power of two and sizes never grow, each
//! block starts on its own alignment boundary.

use super::leftover::leftover_blocks;
use super::sizer::size_for;
use crate::error::{Result, VlsmError};
use crate::models::{
    lo_mask, Allocation, AllocationFailure, AllocationPlan, HostRequirement, Network,
    ADDRESS_SPACE_END,
};
use std::net::Ipv4Addr;

/// State of a single allocation pass.
///
/// Created per call to [`allocate`] and consumed into the returned plan.
#[derive(Debug)]
pub struct AllocationRun {
    base: Network,
    /// Next free position, may reach `ADDRESS_SPACE_END`.
    cursor: u64,
    remaining: u64,
    allocations: Vec<Allocation>,
}

impl AllocationRun {
    pub fn new(base: Network) -> AllocationRun {
        AllocationRun {
            base,
            cursor: base.start(),
            remaining: base.num_addresses(),
            allocations: Vec::new(),
        }
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Carve the subnet for `requirement` at the cursor and advance past it.
    pub fn carve(&mut self, requirement: HostRequirement) -> Result<&Allocation> {
        let size = size_for(requirement.hosts)?;

        let end = self.cursor + size.subnet_size;
        if end > self.base.end() || end > ADDRESS_SPACE_END {
            return Err(VlsmError::AddressSpaceExhausted {
                hosts: requirement.hosts,
                prefix: size.prefix,
                available: self.remaining,
            });
        }

        // a block may only start on a multiple of its own size
        if self.cursor % size.subnet_size != 0 {
            return Err(VlsmError::InvalidInput(format!(
                "requirement #{} ({} hosts) needs a /{} but the cursor is only aligned to /{}, carve larger requirements first",
                requirement.index,
                requirement.hosts,
                size.prefix,
                lo_mask(Ipv4Addr::from(self.cursor as u32))
            )));
        }
        let network = Network::from_bits(self.cursor as u32, size.prefix);
        log::debug!(
            "carved {network} for requirement #{} ({} hosts, {} wasted)",
            requirement.index,
            requirement.hosts,
            size.wasted
        );

        self.cursor = network.end();
        self.remaining -= size.subnet_size;
        self.allocations.push(Allocation {
            requirement,
            network,
            wasted: size.wasted,
        });
        Ok(&self.allocations[self.allocations.len() - 1])
    }

    /// Close the run, attaching the failure that stopped it (if any).
    pub fn finish(self, failure: Option<AllocationFailure>) -> AllocationPlan {
        let leftover = leftover_blocks(&self.base, self.cursor);
        AllocationPlan {
            base: self.base,
            allocations: self.allocations,
            remaining: self.remaining,
            failure,
            leftover,
        }
    }
}

/// Tag host counts with their input position and sort them largest first.
///
/// The sort is stable, so equal host counts keep their input order.
pub fn sort_requirements(hosts: &[u64]) -> Vec<HostRequirement> {
    let mut requirements: Vec<HostRequirement> = hosts
        .iter()
        .enumerate()
        .map(|(index, &hosts)| HostRequirement { index, hosts })
        .collect();
    requirements.sort_by(|a, b| b.hosts.cmp(&a.hosts));
    requirements
}

/// Allocate one subnet per host requirement inside `base`.
///
/// Stops at the first requirement that cannot be placed; allocations made
/// before it are kept in the returned plan.
pub fn allocate(base: Network, hosts: &[u64]) -> AllocationPlan {
    log::info!(
        "#Start allocate() base={base} requirements={}",
        hosts.len()
    );
    let mut run = AllocationRun::new(base);
    let mut failure = None;

    for requirement in sort_requirements(hosts) {
        if let Err(error) = run.carve(requirement) {
            if !error.is_allocation_failure() {
                log::error!("Unexpected error carving requirement #{}: {error}", requirement.index);
            }
            log::warn!(
                "Stopped at requirement #{} ({} hosts): {error}",
                requirement.index,
                requirement.hosts
            );
            failure = Some(AllocationFailure { requirement, error });
            break;
        }
    }

    let plan = run.finish(failure);
    log::info!(
        "# Allocated {} subnet(s), {} address(es) remaining",
        plan.allocations.len(),
        plan.remaining
    );
    plan
}
