//! VLSM subnet planning.
//!
//! Carves a base IPv4 network into the smallest subnets that fit each host
//! requirement, largest first, and reports what is left over.
//!
//! ```
//! let plan = vlsm_planner::plan("192.168.1.0/24", &[126, 30, 6]).unwrap();
//! assert_eq!(plan.allocations[1].network.to_string(), "192.168.1.128/27");
//! assert_eq!(plan.remaining, 88);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::Cli;
use std::error::Error;
use std::io;

pub use error::{Result, VlsmError};
pub use models::{Allocation, AllocationPlan, HostRequirement, Network};
pub use processing::{allocate, size_for};

/// Parse `base_cidr` and allocate one subnet per host count.
///
/// A malformed base network is an error; running out of space is not, it is
/// reported in the returned plan.
pub fn plan(base_cidr: &str, hosts: &[u64]) -> Result<AllocationPlan> {
    let base = Network::parse(base_cidr)?;
    Ok(allocate(base, hosts))
}

/// Gather input, allocate and print the plan.
pub fn run(cli: &Cli) -> std::result::Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let request = input::complete_request(
        cli.base.as_deref(),
        cli.hosts.as_deref(),
        cli.counts.as_deref(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;
    log::info!(
        "Planning {} subnet(s) in {}",
        request.hosts.len(),
        request.base
    );

    let plan = plan(&request.base, &request.hosts)?;
    print!("{}", output::render(&plan, cli.format)?);

    if let Some(failure) = &plan.failure {
        log::warn!(
            "Plan incomplete: {} of {} subnet(s) allocated, {}",
            plan.allocations.len(),
            request.hosts.len(),
            failure.error
        );
    }
    Ok(())
}
