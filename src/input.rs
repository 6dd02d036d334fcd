//! Reading planner input from arguments or an interactive prompt.
//!
//! The allocator takes one host count per subnet; users describe networks as
//! "types", each with a host count and a number of networks. This module does
//! that expansion.

use crate::error::{Result, VlsmError};
use crate::models::ADDRESS_SPACE_END;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, Write};

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"[\s,;]+").expect("Invalid Regex?");
}

/// Most subnets any base network can hold: every /31 in the whole space.
pub const MAX_SUBNETS: u64 = ADDRESS_SPACE_END / 2;

/// Base network and flat host list ready for allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub base: String,
    pub hosts: Vec<u64>,
}

/// Parse a list of non-negative integers separated by spaces and/or commas.
pub fn parse_number_list(input: &str) -> Result<Vec<u64>> {
    SEPARATOR
        .split(input.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| VlsmError::InvalidInput(format!("'{s}' is not a non-negative integer")))
        })
        .collect()
}

/// Expand per-type network counts and host counts into one host count per subnet.
///
/// `counts[i]` networks each need `hosts[i]` hosts.
pub fn expand_requirements(counts: &[u64], hosts: &[u64]) -> Result<Vec<u64>> {
    if counts.len() != hosts.len() {
        return Err(VlsmError::InvalidInput(format!(
            "{} network counts but {} host counts",
            counts.len(),
            hosts.len()
        )));
    }
    let total = counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .filter(|&total| total <= MAX_SUBNETS)
        .ok_or_else(|| {
            VlsmError::InvalidInput(format!(
                "more than {MAX_SUBNETS} networks requested, no base network can hold them"
            ))
        })?;
    log::debug!("expanding {} network type(s) into {total} subnet(s)", hosts.len());

    hosts
        .iter()
        .zip(counts)
        .map(|(&h, &c)| {
            usize::try_from(c)
                .map(|c| itertools::repeat_n(h, c))
                .map_err(|_| VlsmError::InvalidInput(format!("network count {c} is too large")))
        })
        .flatten_ok()
        .collect()
}

/// Build a request from command line values. Without `counts` each host count
/// is one network.
pub fn request_from_args(base: &str, hosts: &str, counts: Option<&str>) -> Result<PlanRequest> {
    let hosts = parse_number_list(hosts)?;
    let hosts = match counts {
        Some(counts) => expand_requirements(&parse_number_list(counts)?, &hosts)?,
        None => hosts,
    };
    Ok(PlanRequest {
        base: base.trim().to_string(),
        hosts,
    })
}

/// Print `question` and read one trimmed line of answer.
pub fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<String> {
    let io_err = |e: std::io::Error| VlsmError::InvalidInput(format!("reading input failed: {e}"));
    write!(writer, "{question}").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    let mut line = String::new();
    if reader.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(VlsmError::InvalidInput(format!(
            "no answer to '{}'",
            question.trim()
        )));
    }
    Ok(line.trim().to_string())
}

/// Ask for the network types: how many, networks per type and hosts per type.
pub fn prompt_hosts<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Vec<u64>> {
    let types = prompt(reader, writer, "Enter number of network types (e.g., 3): ")?;
    let types: usize = types
        .parse()
        .map_err(|_| VlsmError::InvalidInput(format!("'{types}' is not a number of types")))?;
    let counts = parse_number_list(&prompt(
        reader,
        writer,
        "Enter number of networks for each type (e.g., 1 3 3): ",
    )?)?;
    let hosts = parse_number_list(&prompt(
        reader,
        writer,
        "Enter required hosts per type (e.g., 126 30 6): ",
    )?)?;

    if counts.len() != types || hosts.len() != types {
        return Err(VlsmError::InvalidInput(format!(
            "expected {types} network counts and host counts, got {} and {}",
            counts.len(),
            hosts.len()
        )));
    }
    expand_requirements(&counts, &hosts)
}

/// Fill in whatever the command line left out by asking on `reader`.
pub fn complete_request<R: BufRead, W: Write>(
    base: Option<&str>,
    hosts: Option<&str>,
    counts: Option<&str>,
    reader: &mut R,
    writer: &mut W,
) -> Result<PlanRequest> {
    let base = match base {
        Some(base) => base.trim().to_string(),
        None => prompt(reader, writer, "Enter base network (e.g., 192.168.1.0/24): ")?,
    };
    match hosts {
        Some(hosts) => request_from_args(&base, hosts, counts),
        None => {
            let hosts = prompt_hosts(reader, writer)?;
            Ok(PlanRequest { base, hosts })
        }
    }
}
