//! Terminal output.
//!
//! Renders a plan as the fixed-width table printed by the CLI.

use crate::error::VlsmError;
use crate::models::{AllocationPlan, Network};
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

const TABLE_WIDTH: usize = 100;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Format a usable host range, "N/A" when the subnet has none.
pub fn format_usable(first: Option<Ipv4Addr>, last: Option<Ipv4Addr>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "N/A".to_string(),
    }
}

/// Render the plan as a fixed-width table.
pub fn render_table(plan: &AllocationPlan) -> String {
    let heavy = "=".repeat(TABLE_WIDTH);
    let mut lines = vec![
        format!(
            "Base network: {} ({} addresses)",
            plan.base,
            plan.base.num_addresses()
        ),
        heavy.clone(),
        format!(
            "{:<8}{:<20}{:<8}{:<34}{:<18}{}",
            "Hosts", "Network Address", "Prefix", "Usable IPs", "Broadcast", "Wasted IPs"
        ),
        "-".repeat(TABLE_WIDTH),
    ];

    for a in &plan.allocations {
        lines.push(format!(
            "{:<8}{:<20}{:<8}{:<34}{:<18}{}",
            a.requirement.hosts,
            a.network.addr(),
            format!("/{}", a.network.prefix()),
            format_usable(a.first_usable(), a.last_usable()),
            a.broadcast(),
            a.wasted
        ));
    }

    if let Some(failure) = &plan.failure {
        let reason = match &failure.error {
            VlsmError::AddressSpaceExhausted { .. } => format!(
                "Out of IP range. No space for subnet requiring {} hosts.",
                failure.requirement.hosts
            ),
            other => other.to_string(),
        };
        lines.push(format!("\n{} {reason}", "⚠".yellow().bold()));
    }

    lines.push(heavy.clone());
    lines.push(format!(
        "Wasted IPs in allocated subnets: {}",
        plan.total_wasted()
    ));
    lines.push(format!("Remaining unused IPs: {}", plan.remaining));
    if !plan.leftover.is_empty() {
        lines.push(format!(
            "Free blocks: {}",
            plan.leftover.iter().map(Network::to_string).join(", ")
        ));
    }
    lines.push(heavy);

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::allocate;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_usable() {
        let first = Some(Ipv4Addr::new(10, 0, 0, 1));
        let last = Some(Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(format_usable(first, last), "10.0.0.1 - 10.0.0.6");
        assert_eq!(format_usable(None, None), "N/A");
    }

    #[test]
    fn test_render_table() {
        let plan = allocate(Network::parse("192.168.1.0/24").unwrap(), &[126, 30, 6]);
        let table = render_table(&plan);

        assert!(table.contains("Network Address"));
        assert!(table.contains("192.168.1.0         /25     192.168.1.1 - 192.168.1.126"));
        assert!(table.contains("192.168.1.128       /27     192.168.1.129 - 192.168.1.158"));
        assert!(table.contains("192.168.1.167"));
        assert!(table.contains("Wasted IPs in allocated subnets: 0"));
        assert!(table.contains("Remaining unused IPs: 88"));
        assert!(table.contains("Free blocks: 192.168.1.168/29, 192.168.1.176/28, 192.168.1.192/26"));
        assert!(!table.contains("Out of IP range"));
        assert!(table.starts_with("Base network: 192.168.1.0/24 (256 addresses)\n"));
        assert!(table.ends_with(&format!("{}\n", "=".repeat(TABLE_WIDTH))));
    }

    #[test]
    fn test_render_table_exhausted() {
        let plan = allocate(Network::parse("192.168.1.0/30").unwrap(), &[10]);
        let table = render_table(&plan);
        assert!(table.contains("Out of IP range. No space for subnet requiring 10 hosts."));
        assert!(table.contains("Remaining unused IPs: 4"));
        assert!(table.contains("Free blocks: 192.168.1.0/30"));
    }

    #[test]
    fn test_render_table_point_to_point() {
        let plan = allocate(Network::parse("10.0.0.0/31").unwrap(), &[0]);
        let table = render_table(&plan);
        assert!(table.contains("10.0.0.0            /31     N/A"));
        assert!(!table.contains("Free blocks"));
    }
}
