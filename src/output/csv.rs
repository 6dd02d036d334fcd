//! CSV output formatting for allocation plans.

use crate::models::AllocationPlan;

use super::terminal::format_field;

const FREE_MARKER: &str = "-free-";

/// Render the plan as CSV: one row per allocation, then one per free block.
pub fn render_csv(plan: &AllocationPlan) -> String {
    log::info!(
        "#Start render_csv() {} allocation(s), {} free block(s)",
        plan.allocations.len(),
        plan.leftover.len()
    );
    let mut lines = vec![
        r#" "cnt",   "hosts",        "subnet_cidr",  "first_usable",   "last_usable",     "broadcast", "usable", "wasted""#
            .to_string(),
    ];

    for (i, a) in plan.allocations.iter().enumerate() {
        lines.push(format!(
            "{cnt},{hosts},{cidr},{first},{last},{broadcast},{usable},{wasted}",
            cnt = format_field(i + 1, 6),
            hosts = format_field(a.requirement.hosts, 8),
            cidr = format_field(a.network, 20),
            first = format_field(optional(a.first_usable()), 17),
            last = format_field(optional(a.last_usable()), 17),
            broadcast = format_field(a.broadcast(), 17),
            usable = format_field(a.network.usable_hosts(), 9),
            wasted = format_field(a.wasted, 9),
        ));
    }

    for block in &plan.leftover {
        lines.push(format!(
            "{cnt},{hosts},{cidr},{first},{last},{broadcast},{usable},{wasted}",
            cnt = format_field(0, 6),
            hosts = format_field(FREE_MARKER, 8),
            cidr = format_field(block, 20),
            first = format_field(optional(block.first_usable()), 17),
            last = format_field(optional(block.last_usable()), 17),
            broadcast = format_field(block.broadcast(), 17),
            usable = format_field(block.usable_hosts(), 9),
            wasted = format_field(block.num_addresses(), 9),
        ));
    }

    if let Some(failure) = &plan.failure {
        lines.push(format!(
            "# stopped at requirement {} ({} hosts): {}",
            failure.requirement.index + 1,
            failure.requirement.hosts,
            failure.error
        ));
    }

    lines.join("\n") + "\n"
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Network;
    use crate::processing::allocate;

    #[test]
    fn test_render_csv() {
        let plan = allocate(Network::parse("192.168.1.0/24").unwrap(), &[126, 30, 6]);
        let csv = render_csv(&plan);
        let lines: Vec<&str> = csv.lines().collect();

        // header, 3 allocations, 3 free blocks
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("\"subnet_cidr\""));
        assert!(lines[1].contains("\"192.168.1.0/25\""));
        assert!(lines[1].contains("\"192.168.1.126\""));
        assert!(lines[3].contains("\"192.168.1.160/29\""));
        assert!(lines[4].contains("\"-free-\""));
        assert!(lines[6].contains("\"192.168.1.192/26\""));
        assert!(!csv.contains("# stopped"));
        assert!(csv.ends_with("\"64\"\n"));
    }

    #[test]
    fn test_render_csv_failure() {
        let plan = allocate(Network::parse("10.0.0.0/29").unwrap(), &[2, 6]);
        let csv = render_csv(&plan);
        assert!(csv.contains("\"10.0.0.0/29\""));
        assert!(csv.contains("# stopped at requirement 1 (2 hosts)"));
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(Some(5)), "5");
        assert_eq!(optional::<u8>(None), "N/A");
    }
}
