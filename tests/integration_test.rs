//! Integration tests for vlsm-planner
//!
//! These tests drive the public API from raw input to rendered output.

use vlsm_planner::{
    input::{expand_requirements, request_from_args},
    output::{render_csv, render_json, render_table},
    plan, size_for, VlsmError,
};

#[test]
fn test_full_workflow() {
    let request = request_from_args("192.168.1.0/24", "126 30 6", Some("1 2 3")).unwrap();
    assert_eq!(request.hosts, vec![126, 30, 30, 6, 6, 6]);

    let plan = plan(&request.base, &request.hosts).expect("valid base network");
    assert!(plan.is_complete());

    let networks: Vec<String> = plan
        .allocations
        .iter()
        .map(|a| a.network.to_string())
        .collect();
    assert_eq!(
        networks,
        vec![
            "192.168.1.0/25",
            "192.168.1.128/27",
            "192.168.1.160/27",
            "192.168.1.192/29",
            "192.168.1.200/29",
            "192.168.1.208/29",
        ]
    );
    assert_eq!(plan.remaining, 256 - 128 - 64 - 24);

    let table = render_table(&plan);
    assert!(table.contains("Remaining unused IPs: 40"));
    assert!(table.contains("192.168.1.216/29, 192.168.1.224/27"));
    assert!(render_csv(&plan).lines().count() > plan.allocations.len());
    assert!(render_json(&plan).unwrap().contains("\"192.168.1.208/29\""));
}

#[test]
fn test_reference_scenario() {
    let plan = plan("192.168.1.0/24", &[126, 30, 6]).unwrap();
    assert_eq!(plan.allocations.len(), 3);
    assert_eq!(plan.allocations[0].network.to_string(), "192.168.1.0/25");
    assert_eq!(plan.allocations[1].network.to_string(), "192.168.1.128/27");
    assert_eq!(plan.allocations[2].network.to_string(), "192.168.1.160/29");
    assert!(plan.allocations.iter().all(|a| a.wasted == 0));
    assert_eq!(plan.remaining, 88);
}

#[test]
fn test_base_too_small() {
    let plan = plan("192.168.1.0/30", &[10]).unwrap();
    assert!(plan.allocations.is_empty());
    assert!(plan.is_exhausted());
    assert_eq!(plan.remaining, 4);
}

#[test]
fn test_requirement_too_large() {
    assert_eq!(
        size_for(1 << 31).unwrap_err(),
        VlsmError::RequirementTooLarge { hosts: 1 << 31 }
    );

    let plan = plan("10.0.0.0/16", &[100, 1 << 31, 5]).unwrap();
    assert!(plan.allocations.is_empty());
    assert!(matches!(
        plan.failure.unwrap().error,
        VlsmError::RequirementTooLarge { .. }
    ));
}

#[test]
fn test_invalid_base_network() {
    for base in ["192.168.1.0", "192.168.1.0/40", "300.1.1.1/24", "garbage"] {
        assert!(
            matches!(plan(base, &[10]), Err(VlsmError::InvalidBaseNetwork(_))),
            "{base} should be rejected"
        );
    }
}

#[test]
fn test_host_bits_masked() {
    let plan = plan("10.20.30.40/16", &[1000]).unwrap();
    assert_eq!(plan.base.to_string(), "10.20.0.0/16");
    assert_eq!(plan.allocations[0].network.to_string(), "10.20.0.0/22");
}

#[test]
fn test_runs_are_independent() {
    let first = plan("10.0.0.0/24", &[50, 50]).unwrap();
    let second = plan("10.0.0.0/24", &[50, 50]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_large_plan_properties() {
    let hosts = expand_requirements(&[2, 10, 40, 100], &[4000, 500, 60, 2]).unwrap();
    let plan = plan("10.0.0.0/16", &hosts).unwrap();
    assert!(plan.is_complete());

    let mut previous_end = plan.base.start();
    for a in &plan.allocations {
        assert_eq!(a.network.start(), previous_end);
        assert!(plan.base.contains_network(&a.network));
        previous_end = a.network.end();
    }
    assert_eq!(
        plan.remaining,
        plan.base.num_addresses() - plan.allocated_addresses()
    );
}
