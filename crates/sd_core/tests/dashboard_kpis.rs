use pretty_assertions::assert_eq;
use time::macros::datetime;

use sd_core::dashboard::{build_dashboard_view, compute_kpi_stats, DASHBOARD_VIEW_VERSION};
use sd_core::demo::seed_dataset;
use sd_core::domain::{Role, Status, Ticket, User};
use sd_core::visibility::FilterState;

fn admin() -> User {
    User {
        id: "a".to_string(),
        name: "Admin".to_string(),
        email: "a@test.local".to_string(),
        role: Role::Admin,
        country: None,
        area: None,
        assignable_to: Vec::new(),
        receivable_from: Vec::new(),
    }
}

fn with_status(mut ticket: Ticket, status: Status) -> Ticket {
    ticket.status = status;
    ticket
}

#[test]
fn kpi_counters_split_by_status() {
    let seed = seed_dataset();
    let base = seed.tickets[0].clone();
    let tickets = vec![
        with_status(base.clone(), Status::Resolved),
        with_status(base.clone(), Status::Resolved),
        with_status(base.clone(), Status::InProgress),
        with_status(base.clone(), Status::Waiting),
        with_status(base, Status::Cancelled),
    ];

    let stats = compute_kpi_stats(&tickets, datetime!(2025-01-01 00:00));
    assert_eq!(stats.total_finished, 2);
    assert_eq!(stats.in_transit, 1);
    assert_eq!(stats.on_hold, 1);
    // Assigned excludes Cancelled and Waiting.
    assert_eq!(stats.total_assigned, 3);
    // Unfinished excludes both terminal states.
    assert_eq!(stats.total_unfinished, 2);
}

#[test]
fn compliance_rounds_to_one_decimal() {
    let seed = seed_dataset();
    let base = seed.tickets[0].clone();
    let tickets = vec![
        with_status(base.clone(), Status::Resolved),
        with_status(base.clone(), Status::InProgress),
        with_status(base, Status::InProgress),
    ];

    let stats = compute_kpi_stats(&tickets, datetime!(2025-01-01 00:00));
    // 1 finished of 3 assigned -> 33.333...% -> 33.3.
    assert_eq!(stats.compliance, 33.3);
}

#[test]
fn compliance_is_zero_when_nothing_is_assigned() {
    let seed = seed_dataset();
    let base = seed.tickets[0].clone();
    let tickets = vec![
        with_status(base.clone(), Status::Waiting),
        with_status(base, Status::Cancelled),
    ];

    let stats = compute_kpi_stats(&tickets, datetime!(2025-01-01 00:00));
    assert_eq!(stats.total_assigned, 0);
    assert_eq!(stats.compliance, 0.0);
}

#[test]
fn overdue_counts_only_non_terminal_slipped_tickets() {
    let seed = seed_dataset();
    let mut late_open = seed.tickets[0].clone();
    late_open.status = Status::InProgress;
    late_open.due_date = "2025-01-01T00:00:00".to_string();
    let mut late_resolved = late_open.clone();
    late_resolved.status = Status::Resolved;
    let mut on_time = late_open.clone();
    on_time.due_date = "2025-12-01T00:00:00".to_string();

    let stats = compute_kpi_stats(
        &[late_open, late_resolved, on_time],
        datetime!(2025-06-01 00:00),
    );
    assert_eq!(stats.overdue, 1);
}

#[test]
fn empty_input_yields_all_zero_stats() {
    let stats = compute_kpi_stats(&[], datetime!(2025-01-01 00:00));
    assert_eq!(stats.total_assigned, 0);
    assert_eq!(stats.total_finished, 0);
    assert_eq!(stats.total_unfinished, 0);
    assert_eq!(stats.in_transit, 0);
    assert_eq!(stats.on_hold, 0);
    assert_eq!(stats.overdue, 0);
    assert_eq!(stats.compliance, 0.0);
}

#[test]
fn dashboard_view_assembles_all_sections() {
    let seed = seed_dataset();
    let reference = datetime!(2025-10-01 00:00);
    let view = build_dashboard_view(&admin(), &seed.tickets, &FilterState::default(), reference);

    assert_eq!(view.version, DASHBOARD_VIEW_VERSION);
    assert_eq!(view.accessible.len(), seed.tickets.len());
    assert_eq!(view.filtered.len(), seed.tickets.len());
    // Pending excludes the resolved and cancelled demo tickets.
    assert!(view.pending.iter().all(|t| !t.status.is_terminal()));
    assert!(view.pending.len() < seed.tickets.len());
    // Area names are deterministic and deduplicated.
    let names: Vec<&str> = view.area_breakdown.iter().map(|a| a.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted, "area breakdown must be name-ordered and unique");
}

#[test]
fn dashboard_view_is_deterministic() {
    let seed = seed_dataset();
    let reference = datetime!(2025-10-01 00:00);
    let filter = FilterState {
        country: Some(1),
        ..FilterState::default()
    };
    let first = build_dashboard_view(&admin(), &seed.tickets, &filter, reference);
    let second = build_dashboard_view(&admin(), &seed.tickets, &filter, reference);
    assert_eq!(first, second);
}

#[test]
fn area_breakdown_ignores_cancelled_only_areas() {
    let seed = seed_dataset();
    let mut cancelled = seed.tickets[0].clone();
    cancelled.status = Status::Cancelled;
    let view = build_dashboard_view(
        &admin(),
        &[cancelled],
        &FilterState::default(),
        datetime!(2025-10-01 00:00),
    );
    assert!(
        view.area_breakdown.is_empty(),
        "an area with only cancelled tickets must not chart"
    );
}
