use time::macros::datetime;

use sd_core::dashboard::build_dashboard_view;
use sd_core::demo::seed_dataset;
use sd_core::report::generate_compliance_markdown;
use sd_core::visibility::FilterState;

#[test]
fn report_is_deterministic_and_structured() {
    let seed = seed_dataset();
    let admin = seed.users[0].clone();
    let reference = datetime!(2025-10-01 00:00);
    let view = build_dashboard_view(&admin, &seed.tickets, &FilterState::default(), reference);

    let first = generate_compliance_markdown(&view, reference);
    let second = generate_compliance_markdown(&view, reference);
    assert_eq!(first, second, "identical inputs must render identically");

    assert!(first.starts_with("# SLA Compliance Summary"));
    assert!(first.contains("## KPIs"));
    assert!(first.contains("## Proportion by area"));
    assert!(first.contains("## Pending tickets (most overdue first)"));
    // One pending row per non-terminal demo ticket.
    for pending in &view.pending {
        assert!(
            first.contains(&format!("| {} |", pending.id)),
            "missing pending row for {}",
            pending.id
        );
    }
}

#[test]
fn pending_rows_follow_the_view_ordering() {
    let seed = seed_dataset();
    let admin = seed.users[0].clone();
    let reference = datetime!(2025-10-01 00:00);
    let view = build_dashboard_view(&admin, &seed.tickets, &FilterState::default(), reference);
    let report = generate_compliance_markdown(&view, reference);

    let mut last_pos = 0;
    for pending in &view.pending {
        let marker = format!("| {} |", pending.id);
        let pos = report.find(&marker).expect("row present");
        assert!(pos > last_pos, "rows out of order at {}", pending.id);
        last_pos = pos;
    }
}

#[test]
fn empty_view_renders_placeholders() {
    let seed = seed_dataset();
    let admin = seed.users[0].clone();
    let reference = datetime!(2025-10-01 00:00);
    let view = build_dashboard_view(&admin, &[], &FilterState::default(), reference);
    let report = generate_compliance_markdown(&view, reference);

    assert!(report.contains("No area activity in the filtered set."));
    assert!(report.contains("No pending tickets."));
    assert!(report.contains("| Compliance | 0.0% |"));
}
