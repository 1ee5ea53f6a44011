use pretty_assertions::assert_eq;
use time::Weekday;

use sd_core::domain::Priority;
use sd_core::normalize::timestamps::parse_wall_clock;
use sd_core::sla::compute_due_date;

#[test]
fn p1_adds_one_hour_on_a_plain_monday() {
    // Monday 10:00 -> Monday 11:00.
    let due = compute_due_date("2025-01-06T10:00:00", Priority::P1).expect("due");
    assert_eq!(due, "2025-01-06T11:00:00");
}

#[test]
fn p1_friday_afternoon_stays_on_friday() {
    // Friday 15:00 + 1h lands on Friday 16:00; no weekend boundary crossed.
    let due = compute_due_date("2025-01-10T15:00:00", Priority::P1).expect("due");
    assert_eq!(due, "2025-01-10T16:00:00");
}

#[test]
fn p1_crossing_into_saturday_jumps_to_monday_morning() {
    // Friday 23:30 + 1h = Saturday 00:30 -> Monday 09:00.
    let due = compute_due_date("2025-01-10T23:30:00", Priority::P1).expect("due");
    assert_eq!(due, "2025-01-13T09:00:00");
}

#[test]
fn p1_entry_already_on_sunday_jumps_to_monday_morning() {
    // Sunday 14:00 + 1h is still Sunday -> Monday 09:00.
    let due = compute_due_date("2025-01-12T14:00:00", Priority::P1).expect("due");
    assert_eq!(due, "2025-01-13T09:00:00");
}

#[test]
fn p2_friday_skips_the_weekend() {
    // Friday 09:00 + 1 business day -> Monday 09:00.
    let due = compute_due_date("2025-01-10T09:00:00", Priority::P2).expect("due");
    assert_eq!(due, "2025-01-13T09:00:00");
}

#[test]
fn p2_midweek_is_next_calendar_day() {
    let due = compute_due_date("2025-01-07T11:15:00", Priority::P2).expect("due");
    assert_eq!(due, "2025-01-08T11:15:00");
}

#[test]
fn p3_counts_three_business_days() {
    // Wednesday 14:00: Thu, Fri, then Monday.
    let due = compute_due_date("2025-01-08T14:00:00", Priority::P3).expect("due");
    assert_eq!(due, "2025-01-13T14:00:00");
}

#[test]
fn business_day_tiers_never_land_on_a_weekend() {
    // Sweep a full week of entry dates for both business-day tiers.
    for day in 6..=12 {
        let entry = format!("2025-01-{day:02}T10:00:00");
        for priority in [Priority::P2, Priority::P3] {
            let due = compute_due_date(&entry, priority).expect("due");
            let entry_dt = parse_wall_clock("entry", &entry).expect("entry parse");
            let due_dt = parse_wall_clock("due", &due).expect("due parse");
            assert!(
                due_dt > entry_dt,
                "due {due} must be after entry {entry} for {priority:?}"
            );
            assert!(
                !matches!(due_dt.weekday(), Weekday::Saturday | Weekday::Sunday),
                "due {due} landed on a weekend for entry {entry}, {priority:?}"
            );
        }
    }
}

#[test]
fn p1_output_is_strictly_after_entry_all_week() {
    for day in 6..=12 {
        let entry = format!("2025-01-{day:02}T10:00:00");
        let due = compute_due_date(&entry, Priority::P1).expect("due");
        let entry_dt = parse_wall_clock("entry", &entry).expect("entry parse");
        let due_dt = parse_wall_clock("due", &due).expect("due parse");
        assert!(due_dt > entry_dt, "due {due} must be after entry {entry}");
    }
}

#[test]
fn indefinite_tiers_get_a_ten_year_sentinel() {
    let due = compute_due_date("2025-03-05T08:00:00", Priority::P4).expect("due");
    assert_eq!(due, "2035-03-05T08:00:00");

    let due = compute_due_date("2025-03-05T08:00:00", Priority::P5).expect("due");
    assert_eq!(due, "2035-03-05T08:00:00");
}

#[test]
fn sentinel_rolls_leap_day_to_march_first() {
    // 2024-02-29 has no counterpart in 2034.
    let due = compute_due_date("2024-02-29T10:00:00", Priority::P4).expect("due");
    assert_eq!(due, "2034-03-01T10:00:00");
}

#[test]
fn unparseable_entry_fails_fast() {
    let err = compute_due_date("not-a-date", Priority::P1).expect_err("must fail");
    assert_eq!(err.code, "INVALID_DATE");
}

#[test]
fn tier_lookup_rejects_unknown_tiers() {
    let err = Priority::from_tier(6).expect_err("must fail");
    assert_eq!(err.code, "UNKNOWN_PRIORITY");
    assert_eq!(Priority::from_tier(2).expect("tier 2"), Priority::P2);
}
