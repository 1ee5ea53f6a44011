use time::macros::time;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, Weekday};

use crate::domain::Priority;
use crate::error::AppError;
use crate::normalize::timestamps::{format_wall_clock, parse_wall_clock};

/// Due years past this value mean "no enforced deadline" (the P4/P5 sentinel
/// range). Overdue accounting returns 0 for them.
pub const INDEFINITE_DUE_YEAR: i32 = 2030;

/// How many years past the entry date the indefinite sentinel sits.
pub const SENTINEL_YEARS: i32 = 10;

const BUSINESS_DAY_START: Time = time!(9:00);
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Saturday | Weekday::Sunday)
}

// One hour at a time, with the weekend check after each single-hour increment.
// Landing on Saturday jumps to Monday 09:00; Sunday jumps to Monday 09:00.
// Weekday evenings/nights are NOT skipped. This mirrors the published SLA
// rules exactly; do not add holiday or 9-to-5 handling here.
fn advance_business_hours(mut dt: PrimitiveDateTime, hours: u32) -> PrimitiveDateTime {
    for _ in 0..hours {
        dt += Duration::hours(1);
        match dt.weekday() {
            Weekday::Saturday => {
                dt = PrimitiveDateTime::new(dt.date() + Duration::days(2), BUSINESS_DAY_START);
            }
            Weekday::Sunday => {
                dt = PrimitiveDateTime::new(dt.date() + Duration::days(1), BUSINESS_DAY_START);
            }
            _ => {}
        }
    }
    dt
}

// Add calendar days one at a time, counting only Monday..Friday landings, so
// the result never falls on a weekend.
fn advance_business_days(mut dt: PrimitiveDateTime, days: u32) -> PrimitiveDateTime {
    let mut remaining = days;
    while remaining > 0 {
        dt += Duration::days(1);
        if !is_weekend(dt.weekday()) {
            remaining -= 1;
        }
    }
    dt
}

// Indefinite tiers get a due date SENTINEL_YEARS past entry, same wall-clock
// time. Feb 29 with no counterpart that far out rolls to Mar 1, matching
// calendar arithmetic.
fn sentinel_due(dt: PrimitiveDateTime) -> PrimitiveDateTime {
    let date = dt.date();
    let target_year = date.year() + SENTINEL_YEARS;
    let due_date = date.replace_year(target_year).unwrap_or_else(|_| {
        Date::from_calendar_date(target_year, Month::March, 1).unwrap_or(date)
    });
    PrimitiveDateTime::new(due_date, dt.time())
}

/// Derive a ticket's due date from its entry timestamp and priority tier.
///
/// - P1: 1 business hour (weekend landings jump to Monday 09:00).
/// - P2: 1 business day. The "24 Horas" label is display text only; the
///   deadline can span up to three calendar days over a weekend.
/// - P3: 3 business days.
/// - P4/P5: indefinite, encoded as an entry + 10 years sentinel.
///
/// Returns a wall-clock string; the numeric fields round-trip unchanged
/// through serialization.
pub fn compute_due_date(entry: &str, priority: Priority) -> Result<String, AppError> {
    let entry_dt = parse_wall_clock("entry_date", entry)?;

    let due = match priority {
        Priority::P1 => advance_business_hours(entry_dt, 1),
        Priority::P2 => advance_business_days(entry_dt, 1),
        Priority::P3 => advance_business_days(entry_dt, 3),
        Priority::P4 | Priority::P5 => sentinel_due(entry_dt),
    };

    Ok(format_wall_clock(due))
}

/// Whole days overdue against an explicit reference instant.
///
/// The reference is the completion timestamp when present, else the supplied
/// wall-clock "now". Due years past [`INDEFINITE_DUE_YEAR`] always yield 0;
/// that is how indefinite tickets stay out of overdue accounting. A partial
/// day of overage counts as a full day.
pub fn days_overdue_at(
    due: &str,
    completion: Option<&str>,
    reference: PrimitiveDateTime,
) -> Result<i64, AppError> {
    let due_dt = parse_wall_clock("due_date", due)?;
    if due_dt.year() > INDEFINITE_DUE_YEAR {
        return Ok(0);
    }

    let reference = match completion {
        Some(c) => parse_wall_clock("completion_date", c)?,
        None => reference,
    };

    let overage_seconds = (reference - due_dt).whole_seconds();
    if overage_seconds <= 0 {
        return Ok(0);
    }
    Ok((overage_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY)
}

/// Convenience wrapper using the current wall-clock. Output is time-dependent
/// for non-completed tickets; tests should go through [`days_overdue_at`].
pub fn days_overdue(due: &str, completion: Option<&str>) -> Result<i64, AppError> {
    days_overdue_at(due, completion, wall_clock_now())
}

/// Current wall-clock reference: the local offset when the platform exposes
/// it, UTC otherwise.
pub fn wall_clock_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
