use time::format_description::well_known::Rfc3339;
use time::{format_description, Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::error::AppError;

// Deterministic allowlist only (no fuzzy parsing). Formats without seconds are
// accepted because date-range pickers emit them.
const DATE_TIME_FORMATS: [&str; 4] = [
    "[year]-[month]-[day]T[hour]:[minute]:[second]",
    "[year]-[month]-[day]T[hour]:[minute]",
    "[year]-[month]-[day] [hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]",
];

const DATE_ONLY_FORMAT: &str = "[year]-[month]-[day]";

/// Parse a wall-clock timestamp without shifting the written fields.
///
/// Contract (local-time preservation): the numeric wall-clock fields are taken
/// exactly as written. RFC3339 inputs keep the fields of their own offset; we
/// do NOT convert to UTC, because downstream displays and comparisons depend
/// on the local wall-clock values. Bare dates parse as midnight.
pub fn parse_wall_clock(field: &str, raw: &str) -> Result<PrimitiveDateTime, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_date(field, raw));
    }

    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(PrimitiveDateTime::new(dt.date(), dt.time()));
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(items) = format_description::parse(fmt) {
            if let Ok(pdt) = PrimitiveDateTime::parse(trimmed, &items) {
                return Ok(pdt);
            }
        }
    }

    if let Ok(items) = format_description::parse(DATE_ONLY_FORMAT) {
        if let Ok(date) = Date::parse(trimmed, &items) {
            return Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT));
        }
    }

    Err(AppError::invalid_date(field, raw))
}

/// Zone-free encoding. Round-tripping through `parse_wall_clock` keeps every
/// wall-clock field unchanged.
pub fn format_wall_clock(dt: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}
