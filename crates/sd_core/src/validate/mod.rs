use time::PrimitiveDateTime;

use crate::domain::{Ticket, ValidationWarning};
use crate::normalize::timestamps::parse_wall_clock;

fn parse_ts(
    field: &str,
    value: Option<&str>,
    warnings: &mut Vec<ValidationWarning>,
) -> Option<PrimitiveDateTime> {
    let s = value?;
    match parse_wall_clock(field, s) {
        Ok(dt) => Some(dt),
        Err(e) => {
            warnings.push(
                ValidationWarning::new(
                    "VALIDATION_TS_PARSE_FAILED",
                    format!("Failed to parse {field}"),
                )
                .with_details(format!("value={s}; err={e}")),
            );
            None
        }
    }
}

/// Per-ticket warning sweep. Never fails; every finding is a structured
/// warning the UI can surface next to the ticket.
///
/// Checks: parseability of the three lifecycle timestamps, entry <= due
/// ordering, completion only on terminal tickets, and no tracking actions
/// dated after completion on a terminal ticket (the data model does not
/// enforce the append-only/terminal invariant itself).
pub fn validate_ticket(ticket: &Ticket) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let entry = parse_ts("entry_date", Some(&ticket.entry_date), &mut warnings);
    let due = parse_ts("due_date", Some(&ticket.due_date), &mut warnings);
    let completion = parse_ts(
        "completion_date",
        ticket.completion_date.as_deref(),
        &mut warnings,
    );

    if let (Some(entry), Some(due)) = (entry, due) {
        if due < entry {
            warnings.push(
                ValidationWarning::new(
                    "VALIDATION_TS_ORDER_VIOLATION",
                    "Timestamp order violation: entry_date must be <= due_date",
                )
                .with_details(format!("entry_date={entry}; due_date={due}")),
            );
        }
    }

    if ticket.completion_date.is_some() && !ticket.status.is_terminal() {
        warnings.push(ValidationWarning::new(
            "VALIDATION_COMPLETION_WITHOUT_TERMINAL",
            format!(
                "Ticket {} has a completion date but status {:?} is not terminal",
                ticket.id, ticket.status
            ),
        ));
    }

    if ticket.status.is_terminal() {
        if let Some(completion) = completion {
            for action in &ticket.actions {
                let Ok(action_dt) = parse_wall_clock("action.date", &action.date) else {
                    continue;
                };
                if action_dt > completion {
                    warnings.push(
                        ValidationWarning::new(
                            "VALIDATION_ACTION_AFTER_COMPLETION",
                            format!("Tracking action recorded after completion on ticket {}", ticket.id),
                        )
                        .with_details(format!(
                            "action_id={}; action_date={action_dt}; completion_date={completion}",
                            action.id
                        )),
                    );
                }
            }
        }
    }

    warnings
}
