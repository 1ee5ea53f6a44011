use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::domain::{KpiStats, Status, Ticket, User};
use crate::sla;
use crate::visibility::{accessible_tickets, filtered_tickets, pending_tickets, FilterState};

pub const DASHBOARD_VIEW_VERSION: u32 = 1;

/// Per-area finished/pending proportions over the filtered set, for the area
/// chart. Cancelled tickets count in neither column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AreaBreakdown {
    pub name: String,
    pub finished: i64,
    pub pending: i64,
}

/// Everything a dashboard render needs, computed in one deterministic pass.
/// Identical inputs always yield identical payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub version: u32,
    pub accessible: Vec<Ticket>,
    pub filtered: Vec<Ticket>,
    pub pending: Vec<Ticket>,
    pub stats: KpiStats,
    pub area_breakdown: Vec<AreaBreakdown>,
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// KPI counters over an already-filtered ticket set.
///
/// `total_assigned` excludes Cancelled and Waiting; `overdue` counts
/// non-terminal tickets whose due date has slipped by at least a day against
/// `reference`. Empty input degrades to all-zero stats.
pub fn compute_kpi_stats(filtered: &[Ticket], reference: PrimitiveDateTime) -> KpiStats {
    let mut total_finished = 0i64;
    let mut total_unfinished = 0i64;
    let mut in_transit = 0i64;
    let mut on_hold = 0i64;
    let mut total_assigned = 0i64;
    let mut overdue = 0i64;

    for ticket in filtered {
        match ticket.status {
            Status::Resolved => total_finished += 1,
            Status::InProgress => in_transit += 1,
            Status::Waiting => on_hold += 1,
            Status::Cancelled => {}
        }
        if !ticket.status.is_terminal() {
            total_unfinished += 1;
            if sla::days_overdue_at(&ticket.due_date, None, reference).unwrap_or(0) > 0 {
                overdue += 1;
            }
        }
        if !matches!(ticket.status, Status::Cancelled | Status::Waiting) {
            total_assigned += 1;
        }
    }

    let compliance = if total_assigned > 0 {
        round_one_decimal(total_finished as f64 / total_assigned as f64 * 100.0)
    } else {
        0.0
    };

    KpiStats {
        compliance,
        total_assigned,
        total_unfinished,
        total_finished,
        in_transit,
        on_hold,
        overdue,
    }
}

fn compute_area_breakdown(filtered: &[Ticket]) -> Vec<AreaBreakdown> {
    // BTreeMap keys give a deterministic name ordering.
    let mut by_area: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for ticket in filtered {
        let Some(area_name) = ticket
            .assignee
            .as_ref()
            .and_then(|a| a.area.as_ref())
            .map(|a| a.name.clone())
        else {
            continue;
        };
        let entry = by_area.entry(area_name).or_default();
        match ticket.status {
            Status::Resolved => entry.0 += 1,
            Status::Cancelled => {}
            Status::Waiting | Status::InProgress => entry.1 += 1,
        }
    }

    by_area
        .into_iter()
        .filter(|(_, (finished, pending))| *finished > 0 || *pending > 0)
        .map(|(name, (finished, pending))| AreaBreakdown {
            name,
            finished,
            pending,
        })
        .collect()
}

/// Build the full dashboard payload: accessible scope, filtered set, pending
/// table (date-range carve-out applied), KPI stats and area proportions.
pub fn build_dashboard_view(
    user: &User,
    tickets: &[Ticket],
    filter: &FilterState,
    reference: PrimitiveDateTime,
) -> DashboardView {
    let accessible = accessible_tickets(user, tickets);
    let filtered = filtered_tickets(user, tickets, filter);
    let pending = pending_tickets(user, tickets, filter, reference);
    let stats = compute_kpi_stats(&filtered, reference);
    let area_breakdown = compute_area_breakdown(&filtered);

    DashboardView {
        version: DASHBOARD_VIEW_VERSION,
        accessible,
        filtered,
        pending,
        stats,
        area_breakdown,
    }
}
