use time::PrimitiveDateTime;

use crate::dashboard::DashboardView;
use crate::sla;

/// Render a deterministic Markdown compliance summary from a dashboard view.
///
/// The view's own orderings are stable, so output is snapshot-testable. The
/// reference clock must match the one the view was built with for the overdue
/// column to line up.
pub fn generate_compliance_markdown(view: &DashboardView, reference: PrimitiveDateTime) -> String {
    let mut out = String::new();

    out.push_str("# SLA Compliance Summary\n\n");

    out.push_str("## KPIs\n\n");
    out.push_str("| Metric | Value |\n|---|---|\n");
    out.push_str(&format!("| Compliance | {:.1}% |\n", view.stats.compliance));
    out.push_str(&format!("| Assigned | {} |\n", view.stats.total_assigned));
    out.push_str(&format!("| Finished | {} |\n", view.stats.total_finished));
    out.push_str(&format!(
        "| Unfinished | {} |\n",
        view.stats.total_unfinished
    ));
    out.push_str(&format!("| In progress | {} |\n", view.stats.in_transit));
    out.push_str(&format!("| On hold | {} |\n", view.stats.on_hold));
    out.push_str(&format!("| Overdue | {} |\n", view.stats.overdue));
    out.push('\n');

    out.push_str("## Proportion by area\n\n");
    if view.area_breakdown.is_empty() {
        out.push_str("No area activity in the filtered set.\n");
    } else {
        out.push_str("| Area | Finished | Pending |\n|---|---|---|\n");
        for row in &view.area_breakdown {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                row.name, row.finished, row.pending
            ));
        }
    }
    out.push('\n');

    out.push_str("## Pending tickets (most overdue first)\n\n");
    if view.pending.is_empty() {
        out.push_str("No pending tickets.\n");
    } else {
        out.push_str("| Ticket | Priority | Assignee | Due | Days overdue |\n|---|---|---|---|---|\n");
        for ticket in &view.pending {
            let days = sla::days_overdue_at(&ticket.due_date, None, reference).unwrap_or(0);
            let assignee = ticket
                .assignee
                .as_ref()
                .map(|a| a.name.as_str())
                .unwrap_or("Unassigned");
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                ticket.id,
                ticket.priority.tier(),
                assignee,
                ticket.due_date,
                days
            ));
        }
    }

    out
}
