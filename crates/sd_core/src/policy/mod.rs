//! Display-gating policy. The API stays the authority for enforcement; these
//! predicates encode what the UI is allowed to offer.

use crate::domain::{Role, Status, Ticket, User};

/// Lifecycle is one-directional toward {Resolved, Cancelled}. Terminal states
/// accept no transition, and a status never transitions to itself.
pub fn can_transition(from: Status, to: Status) -> bool {
    if from == to {
        return false;
    }
    match from {
        Status::Resolved | Status::Cancelled => false,
        Status::Waiting => true,
        Status::InProgress => to.is_terminal(),
    }
}

/// Due dates are mutated by admin/agent only.
pub fn can_edit_due_date(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Agent)
}

/// Tracking actions: admin, agent, or the assigned specialist, and never once
/// the ticket is terminal.
pub fn can_add_action(user: &User, ticket: &Ticket) -> bool {
    if ticket.status.is_terminal() {
        return false;
    }
    match user.role {
        Role::Admin | Role::Agent => true,
        Role::Specialist => ticket
            .assignee
            .as_ref()
            .is_some_and(|a| a.id == user.id),
    }
}

/// Directed assignability: `from` may assign to `to` when `to` appears in
/// `from.assignable_to` or `from` appears in `to.receivable_from`.
pub fn can_assign(from: &User, to: &User) -> bool {
    from.assignable_to.iter().any(|id| *id == to.id)
        || to.receivable_from.iter().any(|id| *id == from.id)
}
