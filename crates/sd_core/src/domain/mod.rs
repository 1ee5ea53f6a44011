use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Canonical ticket/user representations used by the SLA calculator, the
/// visibility engine and the dashboard aggregation.
///
/// Notes:
/// - Timestamps are wall-clock strings (`YYYY-MM-DDTHH:MM:SS`, no zone). They
///   are parsed where computed; unparseable values surface as validation
///   warnings or `INVALID_DATE` errors, never as silent defaults.
/// - The backend's duck-typed shapes (country as string or object, two ways of
///   spelling the area's category) are normalized in `ingest::rest` before any
///   of these types exist. The core never branches on representation.
///
/// Priority tiers carry the SLA contract. The serde labels are the wire/display
/// strings the backend uses; business-rule dispatch goes through the enum, never
/// through label text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    #[serde(rename = "Prioridad 1 (1 Hora)")]
    P1,
    #[serde(rename = "Prioridad 2 (24 Horas)")]
    P2,
    #[serde(rename = "Prioridad 3 (72 Horas)")]
    P3,
    #[serde(rename = "Prioridad 4 (Indefinido)")]
    P4,
    #[serde(rename = "Prioridad 5 (Indefinido)")]
    P5,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::P1,
        Priority::P2,
        Priority::P3,
        Priority::P4,
        Priority::P5,
    ];

    pub fn tier(self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::P4 => 4,
            Priority::P5 => 5,
        }
    }

    pub fn from_tier(tier: u8) -> Result<Self, AppError> {
        match tier {
            1 => Ok(Priority::P1),
            2 => Ok(Priority::P2),
            3 => Ok(Priority::P3),
            4 => Ok(Priority::P4),
            5 => Ok(Priority::P5),
            other => Err(AppError::unknown_priority(other)),
        }
    }

    /// Display/wire label. Kept separate from tier dispatch on purpose.
    pub fn label(self) -> &'static str {
        match self {
            Priority::P1 => "Prioridad 1 (1 Hora)",
            Priority::P2 => "Prioridad 2 (24 Horas)",
            Priority::P3 => "Prioridad 3 (72 Horas)",
            Priority::P4 => "Prioridad 4 (Indefinido)",
            Priority::P5 => "Prioridad 5 (Indefinido)",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| AppError::unknown_priority(label))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    #[serde(rename = "En Espera")]
    Waiting,
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Finalizado")]
    Resolved,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Waiting,
        Status::InProgress,
        Status::Resolved,
        Status::Cancelled,
    ];

    /// Terminal states accept no further transitions or tracking actions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Resolved | Status::Cancelled)
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Waiting => "En Espera",
            Status::InProgress => "En Progreso",
            Status::Resolved => "Finalizado",
            Status::Cancelled => "Cancelado",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| {
                AppError::new("INVALID_STATUS", "Unrecognized ticket status")
                    .with_details(format!("value={label}"))
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Specialist,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

/// Two-level taxonomy: a category owns its areas; each area belongs to exactly
/// one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub areas: Vec<Area>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub country: Option<Country>,
    pub area: Option<Area>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requester {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

/// Append-only tracking log entry. `user` is an actor-name snapshot taken when
/// the action was recorded, not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketAction {
    pub id: String,
    pub date: String,
    pub action: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub entry_date: String,
    pub due_date: String,
    pub completion_date: Option<String>,
    pub requester: Requester,
    pub assignee: Option<Assignee>,
    pub actions: Vec<TicketAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub country: Option<Country>,
    pub area: Option<String>,
    /// Users this user may assign tickets to.
    pub assignable_to: Vec<String>,
    /// Users who may assign tickets to this user.
    pub receivable_from: Vec<String>,
}

/// Dashboard KPI counters over a filtered ticket set.
///
/// `compliance` is finished / total_assigned * 100, rounded to one decimal,
/// and 0 when nothing is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiStats {
    pub compliance: f64,
    pub total_assigned: i64,
    pub total_unfinished: i64,
    pub total_finished: i64,
    pub in_transit: i64,
    pub on_hold: i64,
    pub overdue: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
