//! REST boundary normalization.
//!
//! The backend's documents are not fully consistent: `country` arrives either
//! as a bare name string or as an `{id, country_name}` record, and an
//! assignee's area spells its category as `categoriaId` or as a nested
//! `category: {id}`. Everything is normalized here, once, so the core types
//! never branch on representation.

use serde::Deserialize;

use crate::domain::{
    Area, Assignee, Category, Country, Priority, Requester, Role, Status, Ticket, TicketAction,
    User, ValidationWarning,
};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCountry {
    Record { id: i64, country_name: String },
    Name(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategoryRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArea {
    pub id: i64,
    pub name: String,
    #[serde(rename = "categoriaId")]
    pub categoria_id: Option<i64>,
    #[serde(default)]
    pub category: Option<RawCategoryRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssignee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<RawCountry>,
    #[serde(default)]
    pub area: Option<RawArea>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRequester {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    pub id: String,
    pub date: String,
    pub action: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(rename = "userNameSnapshot", default)]
    pub user_name_snapshot: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTicket {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    #[serde(rename = "entryDate")]
    pub entry_date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    #[serde(rename = "completionDate", default)]
    pub completion_date: Option<String>,
    pub requester: RawRequester,
    #[serde(default)]
    pub assignee: Option<RawAssignee>,
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub country: Option<RawCountry>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(rename = "assignableTo", default)]
    pub assignable_to: Vec<String>,
    #[serde(rename = "receivableFrom", default)]
    pub receivable_from: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub areas: Vec<RawArea>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCountryRecord {
    pub id: i64,
    pub country_name: String,
}

fn parse_error(kind: &str, err: serde_json::Error) -> AppError {
    AppError::new("INGEST_PARSE_FAILED", format!("Malformed {kind} document"))
        .with_details(err.to_string())
}

// Bare country names are resolved against the catalog; an unresolved name is
// preserved as a warning rather than guessed at.
fn normalize_country(
    raw: Option<RawCountry>,
    countries: &[Country],
    context: &str,
    warnings: &mut Vec<ValidationWarning>,
) -> Option<Country> {
    match raw? {
        RawCountry::Record { id, country_name } => Some(Country {
            id,
            name: country_name,
        }),
        RawCountry::Name(name) => match countries.iter().find(|c| c.name == name) {
            Some(c) => Some(c.clone()),
            None => {
                warnings.push(
                    ValidationWarning::new(
                        "INGEST_COUNTRY_UNRESOLVED",
                        format!("Country name has no catalog entry for {context}"),
                    )
                    .with_details(format!("name={name}")),
                );
                None
            }
        },
    }
}

fn normalize_area(raw: RawArea) -> Area {
    let category_id = raw.categoria_id.or(raw.category.map(|c| c.id));
    Area {
        id: raw.id,
        name: raw.name,
        category_id,
    }
}

/// Normalize a raw ticket document into the canonical domain shape.
///
/// Unknown priority/status labels fail fast (`UNKNOWN_PRIORITY` /
/// `INVALID_STATUS`); representation quirks degrade to warnings.
pub fn normalize_ticket(
    raw: RawTicket,
    countries: &[Country],
) -> Result<(Ticket, Vec<ValidationWarning>), AppError> {
    let mut warnings = Vec::new();

    let priority = Priority::from_label(&raw.priority)?;
    let status = Status::from_label(&raw.status)?;

    let assignee = raw.assignee.map(|a| {
        let context = format!("ticket {} assignee", raw.id);
        Assignee {
            country: normalize_country(a.country, countries, &context, &mut warnings),
            area: a.area.map(normalize_area),
            id: a.id,
            name: a.name,
        }
    });

    let mut actions = Vec::with_capacity(raw.actions.len());
    for action in raw.actions {
        let user = match action.user.or(action.user_name_snapshot) {
            Some(u) => u,
            None => {
                warnings.push(
                    ValidationWarning::new(
                        "INGEST_ACTION_ACTOR_MISSING",
                        format!("Tracking action has no actor snapshot on ticket {}", raw.id),
                    )
                    .with_details(format!("action_id={}", action.id)),
                );
                String::new()
            }
        };
        actions.push(TicketAction {
            id: action.id,
            date: action.date,
            action: action.action,
            user,
        });
    }

    let ticket = Ticket {
        id: raw.id,
        subject: raw.subject,
        description: raw.description,
        priority,
        status,
        entry_date: raw.entry_date,
        due_date: raw.due_date,
        completion_date: raw.completion_date,
        requester: Requester {
            id: raw.requester.id,
            name: raw.requester.name,
            email: raw.requester.email,
        },
        assignee,
        actions,
    };

    Ok((ticket, warnings))
}

pub fn normalize_user(
    raw: RawUser,
    countries: &[Country],
) -> (User, Vec<ValidationWarning>) {
    let mut warnings = Vec::new();
    let context = format!("user {}", raw.id);
    let country = normalize_country(raw.country, countries, &context, &mut warnings);
    let user = User {
        id: raw.id,
        name: raw.name,
        email: raw.email,
        role: raw.role,
        country,
        area: raw.area,
        assignable_to: raw.assignable_to,
        receivable_from: raw.receivable_from,
    };
    (user, warnings)
}

/// Parse and normalize a `/tickets` response body.
pub fn parse_tickets(
    json: &str,
    countries: &[Country],
) -> Result<(Vec<Ticket>, Vec<ValidationWarning>), AppError> {
    let raw: Vec<RawTicket> = serde_json::from_str(json).map_err(|e| parse_error("ticket", e))?;
    let mut tickets = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();
    for r in raw {
        let (ticket, mut w) = normalize_ticket(r, countries)?;
        tickets.push(ticket);
        warnings.append(&mut w);
    }
    Ok((tickets, warnings))
}

/// Parse and normalize a `/users` response body.
pub fn parse_users(
    json: &str,
    countries: &[Country],
) -> Result<(Vec<User>, Vec<ValidationWarning>), AppError> {
    let raw: Vec<RawUser> = serde_json::from_str(json).map_err(|e| parse_error("user", e))?;
    let mut users = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();
    for r in raw {
        let (user, mut w) = normalize_user(r, countries);
        users.push(user);
        warnings.append(&mut w);
    }
    Ok((users, warnings))
}

/// Parse a `/categorias` response body. Each area is stamped with its owning
/// category id so the cascade filter never re-derives ownership.
pub fn parse_categories(json: &str) -> Result<Vec<Category>, AppError> {
    let raw: Vec<RawCategory> =
        serde_json::from_str(json).map_err(|e| parse_error("category", e))?;
    Ok(raw
        .into_iter()
        .map(|c| {
            let category_id = Some(c.id);
            Category {
                id: c.id,
                name: c.name,
                areas: c
                    .areas
                    .into_iter()
                    .map(|a| Area {
                        category_id,
                        ..normalize_area(a)
                    })
                    .collect(),
            }
        })
        .collect())
}

/// Parse a `/countries` response body into the catalog used for name
/// resolution.
pub fn parse_countries(json: &str) -> Result<Vec<Country>, AppError> {
    let raw: Vec<RawCountryRecord> =
        serde_json::from_str(json).map_err(|e| parse_error("country", e))?;
    Ok(raw
        .into_iter()
        .map(|c| Country {
            id: c.id,
            name: c.country_name,
        })
        .collect())
}
