//! Deterministic sample dataset for tests and documentation. Timestamps stay
//! in the wall-clock allowlist so SLA and overdue math works on every record.

use crate::domain::{
    Area, Assignee, Category, Country, Priority, Requester, Role, Status, Ticket, TicketAction,
    User,
};

pub struct DemoDataset {
    pub countries: Vec<Country>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
}

fn country(id: i64, name: &str) -> Country {
    Country {
        id,
        name: name.to_string(),
    }
}

fn area(id: i64, name: &str, category_id: i64) -> Area {
    Area {
        id,
        name: name.to_string(),
        category_id: Some(category_id),
    }
}

fn user(
    id: &str,
    name: &str,
    role: Role,
    country: Option<Country>,
    assignable_to: &[&str],
    receivable_from: &[&str],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@demo.local"),
        role,
        country,
        area: None,
        assignable_to: assignable_to.iter().map(|s| s.to_string()).collect(),
        receivable_from: receivable_from.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    subject: &str,
    priority: Priority,
    status: Status,
    entry: &str,
    due: &str,
    completion: Option<&str>,
    assignee: Assignee,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        subject: subject.to_string(),
        description: None,
        priority,
        status,
        entry_date: entry.to_string(),
        due_date: due.to_string(),
        completion_date: completion.map(|c| c.to_string()),
        requester: Requester {
            id: "1".to_string(),
            name: "Roberto Canto".to_string(),
            email: Some("rcanto@demo.local".to_string()),
        },
        assignee: Some(assignee),
        actions: Vec::new(),
    }
}

fn assignee(id: &str, name: &str, country: Country, area: Area) -> Assignee {
    Assignee {
        id: id.to_string(),
        name: name.to_string(),
        country: Some(country),
        area: Some(area),
    }
}

/// Two countries, the three roles, and tickets spread across priorities and
/// statuses so dashboards and reports have something to show.
pub fn seed_dataset() -> DemoDataset {
    let guatemala = country(1, "Guatemala");
    let el_salvador = country(2, "El Salvador");

    let oficina = area(1, "Oficina", 1);
    let cantina = area(2, "Cantina", 1);
    let helpdesk = area(3, "Helpdesk", 2);
    let soporte_admin = area(4, "Soporte Administrativo", 2);

    let categories = vec![
        Category {
            id: 1,
            name: "Operaciones".to_string(),
            areas: vec![oficina.clone(), cantina.clone()],
        },
        Category {
            id: 2,
            name: "Soporte".to_string(),
            areas: vec![helpdesk.clone(), soporte_admin.clone()],
        },
    ];

    let users = vec![
        user("1", "Roberto Canto", Role::Admin, None, &["2", "3", "4"], &["2", "3"]),
        user(
            "2",
            "Jefe El Salvador",
            Role::Agent,
            Some(el_salvador.clone()),
            &[],
            &["1"],
        ),
        user(
            "3",
            "Jefe Guatemala",
            Role::Agent,
            Some(guatemala.clone()),
            &["4"],
            &["1", "4"],
        ),
        user(
            "4",
            "Operativo",
            Role::Specialist,
            Some(guatemala.clone()),
            &["3"],
            &["1", "3"],
        ),
    ];

    let jefe_gt = assignee("3", "Jefe Guatemala", guatemala.clone(), soporte_admin.clone());
    let operativo = assignee("4", "Operativo", guatemala.clone(), helpdesk.clone());
    let operativo_oficina = assignee("4", "Operativo", guatemala.clone(), oficina.clone());
    let jefe_sv = assignee("2", "Jefe El Salvador", el_salvador.clone(), oficina.clone());
    let jefe_sv_cantina = assignee("2", "Jefe El Salvador", el_salvador.clone(), cantina.clone());

    let mut tickets = vec![
        ticket(
            "GT-2025-192",
            "Facturas de Comunicaciones",
            Priority::P2,
            Status::Cancelled,
            "2025-07-15T09:00:00",
            "2025-07-16T09:00:00",
            None,
            jefe_gt,
        ),
        ticket(
            "GT-2025-270",
            "Cotizar lustradora",
            Priority::P3,
            Status::Resolved,
            "2025-10-13T08:30:00",
            "2025-10-16T08:30:00",
            Some("2025-10-15T14:00:00"),
            operativo_oficina,
        ),
        ticket(
            "GT-2025-231",
            "Instalacion Antivirus Masiva",
            Priority::P1,
            Status::InProgress,
            "2025-08-13T10:00:00",
            "2025-08-13T11:00:00",
            None,
            operativo.clone(),
        ),
        ticket(
            "GT-2025-240",
            "Inventario de equipo",
            Priority::P4,
            Status::Waiting,
            "2025-08-20T10:00:00",
            "2035-08-20T10:00:00",
            None,
            operativo,
        ),
        ticket(
            "SV-2025-001",
            "Mantenimiento Aires Acondicionados",
            Priority::P2,
            Status::Waiting,
            "2025-09-15T09:00:00",
            "2025-09-16T09:00:00",
            None,
            jefe_sv.clone(),
        ),
        ticket(
            "SV-2025-002",
            "Compra de Insumos",
            Priority::P3,
            Status::InProgress,
            "2025-09-18T09:00:00",
            "2025-09-23T09:00:00",
            None,
            jefe_sv_cantina,
        ),
        ticket(
            "SV-2025-003",
            "Cambio de luminarias",
            Priority::P3,
            Status::Resolved,
            "2025-09-01T08:00:00",
            "2025-09-04T08:00:00",
            Some("2025-09-03T16:30:00"),
            jefe_sv,
        ),
    ];

    // One ticket with a tracking trail so detail views render something.
    tickets[0].actions.push(TicketAction {
        id: "1".to_string(),
        date: "2025-07-15T10:00:00".to_string(),
        action: "Revision inicial".to_string(),
        user: "Jefe Guatemala".to_string(),
    });

    DemoDataset {
        countries: vec![guatemala, el_salvador],
        categories,
        users,
        tickets,
    }
}
