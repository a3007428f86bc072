//! Ticket detail read view
//!
//! Builds the sections shown for a single ticket. Professional and connector
//! details only appear once the ticket has reached the stage that fills
//! them in.

use jiff::tz::TimeZone;

use crate::formatting::format_date_time_in;
use crate::types::{ConnectorDetail, ProDetail, Ticket};

/// A label/value line in a detail table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A titled block of rows; the title is shown even when the rows are gated out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: Option<Vec<DetailRow>>,
}

impl DetailSection {
    pub fn is_rendered(&self) -> bool {
        self.rows.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetailView {
    /// e.g. "Jane's Ticket"
    pub heading: String,
    pub summary: Vec<DetailRow>,
    pub professional: DetailSection,
    pub connector: DetailSection,
}

/// Build the detail view for `ticket`
pub fn ticket_detail(ticket: &Ticket, tz: &TimeZone) -> TicketDetailView {
    let summary = vec![
        DetailRow::new("TicketID", ticket.id.to_string()),
        DetailRow::new(
            "Appointment Date",
            ticket
                .appointment_date
                .as_ref()
                .map(|d| format_date_time_in(d, tz))
                .unwrap_or_default(),
        ),
    ];

    let status = ticket.ticket_status;
    let professional = DetailSection {
        title: "Professional Info",
        rows: status
            .has_pro()
            .then(|| pro_rows(ticket.pro_detail.as_ref())),
    };
    let connector = DetailSection {
        title: "Connector Info",
        rows: status
            .has_connector()
            .then(|| connector_rows(ticket.connector_detail.as_ref())),
    };

    TicketDetailView {
        heading: format!("{}'s Ticket", capitalize(&ticket.owner.username)),
        summary,
        professional,
        connector,
    }
}

fn pro_rows(detail: Option<&ProDetail>) -> Vec<DetailRow> {
    let default = ProDetail::default();
    let d = detail.unwrap_or(&default);
    vec![
        DetailRow::new("Full Name", full_name(&d.first_name, &d.last_name)),
        DetailRow::new("Company Name", d.company_name.clone().unwrap_or_default()),
        DetailRow::new("Phone Number", d.phone_number.clone().unwrap_or_default()),
        DetailRow::new("Email", d.email.clone().unwrap_or_default()),
        DetailRow::new("Zip Address", d.zip_address.clone().unwrap_or_default()),
        DetailRow::new(
            "Address",
            d.address
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "--".to_string()),
        ),
    ]
}

fn connector_rows(detail: Option<&ConnectorDetail>) -> Vec<DetailRow> {
    let default = ConnectorDetail::default();
    let d = detail.unwrap_or(&default);
    vec![
        DetailRow::new("Full Name", full_name(&d.first_name, &d.last_name)),
        DetailRow::new("Phone Number", d.phone_number.clone().unwrap_or_default()),
        DetailRow::new("Email", d.email.clone().unwrap_or_default()),
    ]
}

fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

/// Uppercase the first character, leave the rest untouched
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
