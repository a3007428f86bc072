//! The connector-facing dashboard page
//!
//! Lists every ticket with the intake actions a connector works through:
//! scheduling the intake call, marking it done and assigning a pro.

use std::fmt;

use jiff::tz::TimeZone;

use crate::formatting::{format_date_in, format_date_time_in, format_optional_date_time};
use crate::types::Ticket;

use super::list::Column;
use super::modal::ModalKind;
use super::view::DashboardLayout;

pub const CONNECTOR_LAYOUT: DashboardLayout = DashboardLayout {
    page_title: "Dashboard",
    list_title: "All Tickets",
    has_stepper: false,
};

/// A rendered cell of the connector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// A button that opens `modal` for the row's ticket
    Action {
        label: &'static str,
        modal: ModalKind,
        ticket_id: u64,
        /// Drawn in the secondary color, e.g. a pro is already assigned
        secondary: bool,
    },
    /// Completed marker
    Done,
}

impl Cell {
    fn action(label: &'static str, modal: ModalKind, ticket_id: u64) -> Self {
        Cell::Action {
            label,
            modal,
            ticket_id,
            secondary: false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Action { label, .. } => write!(f, "[{label}]"),
            Cell::Done => f.write_str("✓"),
        }
    }
}

/// Columns of the connector ticket list, in display order
pub fn connector_columns(tz: &TimeZone) -> Vec<Column<Ticket, Cell>> {
    let created_tz = tz.clone();
    let appointment_tz = tz.clone();
    let intake_tz = tz.clone();

    vec![
        Column::new("Ticket ID", |t: &Ticket| Cell::Text(t.id.to_string())),
        Column::new("Owner", |t: &Ticket| Cell::Text(t.owner.full_name())),
        Column::new("Create Date", move |t: &Ticket| {
            Cell::Text(format_date_in(&t.created_at, &created_tz))
        }),
        Column::new("Appointment Date", move |t: &Ticket| {
            Cell::Text(format_optional_date_time(
                t.appointment_date.as_ref(),
                &appointment_tz,
                "-",
            ))
        }),
        Column::new("Phone Number", |t: &Ticket| Cell::Text(t.phone_number.clone())),
        Column::new("Intake Call Date", move |t: &Ticket| match &t.intake_call_date {
            Some(date) => Cell::Text(format_date_time_in(date, &intake_tz)),
            None => Cell::action("Set Date", ModalKind::IntakeCallDate, t.id),
        }),
        Column::new("Intake Call", |t: &Ticket| {
            if t.is_intake_call {
                Cell::Done
            } else {
                Cell::action(ModalKind::IntakeCallDone.title(), ModalKind::IntakeCallDone, t.id)
            }
        }),
        Column::new("Assign Pro", |t: &Ticket| Cell::Action {
            label: if t.pro.is_some() {
                "Pro Assigned"
            } else {
                "Assign Pro"
            },
            modal: ModalKind::AssignPro,
            ticket_id: t.id,
            secondary: t.pro.is_some(),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::list::{headers, render_rows};
    use crate::types::{Owner, TicketStatus};

    fn ticket() -> Ticket {
        Ticket {
            id: 12,
            owner: Owner {
                username: "ann".to_string(),
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
            },
            created_at: "2021-03-04T10:20:00Z".parse().unwrap(),
            ticket_status: TicketStatus::CONNECTOR_ASSIGNED,
            appointment_date: None,
            phone_number: "555-0101".to_string(),
            intake_call_date: None,
            is_intake_call: false,
            pro: None,
            pro_detail: None,
            connector_detail: None,
        }
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            headers(&connector_columns(&TimeZone::UTC)),
            vec![
                "Ticket ID",
                "Owner",
                "Create Date",
                "Appointment Date",
                "Phone Number",
                "Intake Call Date",
                "Intake Call",
                "Assign Pro",
            ]
        );
    }

    #[test]
    fn test_row_for_new_ticket_offers_actions() {
        let rows = render_rows(&connector_columns(&TimeZone::UTC), &[ticket()]);
        let row = &rows[0];
        assert_eq!(row[0], Cell::Text("12".to_string()));
        assert_eq!(row[1], Cell::Text("Ann Lee".to_string()));
        assert_eq!(row[2], Cell::Text("04/03/2021".to_string()));
        assert_eq!(row[3], Cell::Text("-".to_string()));
        assert_eq!(row[4], Cell::Text("555-0101".to_string()));
        assert_eq!(
            row[5],
            Cell::action("Set Date", ModalKind::IntakeCallDate, 12)
        );
        assert_eq!(
            row[6],
            Cell::action("Intake Call Done", ModalKind::IntakeCallDone, 12)
        );
        assert_eq!(
            row[7],
            Cell::Action {
                label: "Assign Pro",
                modal: ModalKind::AssignPro,
                ticket_id: 12,
                secondary: false,
            }
        );
    }

    #[test]
    fn test_row_for_progressed_ticket() {
        let mut t = ticket();
        t.appointment_date = Some("2021-04-01T14:30:00Z".parse().unwrap());
        t.intake_call_date = Some("2021-03-05T09:00:00Z".parse().unwrap());
        t.is_intake_call = true;
        t.pro = Some(3);

        let rows = render_rows(&connector_columns(&TimeZone::UTC), &[t]);
        let row = &rows[0];
        assert_eq!(row[3], Cell::Text("01/04/2021 14:30".to_string()));
        assert_eq!(row[5], Cell::Text("05/03/2021 09:00".to_string()));
        assert_eq!(row[6], Cell::Done);
        match &row[7] {
            Cell::Action {
                label, secondary, ..
            } => {
                assert_eq!(*label, "Pro Assigned");
                assert!(*secondary);
            }
            other => panic!("expected action, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Text("x".to_string()).to_string(), "x");
        assert_eq!(
            Cell::action("Set Date", ModalKind::IntakeCallDate, 1).to_string(),
            "[Set Date]"
        );
        assert_eq!(Cell::Done.to_string(), "✓");
    }

    #[test]
    fn test_layout_has_no_stepper() {
        assert!(!CONNECTOR_LAYOUT.has_stepper);
        assert_eq!(CONNECTOR_LAYOUT.list_title, "All Tickets");
    }
}
