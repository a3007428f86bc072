//! Modal state for the dashboard page
//!
//! A single modal slot. Opening replaces the selected ticket and the modal
//! kind together, so content rendered for one selection never carries over
//! into another.

use std::fmt;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::formatting::format_date_time_in;
use crate::types::Ticket;

/// The edits a dashboard row can open a modal for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    AssignPro,
    IntakeCallDate,
    IntakeCallDone,
}

impl ModalKind {
    pub const ALL: [ModalKind; 3] = [
        ModalKind::AssignPro,
        ModalKind::IntakeCallDate,
        ModalKind::IntakeCallDone,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ModalKind::AssignPro => "Assign Pro",
            ModalKind::IntakeCallDate => "Intake Call Date",
            ModalKind::IntakeCallDone => "Intake Call Done",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The value a modal hands to the backend when submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSubmission {
    AssignPro { pro_id: u64 },
    IntakeCallDate(Timestamp),
    IntakeCallDone,
}

impl ModalSubmission {
    pub fn kind(&self) -> ModalKind {
        match self {
            ModalSubmission::AssignPro { .. } => ModalKind::AssignPro,
            ModalSubmission::IntakeCallDate(_) => ModalKind::IntakeCallDate,
            ModalSubmission::IntakeCallDone => ModalKind::IntakeCallDone,
        }
    }
}

/// Body of an open modal, derived from the selected ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub kind: ModalKind,
    pub ticket_id: u64,
    pub owner_name: String,
    pub prompt: String,
    /// What the ticket currently holds for the edited field
    pub current_value: Option<String>,
}

impl ModalContent {
    fn build(ticket: &Ticket, kind: ModalKind, tz: &TimeZone) -> Self {
        let (prompt, current_value) = match kind {
            ModalKind::AssignPro => (
                format!("Choose a professional for ticket #{}", ticket.id),
                ticket.pro.map(|id| format!("pro #{id}")),
            ),
            ModalKind::IntakeCallDate => (
                format!("Pick the intake call date for ticket #{}", ticket.id),
                ticket
                    .intake_call_date
                    .as_ref()
                    .map(|ts| format_date_time_in(ts, tz)),
            ),
            ModalKind::IntakeCallDone => (
                format!("Confirm the intake call for ticket #{} took place", ticket.id),
                ticket.is_intake_call.then(|| "done".to_string()),
            ),
        };

        Self {
            kind,
            ticket_id: ticket.id,
            owner_name: ticket.owner.full_name(),
            prompt,
            current_value,
        }
    }
}

/// What the page hands to whatever draws modals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDescriptor {
    pub title: String,
    /// Present only while the modal is open
    pub content: Option<ModalContent>,
    pub open: bool,
}

#[derive(Debug, Clone)]
struct Selection {
    ticket: Ticket,
    kind: ModalKind,
}

/// Single-slot modal state owned by the page controller
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    selection: Option<Selection>,
    open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for `ticket`.
    ///
    /// Returns `true` when the modal went from closed to open.
    pub fn open(&mut self, ticket: Ticket, kind: ModalKind) -> bool {
        let was_open = self.open;
        self.selection = Some(Selection { ticket, kind });
        self.open = true;
        !was_open
    }

    /// Close the modal, keeping the last selection until the next `open`.
    ///
    /// Returns `true` when the modal went from open to closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Kind of the open modal
    pub fn active_kind(&self) -> Option<ModalKind> {
        self.open_selection().map(|s| s.kind)
    }

    /// Ticket the open modal edits
    pub fn active_ticket(&self) -> Option<&Ticket> {
        self.open_selection().map(|s| &s.ticket)
    }

    /// Kind of the most recent selection, open or not
    pub fn last_kind(&self) -> Option<ModalKind> {
        self.selection.as_ref().map(|s| s.kind)
    }

    fn open_selection(&self) -> Option<&Selection> {
        self.selection.as_ref().filter(|_| self.open)
    }

    /// Descriptor for the single modal slot
    pub fn descriptor(&self, tz: &TimeZone) -> ModalDescriptor {
        ModalDescriptor {
            title: self
                .last_kind()
                .map(|k| k.title().to_string())
                .unwrap_or_default(),
            content: self
                .open_selection()
                .map(|s| ModalContent::build(&s.ticket, s.kind, tz)),
            open: self.open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Owner, TicketStatus};

    fn ticket(id: u64, first: &str) -> Ticket {
        Ticket {
            id,
            owner: Owner {
                username: first.to_lowercase(),
                first_name: first.to_string(),
                last_name: "Smith".to_string(),
            },
            created_at: "2021-03-04T10:20:00Z".parse().unwrap(),
            ticket_status: TicketStatus::CREATED,
            appointment_date: None,
            phone_number: "555".to_string(),
            intake_call_date: None,
            is_intake_call: false,
            pro: None,
            pro_detail: None,
            connector_detail: None,
        }
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(ModalKind::AssignPro.title(), "Assign Pro");
        assert_eq!(ModalKind::IntakeCallDate.title(), "Intake Call Date");
        assert_eq!(ModalKind::IntakeCallDone.to_string(), "Intake Call Done");
    }

    #[test]
    fn test_submission_kind() {
        assert_eq!(
            ModalSubmission::AssignPro { pro_id: 1 }.kind(),
            ModalKind::AssignPro
        );
        assert_eq!(ModalSubmission::IntakeCallDone.kind(), ModalKind::IntakeCallDone);
    }

    #[test]
    fn test_open_and_close_report_transitions() {
        let mut modal = ModalState::new();
        assert!(modal.open(ticket(1, "Ann"), ModalKind::AssignPro));
        assert!(!modal.open(ticket(2, "Ben"), ModalKind::AssignPro));
        assert!(modal.close());
        assert!(!modal.close());
    }

    #[test]
    fn test_reopen_shows_only_new_selection() {
        let mut modal = ModalState::new();
        modal.open(ticket(1, "Ann"), ModalKind::AssignPro);
        modal.close();
        modal.open(ticket(2, "Ben"), ModalKind::IntakeCallDate);

        let descriptor = modal.descriptor(&TimeZone::UTC);
        assert!(descriptor.open);
        assert_eq!(descriptor.title, "Intake Call Date");
        let content = descriptor.content.unwrap();
        assert_eq!(content.kind, ModalKind::IntakeCallDate);
        assert_eq!(content.ticket_id, 2);
        assert_eq!(content.owner_name, "Ben Smith");
        assert!(!content.prompt.contains("#1"));
    }

    #[test]
    fn test_closed_modal_has_no_content() {
        let mut modal = ModalState::new();
        modal.open(ticket(1, "Ann"), ModalKind::AssignPro);
        modal.close();

        let descriptor = modal.descriptor(&TimeZone::UTC);
        assert!(!descriptor.open);
        assert!(descriptor.content.is_none());
        assert_eq!(descriptor.title, "Assign Pro");
        assert!(modal.active_ticket().is_none());
        assert_eq!(modal.last_kind(), Some(ModalKind::AssignPro));
    }

    #[test]
    fn test_never_opened_descriptor() {
        let descriptor = ModalState::new().descriptor(&TimeZone::UTC);
        assert_eq!(descriptor.title, "");
        assert!(!descriptor.open);
        assert!(descriptor.content.is_none());
    }

    #[test]
    fn test_content_current_values() {
        let mut t = ticket(4, "Cy");
        t.pro = Some(9);
        t.is_intake_call = true;
        t.intake_call_date = Some("2021-03-05T09:00:00Z".parse().unwrap());

        let mut modal = ModalState::new();
        modal.open(t.clone(), ModalKind::AssignPro);
        let content = modal.descriptor(&TimeZone::UTC).content.unwrap();
        assert_eq!(content.current_value.as_deref(), Some("pro #9"));

        modal.open(t.clone(), ModalKind::IntakeCallDate);
        let content = modal.descriptor(&TimeZone::UTC).content.unwrap();
        assert_eq!(content.current_value.as_deref(), Some("05/03/2021 09:00"));

        modal.open(t, ModalKind::IntakeCallDone);
        let content = modal.descriptor(&TimeZone::UTC).content.unwrap();
        assert_eq!(content.current_value.as_deref(), Some("done"));
    }
}
