//! Computed view of a dashboard page
//!
//! Everything a front end needs to draw one frame, produced by
//! [`DashboardController::view`](super::DashboardController::view).

use crate::types::TicketStatus;

use super::list::ListContent;
use super::modal::ModalDescriptor;

/// Stage labels shown by the stepper, indexed by ticket status.
///
/// Statuses past the last entry highlight the last step.
pub const STEPPER_STEPS: [&str; 4] = [
    TicketStatus::CREATED.label(),
    TicketStatus::CONNECTOR_ASSIGNED.label(),
    TicketStatus::PRO_ASSIGNED.label(),
    TicketStatus::new(3).label(),
];

/// Static description of a dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub page_title: &'static str,
    pub list_title: &'static str,
    pub has_stepper: bool,
}

/// Observable state of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperView {
    pub steps: Vec<&'static str>,
    /// Index into `steps`; `None` when there are no tickets to take progress from
    pub active_step: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    /// `None` until the first successful fetch reports a total
    pub page_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<R> {
    pub page_title: &'static str,
    pub list_title: &'static str,
    pub state: PageState,
    pub stepper: Option<StepperView>,
    pub list: ListContent<R>,
    pub pagination: PaginationView,
    pub modals: Vec<ModalDescriptor>,
}
