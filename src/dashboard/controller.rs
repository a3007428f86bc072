//! Dashboard page controller
//!
//! Owns the fetched tickets, the loading flag, pagination and the modal slot
//! for one page. Page changes and modal open/close transitions mark the page
//! dirty; [`DashboardController::sync`] performs the pending fetch.
//!
//! Every fetch is tagged with a sequence number. Only the response for the
//! most recently issued fetch is applied, so a slow response for an old page
//! can never overwrite a newer one.

use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::api::TicketBackend;
use crate::error::{Result, TicketDeskError};
use crate::formatting::format_date_time_in;
use crate::types::{Ticket, TicketPage, TicketStatus};

use super::list::{Column, ListContent, list_content};
use super::modal::{ModalDescriptor, ModalKind, ModalState, ModalSubmission};
use super::notify::NotificationBus;
use super::pagination::Pagination;
use super::view::{
    DashboardLayout, DashboardView, PageState, PaginationView, STEPPER_STEPS, StepperView,
};

const LAST_STEPPER_STEP: u8 = (STEPPER_STEPS.len() - 1) as u8;

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page: u32,
}

/// What applying a fetch response did to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Tickets replaced with the response
    Loaded { tickets: usize, total: u64 },
    /// Error notified; tickets left as they were
    Failed(String),
    /// A newer fetch was issued since; response dropped
    Stale,
}

pub struct DashboardController<B> {
    backend: Arc<B>,
    notifier: NotificationBus,
    tickets: Vec<Ticket>,
    loading: bool,
    pagination: Pagination,
    modal: ModalState,
    latest_seq: u64,
    fetch_pending: bool,
    timezone: TimeZone,
}

impl<B: TicketBackend> DashboardController<B> {
    /// A freshly mounted page: loading, with the first fetch pending
    pub fn new(backend: Arc<B>, notifier: NotificationBus, page_size: u32) -> Self {
        Self {
            backend,
            notifier,
            tickets: Vec::new(),
            loading: true,
            pagination: Pagination::new(page_size),
            modal: ModalState::new(),
            latest_seq: 0,
            fetch_pending: true,
            timezone: TimeZone::UTC,
        }
    }

    pub fn with_timezone(mut self, timezone: TimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &NotificationBus {
        &self.notifier
    }

    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Whether a page or modal change is waiting on a fetch
    pub fn needs_fetch(&self) -> bool {
        self.fetch_pending
    }

    pub fn state(&self) -> PageState {
        if self.loading {
            PageState::Loading
        } else if self.tickets.is_empty() {
            PageState::Empty
        } else {
            PageState::Populated
        }
    }

    /// Switch to `page`; a change schedules a fetch
    pub fn set_page(&mut self, page: u32) -> Result<bool> {
        if page == 0 {
            return Err(TicketDeskError::InvalidPage(page));
        }
        let changed = self.pagination.set_page(page);
        if changed {
            self.fetch_pending = true;
        }
        Ok(changed)
    }

    /// Open the modal for `ticket`; opening schedules a fetch
    pub fn open_modal(&mut self, ticket: Ticket, kind: ModalKind) {
        if self.modal.open(ticket, kind) {
            self.fetch_pending = true;
        }
    }

    /// Open the modal for a ticket in the current list
    pub fn open_modal_for(&mut self, ticket_id: u64, kind: ModalKind) -> Result<()> {
        let ticket = self
            .tickets
            .iter()
            .find(|t| t.id == ticket_id)
            .cloned()
            .ok_or(TicketDeskError::TicketNotFound(ticket_id))?;
        self.open_modal(ticket, kind);
        Ok(())
    }

    /// Close the modal; closing schedules a fetch
    pub fn close_modal(&mut self) {
        if self.modal.close() {
            self.fetch_pending = true;
        }
    }

    /// Issue a fetch for the current page and enter the loading state
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.loading = true;
        self.fetch_pending = false;
        let request = FetchRequest {
            seq: self.latest_seq,
            page: self.pagination.current_page(),
        };
        tracing::debug!(seq = request.seq, page = request.page, "fetching tickets");
        request
    }

    /// Apply the response for `request`.
    ///
    /// Responses for anything but the latest request are dropped without
    /// touching state. Otherwise the loading flag is cleared whatever the
    /// result, and a failure is notified once with the error message as-is.
    pub fn apply_fetch(&mut self, request: FetchRequest, result: Result<TicketPage>) -> FetchOutcome {
        if request.seq != self.latest_seq {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                "dropping stale ticket response"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.pagination.set_total(page.count);
                self.tickets = page.results;
                FetchOutcome::Loaded {
                    tickets: self.tickets.len(),
                    total: page.count,
                }
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(page = request.page, "failed to fetch tickets: {message}");
                self.notifier.error(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Fetch the current page now
    pub async fn refresh(&mut self) -> FetchOutcome {
        let request = self.begin_fetch();
        let backend = Arc::clone(&self.backend);
        let result = backend.fetch_tickets(request.page).await;
        self.apply_fetch(request, result)
    }

    /// Run the pending fetch, if any
    pub async fn sync(&mut self) -> Option<FetchOutcome> {
        if !self.fetch_pending {
            return None;
        }
        Some(self.refresh().await)
    }

    /// Submit the open modal.
    ///
    /// On success the modal closes, which schedules a refetch. On failure the
    /// error is notified and the modal stays open.
    pub async fn submit(&mut self, submission: ModalSubmission) -> Result<()> {
        let kind = self.modal.active_kind().ok_or(TicketDeskError::NoModalOpen)?;
        if submission.kind() != kind {
            return Err(TicketDeskError::InvalidInput(format!(
                "'{}' modal is open, cannot submit '{}'",
                kind,
                submission.kind()
            )));
        }
        let ticket_id = self
            .modal
            .active_ticket()
            .map(|t| t.id)
            .ok_or(TicketDeskError::NoModalOpen)?;

        let backend = Arc::clone(&self.backend);
        let result = match &submission {
            ModalSubmission::AssignPro { pro_id } => backend.assign_pro(ticket_id, *pro_id).await,
            ModalSubmission::IntakeCallDate(date) => {
                backend.set_intake_call_date(ticket_id, *date).await
            }
            ModalSubmission::IntakeCallDone => backend.mark_intake_call_done(ticket_id).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(ticket_id, "{kind} saved");
                self.notifier
                    .success(self.success_message(ticket_id, &submission));
                self.close_modal();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(ticket_id, "{kind} failed: {e}");
                self.notifier.error(format!("{kind} failed: {e}"));
                Err(e)
            }
        }
    }

    fn success_message(&self, ticket_id: u64, submission: &ModalSubmission) -> String {
        match submission {
            ModalSubmission::AssignPro { pro_id } => {
                format!("Assigned pro #{pro_id} to ticket #{ticket_id}")
            }
            ModalSubmission::IntakeCallDate(date) => format!(
                "Intake call for ticket #{ticket_id} set to {}",
                format_date_time_in(date, &self.timezone)
            ),
            ModalSubmission::IntakeCallDone => {
                format!("Intake call for ticket #{ticket_id} marked done")
            }
        }
    }

    /// Stepper position: the status of the first listed ticket, if any.
    ///
    /// This reads the first ticket only, not an aggregate over the page.
    /// [`view`](Self::view) caps it at the last stepper stage.
    pub fn stepper_step(&self) -> Option<TicketStatus> {
        self.tickets.first().map(|t| t.ticket_status)
    }

    /// The page's modal slots; currently always exactly one
    pub fn modal_descriptors(&self) -> Vec<ModalDescriptor> {
        vec![self.modal.descriptor(&self.timezone)]
    }

    pub fn list_content<R>(&self, columns: &[Column<Ticket, R>]) -> ListContent<R> {
        list_content(columns, &self.tickets, self.loading)
    }

    /// Compute the full page view
    pub fn view<R>(&self, layout: &DashboardLayout, columns: &[Column<Ticket, R>]) -> DashboardView<R> {
        let stepper = layout.has_stepper.then(|| StepperView {
            steps: STEPPER_STEPS.to_vec(),
            active_step: self
                .stepper_step()
                .map(|status| status.as_num().min(LAST_STEPPER_STEP)),
        });

        DashboardView {
            page_title: layout.page_title,
            list_title: layout.list_title,
            state: self.state(),
            stepper,
            list: self.list_content(columns),
            pagination: PaginationView {
                current_page: self.pagination.current_page(),
                page_count: self.pagination.page_count(),
            },
            modals: self.modal_descriptors(),
        }
    }
}
