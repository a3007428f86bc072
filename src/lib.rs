pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod display;
pub mod error;
pub mod formatting;
pub mod paths;
pub mod types;

pub use api::{HttpBackend, TicketBackend, TicketUpdate};
pub use config::Config;
pub use dashboard::{
    CONNECTOR_LAYOUT, DashboardController, DashboardView, FetchOutcome, ModalKind,
    ModalSubmission, NotificationBus, Pagination,
};
pub use detail::{TicketDetailView, ticket_detail};
pub use error::{Result, TicketDeskError};
pub use types::{Ticket, TicketPage, TicketStatus};
