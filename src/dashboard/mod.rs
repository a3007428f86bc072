//! Dashboard page models
//!
//! State and view computation for ticket dashboards, kept free of any
//! drawing code so it can be tested without a terminal.

pub mod connector;
mod controller;
pub mod list;
pub mod modal;
pub mod notify;
pub mod pagination;
mod view;

pub use connector::{CONNECTOR_LAYOUT, Cell, connector_columns};
pub use controller::{DashboardController, FetchOutcome, FetchRequest};
pub use list::{Column, ListContent, NO_TICKETS_MESSAGE};
pub use modal::{ModalContent, ModalDescriptor, ModalKind, ModalState, ModalSubmission};
pub use notify::{Notification, NotificationBus, NotificationEvent, NotificationLevel};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
pub use view::{
    DashboardLayout, DashboardView, PageState, PaginationView, STEPPER_STEPS, StepperView,
};
