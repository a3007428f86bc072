//! Ticket REST API access.
//!
//! The dashboard talks to the backend only through [`TicketBackend`], so the
//! page controller can run against the HTTP client or an in-memory stand-in.

pub mod http;

use std::future::Future;

use jiff::Timestamp;
use serde::Serialize;

use crate::error::Result;
use crate::types::{Ticket, TicketPage};

pub use http::HttpBackend;

/// Partial update sent to the ticket endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_call_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_intake_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro: Option<u64>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.intake_call_date.is_none() && self.is_intake_call.is_none() && self.pro.is_none()
    }
}

/// Common interface for the ticket backend
pub trait TicketBackend: Send + Sync {
    /// Fetch one page (1-indexed) of the ticket list
    fn fetch_tickets(&self, page: u32) -> impl Future<Output = Result<TicketPage>> + Send;

    /// Fetch a single ticket
    fn fetch_ticket(&self, id: u64) -> impl Future<Output = Result<Ticket>> + Send;

    /// Apply a partial update to a ticket
    fn update_ticket(
        &self,
        id: u64,
        update: TicketUpdate,
    ) -> impl Future<Output = Result<()>> + Send;

    fn set_intake_call_date(
        &self,
        id: u64,
        date: Timestamp,
    ) -> impl Future<Output = Result<()>> + Send {
        self.update_ticket(
            id,
            TicketUpdate {
                intake_call_date: Some(date),
                ..Default::default()
            },
        )
    }

    fn mark_intake_call_done(&self, id: u64) -> impl Future<Output = Result<()>> + Send {
        self.update_ticket(
            id,
            TicketUpdate {
                is_intake_call: Some(true),
                ..Default::default()
            },
        )
    }

    fn assign_pro(&self, id: u64, pro_id: u64) -> impl Future<Output = Result<()>> + Send {
        self.update_ticket(
            id,
            TicketUpdate {
                pro: Some(pro_id),
                ..Default::default()
            },
        )
    }
}
