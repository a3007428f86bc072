//! Ticket mutations driven through the dashboard modals.
//!
//! Each command opens the matching modal on the ticket and submits it, so
//! the command line goes through the same submit path as the dashboard.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

use crate::api::{HttpBackend, TicketBackend};
use crate::config::Config;
use crate::dashboard::notify::drain;
use crate::dashboard::pagination::DEFAULT_PAGE_SIZE;
use crate::dashboard::{DashboardController, ModalSubmission, NotificationBus};
use crate::display::print_notifications;
use crate::error::{Result, TicketDeskError};

/// Set the intake call date of a ticket
pub async fn cmd_intake_date(id: u64, when: &str) -> Result<()> {
    let config = Config::load()?;
    let timezone = config.timezone()?;
    let date = parse_intake_date(when, &timezone)?;
    submit(&config, timezone, id, ModalSubmission::IntakeCallDate(date)).await
}

/// Mark the intake call of a ticket as done
pub async fn cmd_intake_done(id: u64) -> Result<()> {
    let config = Config::load()?;
    let timezone = config.timezone()?;
    submit(&config, timezone, id, ModalSubmission::IntakeCallDone).await
}

/// Assign a professional to a ticket
pub async fn cmd_assign_pro(id: u64, pro_id: u64) -> Result<()> {
    let config = Config::load()?;
    let timezone = config.timezone()?;
    submit(&config, timezone, id, ModalSubmission::AssignPro { pro_id }).await
}

async fn submit(
    config: &Config,
    timezone: TimeZone,
    id: u64,
    submission: ModalSubmission,
) -> Result<()> {
    let backend = Arc::new(HttpBackend::from_config(config)?);
    tracing::debug!(url = %backend.base_url(), "updating ticket #{id}");
    let ticket = backend.fetch_ticket(id).await?;

    let notifier = NotificationBus::new();
    let mut events = notifier.subscribe();
    let mut controller =
        DashboardController::new(backend, notifier, DEFAULT_PAGE_SIZE).with_timezone(timezone);
    controller.open_modal(ticket, submission.kind());

    let result = controller.submit(submission).await;
    print_notifications(&drain(&mut events));

    result.map_err(|_| TicketDeskError::Other(format!("ticket #{id} was not updated")))
}

/// Parse an intake call date.
///
/// Accepts an RFC 3339 timestamp, or a civil date/time such as
/// `2024-01-15 10:30` or `2024-01-15`, read in `tz`.
pub fn parse_intake_date(input: &str, tz: &TimeZone) -> Result<Timestamp> {
    let input = input.trim();
    if let Ok(ts) = input.parse::<Timestamp>() {
        return Ok(ts);
    }

    let civil = input
        .parse::<DateTime>()
        .or_else(|_| input.parse::<Date>().map(|d| d.to_datetime(jiff::civil::Time::midnight())))
        .map_err(|_| {
            TicketDeskError::InvalidInput(format!(
                "invalid date '{input}'. Expected e.g. 2024-01-15 10:30 or 2024-01-15T10:30:00Z"
            ))
        })?;

    civil
        .to_zoned(tz.clone())
        .map(|z| z.timestamp())
        .map_err(|e| TicketDeskError::InvalidInput(format!("invalid date '{input}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_intake_date("2024-01-15T10:30:00Z", &TimeZone::UTC).unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_parse_civil_in_zone() {
        let tz = TimeZone::fixed(jiff::tz::offset(2));
        let ts = parse_intake_date("2024-01-15 10:30", &tz).unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T08:30:00Z");
    }

    #[test]
    fn test_parse_date_only() {
        let ts = parse_intake_date("2024-01-15", &TimeZone::UTC).unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_intake_date("next tuesday", &TimeZone::UTC).unwrap_err();
        assert!(matches!(err, TicketDeskError::InvalidInput(_)));
    }
}
