use std::sync::Arc;

use serde_json::json;

use super::{connect, print_json};
use crate::dashboard::notify::drain;
use crate::dashboard::{
    CONNECTOR_LAYOUT, DashboardController, FetchOutcome, NotificationBus, connector_columns,
};
use crate::dashboard::pagination::DEFAULT_PAGE_SIZE;
use crate::display::{print_notifications, render_dashboard};
use crate::error::{Result, TicketDeskError};

/// Load one page of the connector dashboard and print it
pub async fn cmd_dashboard(page: u32, json: bool) -> Result<()> {
    let (config, backend) = connect()?;
    let timezone = config.timezone()?;

    let notifier = NotificationBus::new();
    let mut events = notifier.subscribe();
    let mut controller = DashboardController::new(Arc::new(backend), notifier, DEFAULT_PAGE_SIZE)
        .with_timezone(timezone.clone());
    controller.set_page(page)?;

    let outcome = controller.sync().await;
    let notifications = drain(&mut events);

    if json {
        if !matches!(outcome, Some(FetchOutcome::Failed(_))) {
            print_json(&json!({
                "page": controller.pagination().current_page(),
                "page_count": controller.pagination().page_count(),
                "count": controller.pagination().total_count(),
                "tickets": controller.tickets(),
            }))?;
        }
    } else {
        let columns = connector_columns(&timezone);
        print!("{}", render_dashboard(&controller.view(&CONNECTOR_LAYOUT, &columns)));
    }
    print_notifications(&notifications);

    match outcome {
        Some(FetchOutcome::Failed(_)) => Err(TicketDeskError::Other(format!(
            "could not load page {page} of the ticket list"
        ))),
        _ => Ok(()),
    }
}
