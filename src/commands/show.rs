use super::{connect, print_json};
use crate::api::TicketBackend;
use crate::detail::ticket_detail;
use crate::display::render_detail;
use crate::error::Result;

/// Display a single ticket with its connector and pro details
pub async fn cmd_show(id: u64, json: bool) -> Result<()> {
    let (config, backend) = connect()?;
    let ticket = backend.fetch_ticket(id).await?;

    if json {
        return print_json(&serde_json::to_value(&ticket)?);
    }

    let view = ticket_detail(&ticket, &config.timezone()?);
    print!("{}", render_detail(&view));
    Ok(())
}
