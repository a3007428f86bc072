use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::detail::{DetailRow, DetailSection, TicketDetailView};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn table(rows: &[DetailRow]) -> String {
    let rows: Vec<FieldRow> = rows
        .iter()
        .map(|r| FieldRow {
            label: r.label,
            value: r.value.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn section(section: &DetailSection) -> String {
    let title = section.title.bold().to_string();
    match &section.rows {
        Some(rows) => format!("{title}\n{}\n", table(rows)),
        None => format!("{title}\n{}\n", "Not assigned yet".dimmed()),
    }
}

/// Render the ticket detail read view
pub fn render_detail(view: &TicketDetailView) -> String {
    let mut out = format!("{}\n\n", view.heading.bold().underline());
    out.push_str(&table(&view.summary));
    out.push_str("\n\n");
    out.push_str(&section(&view.professional));
    out.push('\n');
    out.push_str(&section(&view.connector));
    out
}
