use std::fmt::Display;

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::dashboard::{DashboardView, ListContent, ModalDescriptor, PaginationView, StepperView};

const LOADING_LINE: &str = "Loading tickets...";

/// Render a full dashboard frame
pub fn render_dashboard<R: Display>(view: &DashboardView<R>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.page_title.bold()));

    if let Some(stepper) = &view.stepper {
        out.push_str(&format!("\n{}\n", render_stepper(stepper)));
    }

    out.push_str(&format!("\n{}\n", view.list_title.bold().underline()));
    match &view.list {
        ListContent::Loading => out.push_str(&format!("{}\n", LOADING_LINE.dimmed())),
        ListContent::Placeholder(message) => out.push_str(&format!("{message}\n")),
        ListContent::Rows { headers, rows } => {
            let mut builder = Builder::default();
            builder.push_record(headers.iter().cloned());
            for row in rows {
                builder.push_record(row.iter().map(|cell| cell.to_string()));
            }
            let mut table = builder.build();
            table.with(Style::rounded());
            out.push_str(&format!("{table}\n"));
        }
    }

    out.push_str(&format!("\n{}\n", render_pagination(&view.pagination)));

    for modal in view.modals.iter().filter(|m| m.open) {
        out.push_str(&format!("\n{}", render_modal(modal)));
    }

    out
}

/// Stage labels joined left to right, the active stage bracketed
pub fn render_stepper(stepper: &StepperView) -> String {
    stepper
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if stepper.active_step == Some(i as u8) {
                format!("[{step}]").cyan().bold().to_string()
            } else {
                step.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

pub fn render_pagination(pagination: &PaginationView) -> String {
    match pagination.page_count {
        Some(count) => format!("Page {} of {count}", pagination.current_page),
        None => format!("Page {}", pagination.current_page),
    }
}

/// Render an open modal; a closed one renders nothing
pub fn render_modal(modal: &ModalDescriptor) -> String {
    let Some(content) = modal.content.as_ref().filter(|_| modal.open) else {
        return String::new();
    };

    let mut out = format!("{}\n", format!("── {} ──", modal.title).bold());
    out.push_str(&format!("Ticket #{} ({})\n", content.ticket_id, content.owner_name));
    out.push_str(&format!("{}\n", content.prompt));
    if let Some(current) = &content.current_value {
        out.push_str(&format!("Current: {current}\n"));
    }
    out
}
