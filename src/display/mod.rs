//! Terminal rendering for dashboard pages, ticket details and notifications

mod dashboard;
mod detail;

pub use dashboard::{render_dashboard, render_modal, render_pagination, render_stepper};
pub use detail::render_detail;

use owo_colors::OwoColorize;

use crate::dashboard::{Notification, NotificationEvent, NotificationLevel};
use crate::dashboard::notify::visible;

/// Format a notification as a single colored line
pub fn format_notification(notification: &Notification) -> String {
    let message = &notification.message;
    match notification.level {
        NotificationLevel::Info => format!("{} {message}", "info:".cyan()),
        NotificationLevel::Warning => format!("{} {message}", "warning:".yellow()),
        NotificationLevel::Error => format!("{} {message}", "error:".red()),
        NotificationLevel::Success => format!("{} {message}", "ok:".green()),
    }
}

/// Print every still-visible notification to stderr
pub fn print_notifications(events: &[NotificationEvent]) {
    for notification in visible(events) {
        eprintln!("{}", format_notification(notification));
    }
}
