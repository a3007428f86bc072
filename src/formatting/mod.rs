//! Date formatting for ticket display
//!
//! Central place for turning backend timestamps into the day-first strings
//! shown in lists and detail views.

use jiff::Timestamp;
use jiff::tz::TimeZone;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format a timestamp as `DD/MM/YYYY` in UTC
///
/// # Examples
///
/// ```
/// use ticketdesk::formatting::format_date;
///
/// let ts: jiff::Timestamp = "2021-03-04T10:20:00Z".parse().unwrap();
/// assert_eq!(format_date(&ts), "04/03/2021");
/// ```
pub fn format_date(ts: &Timestamp) -> String {
    format_date_in(ts, &TimeZone::UTC)
}

/// Format a timestamp as `DD/MM/YYYY HH:MM` in UTC
///
/// # Examples
///
/// ```
/// use ticketdesk::formatting::format_date_time;
///
/// let ts: jiff::Timestamp = "2021-03-04T10:20:00Z".parse().unwrap();
/// assert_eq!(format_date_time(&ts), "04/03/2021 10:20");
/// ```
pub fn format_date_time(ts: &Timestamp) -> String {
    format_date_time_in(ts, &TimeZone::UTC)
}

/// Format a timestamp as `DD/MM/YYYY` in the given time zone
pub fn format_date_in(ts: &Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime(DATE_FORMAT).to_string()
}

/// Format a timestamp as `DD/MM/YYYY HH:MM` in the given time zone
pub fn format_date_time_in(ts: &Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime(DATE_TIME_FORMAT).to_string()
}

/// Format an optional timestamp, falling back to `placeholder` when absent
pub fn format_optional_date_time(ts: Option<&Timestamp>, tz: &TimeZone, placeholder: &str) -> String {
    ts.map(|t| format_date_time_in(t, tz))
        .unwrap_or_else(|| placeholder.to_string())
}
