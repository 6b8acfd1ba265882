//! Feed document assembly.
//!
//! The document is built as an ordered list of content lines and joined once
//! at the end, so every line (including the last) carries the same CRLF
//! terminator regardless of the host platform.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::{CAL_SCALE, DEFAULT_CATEGORY, ICAL_VERSION, PROD_ID, UID_DOMAIN};
use crate::event::Event;

use super::category::sanitize_category;
use super::escape::escape_text;
use super::timestamp::{event_range, format_utc};

const CRLF: &str = "\r\n";

/// Calendar-level options for a generated feed.
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Display name for the subscription (X-WR-CALNAME).
    pub name: Option<String>,
    /// Subscription description (X-WR-CALDESC).
    pub description: Option<String>,
    /// Generated-at instant used for every DTSTAMP. Defaults to the current
    /// time; inject a fixed value for reproducible output.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Generate a complete feed document for an ordered event list.
///
/// Pure and deterministic for a fixed input and a fixed
/// [`FeedOptions::timestamp`]. Events are emitted in input order, without
/// reordering or deduplication; an empty list still yields a complete,
/// balanced envelope.
pub fn generate_feed(events: &[Event], options: &FeedOptions) -> String {
    let dtstamp = format_utc(options.timestamp.unwrap_or_else(Utc::now));

    let mut lines = Vec::with_capacity(6 + events.len() * 12);
    lines.push("BEGIN:VCALENDAR".to_string());
    lines.push(format!("VERSION:{ICAL_VERSION}"));
    lines.push(format!("PRODID:{PROD_ID}"));
    lines.push(format!("CALSCALE:{CAL_SCALE}"));

    if let Some(name) = options.name.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("X-WR-CALNAME:{}", escape_text(name)));
    }
    if let Some(desc) = options.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("X-WR-CALDESC:{}", escape_text(desc)));
    }

    for event in events {
        push_event_lines(event, &dtstamp, &mut lines);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut document = lines.join(CRLF);
    document.push_str(CRLF);
    document
}

/// Download filename for a feed generated on `date`.
pub fn feed_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.ics", date.format("%Y%m%d"))
}

fn push_event_lines(event: &Event, dtstamp: &str, lines: &mut Vec<String>) {
    let (dtstart, dtend) = event_range(event.start, event.end, event.all_day);

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}@{UID_DOMAIN}", event.id));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(format!("DTSTART:{dtstart}"));
    lines.push(format!("DTEND:{dtend}"));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));

    let description = enriched_description(event);
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape_text(&description)));
    }

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }

    let categories = joined_categories(event);
    if !categories.is_empty() {
        lines.push(format!("CATEGORIES:{categories}"));
    }

    lines.push("STATUS:CONFIRMED".to_string());
    lines.push("TRANSP:OPAQUE".to_string());
    lines.push("END:VEVENT".to_string());
}

/// Explicit description plus the calendar-membership and audience lines.
/// Everything joins into one multi-line value; the newlines are escaped by
/// the caller.
fn enriched_description(event: &Event) -> String {
    let mut description = event.description.clone().unwrap_or_default();

    if !event.calendars.is_empty() {
        description.push_str("\n\nKalenders: ");
        description.push_str(&event.calendars.join(", "));
    }

    if let Some(audience) = event.audience.as_deref().filter(|a| !a.is_empty()) {
        description.push_str("\nDoelgroep: ");
        description.push_str(audience);
    }

    description
}

/// Sanitized, comma-joined category list: the event's category (or the fixed
/// fallback label) followed by its calendar names. Labels that sanitize to
/// nothing are dropped before joining.
fn joined_categories(event: &Event) -> String {
    let mut labels: Vec<&str> = Vec::with_capacity(1 + event.calendars.len());
    labels.push(
        event
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY),
    );
    labels.extend(event.calendars.iter().map(String::as_str));

    let sanitized: Vec<String> = labels
        .into_iter()
        .map(sanitize_category)
        .filter(|label| !label.is_empty())
        .collect();

    sanitized.join(",")
}
