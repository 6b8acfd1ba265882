//! Round-trip parsing of strict-format feeds.
//!
//! Uses the icalendar crate's parser for unfolding and component structure,
//! then maps VEVENTs back onto planner events. Only the strict UTC stamp form
//! the generator emits (`YYYYMMDDTHHMMSSZ`) is recognized for DTSTART/DTEND;
//! events in other forms are skipped rather than guessed at.

use chrono::{NaiveDateTime, NaiveTime};
use icalendar::parser::{Component, read_calendar, unfold};

use crate::constants::{DEFAULT_CATEGORY, UID_DOMAIN};
use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

use super::escape::unescape_text;

/// Parse a feed document into planner events.
///
/// A document that is not a calendar at all is an error; individual VEVENTs
/// missing required fields are skipped, mirroring the generator's
/// omit-don't-fail policy for optional content.
pub fn parse_feed(content: &str) -> PlannerResult<Vec<Event>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|err| PlannerError::IcsParse(err.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect())
}

fn parse_vevent(vevent: &Component<'_>) -> Option<Event> {
    let uid = vevent.find_prop("UID")?.val.to_string();
    let suffix = format!("@{UID_DOMAIN}");
    let id = uid.strip_suffix(&suffix).unwrap_or(&uid).to_string();

    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_default();

    let start_raw = parse_stamp(vevent.find_prop("DTSTART")?.val.as_ref())?;
    let end_raw = parse_stamp(vevent.find_prop("DTEND")?.val.as_ref())?;

    // A midnight-to-midnight pair is the all-day encoding. The exclusive
    // DTEND folds back to the inclusive last day.
    let all_day = start_raw.time() == NaiveTime::MIN && end_raw.time() == NaiveTime::MIN;
    let end = if all_day {
        end_raw
            .date()
            .pred_opt()
            .unwrap_or(end_raw.date())
            .and_time(NaiveTime::MIN)
    } else {
        end_raw
    };

    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| unescape_text(p.val.as_ref()));
    let location = vevent
        .find_prop("LOCATION")
        .map(|p| unescape_text(p.val.as_ref()));

    let (category, calendars) = split_categories(
        vevent
            .find_prop("CATEGORIES")
            .map(|p| p.val.to_string())
            .unwrap_or_default(),
    );

    Some(Event {
        id,
        title,
        description,
        location,
        start: start_raw,
        end,
        all_day,
        category,
        audience: None,
        calendars,
    })
}

/// Best-effort inverse of the generator's category list: the first label is
/// the event category unless it is the fixed fallback, the rest are calendar
/// names. Sanitization is lossy, so the originals cannot be recovered exactly.
fn split_categories(value: String) -> (Option<String>, Vec<String>) {
    let labels: Vec<String> = value
        .split(',')
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    match labels.split_first() {
        Some((first, rest)) => {
            let category = (first != DEFAULT_CATEGORY).then(|| first.clone());
            (category, rest.to_vec())
        }
        None => (None, Vec::new()),
    }
}

fn parse_stamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim_end_matches('Z'), "%Y%m%dT%H%M%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::{FeedOptions, generate_feed};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn fixed_options() -> FeedOptions {
        FeedOptions {
            name: None,
            description: None,
            timestamp: Some(Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_round_trip_timed_event() {
        let event = Event {
            id: "evt-42".to_string(),
            title: "Sport; finale, ronde 2".to_string(),
            description: Some("eerst dit\ndan dat".to_string()),
            location: Some("Hal A, veld 2".to_string()),
            start: at(2026, 3, 20, 15, 0, 0),
            end: at(2026, 3, 20, 16, 30, 0),
            all_day: false,
            category: Some("Sport".to_string()),
            audience: None,
            calendars: vec![],
        };

        let feed = generate_feed(&[event.clone()], &fixed_options());
        let parsed = parse_feed(&feed).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], event);
    }

    #[test]
    fn test_round_trip_all_day_folds_end_back() {
        let event = Event {
            id: "studiedag".to_string(),
            title: "Studiedag".to_string(),
            description: None,
            location: None,
            start: at(2026, 9, 1, 0, 0, 0),
            end: at(2026, 9, 1, 0, 0, 0),
            all_day: true,
            category: Some("Rooster".to_string()),
            audience: None,
            calendars: vec![],
        };

        let feed = generate_feed(&[event.clone()], &fixed_options());
        let parsed = parse_feed(&feed).unwrap();

        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].all_day);
        assert_eq!(parsed[0].start, event.start);
        assert_eq!(parsed[0].end, event.end, "exclusive DTEND must fold back");
    }

    #[test]
    fn test_fallback_category_maps_to_none() {
        let event = Event {
            id: "e1".to_string(),
            title: "Excursie".to_string(),
            description: None,
            location: None,
            start: at(2026, 5, 1, 9, 0, 0),
            end: at(2026, 5, 1, 11, 0, 0),
            all_day: false,
            category: None,
            audience: None,
            calendars: vec!["TeamA".to_string(), "Onderbouw".to_string()],
        };

        let feed = generate_feed(&[event], &fixed_options());
        let parsed = parse_feed(&feed).unwrap();

        assert_eq!(parsed[0].category, None);
        assert_eq!(
            parsed[0].calendars,
            vec!["TeamA".to_string(), "Onderbouw".to_string()]
        );
    }

    #[test]
    fn test_empty_feed_parses_to_no_events() {
        let feed = generate_feed(&[], &fixed_options());
        assert!(parse_feed(&feed).unwrap().is_empty());
    }

    #[test]
    fn test_vevent_without_uid_is_skipped() {
        let feed = "BEGIN:VCALENDAR\r\n\
                    VERSION:2.0\r\n\
                    BEGIN:VEVENT\r\n\
                    SUMMARY:naamloos\r\n\
                    DTSTART:20260901T000000Z\r\n\
                    DTEND:20260902T000000Z\r\n\
                    END:VEVENT\r\n\
                    END:VCALENDAR\r\n";
        assert!(parse_feed(feed).unwrap().is_empty());
    }

    #[test]
    fn test_unclosed_document_is_an_error() {
        let result = parse_feed("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
        assert!(matches!(result, Err(PlannerError::IcsParse(_))));
    }
}
