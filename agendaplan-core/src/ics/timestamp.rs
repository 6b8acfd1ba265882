//! UTC wire-format timestamps for feed output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const UTC_STAMP: &str = "%Y%m%dT%H%M%SZ";

/// Format an instant as `YYYYMMDDTHHMMSSZ` (4-digit year, all other fields
/// zero-padded to two digits).
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format(UTC_STAMP).to_string()
}

/// DTSTART/DTEND values for an event.
///
/// Timed events reinterpret the stored civil fields as UTC components
/// verbatim; no zone conversion happens anywhere in the engine. All-day
/// events become midnight UTC stamps, with the end pushed one calendar day
/// past the stored (inclusive) last day because DTEND is exclusive on the
/// wire. A single-day event therefore still gets the +1.
pub(crate) fn event_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
) -> (String, String) {
    if all_day {
        (
            format_utc(midnight_utc(start.date())),
            format_utc(midnight_utc(next_day(end.date()))),
        )
    } else {
        (format_utc(start.and_utc()), format_utc(end.and_utc()))
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}
