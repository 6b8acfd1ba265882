//! Planner event types.
//!
//! Events reach the feed engine already filtered to whatever visibility,
//! approval, and date-range criteria the caller wants reflected in the feed.
//! The engine itself never queries or filters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A planner event as handed to the feed engine.
///
/// `start` and `end` are civil wall-clock values in the organization's local
/// convention, with no offset attached. For all-day events they mark the
/// first and last day of the event, both inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque stable identifier; the feed UID is derived from it.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Whole-day event: inclusive day range, encoded as midnight UTC stamps.
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub category: Option<String>,
    /// Target-group text, appended to the description enrichment.
    #[serde(default)]
    pub audience: Option<String>,
    /// Ordered human-readable names of the calendars this event belongs to.
    #[serde(default)]
    pub calendars: Vec<String>,
}
