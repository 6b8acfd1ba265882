//! Fixed wire-format values for generated feeds.
//!
//! These are hard-coded on purpose: subscribed clients key on them, and the
//! UID suffix in particular must stay stable across regenerations so that
//! clients detect updates instead of duplicating events.

/// iCalendar version emitted in every feed.
pub const ICAL_VERSION: &str = "2.0";

/// Product identifier for the organization.
pub const PROD_ID: &str = "-//AgendaPlan//Jaarplanner//NL";

/// Calendar scale. Gregorian is the only scale consuming clients accept.
pub const CAL_SCALE: &str = "GREGORIAN";

/// Domain-like suffix appended to event ids to form globally unique UIDs.
pub const UID_DOMAIN: &str = "agendaplan";

/// Category label used when an event carries no explicit category.
pub const DEFAULT_CATEGORY: &str = "AgendaPlan";

/// Default filename prefix for feed downloads.
pub const FILENAME_PREFIX: &str = "agendaplan-jaarplanner";
