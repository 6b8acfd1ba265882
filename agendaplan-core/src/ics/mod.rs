//! Calendar feed generation and parsing.
//!
//! Generation follows a strict Outlook-safe ruleset: every timestamp is
//! written as a UTC `YYYYMMDDTHHMMSSZ` value, with no VTIMEZONE block and no
//! `TZID` or `VALUE=DATE` parameters anywhere. Some clients reject feeds that
//! carry those, and pre-normalizing to UTC sidesteps daylight-saving
//! negotiation entirely. Parsing accepts the same strict form back.

mod category;
mod escape;
mod generate;
mod parse;
mod timestamp;

pub use category::sanitize_category;
pub use escape::{escape_text, unescape_text};
pub use generate::{FeedOptions, feed_filename, generate_feed};
pub use parse::parse_feed;
pub use timestamp::format_utc;
