use std::fs;
use std::path::Path;

use agendaplan_core::constants::FILENAME_PREFIX;
use agendaplan_core::event::Event;
use agendaplan_core::ics::{FeedOptions, feed_filename, generate_feed};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub fn run(
    input: &Path,
    output: Option<&str>,
    name: Option<String>,
    description: Option<String>,
    timestamp: Option<&str>,
) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid event list in {}", input.display()))?;

    let timestamp = timestamp
        .map(|s| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .with_context(|| format!("Invalid --timestamp '{}'. Expected RFC 3339", s))
        })
        .transpose()?;

    let options = FeedOptions {
        name,
        description,
        timestamp,
    };
    let feed = generate_feed(&events, &options);

    match output {
        Some("auto") => {
            let filename = feed_filename(FILENAME_PREFIX, Utc::now().date_naive());
            fs::write(&filename, feed)
                .with_context(|| format!("Failed to write {}", filename))?;
            println!("Wrote {} events to {}", events.len(), filename);
        }
        Some(path) => {
            fs::write(path, feed).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {} events to {}", events.len(), path);
        }
        None => print!("{}", feed),
    }

    Ok(())
}
