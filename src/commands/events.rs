use std::fs;
use std::path::Path;

use agendaplan_core::event::Event;
use agendaplan_core::ics::parse_feed;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub fn run(file: &Path) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let mut events = parse_feed(&content)
        .with_context(|| format!("Failed to parse feed {}", file.display()))?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| e.start);

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        let date = event.start.date();
        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date.format("%a %b %-d %Y").to_string().bold());
            current_date = Some(date);
        }

        println!("  {} {}{}", format_time(event), event.title, badges(event));
    }

    Ok(())
}

/// Format the time portion of an event (e.g. "15:00" or "all-day")
fn format_time(event: &Event) -> String {
    if event.all_day {
        "all-day".to_string()
    } else {
        format!("{:>7}", event.start.format("%H:%M"))
    }
}

/// Calendar-membership tag shown after the title
fn badges(event: &Event) -> String {
    if event.calendars.is_empty() {
        String::new()
    } else {
        let tag = format!("[{}]", event.calendars.join(", "));
        format!(" {}", tag.dimmed())
    }
}
