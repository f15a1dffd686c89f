use crate::config::Config;
use crate::core::data::Day;
use crate::core::matcher;
use crate::storage::Storage;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::format::{format_day_schedule, format_minute};
use crate::utils::output::OutputStyle;
use anyhow::Result;
use chrono::{Datelike, Local, Timelike};

/// "Happy hour now": the clock is read once here and handed to the matcher
/// as plain day/minute values.
pub fn handle_now_command(config: Config) -> Result<()> {
    let now = Local::now();
    let day = Day::from_chrono(now.weekday());
    let minute = (now.hour() * 60 + now.minute()) as u16;

    let storage = Storage::new(config.clone());
    let collection = storage.load_venues()?;

    let mut venues: Vec<_> = collection
        .venues
        .iter()
        .filter(|v| matcher::matches_now(v, day, minute))
        .collect();
    venues.sort_by(|a, b| a.name.cmp(&b.name));

    println!(
        "{}",
        OutputStyle::title(&format!(
            "🍻 Happy hour now ({}, {})",
            day,
            format_minute(minute)
        ))
    );

    if venues.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "venues with an active happy hour".to_string(),
        });
        return Ok(());
    }

    OutputStyle::print_result_count(venues.len());
    for venue in venues {
        let today = format_day_schedule(&venue.happy_hours.normalized(day));
        println!(
            "{}  {}",
            OutputStyle::format_venue_line(venue),
            OutputStyle::hours(&today)
        );
    }

    Ok(())
}
