use crate::config::Config;
use crate::core::data::Day;
use crate::core::schedule::normalize_verbose;
use crate::storage::Storage;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::output::OutputStyle;
use anyhow::Result;

/// Report schedule cells the normalizer had to drop. Matching silently
/// treats these as no promotion; this is the side channel that makes dirty
/// spreadsheet data visible without changing that behavior.
pub fn handle_check_command(config: Config) -> Result<()> {
    let storage = Storage::new(config);
    let collection = storage.load_venues()?;

    let mut dirty_cells = 0;
    for venue in &collection.venues {
        for day in Day::ALL {
            let raw = venue.happy_hours.raw(day);
            let (_, dropped) = normalize_verbose(raw);
            if dropped.is_empty() {
                continue;
            }
            dirty_cells += 1;
            println!(
                "{} {} / {}: {}",
                OutputStyle::warning("⚠"),
                OutputStyle::venue_name(&venue.name),
                OutputStyle::label(&day.to_string()),
                OutputStyle::muted(&format!("could not parse {:?} in '{}'", dropped, raw))
            );
        }
    }

    if dirty_cells == 0 {
        handle_flow(FlowResult::Success(format!(
            "All schedule entries across {} venues parsed cleanly",
            collection.len()
        )));
    } else {
        println!(
            "{}",
            OutputStyle::warning(&format!(
                "{} schedule cells have unparseable segments; those segments never match",
                dirty_cells
            ))
        );
    }

    Ok(())
}
