use crate::cli::ShowArgs;
use crate::config::Config;
use crate::core::data::Day;
use crate::storage::Storage;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::output::OutputStyle;
use anyhow::Result;
use chrono::{Datelike, Local};

pub fn handle_show_command(config: Config, args: &ShowArgs) -> Result<()> {
    let storage = Storage::new(config);
    let collection = storage.load_venues()?;

    match collection.find(&args.name) {
        Some(venue) => {
            let today = Day::from_chrono(Local::now().weekday());
            OutputStyle::print_venue_detailed(venue, Some(today));
        }
        None => {
            handle_flow(FlowResult::NotFound {
                item_type: "Venue".to_string(),
                search_term: args.name.clone(),
            });
        }
    }

    Ok(())
}
