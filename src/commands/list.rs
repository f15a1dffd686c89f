use crate::cli::{ListArgs, ListFormat};
use crate::config::Config;
use crate::core::data::{Day, VenueFilter};
use crate::storage::Storage;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::output::{DisplayFormatter, OutputStyle};
use anyhow::Result;
use chrono::{Datelike, Local};

pub fn handle_list_command(config: Config, args: &ListArgs) -> Result<()> {
    let storage = Storage::new(config.clone());
    let collection = storage.load_venues()?;

    if args.neighborhoods {
        return DisplayFormatter::print_neighborhoods(&collection.neighborhoods());
    }

    if args.tags {
        return DisplayFormatter::print_tags(&collection.all_tags());
    }

    if args.stats {
        return DisplayFormatter::print_stats(&collection.stats());
    }

    let filter = VenueFilter {
        day: args.day,
        neighborhood: args.neighborhood.as_deref(),
        tag: args.tag.as_deref(),
        ..Default::default()
    };
    let venues = collection.search(&filter, &config);

    if venues.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "venues matching your criteria".to_string(),
        });
        return Ok(());
    }

    OutputStyle::print_result_count(venues.len());
    let today = Day::from_chrono(Local::now().weekday());
    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    DisplayFormatter::format_list(&venues, format, Some(today))
}
