use crate::cli::SearchArgs;
use crate::config::Config;
use crate::core::data::VenueFilter;
use crate::core::schedule::parse_time_token;
use crate::storage::Storage;
use crate::utils::error::{AppError, FlowResult, handle_flow};
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub fn handle_search_command(config: Config, args: &SearchArgs) -> Result<()> {
    let at = match &args.at {
        Some(token) => Some(parse_time_token(token).ok_or_else(|| {
            AppError::System(format!(
                "Unrecognized time '{}'; expected something like '5pm' or '17:30'",
                token
            ))
        })?),
        None => None,
    };

    let storage = Storage::new(config.clone());
    let collection = storage.load_venues()?;

    let filter = VenueFilter {
        day: args.day,
        at,
        neighborhood: args.neighborhood.as_deref(),
        tag: args.tag.as_deref(),
        query: args.query.as_deref(),
    };
    let venues = collection.search(&filter, &config);

    if venues.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "venues matching your criteria".to_string(),
        });
        return Ok(());
    }

    OutputStyle::print_result_count(venues.len());
    for venue in &venues {
        println!("{}", OutputStyle::format_venue_line(venue));
    }

    Ok(())
}
