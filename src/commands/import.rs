use crate::cli::ImportArgs;
use crate::config::Config;
use crate::ingest;
use crate::storage::Storage;
use crate::utils::error::{FlowResult, handle_flow};
use anyhow::{Context, Result};

pub fn handle_import_command(config: Config, args: &ImportArgs) -> Result<()> {
    let data = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read CSV file: {}", args.file.display()))?;

    let imported = ingest::csv::parse_venues(&data)?;
    let count = imported.len();

    let storage = Storage::new(config);
    let collection = if args.merge {
        let mut existing = storage.load_venues()?;
        for venue in imported.venues {
            match existing
                .venues
                .iter()
                .position(|v| v.name.eq_ignore_ascii_case(&venue.name))
            {
                Some(index) => existing.venues[index] = venue,
                None => existing.venues.push(venue),
            }
        }
        existing
    } else {
        imported
    };

    storage.save_venues(&collection)?;
    handle_flow(FlowResult::Success(format!(
        "Imported {} venues ({} total in store)",
        count,
        collection.len()
    )));

    Ok(())
}
