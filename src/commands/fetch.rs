use crate::config::{Config, SHEETS_ID_ENV};
use crate::ingest;
use crate::ingest::sheets::SheetsClient;
use crate::storage::Storage;
use crate::utils::error::{AppError, FlowResult, handle_flow};
use anyhow::Result;

/// Download the venue spreadsheet and replace the local store with it.
pub async fn handle_fetch_command(config: Config) -> Result<()> {
    let sheet_id = config.sheet_id().ok_or_else(|| {
        AppError::System(format!(
            "No spreadsheet configured. Set [sheets].sheet_id in the config file or the {} environment variable",
            SHEETS_ID_ENV
        ))
    })?;

    println!("📊 Fetching venue data from Google Sheets...");
    let client = SheetsClient::new()?;
    let csv_data = client.fetch_csv(&sheet_id).await?;

    let collection = ingest::csv::parse_venues(&csv_data)?;
    let storage = Storage::new(config);
    storage.save_venues(&collection)?;

    handle_flow(FlowResult::Success(format!(
        "Fetched {} venues",
        collection.len()
    )));

    Ok(())
}
