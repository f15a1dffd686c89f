//! Google Sheets CSV export download for the `fetch` command.

use crate::utils::error::{AppError, AppResult};
use reqwest::Client;

pub struct SheetsClient {
    client: Client,
}

impl SheetsClient {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("happyhour/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
        })
    }

    /// Download the sheet as CSV text. Redirects (which the export endpoint
    /// uses) are followed by the client.
    pub async fn fetch_csv(&self, sheet_id: &str) -> AppResult<String> {
        let url = format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            sheet_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch spreadsheet: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Network(format!(
                "Failed to export sheet: HTTP {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read sheet response: {}", e)))
    }
}
