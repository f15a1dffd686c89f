//! Flat-file venue store
//!
//! Venues live in a single JSON array file, the same shape the original
//! spreadsheet export produces. Loading tolerates an empty file by seeding
//! an empty collection.

use crate::config::Config;
use crate::core::data::VenueCollection;
use anyhow::{Context, Result};

pub struct Storage {
    config: Config,
}

impl Storage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn load_venues(&self) -> Result<VenueCollection> {
        self.ensure_venue_file_exists()?;

        let content = std::fs::read_to_string(&self.config.general.venue_file).with_context(
            || {
                format!(
                    "Failed to read venue file: {}",
                    self.config.general.venue_file.display()
                )
            },
        )?;

        if content.trim().is_empty() {
            let default_collection = VenueCollection::default();
            self.save_venues(&default_collection)?;
            return Ok(default_collection);
        }

        let collection: VenueCollection =
            serde_json::from_str(&content).with_context(|| "Failed to parse venue file")?;

        Ok(collection)
    }

    pub fn save_venues(&self, collection: &VenueCollection) -> Result<()> {
        if let Some(parent) = self.config.general.venue_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create venue directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(collection)
            .with_context(|| "Failed to serialize venue collection")?;

        std::fs::write(&self.config.general.venue_file, content).with_context(|| {
            format!(
                "Failed to write venue file: {}",
                self.config.general.venue_file.display()
            )
        })?;

        Ok(())
    }

    pub fn ensure_venue_file_exists(&self) -> Result<()> {
        if !self.config.general.venue_file.exists() {
            self.save_venues(&VenueCollection::default())?;
        }
        Ok(())
    }
}
