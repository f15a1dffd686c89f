use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the configured spreadsheet id.
pub const SHEETS_ID_ENV: &str = "HAPPYHOUR_SHEETS_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// JSON store of venue records, as produced by `import` / `fetch`.
    pub venue_file: PathBuf,
    pub color: bool,
    pub sort_by: SortBy,
    #[serde(default)]
    pub search_case_sensitive: bool,
}

/// Google Sheets source for the `fetch` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    Neighborhood,
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("happyhour");

        Self {
            general: GeneralConfig {
                venue_file: config_dir.join("venues.json"),
                color: true,
                sort_by: SortBy::Name,
                search_case_sensitive: false,
            },
            sheets: Some(SheetsConfig { sheet_id: None }),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.venue_file.as_os_str().is_empty() {
            return Err(AppError::System("Venue file cannot be empty".to_string()));
        }

        if let Some(sheets) = &self.sheets
            && let Some(id) = &sheets.sheet_id
            && id.trim().is_empty()
        {
            return Err(AppError::System(
                "Sheet id cannot be blank; remove it or set a real spreadsheet id".to_string(),
            ));
        }

        Ok(())
    }

    /// Spreadsheet id for `fetch`: the environment variable wins over the
    /// config file.
    pub fn sheet_id(&self) -> Option<String> {
        if let Ok(id) = std::env::var(SHEETS_ID_ENV)
            && !id.trim().is_empty()
        {
            return Some(id);
        }
        self.sheets.as_ref().and_then(|s| s.sheet_id.clone())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("happyhour")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.general.venue_file.ends_with("venues.json"));
    }

    #[test]
    fn blank_sheet_id_is_rejected() {
        let mut config = Config::default();
        config.sheets = Some(SheetsConfig {
            sheet_id: Some("   ".to_string()),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_toml_round_trips() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.general.venue_file, config.general.venue_file);
    }
}
