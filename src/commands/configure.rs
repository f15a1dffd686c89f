use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::{AppError, FlowResult, handle_flow};
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            OutputStyle::print_header("Configuration");
            let content = toml::to_string_pretty(&config)
                .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;
            println!("{}", content);
            println!(
                "{}",
                OutputStyle::muted(&format!(
                    "File: {}",
                    Config::config_file_path().display()
                ))
            );
        }
        ConfigCommands::Path => {
            println!("{}", Config::config_file_path().display());
        }
        ConfigCommands::Reset => {
            Config::default().save()?;
            handle_flow(FlowResult::Success(
                "Configuration reset to defaults".to_string(),
            ));
        }
    }

    Ok(())
}
