use crate::commands::{check, configure, fetch, import, list, now, search, show};
use crate::config::Config;
use crate::core::data::Day;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "happyhour")]
#[command(about = "Find happy hour venues by day, neighborhood and time")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::List(args) => {
                list::handle_list_command(config, &args)?;
            }
            Commands::Search(args) => {
                search::handle_search_command(config, &args)?;
            }
            Commands::Now => {
                now::handle_now_command(config)?;
            }
            Commands::Show(args) => {
                show::handle_show_command(config, &args)?;
            }
            Commands::Import(args) => {
                import::handle_import_command(config, &args)?;
            }
            Commands::Fetch => {
                fetch::handle_fetch_command(config).await?;
            }
            Commands::Check => {
                check::handle_check_command(config)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List venues, optionally filtered by day, neighborhood or tag
    List(ListArgs),

    /// Search venues by free text, day, neighborhood and time
    Search(SearchArgs),

    /// Show venues with an active happy hour right now
    Now,

    /// Show full details for one venue
    Show(ShowArgs),

    /// Import venues from a spreadsheet CSV export
    Import(ImportArgs),

    /// Download the venue spreadsheet from Google Sheets
    Fetch,

    /// Report schedule cells the parser cannot fully understand
    Check,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Only venues with a promotion on this day")]
    pub day: Option<Day>,

    #[arg(short, long)]
    pub neighborhood: Option<String>,

    #[arg(short, long)]
    pub tag: Option<String>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,

    #[arg(long)]
    pub stats: bool,

    #[arg(long, help = "Show all known neighborhoods")]
    pub neighborhoods: bool,

    #[arg(long, help = "Show all known tags")]
    pub tags: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Free-text query over name, address, deals and tags")]
    pub query: Option<String>,

    #[arg(short, long)]
    pub day: Option<Day>,

    #[arg(
        long,
        value_name = "TIME",
        help = "Time of day, e.g. '5pm' or '17:30'; scans all days unless --day is given"
    )]
    pub at: Option<String>,

    #[arg(short, long)]
    pub neighborhood: Option<String>,

    #[arg(short, long)]
    pub tag: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Venue name (case-insensitive)")]
    pub name: String,
}

#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "CSV file to import from")]
    pub file: PathBuf,

    #[arg(long, help = "Merge into the existing store instead of replacing it")]
    pub merge: bool,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ListFormat {
    Simple,
    Detailed,
    Table,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn day_values_parse_from_cli() {
        let cli = Cli::try_parse_from(["happyhour", "list", "--day", "friday"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.day, Some(Day::Friday)),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn search_accepts_time_and_query() {
        let cli = Cli::try_parse_from([
            "happyhour", "search", "wings", "--at", "5pm", "--day", "monday",
        ])
        .unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query.as_deref(), Some("wings"));
                assert_eq!(args.at.as_deref(), Some("5pm"));
                assert_eq!(args.day, Some(Day::Monday));
            }
            _ => panic!("expected search command"),
        }
    }
}
