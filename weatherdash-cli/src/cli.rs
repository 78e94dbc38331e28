use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use weatherdash_core::{Config, Dashboard, Location, UnitSystem, provider_from_config};

use crate::output;

const FALLBACK_LOCATION: &str = "London";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about = "Weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Accepts `metric`/`imperial` as well as `celsius`/`fahrenheit`.
fn parse_units(value: &str) -> Result<UnitSystem, String> {
    UnitSystem::try_from(value).map_err(|err| err.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and default preferences.
    Configure,

    /// Show the dashboard for a location.
    Show {
        /// City name or any query WeatherAPI.com understands.
        location: Option<String>,

        /// Unit system; defaults to the configured one, then metric.
        #[arg(long, short, value_parser = parse_units)]
        units: Option<UnitSystem>,

        #[arg(long, short, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the output to a file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Show { location, units, format, output } => {
                let query = location
                    .or_else(|| config.default_location.clone())
                    .unwrap_or_else(|| FALLBACK_LOCATION.to_string());
                let units = units.unwrap_or_else(|| config.units_or_default());

                show(&config, query, units, format, output).await
            }
        }
    }
}

async fn show(
    config: &Config,
    query: String,
    units: UnitSystem,
    format: Format,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let location = Location::new(query, units)?;
    let provider = provider_from_config(&config.resolve());

    let dashboard = Dashboard::build(provider.as_ref(), &location)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    let rendered = match format {
        Format::Text => output::render_text(&dashboard),
        Format::Json => serde_json::to_string_pretty(&dashboard)
            .context("Failed to serialize dashboard to JSON")?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "dashboard written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let units = Select::new("Default units:", vec![UnitSystem::Metric, UnitSystem::Imperial])
        .with_starting_cursor(match config.units_or_default() {
            UnitSystem::Metric => 0,
            UnitSystem::Imperial => 1,
        })
        .prompt()
        .context("Failed to read default units")?;

    let default_location = Text::new("Default location:")
        .with_default(config.default_location.as_deref().unwrap_or(FALLBACK_LOCATION))
        .prompt()
        .context("Failed to read default location")?;

    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }
    config.default_units = Some(units);
    config.default_location = Some(default_location.trim().to_string())
        .filter(|location| !location.is_empty());

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
