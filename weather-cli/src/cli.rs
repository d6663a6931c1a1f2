use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::debug;
use weather_core::{Config, LocationQuery, WeatherService};

use crate::{menu::Presenter, theme::Theme};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by coordinates or zip code")]
pub struct Cli {
    /// OpenWeatherMap API key; overrides the config file.
    #[arg(long, env = "OPENWEATHER_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Current-conditions endpoint; overrides the config file.
    #[arg(long, env = "OPENWEATHER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (the default).
    Menu,

    /// Show weather for a longitude/latitude pair.
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },

    /// Show weather for a zip code.
    Zip {
        code: u32,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config =
            Config::load()?.with_overrides(self.api_key.clone(), self.base_url.clone());
        debug!(base_url = %config.base_url, "Configuration loaded");

        let service = WeatherService::openweather(config.api_settings()?);
        let theme = if self.no_color { Theme::plain() } else { Theme::default() };
        let mut presenter = Presenter::new(service, theme);

        let query = match self.command.unwrap_or(Command::Menu) {
            Command::Menu => return presenter.run_menu().await,
            Command::Coords { lon, lat } => LocationQuery::Coordinates { longitude: lon, latitude: lat },
            Command::Zip { code } => LocationQuery::PostalCode(code),
        };

        if !presenter.query(query).await {
            bail!("weather request failed");
        }
        presenter.show_short_format();

        Ok(())
    }
}

/// Logs go to stderr so they never interleave with menu output.
pub fn setup_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_core={level},weather={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
