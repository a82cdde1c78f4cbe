// Settings are layered: built-in defaults, then `config/settings.toml` when present, then
// `SHIFT_CALENDAR__<SECTION>__<KEY>` environment variables (e.g.
// `SHIFT_CALENDAR__SERVER__PORT=9090`). A `.env` file is read first.

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub seed_roster: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("SHIFT_CALENDAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Defaults overlaid with a TOML document. No file or environment lookup.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("calendar.seed_roster", true)
    }
}
