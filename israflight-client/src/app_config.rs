use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5126/api";

/// Legacy variable the desktop client read its backend address from.
pub const LEGACY_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub tickets: TicketConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64, // GET, PUT, DELETE
    #[serde(default = "default_write_timeout")]
    pub write_timeout_secs: u64, // POST
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_read_timeout() -> u64 { 20 }
fn default_write_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            read_timeout_secs: default_read_timeout(),
            write_timeout_secs: default_write_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TicketConfig {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layers, lowest priority first: built-in defaults, `<dir>/default`,
    /// `<dir>/<RUN_MODE>`, `<dir>/local`, `ISRAFLIGHT__*` variables, and
    /// finally `API_BASE_URL`.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.read_timeout_secs", default_read_timeout() as i64)?
            .set_default("api.write_timeout_secs", default_write_timeout() as i64)?
            .set_default("api.connect_timeout_secs", default_connect_timeout() as i64)?
            .set_default("tickets.output_dir", ".")?
            // None of the files are required, a bare checkout runs on defaults
            .add_source(config::File::with_name(&file("default")).required(false))
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg.. `ISRAFLIGHT__API__BASE_URL=http://host/api`
            .add_source(config::Environment::with_prefix("ISRAFLIGHT").separator("__"))
            .set_override_option("api.base_url", env::var(LEGACY_BASE_URL_VAR).ok())?
            .build()?;

        s.try_deserialize()
    }
}
