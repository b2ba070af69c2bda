mod basic;
mod source;

pub use basic::BasicConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// External character source settings (see `source` table in config.toml).
    #[serde(default)]
    pub source: SourceConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "HOLOCRON_";

impl Config {
    /// Builds a Figment that merges defaults, an optional `config.toml` and
    /// `HOLOCRON_`-prefixed environment variables (`__` separates tables).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads configuration from defaults, `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(&Self::figment())
    }

    fn validate(&self) -> Result<(), figment::Error> {
        if self.basic.database_url.trim().is_empty() {
            return Err(figment::Error::from(
                "basic.database_url must be set and non-empty".to_string(),
            ));
        }
        if self.basic.max_connections == 0 {
            return Err(figment::Error::from(
                "basic.max_connections must be at least 1".to_string(),
            ));
        }
        if !matches!(self.source.root_url.scheme(), "http" | "https") {
            return Err(figment::Error::from(format!(
                "source.root_url must be http(s), got scheme {:?}",
                self.source.root_url.scheme()
            )));
        }
        for origin in &self.basic.cors_origins {
            validate_cors_origin(origin).map_err(|reason| {
                figment::Error::from(format!(
                    "basic.cors_origins entry {origin:?} is invalid: {reason}"
                ))
            })?;
        }
        Ok(())
    }
}

/// A CORS origin is `scheme://host[:port]` and must be usable as a header value.
fn validate_cors_origin(origin: &str) -> Result<(), String> {
    HeaderValue::from_str(origin).map_err(|e| e.to_string())?;
    let url = Url::parse(origin).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err("expected an http(s) origin".to_string());
    }
    if url.path() != "/" || origin.ends_with('/') {
        return Err("an origin has no path".to_string());
    }
    Ok(())
}
