//! Calculator configuration
//!
//! The only recognized option is `enable_log` (default `true`).

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CalcError, Result};

/// Environment variable prefix, e.g. `CALC_ENABLE_LOG=false`
pub const ENV_PREFIX: &str = "CALC_";

/// Calculator construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Emit a log line for every successful operation
    pub enable_log: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { enable_log: true }
    }
}

impl CalculatorConfig {
    pub fn with_logging(enable_log: bool) -> Self {
        Self { enable_log }
    }

    /// Load configuration from multiple sources
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`CALC_` prefix)
    /// 2. `config/calculator.{toml,yaml,json}`
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("config/calculator.toml"))
            .merge(Yaml::file("config/calculator.yaml"))
            .merge(Json::file("config/calculator.json"))
            .merge(Env::prefixed(ENV_PREFIX));

        Self::from_figment(figment)
    }

    /// Load configuration from a specific file, chosen by extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CalcError::config("Config file must have an extension"))?;

        let defaults = Figment::from(Serialized::defaults(Self::default()));
        let figment = match extension {
            "toml" => defaults.merge(Toml::file(path)),
            "yaml" | "yml" => defaults.merge(Yaml::file(path)),
            "json" => defaults.merge(Json::file(path)),
            _ => {
                return Err(CalcError::config(format!(
                    "Unsupported config file format: {}",
                    extension
                )))
            },
        };

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| CalcError::config(format!("Failed to load configuration: {}", e)))
    }
}
