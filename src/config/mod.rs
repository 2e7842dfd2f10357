#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::listing::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::collections::HashMap;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// 合併設定檔與命令列後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub headers: HashMap<String, String>,
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            headers: HashMap::new(),
            format: OutputFormat::default(),
            log_level: None,
            json_logs: false,
        }
    }

    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            base_url: config.api.base_url.clone(),
            timeout: config.api.timeout_seconds.map(Duration::from_secs),
            headers: config.api.headers.clone().unwrap_or_default(),
            format: config.output_format()?.unwrap_or_default(),
            log_level: config.log_level().map(str::to_string),
            json_logs: config.json_logs(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout {
            validation::validate_positive_number("timeout", timeout.as_secs(), 1)?;
        }
        Ok(())
    }
}
