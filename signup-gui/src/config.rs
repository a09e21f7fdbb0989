use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "signup.toml";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SIGNUP_PATH: &str = "signup";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_COMPANY_NAME: &str = "Stock Manager";

/// Environment variable overriding the `api_url` of the configuration file.
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Base url of the backend api.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Path of the signup endpoint, relative to `api_url`.
    #[serde(default = "default_signup_path")]
    pub signup_path: String,
    /// Url of the web application the sign in page points to.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Name displayed in the signup form header.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// log level, can be "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if true and no log_level is set.
    pub debug: Option<bool>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_signup_path() -> String {
    DEFAULT_SIGNUP_PATH.to_string()
}

fn default_app_url() -> String {
    DEFAULT_APP_URL.to_string()
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            signup_path: default_signup_path(),
            app_url: default_app_url(),
            company_name: default_company_name(),
            log_level: None,
            debug: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Reads the configuration file, writing a default one first if it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::info!("No configuration file found, creating {}", path.display());
                let config = Self::default();
                config.to_file(path)?;
                Ok(config)
            }
            res => res,
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing signup configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            filter::LevelFilter::from_str(level).map_err(|_| {
                ConfigError::InvalidField("log_level", format!("Unknown value '{}'", level))
            })
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    /// Replaces the api url if an override was given on the command line or in the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Full url of the signup endpoint.
    pub fn signup_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.signup_path.trim_start_matches('/')
        )
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
