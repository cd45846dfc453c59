use chrono::Duration as ChronoDuration;
use log::{info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::cookies::CSRF_COOKIE_NAME;
use crate::errors::{Result, TrackerError};
use crate::export::DEFAULT_EXPORT_FILENAME;
use crate::messages::DEFAULT_AUTO_DISMISS_SECS;

pub const ENV_BASE_URL: &str = "LOAN_TRACKER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "LOAN_TRACKER_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "LOAN_TRACKER_LOG_LEVEL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,
    /// no timeout unless set
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_auto_dismiss_secs")]
    pub auto_dismiss_secs: i64,
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_csrf_cookie_name() -> String {
    CSRF_COOKIE_NAME.to_string()
}

fn default_auto_dismiss_secs() -> i64 {
    DEFAULT_AUTO_DISMISS_SECS
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            csrf_cookie_name: default_csrf_cookie_name(),
            request_timeout_secs: None,
            auto_dismiss_secs: default_auto_dismiss_secs(),
            export_filename: default_export_filename(),
            log_level: default_log_level(),
        }
    }
}

impl TrackerConfig {
    /// parse from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// load from a TOML file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// apply `LOAN_TRACKER_*` environment variables, reading `.env` first if present
    pub fn with_env_overrides(self) -> Result<Self> {
        dotenv_loaded(dotenvy::dotenv());
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            info!("{ENV_BASE_URL} overrides base url");
            self.base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse().map_err(|_| TrackerError::InvalidConfiguration {
                message: format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {secs:?}"),
            })?;
            self.request_timeout_secs = Some(secs);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.csrf_cookie_name.is_empty() {
            return Err(TrackerError::InvalidConfiguration {
                message: "csrf_cookie_name must not be empty".to_string(),
            });
        }
        if self.auto_dismiss_secs < 0 {
            return Err(TrackerError::InvalidConfiguration {
                message: format!("auto_dismiss_secs must not be negative, got {}", self.auto_dismiss_secs),
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn auto_dismiss(&self) -> ChronoDuration {
        ChronoDuration::seconds(self.auto_dismiss_secs)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| TrackerError::InvalidConfiguration {
            message: format!("unknown log level {:?}", self.log_level),
        })
    }
}

/// a missing `.env` is normal; anything else is reported and skipped
fn dotenv_loaded<T>(result: dotenvy::Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) if err.not_found() => false,
        Err(err) => {
            warn!("ignoring .env file: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();

        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.auto_dismiss(), ChronoDuration::seconds(5));
        assert_eq!(config.export_filename, "export.csv");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = TrackerConfig::from_toml_str(
            r#"
            base_url = "https://loans.example.com/"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://loans.example.com/");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.csrf_cookie_name, "csrftoken");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(TrackerConfig::from_toml_str("base_url = \"not a url\"").is_err());
        assert!(TrackerConfig::from_toml_str("log_level = \"loud\"").is_err());
        assert!(TrackerConfig::from_toml_str("auto_dismiss_secs = -1").is_err());
        assert!(TrackerConfig::from_toml_str("auto_dismiss_secs = \"five\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "https://staging.example.com/"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_LOG_LEVEL, "debug"),
        ]
        .into_iter()
        .collect();

        let config = TrackerConfig::default()
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.base_url, "https://staging.example.com/");
        assert_eq!(config.request_timeout_secs, Some(3));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_timeout_override() {
        let result = TrackerConfig::default()
            .apply_overrides(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
        assert!(matches!(result, Err(TrackerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_dotenv_missing_is_silent() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no .env");
        assert!(!dotenv_loaded::<()>(Err(dotenvy::Error::Io(missing))));
    }

    #[test]
    fn test_malformed_dotenv_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "not a valid line\n").unwrap();

        let result = dotenvy::from_path(&path);
        assert!(matches!(&result, Err(err) if !err.not_found()));
        assert!(!dotenv_loaded(result));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "export_filename = \"loans.csv\"\n").unwrap();

        let config = TrackerConfig::load(&path).unwrap();
        assert_eq!(config.export_filename, "loans.csv");
    }
}
