use std::time::Duration;

use tracing::Level;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Process configuration, resolved once at startup and handed to the components
/// that need it. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Empty when unset; the service rejects it and the fetch surfaces as an error.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_level: Level,
    /// Problems found while reading the environment. Logged by `main` once the
    /// subscriber is up, since the log level itself comes from here.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            log_level: Level::INFO,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment (and `.env`, if the caller loaded it).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("API_KEY")
            .or_else(|| non_empty("GEMINI_API_KEY"))
            .unwrap_or_default();
        let model = non_empty("GEMINI_MODEL").unwrap_or(defaults.model);
        let base_url = non_empty("GEMINI_BASE_URL").unwrap_or(defaults.base_url);

        let timeout = match non_empty("GEMINI_TIMEOUT_SECS") {
            None => None,
            Some(v) => match v.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warnings.push(format!("ignoring invalid GEMINI_TIMEOUT_SECS={:?}", v));
                    None
                }
            },
        };

        let log_level = match non_empty("SUMMARIZER_LOG_LEVEL") {
            None => defaults.log_level,
            Some(v) => v.trim().parse::<Level>().unwrap_or_else(|_| {
                warnings.push(format!("ignoring invalid SUMMARIZER_LOG_LEVEL={:?}", v));
                defaults.log_level
            }),
        };

        Self {
            api_key,
            model,
            base_url,
            timeout,
            log_level,
            warnings,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
