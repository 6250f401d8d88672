use std::sync::OnceLock;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub author: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn log_level(&self) -> tracing::Level {
        match self {
            Self::Development => tracing::Level::DEBUG,
            Self::Production => tracing::Level::INFO,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// Falls back to the environment (or defaults) when `init` was never
    /// called, which is the case in the hydrated client.
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(|| {
            Self::from_lookup(lookup).unwrap_or_else(|err| {
                tracing::error!("invalid configuration, using defaults: {err}");
                Self::default()
            })
        })
    }

    pub fn init() -> Result<(), ConfigError> {
        let config = Self::from_lookup(lookup)?;
        CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = get("COMMENTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                key: "COMMENTS_API_URL",
                value: api_url,
            });
        }

        let author = get("COMMENTS_AUTHOR").unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
        if author.trim().is_empty() {
            return Err(ConfigError::Empty("COMMENTS_AUTHOR"));
        }

        let environment = match get("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            author: author.trim().to_string(),
            environment,
        })
    }
}

// Runtime variables win; the browser has none, so the values baked in at
// compile time are used there.
fn lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().or_else(|| {
        match key {
            "COMMENTS_API_URL" => option_env!("COMMENTS_API_URL"),
            "COMMENTS_AUTHOR" => option_env!("COMMENTS_AUTHOR"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            _ => None,
        }
        .map(String::from)
    })
}
