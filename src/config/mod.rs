use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod renderer;
pub mod server;

pub use renderer::RendererConfig;
pub use server::ServerConfig;

/// Variable lookup; `env::var` in production, a closure in tests
pub(crate) type Vars<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    pub(crate) fn from_vars(vars: &Vars<'_>) -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: vars("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_format: match vars("LOG_FORMAT").as_deref() {
                    Some("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
            },
            server: ServerConfig::from_vars(vars)?,
            renderer: RendererConfig::from_vars(vars)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.renderer.validate()
    }
}

/// Reads `key`, falling back to `default` when unset
pub(crate) fn parse_var<T: FromStr>(vars: &Vars<'_>, key: &str, default: T) -> Result<T> {
    match vars(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}
