use crate::core::{AppError, Result};

use super::{parse_var, Vars};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Largest JSON body accepted by the invoice endpoints
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
            max_body_bytes: 1024 * 1024,
        }
    }

    pub(crate) fn from_vars(vars: &Vars<'_>) -> Result<Self> {
        let mut config = Self::new(
            vars("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            parse_var(vars, "PORT", 5000)?,
        );
        config.workers = parse_var(vars, "SERVER_WORKERS", config.workers)?;
        config.max_body_bytes = parse_var(vars, "MAX_BODY_BYTES", config.max_body_bytes)?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::configuration("PORT must be greater than 0"));
        }
        if self.workers == 0 {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
