use std::time::Duration;

use crate::core::{AppError, Result};

use super::{parse_var, Vars};

/// Headless browser settings used by the PDF exporter
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// WebDriver endpoint (chromedriver) that starts one browser per session
    pub webdriver_url: String,
    /// Explicit Chrome/Chromium binary, otherwise the driver's default
    pub chrome_binary: Option<String>,
    /// Upper bound for loading the page and printing it
    pub timeout: Duration,
    /// Browser instances allowed to exist at the same time
    pub max_concurrent: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            chrome_binary: None,
            timeout: Duration::from_secs(30),
            max_concurrent: 4,
        }
    }
}

impl RendererConfig {
    pub(crate) fn from_vars(vars: &Vars<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            webdriver_url: vars("WEBDRIVER_URL").unwrap_or(defaults.webdriver_url),
            chrome_binary: vars("CHROME_BINARY").filter(|path| !path.trim().is_empty()),
            timeout: Duration::from_secs(parse_var(
                vars,
                "RENDER_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )?),
            max_concurrent: parse_var(vars, "MAX_CONCURRENT_RENDERS", defaults.max_concurrent)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(AppError::configuration(
                "RENDER_TIMEOUT_SECS must be greater than 0",
            ));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::configuration(
                "MAX_CONCURRENT_RENDERS must be greater than 0",
            ));
        }
        Ok(())
    }
}
