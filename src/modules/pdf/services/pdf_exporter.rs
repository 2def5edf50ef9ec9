use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use super::browser::{BrowserLauncher, BrowserSession, PrintOptions};
use crate::config::RendererConfig;
use crate::core::RenderError;

/// Converts an HTML document into PDF bytes.
///
/// Each export launches its own browser, never shared with another export,
/// and closes it on every path out of [`PdfExporter::export`]. At most
/// `max_concurrent` browsers run at once; further exports wait for a slot.
pub struct PdfExporter {
    launcher: Arc<dyn BrowserLauncher>,
    slots: Semaphore,
    timeout: Duration,
    options: PrintOptions,
}

impl PdfExporter {
    pub fn new(launcher: Arc<dyn BrowserLauncher>, config: &RendererConfig) -> Self {
        Self {
            launcher,
            slots: Semaphore::new(config.max_concurrent),
            timeout: config.timeout,
            options: PrintOptions::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load `html` into a fresh browser page and print it to A4.
    ///
    /// Launch, load and print failures come back unchanged as the error;
    /// a failure to close the browser afterwards is only logged. Launch,
    /// load+print and close are each bounded by the render timeout.
    pub async fn export(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let _slot = self
            .slots
            .acquire()
            .await
            .map_err(RenderError::launch)?;

        let mut session = tokio::time::timeout(self.timeout, self.launcher.launch())
            .await
            .unwrap_or_else(|_| Err(RenderError::Timeout(self.timeout)))?;

        let outcome = tokio::time::timeout(
            self.timeout,
            load_and_print(session.as_mut(), html, &self.options),
        )
        .await
        .unwrap_or_else(|_| Err(RenderError::Timeout(self.timeout)));

        let closed = tokio::time::timeout(self.timeout, session.close())
            .await
            .unwrap_or_else(|_| Err(RenderError::Timeout(self.timeout)));
        if let Err(e) = closed {
            tracing::warn!(
                launcher = self.launcher.name(),
                error = %e,
                "Failed to close browser session"
            );
        }

        outcome
    }
}

async fn load_and_print(
    session: &mut dyn BrowserSession,
    html: &str,
    options: &PrintOptions,
) -> Result<Vec<u8>, RenderError> {
    session.load_html(html).await?;
    let pdf = session.print_pdf(options).await?;
    tracing::debug!(bytes = pdf.len(), "PDF printed");
    Ok(pdf)
}
