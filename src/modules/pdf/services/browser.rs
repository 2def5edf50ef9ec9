use async_trait::async_trait;

use crate::core::RenderError;

/// Starts isolated browser instances, one per export
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Launch a fresh browser; the caller owns it exclusively until `close`
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError>;

    /// Launcher name for logging
    fn name(&self) -> &str;
}

/// A running browser holding a single page
#[async_trait]
pub trait BrowserSession: Send {
    /// Load `html` as the page content and wait until it has settled
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError>;

    /// Print the loaded page
    async fn print_pdf(&mut self, options: &PrintOptions) -> Result<Vec<u8>, RenderError>;

    /// Shut the browser down. Consumes the session so it cannot be reused.
    async fn close(self: Box<Self>) -> Result<(), RenderError>;
}

/// Physical page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    A4,
}

/// Print settings passed to the browser
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintOptions {
    pub format: PageFormat,
    /// Keep background colours and gradients
    pub print_background: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            print_background: true,
        }
    }
}
