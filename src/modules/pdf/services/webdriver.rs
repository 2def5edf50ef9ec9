use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use fantoccini::{
    wd::{PrintConfigurationBuilder, PrintSize},
    Client, ClientBuilder,
};
use serde_json::{json, Map, Value};

use super::browser::{BrowserLauncher, BrowserSession, PageFormat, PrintOptions};
use crate::config::RendererConfig;
use crate::core::RenderError;

/// Chrome flags for running inside containers without a display
const CHROME_ARGS: [&str; 4] = [
    "--headless=new",
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-gpu",
];

/// Resolves once web fonts (the remote Inter stylesheet) finished loading
const FONTS_READY_SCRIPT: &str = r#"
const done = arguments[arguments.length - 1];
document.fonts.ready.then(() => done(true), () => done(false));
"#;

/// Launches headless Chrome through a WebDriver server (chromedriver).
///
/// Every `launch` opens a new WebDriver session, which makes the driver start
/// a separate browser process; closing the session terminates it.
pub struct WebDriverLauncher {
    webdriver_url: String,
    capabilities: Map<String, Value>,
}

impl WebDriverLauncher {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            capabilities: chrome_capabilities(config.chrome_binary.as_deref()),
        }
    }
}

fn chrome_capabilities(binary: Option<&str>) -> Map<String, Value> {
    let mut chrome_options = Map::new();
    chrome_options.insert("args".to_string(), json!(CHROME_ARGS));
    if let Some(binary) = binary {
        chrome_options.insert("binary".to_string(), json!(binary));
    }

    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("pageLoadStrategy".to_string(), json!("normal"));
    caps.insert("goog:chromeOptions".to_string(), Value::Object(chrome_options));
    caps
}

#[async_trait]
impl BrowserLauncher for WebDriverLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError> {
        let client = ClientBuilder::native()
            .capabilities(self.capabilities.clone())
            .connect(&self.webdriver_url)
            .await
            .map_err(RenderError::launch)?;

        tracing::debug!(webdriver = %self.webdriver_url, "Browser session started");

        Ok(Box::new(WebDriverSession { client }))
    }

    fn name(&self) -> &str {
        "webdriver"
    }
}

struct WebDriverSession {
    client: Client,
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError> {
        // goto returns after the load event, stylesheets included
        self.client
            .goto(&data_url(html))
            .await
            .map_err(RenderError::navigation)?;

        self.client
            .execute_async(FONTS_READY_SCRIPT, Vec::new())
            .await
            .map_err(RenderError::navigation)?;

        Ok(())
    }

    async fn print_pdf(&mut self, options: &PrintOptions) -> Result<Vec<u8>, RenderError> {
        let size = match options.format {
            PageFormat::A4 => PrintSize::A4,
        };

        let config = PrintConfigurationBuilder::default()
            .size(size)
            .background(options.print_background)
            .build()
            .map_err(|e| RenderError::print(format!("invalid print configuration: {:?}", e)))?;

        self.client.print(config).await.map_err(RenderError::print)
    }

    async fn close(self: Box<Self>) -> Result<(), RenderError> {
        self.client.close().await.map_err(RenderError::release)
    }
}

fn data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html))
}
