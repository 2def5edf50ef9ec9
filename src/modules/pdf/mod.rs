// PDF module: prints rendered invoice HTML through a headless browser

pub mod services;

pub use services::{
    BrowserLauncher, BrowserSession, PageFormat, PdfExporter, PrintOptions, WebDriverLauncher,
};
