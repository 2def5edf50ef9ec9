pub mod browser;
pub mod pdf_exporter;
pub mod webdriver;

pub use browser::{BrowserLauncher, BrowserSession, PageFormat, PrintOptions};
pub use pdf_exporter::PdfExporter;
pub use webdriver::WebDriverLauncher;
