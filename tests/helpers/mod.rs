// Shared fixtures for the contract and integration tests.
//
// The stub launcher stands in for chromedriver so the HTTP flow can run
// without a browser, and counts launches and closes so tests can confirm
// every browser was released.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use biller::config::RendererConfig;
use biller::core::RenderError;
use biller::invoices::InvoiceService;
use biller::pdf::{BrowserLauncher, BrowserSession, PdfExporter, PrintOptions};

pub const STUB_PDF: &[u8] = b"%PDF-1.4\n% stub document\n%%EOF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubBehaviour {
    Succeed,
    FailLoad,
    FailPrint,
}

#[derive(Debug, Default)]
pub struct BrowserCounters {
    launched: AtomicUsize,
    closed: AtomicUsize,
    last_html: std::sync::Mutex<Option<String>>,
}

impl BrowserCounters {
    pub fn launched(&self) -> usize {
        self.launched.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn last_html(&self) -> Option<String> {
        self.last_html.lock().ok().and_then(|html| html.clone())
    }
}

pub struct StubLauncher {
    behaviour: StubBehaviour,
    counters: Arc<BrowserCounters>,
}

struct StubSession {
    behaviour: StubBehaviour,
    counters: Arc<BrowserCounters>,
}

#[async_trait]
impl BrowserLauncher for StubLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError> {
        self.counters.launched.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubSession {
            behaviour: self.behaviour,
            counters: self.counters.clone(),
        }))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[async_trait]
impl BrowserSession for StubSession {
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError> {
        if let Ok(mut last) = self.counters.last_html.lock() {
            *last = Some(html.to_string());
        }
        match self.behaviour {
            StubBehaviour::FailLoad => Err(RenderError::navigation("page crashed")),
            _ => Ok(()),
        }
    }

    async fn print_pdf(&mut self, _options: &PrintOptions) -> Result<Vec<u8>, RenderError> {
        match self.behaviour {
            StubBehaviour::FailPrint => Err(RenderError::print("printToPDF failed")),
            _ => Ok(STUB_PDF.to_vec()),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), RenderError> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Invoice service backed by a stub browser
pub fn stub_service(behaviour: StubBehaviour) -> (Arc<InvoiceService>, Arc<BrowserCounters>) {
    let counters = Arc::new(BrowserCounters::default());
    let launcher = Arc::new(StubLauncher {
        behaviour,
        counters: counters.clone(),
    });
    let config = RendererConfig {
        timeout: Duration::from_secs(5),
        ..RendererConfig::default()
    };
    let exporter = Arc::new(PdfExporter::new(launcher, &config));
    (Arc::new(InvoiceService::new(exporter)), counters)
}

/// Acme sells Bob three widgets at 10 with 10% tax
pub fn widget_invoice() -> Value {
    json!({
        "sellerDetails": { "name": "Acme" },
        "buyerDetails": { "name": "Bob" },
        "items": [
            { "description": "Widget", "quantity": 3, "price": 10 }
        ],
        "taxRate": 10
    })
}
