use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::core::error::AppError;
use crate::modules::invoices::models::Invoice;
use crate::modules::invoices::services::template_renderer::TemplateRenderer;
use crate::modules::invoices::services::totals_calculator::{InvoiceTotals, TotalsCalculator};
use crate::modules::invoices::services::validation::validate_invoice;
use crate::modules::pdf::PdfExporter;

/// Where a generate request currently is; used for log context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Received,
    Validating,
    Rendering,
    Exporting,
    Responded,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStage::Received => write!(f, "received"),
            GenerationStage::Validating => write!(f, "validating"),
            GenerationStage::Rendering => write!(f, "rendering"),
            GenerationStage::Exporting => write!(f, "exporting"),
            GenerationStage::Responded => write!(f, "responded"),
        }
    }
}

/// Service for invoice document generation
pub struct InvoiceService {
    calculator: TotalsCalculator,
    renderer: TemplateRenderer,
    exporter: Arc<PdfExporter>,
}

impl InvoiceService {
    pub fn new(exporter: Arc<PdfExporter>) -> Self {
        Self {
            calculator: TotalsCalculator::new(),
            renderer: TemplateRenderer::new(),
            exporter,
        }
    }

    /// Validate the body and derive its totals
    pub fn prepare(&self, body: &Value) -> Result<(Invoice, InvoiceTotals), AppError> {
        let invoice = validate_invoice(body)?;
        let totals = self.calculator.calculate(&invoice)?;
        Ok((invoice, totals))
    }

    /// Validate and render to HTML without involving the browser
    pub fn render_html(&self, body: &Value) -> Result<String, AppError> {
        let (invoice, totals) = self.prepare(body)?;
        Ok(self.renderer.render(&invoice, &totals)?)
    }

    /// Validate, render and print a request body to PDF bytes
    pub async fn generate_pdf(&self, body: &Value, request_id: &str) -> Result<Vec<u8>, AppError> {
        self.enter(request_id, GenerationStage::Validating);
        let (invoice, totals) = self.prepare(body).map_err(|e| {
            tracing::debug!(request_id, error = %e, "Invoice rejected");
            e
        })?;

        self.enter(request_id, GenerationStage::Rendering);
        let html = self.renderer.render(&invoice, &totals).map_err(|e| {
            tracing::error!(request_id, stage = %GenerationStage::Rendering, error = %e, "Template rendering failed");
            e
        })?;

        self.enter(request_id, GenerationStage::Exporting);
        let pdf = self.exporter.export(&html).await.map_err(|e| {
            tracing::error!(
                request_id,
                stage = %GenerationStage::Exporting,
                timeout_secs = self.exporter.timeout().as_secs(),
                error = ?e,
                "PDF export failed"
            );
            e
        })?;

        self.enter(request_id, GenerationStage::Responded);
        tracing::info!(
            request_id,
            items = invoice.items.len(),
            balance_due = %totals.balance_due,
            bytes = pdf.len(),
            "Invoice generated"
        );

        Ok(pdf)
    }

    fn enter(&self, request_id: &str, stage: GenerationStage) {
        tracing::debug!(request_id, stage = %stage, "Invoice generation stage");
    }
}
