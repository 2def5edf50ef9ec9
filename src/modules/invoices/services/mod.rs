pub mod invoice_service;
pub mod template_renderer;
pub mod totals_calculator;
pub mod validation;

pub use invoice_service::{GenerationStage, InvoiceService};
pub use template_renderer::TemplateRenderer;
pub use totals_calculator::{InvoiceTotals, TotalsCalculator};
pub use validation::validate_invoice;
