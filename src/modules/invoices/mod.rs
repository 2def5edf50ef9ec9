// Invoices module: validation, totals, HTML rendering and the generate endpoint

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{Invoice, LineItem, Party};
pub use services::{
    validate_invoice, GenerationStage, InvoiceService, InvoiceTotals, TemplateRenderer,
    TotalsCalculator,
};
