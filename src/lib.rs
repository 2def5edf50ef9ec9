//! Biller invoice generation service library
//!
//! Validates invoice data, computes totals, renders an HTML document and
//! prints it to PDF through a headless browser.

pub mod client;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use client::{BillerClient, ClientError};
pub use modules::invoices;
pub use modules::pdf;
pub use modules::quick_bill;
