// Quick bill module: free-text sale entry

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{DraftItem, QuickBillDraft, QuickBillRequest, QuickBillResponse};
pub use services::parse_quick_bill;
