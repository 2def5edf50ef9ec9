mod draft;

pub use draft::{DraftBuyer, DraftItem, QuickBillDraft, QuickBillRequest, QuickBillResponse};
