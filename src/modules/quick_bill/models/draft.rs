use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body of `POST /quick-bill`
#[derive(Debug, Clone, Deserialize)]
pub struct QuickBillRequest {
    pub text: String,
}

/// One line item guessed from free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftItem {
    pub description: String,
    pub quantity: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Partial invoice guessed from free text; the user completes the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickBillDraft {
    pub items: Vec<DraftItem>,
    pub buyer_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DraftBuyer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Wire form of a draft: `{ "items": [...], "buyerDetails": { "name"?: ... } }`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickBillResponse {
    pub items: Vec<DraftItem>,
    pub buyer_details: DraftBuyer,
}

impl From<QuickBillDraft> for QuickBillResponse {
    fn from(draft: QuickBillDraft) -> Self {
        Self {
            items: draft.items,
            buyer_details: DraftBuyer {
                name: draft.buyer_name,
            },
        }
    }
}
