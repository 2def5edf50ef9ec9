// An invoice is built from exactly one request: validated, totalled,
// rendered once and then dropped. Nothing here is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::LineItem;
use super::party::Party;
use crate::core::Currency;

/// A validated, normalized invoice.
///
/// Only produced by [`validate_invoice`](crate::invoices::validate_invoice)
/// or the builder below, so `items` is never empty and every party has a
/// name. Serializes back to the request wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "sellerDetails")]
    pub seller: Party,

    #[serde(rename = "buyerDetails")]
    pub buyer: Party,

    /// Billed lines, in input order
    pub items: Vec<LineItem>,

    /// Percentage, e.g. `10` for 10%
    pub tax_rate: Decimal,

    /// Percentage applied to the subtotal
    pub discount_rate: Decimal,

    pub currency: Currency,

    /// Carried over from previous invoices, may be negative
    pub old_balance: Decimal,

    pub cash_received: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Invoice {
    /// Invoice with every optional field at its default
    pub fn new(seller: Party, buyer: Party, items: Vec<LineItem>) -> Self {
        Self {
            seller,
            buyer,
            items,
            tax_rate: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            currency: Currency::default(),
            old_balance: Decimal::ZERO,
            cash_received: Decimal::ZERO,
            invoice_number: None,
            invoice_date: None,
            due_date: None,
            notes: None,
        }
    }

    /// True when the old-balance / cash-received block should be shown
    pub fn has_balance_adjustments(&self) -> bool {
        self.old_balance > Decimal::ZERO || self.cash_received > Decimal::ZERO
    }
}
