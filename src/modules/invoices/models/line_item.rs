// A line item is a single billed product or service. Quantity and unit
// price are validated on the way in; the line total is never stored.

use rust_decimal::Decimal;
use serde::Serialize;

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Description of the product or service
    pub description: String,

    /// Quantity of items (at least 1, fractions allowed)
    pub quantity: Decimal,

    /// Price per unit (non-negative)
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity × unit_price at full precision; `None` when the product
    /// does not fit in a `Decimal`
    pub fn line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }
}
