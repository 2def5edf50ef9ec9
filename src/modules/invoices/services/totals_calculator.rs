use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{round_amount, IssueCode, PathSegment, ValidationError, ValidationIssue};
use crate::modules::invoices::models::Invoice;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Figures derived from an invoice, each rounded to cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// One per item, in item order
    pub line_totals: Vec<Decimal>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
    pub balance_due: Decimal,
}

/// TotalsCalculator derives subtotal, tax, discount, total and balance due.
///
/// Intermediate sums are kept at full precision; only the reported figures
/// are rounded, so `total` can differ by a cent from the sum of the rounded
/// parts. Amounts too large for a `Decimal` are reported as a `too_big`
/// issue on the field that pushed them out of range.
pub struct TotalsCalculator;

impl TotalsCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, invoice: &Invoice) -> Result<InvoiceTotals, ValidationError> {
        let mut line_totals = Vec::with_capacity(invoice.items.len());
        let mut subtotal = Decimal::ZERO;
        for (index, item) in invoice.items.iter().enumerate() {
            let line_total = item
                .line_total()
                .ok_or_else(|| out_of_range(vec!["items".into(), index.into()]))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| out_of_range(vec!["items".into()]))?;
            line_totals.push(round_amount(line_total));
        }

        let tax_amount = self
            .percentage_of(subtotal, invoice.tax_rate)
            .ok_or_else(|| out_of_range(vec!["taxRate".into()]))?;
        let discount_amount = self
            .percentage_of(subtotal, invoice.discount_rate)
            .ok_or_else(|| out_of_range(vec!["discountRate".into()]))?;
        let total = subtotal
            .checked_add(tax_amount)
            .and_then(|sum| sum.checked_sub(discount_amount))
            .ok_or_else(|| out_of_range(vec!["taxRate".into()]))?;
        let balance_due = total
            .checked_add(invoice.old_balance)
            .ok_or_else(|| out_of_range(vec!["oldBalance".into()]))?
            .checked_sub(invoice.cash_received)
            .ok_or_else(|| out_of_range(vec!["cashReceived".into()]))?;

        Ok(InvoiceTotals {
            line_totals,
            subtotal: round_amount(subtotal),
            tax_amount: round_amount(tax_amount),
            discount_amount: round_amount(discount_amount),
            total: round_amount(total),
            balance_due: round_amount(balance_due),
        })
    }

    /// amount × rate / 100
    pub fn percentage_of(&self, amount: Decimal, rate_percent: Decimal) -> Option<Decimal> {
        amount.checked_mul(rate_percent)?.checked_div(HUNDRED)
    }
}

impl Default for TotalsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn out_of_range(path: Vec<PathSegment>) -> ValidationError {
    ValidationError::single(ValidationIssue::new(
        IssueCode::TooBig,
        path,
        "Amount is too large",
    ))
}
