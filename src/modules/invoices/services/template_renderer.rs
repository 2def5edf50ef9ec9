use askama::Template;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::core::RenderError;
use crate::modules::invoices::models::{Invoice, Party};
use crate::modules::invoices::services::totals_calculator::InvoiceTotals;

/// Shown in place of a missing invoice number
pub const PENDING_NUMBER: &str = "PENDING";

/// Long date form, e.g. `January 5, 2025`
const DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceDocument<'a> {
    title_number: &'a str,
    display_number: &'a str,
    invoice_date: String,
    due_date: Option<String>,
    seller: PartyBlock<'a>,
    buyer: PartyBlock<'a>,
    rows: Vec<ItemRow<'a>>,
    tax_rate: String,
    discount_rate: String,
    subtotal: String,
    tax_amount: String,
    discount_amount: String,
    total: String,
    balance_block: Option<BalanceBlock>,
    balance_due: String,
    notes_lines: Option<Vec<&'a str>>,
}

struct PartyBlock<'a> {
    name: &'a str,
    address_lines: Vec<&'a str>,
    email: &'a str,
}

impl<'a> PartyBlock<'a> {
    fn new(party: &'a Party) -> Self {
        Self {
            name: &party.name,
            address_lines: party.address.as_deref().map(lines).unwrap_or_default(),
            email: party.email.as_deref().unwrap_or_default(),
        }
    }
}

struct ItemRow<'a> {
    description: &'a str,
    unit_price: String,
    quantity: String,
    line_total: String,
}

struct BalanceBlock {
    old_balance: String,
    cash_received: String,
}

/// Renders a validated invoice and its totals into a standalone HTML page.
///
/// Every user-supplied string is HTML-escaped by the template engine.
/// Multi-line address and notes text is split on `\n` and joined with
/// `<br>`.
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render using today's local date when the invoice has none
    pub fn render(&self, invoice: &Invoice, totals: &InvoiceTotals) -> Result<String, RenderError> {
        self.render_at(invoice, totals, Local::now().date_naive())
    }

    /// Render with an explicit fallback date; output depends only on the
    /// arguments
    pub fn render_at(
        &self,
        invoice: &Invoice,
        totals: &InvoiceTotals,
        today: NaiveDate,
    ) -> Result<String, RenderError> {
        let currency = &invoice.currency;
        let money = |amount: Decimal| currency.format_amount(amount);

        let document = InvoiceDocument {
            title_number: invoice.invoice_number.as_deref().unwrap_or_default(),
            display_number: invoice
                .invoice_number
                .as_deref()
                .unwrap_or(PENDING_NUMBER),
            invoice_date: format_date(invoice.invoice_date.unwrap_or(today)),
            due_date: invoice.due_date.map(format_date),
            seller: PartyBlock::new(&invoice.seller),
            buyer: PartyBlock::new(&invoice.buyer),
            rows: invoice
                .items
                .iter()
                .zip(&totals.line_totals)
                .map(|(item, line_total)| ItemRow {
                    description: &item.description,
                    unit_price: money(item.unit_price),
                    quantity: plain_number(item.quantity),
                    line_total: money(*line_total),
                })
                .collect(),
            tax_rate: plain_number(invoice.tax_rate),
            discount_rate: plain_number(invoice.discount_rate),
            subtotal: money(totals.subtotal),
            tax_amount: money(totals.tax_amount),
            discount_amount: money(totals.discount_amount),
            total: money(totals.total),
            balance_block: invoice.has_balance_adjustments().then(|| BalanceBlock {
                old_balance: money(invoice.old_balance),
                cash_received: money(invoice.cash_received),
            }),
            balance_due: money(totals.balance_due),
            notes_lines: invoice.notes.as_deref().map(lines),
        };

        Ok(document.render()?)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// `10`, `7.5`: trailing zeros dropped
fn plain_number(value: Decimal) -> String {
    value.normalize().to_string()
}
