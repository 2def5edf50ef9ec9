/// Template renderer tests
/// Purity: same invoice + totals + date gives byte-identical HTML
/// Conditional blocks: balance adjustments, notes, due date

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use biller::invoices::{Invoice, LineItem, Party, TemplateRenderer, TotalsCalculator};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn invoice() -> Invoice {
    let mut invoice = Invoice::new(
        Party::named("Acme").with_address("1 Main St\nSpringfield"),
        Party::named("Bob").with_email("bob@example.com"),
        vec![
            LineItem::new("Widget", dec!(3), dec!(10)),
            LineItem::new("Gadget", dec!(1.5), dec!(4.99)),
        ],
    );
    invoice.tax_rate = dec!(10);
    invoice
}

fn render(invoice: &Invoice) -> String {
    let totals = TotalsCalculator::new().calculate(invoice).unwrap();
    TemplateRenderer::new()
        .render_at(invoice, &totals, today())
        .unwrap()
}

#[test]
fn test_rendering_is_deterministic() {
    let invoice = invoice();
    assert_eq!(render(&invoice), render(&invoice));
}

#[test]
fn test_parties_and_items_rendered() {
    let html = render(&invoice());

    assert!(html.contains("Acme"));
    assert!(html.contains("1 Main St<br>Springfield"));
    assert!(html.contains("bob@example.com"));
    assert!(html.contains("<td>Widget</td>"));
    assert!(html.contains("<td>Gadget</td>"));
    // 1.5 × 4.99 = 7.485
    assert!(html.contains("USD 7.49"));
    assert!(html.contains("Date: June 1, 2025"));
}

#[test]
fn test_balance_block_only_with_adjustments() {
    let mut invoice = invoice();
    assert!(!render(&invoice).contains("old-balance"));

    invoice.old_balance = dec!(20);
    let html = render(&invoice);
    assert!(html.contains("old-balance"));
    assert!(html.contains("cash-received"));
    assert!(html.contains("USD 20.00"));

    invoice.old_balance = dec!(0);
    invoice.cash_received = dec!(5);
    assert!(render(&invoice).contains("old-balance"));

    // A negative old balance alone does not show the block
    invoice.old_balance = dec!(-5);
    invoice.cash_received = dec!(0);
    assert!(!render(&invoice).contains("old-balance"));
}

#[test]
fn test_notes_block_only_with_notes() {
    let mut invoice = invoice();
    assert!(!render(&invoice).contains(r#"class="notes-section""#));

    invoice.notes = Some("Pay within 30 days".to_string());
    let html = render(&invoice);
    assert!(html.contains(r#"class="notes-section""#));
    assert!(html.contains("Pay within 30 days"));
}

#[test]
fn test_due_date_only_when_supplied() {
    let mut invoice = invoice();
    assert!(!render(&invoice).contains("Due Date:"));

    invoice.due_date = NaiveDate::from_ymd_opt(2025, 7, 4);
    assert!(render(&invoice).contains("Due Date: July 4, 2025"));
}

#[test]
fn test_invoice_number_and_date_shown() {
    let mut invoice = invoice();
    invoice.invoice_number = Some("INV-7".to_string());
    invoice.invoice_date = NaiveDate::from_ymd_opt(2024, 12, 25);

    let html = render(&invoice);
    assert!(html.contains("#INV-7"));
    assert!(html.contains("<title>Invoice INV-7</title>"));
    assert!(html.contains("Date: December 25, 2024"));
}

#[test]
fn test_currency_and_discount_formatting() {
    let mut invoice = invoice();
    invoice.currency = biller::core::Currency::new("EUR");
    invoice.discount_rate = dec!(10);

    let html = render(&invoice);
    assert!(html.contains("EUR 30.00"));
    assert!(!html.contains("USD"));
    assert!(html.contains("-EUR"));
}
