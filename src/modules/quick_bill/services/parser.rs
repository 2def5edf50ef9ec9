//! Best-effort parsing of free-text sales such as
//! `sale of 10 box at 3000 to Salim` into a partial invoice.
//!
//! Matching is case-insensitive; captured text keeps the user's casing.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::modules::quick_bill::models::{DraftItem, QuickBillDraft};

/// Description used when nothing better can be guessed
pub const DEFAULT_DESCRIPTION: &str = "Item";

/// Words that end a buyer name or description
const KEYWORDS: [&str; 4] = ["at", "for", "to", "buyer"];

static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)(?:\s*([a-z]+))?").expect("quantity pattern")
});

static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\bat\b|\bfor\b|@)\s*(\d+(?:\.\d+)?)").expect("price pattern")
});

// A name must start with a letter, so `for 3000` never names a buyer
static BUYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:to|buyer|for)\s+([a-z][a-z0-9 ]*)").expect("buyer pattern")
});

static SALE_OF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bsale\s+of\s+(.*?)(?:\s+(?:at|for|to|buyer)\b|\s*@|$)")
        .expect("sale-of pattern")
});

/// Guess items and buyer from `text`.
///
/// At most one item is produced, and only when the text contains an
/// integer quantity.
pub fn parse_quick_bill(text: &str) -> QuickBillDraft {
    let items = parse_quantity(text)
        .map(|(quantity, unit)| DraftItem {
            description: describe(text, unit),
            quantity,
            price: parse_price(text),
        })
        .into_iter()
        .collect();

    QuickBillDraft {
        items,
        buyer_name: parse_buyer(text),
    }
}

fn parse_quantity(text: &str) -> Option<(u64, Option<&str>)> {
    let caps = QUANTITY_RE.captures(text)?;
    let quantity = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|word| !is_keyword(word));
    Some((quantity, unit))
}

fn parse_price(text: &str) -> Decimal {
    PRICE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .unwrap_or(Decimal::ZERO)
}

fn parse_buyer(text: &str) -> Option<String> {
    let captured = BUYER_RE.captures(text)?.get(1)?.as_str();
    let name = captured
        .split_whitespace()
        .take_while(|word| !is_keyword(word))
        .collect::<Vec<_>>()
        .join(" ");

    (!name.is_empty()).then_some(name)
}

fn describe(text: &str, unit: Option<&str>) -> String {
    let from_sale = SALE_OF_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_quantity(m.as_str()))
        .filter(|description| !description.is_empty());

    from_sale
        .or_else(|| unit.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

fn strip_quantity(phrase: &str) -> String {
    phrase
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim()
        .to_string()
}

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}
