// Turns an arbitrary JSON request body into a normalized `Invoice`.
//
// The body is walked as a `serde_json::Value` rather than deserialized
// directly so that every wrong type, missing field and out-of-range value is
// reported as its own issue instead of failing on the first serde error.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use validator::ValidateEmail;

use crate::core::{Currency, IssueCode, PathSegment, ValidationError, ValidationIssue};
use crate::modules::invoices::models::{Invoice, LineItem, Party};

/// Validate a request body and apply defaults.
///
/// Never mutates `input`. Returns every violated constraint at once.
pub fn validate_invoice(input: &Value) -> Result<Invoice, ValidationError> {
    let Some(root) = input.as_object() else {
        return Err(ValidationError::single(ValidationIssue::new(
            IssueCode::InvalidType,
            Vec::new(),
            format!("Expected object, received {}", kind(input)),
        )));
    };

    let mut checker = Checker::default();

    let seller = checker.party(root, "sellerDetails", "Seller");
    let buyer = checker.party(root, "buyerDetails", "Buyer");
    let items = checker.items(root);

    let tax_rate = checker.non_negative_number(root, "taxRate", "Tax rate");
    let discount_rate = checker.non_negative_number(root, "discountRate", "Discount rate");
    let old_balance = checker.optional_number(root, "oldBalance", &[]);
    let cash_received = checker.optional_number(root, "cashReceived", &[]);

    let currency = checker.optional_string(root, "currency", &[]);
    let invoice_number = checker.optional_string(root, "invoiceNumber", &[]);
    let notes = checker.optional_string(root, "notes", &[]);
    let invoice_date = checker.optional_date(root, "invoiceDate");
    let due_date = checker.optional_date(root, "dueDate");

    if let Some(err) = checker.into_error() {
        return Err(err);
    }

    // A missing part always recorded an issue above
    let (Some(seller), Some(buyer), Some(items)) = (seller, buyer, items) else {
        return Err(ValidationError::single(ValidationIssue::new(
            IssueCode::InvalidType,
            Vec::new(),
            "Invoice could not be read",
        )));
    };

    Ok(Invoice {
        seller,
        buyer,
        items,
        tax_rate: tax_rate.unwrap_or(Decimal::ZERO),
        discount_rate: discount_rate.unwrap_or(Decimal::ZERO),
        currency: currency.map(Currency::new).unwrap_or_default(),
        old_balance: old_balance.unwrap_or(Decimal::ZERO),
        cash_received: cash_received.unwrap_or(Decimal::ZERO),
        invoice_number: non_blank(invoice_number),
        invoice_date,
        due_date,
        notes: non_blank(notes),
    })
}

/// Accumulates issues while walking the body
#[derive(Default)]
struct Checker {
    issues: Vec<ValidationIssue>,
}

impl Checker {
    fn issue(&mut self, code: IssueCode, path: &[PathSegment], message: impl Into<String>) {
        self.issues
            .push(ValidationIssue::new(code, path.to_vec(), message));
    }

    fn into_error(self) -> Option<ValidationError> {
        ValidationError::from_issues(self.issues)
    }

    fn party(&mut self, root: &Map<String, Value>, key: &str, label: &str) -> Option<Party> {
        let path = [PathSegment::from(key)];
        let object = self.required_object(root.get(key), &path)?;

        let name = self.required_text(
            object,
            "name",
            &path,
            &format!("{} name is required", label),
        );
        let address = self.optional_string(object, "address", &path);
        let email = self.email(object, &path);

        Some(Party {
            name: name?,
            address: non_blank(address),
            email,
        })
    }

    fn email(&mut self, object: &Map<String, Value>, parent: &[PathSegment]) -> Option<String> {
        let email = non_blank(self.optional_string(object, "email", parent))?;
        let path = child(parent, "email");
        if email.validate_email() {
            Some(email)
        } else {
            self.issue(IssueCode::InvalidString, &path, "Invalid email");
            None
        }
    }

    fn items(&mut self, root: &Map<String, Value>) -> Option<Vec<LineItem>> {
        let path = [PathSegment::from("items")];
        let values = match root.get("items") {
            None => {
                self.issue(IssueCode::InvalidType, &path, "Required");
                return None;
            }
            Some(Value::Array(values)) => values,
            Some(other) => {
                self.issue(
                    IssueCode::InvalidType,
                    &path,
                    format!("Expected array, received {}", kind(other)),
                );
                return None;
            }
        };

        if values.is_empty() {
            self.issue(IssueCode::TooSmall, &path, "At least one item is required");
            return None;
        }

        let mut items = Vec::with_capacity(values.len());
        let mut complete = true;
        for (index, value) in values.iter().enumerate() {
            match self.item(value, &child(&path, index)) {
                Some(item) => items.push(item),
                None => complete = false,
            }
        }

        complete.then_some(items)
    }

    fn item(&mut self, value: &Value, path: &[PathSegment]) -> Option<LineItem> {
        let object = self.required_object(Some(value), path)?;

        let description =
            self.required_text(object, "description", path, "Description is required");

        let quantity_path = child(path, "quantity");
        let quantity = self
            .required_number(object.get("quantity"), &quantity_path)
            .filter(|quantity| {
                let valid = *quantity >= Decimal::ONE;
                if !valid {
                    self.issue(
                        IssueCode::TooSmall,
                        &quantity_path,
                        "Quantity must be at least 1",
                    );
                }
                valid
            });

        let price_path = child(path, "price");
        let price = self
            .required_number(object.get("price"), &price_path)
            .filter(|price| {
                let valid = *price >= Decimal::ZERO;
                if !valid {
                    self.issue(IssueCode::TooSmall, &price_path, "Price must be non-negative");
                }
                valid
            });

        Some(LineItem::new(description?, quantity?, price?))
    }

    fn required_object<'a>(
        &mut self,
        value: Option<&'a Value>,
        path: &[PathSegment],
    ) -> Option<&'a Map<String, Value>> {
        match value {
            None => {
                self.issue(IssueCode::InvalidType, path, "Required");
                None
            }
            Some(Value::Object(object)) => Some(object),
            Some(other) => {
                self.issue(
                    IssueCode::InvalidType,
                    path,
                    format!("Expected object, received {}", kind(other)),
                );
                None
            }
        }
    }

    /// A string that must contain something other than whitespace
    fn required_text(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        parent: &[PathSegment],
        empty_message: &str,
    ) -> Option<String> {
        let path = child(parent, key);
        match object.get(key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(Value::String(_)) => {
                self.issue(IssueCode::TooSmall, &path, empty_message);
                None
            }
            None | Some(Value::Null) => {
                self.issue(IssueCode::InvalidType, &path, empty_message);
                None
            }
            Some(other) => {
                self.issue(
                    IssueCode::InvalidType,
                    &path,
                    format!("Expected string, received {}", kind(other)),
                );
                None
            }
        }
    }

    /// Absent and `null` both mean "not given"
    fn optional_string(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        parent: &[PathSegment],
    ) -> Option<String> {
        match object.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                self.issue(
                    IssueCode::InvalidType,
                    &child(parent, key),
                    format!("Expected string, received {}", kind(other)),
                );
                None
            }
        }
    }

    fn required_number(&mut self, value: Option<&Value>, path: &[PathSegment]) -> Option<Decimal> {
        match value {
            None => {
                self.issue(IssueCode::InvalidType, path, "Required");
                None
            }
            Some(value) => self.number(value, path),
        }
    }

    fn optional_number(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        parent: &[PathSegment],
    ) -> Option<Decimal> {
        match object.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => self.number(value, &child(parent, key)),
        }
    }

    fn non_negative_number(
        &mut self,
        object: &Map<String, Value>,
        key: &str,
        label: &str,
    ) -> Option<Decimal> {
        let number = self.optional_number(object, key, &[])?;
        let path = [PathSegment::from(key)];
        if number < Decimal::ZERO {
            self.issue(
                IssueCode::TooSmall,
                &path,
                format!("{} must be non-negative", label),
            );
            return None;
        }
        Some(number)
    }

    fn number(&mut self, value: &Value, path: &[PathSegment]) -> Option<Decimal> {
        match value {
            Value::Number(number) => {
                let parsed = to_decimal(number);
                if parsed.is_none() {
                    self.issue(IssueCode::TooBig, path, "Number is too large");
                }
                parsed
            }
            other => {
                self.issue(
                    IssueCode::InvalidType,
                    path,
                    format!("Expected number, received {}", kind(other)),
                );
                None
            }
        }
    }

    fn optional_date(&mut self, object: &Map<String, Value>, key: &str) -> Option<NaiveDate> {
        let raw = non_blank(self.optional_string(object, key, &[]))?;
        let path = [PathSegment::from(key)];
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            self.issue(IssueCode::InvalidDate, &path, "Invalid date");
        }
        parsed
    }
}

fn child(parent: &[PathSegment], segment: impl Into<PathSegment>) -> Vec<PathSegment> {
    let mut path = parent.to_vec();
    path.push(segment.into());
    path
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Exact conversion; JSON numbers keep their literal text
fn to_decimal(number: &Number) -> Option<Decimal> {
    let literal = number.to_string();
    Decimal::from_str(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .ok()
        .or_else(|| truncated(&literal))
}

/// Fallback for literals with more digits than `Decimal` holds.
/// Digits past 28 significant figures or 28 decimal places are dropped,
/// so `1e-30` reads as zero; `None` means the magnitude is out of range.
fn truncated(literal: &str) -> Option<Decimal> {
    const MAX_DIGITS: usize = 28;

    let (mantissa, exponent) = match literal.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (literal, 0),
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = format!("{}{}", whole, fraction);
    let significant = all_digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }
    let kept = significant.len().min(MAX_DIGITS);
    let dropped = (significant.len() - kept) as i64;
    let mut scale = (fraction.len() as i64)
        .checked_sub(exponent)?
        .checked_sub(dropped)?;

    let mut value = Decimal::from_str(&significant[..kept]).ok()?;
    while scale < 0 {
        value = value.checked_mul(Decimal::TEN)?;
        scale += 1;
    }
    if scale <= MAX_DIGITS as i64 {
        value.set_scale(scale as u32).ok()?;
    } else {
        value.set_scale(MAX_DIGITS as u32).ok()?;
        for _ in MAX_DIGITS as i64..scale {
            value = value.checked_div(Decimal::TEN)?;
            if value.is_zero() {
                break;
            }
        }
    }

    Some(if negative { -value } else { value })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
