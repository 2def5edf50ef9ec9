use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Code used when the request does not name a currency
pub const DEFAULT_CURRENCY: &str = "USD";

/// Invoice amounts are always shown and totalled in cents
pub const AMOUNT_SCALE: u32 = 2;

/// Currency label printed in front of every amount.
///
/// Any non-empty code is accepted; the code only affects display, never
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Builds a currency from user input, falling back to USD when blank
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim();
        if code.is_empty() {
            Self::default()
        } else {
            Self(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Formats an amount as `<CODE> <amount with 2 decimals>`
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{} {:.width$}",
            self.0,
            round_amount(amount),
            width = AMOUNT_SCALE as usize
        )
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds to cents, halves away from zero (`1.005` -> `1.01`)
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
