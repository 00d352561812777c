//! Display-time currency conversion and formatting.
//!
//! Estimates are tabulated in USD. Showing them in rupiah multiplies by a
//! configured exchange rate at render time only; the underlying values are
//! never rewritten.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EstimationResult;
use crate::types::AuraError;

/// Currency an amount is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayCurrency {
    #[default]
    Usd,
    Idr,
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayCurrency::Usd => write!(f, "USD"),
            DisplayCurrency::Idr => write!(f, "IDR"),
        }
    }
}

impl FromStr for DisplayCurrency {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(DisplayCurrency::Usd),
            "IDR" => Ok(DisplayCurrency::Idr),
            _ => Err(AuraError::Config(format!("Unsupported display currency: {s}"))),
        }
    }
}

/// Exchange rates injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRates {
    usd_to_idr: Decimal,
}

impl ExchangeRates {
    pub fn new(usd_to_idr: Decimal) -> Result<Self, AuraError> {
        if usd_to_idr <= Decimal::ZERO {
            return Err(AuraError::Config(format!(
                "usd_to_idr must be positive, got {usd_to_idr}"
            )));
        }
        Ok(Self { usd_to_idr })
    }

    pub fn usd_to_idr(&self) -> Decimal {
        self.usd_to_idr
    }

    /// Convert a USD amount into `currency`. Returns a new value.
    pub fn convert(&self, usd: Decimal, currency: DisplayCurrency) -> Decimal {
        match currency {
            DisplayCurrency::Usd => usd,
            DisplayCurrency::Idr => usd * self.usd_to_idr,
        }
    }
}

/// Render a USD amount in `currency` with whole units and locale grouping:
/// `$28,382` or `Rp 461.491.320`.
pub fn format_amount(usd: Decimal, currency: DisplayCurrency, rates: &ExchangeRates) -> String {
    let rounded = rates
        .convert(usd, currency)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().normalize().to_string();

    match currency {
        DisplayCurrency::Usd => format!("{sign}${}", group_digits(&digits, ',')),
        DisplayCurrency::Idr => format!("{sign}Rp {}", group_digits(&digits, '.')),
    }
}

/// Insert `sep` every three digits from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// An estimate rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedEstimate {
    pub currency: DisplayCurrency,
    pub average_occupancy: String,
    pub average_daily_rate: String,
    pub annual_gross_revenue: String,
    pub annual_operational_expenses: String,
}

impl FormattedEstimate {
    pub fn new(result: &EstimationResult, currency: DisplayCurrency, rates: &ExchangeRates) -> Self {
        Self {
            currency,
            average_occupancy: format!("{}%", result.average_occupancy),
            average_daily_rate: format_amount(result.average_daily_rate, currency, rates),
            annual_gross_revenue: format_amount(result.annual_gross_revenue, currency, rates),
            annual_operational_expenses: format_amount(result.annual_operational_expenses, currency, rates),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
