//! Earnings estimation: static market table plus a best-match lookup.
//!
//! Given (location, villa category, bedrooms, strategy) the table returns
//! the precomputed occupancy, daily rate and gross revenue for that
//! combination. Bedroom requests above the tabulated maximum clamp to it,
//! and operating expenses are always recomputed as a fixed share of gross
//! revenue; the tabulated expense column is never surfaced.

pub mod currency;
pub mod projection;
pub mod table;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{AuraError, BedroomRequest, Location, Strategy, VillaCategory};
use table::{EstimationRow, MAX_BEDROOMS, ROWS};

/// Operating expenses as a share of gross revenue (0.15).
pub const OPERATING_EXPENSE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The figures shown by the earnings calculator for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// Percentage, 0–100.
    pub average_occupancy: u8,
    /// USD per night.
    pub average_daily_rate: Decimal,
    /// USD per year.
    pub annual_gross_revenue: Decimal,
    /// USD per year, always `round(annual_gross_revenue * 0.15)`.
    pub annual_operational_expenses: Decimal,
}

impl EstimationResult {
    fn from_row(row: &EstimationRow) -> Self {
        let gross = Decimal::from(row.annual_gross_revenue);
        Self {
            average_occupancy: row.average_occupancy,
            average_daily_rate: row.average_daily_rate(),
            annual_gross_revenue: gross,
            annual_operational_expenses: operating_expenses(gross),
        }
    }

    /// Gross revenue minus operating expenses.
    pub fn annual_net_revenue(&self) -> Decimal {
        self.annual_gross_revenue - self.annual_operational_expenses
    }
}

/// 15% of gross, rounded half away from zero to whole currency units.
pub fn operating_expenses(gross: Decimal) -> Decimal {
    (gross * OPERATING_EXPENSE_RATE).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Read-only view over the market rows.
///
/// Cheap to copy and safe to share across threads: it only borrows
/// `'static` data.
#[derive(Debug, Clone, Copy)]
pub struct EstimationTable {
    rows: &'static [EstimationRow],
}

impl Default for EstimationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimationTable {
    /// The bundled market table.
    pub fn new() -> Self {
        Self { rows: ROWS }
    }

    /// A table over custom rows (used to exercise validation).
    pub fn with_rows(rows: &'static [EstimationRow]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [EstimationRow] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check that every supported combination resolves to exactly one row.
    pub fn validate(&self) -> Result<(), AuraError> {
        let mut counts: HashMap<(Location, VillaCategory, u32, Strategy), usize> = HashMap::new();
        for row in self.rows {
            *counts.entry(row.key()).or_default() += 1;
        }

        for &location in Location::ALL {
            for &category in VillaCategory::ALL {
                for bedrooms in 1..=MAX_BEDROOMS {
                    for &strategy in Strategy::ALL {
                        let key = (location, category, bedrooms, strategy);
                        let label = format!("{location}/{category}/{bedrooms}br/{strategy}");
                        match counts.get(&key).copied().unwrap_or(0) {
                            0 => return Err(AuraError::TableGap(label)),
                            1 => {}
                            _ => return Err(AuraError::DuplicateRow(label)),
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Exact row for an already-clamped bedroom count.
    pub fn lookup(
        &self,
        location: Location,
        category: VillaCategory,
        bedrooms: u32,
        strategy: Strategy,
    ) -> Option<&'static EstimationRow> {
        self.rows
            .iter()
            .find(|r| r.key() == (location, category, bedrooms, strategy))
    }

    /// Best-matching estimate for a selection.
    ///
    /// Bedroom counts above the tabulated maximum use the maximum's row.
    /// Returns `None` when nothing matches, which callers render as
    /// "data not yet available".
    pub fn estimate(
        &self,
        location: Location,
        category: VillaCategory,
        bedrooms: BedroomRequest,
        strategy: Strategy,
    ) -> Option<EstimationResult> {
        let bedrooms = bedrooms.resolve(MAX_BEDROOMS);
        self.lookup(location, category, bedrooms, strategy)
            .map(EstimationResult::from_row)
    }

    /// String surface used by forms and the HTTP API.
    ///
    /// Unknown locations, categories or strategies yield `None`; a missing
    /// strategy means `Balanced`; unparseable bedroom input means the
    /// maximum tier.
    pub fn estimate_str(
        &self,
        location: &str,
        category: &str,
        bedrooms: &str,
        strategy: Option<&str>,
    ) -> Option<EstimationResult> {
        let location: Location = location.parse().ok()?;
        let category: VillaCategory = category.parse().ok()?;
        let strategy = match strategy {
            Some(s) => s.parse().ok()?,
            None => Strategy::default(),
        };
        self.estimate(location, category, BedroomRequest::parse(bedrooms), strategy)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
