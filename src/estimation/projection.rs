//! Owner earnings under a management tier.
//!
//! Projects revenue from a nightly rate and an occupancy rate over a
//! 30-day month, then takes the tier's commission off the top.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EstimationResult;
use crate::types::{normalize_key, AuraError};

const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Management service level, priced as a commission on gross revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagementTier {
    Essential,
    #[default]
    Premium,
    Boutique,
}

impl ManagementTier {
    pub const ALL: &'static [ManagementTier] = &[
        ManagementTier::Essential,
        ManagementTier::Premium,
        ManagementTier::Boutique,
    ];

    /// Commission as a fraction of gross revenue.
    pub fn commission_rate(&self) -> Decimal {
        match self {
            ManagementTier::Essential => dec!(0.15),
            ManagementTier::Premium => dec!(0.18),
            ManagementTier::Boutique => dec!(0.21),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ManagementTier::Essential => "Essential",
            ManagementTier::Premium => "Premium",
            ManagementTier::Boutique => "Boutique Full",
        }
    }
}

impl fmt::Display for ManagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ManagementTier {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "essential" => Ok(ManagementTier::Essential),
            "premium" => Ok(ManagementTier::Premium),
            "boutique" | "boutiquefull" => Ok(ManagementTier::Boutique),
            _ => Err(AuraError::UnknownTier(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Revenue and owner earnings for one nightly rate / occupancy pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsProjection {
    pub tier: ManagementTier,
    pub monthly_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub monthly_commission: Decimal,
    pub annual_commission: Decimal,
    pub monthly_earnings: Decimal,
    pub annual_earnings: Decimal,
    pub occupied_nights: u32,
    pub annual_occupied_nights: u32,
    /// Percent above the 50% market baseline.
    pub potential_increase: Decimal,
}

/// Market-average occupancy the boost is measured against.
const BASELINE_OCCUPANCY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Project earnings for `nightly_rate` at `occupancy_pct` percent.
///
/// Inputs too large to project without overflowing are rejected.
pub fn project(
    nightly_rate: Decimal,
    occupancy_pct: Decimal,
    tier: ManagementTier,
) -> Result<EarningsProjection, AuraError> {
    if nightly_rate.is_sign_negative() {
        return Err(AuraError::InvalidProjection(format!(
            "nightly rate must not be negative, got {nightly_rate}"
        )));
    }
    if occupancy_pct < Decimal::ZERO || occupancy_pct > dec!(100) {
        return Err(AuraError::InvalidProjection(format!(
            "occupancy must be within 0-100, got {occupancy_pct}"
        )));
    }

    let overflow = || AuraError::InvalidProjection(format!("nightly rate too large to project: {nightly_rate}"));
    let mul = |a: Decimal, b: Decimal| a.checked_mul(b).ok_or_else(overflow);

    let occupied = DAYS_PER_MONTH * occupancy_pct / dec!(100);
    let monthly_revenue = mul(nightly_rate, occupied)?;
    let annual_revenue = mul(monthly_revenue, MONTHS_PER_YEAR)?;
    let rate = tier.commission_rate();
    let monthly_commission = mul(monthly_revenue, rate)?;
    let annual_commission = mul(annual_revenue, rate)?;

    Ok(EarningsProjection {
        tier,
        monthly_revenue,
        annual_revenue,
        monthly_commission,
        annual_commission,
        monthly_earnings: monthly_revenue - monthly_commission,
        annual_earnings: annual_revenue - annual_commission,
        occupied_nights: whole_nights(occupied),
        annual_occupied_nights: whole_nights(occupied * MONTHS_PER_YEAR),
        potential_increase: potential_increase(occupancy_pct),
    })
}

/// Occupancy uplift over the market baseline, in percent. At or below the
/// baseline the typical managed-property boost of 50% is quoted instead.
pub fn potential_increase(occupancy_pct: Decimal) -> Decimal {
    if occupancy_pct > BASELINE_OCCUPANCY {
        (occupancy_pct - BASELINE_OCCUPANCY) / BASELINE_OCCUPANCY * dec!(100)
    } else {
        dec!(50)
    }
}

fn whole_nights(nights: Decimal) -> u32 {
    let rounded = nights.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    u32::try_from(rounded.mantissa()).unwrap_or(0)
}

/// Owner take-home for an estimate once expenses and commission are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIncome {
    pub tier: ManagementTier,
    pub annual_commission: Decimal,
    pub annual_net_income: Decimal,
    pub monthly_net_income: Decimal,
}

pub fn net_owner_income(result: &EstimationResult, tier: ManagementTier) -> OwnerIncome {
    let commission = (result.annual_gross_revenue * tier.commission_rate())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let net = result.annual_net_revenue() - commission;
    OwnerIncome {
        tier,
        annual_commission: commission,
        annual_net_income: net,
        monthly_net_income: (net / MONTHS_PER_YEAR)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimationTable;
    use crate::types::{BedroomRequest, Location, Strategy, VillaCategory};

    #[test]
    fn test_commission_rates() {
        assert_eq!(ManagementTier::Essential.commission_rate(), dec!(0.15));
        assert_eq!(ManagementTier::Premium.commission_rate(), dec!(0.18));
        assert_eq!(ManagementTier::Boutique.commission_rate(), dec!(0.21));
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("Boutique Full".parse::<ManagementTier>().unwrap(), ManagementTier::Boutique);
        assert_eq!("essential".parse::<ManagementTier>().unwrap(), ManagementTier::Essential);
        assert!("gold".parse::<ManagementTier>().is_err());
    }

    #[test]
    fn test_project_premium_tier() {
        let p = project(dec!(7900000), dec!(75), ManagementTier::Premium).unwrap();
        assert_eq!(p.monthly_revenue, dec!(177750000));
        assert_eq!(p.annual_revenue, dec!(2133000000));
        assert_eq!(p.monthly_commission, dec!(31995000));
        assert_eq!(p.monthly_earnings, dec!(145755000));
        assert_eq!(p.annual_earnings, p.annual_revenue - p.annual_commission);
        assert_eq!(p.occupied_nights, 23); // 22.5 rounds up
        assert_eq!(p.annual_occupied_nights, 270);
    }

    #[test]
    fn test_project_zero_occupancy() {
        let p = project(dec!(500), dec!(0), ManagementTier::Essential).unwrap();
        assert_eq!(p.annual_revenue, dec!(0));
        assert_eq!(p.occupied_nights, 0);
    }

    #[test]
    fn test_project_rejects_out_of_range() {
        assert!(project(dec!(500), dec!(101), ManagementTier::Premium).is_err());
        assert!(project(dec!(500), dec!(-1), ManagementTier::Premium).is_err());
        assert!(project(dec!(-5), dec!(50), ManagementTier::Premium).is_err());
    }

    #[test]
    fn test_project_rejects_overflowing_rate() {
        let huge = Decimal::MAX;
        let err = project(huge, dec!(100), ManagementTier::Premium).unwrap_err();
        assert!(matches!(err, AuraError::InvalidProjection(_)));
        // monthly revenue fits but the annual figure does not
        let big = Decimal::MAX / dec!(40);
        assert!(project(big, dec!(100), ManagementTier::Essential).is_err());
    }

    #[test]
    fn test_potential_increase() {
        assert_eq!(potential_increase(dec!(75)), dec!(50));
        assert_eq!(potential_increase(dec!(90)), dec!(80));
        assert_eq!(potential_increase(dec!(50)), dec!(50));
        assert_eq!(potential_increase(dec!(20)), dec!(50));
        let p = project(dec!(500), dec!(60), ManagementTier::Premium).unwrap();
        assert_eq!(p.potential_increase, dec!(20));
    }

    #[test]
    fn test_net_owner_income() {
        let result = EstimationTable::new()
            .estimate(Location::Canggu, VillaCategory::Premium, BedroomRequest::Count(1), Strategy::OccupancyFocused)
            .unwrap();
        let income = net_owner_income(&result, ManagementTier::Premium);
        // 28382 * 0.18 = 5108.76
        assert_eq!(income.annual_commission, dec!(5109));
        assert_eq!(income.annual_net_income, dec!(28382) - dec!(4257) - dec!(5109));
        assert_eq!(income.monthly_net_income, dec!(1585)); // 19016 / 12 = 1584.67
    }
}
