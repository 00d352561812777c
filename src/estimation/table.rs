//! Precomputed market rows backing the earnings estimator.
//!
//! One row per (location, category, bedrooms, strategy). Daily rates are
//! stored in cents so the table stays a plain `const`; amounts become
//! `Decimal` at read time.

use rust_decimal::Decimal;

use crate::types::{Location, PropertyType, Strategy, VillaCategory};

/// Highest tabulated bedroom count. Larger requests clamp to this.
pub const MAX_BEDROOMS: u32 = 3;

/// One precomputed market data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimationRow {
    pub location: Location,
    pub property_type: PropertyType,
    pub villa_category: VillaCategory,
    pub bedrooms: u32,
    pub strategy: Strategy,
    /// Percentage, 0–100.
    pub average_occupancy: u8,
    daily_rate_cents: i64,
    /// USD per year.
    pub annual_gross_revenue: i64,
    /// USD per year. Tabulated but never surfaced: estimates recompute it.
    pub annual_operational_expenses: i64,
}

impl EstimationRow {
    /// Average daily rate in USD.
    pub fn average_daily_rate(&self) -> Decimal {
        Decimal::new(self.daily_rate_cents, 2)
    }

    pub fn key(&self) -> (Location, VillaCategory, u32, Strategy) {
        (self.location, self.villa_category, self.bedrooms, self.strategy)
    }
}

macro_rules! row {
    ($loc:ident, $cat:ident, $beds:literal, $strategy:ident, $occ:literal, $adr_cents:literal, $gross:literal, $opex:literal) => {
        EstimationRow {
            location: Location::$loc,
            property_type: PropertyType::Villa,
            villa_category: VillaCategory::$cat,
            bedrooms: $beds,
            strategy: Strategy::$strategy,
            average_occupancy: $occ,
            daily_rate_cents: $adr_cents,
            annual_gross_revenue: $gross,
            annual_operational_expenses: $opex,
        }
    };
}

/// Market rows: 3 locations × 3 categories × 3 bedroom counts × 3 strategies.
pub static ROWS: &[EstimationRow] = &[
    // Occupancy Focused
    row!(Canggu, Premium, 1, OccupancyFocused, 90, 8640, 28382, 5109),
    row!(Canggu, Premium, 2, OccupancyFocused, 93, 11405, 38714, 6968),
    row!(Canggu, Premium, 3, OccupancyFocused, 87, 13800, 43821, 7888),
    row!(Canggu, Luxury, 1, OccupancyFocused, 91, 11328, 37626, 6773),
    row!(Canggu, Luxury, 2, OccupancyFocused, 94, 14953, 51304, 9235),
    row!(Canggu, Luxury, 3, OccupancyFocused, 88, 18093, 58115, 10461),
    row!(Canggu, UltraLuxury, 1, OccupancyFocused, 90, 14688, 48250, 8685),
    row!(Canggu, UltraLuxury, 2, OccupancyFocused, 93, 19388, 65813, 11846),
    row!(Canggu, UltraLuxury, 3, OccupancyFocused, 87, 23460, 74496, 13409),
    row!(Seminyak, Premium, 1, OccupancyFocused, 87, 9408, 29875, 5378),
    row!(Seminyak, Premium, 2, OccupancyFocused, 90, 12419, 40795, 7343),
    row!(Seminyak, Premium, 3, OccupancyFocused, 84, 15026, 46071, 8293),
    row!(Seminyak, Luxury, 1, OccupancyFocused, 89, 12288, 39918, 7185),
    row!(Seminyak, Luxury, 2, OccupancyFocused, 92, 16220, 54467, 9804),
    row!(Seminyak, Luxury, 3, OccupancyFocused, 86, 19626, 61607, 11089),
    row!(Seminyak, UltraLuxury, 1, OccupancyFocused, 87, 15936, 50605, 9109),
    row!(Seminyak, UltraLuxury, 2, OccupancyFocused, 90, 21036, 69102, 12438),
    row!(Seminyak, UltraLuxury, 3, OccupancyFocused, 84, 25453, 78039, 14047),
    row!(Uluwatu, Premium, 1, OccupancyFocused, 83, 9408, 28502, 5130),
    row!(Uluwatu, Premium, 2, OccupancyFocused, 86, 12419, 38982, 7017),
    row!(Uluwatu, Premium, 3, OccupancyFocused, 80, 15026, 43877, 7898),
    row!(Uluwatu, Luxury, 1, OccupancyFocused, 86, 12180, 38233, 6882),
    row!(Uluwatu, Luxury, 2, OccupancyFocused, 89, 16078, 52228, 9401),
    row!(Uluwatu, Luxury, 3, OccupancyFocused, 83, 19454, 58936, 10608),
    row!(Uluwatu, UltraLuxury, 1, OccupancyFocused, 83, 15936, 48278, 8690),
    row!(Uluwatu, UltraLuxury, 2, OccupancyFocused, 86, 21036, 66030, 11885),
    row!(Uluwatu, UltraLuxury, 3, OccupancyFocused, 80, 25453, 74323, 13378),
    // Balanced
    row!(Canggu, Premium, 1, Balanced, 87, 11520, 36582, 6585),
    row!(Canggu, Premium, 2, Balanced, 90, 15206, 49953, 8992),
    row!(Canggu, Premium, 3, Balanced, 84, 18400, 56414, 10154),
    row!(Canggu, Luxury, 1, Balanced, 86, 15104, 47411, 8534),
    row!(Canggu, Luxury, 2, Balanced, 89, 19937, 64766, 11658),
    row!(Canggu, Luxury, 3, Balanced, 83, 24124, 73084, 13155),
    row!(Canggu, UltraLuxury, 1, Balanced, 85, 19584, 60759, 10937),
    row!(Canggu, UltraLuxury, 2, Balanced, 88, 25851, 83033, 14946),
    row!(Canggu, UltraLuxury, 3, Balanced, 82, 31280, 93620, 16852),
    row!(Seminyak, Premium, 1, Balanced, 83, 12544, 38002, 6840),
    row!(Seminyak, Premium, 2, Balanced, 86, 16558, 51976, 9356),
    row!(Seminyak, Premium, 3, Balanced, 80, 20035, 58503, 10531),
    row!(Seminyak, Luxury, 1, Balanced, 82, 16384, 49037, 8827),
    row!(Seminyak, Luxury, 2, Balanced, 85, 21627, 67097, 12078),
    row!(Seminyak, Luxury, 3, Balanced, 79, 26169, 75457, 13582),
    row!(Seminyak, UltraLuxury, 1, Balanced, 79, 21248, 61269, 11028),
    row!(Seminyak, UltraLuxury, 2, Balanced, 82, 28047, 83946, 15110),
    row!(Seminyak, UltraLuxury, 3, Balanced, 76, 33937, 94142, 16946),
    row!(Uluwatu, Premium, 1, Balanced, 78, 12544, 35713, 6428),
    row!(Uluwatu, Premium, 2, Balanced, 81, 16558, 48954, 8812),
    row!(Uluwatu, Premium, 3, Balanced, 75, 20035, 54847, 9872),
    row!(Uluwatu, Luxury, 1, Balanced, 79, 16240, 46828, 8429),
    row!(Uluwatu, Luxury, 2, Balanced, 82, 21437, 64160, 11549),
    row!(Uluwatu, Luxury, 3, Balanced, 76, 25939, 71953, 12952),
    row!(Uluwatu, UltraLuxury, 1, Balanced, 76, 21248, 58942, 10610),
    row!(Uluwatu, UltraLuxury, 2, Balanced, 79, 28047, 80875, 14557),
    row!(Uluwatu, UltraLuxury, 3, Balanced, 73, 33937, 90426, 16277),
    // Revenue Focused
    row!(Canggu, Premium, 1, RevenueFocused, 84, 14400, 44150, 7947),
    row!(Canggu, Premium, 2, RevenueFocused, 87, 19008, 60360, 10865),
    row!(Canggu, Premium, 3, RevenueFocused, 81, 23000, 67999, 12240),
    row!(Canggu, Luxury, 1, RevenueFocused, 83, 18880, 57197, 10295),
    row!(Canggu, Luxury, 2, RevenueFocused, 86, 24922, 78229, 14081),
    row!(Canggu, Luxury, 3, RevenueFocused, 80, 30155, 88053, 15850),
    row!(Canggu, UltraLuxury, 1, RevenueFocused, 82, 24480, 73269, 13188),
    row!(Canggu, UltraLuxury, 2, RevenueFocused, 85, 32314, 100253, 18046),
    row!(Canggu, UltraLuxury, 3, RevenueFocused, 79, 39099, 112743, 20294),
    row!(Seminyak, Premium, 1, RevenueFocused, 80, 15680, 45786, 8241),
    row!(Seminyak, Premium, 2, RevenueFocused, 83, 20698, 62703, 11287),
    row!(Seminyak, Premium, 3, RevenueFocused, 77, 25044, 70386, 12670),
    row!(Seminyak, Luxury, 1, RevenueFocused, 79, 20480, 59054, 10630),
    row!(Seminyak, Luxury, 2, RevenueFocused, 82, 27034, 80912, 14564),
    row!(Seminyak, Luxury, 3, RevenueFocused, 76, 32711, 90739, 16333),
    row!(Seminyak, UltraLuxury, 1, RevenueFocused, 76, 26560, 73677, 13262),
    row!(Seminyak, UltraLuxury, 2, RevenueFocused, 79, 35059, 101093, 18197),
    row!(Seminyak, UltraLuxury, 3, RevenueFocused, 73, 42422, 113032, 20346),
    row!(Uluwatu, Premium, 1, RevenueFocused, 75, 15680, 42924, 7726),
    row!(Uluwatu, Premium, 2, RevenueFocused, 78, 20698, 58926, 10607),
    row!(Uluwatu, Premium, 3, RevenueFocused, 72, 25044, 65816, 11847),
    row!(Uluwatu, Luxury, 1, RevenueFocused, 76, 20300, 56312, 10136),
    row!(Uluwatu, Luxury, 2, RevenueFocused, 79, 26796, 77266, 13908),
    row!(Uluwatu, Luxury, 3, RevenueFocused, 73, 32423, 86392, 15550),
    row!(Uluwatu, UltraLuxury, 1, RevenueFocused, 73, 26560, 70769, 12738),
    row!(Uluwatu, UltraLuxury, 2, RevenueFocused, 76, 35059, 97254, 17506),
    row!(Uluwatu, UltraLuxury, 3, RevenueFocused, 70, 42422, 108387, 19510),
];
