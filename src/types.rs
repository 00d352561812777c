//! Shared types for the AURA estimator.
//!
//! The closed enumerations consumed by the estimation table, the wizards
//! and the HTTP API, plus the crate's domain error type. Every enum parses
//! leniently (case, spaces, hyphens) and displays in its canonical
//! tabulated form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase and drop everything but ASCII alphanumerics, so that
/// "Ultra-Luxury", "ultra luxury" and "ultraLuxury" all compare equal.
pub(crate) fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Geographic area covered by the estimation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Canggu,
    Seminyak,
    Uluwatu,
}

impl Location {
    pub const ALL: &'static [Location] = &[Location::Canggu, Location::Seminyak, Location::Uluwatu];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Canggu => "Canggu",
            Location::Seminyak => "Seminyak",
            Location::Uluwatu => "Uluwatu",
        }
    }

    /// Key used by the translation bundle (`calculator.locations.<key>`).
    pub fn dictionary_key(&self) -> &'static str {
        match self {
            Location::Canggu => "canggu",
            Location::Seminyak => "seminyak",
            Location::Uluwatu => "uluwatu",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "canggu" => Ok(Location::Canggu),
            "seminyak" => Ok(Location::Seminyak),
            "uluwatu" => Ok(Location::Uluwatu),
            _ => Err(AuraError::UnknownLocation(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Property type & villa category
// ---------------------------------------------------------------------------

/// Property type of a tabulated row. Only villas are tabulated today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Villa,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Villa")
    }
}

/// Quality/price positioning tier, ordered from entry to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VillaCategory {
    Premium,
    Luxury,
    #[serde(rename = "Ultra-Luxury")]
    UltraLuxury,
}

impl VillaCategory {
    pub const ALL: &'static [VillaCategory] = &[
        VillaCategory::Premium,
        VillaCategory::Luxury,
        VillaCategory::UltraLuxury,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VillaCategory::Premium => "Premium",
            VillaCategory::Luxury => "Luxury",
            VillaCategory::UltraLuxury => "Ultra-Luxury",
        }
    }

    pub fn dictionary_key(&self) -> &'static str {
        match self {
            VillaCategory::Premium => "premium",
            VillaCategory::Luxury => "luxury",
            VillaCategory::UltraLuxury => "ultraLuxury",
        }
    }
}

impl fmt::Display for VillaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case- and separator-insensitive: "ultra-luxury", "Ultra Luxury" and
/// "ultraLuxury" all map to `UltraLuxury`.
impl FromStr for VillaCategory {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "premium" => Ok(VillaCategory::Premium),
            "luxury" => Ok(VillaCategory::Luxury),
            "ultraluxury" => Ok(VillaCategory::UltraLuxury),
            _ => Err(AuraError::UnknownCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Pricing posture: trades nightly rate against booking frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "Occupancy Focused")]
    OccupancyFocused,
    #[default]
    Balanced,
    #[serde(rename = "Revenue Focused")]
    RevenueFocused,
}

impl Strategy {
    pub const ALL: &'static [Strategy] = &[
        Strategy::OccupancyFocused,
        Strategy::Balanced,
        Strategy::RevenueFocused,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::OccupancyFocused => "Occupancy Focused",
            Strategy::Balanced => "Balanced",
            Strategy::RevenueFocused => "Revenue Focused",
        }
    }

    pub fn dictionary_key(&self) -> &'static str {
        match self {
            Strategy::OccupancyFocused => "occupancyFocused",
            Strategy::Balanced => "balanced",
            Strategy::RevenueFocused => "revenueFocused",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "occupancyfocused" | "occupancy" => Ok(Strategy::OccupancyFocused),
            "balanced" => Ok(Strategy::Balanced),
            "revenuefocused" | "revenue" => Ok(Strategy::RevenueFocused),
            _ => Err(AuraError::UnknownStrategy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Bedrooms
// ---------------------------------------------------------------------------

/// A requested bedroom count as it arrives from a form.
///
/// `MaxTier` covers the "3+" / "6+" style options as well as input that
/// does not parse as a number; both resolve to the highest tabulated count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedroomRequest {
    Count(u32),
    MaxTier,
}

impl BedroomRequest {
    /// Parse form input. Never fails: anything that is not a plain number
    /// is the maximum tier.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.ends_with('+') {
            return BedroomRequest::MaxTier;
        }
        match trimmed.parse::<u32>() {
            Ok(n) => BedroomRequest::Count(n),
            Err(_) => BedroomRequest::MaxTier,
        }
    }

    /// Clamp to the tabulated range.
    pub fn resolve(&self, max: u32) -> u32 {
        match *self {
            BedroomRequest::Count(n) => n.min(max),
            BedroomRequest::MaxTier => max,
        }
    }
}

impl From<u32> for BedroomRequest {
    fn from(n: u32) -> Self {
        BedroomRequest::Count(n)
    }
}

impl fmt::Display for BedroomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomRequest::Count(n) => write!(f, "{n}"),
            BedroomRequest::MaxTier => write!(f, "3+"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for AURA.
#[derive(Debug, thiserror::Error)]
pub enum AuraError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown villa category: {0}")]
    UnknownCategory(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown management tier: {0}")]
    UnknownTier(String),

    #[error("Invalid projection input: {0}")]
    InvalidProjection(String),

    #[error("Estimation table has no row for {0}")]
    TableGap(String),

    #[error("Estimation table has duplicate rows for {0}")]
    DuplicateRow(String),

    #[error("Submission rejected (HTTP {status}): {body}")]
    SubmissionRejected { status: u16, body: String },

    #[error("Submission failed: {0}")]
    SubmissionTransport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
