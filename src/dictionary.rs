//! Typed calculator translations.
//!
//! Translation bundles are loose JSON. [`CalculatorDictionary::resolve`]
//! walks one once and produces a fully populated structure, falling back
//! to English per key when a value is missing or not a string. Nothing
//! downstream ever sees an optional label.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

use crate::types::{Location, Strategy, VillaCategory};
use crate::wizard::calculator::Amenity;

const EN_BUNDLE: &str = include_str!("../translations/en.json");
const ES_BUNDLE: &str = include_str!("../translations/es-ES.json");

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::EsEs];

    /// Lenient tag parse. Anything unrecognised is English.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "es" | "es-es" => Locale::EsEs,
            _ => Locale::En,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryText {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultLabels {
    pub title: String,
    pub average_occupancy: String,
    pub average_daily_rate: String,
    pub annual_gross_revenue: String,
    pub annual_operational_expenses: String,
    pub annual_net_revenue: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonLabels {
    pub back: String,
    pub next: String,
    pub view_results: String,
}

/// Every label the calculator renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDictionary {
    pub brand: String,
    pub subtitle: String,
    pub title: String,
    pub title_highlight: String,
    pub step_descriptions: [String; 4],
    pub bedrooms: String,
    pub locations: Vec<String>,
    pub categories: [CategoryText; 3],
    pub amenities: Vec<String>,
    pub strategies: Vec<String>,
    pub results: ResultLabels,
    pub get_detailed_report: String,
    pub sending: String,
    pub buttons: ButtonLabels,
}

/// Reads dotted paths out of a bundle with a per-key default.
struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    fn text(&self, path: &str, fallback: &str) -> String {
        path.split('.')
            .try_fold(self.root, |node, key| node.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    fn category(&self, key: &str, name: &str, description: &str, price: &str) -> CategoryText {
        CategoryText {
            name: self.text(&format!("categories.{key}.name"), name),
            description: self.text(&format!("categories.{key}.description"), description),
            price: self.text(&format!("categories.{key}.price"), price),
        }
    }
}

impl CalculatorDictionary {
    /// Build from a bundle's `calculator` section.
    pub fn resolve(section: &Value) -> Self {
        let r = Resolver { root: section };

        let locations = Location::ALL
            .iter()
            .map(|l| r.text(&format!("locations.{}", l.dictionary_key()), l.label()))
            .collect();
        let strategies = Strategy::ALL
            .iter()
            .map(|s| r.text(&format!("strategies.{}", s.dictionary_key()), s.label()))
            .collect();
        let amenities = Amenity::ALL
            .iter()
            .map(|a| r.text(&format!("amenities.{}", a.dictionary_key()), a.label()))
            .collect();

        Self {
            brand: r.text("brand", "AURA"),
            subtitle: r.text("subtitle", "Villas Bali"),
            title: r.text("title", "Estimate Your"),
            title_highlight: r.text("titleHighlight", "Rental Income"),
            step_descriptions: [
                r.text("step1Description", "Where is your villa located?"),
                r.text("step2Description", "How many bedrooms does your villa have?"),
                r.text("step3Description", "Which category best describes your villa?"),
                r.text("step4Description", "Customize with amenities"),
            ],
            bedrooms: r.text("bedrooms", "Bedrooms"),
            locations,
            categories: [
                r.category("premium", "Premium", "High-quality villas with modern amenities", "$300-500/night"),
                r.category("luxury", "Luxury", "Exceptional properties with premium features", "$600-1000/night"),
                r.category("ultraLuxury", "Ultra-Luxury", "Elite estates with world-class amenities", "$1200+/night"),
            ],
            amenities,
            strategies,
            results: ResultLabels {
                title: r.text("results.title", "Your Estimated Earnings"),
                average_occupancy: r.text("results.averageOccupancy", "Average Occupancy"),
                average_daily_rate: r.text("results.averageDailyRate", "Average Daily Rate"),
                annual_gross_revenue: r.text("results.annualGrossRevenue", "Annual Gross Revenue"),
                annual_operational_expenses: r.text(
                    "results.annualOperationalExpenses",
                    "Annual Operational Expenses",
                ),
                annual_net_revenue: r.text("results.annualNetRevenue", "Annual Net Revenue"),
                disclaimer: r.text(
                    "results.disclaimer",
                    "These are estimates. Actual earnings depend on several factors including seasonality, property condition and service quality.",
                ),
            },
            get_detailed_report: r.text("getDetailedReport", "Get Detailed Report"),
            sending: r.text("sending", "Sending..."),
            buttons: ButtonLabels {
                back: r.text("buttons.back", "Back"),
                next: r.text("buttons.next", "Next"),
                view_results: r.text("buttons.viewResults", "View Results"),
            },
        }
    }

    /// The dictionary compiled into the binary for `locale`.
    pub fn bundled(locale: Locale) -> Self {
        let raw = match locale {
            Locale::En => EN_BUNDLE,
            Locale::EsEs => ES_BUNDLE,
        };
        let value: Value = serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(locale = %locale, error = %e, "Bundled translations unreadable, using English fallbacks");
            Value::Null
        });
        Self::resolve(value.get("calculator").unwrap_or(&Value::Null))
    }

    pub fn location(&self, location: Location) -> &str {
        let i = Location::ALL.iter().position(|l| *l == location).unwrap_or(0);
        &self.locations[i]
    }

    pub fn category(&self, category: VillaCategory) -> &CategoryText {
        let i = VillaCategory::ALL.iter().position(|c| *c == category).unwrap_or(0);
        &self.categories[i]
    }

    pub fn strategy(&self, strategy: Strategy) -> &str {
        let i = Strategy::ALL.iter().position(|s| *s == strategy).unwrap_or(0);
        &self.strategies[i]
    }

    pub fn amenity(&self, amenity: Amenity) -> &str {
        let i = Amenity::ALL.iter().position(|a| *a == amenity).unwrap_or(0);
        &self.amenities[i]
    }
}

impl Default for CalculatorDictionary {
    fn default() -> Self {
        Self::resolve(&Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("es-ES"), Locale::EsEs);
        assert_eq!(Locale::parse("es_es"), Locale::EsEs);
        assert_eq!(Locale::parse("es"), Locale::EsEs);
        assert_eq!(Locale::parse("en-US"), Locale::En);
        assert_eq!(Locale::parse(""), Locale::En);
    }

    #[test]
    fn test_empty_bundle_is_all_english() {
        let d = CalculatorDictionary::resolve(&json!({}));
        assert_eq!(d, CalculatorDictionary::default());
        assert_eq!(d.title_highlight, "Rental Income");
        assert_eq!(d.category(VillaCategory::UltraLuxury).name, "Ultra-Luxury");
        assert_eq!(d.strategy(Strategy::OccupancyFocused), "Occupancy Focused");
        assert_eq!(d.amenity(Amenity::Gym), "Gym & Spa");
    }

    #[test]
    fn test_fallback_is_per_key() {
        let d = CalculatorDictionary::resolve(&json!({
            "title": "Estima Tus",
            "titleHighlight": 42,
            "categories": { "luxury": { "name": "Lujo" } },
            "buttons": { "next": "" }
        }));
        assert_eq!(d.title, "Estima Tus");
        assert_eq!(d.title_highlight, "Rental Income");
        assert_eq!(d.category(VillaCategory::Luxury).name, "Lujo");
        assert_eq!(d.category(VillaCategory::Luxury).price, "$600-1000/night");
        assert_eq!(d.buttons.next, "Next");
    }

    #[test]
    fn test_bundled_spanish() {
        let d = CalculatorDictionary::bundled(Locale::EsEs);
        assert_eq!(d.title, "Estima Tus");
        assert_eq!(d.location(Location::Uluwatu), "Uluwatu");
        assert_eq!(d.strategy(Strategy::Balanced), "Equilibrado");
        assert_eq!(d.category(VillaCategory::UltraLuxury).name, "Ultra-Lujo");
        assert_eq!(d.amenity(Amenity::PrivatePool), "Piscina Privada");
        // not translated yet
        assert_eq!(d.results.average_daily_rate, "Average Daily Rate");
    }

    #[test]
    fn test_bundled_english_matches_fallbacks() {
        assert_eq!(CalculatorDictionary::bundled(Locale::En), CalculatorDictionary::default());
    }

    #[test]
    fn test_serializes_camel_case() {
        let v = serde_json::to_value(CalculatorDictionary::default()).unwrap();
        assert_eq!(v["titleHighlight"], "Rental Income");
        assert_eq!(v["buttons"]["viewResults"], "View Results");
        assert_eq!(v["stepDescriptions"].as_array().unwrap().len(), 4);
    }
}
