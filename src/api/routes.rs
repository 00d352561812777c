//! API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<ApiState>`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::dictionary::{CalculatorDictionary, Locale};
use crate::estimation::currency::{DisplayCurrency, ExchangeRates, FormattedEstimate};
use crate::estimation::projection::{net_owner_income, project, EarningsProjection, ManagementTier, OwnerIncome};
use crate::estimation::table::MAX_BEDROOMS;
use crate::estimation::{EstimationResult, EstimationTable};
use crate::inquiry::{Inquiry, InquirySender};
use crate::types::{AuraError, Location, Strategy, VillaCategory};
use crate::wizard::calculator::Amenity;
use crate::wizard::SUBMISSION_FAILED_MESSAGE;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct ApiState {
    pub table: EstimationTable,
    pub rates: ExchangeRates,
    pub default_currency: DisplayCurrency,
    pub dictionaries: HashMap<Locale, CalculatorDictionary>,
    pub sender: Arc<dyn InquirySender>,
}

impl ApiState {
    pub fn new(
        table: EstimationTable,
        rates: ExchangeRates,
        default_currency: DisplayCurrency,
        sender: Arc<dyn InquirySender>,
    ) -> Self {
        let dictionaries = Locale::ALL
            .iter()
            .map(|&l| (l, CalculatorDictionary::bundled(l)))
            .collect();
        Self {
            table,
            rates,
            default_currency,
            dictionaries,
            sender,
        }
    }

    fn dictionary(&self, locale: Locale) -> CalculatorDictionary {
        self.dictionaries.get(&locale).cloned().unwrap_or_default()
    }
}

pub type AppState = Arc<ApiState>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error body: `{"error": "..."}` with the given status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChoice {
    pub value: VillaCategory,
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierChoice {
    pub value: ManagementTier,
    pub label: &'static str,
    pub commission_rate: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub locale: Locale,
    pub locations: Vec<Choice<Location>>,
    pub bedrooms: Vec<String>,
    pub categories: Vec<CategoryChoice>,
    pub amenities: Vec<Choice<&'static str>>,
    pub strategies: Vec<Choice<Strategy>>,
    pub tiers: Vec<TierChoice>,
    pub currencies: Vec<DisplayCurrency>,
    pub default_currency: DisplayCurrency,
    pub labels: CalculatorDictionary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateQuery {
    pub location: String,
    pub villa_category: String,
    pub bedrooms: String,
    pub strategy: Option<String>,
    pub currency: Option<String>,
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub estimate: EstimationResult,
    pub annual_net_revenue: Decimal,
    pub formatted: FormattedEstimate,
    pub owner_income: OwnerIncome,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionQuery {
    pub nightly_rate: String,
    pub occupancy: String,
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub id: Option<String>,
    pub reference: String,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

fn parse_tier(tier: Option<&str>) -> Result<ManagementTier, ApiError> {
    match tier {
        Some(t) => t.parse().map_err(|e: AuraError| ApiError::bad_request(e.to_string())),
        None => Ok(ManagementTier::default()),
    }
}

/// GET /api/options
pub async fn get_options(State(state): State<AppState>, Query(q): Query<OptionsQuery>) -> Json<OptionsResponse> {
    let locale = q.locale.as_deref().map(Locale::parse).unwrap_or_default();
    let labels = state.dictionary(locale);

    let mut bedrooms: Vec<String> = (1..MAX_BEDROOMS).map(|n| n.to_string()).collect();
    bedrooms.push(format!("{MAX_BEDROOMS}+"));

    Json(OptionsResponse {
        locale,
        locations: Location::ALL
            .iter()
            .map(|&l| Choice {
                value: l,
                label: labels.location(l).to_string(),
            })
            .collect(),
        bedrooms,
        categories: VillaCategory::ALL
            .iter()
            .map(|&c| {
                let text = labels.category(c);
                CategoryChoice {
                    value: c,
                    name: text.name.clone(),
                    description: text.description.clone(),
                    price: text.price.clone(),
                }
            })
            .collect(),
        amenities: Amenity::ALL
            .iter()
            .map(|&a| Choice {
                value: a.dictionary_key(),
                label: labels.amenity(a).to_string(),
            })
            .collect(),
        strategies: Strategy::ALL
            .iter()
            .map(|&s| Choice {
                value: s,
                label: labels.strategy(s).to_string(),
            })
            .collect(),
        tiers: ManagementTier::ALL
            .iter()
            .map(|&t| TierChoice {
                value: t,
                label: t.label(),
                commission_rate: t.commission_rate(),
            })
            .collect(),
        currencies: vec![DisplayCurrency::Usd, DisplayCurrency::Idr],
        default_currency: state.default_currency,
        labels,
    })
}

/// GET /api/estimate
pub async fn get_estimate(
    State(state): State<AppState>,
    Query(q): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let currency = match q.currency.as_deref() {
        Some(c) => c.parse().map_err(|e: AuraError| ApiError::bad_request(e.to_string()))?,
        None => state.default_currency,
    };
    let tier = parse_tier(q.tier.as_deref())?;

    let estimate = state
        .table
        .estimate_str(&q.location, &q.villa_category, &q.bedrooms, q.strategy.as_deref())
        .ok_or_else(|| {
            debug!(location = %q.location, category = %q.villa_category, bedrooms = %q.bedrooms, "No estimate");
            ApiError::not_found(format!(
                "No estimate available for {} / {} / {} bedrooms",
                q.location, q.villa_category, q.bedrooms
            ))
        })?;

    Ok(Json(EstimateResponse {
        estimate,
        annual_net_revenue: estimate.annual_net_revenue(),
        formatted: FormattedEstimate::new(&estimate, currency, &state.rates),
        owner_income: net_owner_income(&estimate, tier),
    }))
}

/// GET /api/projection
pub async fn get_projection(Query(q): Query<ProjectionQuery>) -> Result<Json<EarningsProjection>, ApiError> {
    let nightly_rate = Decimal::from_str(q.nightly_rate.trim())
        .map_err(|_| ApiError::bad_request(format!("Invalid nightlyRate: {}", q.nightly_rate)))?;
    let occupancy = Decimal::from_str(q.occupancy.trim())
        .map_err(|_| ApiError::bad_request(format!("Invalid occupancy: {}", q.occupancy)))?;
    let tier = parse_tier(q.tier.as_deref())?;

    project(nightly_rate, occupancy, tier)
        .map(Json)
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// POST /api/inquiries
pub async fn post_inquiry(State(state): State<AppState>, Json(inquiry): Json<Inquiry>) -> Response {
    match state.sender.send(&inquiry).await {
        Ok(receipt) => Json(SubmissionResponse {
            success: true,
            reference: receipt.reference(),
            id: receipt.remote_id,
        })
        .into_response(),
        Err(e) => {
            warn!(kind = inquiry.kind(), error = %e, "Inquiry relay failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": SUBMISSION_FAILED_MESSAGE }))).into_response()
        }
    }
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
