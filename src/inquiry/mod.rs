//! Owner and guest inquiries sent to the email endpoint.
//!
//! Every form posts the same envelope: `{"type": <form>, "data": {...}}`.
//! The endpoint is opaque; a success status means the submission was
//! accepted and anything else is a failure shown to the user. There is
//! exactly one attempt per submission.

pub mod client;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::{AuraError, Location, Strategy, VillaCategory};

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// A form submission, tagged by the form it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Inquiry {
    EarningsCalculator(EarningsInquiry),
    QualificationForm(QualificationInquiry),
    ContactForm(ContactInquiry),
    TierInterest(TierInterestInquiry),
}

impl Inquiry {
    /// Wire discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Inquiry::EarningsCalculator(_) => "earnings-calculator",
            Inquiry::QualificationForm(_) => "qualification-form",
            Inquiry::ContactForm(_) => "contact-form",
            Inquiry::TierInterest(_) => "tier-interest",
        }
    }

    /// Address the team replies to.
    pub fn reply_to(&self) -> &str {
        match self {
            Inquiry::EarningsCalculator(i) => &i.email,
            Inquiry::QualificationForm(i) => &i.email,
            Inquiry::ContactForm(i) => &i.email,
            Inquiry::TierInterest(i) => &i.email,
        }
    }
}

/// "Get my detailed report" from the earnings calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: Location,
    pub villa_category: VillaCategory,
    pub bedrooms: String,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// The three-step "is your villa right for us" assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationInquiry {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: String,
    pub villa_name: String,
    pub location: String,
    pub bedrooms: String,
    pub current_occupancy: String,
    pub management_status: String,
    pub ready_date: String,
    pub investment_ready: String,
    pub goals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Service line a pricing package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Operations,
    Marketing,
}

/// Interest in a specific management tier or pricing package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInterestInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub package_name: String,
    pub package_type: PackageType,
}

// ---------------------------------------------------------------------------
// Receipt
// ---------------------------------------------------------------------------

/// Proof that the endpoint accepted a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Local id, logged on both sides of the request.
    pub submission_id: Uuid,
    /// Id returned by the endpoint, when it returns one.
    pub remote_id: Option<String>,
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(remote_id: Option<String>, accepted_at: DateTime<Utc>) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            remote_id,
            accepted_at,
        }
    }

    /// Reference shown to the owner after a successful submission.
    pub fn reference(&self) -> String {
        application_reference(self.accepted_at)
    }
}

impl fmt::Display for SubmissionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] remote={}",
            self.reference(),
            self.submission_id,
            self.remote_id.as_deref().unwrap_or("-"),
        )
    }
}

/// `AURA-` followed by the last six digits of the epoch-millisecond time.
pub fn application_reference(at: DateTime<Utc>) -> String {
    format!("AURA-{:06}", at.timestamp_millis().rem_euclid(1_000_000))
}

// ---------------------------------------------------------------------------
// Sender seam
// ---------------------------------------------------------------------------

/// Abstraction over whatever delivers inquiries.
///
/// Implementations make a single attempt and report the outcome; callers
/// surface failures to the user instead of retrying.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquirySender: Send + Sync {
    async fn send(&self, inquiry: &Inquiry) -> Result<SubmissionReceipt, AuraError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
