//! Earnings calculator wizard.
//!
//! Location → bedrooms → category → amenities → results, then an optional
//! "detailed report" request that collects contact details and submits an
//! `earnings-calculator` inquiry.

use std::collections::BTreeSet;

use super::{ContactDraft, ContactField, Submittable};
use crate::estimation::{EstimationResult, EstimationTable};
use crate::inquiry::{EarningsInquiry, Inquiry, SubmissionReceipt};
use crate::types::{BedroomRequest, Location, Strategy, VillaCategory};

// ---------------------------------------------------------------------------
// Amenities
// ---------------------------------------------------------------------------

/// Optional villa features picked in the last selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Amenity {
    PrivatePool,
    OceanView,
    BeachAccess,
    Beachfront,
    ChefService,
    Gym,
    Cinema,
}

impl Amenity {
    pub const ALL: &'static [Amenity] = &[
        Amenity::PrivatePool,
        Amenity::OceanView,
        Amenity::BeachAccess,
        Amenity::Beachfront,
        Amenity::ChefService,
        Amenity::Gym,
        Amenity::Cinema,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::PrivatePool => "Private Pool",
            Amenity::OceanView => "Ocean View",
            Amenity::BeachAccess => "Beach Access",
            Amenity::Beachfront => "Beachfront",
            Amenity::ChefService => "Chef Service",
            Amenity::Gym => "Gym & Spa",
            Amenity::Cinema => "Home Cinema",
        }
    }

    pub fn dictionary_key(&self) -> &'static str {
        match self {
            Amenity::PrivatePool => "privatePool",
            Amenity::OceanView => "oceanView",
            Amenity::BeachAccess => "beachAccess",
            Amenity::Beachfront => "beachfront",
            Amenity::ChefService => "chefService",
            Amenity::Gym => "gym",
            Amenity::Cinema => "cinema",
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The three choices that select a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySelection {
    pub location: Location,
    pub bedrooms: BedroomRequest,
    pub category: VillaCategory,
}

/// Everything behind a displayed estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub selection: PropertySelection,
    pub amenities: BTreeSet<Amenity>,
    pub strategy: Strategy,
}

impl Quote {
    pub fn estimate(&self, table: &EstimationTable) -> Option<EstimationResult> {
        let s = &self.selection;
        table.estimate(s.location, s.category, s.bedrooms, self.strategy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CalculatorWizard {
    #[default]
    Location,
    Bedrooms {
        location: Location,
    },
    Category {
        location: Location,
        bedrooms: BedroomRequest,
    },
    Amenities {
        selection: PropertySelection,
        amenities: BTreeSet<Amenity>,
    },
    Results {
        quote: Quote,
    },
    Contact {
        quote: Quote,
        contact: ContactDraft,
        error: Option<String>,
    },
    Submitting {
        quote: Quote,
        contact: ContactDraft,
    },
    Submitted {
        quote: Quote,
        reference: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorEvent {
    SelectLocation(Location),
    SelectBedrooms(BedroomRequest),
    SelectCategory(VillaCategory),
    ToggleAmenity(Amenity),
    ViewResults,
    ChangeStrategy(Strategy),
    RequestReport,
    EditContact(ContactField, String),
    Submit,
    SubmissionSucceeded { reference: String },
    SubmissionFailed(String),
    Back,
    Reset,
}

impl CalculatorWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the wizard. Inapplicable events return the state unchanged.
    pub fn apply(self, event: CalculatorEvent) -> Self {
        use CalculatorEvent as E;

        match (self, event) {
            (_, E::Reset) => Self::Location,

            (Self::Location, E::SelectLocation(location)) => Self::Bedrooms { location },

            (Self::Bedrooms { location }, E::SelectBedrooms(bedrooms)) => {
                Self::Category { location, bedrooms }
            }
            (Self::Bedrooms { .. }, E::Back) => Self::Location,

            (Self::Category { location, bedrooms }, E::SelectCategory(category)) => Self::Amenities {
                selection: PropertySelection { location, bedrooms, category },
                amenities: BTreeSet::new(),
            },
            (Self::Category { location, .. }, E::Back) => Self::Bedrooms { location },

            (Self::Amenities { selection, mut amenities }, E::ToggleAmenity(amenity)) => {
                if !amenities.remove(&amenity) {
                    amenities.insert(amenity);
                }
                Self::Amenities { selection, amenities }
            }
            (Self::Amenities { selection, amenities }, E::ViewResults) => Self::Results {
                quote: Quote {
                    selection,
                    amenities,
                    strategy: Strategy::default(),
                },
            },
            (Self::Amenities { selection, .. }, E::Back) => Self::Category {
                location: selection.location,
                bedrooms: selection.bedrooms,
            },

            (Self::Results { mut quote }, E::ChangeStrategy(strategy)) => {
                quote.strategy = strategy;
                Self::Results { quote }
            }
            (Self::Results { quote }, E::RequestReport) => Self::Contact {
                quote,
                contact: ContactDraft::default(),
                error: None,
            },
            (Self::Results { quote }, E::Back) => Self::Amenities {
                selection: quote.selection,
                amenities: quote.amenities,
            },

            (Self::Contact { quote, mut contact, .. }, E::EditContact(field, value)) => {
                contact.set(field, value);
                Self::Contact { quote, contact, error: None }
            }
            (Self::Contact { mut quote, contact, error }, E::ChangeStrategy(strategy)) => {
                quote.strategy = strategy;
                Self::Contact { quote, contact, error }
            }
            (Self::Contact { quote, contact, .. }, E::Submit) => match contact.validate() {
                Ok(()) => Self::Submitting { quote, contact },
                Err(message) => Self::Contact {
                    quote,
                    contact,
                    error: Some(message),
                },
            },
            (Self::Contact { quote, .. }, E::Back) => Self::Results { quote },

            (Self::Submitting { quote, .. }, E::SubmissionSucceeded { reference }) => {
                Self::Submitted { quote, reference }
            }
            (Self::Submitting { quote, contact }, E::SubmissionFailed(reason)) => Self::Contact {
                quote,
                contact,
                error: Some(reason),
            },

            (state, _) => state,
        }
    }

    /// 1-based position in the selection flow; results and beyond are 5.
    pub fn step_number(&self) -> u8 {
        match self {
            Self::Location => 1,
            Self::Bedrooms { .. } => 2,
            Self::Category { .. } => 3,
            Self::Amenities { .. } => 4,
            _ => 5,
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Results { quote }
            | Self::Contact { quote, .. }
            | Self::Submitting { quote, .. }
            | Self::Submitted { quote, .. } => Some(quote),
            _ => None,
        }
    }

    /// The estimate for the current quote, once results are showing.
    pub fn estimate(&self, table: &EstimationTable) -> Option<EstimationResult> {
        self.quote().and_then(|q| q.estimate(table))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Contact { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

impl Submittable for CalculatorWizard {
    fn pending_inquiry(&self) -> Option<Inquiry> {
        let Self::Submitting { quote, contact } = self else {
            return None;
        };
        Some(Inquiry::EarningsCalculator(EarningsInquiry {
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone(),
            location: quote.selection.location,
            villa_category: quote.selection.category,
            bedrooms: quote.selection.bedrooms.to_string(),
            strategy: quote.strategy,
            amenities: quote.amenities.iter().map(|a| a.label().to_string()).collect(),
        }))
    }

    fn on_submitted(self, receipt: &SubmissionReceipt) -> Self {
        self.apply(CalculatorEvent::SubmissionSucceeded {
            reference: receipt.reference(),
        })
    }

    fn on_failed(self, reason: String) -> Self {
        self.apply(CalculatorEvent::SubmissionFailed(reason))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
