//! Three-step owner qualification form.
//!
//! Property details, then management goals, then contact info. `Next`
//! only advances once the current step's fields check out; `Submit`
//! re-checks every step before handing the form to the sender.

use std::collections::BTreeMap;

use super::{is_plausible_email, Submittable};
use crate::inquiry::{Inquiry, QualificationInquiry, SubmissionReceipt};

pub const LOCATION_OPTIONS: &[&str] = &[
    "Uluwatu/Pecatu",
    "Canggu",
    "Seminyak",
    "Ubud",
    "Sanur",
    "Nusa Dua",
    "Other",
];
pub const BEDROOM_OPTIONS: &[&str] = &["1-2", "3-4", "5-6", "7+"];
pub const OCCUPANCY_OPTIONS: &[&str] = &["new", "0-25", "26-50", "51-75", "76-100"];
pub const MANAGEMENT_STATUS_OPTIONS: &[&str] = &["self", "agency", "new", "switching"];
pub const READY_DATE_OPTIONS: &[&str] = &["immediate", "1-month", "2-3-months", "3-6-months", "6-months"];
pub const INVESTMENT_OPTIONS: &[&str] = &["yes", "depends", "minor", "no"];
pub const CONTACT_OPTIONS: &[&str] = &["email", "whatsapp", "call"];

// ---------------------------------------------------------------------------
// Steps and fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum QualificationStep {
    #[default]
    PropertyDetails,
    ManagementGoals,
    ContactInfo,
}

impl QualificationStep {
    pub const ALL: &'static [QualificationStep] = &[
        QualificationStep::PropertyDetails,
        QualificationStep::ManagementGoals,
        QualificationStep::ContactInfo,
    ];

    /// 1-based, as shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            QualificationStep::PropertyDetails => 1,
            QualificationStep::ManagementGoals => 2,
            QualificationStep::ContactInfo => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            QualificationStep::PropertyDetails => QualificationStep::ManagementGoals,
            _ => QualificationStep::ContactInfo,
        }
    }

    fn previous(self) -> Self {
        match self {
            QualificationStep::ContactInfo => QualificationStep::ManagementGoals,
            _ => QualificationStep::PropertyDetails,
        }
    }

    pub fn fields(&self) -> &'static [QualificationField] {
        use QualificationField as F;
        match self {
            QualificationStep::PropertyDetails => &[F::VillaName, F::Location, F::Bedrooms, F::CurrentOccupancy],
            QualificationStep::ManagementGoals => &[F::ManagementStatus, F::ReadyDate, F::InvestmentReady, F::Goals],
            QualificationStep::ContactInfo => &[F::OwnerName, F::Email, F::Phone, F::PreferredContact],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualificationField {
    VillaName,
    Location,
    Bedrooms,
    CurrentOccupancy,
    ManagementStatus,
    ReadyDate,
    InvestmentReady,
    Goals,
    OwnerName,
    Email,
    Phone,
    PreferredContact,
}

impl QualificationField {
    /// Wire name of the field.
    pub fn key(&self) -> &'static str {
        match self {
            QualificationField::VillaName => "villaName",
            QualificationField::Location => "location",
            QualificationField::Bedrooms => "bedrooms",
            QualificationField::CurrentOccupancy => "currentOccupancy",
            QualificationField::ManagementStatus => "managementStatus",
            QualificationField::ReadyDate => "readyDate",
            QualificationField::InvestmentReady => "investmentReady",
            QualificationField::Goals => "goals",
            QualificationField::OwnerName => "ownerName",
            QualificationField::Email => "email",
            QualificationField::Phone => "phone",
            QualificationField::PreferredContact => "preferredContact",
        }
    }

    /// Closed option set for select fields, `None` for free text.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            QualificationField::Location => Some(LOCATION_OPTIONS),
            QualificationField::Bedrooms => Some(BEDROOM_OPTIONS),
            QualificationField::CurrentOccupancy => Some(OCCUPANCY_OPTIONS),
            QualificationField::ManagementStatus => Some(MANAGEMENT_STATUS_OPTIONS),
            QualificationField::ReadyDate => Some(READY_DATE_OPTIONS),
            QualificationField::InvestmentReady => Some(INVESTMENT_OPTIONS),
            QualificationField::PreferredContact => Some(CONTACT_OPTIONS),
            _ => None,
        }
    }

    pub fn step(&self) -> QualificationStep {
        QualificationStep::ALL
            .iter()
            .copied()
            .find(|s| s.fields().contains(self))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotAnOption,
    InvalidEmail,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required.",
            FieldError::NotAnOption => "Please choose one of the listed options.",
            FieldError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationForm {
    pub villa_name: String,
    pub location: String,
    pub bedrooms: String,
    pub current_occupancy: String,
    pub management_status: String,
    pub ready_date: String,
    pub investment_ready: String,
    pub goals: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: String,
}

impl Default for QualificationForm {
    fn default() -> Self {
        Self {
            villa_name: String::new(),
            location: String::new(),
            bedrooms: String::new(),
            current_occupancy: String::new(),
            management_status: String::new(),
            ready_date: String::new(),
            investment_ready: String::new(),
            goals: String::new(),
            owner_name: String::new(),
            email: String::new(),
            phone: String::new(),
            preferred_contact: "email".to_string(),
        }
    }
}

impl QualificationForm {
    pub fn get(&self, field: QualificationField) -> &str {
        use QualificationField as F;
        match field {
            F::VillaName => &self.villa_name,
            F::Location => &self.location,
            F::Bedrooms => &self.bedrooms,
            F::CurrentOccupancy => &self.current_occupancy,
            F::ManagementStatus => &self.management_status,
            F::ReadyDate => &self.ready_date,
            F::InvestmentReady => &self.investment_ready,
            F::Goals => &self.goals,
            F::OwnerName => &self.owner_name,
            F::Email => &self.email,
            F::Phone => &self.phone,
            F::PreferredContact => &self.preferred_contact,
        }
    }

    pub fn set(&mut self, field: QualificationField, value: String) {
        use QualificationField as F;
        let slot = match field {
            F::VillaName => &mut self.villa_name,
            F::Location => &mut self.location,
            F::Bedrooms => &mut self.bedrooms,
            F::CurrentOccupancy => &mut self.current_occupancy,
            F::ManagementStatus => &mut self.management_status,
            F::ReadyDate => &mut self.ready_date,
            F::InvestmentReady => &mut self.investment_ready,
            F::Goals => &mut self.goals,
            F::OwnerName => &mut self.owner_name,
            F::Email => &mut self.email,
            F::Phone => &mut self.phone,
            F::PreferredContact => &mut self.preferred_contact,
        };
        *slot = value;
    }

    fn check(&self, field: QualificationField) -> Option<FieldError> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return Some(FieldError::Required);
        }
        if let Some(allowed) = field.allowed_values() {
            if !allowed.contains(&value) {
                return Some(FieldError::NotAnOption);
            }
        }
        if field == QualificationField::Email && !is_plausible_email(value) {
            return Some(FieldError::InvalidEmail);
        }
        None
    }

    /// Problems with the fields on `step`; empty when the step is complete.
    pub fn validate_step(&self, step: QualificationStep) -> BTreeMap<QualificationField, FieldError> {
        step.fields()
            .iter()
            .filter_map(|&f| self.check(f).map(|e| (f, e)))
            .collect()
    }

    pub fn validate_all(&self) -> BTreeMap<QualificationField, FieldError> {
        QualificationStep::ALL
            .iter()
            .flat_map(|s| self.validate_step(*s))
            .collect()
    }

    fn to_inquiry(&self) -> QualificationInquiry {
        let t = |s: &String| s.trim().to_string();
        QualificationInquiry {
            owner_name: t(&self.owner_name),
            email: t(&self.email),
            phone: t(&self.phone),
            preferred_contact: t(&self.preferred_contact),
            villa_name: t(&self.villa_name),
            location: t(&self.location),
            bedrooms: t(&self.bedrooms),
            current_occupancy: t(&self.current_occupancy),
            management_status: t(&self.management_status),
            ready_date: t(&self.ready_date),
            investment_ready: t(&self.investment_ready),
            goals: t(&self.goals),
        }
    }
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualificationWizard {
    Editing {
        step: QualificationStep,
        form: QualificationForm,
        errors: BTreeMap<QualificationField, FieldError>,
        notice: Option<String>,
    },
    Submitting {
        form: QualificationForm,
    },
    Submitted {
        reference: String,
    },
}

impl Default for QualificationWizard {
    fn default() -> Self {
        Self::Editing {
            step: QualificationStep::default(),
            form: QualificationForm::default(),
            errors: BTreeMap::new(),
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualificationEvent {
    Edit(QualificationField, String),
    Next,
    Back,
    Submit,
    SubmissionSucceeded { reference: String },
    SubmissionFailed(String),
    Reset,
}

impl QualificationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: QualificationEvent) -> Self {
        use QualificationEvent as E;

        match (self, event) {
            (_, E::Reset) => Self::default(),

            (Self::Editing { step, mut form, mut errors, notice }, E::Edit(field, value)) => {
                form.set(field, value);
                errors.remove(&field);
                Self::Editing { step, form, errors, notice }
            }

            (Self::Editing { step, form, notice, .. }, E::Next) => {
                let errors = form.validate_step(step);
                let step = if errors.is_empty() { step.next() } else { step };
                Self::Editing { step, form, errors, notice }
            }

            (Self::Editing { step, form, notice, .. }, E::Back) => Self::Editing {
                step: step.previous(),
                form,
                errors: BTreeMap::new(),
                notice,
            },

            (Self::Editing { step: QualificationStep::ContactInfo, form, notice, .. }, E::Submit) => {
                let errors = form.validate_all();
                let first_bad_step = errors.keys().next().map(QualificationField::step);
                match first_bad_step {
                    None => Self::Submitting { form },
                    Some(step) => Self::Editing { step, form, errors, notice },
                }
            }

            (Self::Submitting { .. }, E::SubmissionSucceeded { reference }) => Self::Submitted { reference },
            (Self::Submitting { form }, E::SubmissionFailed(reason)) => Self::Editing {
                step: QualificationStep::ContactInfo,
                form,
                errors: BTreeMap::new(),
                notice: Some(reason),
            },

            (state, _) => state,
        }
    }

    pub fn step(&self) -> Option<QualificationStep> {
        match self {
            Self::Editing { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn errors(&self) -> Option<&BTreeMap<QualificationField, FieldError>> {
        match self {
            Self::Editing { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Editing { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }
}

impl Submittable for QualificationWizard {
    fn pending_inquiry(&self) -> Option<Inquiry> {
        match self {
            Self::Submitting { form } => Some(Inquiry::QualificationForm(form.to_inquiry())),
            _ => None,
        }
    }

    fn on_submitted(self, receipt: &SubmissionReceipt) -> Self {
        self.apply(QualificationEvent::SubmissionSucceeded {
            reference: receipt.reference(),
        })
    }

    fn on_failed(self, reason: String) -> Self {
        self.apply(QualificationEvent::SubmissionFailed(reason))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
