//! "I'm interested" modal on the pricing page.

use super::{ContactDraft, ContactField, Submittable};
use crate::inquiry::{Inquiry, PackageType, SubmissionReceipt, TierInterestInquiry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TierInterestModal {
    #[default]
    Closed,
    Open {
        package_name: String,
        package_type: PackageType,
        contact: ContactDraft,
        error: Option<String>,
    },
    Submitting {
        package_name: String,
        package_type: PackageType,
        contact: ContactDraft,
    },
    Sent {
        package_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierInterestEvent {
    Open {
        package_name: String,
        package_type: PackageType,
    },
    Edit(ContactField, String),
    Submit,
    SubmissionSucceeded,
    SubmissionFailed(String),
    Close,
}

impl TierInterestModal {
    pub fn apply(self, event: TierInterestEvent) -> Self {
        use TierInterestEvent as E;

        match (self, event) {
            // An in-flight request cannot be dismissed.
            (state @ Self::Submitting { .. }, E::Close) => state,
            (_, E::Close) => Self::Closed,

            (Self::Closed | Self::Sent { .. }, E::Open { package_name, package_type }) => Self::Open {
                package_name,
                package_type,
                contact: ContactDraft::default(),
                error: None,
            },

            (Self::Open { package_name, package_type, mut contact, .. }, E::Edit(field, value)) => {
                contact.set(field, value);
                Self::Open { package_name, package_type, contact, error: None }
            }
            (Self::Open { package_name, package_type, contact, .. }, E::Submit) => match contact.validate() {
                Ok(()) => Self::Submitting { package_name, package_type, contact },
                Err(message) => Self::Open {
                    package_name,
                    package_type,
                    contact,
                    error: Some(message),
                },
            },

            (Self::Submitting { package_name, .. }, E::SubmissionSucceeded) => Self::Sent { package_name },
            (Self::Submitting { package_name, package_type, contact }, E::SubmissionFailed(reason)) => Self::Open {
                package_name,
                package_type,
                contact,
                error: Some(reason),
            },

            (state, _) => state,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

impl Submittable for TierInterestModal {
    fn pending_inquiry(&self) -> Option<Inquiry> {
        let Self::Submitting { package_name, package_type, contact } = self else {
            return None;
        };
        Some(Inquiry::TierInterest(TierInterestInquiry {
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone(),
            package_name: package_name.clone(),
            package_type: *package_type,
        }))
    }

    fn on_submitted(self, _receipt: &SubmissionReceipt) -> Self {
        self.apply(TierInterestEvent::SubmissionSucceeded)
    }

    fn on_failed(self, reason: String) -> Self {
        self.apply(TierInterestEvent::SubmissionFailed(reason))
    }
}
