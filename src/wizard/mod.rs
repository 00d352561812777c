//! Multi-step form wizards as explicit state machines.
//!
//! Each wizard is an enum of steps carrying only what that step needs,
//! advanced by a pure `apply(self, event) -> Self`. Events that make no
//! sense for the current step leave it unchanged. Sending the finished
//! form is the only I/O and happens in [`submit_pending`], which feeds the
//! outcome back in as an event.

pub mod calculator;
pub mod qualification;
pub mod tier_interest;

use tracing::{info, warn};

use crate::inquiry::{Inquiry, InquirySender, SubmissionReceipt};

/// Message shown to the user when a submission fails, whatever the cause.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your request. Please try again or contact us directly.";

// ---------------------------------------------------------------------------
// Contact details shared by the calculator and the tier modal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

/// Contact details being typed in. Phone is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }

    /// First problem with the draft, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.".to_string());
        }
        if !is_plausible_email(&self.email) {
            return Err("Please enter a valid email address.".to_string());
        }
        Ok(())
    }

    pub fn phone(&self) -> Option<String> {
        let phone = self.phone.trim();
        (!phone.is_empty()).then(|| phone.to_string())
    }
}

/// `local@domain` with something on both sides and no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Submission driver
// ---------------------------------------------------------------------------

/// A wizard that can end in a submission.
pub trait Submittable: Sized {
    /// The inquiry to send, when the wizard is waiting on one.
    fn pending_inquiry(&self) -> Option<Inquiry>;

    fn on_submitted(self, receipt: &SubmissionReceipt) -> Self;

    fn on_failed(self, reason: String) -> Self;
}

/// Send the wizard's pending inquiry once and apply the outcome.
///
/// Wizards with nothing pending are returned unchanged. Failures are not
/// retried; the wizard shows [`SUBMISSION_FAILED_MESSAGE`].
pub async fn submit_pending<W: Submittable>(wizard: W, sender: &dyn InquirySender) -> W {
    let Some(inquiry) = wizard.pending_inquiry() else {
        return wizard;
    };

    match sender.send(&inquiry).await {
        Ok(receipt) => {
            info!(kind = inquiry.kind(), reference = %receipt.reference(), "Wizard submission accepted");
            wizard.on_submitted(&receipt)
        }
        Err(e) => {
            warn!(kind = inquiry.kind(), error = %e, "Wizard submission failed");
            wizard.on_failed(SUBMISSION_FAILED_MESSAGE.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("owner@villa.com"));
        assert!(is_plausible_email("  owner@villa.com "));
        assert!(!is_plausible_email("owner"));
        assert!(!is_plausible_email("@villa.com"));
        assert!(!is_plausible_email("owner@"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(!is_plausible_email("own er@villa.com"));
    }

    #[test]
    fn test_contact_draft_validation() {
        let mut draft = ContactDraft::default();
        assert!(draft.validate().is_err());
        draft.set(ContactField::Name, "Nyoman".into());
        assert_eq!(draft.validate().unwrap_err(), "Please enter a valid email address.");
        draft.set(ContactField::Email, "nyoman@example.com".into());
        assert!(draft.validate().is_ok());
        assert_eq!(draft.phone(), None);
        draft.set(ContactField::Phone, " +62 812 ".into());
        assert_eq!(draft.phone().as_deref(), Some("+62 812"));
    }

    fn submitting_modal() -> tier_interest::TierInterestModal {
        use tier_interest::{TierInterestEvent as E, TierInterestModal};
        TierInterestModal::default()
            .apply(E::Open {
                package_name: "Essential".into(),
                package_type: crate::inquiry::PackageType::Operations,
            })
            .apply(E::Edit(ContactField::Name, "Nyoman".into()))
            .apply(E::Edit(ContactField::Email, "nyoman@example.com".into()))
            .apply(E::Submit)
    }

    #[test]
    fn test_submit_pending_sends_once_and_reports_generic_failure() {
        use crate::inquiry::MockInquirySender;
        use crate::types::AuraError;

        let mut sender = MockInquirySender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(AuraError::SubmissionTransport("connection refused".into())));

        let modal = tokio_test::block_on(submit_pending(submitting_modal(), &sender));
        assert_eq!(modal.error(), Some(SUBMISSION_FAILED_MESSAGE));
    }

    #[test]
    fn test_submit_pending_skips_idle_wizard() {
        use crate::inquiry::MockInquirySender;

        let mut sender = MockInquirySender::new();
        sender.expect_send().never();
        let wizard = tokio_test::block_on(submit_pending(calculator::CalculatorWizard::new(), &sender));
        assert_eq!(wizard, calculator::CalculatorWizard::Location);
    }
}
