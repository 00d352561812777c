//! Wizards from first step to submitted, with real estimates and the
//! mock sender standing in for the email endpoint.

use rust_decimal_macros::dec;

use aura::estimation::currency::{format_amount, DisplayCurrency, ExchangeRates};
use aura::estimation::projection::{net_owner_income, ManagementTier};
use aura::estimation::EstimationTable;
use aura::inquiry::{Inquiry, PackageType};
use aura::types::{BedroomRequest, Location, Strategy, VillaCategory};
use aura::wizard::calculator::{Amenity, CalculatorEvent, CalculatorWizard};
use aura::wizard::qualification::{QualificationEvent, QualificationField, QualificationStep, QualificationWizard};
use aura::wizard::tier_interest::{TierInterestEvent, TierInterestModal};
use aura::wizard::{submit_pending, ContactField, SUBMISSION_FAILED_MESSAGE};

use crate::mock_sender::MockSender;

fn calculator_at_contact() -> CalculatorWizard {
    CalculatorWizard::new()
        .apply(CalculatorEvent::SelectLocation(Location::Uluwatu))
        .apply(CalculatorEvent::SelectBedrooms(BedroomRequest::parse("6+")))
        .apply(CalculatorEvent::SelectCategory(VillaCategory::UltraLuxury))
        .apply(CalculatorEvent::ToggleAmenity(Amenity::OceanView))
        .apply(CalculatorEvent::ToggleAmenity(Amenity::ChefService))
        .apply(CalculatorEvent::ViewResults)
        .apply(CalculatorEvent::ChangeStrategy(Strategy::RevenueFocused))
        .apply(CalculatorEvent::RequestReport)
        .apply(CalculatorEvent::EditContact(ContactField::Name, "Ni Luh".into()))
        .apply(CalculatorEvent::EditContact(ContactField::Email, "niluh@example.com".into()))
        .apply(CalculatorEvent::EditContact(ContactField::Phone, "+62 811 000".into()))
}

#[tokio::test]
async fn test_calculator_end_to_end() {
    let table = EstimationTable::new();
    let rates = ExchangeRates::new(dec!(16260)).unwrap();
    let sender = MockSender::new();

    let wizard = calculator_at_contact();
    let estimate = wizard.estimate(&table).expect("max tier row exists");
    let three = table
        .estimate(Location::Uluwatu, VillaCategory::UltraLuxury, BedroomRequest::Count(3), Strategy::RevenueFocused)
        .unwrap();
    assert_eq!(estimate, three);
    assert!(format_amount(estimate.annual_gross_revenue, DisplayCurrency::Idr, &rates).starts_with("Rp "));

    let income = net_owner_income(&estimate, ManagementTier::Boutique);
    assert!(income.annual_net_income < estimate.annual_net_revenue());

    let wizard = submit_pending(wizard.apply(CalculatorEvent::Submit), &sender).await;
    match &wizard {
        CalculatorWizard::Submitted { reference, quote } => {
            assert_eq!(reference, "AURA-000123");
            assert_eq!(quote.strategy, Strategy::RevenueFocused);
        }
        other => panic!("expected Submitted, got {other:?}"),
    }

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        Inquiry::EarningsCalculator(e) => {
            assert_eq!(e.bedrooms, "3+");
            assert_eq!(e.villa_category, VillaCategory::UltraLuxury);
            assert_eq!(e.amenities, vec!["Ocean View".to_string(), "Chef Service".to_string()]);
            assert_eq!(e.phone.as_deref(), Some("+62 811 000"));
        }
        other => panic!("unexpected inquiry {other:?}"),
    }
}

#[tokio::test]
async fn test_calculator_failure_then_manual_retry() {
    let sender = MockSender::rejecting(500);

    let wizard = submit_pending(calculator_at_contact().apply(CalculatorEvent::Submit), &sender).await;
    assert_eq!(wizard.error(), Some(SUBMISSION_FAILED_MESSAGE));
    assert_eq!(sender.sent().len(), 1, "exactly one attempt per submission");

    sender.set_rejection(None);
    let wizard = submit_pending(wizard.apply(CalculatorEvent::Submit), &sender).await;
    assert!(matches!(wizard, CalculatorWizard::Submitted { .. }));
    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn test_submit_pending_without_pending_inquiry_sends_nothing() {
    let sender = MockSender::new();
    let wizard = submit_pending(calculator_at_contact(), &sender).await;
    assert!(matches!(wizard, CalculatorWizard::Contact { .. }));
    assert!(sender.sent().is_empty());
}

#[test]
fn test_qualification_end_to_end() {
    use QualificationField as F;

    let sender = MockSender::new();
    let edits: &[(QualificationField, &str)] = &[
        (F::VillaName, "Villa Kembang"),
        (F::Location, "Uluwatu/Pecatu"),
        (F::Bedrooms, "5-6"),
        (F::CurrentOccupancy, "new"),
    ];
    let mut wizard = QualificationWizard::new();
    for (field, value) in edits {
        wizard = wizard.apply(QualificationEvent::Edit(*field, value.to_string()));
    }
    wizard = wizard.apply(QualificationEvent::Next);
    assert_eq!(wizard.step(), Some(QualificationStep::ManagementGoals));

    for (field, value) in [
        (F::ManagementStatus, "new"),
        (F::ReadyDate, "immediate"),
        (F::InvestmentReady, "yes"),
        (F::Goals, "Launch before high season"),
    ] {
        wizard = wizard.apply(QualificationEvent::Edit(field, value.to_string()));
    }
    wizard = wizard.apply(QualificationEvent::Next);

    for (field, value) in [
        (F::OwnerName, "Wayan"),
        (F::Email, "wayan@example.com"),
        (F::Phone, "+62 812 111"),
        (F::PreferredContact, "whatsapp"),
    ] {
        wizard = wizard.apply(QualificationEvent::Edit(field, value.to_string()));
    }

    let wizard = tokio_test::block_on(submit_pending(wizard.apply(QualificationEvent::Submit), &sender));
    assert_eq!(
        wizard,
        QualificationWizard::Submitted {
            reference: "AURA-000123".into()
        }
    );

    match &sender.sent()[0] {
        Inquiry::QualificationForm(q) => {
            assert_eq!(q.location, "Uluwatu/Pecatu");
            assert_eq!(q.preferred_contact, "whatsapp");
            assert_eq!(q.ready_date, "immediate");
        }
        other => panic!("unexpected inquiry {other:?}"),
    }
}

#[test]
fn test_tier_interest_end_to_end() {
    let sender = MockSender::new();
    let modal = TierInterestModal::default()
        .apply(TierInterestEvent::Open {
            package_name: ManagementTier::Boutique.label().to_string(),
            package_type: PackageType::Operations,
        })
        .apply(TierInterestEvent::Edit(ContactField::Name, "Kadek".into()))
        .apply(TierInterestEvent::Edit(ContactField::Email, "kadek@example.com".into()))
        .apply(TierInterestEvent::Submit);

    let modal = tokio_test::block_on(submit_pending(modal, &sender));
    assert_eq!(
        modal,
        TierInterestModal::Sent {
            package_name: "Boutique Full".into()
        }
    );
    assert_eq!(sender.sent()[0].kind(), "tier-interest");
}
