use super::common::*;
use crate::workflows::screening::domain::{
    ApplicantRecord, ExperienceField, ExperienceLevel, HealthLevel,
};
use crate::workflows::screening::outreach::ApplicantCardView;
use crate::workflows::screening::service::ScreeningService;

fn mixed_batch() -> Vec<ApplicantRecord> {
    vec![
        valid_record(),
        ApplicantRecord {
            name: Some("Boris Chan".to_string()),
            weight_kg: Some(90.0),
            height_cm: Some(175.0),
            experience: Some(ExperienceField::Years(1.0)),
            ..Default::default()
        },
        minimal_record(),
        ApplicantRecord {
            name: Some("Dana Osei".to_string()),
            position: Some("Ward Nurse".to_string()),
            height_cm: Some(-10.0),
            ..Default::default()
        },
        ApplicantRecord {
            name: Some("Elin Vogt".to_string()),
            weight_kg: Some(500.0),
            height_cm: Some(150.0),
            experience: Some(ExperienceField::Label("1-3 years".to_string())),
            ..Default::default()
        },
    ]
}

#[test]
fn batch_scores_every_row_in_order() {
    let service = rule_service();
    let batch = mixed_batch();

    let scored = service.screen_batch(&batch);

    assert_eq!(scored.len(), 5);
    for (input, output) in batch.iter().zip(&scored) {
        assert_eq!(&output.record, input);
    }
}

#[test]
fn degraded_rows_do_not_affect_their_neighbors() {
    let service = rule_service();
    let scored = service.screen_batch(&mixed_batch());

    // Row 0 is fully valid and keeps its strong score.
    assert_eq!(scored[0].result.health_level, HealthLevel::High);
    assert_eq!(scored[0].result.experience_level, ExperienceLevel::High);

    // Row 2 is empty and degrades without failing.
    assert_eq!(scored[2].result.bmi, None);
    assert_eq!(scored[2].result.health_level, HealthLevel::Unknown);

    // Row 3 has a negative height and a clinical-role keyword.
    assert_eq!(scored[3].result.bmi, None);
    assert_eq!(scored[3].result.experience_level, ExperienceLevel::Mid);

    // Row 4 has an extreme but computable BMI.
    assert_eq!(scored[4].result.health_level, HealthLevel::Low);
}

#[test]
fn rule_based_path_skips_the_gateway() {
    let gateway = CountingSentimentGateway::default();
    let calls = gateway.handle();
    let service = ScreeningService::with_sentiment(scoring_config(), Box::new(gateway));

    let result = service.screen_rule_based(&valid_record());

    assert_eq!(result.experience_level, ExperienceLevel::High);
    assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 0);
}

#[test]
fn card_views_carry_labels_and_outreach_links() {
    let service = rule_service();
    let scored = service.screen_batch(&[valid_record()]);
    let card = ApplicantCardView::from_scored(&scored[0]);

    assert_eq!(card.name, "Anna Field");
    assert_eq!(card.health_level, "high");
    assert_eq!(card.experience_level, "high");
    assert_eq!(card.bmi, Some(22.9));

    let email_link = card.email_link.expect("email link present");
    assert!(email_link.starts_with("mailto:anna@example.com?subject="));
    assert!(!email_link.contains(' '), "link must be percent-encoded");

    let meeting_link = card.meeting_link.expect("meeting link present");
    assert!(meeting_link.contains("calendar.google.com"));
    assert!(meeting_link.contains("Interview%20with%20Anna%20Field"));
}

#[test]
fn cards_without_an_address_omit_outreach_links() {
    let service = rule_service();
    let scored = service.screen_batch(&[minimal_record()]);
    let card = ApplicantCardView::from_scored(&scored[0]);

    assert_eq!(card.name, "Applicant");
    assert!(card.email_link.is_none());
    assert!(card.meeting_link.is_none());
}
