use crate::infra::{build_screening_service, load_scoring_config};
use chrono::Local;
use clap::Args;
use evalia::config::ScreeningSettings;
use evalia::error::AppError;
use evalia::workflows::roster::ApplicantRosterImporter;
use evalia::workflows::screening::{
    ApplicantCardView, ApplicantRecord, ExperienceField, ExperienceLevel, HealthLevel,
    ScoredApplicant,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Path to the applicant roster CSV export
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Optional scoring rules JSON overriding the standard rubric
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Optional sentiment inference endpoint consulted per applicant
    #[arg(long)]
    pub(crate) sentiment_url: Option<String>,
    /// Include outreach links for each applicant card
    #[arg(long)]
    pub(crate) show_links: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include outreach links for each applicant card
    #[arg(long)]
    pub(crate) show_links: bool,
}

pub(crate) fn run_screen_report(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        roster,
        rules,
        sentiment_url,
        show_links,
    } = args;

    let settings = ScreeningSettings {
        sentiment_url,
        rules_path: rules,
    };
    let scoring = load_scoring_config(&settings)?;
    let records = ApplicantRosterImporter::from_path(&roster)?;

    let service = build_screening_service(&settings, scoring);
    let scored = service.screen_batch(&records);

    render_screening_report(&scored, show_links);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let settings = ScreeningSettings {
        sentiment_url: None,
        rules_path: None,
    };
    let scoring = load_scoring_config(&settings)?;
    let service = build_screening_service(&settings, scoring);

    println!("Applicant screening demo");
    let scored = service.screen_batch(&sample_applicants());
    render_screening_report(&scored, args.show_links);
    Ok(())
}

fn sample_applicants() -> Vec<ApplicantRecord> {
    vec![
        ApplicantRecord {
            name: Some("Anna Field".to_string()),
            email: Some("anna@example.com".to_string()),
            position: Some("Senior Analyst".to_string()),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            experience: Some(ExperienceField::Years(6.0)),
        },
        ApplicantRecord {
            name: Some("Boris Chan".to_string()),
            email: Some("boris@example.com".to_string()),
            position: Some("Support Clerk".to_string()),
            weight_kg: Some(90.0),
            height_cm: Some(175.0),
            experience: Some(ExperienceField::Years(1.0)),
        },
        ApplicantRecord {
            name: Some("Dana Osei".to_string()),
            email: Some("dana@example.com".to_string()),
            position: Some("Ward Nurse".to_string()),
            weight_kg: None,
            height_cm: None,
            experience: Some(ExperienceField::Label("1-3 years".to_string())),
        },
        ApplicantRecord::default(),
    ]
}

fn render_screening_report(scored: &[ScoredApplicant], show_links: bool) {
    let today = Local::now().date_naive();
    println!("Applicant screening report");
    println!("Generated {} | {} applicant(s)", today, scored.len());

    let mut high = 0usize;
    let mut mid = 0usize;
    let mut low = 0usize;
    let mut flagged = 0usize;
    let mut missing_bmi = 0usize;
    for pair in scored {
        match pair.result.experience_level {
            ExperienceLevel::High => high += 1,
            ExperienceLevel::Mid => mid += 1,
            ExperienceLevel::Low | ExperienceLevel::Unknown => low += 1,
        }
        match pair.result.health_level {
            HealthLevel::Low => flagged += 1,
            HealthLevel::Unknown => missing_bmi += 1,
            HealthLevel::High => {}
        }
    }

    println!("\nExperience mix");
    println!("- high: {high} | mid: {mid} | low: {low}");

    println!("\nHealth flags");
    println!(
        "- {flagged} applicant(s) above the BMI threshold, {missing_bmi} with missing BMI data"
    );

    println!("\nApplicants");
    for pair in scored {
        let card = ApplicantCardView::from_scored(pair);
        let bmi = card
            .bmi
            .map(|value| format!("{value:.1}"))
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "- {} | {} | BMI {} | health {} | experience {}",
            card.name,
            card.position.as_deref().unwrap_or("unspecified"),
            bmi,
            card.health_level,
            card.experience_level
        );
        println!("  {}", card.reason);

        if show_links {
            match (&card.email_link, &card.meeting_link) {
                (Some(email), Some(meeting)) => {
                    println!("  email: {email}");
                    println!("  meet: {meeting}");
                }
                _ => println!("  no contact address on file"),
            }
        }
    }
}
