mod config;
mod rules;

pub use config::{ExperienceBand, KeywordTable, ScoringConfig, ScoringConfigError};

pub(crate) use rules::{classify_experience, classify_health, compute_bmi};

#[cfg(test)]
pub(crate) use rules::normalize_label_for_tests;

use super::domain::{ApplicantRecord, ExperienceField, ScoreResult};

/// Stateless scorer applying the rubric configuration to one applicant at a
/// time. Pure and deterministic: the same record always produces the same
/// result.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one record. Never fails: missing or malformed fields degrade to
    /// the unknown/low buckets with a self-describing reason.
    pub fn score(&self, record: &ApplicantRecord) -> ScoreResult {
        let bmi = compute_bmi(record.weight_kg, record.height_cm);
        let (health_level, health_reason) = classify_health(bmi, &self.config);

        let free_text = record.position.as_deref().unwrap_or("");
        let (experience_level, experience_reason) =
            classify_experience(record.experience.as_ref(), free_text, &self.config);

        ScoreResult {
            bmi,
            health_level,
            experience_level,
            reason: format!("{health_reason}; {experience_reason}"),
        }
    }

    /// Year count the rubric assigns to a declared experience field.
    pub fn normalized_years(&self, experience: Option<&ExperienceField>) -> f64 {
        rules::normalized_years(experience, &self.config)
    }
}
