use tracing::warn;

use super::domain::{ApplicantRecord, ScoreResult, ScoredApplicant};
use super::enrichment::{blend_experience, SentimentGateway};
use super::evaluation::{ScoringConfig, ScoringEngine};

/// Service composing the rule-based scorer with the optional sentiment
/// collaborator. Scoring is request-scoped: records come in, scored pairs go
/// out, nothing is stored.
pub struct ScreeningService {
    engine: ScoringEngine,
    sentiment: Option<Box<dyn SentimentGateway>>,
}

impl ScreeningService {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config),
            sentiment: None,
        }
    }

    pub fn with_sentiment(config: ScoringConfig, gateway: Box<dyn SentimentGateway>) -> Self {
        Self {
            engine: ScoringEngine::new(config),
            sentiment: Some(gateway),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score one record, consulting the sentiment collaborator at most once
    /// when one is configured. Infallible: enrichment outages leave the
    /// rule-based result standing and are only noted in the reason string.
    pub fn screen_record(&self, record: &ApplicantRecord) -> ScoreResult {
        let mut result = self.engine.score(record);

        if let Some(gateway) = &self.sentiment {
            let years = self.engine.normalized_years(record.experience.as_ref());
            let prompt = enrichment_prompt(record, years);

            match gateway.predict(&prompt) {
                Ok(prediction) => {
                    let (level, note) = blend_experience(
                        result.experience_level,
                        years,
                        self.engine.config(),
                        &prediction,
                    );
                    result.experience_level = level;
                    result.reason.push_str("; ");
                    result.reason.push_str(&note);
                }
                Err(error) => {
                    warn!(
                        applicant = record.display_name(),
                        %error,
                        "sentiment enrichment unavailable, keeping rule-based result"
                    );
                    result
                        .reason
                        .push_str("; sentiment service unavailable, rule-based result retained");
                }
            }
        }

        result
    }

    /// Score one record with the rule-based path only, ignoring any
    /// configured sentiment collaborator.
    pub fn screen_rule_based(&self, record: &ApplicantRecord) -> ScoreResult {
        self.engine.score(record)
    }

    /// Score a batch in roster order. Records are independent: a degraded or
    /// enrichment-starved row never affects its neighbors.
    pub fn screen_batch(&self, records: &[ApplicantRecord]) -> Vec<ScoredApplicant> {
        records
            .iter()
            .map(|record| ScoredApplicant {
                record: record.clone(),
                result: self.screen_record(record),
            })
            .collect()
    }
}

fn enrichment_prompt(record: &ApplicantRecord, years: f64) -> String {
    format!(
        "Position: {}, Experience: {} years",
        record.position.as_deref().unwrap_or(""),
        years
    )
}
