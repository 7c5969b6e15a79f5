//! Applicant screening: typed roster records, the rule-based scorer, optional
//! sentiment enrichment, and the presentation/outreach views built from the
//! scored pairs.

pub mod domain;
pub mod enrichment;
mod evaluation;
pub mod outreach;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, ExperienceField, ExperienceLevel, HealthLevel, ScoreResult, ScoredApplicant,
};
pub use enrichment::{
    HttpSentimentClient, InferenceError, SentimentGateway, SentimentLabel, SentimentPrediction,
};
pub use evaluation::{
    ExperienceBand, KeywordTable, ScoringConfig, ScoringConfigError, ScoringEngine,
};
pub use outreach::ApplicantCardView;
pub use router::screening_router;
pub use service::ScreeningService;
