use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::workflows::screening::domain::{ApplicantRecord, ExperienceField};
use crate::workflows::screening::enrichment::{
    InferenceError, SentimentGateway, SentimentLabel, SentimentPrediction,
};
use crate::workflows::screening::evaluation::{ScoringConfig, ScoringEngine};
use crate::workflows::screening::service::ScreeningService;

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

pub(super) fn rule_service() -> ScreeningService {
    ScreeningService::new(scoring_config())
}

pub(super) fn sentiment_service(label: SentimentLabel, confidence: f32) -> ScreeningService {
    ScreeningService::with_sentiment(
        scoring_config(),
        Box::new(StaticSentimentGateway {
            prediction: SentimentPrediction { label, confidence },
        }),
    )
}

pub(super) fn valid_record() -> ApplicantRecord {
    ApplicantRecord {
        name: Some("Anna Field".to_string()),
        email: Some("anna@example.com".to_string()),
        position: Some("Senior Analyst".to_string()),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        experience: Some(ExperienceField::Years(6.0)),
    }
}

pub(super) fn minimal_record() -> ApplicantRecord {
    ApplicantRecord::default()
}

pub(super) fn years_record(years: f64) -> ApplicantRecord {
    ApplicantRecord {
        experience: Some(ExperienceField::Years(years)),
        ..ApplicantRecord::default()
    }
}

/// Gateway returning one fixed prediction for every prompt.
#[derive(Debug)]
pub(super) struct StaticSentimentGateway {
    pub(super) prediction: SentimentPrediction,
}

impl SentimentGateway for StaticSentimentGateway {
    fn predict(&self, _text: &str) -> Result<SentimentPrediction, InferenceError> {
        Ok(self.prediction.clone())
    }
}

/// Gateway that always fails, standing in for a dead inference backend.
#[derive(Debug)]
pub(super) struct FailingSentimentGateway;

impl SentimentGateway for FailingSentimentGateway {
    fn predict(&self, _text: &str) -> Result<SentimentPrediction, InferenceError> {
        Err(InferenceError::Backend("inference backend offline".to_string()))
    }
}

/// Gateway counting how often it is consulted.
#[derive(Debug, Default)]
pub(super) struct CountingSentimentGateway {
    calls: Arc<AtomicUsize>,
}

impl CountingSentimentGateway {
    pub(super) fn handle(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl SentimentGateway for CountingSentimentGateway {
    fn predict(&self, _text: &str) -> Result<SentimentPrediction, InferenceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(SentimentPrediction {
            label: SentimentLabel::Neutral,
            confidence: 0.5,
        })
    }
}
