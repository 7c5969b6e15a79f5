use std::fmt::Debug;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use super::domain::ExperienceLevel;
use super::evaluation::ScoringConfig;

/// Label returned by a sentiment backend, folded to the three cases the
/// blending policy distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Backends report labels like `POSITIVE`/`NEGATIVE`; anything else is
    /// treated as neutral rather than rejected.
    pub fn from_backend_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("positive") {
            SentimentLabel::Positive
        } else if trimmed.eq_ignore_ascii_case("negative") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

/// One prediction from the sentiment collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPrediction {
    pub label: SentimentLabel,
    pub confidence: f32,
}

/// Error raised by a sentiment gateway. Callers treat every variant the same
/// way: keep the rule-based result and note the outage in the reason string.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("sentiment backend failed: {0}")]
    Backend(String),
    #[error("sentiment runtime unavailable: {0}")]
    Runtime(String),
}

/// Capability-shaped seam for the optional sentiment collaborator. Consulted
/// at most once per record; failures must never affect the rule-based result.
pub trait SentimentGateway: Send + Sync + Debug {
    fn predict(&self, text: &str) -> Result<SentimentPrediction, InferenceError>;
}

/// Fold a sentiment prediction into the rule-based experience level. Positive
/// sentiment with at least the mid-tier year count lifts the level to high,
/// negative caps it at low, neutral leaves it alone. The health indicator is
/// never sentiment-adjusted.
pub(crate) fn blend_experience(
    rule_level: ExperienceLevel,
    years: f64,
    config: &ScoringConfig,
    prediction: &SentimentPrediction,
) -> (ExperienceLevel, String) {
    let level = match prediction.label {
        SentimentLabel::Positive if years >= config.mid_experience_years => ExperienceLevel::High,
        SentimentLabel::Negative => ExperienceLevel::Low,
        _ => rule_level,
    };

    (
        level,
        format!(
            "sentiment {} (confidence {:.2})",
            prediction.label.label(),
            prediction.confidence
        ),
    )
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    label: String,
    score: f32,
}

/// HTTP client for a hosted sentiment/fill-mask endpoint. Wraps the async
/// reqwest client with its own runtime so the synchronous screening path can
/// consult it, and bounds every request with a fixed timeout.
#[derive(Debug)]
pub struct HttpSentimentClient {
    client: reqwest::Client,
    endpoint: String,
    runtime: Runtime,
}

impl HttpSentimentClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, InferenceError> {
        let runtime = Runtime::new().map_err(|err| InferenceError::Runtime(err.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| InferenceError::Runtime(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            runtime,
        })
    }

    fn map_error<E: std::fmt::Display>(err: E) -> InferenceError {
        InferenceError::Backend(err.to_string())
    }
}

impl SentimentGateway for HttpSentimentClient {
    fn predict(&self, text: &str) -> Result<SentimentPrediction, InferenceError> {
        let request = InferenceRequest { inputs: text };

        let predictions: Vec<InferenceResponse> = self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(Self::map_error)?;

            let response = response.error_for_status().map_err(Self::map_error)?;
            response.json().await.map_err(Self::map_error)
        })?;

        let first = predictions
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::Backend("empty prediction response".to_string()))?;

        Ok(SentimentPrediction {
            label: SentimentLabel::from_backend_label(&first.label),
            confidence: first.score,
        })
    }
}
