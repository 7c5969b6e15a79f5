use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use evalia::config::ScreeningSettings;
use evalia::workflows::screening::{HttpSentimentClient, ScoringConfig, ScreeningService};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the scoring rubric: a JSON rules file when configured, the
/// standard bilingual rubric otherwise.
pub(crate) fn load_scoring_config(
    settings: &ScreeningSettings,
) -> Result<ScoringConfig, evalia::workflows::screening::ScoringConfigError> {
    match &settings.rules_path {
        Some(path) => ScoringConfig::from_path(path),
        None => Ok(ScoringConfig::standard()),
    }
}

/// Wire the screening service, attaching the HTTP sentiment gateway when an
/// endpoint is configured. A gateway that cannot be constructed degrades to
/// the rule-based service instead of failing startup.
pub(crate) fn build_screening_service(
    settings: &ScreeningSettings,
    scoring: ScoringConfig,
) -> ScreeningService {
    match &settings.sentiment_url {
        Some(url) => match HttpSentimentClient::new(url.clone()) {
            Ok(client) => ScreeningService::with_sentiment(scoring, Box::new(client)),
            Err(error) => {
                warn!(%error, "sentiment client unavailable, running rule-based only");
                ScreeningService::new(scoring)
            }
        },
        None => ScreeningService::new(scoring),
    }
}
