use std::io::Cursor;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::workflows::roster::ApplicantRosterImporter;

use super::domain::ScoredApplicant;
use super::outreach::ApplicantCardView;
use super::service::ScreeningService;

#[derive(Debug, Deserialize)]
pub(crate) struct ScreenRosterRequest {
    /// Roster contents as CSV text, headers included.
    pub(crate) roster_csv: String,
    /// Consult the sentiment collaborator when one is configured.
    #[serde(default = "default_enrich")]
    pub(crate) enrich: bool,
}

fn default_enrich() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub(crate) struct ScreenRosterResponse {
    pub(crate) applicant_count: usize,
    pub(crate) applicants: Vec<ApplicantCardView>,
}

/// Router builder exposing the roster screening endpoint.
pub fn screening_router(service: Arc<ScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/screening/roster", post(screen_roster_handler))
        .with_state(service)
}

pub(crate) async fn screen_roster_handler(
    State(service): State<Arc<ScreeningService>>,
    Json(request): Json<ScreenRosterRequest>,
) -> Result<Json<ScreenRosterResponse>, AppError> {
    let reader = Cursor::new(request.roster_csv.into_bytes());
    let records = ApplicantRosterImporter::from_reader(reader)?;
    let enrich = request.enrich;

    // The sentiment gateway blocks on its outbound call, so scoring runs off
    // the async worker threads.
    let applicants: Vec<ApplicantCardView> = tokio::task::spawn_blocking(move || {
        let scored: Vec<ScoredApplicant> = if enrich {
            service.screen_batch(&records)
        } else {
            records
                .iter()
                .map(|record| ScoredApplicant {
                    record: record.clone(),
                    result: service.screen_rule_based(record),
                })
                .collect()
        };

        scored.iter().map(ApplicantCardView::from_scored).collect()
    })
    .await
    .map_err(axum::Error::new)?;

    Ok(Json(ScreenRosterResponse {
        applicant_count: applicants.len(),
        applicants,
    }))
}
