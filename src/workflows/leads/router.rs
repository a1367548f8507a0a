use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

use super::classifier::CompletionOracle;
use super::domain::Offer;
use super::ingest;
use super::service::{LeadScoreError, LeadScoringService, ScoringError};

/// Router builder exposing the scoring workflow over HTTP.
pub fn scoring_router<O>(service: Arc<LeadScoringService<O>>) -> Router
where
    O: CompletionOracle + 'static,
{
    Router::new()
        .route("/api/v1/offer", post(set_offer_handler::<O>))
        .route("/api/v1/leads/upload", post(upload_leads_handler::<O>))
        .route("/api/v1/score", post(score_handler::<O>))
        .route("/api/v1/results", get(results_handler::<O>))
        .route("/api/v1/results/export", get(export_handler::<O>))
        .with_state(service)
}

pub(crate) async fn set_offer_handler<O>(
    State(service): State<Arc<LeadScoringService<O>>>,
    Json(offer): Json<Offer>,
) -> Response
where
    O: CompletionOracle + 'static,
{
    match service.set_offer(offer) {
        Ok(()) => {
            let payload = json!({ "message": "Offer has been set" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

/// Accepts the raw CSV body and replaces the lead batch with whatever parses cleanly.
pub(crate) async fn upload_leads_handler<O>(
    State(service): State<Arc<LeadScoringService<O>>>,
    body: String,
) -> Response
where
    O: CompletionOracle + 'static,
{
    let import = ingest::parse_leads(body.as_bytes());
    let skipped = import.skipped;
    let accepted = service.replace_leads(import.leads);
    info!(accepted, skipped, "lead batch replaced");

    let payload = json!({
        "message": "Leads uploaded successfully",
        "accepted": accepted,
        "skipped": skipped,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn score_handler<O>(
    State(service): State<Arc<LeadScoringService<O>>>,
) -> Response
where
    O: CompletionOracle + 'static,
{
    match service.run_scoring().await {
        Ok(report) => {
            let payload = json!({
                "message": "Scoring complete",
                "scored": report.scored,
                "scored_at": report.scored_at,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => scoring_error_response(err),
    }
}

pub(crate) async fn results_handler<O>(
    State(service): State<Arc<LeadScoringService<O>>>,
) -> Response
where
    O: CompletionOracle + 'static,
{
    Json(service.results()).into_response()
}

pub(crate) async fn export_handler<O>(
    State(service): State<Arc<LeadScoringService<O>>>,
) -> Response
where
    O: CompletionOracle + 'static,
{
    match service.export_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"results.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn scoring_error_response(err: ScoringError) -> Response {
    let status = match &err {
        ScoringError::NoActiveOffer | ScoringError::EmptyBatch => StatusCode::CONFLICT,
        ScoringError::InvalidOffer => StatusCode::UNPROCESSABLE_ENTITY,
        ScoringError::Lead { source, .. } => match source {
            LeadScoreError::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LeadScoreError::Oracle(_) => StatusCode::BAD_GATEWAY,
        },
        ScoringError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
