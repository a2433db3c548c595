use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::internal_error;
use crate::confirm::RequestConfirmation;
use crate::models::SeatMapView;
use crate::services::lifecycle::CommitOutcome;
use crate::services::session::ResetOutcome;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(create_booking))
}

pub fn reset_route() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reset", post(reset_all))
}

/// Тело запросов, требующих подтверждения. Без `confirmed: true` действие
/// не выполняется, а в ответе возвращается текст вопроса. Запрос без тела
/// считается неподтверждённым.
#[derive(Debug, Default, Deserialize)]
struct ConfirmRequest {
    #[serde(default)]
    confirmed: bool,
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings
#[derive(Debug, Serialize)]
struct BookingResponse {
    #[serde(flatten)]
    outcome: CommitOutcome,
    seat_map: SeatMapView,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    req: Option<Json<ConfirmRequest>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let req = req.map(|Json(req)| req).unwrap_or_default();
    let result = state
        .run(move |session| {
            let confirmation = RequestConfirmation::new(req.confirmed);
            session.commit(&confirmation).map(|outcome| (outcome, session.view()))
        })
        .await
        .map_err(internal_error)?;

    let (outcome, seat_map) = result.map_err(|e| {
        tracing::error!("create_booking failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save booking".to_string())
    })?;

    let status = match outcome {
        CommitOutcome::Booked { .. } => StatusCode::CREATED,
        _ => StatusCode::OK,
    };
    Ok((status, Json(BookingResponse { outcome, seat_map })))
}

/* ---------- RESET ---------- */

// POST /api/reset
#[derive(Debug, Serialize)]
struct ResetResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    seat_map: SeatMapView,
}

async fn reset_all(
    State(state): State<Arc<AppState>>,
    req: Option<Json<ConfirmRequest>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let req = req.map(|Json(req)| req).unwrap_or_default();
    tracing::warn!("RESET requested (confirmed: {})", req.confirmed);

    let result = state
        .run(move |session| {
            let confirmation = RequestConfirmation::new(req.confirmed);
            let outcome = session.reset_all(&confirmation);
            outcome.map(|outcome| (outcome, confirmation.into_prompt(), session.view()))
        })
        .await
        .map_err(internal_error)?;

    let (outcome, prompt, seat_map) = result.map_err(|e| {
        tracing::error!("RESET failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to reset bookings".to_string())
    })?;

    let response = match outcome {
        ResetOutcome::Reset => ResetResponse { status: "reset", prompt: None, seat_map },
        ResetOutcome::Declined => ResetResponse { status: "declined", prompt, seat_map },
    };
    Ok((StatusCode::OK, Json(response)))
}
