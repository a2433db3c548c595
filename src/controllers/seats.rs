use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use super::{internal_error, status_419};
use crate::models::SeatMapView;
use crate::services::selection::ToggleOutcome;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/toggle", patch(toggle_seat))
        .route("/seats/clear", patch(clear_selection))
}

// GET /api/seats
async fn get_seats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let view = state.run(|session| session.view()).await.map_err(internal_error)?;
    Ok((StatusCode::OK, Json(view)))
}

// PATCH /api/seats/toggle
#[derive(Debug, Deserialize, Validate)]
struct ToggleSeatRequest {
    #[validate(range(max = 7, message = "row must be between 0 and 7"))]
    row: usize,
    #[validate(range(max = 9, message = "col must be between 0 and 9"))]
    col: usize,
}

#[derive(Debug, Serialize)]
struct ToggleSeatResponse {
    outcome: ToggleOutcome,
    seat_map: SeatMapView,
}

async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleSeatRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let (outcome, seat_map) = state
        .run(move |session| {
            let outcome = session.toggle(req.row, req.col);
            (outcome, session.view())
        })
        .await
        .map_err(internal_error)?;

    match outcome {
        // предупреждение о лимите или разрыве ряда
        ToggleOutcome::Rejected(warning) => Err((status_419(), warning.message().to_string())),
        _ => Ok((StatusCode::OK, Json(ToggleSeatResponse { outcome, seat_map }))),
    }
}

// PATCH /api/seats/clear
#[derive(Debug, Serialize)]
struct ClearSelectionResponse {
    cleared: usize,
    seat_map: SeatMapView,
}

async fn clear_selection(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (cleared, seat_map) = state
        .run(|session| (session.clear_selection(), session.view()))
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::OK, Json(ClearSelectionResponse { cleared, seat_map })))
}
