pub mod seats;
pub mod bookings;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Полный роутер приложения
pub fn app(state: Arc<crate::AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(bookings::reset_route())
}

/* ---------- helpers ---------- */

// GET / - баннер с окружением из конфига
async fn banner(State(state): State<Arc<crate::AppState>>) -> String {
    format!("Seat Booking API v1.0 ({})", state.config.app.environment)
}

// 419 - бизнес-отказ: лимит мест или разрыв ряда
fn status_419() -> StatusCode {
    StatusCode::from_u16(419).unwrap_or(StatusCode::CONFLICT)
}

fn internal_error(e: tokio::task::JoinError) -> (StatusCode, String) {
    tracing::error!("session task failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
}
