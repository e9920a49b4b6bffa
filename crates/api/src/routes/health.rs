//! Liveness and database reachability at `GET /health`.
//!
//! Mounted at the root rather than under `/api/v1`, and answered without the
//! `{code, msg, data}` envelope so load balancers can read it directly.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthReport {
    /// `ok` when every dependency answered, `unavailable` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    pub fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "unavailable" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }

    /// 503 while the database is unreachable, so the instance is taken out
    /// of rotation.
    pub fn status_code(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match quire_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    let report = HealthReport::new(db_healthy);
    (report.status_code(), Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
