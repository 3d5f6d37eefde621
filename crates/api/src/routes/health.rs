//! Root-level liveness and readiness check for load balancers and operators.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is up but `SELECT 1` failed.
    Degraded,
}

/// Pool occupancy at the time of the check.
#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStats,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match recipe_lab_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable from /health");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool: PoolStats {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    })
}

/// `GET /health`, mounted outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
