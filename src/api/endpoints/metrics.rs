//! Dashboard metrics endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::engine::{self, DashboardStatistics, MetricsSummary};

#[derive(Serialize)]
pub struct MetricsResponse {
    pub summary: MetricsSummary,
    pub statistics: DashboardStatistics,
}

/// `GET /api/metrics`: headline counts and averages for the current batch.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<MetricsResponse>, ApiError> {
    let calls = ctx.core.calls()?;

    Ok(Json(MetricsResponse {
        summary: engine::aggregate(&calls),
        statistics: engine::statistics(&calls),
    }))
}
