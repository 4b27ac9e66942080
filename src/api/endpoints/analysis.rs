//! On-demand analysis endpoints. Neither touches the session.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AnalysisRecord, SummaryAnalysis};

/// `POST /api/analysis`: one fresh mock analysis.
pub async fn generate(State(ctx): State<ApiContext>) -> Result<Json<AnalysisRecord>, ApiError> {
    Ok(Json(ctx.core.generate_analysis()?))
}

/// `POST /api/analysis/summary`: narrative summary with similar cases.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<SummaryAnalysis>, ApiError> {
    Ok(Json(ctx.core.analyze_summary()?))
}
