//! Session endpoints: call selection and the analysis workflow.
//!
//! - `GET /api/session`: current snapshot
//! - `POST /api/session/select/:id`: select a call, restarting the workflow
//! - `POST /api/session/workflow`: apply a workflow event
//! - `POST /api/session/reset`: fresh batch, nothing selected

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::SessionSnapshot;
use crate::workflow::WorkflowEvent;

/// `GET /api/session`
pub async fn get(State(ctx): State<ApiContext>) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(ctx.core.snapshot()?))
}

/// `POST /api/session/select/:id`
pub async fn select(
    State(ctx): State<ApiContext>,
    Path(call_id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(ctx.core.select_call(&call_id)?))
}

#[derive(Debug, Deserialize)]
pub struct WorkflowRequest {
    pub event: WorkflowEvent,
}

/// `POST /api/session/workflow`: body `{"event": "start_analysis"}`.
pub async fn workflow(
    State(ctx): State<ApiContext>,
    request: Result<Json<WorkflowRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Json(request) = request?;
    Ok(Json(ctx.core.apply_event(request.event)?))
}

/// `POST /api/session/reset`
pub async fn reset(State(ctx): State<ApiContext>) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(ctx.core.reset()?))
}
