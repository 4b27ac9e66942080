//! Call list endpoints.
//!
//! - `GET /api/calls`: filtered, ordered list
//! - `GET /api/calls/:id`: one call with its voicemail, metadata and analysis
//! - `POST /api/calls/regenerate`: replace the batch

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::dashboard::{self, CallFilter, SortOrder};
use crate::models::{CallRecord, CallStatus};

#[derive(Debug, Default, Deserialize)]
pub struct CallListQuery {
    /// Comma-separated statuses, e.g. `Urgent,In Progress`.
    pub status: Option<String>,
    /// Comma-separated categories, matched case-insensitively.
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
}

impl CallListQuery {
    fn filter(&self) -> Result<CallFilter, ApiError> {
        let statuses = split_list(self.status.as_deref())
            .map(|s| s.parse::<CallStatus>())
            .collect::<Result<Vec<_>, _>>()?;
        let categories = split_list(self.category.as_deref())
            .map(str::to_string)
            .collect();
        Ok(CallFilter {
            statuses,
            categories,
        })
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[derive(Serialize)]
pub struct CallListResponse {
    pub total: usize,
    pub calls: Vec<CallRecord>,
    /// Categories present in the whole batch, for filter menus.
    pub categories: Vec<String>,
}

/// `GET /api/calls`: current batch, filtered and sorted.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<CallListQuery>,
) -> Result<Json<CallListResponse>, ApiError> {
    let filter = query.filter()?;
    let order = query.sort.unwrap_or_default();
    let batch = ctx.core.calls()?;

    let calls: Vec<CallRecord> = dashboard::view(&batch, &filter, order)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CallListResponse {
        total: batch.len(),
        categories: dashboard::categories(&batch),
        calls,
    }))
}

/// `GET /api/calls/:id`: full record for one call.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(call_id): Path<String>,
) -> Result<Json<CallRecord>, ApiError> {
    Ok(Json(ctx.core.find_call(&call_id)?))
}

#[derive(Debug, Default, Deserialize)]
pub struct RegenerateRequest {
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct RegenerateResponse {
    pub count: usize,
    pub calls: Vec<CallRecord>,
}

/// `POST /api/calls/regenerate`: build a fresh batch.
///
/// A request without a JSON body uses the default size. A JSON body that
/// fails to parse is rejected before the session is touched.
pub async fn regenerate(
    State(ctx): State<ApiContext>,
    body: Result<Json<RegenerateRequest>, JsonRejection>,
) -> Result<Json<RegenerateResponse>, ApiError> {
    let request = optional_json(body)?;
    let calls = ctx.core.regenerate(request.count)?;

    Ok(Json(RegenerateResponse {
        count: calls.len(),
        calls: calls.as_ref().clone(),
    }))
}

/// Treat a missing JSON content type as "no body"; every other rejection
/// is a bad request.
fn optional_json<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
