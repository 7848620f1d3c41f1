//! Form response endpoints

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use forms_core::{FormResponse, FormResponseView, RecordResponse};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/", get(list_responses).post(record_response))
}

/// Record a submission
#[utoipa::path(
    post,
    path = "/api/form-responses",
    request_body = RecordResponse,
    responses(
        (status = 201, description = "Response recorded", body = FormResponse),
        (status = 400, description = "Missing formId or responses", body = ErrorResponse),
        (status = 404, description = "Form does not exist", body = ErrorResponse)
    ),
    tag = "responses"
)]
pub async fn record_response(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<RecordResponse>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<FormResponse>>), ApiError> {
    let Json(request) = body?;
    let response = state.responses.record_response(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))))
}

/// List responses, newest first, with their form titles
#[utoipa::path(
    get,
    path = "/api/form-responses",
    params(ResponsesQuery),
    responses((status = 200, body = [FormResponseView])),
    tag = "responses"
)]
pub async fn list_responses(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<ResponsesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<FormResponseView>>>, ApiError> {
    let Query(query) = query?;
    let views = state.responses.list_responses(query.form_id).await;
    Ok(Json(ApiResponse::success(views)))
}
