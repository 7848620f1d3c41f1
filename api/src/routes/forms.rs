//! Form definition endpoints

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use forms_core::{Form, FormId, FormsError};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_forms).post(create_form).delete(delete_form_by_query))
        .route("/:id", get(get_form).put(update_form).delete(delete_form))
}

/// List forms, newest first
#[utoipa::path(
    get,
    path = "/api/forms",
    responses((status = 200, description = "Forms, newest first; empty if storage is unavailable", body = [Form])),
    tag = "forms"
)]
pub async fn list_forms(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<Vec<Form>>> {
    Json(ApiResponse::success(state.forms.fetch_all().await))
}

/// Create a form
#[utoipa::path(
    post,
    path = "/api/forms",
    request_body = FormPayload,
    responses(
        (status = 201, description = "Form created", body = Form),
        (status = 400, description = "Missing title or malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<FormPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Form>>), ApiError> {
    let Json(payload) = body?;
    let elements = payload.elements.unwrap_or_default();
    let form = state.forms.save(&payload.title, elements).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(form))))
}

/// Get form by id
#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    params(("id" = i64, Path, description = "Form id")),
    responses(
        (status = 200, body = Form),
        (status = 404, body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn get_form(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<FormId>, PathRejection>,
) -> Result<Json<ApiResponse<Form>>, ApiError> {
    let Path(id) = id?;
    let form = state.forms.fetch_one(id).await?;
    Ok(Json(ApiResponse::success(form)))
}

/// Replace a form's title and elements
#[utoipa::path(
    put,
    path = "/api/forms/{id}",
    params(("id" = i64, Path, description = "Form id")),
    request_body = FormPayload,
    responses(
        (status = 200, body = Form),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn update_form(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<FormId>, PathRejection>,
    body: Result<Json<FormPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<Form>>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = body?;
    let elements = payload.elements.unwrap_or_default();
    let form = state.forms.update(id, &payload.title, elements).await?;
    Ok(Json(ApiResponse::success(form)))
}

/// Delete a form and its responses
#[utoipa::path(
    delete,
    path = "/api/forms/{id}",
    params(("id" = i64, Path, description = "Form id")),
    responses(
        (status = 200, body = Deleted),
        (status = 404, body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn delete_form(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<FormId>, PathRejection>,
) -> Result<Json<ApiResponse<Deleted>>, ApiError> {
    let Path(id) = id?;
    state.forms.delete(id).await?;
    Ok(Json(ApiResponse::success(Deleted { id })))
}

/// Delete a form named by the `id` query parameter
#[utoipa::path(
    delete,
    path = "/api/forms",
    params(DeleteQuery),
    responses(
        (status = 200, body = Deleted),
        (status = 400, description = "Missing or invalid id", body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "forms"
)]
pub async fn delete_form_by_query(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Deleted>>, ApiError> {
    let Query(query) = query?;
    let raw = query
        .id
        .ok_or_else(|| FormsError::validation("form id is required"))?;
    let id: FormId = raw
        .trim()
        .parse()
        .map_err(|_| FormsError::validation(format!("invalid form id: {raw}")))?;

    state.forms.delete(id).await?;
    Ok(Json(ApiResponse::success(Deleted { id })))
}
