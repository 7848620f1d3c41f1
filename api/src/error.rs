//! HTTP error mapping

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forms_core::FormsError;

use crate::models::ApiResponse;

/// Error returned by handlers; rendered in the standard envelope
#[derive(Debug)]
pub struct ApiError(pub FormsError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            FormsError::Validation(_) | FormsError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            FormsError::NotFound(_) => StatusCode::NOT_FOUND,
            FormsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormsError> for ApiError {
    fn from(err: FormsError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(FormsError::validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(FormsError::validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(FormsError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, %status, "request rejected");
        }

        let body = ApiResponse::<()>::error(self.0.code(), &self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError(FormsError::validation("x")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(FormsError::not_found("x")).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(FormsError::OutOfRange { index: 3, len: 1 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(FormsError::Storage("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
