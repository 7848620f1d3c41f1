//! API Models

use forms_core::{FormElement, FormId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Standard API response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ============ Forms ============

/// Form create / update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FormPayload {
    #[serde(default)]
    pub title: String,
    /// Ordered; stored exactly as given. Missing or `null` means no elements.
    #[serde(default)]
    pub elements: Option<Vec<FormElement>>,
}

/// Body returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Deleted {
    pub id: FormId,
}

/// `DELETE /api/forms?id=N`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Form id
    pub id: Option<String>,
}

// ============ Responses ============

/// `GET /api/form-responses` filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResponsesQuery {
    /// Only responses for this form
    pub form_id: Option<FormId>,
}
