//! Response Collector service

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{FormId, FormResponse, FormResponseView, ResponseMap};
use crate::error::{FormsError, Result};
use crate::ports::ResponseRepository;

/// Submission as it arrives from a caller. Both fields are required; they
/// are optional here so a missing one is reported as a validation error
/// rather than a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordResponse {
    pub form_id: Option<FormId>,
    pub responses: Option<ResponseMap>,
}

impl RecordResponse {
    pub fn new(form_id: FormId, responses: ResponseMap) -> Self {
        Self {
            form_id: Some(form_id),
            responses: Some(responses),
        }
    }
}

#[derive(Clone)]
pub struct ResponseCollector {
    repo: Arc<dyn ResponseRepository>,
}

impl ResponseCollector {
    pub fn new(repo: Arc<dyn ResponseRepository>) -> Self {
        Self { repo }
    }

    /// Persist a submission verbatim
    pub async fn record_response(&self, request: RecordResponse) -> Result<FormResponse> {
        let form_id = request
            .form_id
            .ok_or_else(|| FormsError::validation("formId is required"))?;
        let responses = request
            .responses
            .ok_or_else(|| FormsError::validation("responses are required"))?;

        let response = self.repo.insert_response(form_id, &responses).await?;
        info!(
            response_id = response.id,
            form_id,
            answers = response.responses.len(),
            "response recorded"
        );
        Ok(response)
    }

    /// Newest first, optionally for one form. Storage failures degrade to
    /// an empty list.
    pub async fn list_responses(&self, form_id: Option<FormId>) -> Vec<FormResponseView> {
        match self.repo.list_responses(form_id).await {
            Ok(views) => views,
            Err(err) => {
                warn!(error = %err, ?form_id, "listing responses failed, returning empty list");
                Vec::new()
            }
        }
    }
}
