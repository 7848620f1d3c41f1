//! Outbound ports (Repository traits)
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;

use crate::domain::{Form, FormDraft, FormId, FormResponse, FormResponseView, ResponseMap};
use crate::error::FormsError;

/// Repository result type
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for FormsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => FormsError::NotFound(what),
            RepositoryError::Storage(msg) => FormsError::Storage(msg),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Storage(format!("serialization: {err}"))
    }
}

/// Form repository port
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Insert a new form; storage assigns id and timestamps
    async fn insert_form(&self, draft: &FormDraft) -> RepoResult<Form>;

    /// Overwrite title and elements wholesale
    async fn replace_form(&self, id: FormId, draft: &FormDraft) -> RepoResult<Form>;

    /// Find form by id
    async fn find_form(&self, id: FormId) -> RepoResult<Option<Form>>;

    /// All forms, newest id first
    async fn list_forms(&self) -> RepoResult<Vec<Form>>;

    /// Delete a form and every response that references it
    async fn delete_form(&self, id: FormId) -> RepoResult<()>;
}

/// Response repository port
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Store a submission verbatim. `NotFound` if the form does not exist.
    async fn insert_response(&self, form_id: FormId, responses: &ResponseMap) -> RepoResult<FormResponse>;

    /// Responses (optionally for one form), newest first, with form titles
    async fn list_responses(&self, form_id: Option<FormId>) -> RepoResult<Vec<FormResponseView>>;
}
