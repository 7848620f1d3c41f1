//! In-memory store (for testing and development)

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::domain::{
    Form, FormDraft, FormId, FormResponse, FormResponseView, FormSummary, ResponseId, ResponseMap,
};
use crate::ports::{FormRepository, RepoResult, RepositoryError, ResponseRepository};

#[derive(Default)]
struct Tables {
    forms: BTreeMap<FormId, Form>,
    responses: BTreeMap<ResponseId, FormResponse>,
    last_form_id: FormId,
    last_response_id: ResponseId,
}

/// Forms and responses held in one lock so deletes can cascade atomically
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn form_not_found(id: FormId) -> RepositoryError {
    RepositoryError::NotFound(format!("form {id}"))
}

#[async_trait]
impl FormRepository for InMemoryStore {
    async fn insert_form(&self, draft: &FormDraft) -> RepoResult<Form> {
        let mut tables = self.tables.write();
        tables.last_form_id += 1;

        let now = Utc::now();
        let form = Form {
            id: tables.last_form_id,
            title: draft.title().to_string(),
            elements: draft.elements().to_vec(),
            created_at: now,
            updated_at: now,
        };
        tables.forms.insert(form.id, form.clone());
        Ok(form)
    }

    async fn replace_form(&self, id: FormId, draft: &FormDraft) -> RepoResult<Form> {
        let mut tables = self.tables.write();
        let form = tables.forms.get_mut(&id).ok_or_else(|| form_not_found(id))?;

        form.title = draft.title().to_string();
        form.elements = draft.elements().to_vec();
        form.updated_at = Utc::now();
        Ok(form.clone())
    }

    async fn find_form(&self, id: FormId) -> RepoResult<Option<Form>> {
        Ok(self.tables.read().forms.get(&id).cloned())
    }

    async fn list_forms(&self) -> RepoResult<Vec<Form>> {
        Ok(self.tables.read().forms.values().rev().cloned().collect())
    }

    async fn delete_form(&self, id: FormId) -> RepoResult<()> {
        let mut tables = self.tables.write();
        tables.forms.remove(&id).ok_or_else(|| form_not_found(id))?;
        tables.responses.retain(|_, r| r.form_id != id);
        Ok(())
    }
}

#[async_trait]
impl ResponseRepository for InMemoryStore {
    async fn insert_response(&self, form_id: FormId, responses: &ResponseMap) -> RepoResult<FormResponse> {
        let mut tables = self.tables.write();
        if !tables.forms.contains_key(&form_id) {
            return Err(form_not_found(form_id));
        }
        tables.last_response_id += 1;

        let response = FormResponse {
            id: tables.last_response_id,
            form_id,
            responses: responses.clone(),
            created_at: Utc::now(),
        };
        tables.responses.insert(response.id, response.clone());
        Ok(response)
    }

    async fn list_responses(&self, form_id: Option<FormId>) -> RepoResult<Vec<FormResponseView>> {
        let tables = self.tables.read();
        let mut views: Vec<FormResponseView> = tables
            .responses
            .values()
            .filter(|r| form_id.map_or(true, |id| r.form_id == id))
            .filter_map(|r| {
                let form = tables.forms.get(&r.form_id)?;
                Some(FormResponseView {
                    response: r.clone(),
                    form: FormSummary {
                        title: form.title.clone(),
                    },
                })
            })
            .collect();

        views.sort_by(|a, b| {
            b.response
                .created_at
                .cmp(&a.response.created_at)
                .then(b.response.id.cmp(&a.response.id))
        });
        Ok(views)
    }
}
