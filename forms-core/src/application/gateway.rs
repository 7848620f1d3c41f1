//! Form Persistence Gateway

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{Form, FormDraft, FormElement, FormId};
use crate::error::{FormsError, Result};
use crate::ports::{FormRepository, FormWriter};

/// Validates and writes form definitions; reads them back.
#[derive(Clone)]
pub struct FormGateway {
    repo: Arc<dyn FormRepository>,
}

impl FormGateway {
    pub fn new(repo: Arc<dyn FormRepository>) -> Self {
        Self { repo }
    }

    /// Create a form. The element sequence is stored verbatim.
    pub async fn save(&self, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        let draft = FormDraft::new(title, elements)?;
        let form = self.repo.insert_form(&draft).await?;
        info!(form_id = form.id, elements = form.elements.len(), "form created");
        Ok(form)
    }

    /// Replace title and elements wholesale. Last writer wins.
    pub async fn update(&self, id: FormId, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        let draft = FormDraft::new(title, elements)?;
        let form = self.repo.replace_form(id, &draft).await?;
        info!(form_id = form.id, elements = form.elements.len(), "form updated");
        Ok(form)
    }

    pub async fn fetch_one(&self, id: FormId) -> Result<Form> {
        self.repo
            .find_form(id)
            .await?
            .ok_or_else(|| FormsError::not_found(format!("form {id}")))
    }

    /// Newest first. A storage failure degrades to an empty list so the
    /// caller shows its empty state; the failure is logged, not returned.
    pub async fn fetch_all(&self) -> Vec<Form> {
        match self.repo.list_forms().await {
            Ok(forms) => forms,
            Err(err) => {
                warn!(error = %err, "listing forms failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Delete a form and its responses
    pub async fn delete(&self, id: FormId) -> Result<()> {
        self.repo.delete_form(id).await?;
        info!(form_id = id, "form deleted");
        Ok(())
    }
}

#[async_trait]
impl FormWriter for FormGateway {
    async fn create_form(&self, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        self.save(title, elements).await
    }

    async fn update_form(&self, id: FormId, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        self.update(id, title, elements).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElementLabel;
    use crate::infrastructure::persistence::InMemoryStore;
    use crate::ports::{RepoResult, RepositoryError};

    fn gateway() -> FormGateway {
        FormGateway::new(Arc::new(InMemoryStore::new()))
    }

    /// Store whose every call fails
    struct BrokenStore;

    #[async_trait]
    impl FormRepository for BrokenStore {
        async fn insert_form(&self, _: &FormDraft) -> RepoResult<Form> {
            Err(RepositoryError::Storage("disk on fire".into()))
        }
        async fn replace_form(&self, _: FormId, _: &FormDraft) -> RepoResult<Form> {
            Err(RepositoryError::Storage("disk on fire".into()))
        }
        async fn find_form(&self, _: FormId) -> RepoResult<Option<Form>> {
            Err(RepositoryError::Storage("disk on fire".into()))
        }
        async fn list_forms(&self) -> RepoResult<Vec<Form>> {
            Err(RepositoryError::Storage("disk on fire".into()))
        }
        async fn delete_form(&self, _: FormId) -> RepoResult<()> {
            Err(RepositoryError::Storage("disk on fire".into()))
        }
    }

    #[tokio::test]
    async fn test_save_contact_form() {
        let gw = gateway();
        let form = gw
            .save(
                "Contact",
                vec![
                    FormElement::new(1, ElementLabel::TextField),
                    FormElement::new(2, ElementLabel::Email),
                ],
            )
            .await
            .unwrap();

        assert_eq!(form.title, "Contact");
        let labels: Vec<_> = form.elements.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![ElementLabel::TextField, ElementLabel::Email]);
    }

    #[tokio::test]
    async fn test_save_then_fetch_round_trip() {
        let gw = gateway();
        let elements = vec![
            FormElement::new(17, ElementLabel::DatePicker),
            FormElement::new(3, ElementLabel::Dropdown),
            FormElement::new(9, ElementLabel::Checkbox),
        ];
        let saved = gw.save("Event", elements.clone()).await.unwrap();

        let fetched = gw.fetch_one(saved.id).await.unwrap();
        assert_eq!(fetched.elements, elements);
    }

    #[tokio::test]
    async fn test_empty_title_persists_nothing() {
        let gw = gateway();
        let result = gw.save("", vec![FormElement::new(1, ElementLabel::Email)]).await;

        assert!(matches!(result, Err(FormsError::Validation(_))));
        assert!(gw.fetch_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale() {
        let gw = gateway();
        let e1 = vec![
            FormElement::new(1, ElementLabel::TextField),
            FormElement::new(2, ElementLabel::Email),
        ];
        let e2 = vec![FormElement::new(7, ElementLabel::Checkbox)];

        let form = gw.save("Survey", e1).await.unwrap();
        gw.update(form.id, "Survey v2", e2.clone()).await.unwrap();

        let fetched = gw.fetch_one(form.id).await.unwrap();
        assert_eq!(fetched.title, "Survey v2");
        assert_eq!(fetched.elements, e2);
    }

    #[tokio::test]
    async fn test_update_missing_form() {
        let gw = gateway();
        let result = gw.update(12, "Nope", vec![]).await;
        assert!(matches!(result, Err(FormsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_element_ids_rejected() {
        let gw = gateway();
        let result = gw
            .save(
                "Dupes",
                vec![
                    FormElement::new(1, ElementLabel::TextField),
                    FormElement::new(1, ElementLabel::Email),
                ],
            )
            .await;
        assert!(matches!(result, Err(FormsError::Validation(_))));
    }

    #[tokio::test]
    async fn test_fetch_and_delete_missing() {
        let gw = gateway();
        assert!(matches!(gw.fetch_one(5).await, Err(FormsError::NotFound(_))));
        assert!(matches!(gw.delete(5).await, Err(FormsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_newest_first() {
        let gw = gateway();
        let first = gw.save("First", vec![]).await.unwrap();
        let second = gw.save("Second", vec![]).await.unwrap();

        let ids: Vec<_> = gw.fetch_all().await.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_storage_failures() {
        let gw = FormGateway::new(Arc::new(BrokenStore));

        assert!(gw.fetch_all().await.is_empty());
        assert!(matches!(gw.save("T", vec![]).await, Err(FormsError::Storage(_))));
        assert!(matches!(gw.update(1, "T", vec![]).await, Err(FormsError::Storage(_))));
        assert!(matches!(gw.fetch_one(1).await, Err(FormsError::Storage(_))));
        assert!(matches!(gw.delete(1).await, Err(FormsError::Storage(_))));
    }
}
