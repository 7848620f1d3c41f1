//! Form Builder session
//!
//! One user's editing state for a single form: title, ordered elements,
//! and the drag/selection controller. Nothing is persisted until
//! [`FormBuilder::save`] is called.

pub mod drag;

pub use drag::{DragController, DragState, Gesture, GestureOutcome};

use tracing::info;

use crate::domain::{ElementId, ElementLabel, ElementList, Form, FormElement, FormId};
use crate::error::{FormsError, Result};
use crate::ports::FormWriter;

#[derive(Clone, Debug, Default)]
pub struct FormBuilder {
    form_id: Option<FormId>,
    title: String,
    elements: ElementList,
    controller: DragController,
}

impl FormBuilder {
    /// Empty builder for a new form
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder pre-loaded with a stored form; saving updates it in place
    pub fn edit(form: &Form) -> Result<Self> {
        Ok(Self {
            form_id: Some(form.id),
            title: form.title.clone(),
            elements: form.element_list()?,
            controller: DragController::new(),
        })
    }

    pub fn form_id(&self) -> Option<FormId> {
        self.form_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn elements(&self) -> &ElementList {
        &self.elements
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn apply(&mut self, gesture: Gesture) -> Result<GestureOutcome> {
        self.controller.apply(&mut self.elements, gesture)
    }

    /// Drop a palette item onto the list
    pub fn add(&mut self, label: ElementLabel) -> Result<FormElement> {
        self.controller.palette_drop(&mut self.elements, label)
    }

    /// Full drag of the element at `from` to `to`, hovering over every
    /// slot in between the way a pointer would.
    pub fn drag(&mut self, from: usize, to: usize) -> Result<()> {
        if to >= self.elements.len() {
            return Err(FormsError::OutOfRange {
                index: to,
                len: self.elements.len(),
            });
        }
        self.apply(Gesture::PickUp(from))?;

        let steps: Vec<usize> = if to < from {
            (to..from).rev().collect()
        } else {
            (from + 1..=to).collect()
        };
        for index in steps {
            self.apply(Gesture::Hover(index))?;
        }

        self.apply(Gesture::Drop)?;
        Ok(())
    }

    /// Click an element then delete it
    pub fn remove(&mut self, id: ElementId) -> Result<Option<FormElement>> {
        self.apply(Gesture::Click(id))?;
        Ok(self.remove_selected())
    }

    pub fn remove_selected(&mut self) -> Option<FormElement> {
        self.controller.remove_selected(&mut self.elements)
    }

    /// Hand the full current list to the writer. New forms are created,
    /// edited forms are replaced wholesale.
    pub async fn save<W>(&mut self, writer: &W) -> Result<Form>
    where
        W: FormWriter + ?Sized,
    {
        let elements = self.elements.as_slice().to_vec();
        let form = match self.form_id {
            Some(id) => writer.update_form(id, &self.title, elements).await?,
            None => writer.create_form(&self.title, elements).await?,
        };

        info!(form_id = form.id, elements = form.elements.len(), "builder saved form");
        self.form_id = Some(form.id);
        self.title = form.title.clone();
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FormGateway;
    use crate::infrastructure::persistence::InMemoryStore;
    use std::sync::Arc;

    fn labels(builder: &FormBuilder) -> Vec<ElementLabel> {
        builder.elements().iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_drag_down_and_up() {
        let mut builder = FormBuilder::new("Survey");
        for label in [ElementLabel::TextField, ElementLabel::Email, ElementLabel::Dropdown, ElementLabel::Checkbox] {
            builder.add(label).unwrap();
        }

        builder.drag(0, 3).unwrap();
        assert_eq!(
            labels(&builder),
            vec![ElementLabel::Email, ElementLabel::Dropdown, ElementLabel::Checkbox, ElementLabel::TextField]
        );

        builder.drag(3, 0).unwrap();
        assert_eq!(
            labels(&builder),
            vec![ElementLabel::TextField, ElementLabel::Email, ElementLabel::Dropdown, ElementLabel::Checkbox]
        );
        assert!(!builder.controller().is_dragging());
    }

    #[test]
    fn test_drag_out_of_range_leaves_order() {
        let mut builder = FormBuilder::new("Survey");
        builder.add(ElementLabel::TextField).unwrap();
        builder.add(ElementLabel::Email).unwrap();

        assert!(matches!(builder.drag(0, 5), Err(FormsError::OutOfRange { index: 5, len: 2 })));
        assert!(matches!(builder.drag(4, 0), Err(FormsError::OutOfRange { index: 4, len: 2 })));
        assert_eq!(labels(&builder), vec![ElementLabel::TextField, ElementLabel::Email]);
        assert!(!builder.controller().is_dragging());
    }

    #[test]
    fn test_remove_by_click() {
        let mut builder = FormBuilder::new("Survey");
        let a = builder.add(ElementLabel::TextField).unwrap();
        builder.add(ElementLabel::Email).unwrap();

        assert_eq!(builder.remove(a.id).unwrap(), Some(a));
        assert_eq!(labels(&builder), vec![ElementLabel::Email]);
        assert!(builder.remove(a.id).is_err());
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let gateway = FormGateway::new(Arc::new(InMemoryStore::new()));

        let mut builder = FormBuilder::new("Contact");
        builder.add(ElementLabel::TextField).unwrap();
        builder.add(ElementLabel::Email).unwrap();

        let created = builder.save(&gateway).await.unwrap();
        assert_eq!(created.title, "Contact");
        assert_eq!(builder.form_id(), Some(created.id));

        builder.drag(1, 0).unwrap();
        let updated = builder.save(&gateway).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.elements[0].label, ElementLabel::Email);
        assert_eq!(gateway.fetch_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_loaded_form_keeps_ids_unique() {
        let gateway = FormGateway::new(Arc::new(InMemoryStore::new()));
        let mut builder = FormBuilder::new("Contact");
        builder.add(ElementLabel::TextField).unwrap();
        let stored = builder.save(&gateway).await.unwrap();

        let mut editor = FormBuilder::edit(&stored).unwrap();
        let added = editor.add(ElementLabel::Checkbox).unwrap();
        assert!(stored.elements.iter().all(|e| e.id != added.id));
    }

    #[tokio::test]
    async fn test_edit_form_at_max_id_rejects_add() {
        let gateway = FormGateway::new(Arc::new(InMemoryStore::new()));
        let stored = gateway
            .save("Edge", vec![FormElement::new(i64::MAX, ElementLabel::Email)])
            .await
            .unwrap();

        let mut editor = FormBuilder::edit(&stored).unwrap();
        assert!(matches!(editor.add(ElementLabel::TextField), Err(FormsError::Validation(_))));
        assert_eq!(editor.elements().len(), 1);

        editor.set_title("Edge v2");
        let saved = editor.save(&gateway).await.unwrap();
        assert_eq!(saved.elements, stored.elements);
    }

    #[tokio::test]
    async fn test_save_blank_title_fails() {
        let gateway = FormGateway::new(Arc::new(InMemoryStore::new()));
        let mut builder = FormBuilder::new("  ");
        builder.add(ElementLabel::TextField).unwrap();

        assert!(matches!(builder.save(&gateway).await, Err(FormsError::Validation(_))));
        assert_eq!(builder.form_id(), None);
    }
}
