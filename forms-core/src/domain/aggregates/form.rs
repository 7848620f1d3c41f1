//! Form Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::element_list::ElementList;
use crate::domain::value_objects::{ElementId, FormElement};
use crate::error::{FormsError, Result};

/// Storage-issued form id
pub type FormId = i64;

/// A stored form definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Form {
    pub id: FormId,
    pub title: String,
    pub elements: Vec<FormElement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Load the elements into an editable list
    pub fn element_list(&self) -> Result<ElementList> {
        ElementList::from_elements(self.elements.clone())
    }

    pub fn element(&self, id: ElementId) -> Option<&FormElement> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Validated title and element list, ready to be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    title: String,
    elements: Vec<FormElement>,
}

impl FormDraft {
    /// Trims the title and checks it is non-empty and that element ids
    /// are unique.
    pub fn new(title: &str, elements: Vec<FormElement>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FormsError::validation("title is required"));
        }

        let elements = ElementList::from_elements(elements)?.into_elements();

        Ok(Self {
            title: title.to_string(),
            elements,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }
}
