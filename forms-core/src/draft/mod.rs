//! Response drafts
//!
//! A [`ResponseDraft`] is a fill-in session over one form: it renders each
//! element through the registry and collects type-checked answers into a
//! flat map keyed by element id.

use tracing::debug;

use crate::application::RecordResponse;
use crate::domain::{
    ElementId, FieldWidget, Form, FormElement, FormId, ResponseMap, ValueKind, WidgetKind,
};
use crate::error::{FormsError, Result};

/// A value supplied for one field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Flag(value)
    }
}

/// One element as presented for data entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedField<'a> {
    pub element: FormElement,
    pub widget: &'static FieldWidget,
    /// Current answer, if any
    pub value: Option<&'a str>,
}

impl RenderedField<'_> {
    pub fn id(&self) -> ElementId {
        self.element.id
    }

    pub fn label(&self) -> &'static str {
        self.element.label.as_str()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.widget.placeholder
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.widget.options
    }

    pub fn is_checked(&self) -> bool {
        self.value == Some("true")
    }
}

#[derive(Clone, Debug)]
pub struct ResponseDraft {
    form_id: FormId,
    title: String,
    elements: Vec<FormElement>,
    answers: ResponseMap,
}

impl ResponseDraft {
    pub fn new(form: &Form) -> Self {
        Self {
            form_id: form.id,
            title: form.title.clone(),
            elements: form.elements.clone(),
            answers: ResponseMap::new(),
        }
    }

    pub fn form_id(&self) -> FormId {
        self.form_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fields in form order
    pub fn fields(&self) -> impl Iterator<Item = RenderedField<'_>> + '_ {
        self.elements.iter().map(|element| RenderedField {
            element: *element,
            widget: element.widget(),
            value: self.answers.get(&element.id.response_key()).map(String::as_str),
        })
    }

    pub fn field(&self, id: ElementId) -> Option<RenderedField<'_>> {
        self.fields().find(|f| f.id() == id)
    }

    /// Elements that have no answer yet
    pub fn unanswered(&self) -> impl Iterator<Item = &FormElement> + '_ {
        self.elements
            .iter()
            .filter(|e| !self.answers.contains_key(&e.id.response_key()))
    }

    pub fn answers(&self) -> &ResponseMap {
        &self.answers
    }

    /// Set the answer for one element, checked against its widget
    pub fn answer(&mut self, id: ElementId, value: impl Into<Answer>) -> Result<()> {
        let element = self.element(id)?;
        let widget = element.widget();

        let stored = match (widget.value_kind, value.into()) {
            (ValueKind::Boolean, Answer::Flag(flag)) => flag.to_string(),
            (ValueKind::Boolean, Answer::Text(text)) => {
                return Err(FormsError::validation(format!(
                    "{} expects true or false, got {text:?}",
                    element.label
                )))
            }
            (ValueKind::Text, Answer::Flag(_)) => {
                return Err(FormsError::validation(format!(
                    "{} expects text, got a boolean",
                    element.label
                )))
            }
            (ValueKind::Text, Answer::Text(text)) => {
                if widget.kind == WidgetKind::Select && !widget.options.contains(&text.as_str()) {
                    return Err(FormsError::validation(format!(
                        "{text:?} is not one of {}",
                        widget.options.join(", ")
                    )));
                }
                text
            }
        };

        debug!(element_id = %id, value = %stored, "answer set");
        self.answers.insert(id.response_key(), stored);
        Ok(())
    }

    /// Parse raw user input for one element, then [`answer`](Self::answer)
    pub fn answer_text(&mut self, id: ElementId, raw: &str) -> Result<()> {
        let widget = self.element(id)?.widget();

        let value = match widget.kind {
            WidgetKind::Checkbox => Answer::Flag(parse_flag(raw)?),
            WidgetKind::Select => {
                let raw = raw.trim();
                // Case-insensitive match against the option list
                let option = widget
                    .options
                    .iter()
                    .find(|o| o.eq_ignore_ascii_case(raw))
                    .map_or(raw, |o| *o);
                Answer::from(option)
            }
            _ => Answer::from(raw),
        };
        self.answer(id, value)
    }

    pub fn clear(&mut self, id: ElementId) -> Option<String> {
        self.answers.remove(&id.response_key())
    }

    /// Close the draft into a submission
    pub fn finish(self) -> RecordResponse {
        RecordResponse::new(self.form_id, self.answers)
    }

    fn element(&self, id: ElementId) -> Result<FormElement> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .copied()
            .ok_or_else(|| FormsError::not_found(format!("element {id} in form {}", self.form_id)))
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        other => Err(FormsError::validation(format!("expected yes or no, got {other:?}"))),
    }
}
