//! Form element value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::label::{ElementLabel, FieldWidget};
use crate::error::FormsError;

/// Element id, unique within one form
///
/// Response maps key answers by the decimal string form of this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ElementId(i64);

impl ElementId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Key used in a response map
    pub fn response_key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| FormsError::validation(format!("invalid element id: {s}")))
    }
}

impl From<i64> for ElementId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One field of a form. Immutable apart from its position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormElement {
    pub id: ElementId,
    pub label: ElementLabel,
}

impl FormElement {
    pub fn new(id: impl Into<ElementId>, label: ElementLabel) -> Self {
        Self { id: id.into(), label }
    }

    pub fn widget(&self) -> &'static FieldWidget {
        self.label.widget()
    }
}
