//! Element Registry
//!
//! The palette of field types a form can be built from, and the static
//! table mapping each one to its rendering contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormsError;

/// Field type label
///
/// Serialized with the display names the builder palette shows
/// (`"Text Field"`, `"Date Picker"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ElementLabel {
    #[serde(rename = "Text Field")]
    TextField,
    Email,
    Dropdown,
    Checkbox,
    #[serde(rename = "Date Picker")]
    DatePicker,
}

impl ElementLabel {
    /// Palette order
    pub const ALL: [ElementLabel; 5] = [
        ElementLabel::TextField,
        ElementLabel::Email,
        ElementLabel::Dropdown,
        ElementLabel::Checkbox,
        ElementLabel::DatePicker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextField => "Text Field",
            Self::Email => "Email",
            Self::Dropdown => "Dropdown",
            Self::Checkbox => "Checkbox",
            Self::DatePicker => "Date Picker",
        }
    }

    /// Rendering contract for this label
    pub fn widget(self) -> &'static FieldWidget {
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for ElementLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementLabel {
    type Err = FormsError;

    /// Accepts the display name as well as loose spellings such as
    /// `text-field`, `date_picker` or `DATEPICKER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(label) = Self::ALL.iter().find(|l| l.as_str() == s) {
            return Ok(*label);
        }

        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "textfield" | "text" => Ok(Self::TextField),
            "email" => Ok(Self::Email),
            "dropdown" | "select" => Ok(Self::Dropdown),
            "checkbox" => Ok(Self::Checkbox),
            "datepicker" | "date" => Ok(Self::DatePicker),
            _ => Err(FormsError::validation(format!("unknown element label: {s}"))),
        }
    }
}

/// Input widget a field is rendered with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    TextInput,
    EmailInput,
    Select,
    Checkbox,
    DateInput,
}

impl WidgetKind {
    /// HTML input type attribute (or `select`)
    pub fn input_type(self) -> &'static str {
        match self {
            Self::TextInput => "text",
            Self::EmailInput => "email",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::DateInput => "date",
        }
    }
}

/// Kind of value a widget produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Free string
    Text,
    /// Stored as `"true"` / `"false"`
    Boolean,
}

/// Rendering contract for one field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldWidget {
    pub label: ElementLabel,
    pub kind: WidgetKind,
    pub value_kind: ValueKind,
    pub placeholder: Option<&'static str>,
    pub options: &'static [&'static str],
}

const DROPDOWN_OPTIONS: &[&str] = &["Option 1", "Option 2", "Option 3"];

// Indexed by `ElementLabel as usize`.
static REGISTRY: [FieldWidget; 5] = [
    FieldWidget {
        label: ElementLabel::TextField,
        kind: WidgetKind::TextInput,
        value_kind: ValueKind::Text,
        placeholder: Some("Enter text"),
        options: &[],
    },
    FieldWidget {
        label: ElementLabel::Email,
        kind: WidgetKind::EmailInput,
        value_kind: ValueKind::Text,
        placeholder: Some("Enter email"),
        options: &[],
    },
    FieldWidget {
        label: ElementLabel::Dropdown,
        kind: WidgetKind::Select,
        value_kind: ValueKind::Text,
        placeholder: None,
        options: DROPDOWN_OPTIONS,
    },
    FieldWidget {
        label: ElementLabel::Checkbox,
        kind: WidgetKind::Checkbox,
        value_kind: ValueKind::Boolean,
        placeholder: None,
        options: &[],
    },
    FieldWidget {
        label: ElementLabel::DatePicker,
        kind: WidgetKind::DateInput,
        value_kind: ValueKind::Text,
        placeholder: None,
        options: &[],
    },
];

/// All widgets in palette order
pub fn palette() -> &'static [FieldWidget] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_indexed_by_label() {
        for label in ElementLabel::ALL {
            assert_eq!(label.widget().label, label);
        }
        assert_eq!(palette().len(), ElementLabel::ALL.len());
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(ElementLabel::Checkbox.widget().value_kind, ValueKind::Boolean);
        for label in [
            ElementLabel::TextField,
            ElementLabel::Email,
            ElementLabel::Dropdown,
            ElementLabel::DatePicker,
        ] {
            assert_eq!(label.widget().value_kind, ValueKind::Text);
        }
    }

    #[test]
    fn test_dropdown_options() {
        assert_eq!(
            ElementLabel::Dropdown.widget().options,
            &["Option 1", "Option 2", "Option 3"]
        );
        assert!(ElementLabel::Email.widget().options.is_empty());
    }

    #[test]
    fn test_label_serde_uses_display_names() {
        let json = serde_json::to_string(&ElementLabel::DatePicker).unwrap();
        assert_eq!(json, "\"Date Picker\"");

        let label: ElementLabel = serde_json::from_str("\"Text Field\"").unwrap();
        assert_eq!(label, ElementLabel::TextField);

        assert!(serde_json::from_str::<ElementLabel>("\"Signature\"").is_err());
    }

    #[test]
    fn test_label_from_str() {
        assert_eq!("Text Field".parse::<ElementLabel>().unwrap(), ElementLabel::TextField);
        assert_eq!("date-picker".parse::<ElementLabel>().unwrap(), ElementLabel::DatePicker);
        assert_eq!("CHECKBOX".parse::<ElementLabel>().unwrap(), ElementLabel::Checkbox);
        assert!(matches!(
            "rating".parse::<ElementLabel>(),
            Err(FormsError::Validation(_))
        ));
    }
}
