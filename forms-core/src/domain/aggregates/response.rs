//! Form responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::form::FormId;

pub type ResponseId = i64;

/// Answers keyed by element id (decimal string)
pub type ResponseMap = BTreeMap<String, String>;

/// A stored submission. References its form by id only; later edits to
/// the form do not touch it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormResponse {
    pub id: ResponseId,
    pub form_id: FormId,
    pub responses: ResponseMap,
    pub created_at: DateTime<Utc>,
}

/// Parent form fields shown next to a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormSummary {
    pub title: String,
}

/// Read-only listing projection: a response joined with its form title
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormResponseView {
    #[serde(flatten)]
    pub response: FormResponse,
    pub form: FormSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_json_shape() {
        let view = FormResponseView {
            response: FormResponse {
                id: 3,
                form_id: 1,
                responses: ResponseMap::from([("101".to_string(), "Alice".to_string())]),
                created_at: Utc::now(),
            },
            form: FormSummary {
                title: "Contact".into(),
            },
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["formId"], 1);
        assert_eq!(json["responses"]["101"], "Alice");
        assert_eq!(json["form"]["title"], "Contact");
    }
}
