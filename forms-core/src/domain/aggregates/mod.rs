//! Aggregates

pub mod element_list;
pub mod form;
pub mod response;

pub use element_list::ElementList;
pub use form::{Form, FormDraft, FormId};
pub use response::{FormResponse, FormResponseView, FormSummary, ResponseId, ResponseMap};
