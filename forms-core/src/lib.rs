//! OpenForms Core
//!
//! Dynamic form builder: compose a form from a fixed palette of field
//! types, reorder fields by drag and drop, persist the definition, and
//! collect responses keyed by field id.
//!
//! ## Architecture
//!
//! - **Domain Layer**: element registry, ordered element list, forms and responses
//! - **Builder**: editing session with the drag-reorder controller
//! - **Draft**: fill-in session that renders fields and collects answers
//! - **Application Layer**: form persistence gateway, response collector
//! - **Ports Layer**: repository and writer traits
//! - **Infrastructure Layer**: in-memory and SQLite stores
//!
//! ## Ordering
//!
//! The element sequence a form is saved with is the sequence it is read
//! back with. Reordering is array-move: remove at `from`, insert at `to`.

pub mod application;
pub mod builder;
pub mod domain;
pub mod draft;
pub mod error;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{FormGateway, RecordResponse, ResponseCollector};
pub use builder::{DragController, DragState, FormBuilder, Gesture, GestureOutcome};
pub use domain::{
    palette, ElementId, ElementLabel, ElementList, FieldWidget, Form, FormDraft, FormElement,
    FormId, FormResponse, FormResponseView, FormSummary, ResponseId, ResponseMap, ValueKind,
    WidgetKind,
};
pub use draft::{Answer, RenderedField, ResponseDraft};
pub use error::{FormsError, Result};
pub use infrastructure::persistence::{InMemoryStore, SqliteStore};
pub use ports::{FormRepository, FormWriter, RepositoryError, ResponseRepository};
