//! OpenForms Domain Model
//!
//! - **Value Objects**: ElementLabel (with its registry entry), ElementId,
//!   FormElement
//! - **Aggregates**: ElementList, Form, FormResponse

pub mod aggregates;
pub mod value_objects;

pub use aggregates::*;
pub use value_objects::*;
