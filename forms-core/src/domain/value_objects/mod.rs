//! Forms value objects

pub mod element;
pub mod label;

pub use element::{ElementId, FormElement};
pub use label::{palette, ElementLabel, FieldWidget, ValueKind, WidgetKind};
