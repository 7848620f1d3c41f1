//! Inbound ports
//!
//! Hexagonal architecture: what a builder session saves through. The
//! in-process [`FormGateway`](crate::application::FormGateway) implements
//! it, and so does any remote client that talks to the HTTP API.

use async_trait::async_trait;

use crate::domain::{Form, FormElement, FormId};
use crate::error::Result;

#[async_trait]
pub trait FormWriter: Send + Sync {
    /// Create a form from a title and an ordered element list
    async fn create_form(&self, title: &str, elements: Vec<FormElement>) -> Result<Form>;

    /// Replace an existing form's title and elements
    async fn update_form(&self, id: FormId, title: &str, elements: Vec<FormElement>) -> Result<Form>;
}
