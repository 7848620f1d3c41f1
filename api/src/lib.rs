//! OpenForms REST API
//!
//! axum adapter over the form persistence gateway and the response
//! collector. Every body is wrapped in [`ApiResponse`].
//!
//! ```text
//! GET    /health
//! GET    /api/forms                 POST /api/forms
//! GET    /api/forms/:id             PUT  /api/forms/:id
//! DELETE /api/forms/:id             DELETE /api/forms?id=N
//! GET    /api/form-responses        POST /api/form-responses
//! GET    /docs
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use forms_core::{
    ElementId, ElementLabel, Form, FormElement, FormGateway, FormRepository, FormResponse,
    FormResponseView, FormSummary, InMemoryStore, RecordResponse, ResponseCollector,
    ResponseRepository,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;
pub use models::*;

/// API state
#[derive(Clone)]
pub struct ApiState {
    pub forms: FormGateway,
    pub responses: ResponseCollector,
}

impl ApiState {
    /// Both services over one store
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: FormRepository + ResponseRepository + 'static,
    {
        Self {
            forms: FormGateway::new(store.clone()),
            responses: ResponseCollector::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OpenForms API",
        version = "0.1.0",
        description = "Dynamic form builder: form definitions and collected responses",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::forms::list_forms,
        routes::forms::create_form,
        routes::forms::get_form,
        routes::forms::update_form,
        routes::forms::delete_form,
        routes::forms::delete_form_by_query,
        routes::responses::record_response,
        routes::responses::list_responses,
    ),
    components(
        schemas(
            ErrorResponse, FormPayload, Deleted,
            Form, FormElement, ElementId, ElementLabel,
            FormResponse, FormResponseView, FormSummary, RecordResponse,
            routes::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forms", description = "Form definitions"),
        (name = "responses", description = "Collected form responses")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .nest("/forms", routes::forms::router())
        .nest("/form-responses", routes::responses::router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::new(build_router(ApiState::in_memory())).unwrap();
        let res = server.get("/health").await;
        res.assert_status_ok();
        assert_eq!(res.json::<Value>()["data"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let server = TestServer::new(build_router(ApiState::in_memory())).unwrap();
        let doc = server.get("/api-docs/openapi.json").await.json::<Value>();
        assert!(doc["paths"]["/api/forms"].is_object());
        assert!(doc["paths"]["/api/forms/{id}"].is_object());
        assert!(doc["paths"]["/api/form-responses"].is_object());
    }
}
