//! CLI Commands

pub mod config;
pub mod forms;
pub mod responses;

use async_trait::async_trait;
use forms_core::{Form, FormElement, FormId, FormWriter, FormsError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response envelope written by the server
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(match self.error {
                Some(err) => error_from_code(&err.code, err.message),
                None => FormsError::Storage("request failed without an error body".into()),
            });
        }
        self.data
            .ok_or_else(|| FormsError::Storage("no data in response".into()))
    }
}

/// Map an API error code back onto the core error kinds
fn error_from_code(code: &str, message: String) -> FormsError {
    match code {
        "VALIDATION_ERROR" | "OUT_OF_RANGE" => FormsError::Validation(message),
        "NOT_FOUND" => FormsError::NotFound(message),
        _ => FormsError::Storage(message),
    }
}

fn transport(err: reqwest::Error) -> FormsError {
    FormsError::Storage(format!("request failed: {err}"))
}

#[derive(Serialize)]
struct FormBody<'a> {
    title: &'a str,
    elements: Vec<FormElement>,
}

/// API client
pub struct ApiClient {
    pub base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        let envelope: Envelope<T> = resp.json().await.map_err(|e| {
            FormsError::Storage(format!("unexpected response ({status}): {e}"))
        })?;
        envelope.into_result()
    }
}

#[async_trait]
impl FormWriter for ApiClient {
    async fn create_form(&self, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        self.post("/api/forms", &FormBody { title, elements }).await
    }

    async fn update_form(&self, id: FormId, title: &str, elements: Vec<FormElement>) -> Result<Form> {
        self.put(&format!("/api/forms/{id}"), &FormBody { title, elements }).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ApiClient;
    use openforms_api::{build_router, ApiState};

    /// Serve an in-memory API on a random local port
    pub async fn spawn_server() -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(ApiState::in_memory());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ApiClient::new(&format!("http://{addr}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::spawn_server;
    use super::*;
    use forms_core::{ElementLabel, FormBuilder};

    #[test]
    fn test_envelope_errors_keep_their_kind() {
        let env: Envelope<Form> = serde_json::from_str(
            r#"{"success":false,"error":{"code":"NOT_FOUND","message":"not found: form 9"}}"#,
        )
        .unwrap();
        assert_eq!(
            env.into_result(),
            Err(FormsError::NotFound("not found: form 9".into()))
        );

        let env: Envelope<Form> = serde_json::from_str(
            r#"{"success":false,"error":{"code":"VALIDATION_ERROR","message":"title is required"}}"#,
        )
        .unwrap();
        assert!(matches!(env.into_result(), Err(FormsError::Validation(_))));
    }

    #[test]
    fn test_envelope_without_data() {
        let env: Envelope<Form> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(env.into_result(), Err(FormsError::Storage(_))));
    }

    #[tokio::test]
    async fn test_builder_saves_through_api() {
        let client = spawn_server().await;

        let mut builder = FormBuilder::new("Contact");
        builder.add(ElementLabel::TextField).unwrap();
        builder.add(ElementLabel::Email).unwrap();
        let created = builder.save(&client).await.unwrap();

        builder.drag(1, 0).unwrap();
        let updated = builder.save(&client).await.unwrap();
        assert_eq!(updated.id, created.id);

        let stored: Form = client.get(&format!("/api/forms/{}", created.id)).await.unwrap();
        let labels: Vec<_> = stored.elements.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![ElementLabel::Email, ElementLabel::TextField]);
    }

    #[tokio::test]
    async fn test_api_errors_map_to_core_errors() {
        let client = spawn_server().await;

        let missing = client.get::<Form>("/api/forms/404").await;
        assert!(matches!(missing, Err(FormsError::NotFound(_))));

        let blank = client.create_form("  ", vec![]).await;
        assert!(matches!(blank, Err(FormsError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let result = client.get::<Vec<Form>>("/api/forms").await;
        assert!(matches!(result, Err(FormsError::Storage(_))));
    }
}
