//! Response commands

use forms_core::FormResponseView;

use super::ApiClient;
use crate::{output, output::OutputFormat, ResponseCommands};

pub async fn handle(action: ResponseCommands, client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        ResponseCommands::List { form_id } => {
            let path = match form_id {
                Some(id) => format!("/api/form-responses?formId={id}"),
                None => "/api/form-responses".to_string(),
            };
            let views: Vec<FormResponseView> = client.get(&path).await?;
            if views.is_empty() {
                output::info("No submissions yet");
            } else {
                format.print(&views)?;
            }
        }
    }
    Ok(())
}
