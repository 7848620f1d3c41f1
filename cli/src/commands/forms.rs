//! Form commands

use anyhow::Context;
use colored::Colorize;
use forms_core::{Form, FormBuilder, FormResponse, ResponseDraft};
use serde::Deserialize;
use std::io::{self, BufRead, IsTerminal, Write};

use super::ApiClient;
use crate::{output, output::OutputFormat, FormCommands};

#[derive(Debug, Deserialize)]
pub struct Deleted {
    pub id: i64,
}

pub async fn handle(action: FormCommands, client: &ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        FormCommands::List => {
            let forms: Vec<Form> = client.get("/api/forms").await?;
            if forms.is_empty() {
                output::info("No forms available");
            } else {
                format.print(&forms)?;
            }
        }
        FormCommands::Get { id } => {
            let form: Form = client.get(&format!("/api/forms/{id}")).await?;
            format.print(&form)?;
        }
        FormCommands::Delete { id } => {
            let deleted: Deleted = client.delete(&format!("/api/forms/{id}")).await?;
            output::success(&format!("Deleted form {} and its responses", deleted.id));
        }
        FormCommands::Create { title, fields } => {
            let mut builder = FormBuilder::new(title);
            for label in fields {
                builder.add(label)?;
            }
            let form = builder.save(client).await?;
            output::success(&format!("Created form {}", form.id));
            format.print(&form)?;
        }
        FormCommands::Edit { id, title, add, moves, remove } => {
            let form: Form = client.get(&format!("/api/forms/{id}")).await?;
            let mut builder = FormBuilder::edit(&form)?;

            if let Some(title) = title {
                builder.set_title(title);
            }
            for label in add {
                builder.add(label)?;
            }
            for m in moves {
                builder
                    .drag(m.from, m.to)
                    .with_context(|| format!("moving {}:{}", m.from, m.to))?;
            }
            for element_id in remove {
                builder.remove(element_id)?;
            }

            let form = builder.save(client).await?;
            output::success(&format!("Updated form {}", form.id));
            format.print(&form)?;
        }
        FormCommands::Fill { id, answers, no_prompt } => {
            let form: Form = client.get(&format!("/api/forms/{id}")).await?;
            let mut draft = ResponseDraft::new(&form);

            for answer in answers {
                draft
                    .answer_text(answer.id, &answer.value)
                    .with_context(|| format!("answer for element {}", answer.id))?;
            }
            if !no_prompt && io::stdin().is_terminal() {
                prompt_unanswered(&mut draft, io::stdin().lock(), io::stdout())?;
            }

            let response: FormResponse = client.post("/api/form-responses", &draft.finish()).await?;
            output::success(&format!("Recorded response {} for form {}", response.id, response.form_id));
            format.print(&response)?;
        }
    }
    Ok(())
}

/// Ask for every field without an answer. An empty line skips the field;
/// input the field rejects is asked again.
fn prompt_unanswered<R: BufRead, W: Write>(
    draft: &mut ResponseDraft,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    let pending: Vec<_> = draft.unanswered().map(|e| e.id).collect();
    writeln!(out, "{}", draft.title().bold())?;

    for id in pending {
        let Some(field) = draft.field(id) else { continue };
        let hint = if !field.options().is_empty() {
            format!(" [{}]", field.options().join(" / "))
        } else if field.widget.kind == forms_core::WidgetKind::Checkbox {
            " [y/n]".to_string()
        } else {
            field.placeholder().map(|p| format!(" ({p})")).unwrap_or_default()
        };
        let prompt = format!("{} #{}{}: ", field.label(), id, hint);

        loop {
            write!(out, "{}", prompt.cyan())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            if line.is_empty() {
                break;
            }
            match draft.answer_text(id, line) {
                Ok(()) => break,
                Err(e) => writeln!(out, "  {}", e.to_string().yellow())?,
            }
        }
    }
    Ok(())
}
