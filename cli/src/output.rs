//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use forms_core::{Form, FormResponse, FormResponseView};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn print<T: Serialize + TableView>(&self, data: &T) -> anyhow::Result<()> {
        match self {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
            OutputFormat::Table => println!("{}", data.table()),
        }
        Ok(())
    }
}

/// Rendering as a text table
pub trait TableView {
    fn table(&self) -> String;
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn timestamp(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Tabled)]
struct FormRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Fields")]
    fields: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Form> for FormRow {
    fn from(form: &Form) -> Self {
        Self {
            id: form.id,
            title: form.title.clone(),
            fields: form
                .elements
                .iter()
                .map(|e| e.label.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            updated: timestamp(&form.updated_at),
        }
    }
}

#[derive(Tabled)]
struct ElementRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Element ID")]
    id: i64,
    #[tabled(rename = "Type")]
    label: &'static str,
    #[tabled(rename = "Input")]
    input: &'static str,
}

#[derive(Tabled)]
struct ResponseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Form")]
    form: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
    #[tabled(rename = "Answers")]
    answers: String,
}

fn answers(response: &FormResponse) -> String {
    response
        .responses
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl TableView for Vec<Form> {
    fn table(&self) -> String {
        render(self.iter().map(FormRow::from).collect())
    }
}

impl TableView for Form {
    fn table(&self) -> String {
        let rows = self
            .elements
            .iter()
            .enumerate()
            .map(|(position, e)| ElementRow {
                position,
                id: e.id.value(),
                label: e.label.as_str(),
                input: e.widget().kind.input_type(),
            })
            .collect();
        format!("{} (#{})\n{}", self.title.bold(), self.id, render(rows))
    }
}

impl TableView for Vec<FormResponseView> {
    fn table(&self) -> String {
        render(
            self.iter()
                .map(|v| ResponseRow {
                    id: v.response.id,
                    form: format!("{} (#{})", v.form.title, v.response.form_id),
                    submitted: timestamp(&v.response.created_at),
                    answers: answers(&v.response),
                })
                .collect(),
        )
    }
}

impl TableView for FormResponse {
    fn table(&self) -> String {
        render(vec![ResponseRow {
            id: self.id,
            form: format!("#{}", self.form_id),
            submitted: timestamp(&self.created_at),
            answers: answers(self),
        }])
    }
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn info(msg: &str) {
    println!("{}", msg.dimmed());
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
