//! OpenForms CLI
//!
//! Command-line interface for an OpenForms server.
//!
//! # Usage
//!
//! ```bash
//! openforms forms create --title "Contact" --field "Text Field" --field Email
//! openforms forms edit 1 --add Checkbox --move 2:0 --remove 3
//! openforms forms fill 1 --answer 1=Alice --answer 2=alice@example.com
//! openforms responses list --form-id 1 --format json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use forms_core::{ElementId, ElementLabel, FormId};

mod args;
mod commands;
mod config;
mod output;

use args::{AnswerArg, MoveArg};

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "openforms")]
#[command(author = "OpenForms")]
#[command(version)]
#[command(about = "OpenForms Command Line Interface", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "OPENFORMS_API_URL")]
    api_url: Option<String>,

    /// Output format [default: table]
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, edit and fill forms
    Forms {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// Browse collected responses
    Responses {
        #[command(subcommand)]
        action: ResponseCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum FormCommands {
    /// List all forms, newest first
    List,
    /// Show a form and its fields in order
    Get { id: FormId },
    /// Delete a form and its responses
    Delete { id: FormId },
    /// Create a form from a list of field types
    Create {
        #[arg(long)]
        title: String,
        /// Field type to append (repeatable, in order)
        #[arg(long = "field", value_name = "LABEL")]
        fields: Vec<ElementLabel>,
    },
    /// Edit a stored form. Adds are applied first, then moves, then removes.
    Edit {
        id: FormId,
        #[arg(long)]
        title: Option<String>,
        /// Append a field type
        #[arg(long = "add", value_name = "LABEL")]
        add: Vec<ElementLabel>,
        /// Drag the field at position FROM to position TO (0-based)
        #[arg(long = "move", value_name = "FROM:TO")]
        moves: Vec<MoveArg>,
        /// Remove the field with this element id
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<ElementId>,
    },
    /// Submit a response to a form
    Fill {
        id: FormId,
        /// Answer for one field
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<AnswerArg>,
        /// Do not prompt for unanswered fields
        #[arg(long)]
        no_prompt: bool,
    },
}

#[derive(Subcommand)]
enum ResponseCommands {
    /// List responses, newest first
    List {
        #[arg(long)]
        form_id: Option<FormId>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_else(|e| {
        output::warn(&format!("ignoring config: {e:#}"));
        config::Config::default()
    });
    let api_url = cli
        .api_url
        .or(config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let format = cli
        .format
        .or_else(|| {
            let name = config.default_format.as_deref()?;
            output::OutputFormat::from_str(name, true).ok()
        })
        .unwrap_or(output::OutputFormat::Table);

    let client = commands::ApiClient::new(&api_url);

    let result = match cli.command {
        Commands::Forms { action } => commands::forms::handle(action, &client, format).await,
        Commands::Responses { action } => {
            commands::responses::handle(action, &client, format).await
        }
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
