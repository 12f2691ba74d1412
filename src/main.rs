//! CLI entry point for `email-triage`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use email_triage::config::{self, Config};
use email_triage::{
    ClassificationClient, EmailClassification, FileStorage, GeminiBackend, History, ParsedEmail,
    parse_email_content,
};

#[derive(Parser)]
#[command(
    name = "email-triage",
    version,
    about = "Classify and triage emails with a generative-AI backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Model identifier, overriding the configured one
    #[arg(long, global = true, env = "EMAIL_TRIAGE_MODEL")]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the sender, subject and body found in an email
    Parse {
        /// Email text file (stdin when omitted)
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Classify an email and record it in history
    Classify {
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Do not record the result in history
        #[arg(long)]
        no_history: bool,
    },
    /// Draft a reply to an email
    Draft {
        file: Option<PathBuf>,
        /// Reuse the email and classification of a history entry
        #[arg(long, conflicts_with = "file")]
        entry: Option<String>,
    },
    /// List the action items in an email
    Actions {
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Inspect or clear classification history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Suggest recipients matching typed text
    Recipients {
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List entries, newest first
    List,
    /// Show one entry in full
    Show { id: String },
    /// Delete all entries
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = config::read_config();
    let mut config = match &loaded {
        Ok(Some((_, cfg))) => cfg.clone(),
        _ => Config::default(),
    };
    if let Some(model) = cli.model {
        config.backend.model = model;
    }

    // Config has to be read before the subscriber exists; report afterwards.
    init_logging(&config, cli.verbose);
    match &loaded {
        Ok(Some((path, _))) => tracing::info!(path = %path.display(), "Loaded config"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Using default config"),
    }

    match cli.command {
        Commands::Parse { file, json } => cmd_parse(file.as_deref(), json),
        Commands::Classify {
            file,
            json,
            no_history,
        } => cmd_classify(&config, file.as_deref(), json, no_history).await,
        Commands::Draft { file, entry } => cmd_draft(&config, file.as_deref(), entry).await,
        Commands::Actions { file, json } => cmd_actions(&config, file.as_deref(), json).await,
        Commands::History { action } => cmd_history(&config, action),
        Commands::Recipients { query } => {
            for recipient in config.recipient_set().suggest(&query) {
                println!("{recipient}");
            }
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber on stderr.
fn init_logging(config: &Config, verbose: u8) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = match verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_email(file: Option<&Path>, action: &str) -> anyhow::Result<String> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read email from stdin")?;
            buf
        }
    };
    if content.trim().is_empty() {
        bail!("Please enter email content to {action}.");
    }
    Ok(content)
}

fn build_client(config: &Config) -> anyhow::Result<ClassificationClient<GeminiBackend>> {
    let api_key = config.backend.resolve_api_key().with_context(|| {
        format!(
            "No API key configured; set backend.api_key or one of {:?}",
            config::API_KEY_ENVS
        )
    })?;
    let backend = GeminiBackend::new(
        api_key,
        config.backend.endpoint.clone(),
        config.backend.timeout(),
    )?;
    Ok(ClassificationClient::new(backend)
        .with_model(config.backend.model.clone())
        .with_recipients(config.recipient_set()))
}

fn open_history(config: &Config) -> History<FileStorage> {
    History::load(FileStorage::new(config::history_file_path(config)))
}

fn cmd_parse(file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let parsed = parse_email_content(&read_email(file, "parse")?);
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print_parsed(&parsed);
    }
    Ok(())
}

async fn cmd_classify(
    config: &Config,
    file: Option<&Path>,
    json: bool,
    no_history: bool,
) -> anyhow::Result<()> {
    let content = read_email(file, "classify")?;
    let client = build_client(config)?;
    let classification = client.classify(&content).await?;

    if !no_history {
        let mut history = open_history(config);
        let entry = history.append(content, classification.clone())?;
        tracing::debug!(id = %entry.id, "Saved to history");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        print_classification(&classification);
    }
    Ok(())
}

async fn cmd_draft(
    config: &Config,
    file: Option<&Path>,
    entry: Option<String>,
) -> anyhow::Result<()> {
    let client = build_client(config)?;

    let (content, classification) = if let Some(id) = entry {
        let history = open_history(config);
        let entry = history
            .get(&id)
            .with_context(|| format!("No history entry with id {id}"))?;
        (entry.email_content.clone(), entry.classification.clone())
    } else {
        let content = read_email(file, "draft a response for")?;
        let classification = client.classify(&content).await?;
        (content, classification)
    };

    let draft = client
        .generate_response_draft(&content, &classification)
        .await?;
    println!("{draft}");
    Ok(())
}

async fn cmd_actions(config: &Config, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let content = read_email(file, "extract action items from")?;
    let items = build_client(config)?.extract_action_items(&content).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No action items found.");
    } else {
        for item in &items {
            println!("- {item}");
        }
    }
    Ok(())
}

fn cmd_history(config: &Config, action: HistoryAction) -> anyhow::Result<()> {
    let mut history = open_history(config);
    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No history.");
            }
            for entry in history.entries() {
                let parsed = parse_email_content(&entry.email_content);
                let label = if parsed.subject.is_empty() {
                    "(no subject)"
                } else {
                    parsed.subject.as_str()
                };
                println!(
                    "{:<14} {:<24} {:<16} {:<7} {}",
                    entry.id,
                    entry.timestamp,
                    entry.classification.category,
                    entry.classification.priority,
                    label
                );
            }
        }
        HistoryAction::Show { id } => {
            let entry = history
                .get(&id)
                .with_context(|| format!("No history entry with id {id}"))?;
            println!("Recorded:   {}", entry.timestamp);
            print_classification(&entry.classification);
            println!();
            println!("{}", entry.email_content);
        }
        HistoryAction::Clear => {
            let count = history.len();
            history.clear()?;
            println!("Cleared {count} history entries.");
        }
    }
    Ok(())
}

fn print_parsed(parsed: &ParsedEmail) {
    println!("From:    {}", parsed.from);
    println!("Subject: {}", parsed.subject);
    println!();
    println!("{}", parsed.body);
}

fn print_classification(c: &EmailClassification) {
    println!("Category:   {}", c.category);
    println!("Priority:   {}", c.priority);
    println!("Recipient:  {}", c.suggested_recipient);
    println!("Summary:    {}", c.summary);
}
