use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use sparkpost::{Config, Outcome, SparkPost};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line client for the SparkPost API
#[derive(Parser, Debug)]
#[command(name = "sparkpost", version, about, long_about = None)]
struct Args {
    /// API key (falls back to the config file, then SPARKPOST_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API origin
    #[arg(long, global = true)]
    origin: Option<String>,

    /// API version
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// Persist the connection options to the config file
    #[arg(long, global = true)]
    save: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage subaccounts
    Subaccounts {
        #[command(subcommand)]
        action: SubaccountAction,
    },
    /// Manage webhooks
    Webhooks {
        #[command(subcommand)]
        action: WebhookAction,
    },
}

#[derive(Subcommand, Debug)]
enum SubaccountAction {
    List,
    Get { id: String },
    /// Create from a JSON object
    Create { json: String },
    /// Update from a JSON object
    Update { id: String, json: String },
}

#[derive(Subcommand, Debug)]
enum WebhookAction {
    List,
    Get { id: String },
    Create { json: String },
    Update { id: String, json: String },
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("sparkpost started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("sparkpost").join("sparkpost.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".sparkpost").join("sparkpost.log");
    }
    PathBuf::from("sparkpost.log")
}

fn parse_payload(json: &str) -> Result<Value> {
    serde_json::from_str(json).context("Payload is not valid JSON")
}

fn run(client: &SparkPost, command: Command) -> Result<Outcome<Value>> {
    let outcome = match command {
        Command::Subaccounts { action } => {
            let subaccounts = client.subaccounts();
            match action {
                SubaccountAction::List => subaccounts.list(None),
                SubaccountAction::Get { id } => subaccounts.get(Some(id.as_str()), None),
                SubaccountAction::Create { json } => {
                    subaccounts.create(Some(parse_payload(&json)?), None)
                }
                SubaccountAction::Update { id, json } => {
                    subaccounts.update(Some(id.as_str()), Some(parse_payload(&json)?), None)
                }
            }
        }
        Command::Webhooks { action } => {
            let webhooks = client.webhooks();
            match action {
                WebhookAction::List => webhooks.list(None),
                WebhookAction::Get { id } => webhooks.get(Some(id.as_str()), None),
                WebhookAction::Create { json } => webhooks.create(Some(parse_payload(&json)?), None),
                WebhookAction::Update { id, json } => {
                    webhooks.update(Some(id.as_str()), Some(parse_payload(&json)?), None)
                }
                WebhookAction::Delete { id } => webhooks.delete(Some(id.as_str()), None),
            }
        }
    };
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();
    if args.api_key.is_some() {
        config.api_key = args.api_key;
    }
    if args.origin.is_some() {
        config.origin = args.origin;
    }
    if args.api_version.is_some() {
        config.api_version = args.api_version;
    }

    if args.save {
        config.save()?;
        tracing::info!("Saved configuration to {:?}", Config::config_path());
    }

    let client = SparkPost::from_config(&config)?;
    let result = run(&client, args.command)?.await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
