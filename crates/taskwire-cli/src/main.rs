use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use taskwire_core::definition::{DefinitionSource, JsonDefinitionSource};
use taskwire_core::diagnostics::{CollectingDiagnostics, TracingDiagnostics};
use taskwire_core::factory::DefaultBehaviorFactory;
use taskwire_core::models::Behavior;
use taskwire_core::parse_process_document;
use taskwire_core::registry::{ActivityRegistry, InMemoryActivityRegistry};

#[derive(Debug, Parser)]
#[command(name = "taskwire", version, about = "Resolve service task behaviors")]
struct Cli {
    /// Process document in JSON form
    document: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with an error when any service task produced a diagnostic
    #[arg(long)]
    deny_warnings: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Report {
    process_id: Option<String>,
    activities: Vec<ActivityReport>,
    diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ActivityReport {
    id: String,
    behavior: Option<&'static str>,
    inert: bool,
    asynchronous: bool,
    exclusive: bool,
    operation: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let document = JsonDefinitionSource::from_path(&cli.document)
        .and_then(|source| source.load())
        .with_context(|| format!("failed to load {}", cli.document.display()))?;

    let registry = InMemoryActivityRegistry::new();
    let collected = CollectingDiagnostics::new();
    let diagnostics = (TracingDiagnostics, &collected);

    let summary =
        parse_process_document(&document, &DefaultBehaviorFactory, &registry, &diagnostics)
            .with_context(|| {
                format!("failed to parse service tasks of {}", cli.document.display())
            })?;

    let report = Report {
        process_id: summary.process_id,
        activities: registry
            .activities()?
            .into_iter()
            .map(|activity| ActivityReport {
                behavior: activity.behavior.as_ref().map(|behavior| behavior.kind().as_str()),
                inert: activity.behavior.as_ref().is_none_or(Behavior::is_inert),
                operation: activity
                    .behavior
                    .as_ref()
                    .and_then(Behavior::as_web_service)
                    .and_then(|web_service| web_service.operation.as_ref())
                    .map(|operation| operation.id.clone()),
                asynchronous: activity.asynchronous,
                exclusive: activity.exclusive,
                id: activity.id,
            })
            .collect(),
        diagnostics: collected
            .snapshot()
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    tracing::info!(
        document = %cli.document.display(),
        activities = report.activities.len(),
        diagnostics = report.diagnostics.len(),
        "resolved process document"
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    if cli.deny_warnings && !report.diagnostics.is_empty() {
        anyhow::bail!("{} service task diagnostic(s) emitted", report.diagnostics.len());
    }

    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_text(report: &Report) {
    if let Some(process_id) = &report.process_id {
        println!("process {process_id}");
    }

    for activity in &report.activities {
        let mut line = format!("  {:<28} {}", activity.id, activity.behavior.unwrap_or("none"));
        if let Some(operation) = &activity.operation {
            line.push_str(&format!(" -> {operation}"));
        }
        if activity.asynchronous {
            line.push_str(" [async]");
        }
        if activity.inert {
            line.push_str(" [inert]");
        }
        println!("{line}");
    }

    for diagnostic in &report.diagnostics {
        println!("warning: {diagnostic}");
    }
}
