//! # Lexflow Catalog Validator
//!
//! Command-line tool for checking the engine configuration and the process
//! catalog it selects before the dashboard starts using them.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use lexflow_core::config::ConfigManager;
use lexflow_core::logging::{init_with_config, log_catalog_operation};
use lexflow_core::process::{ProcessCatalog, ProcessDefinition};
use lexflow_core::recommendations::action_entries;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "catalog-validator")]
#[command(about = "Validate Lexflow configuration and process catalogs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Environment to validate (development, test, production)
    #[arg(short, long)]
    environment: Option<String>,

    /// Configuration directory path (default: config)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Validate this catalog file instead of the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate configuration and catalog, then summarize every process
    All,

    /// Show the steps, agents and status mappings of one process
    Process {
        /// Process id, e.g. proceso-cobranza
        id: String,
    },

    /// Report statuses with an action label but no status-table row, and vice versa
    Coverage,
}

#[derive(Serialize)]
struct ProcessSummary<'a> {
    id: &'a str,
    name: &'a str,
    steps: usize,
    task_steps: usize,
    agents: usize,
    mapped_statuses: usize,
    action_rows: usize,
}

#[derive(Serialize)]
struct CoverageGap<'a> {
    process_id: &'a str,
    actions_without_mapping: Vec<&'a str>,
    mappings_without_action: Vec<&'a str>,
}

fn main() {
    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(e) = result {
        error!("Catalog validation failed: {e:#}");
        eprintln!("Catalog validation failed: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let environment = cli
        .environment
        .clone()
        .unwrap_or_else(ConfigManager::detect_environment);

    let manager = ConfigManager::load_from_directory_with_env(cli.config_dir.clone(), &environment)
        .context("loading configuration")?;
    init_with_config(&manager.config().logging);

    let catalog = match &cli.catalog {
        Some(path) => ProcessCatalog::from_yaml_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => manager.catalog().context("loading configured catalog")?,
    };
    if let Err(e) = catalog.validate() {
        log_catalog_operation("validate", e.process_id(), "failed", Some(&environment));
        return Err(e).context("validating catalog");
    }
    log_catalog_operation("validate", None, "ok", Some(&environment));

    match &cli.command {
        Some(Commands::All) | None => summarize(&catalog, cli.format),
        Some(Commands::Process { id }) => describe(&catalog, id, cli.format),
        Some(Commands::Coverage) => coverage(&catalog, cli.format),
    }
}

fn summarize(catalog: &ProcessCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let summaries: Vec<ProcessSummary<'_>> = catalog
        .processes()
        .iter()
        .map(|definition| ProcessSummary {
            id: &definition.id,
            name: &definition.name,
            steps: definition.steps.len(),
            task_steps: definition.task_steps().count(),
            agents: definition.agents.len(),
            mapped_statuses: catalog.mapped_statuses(&definition.id).len(),
            action_rows: action_entries(&definition.id).len(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Table => {
            println!(
                "{:<24} {:<28} {:>5} {:>5} {:>6} {:>8} {:>7}",
                "PROCESS", "NAME", "STEPS", "TASKS", "AGENTS", "STATUSES", "ACTIONS"
            );
            for s in &summaries {
                println!(
                    "{:<24} {:<28} {:>5} {:>5} {:>6} {:>8} {:>7}",
                    s.id, s.name, s.steps, s.task_steps, s.agents, s.mapped_statuses, s.action_rows
                );
            }
        }
    }

    info!(processes = summaries.len(), "Catalog is valid");
    Ok(())
}

fn describe(catalog: &ProcessCatalog, process_id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let Some(definition) = catalog.get_process(process_id) else {
        bail!("unknown process '{process_id}'");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(definition)?),
        OutputFormat::Table => print_process(catalog, definition),
    }
    Ok(())
}

fn print_process(catalog: &ProcessCatalog, definition: &ProcessDefinition) {
    println!("{} ({})", definition.name, definition.id);
    println!();
    for (index, step) in definition.steps.iter().enumerate() {
        let agent = definition
            .agent(&step.agent_id)
            .map(|a| a.name.as_str())
            .unwrap_or("?");
        let targets: Vec<String> = step
            .next_steps
            .iter()
            .map(|t| match &t.label {
                Some(label) => format!("{label} -> {}", t.target),
                None => t.target.clone(),
            })
            .collect();
        println!(
            "{:>2}. [{:<10}] {:<22} {:<16} {}",
            index,
            step.step_type.to_string(),
            step.label,
            agent,
            targets.join(", ")
        );
    }

    println!();
    for agent in &definition.agents {
        let owned: Vec<&str> = definition
            .steps_for_agent(&agent.id)
            .map(|step| step.label.as_str())
            .collect();
        println!("  {:<22} {:<8} {}", agent.name, agent.color, owned.join(", "));
    }

    println!();
    for status in catalog.mapped_statuses(&definition.id) {
        let progress = catalog.compute_progress(&definition.id, status);
        println!(
            "  {:<20} -> {:<22} {:>3}%",
            status, progress.step_label, progress.percentage
        );
    }
}

fn coverage(catalog: &ProcessCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let gaps: Vec<CoverageGap<'_>> = catalog
        .process_ids()
        .map(|process_id| {
            let mapped = catalog.mapped_statuses(process_id);
            let actions = action_entries(process_id);
            CoverageGap {
                process_id,
                actions_without_mapping: actions
                    .iter()
                    .map(|(status, _)| *status)
                    .filter(|status| !mapped.contains(status))
                    .collect(),
                mappings_without_action: mapped
                    .iter()
                    .copied()
                    .filter(|status| !actions.iter().any(|(row, _)| row == status))
                    .collect(),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&gaps)?),
        OutputFormat::Table => {
            for gap in &gaps {
                println!("{}", gap.process_id);
                println!("  action rows without step mapping: {:?}", gap.actions_without_mapping);
                println!("  step mappings without action row: {:?}", gap.mappings_without_action);
            }
        }
    }
    Ok(())
}
