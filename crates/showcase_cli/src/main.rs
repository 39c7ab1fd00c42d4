mod report;
mod settings;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use report::{SectionReport, ShowcaseReport};
use settings::ShowcaseSettings;

#[derive(Parser)]
#[command(version, about = "Run the superhero and vehicle showcase scripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted superhero demonstration.
    Heroes(RunArgs),
    /// Run the scripted vehicle fleet demonstration.
    Vehicles(RunArgs),
    /// Run both demonstrations in sequence.
    All(RunArgs),
    /// Pretty-print an existing run report.
    Report(ReportArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Optional TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the vehicle showcase RNG.
    #[arg(long)]
    seed: Option<u64>,
    /// Write a JSON report here (overrides the settings file path).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Heroes(args) => handle_run(args, true, false),
        Commands::Vehicles(args) => handle_run(args, false, true),
        Commands::All(args) => handle_run(args, true, true),
        Commands::Report(args) => handle_report(args),
    }
}

fn handle_run(args: RunArgs, heroes: bool, vehicles: bool) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    init_tracing(&settings);
    let seed = settings.resolve_seed(args.seed);

    let mut sections = Vec::new();

    if heroes {
        let outcome = hero_core::showcase::run();
        for line in &outcome.transcript {
            println!("{line}");
        }
        sections.push(SectionReport::new(
            "heroes",
            outcome.transcript,
            serde_json::to_value(&outcome.roster)?,
        ));
    }

    if vehicles {
        let outcome = vehicle_core::showcase::run(seed);
        for line in &outcome.transcript {
            println!("{line}");
        }
        sections.push(SectionReport::new(
            "vehicles",
            outcome.transcript,
            serde_json::to_value(&outcome.fleet)?,
        ));
    }

    let out_path = args
        .out
        .or_else(|| settings.report.as_ref().map(|r| r.path.clone()));
    if let Some(path) = out_path {
        let include_transcript = settings
            .report
            .as_ref()
            .map(|r| r.include_transcript)
            .unwrap_or(true);
        if !include_transcript {
            for section in &mut sections {
                section.transcript.clear();
            }
        }
        let run_id = format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S"));
        let report = ShowcaseReport::new(run_id, seed, sections);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read report {}", args.input.display()))?;
    let report: ShowcaseReport = serde_json::from_str(&data)?;
    println!(
        "Report {} ({}) seed {} with {} section(s)",
        report.id,
        report.timestamp,
        report.seed,
        report.sections.len()
    );
    for section in &report.sections {
        println!("  {}: {} transcript line(s)", section.name, section.transcript.len());
    }
    Ok(())
}

fn load_settings(path: Option<&std::path::Path>) -> Result<ShowcaseSettings> {
    match path {
        Some(path) => ShowcaseSettings::from_path(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(ShowcaseSettings::default()),
    }
}

fn init_tracing(settings: &ShowcaseSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.trace_filter().unwrap_or("info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}
