use analytics::{
    ClassificationReport, ConfusionMetrics, Metric, align, false_negatives, false_positives,
    true_negatives, true_positives,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat, ReportSettings, load_config};
use core_types::{Label, Outcome, format_labels, parse_labels};
use std::path::PathBuf;

mod logging;
mod render;

/// The main entry point for the binmetrics command-line tool.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guards = logging::init_tracing(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded.");

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Counts(args) => handle_counts(args),
        Commands::Metric(args) => handle_metric(args, &config),
        Commands::Align(args) => handle_align(args),
        Commands::List => {
            println!("{}", render::render_catalogue());
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = ?e, "Command failed.");
    }
    result
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Binary-classification metrics from ground-truth and predicted label sequences.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./binmetrics.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every metric for a ground truth / prediction pair.
    Report(ReportArgs),
    /// Print the confusion-matrix counts.
    Counts(CountsArgs),
    /// Print a single metric, looked up by name or alias (e.g. "tpr", "precision").
    Metric(MetricArgs),
    /// Print two sequences after padding the shorter one with trailing zeros.
    Align(AlignArgs),
    /// List the available metrics and their aliases.
    List,
}

/// A ground truth / prediction pair given as text such as "1,0,1" or "1 0 1".
#[derive(Parser)]
struct SequenceArgs {
    /// Ground-truth labels (0 or 1).
    #[arg(long, short = 't')]
    truth: String,

    /// Predicted labels (0 or 1).
    #[arg(long, short = 'p')]
    predicted: String,
}

impl SequenceArgs {
    fn parse(&self) -> Result<(Vec<Label>, Vec<Label>)> {
        let ground_truth = parse_labels(&self.truth).context("Invalid --truth labels")?;
        let predicted = parse_labels(&self.predicted).context("Invalid --predicted labels")?;
        Ok((ground_truth, predicted))
    }
}

#[derive(Parser)]
struct ReportArgs {
    #[command(flatten)]
    sequences: SequenceArgs,

    /// F-beta weight (overrides report.beta).
    #[arg(long)]
    beta: Option<f64>,

    /// Output format (overrides report.format).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Fraction digits in table output (overrides report.decimals).
    #[arg(long)]
    decimals: Option<usize>,

    /// Do not print the input sequences above the table.
    #[arg(long)]
    hide_sequences: bool,
}

#[derive(Parser)]
struct CountsArgs {
    #[command(flatten)]
    sequences: SequenceArgs,

    /// Also print the per-position 0/1 indicators of each cell.
    #[arg(long)]
    per_position: bool,
}

#[derive(Parser)]
struct MetricArgs {
    /// Metric name or alias.
    name: String,

    #[command(flatten)]
    sequences: SequenceArgs,

    /// F-beta weight, used by f_score only (overrides report.beta).
    #[arg(long)]
    beta: Option<f64>,
}

#[derive(Parser)]
struct AlignArgs {
    /// First label sequence.
    first: String,
    /// Second label sequence.
    second: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Applies command-line overrides on top of the configured report settings.
fn report_settings(config: &Config, args: &ReportArgs) -> Result<ReportSettings> {
    let mut settings = config.report.clone();
    if let Some(beta) = args.beta {
        settings.beta = beta;
    }
    if let Some(format) = args.format {
        settings.format = format;
    }
    if let Some(decimals) = args.decimals {
        settings.decimals = decimals;
    }
    if args.hide_sequences {
        settings.show_sequences = false;
    }
    settings.validate()?;
    Ok(settings)
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let settings = report_settings(config, &args)?;
    let (ground_truth, predicted) = args.sequences.parse()?;

    let engine = ConfusionMetrics::new();
    let report = ClassificationReport::build(&engine, &ground_truth, &predicted, settings.beta)
        .context("Failed to build report")?;

    match settings.format {
        OutputFormat::Table => print!("{}", render::render_report(&report, &settings)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn handle_counts(args: CountsArgs) -> Result<()> {
    let (ground_truth, predicted) = args.sequences.parse()?;
    let engine = ConfusionMetrics::new();

    println!("{}", render::render_counts(&engine.counts(&ground_truth, &predicted)));

    if args.per_position {
        let rows = [
            (Outcome::TruePositive, true_positives(&ground_truth, &predicted)),
            (Outcome::FalsePositive, false_positives(&ground_truth, &predicted)),
            (Outcome::TrueNegative, true_negatives(&ground_truth, &predicted)),
            (Outcome::FalseNegative, false_negatives(&ground_truth, &predicted)),
        ];
        println!("{}", render::render_indicators(&rows));
    }
    Ok(())
}

fn handle_metric(args: MetricArgs, config: &Config) -> Result<()> {
    let metric: Metric = args.name.parse()?;
    let (ground_truth, predicted) = args.sequences.parse()?;

    let mut settings = config.report.clone();
    if let Some(beta) = args.beta {
        if metric.uses_beta() {
            settings.beta = beta;
            settings.validate()?;
        } else {
            tracing::warn!(%metric, "--beta only applies to f_score and is ignored.");
        }
    }

    let engine = ConfusionMetrics::new();
    let value = engine
        .evaluate(metric, &ground_truth, &predicted, settings.beta)
        .with_context(|| format!("{} cannot be computed", metric.label()))?;

    let decimals = settings.decimals;
    let label = if metric.uses_beta() {
        format!("{} (beta = {})", metric.label(), settings.beta)
    } else {
        metric.label().to_string()
    };
    match metric.hint() {
        Some(hint) => println!("{label} ({metric}): {value:.decimals$} ({hint})"),
        None => println!("{label} ({metric}): {value:.decimals$}"),
    }
    Ok(())
}

fn handle_align(args: AlignArgs) -> Result<()> {
    let first = parse_labels(&args.first).context("Invalid first sequence")?;
    let second = parse_labels(&args.second).context("Invalid second sequence")?;

    let (first, second) = align(&first, &second);
    println!("{}", format_labels(&first));
    println!("{}", format_labels(&second));
    Ok(())
}
