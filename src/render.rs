//! Human-readable rendering of metric results.

use analytics::{ClassificationReport, Metric, MetricOutcome};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use configuration::ReportSettings;
use core_types::{ConfusionCounts, Outcome, format_labels};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

fn format_value(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn format_outcome(outcome: &MetricOutcome, decimals: usize) -> String {
    match outcome {
        MetricOutcome::Defined { value } => format_value(*value, decimals),
        MetricOutcome::Undefined { .. } => "undefined".to_string(),
    }
}

/// Renders the full report: inputs, confusion matrix and the metric table.
pub fn render_report(report: &ClassificationReport, settings: &ReportSettings) -> String {
    let decimals = settings.decimals;
    let mut out = String::new();

    if settings.show_sequences {
        out.push_str(&format!(
            "Ground truth: [{}] (prevalence {})\n",
            format_labels(&report.ground_truth),
            format_outcome(&report.ground_truth_prevalence, decimals)
        ));
        out.push_str(&format!(
            "Prediction:   [{}] (prevalence {})\n",
            format_labels(&report.predicted),
            format_outcome(&report.predicted_prevalence, decimals)
        ));
    }
    if report.ground_truth_padding > 0 {
        out.push_str(&format!(
            "Ground truth padded with {} trailing negative(s).\n",
            report.ground_truth_padding
        ));
    }
    if report.predicted_padding > 0 {
        out.push_str(&format!(
            "Prediction padded with {} trailing negative(s).\n",
            report.predicted_padding
        ));
    }
    out.push('\n');

    out.push_str(&render_counts(&report.counts));
    out.push_str("\n\n");

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value", "Notes"]);
    for (section, entries) in report.sections() {
        table.add_row(vec![section.title().to_uppercase(), String::new(), String::new()]);
        for entry in entries {
            let label = if entry.metric == Metric::FScore {
                format!("{} (beta = {})", entry.metric.label(), report.beta)
            } else {
                entry.metric.label().to_string()
            };
            let notes = match &entry.outcome {
                MetricOutcome::Defined { .. } => entry.hint.unwrap_or_default().to_string(),
                MetricOutcome::Undefined { reason } => match entry.note {
                    Some(note) => format!("{reason} ({note})"),
                    None => reason.clone(),
                },
            };
            table.add_row(vec![label, format_outcome(&entry.outcome, decimals), notes]);
        }
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    out.push_str(&table.to_string());
    out.push('\n');
    out
}

fn format_cell(counts: &ConfusionCounts, outcome: Outcome) -> String {
    format!("{} {}", outcome.abbreviation(), counts.get(outcome))
}

/// A 2x2 confusion matrix with actual classes as rows.
pub fn render_counts(counts: &ConfusionCounts) -> String {
    let mut table = new_table();
    table.set_header(vec!["", "Predicted 1", "Predicted 0"]);
    table.add_row(vec![
        "Actual 1".to_string(),
        format_cell(counts, Outcome::TruePositive),
        format_cell(counts, Outcome::FalseNegative),
    ]);
    table.add_row(vec![
        "Actual 0".to_string(),
        format_cell(counts, Outcome::FalsePositive),
        format_cell(counts, Outcome::TrueNegative),
    ]);
    format!("{table}\nAligned length: {}", counts.total())
}

/// One row per confusion cell with its 0/1 indicator sequence.
pub fn render_indicators(rows: &[(Outcome, Vec<u8>)]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Cell", "Indicators", "Sum"]);
    for (outcome, indicators) in rows {
        let joined = indicators
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let sum: usize = indicators.iter().map(|&i| usize::from(i)).sum();
        table.add_row(vec![outcome.abbreviation().to_string(), joined, sum.to_string()]);
    }
    table.to_string()
}

/// The metric catalogue with canonical names and aliases.
pub fn render_catalogue() -> String {
    let mut table = new_table();
    table.set_header(vec!["Name", "Aliases", "Description"]);
    for metric in Metric::ALL {
        table.add_row(vec![
            metric.name().to_string(),
            metric.aliases().join(", "),
            metric.label().to_string(),
        ]);
    }
    table.to_string()
}
