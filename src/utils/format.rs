// src/utils/format.rs
use console::{style, Style};

use crate::models::{StrengthLabel, StrengthReport};

/// Highest score the scorer can produce, one meter slot per point.
pub const METER_SLOTS: usize = 6;

pub fn label_style(label: StrengthLabel) -> Style {
    match label {
        StrengthLabel::Weak => Style::new().red(),
        StrengthLabel::Medium => Style::new().yellow(),
        StrengthLabel::Strong => Style::new().green(),
        StrengthLabel::VeryStrong => Style::new().green().bold(),
    }
}

// Plain meter, e.g. "[####--]"
pub fn meter(score: u8) -> String {
    let filled = (score as usize).min(METER_SLOTS);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_SLOTS - filled))
}

// Coloured one-line summary for the terminal
pub fn format_strength(report: &StrengthReport) -> String {
    let style = label_style(report.label);
    format!(
        "{} {} ({}/{})",
        style.apply_to(meter(report.score)),
        style.apply_to(report.label),
        report.score,
        METER_SLOTS
    )
}

pub fn format_suggestions(report: &StrengthReport) -> String {
    report
        .suggestions()
        .iter()
        .map(|s| format!("  {} {}", style("•").dim(), s))
        .collect::<Vec<_>>()
        .join("\n")
}
