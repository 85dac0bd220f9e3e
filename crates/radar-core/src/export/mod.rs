//! Export formats for radar reports.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{Value as JsonValue, json};

use crate::aggregate::RadarReport;
use crate::error::Result;
use crate::import::Unmatched;
use crate::radar::CandidatesData;

pub fn format_candidates_tsv_header() -> String {
    [
        "radar",
        "rank",
        "title",
        "difficulty",
        "level",
        "score",
        "score_rate",
        "grade",
        "value",
        "top_ten",
        "excluded",
    ]
    .join("\t")
}

/// Generate TSV with one line per candidate, grouped by radar kind
pub fn format_candidates_tsv(candidates: &CandidatesData) -> String {
    let mut lines = vec![format_candidates_tsv_header()];

    for (kind, entries) in candidates.iter() {
        for (index, entry) in entries.iter().enumerate() {
            let values: Vec<String> = vec![
                kind.label().to_string(),
                (index + 1).to_string(),
                entry.name.clone(),
                entry.difficulty.clone(),
                entry.difficulty_number.to_string(),
                entry.score.to_string(),
                entry.score_rate.clone(),
                entry.rank.clone(),
                entry.value.clone(),
                entry.top_ten().to_string(),
                entry.excluded().to_string(),
            ];
            lines.push(values.join("\t"));
        }
    }

    lines.join("\n")
}

/// Generate the JSON report
pub fn generate_report_json(report: &RadarReport, generated_at: DateTime<Utc>) -> Result<JsonValue> {
    Ok(json!({
        "generatedAt": generated_at.to_rfc3339(),
        "averages": serde_json::to_value(&report.averages)?,
        "total": report.total(),
        "candidates": serde_json::to_value(&report.candidates)?,
    }))
}

/// Generate TSV listing charts that could not be analyzed
pub fn format_unmatched_tsv(unmatched: &[Unmatched]) -> String {
    let mut lines = vec!["title\tdifficulty\tscore\treason".to_string()];
    lines.extend(unmatched.iter().map(|u| {
        format!(
            "{}\t{}\t{}\t{}",
            u.title,
            u.difficulty.short_name(),
            u.score,
            u.reason.as_str()
        )
    }));
    lines.join("\n")
}

pub fn export_report_json<P: AsRef<Path>>(path: P, report: &RadarReport) -> Result<()> {
    let value = generate_report_json(report, Utc::now())?;
    fs::write(path, serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
