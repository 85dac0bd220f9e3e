use crate::config::radar::DECIMALS;

/// Max EX score of a chart (two points per note)
pub fn max_score(total_notes: u32) -> u32 {
    total_notes.saturating_mul(2)
}

/// Score as a fraction of the max score, 0 when nothing is attainable
pub fn score_ratio(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        0.0
    } else {
        score as f64 / max_score as f64
    }
}

/// Format a score rate as a percentage string (e.g., "95.12%")
pub fn format_score_rate(score: u32, max_score: u32) -> String {
    format!(
        "{:.prec$}%",
        score_ratio(score, max_score) * 100.0,
        prec = DECIMALS
    )
}

/// Round to the display precision used throughout the reports
pub fn round_display(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMALS as i32);
    (value * factor).round() / factor
}
