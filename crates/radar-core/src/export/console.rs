//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::aggregate::RadarReport;
use crate::config::radar::TOP_COUNT;
use crate::music::MusicData;
use crate::radar::RadarKind;

/// Format a radar report for the console
///
/// One block per radar kind: the average, then the top ten charts.
pub fn format_report_console(report: &RadarReport) -> String {
    let mut output = String::new();
    let border = "━".repeat(50);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}  {:.2}", "TOTAL".bold(), report.total());
    for (kind, value) in report.averages.iter() {
        let _ = writeln!(output, "  {} {:>7}", format_colored_kind(kind, 8), value.to_string());
    }

    for (kind, entries) in report.candidates.iter() {
        let _ = writeln!(output, "{}", border_dim);
        let _ = writeln!(
            output,
            "  {} {}",
            format_colored_kind(kind, 0),
            format!("({} charts)", entries.len()).dimmed()
        );

        let top: Vec<&MusicData> = entries.iter().filter(|e| e.top_ten()).collect();
        if top.is_empty() {
            let _ = writeln!(output, "  -");
            continue;
        }
        for (index, entry) in top.iter().take(TOP_COUNT).enumerate() {
            let _ = writeln!(output, "  {}", format_entry_line(index + 1, entry));
        }
    }
    let _ = write!(output, "{}", border_dim);

    output
}

fn format_entry_line(position: usize, entry: &MusicData) -> String {
    format!(
        "{:>2}. {}  {} [{} Lv.{}] {} {}",
        position,
        format!("{:>7}", entry.value).bold(),
        entry.name,
        format_colored_difficulty(&entry.difficulty),
        entry.difficulty_number,
        entry.score_rate,
        format_colored_rank(&entry.rank)
    )
}

/// Radar label padded to `width` before coloring
fn format_colored_kind(kind: RadarKind, width: usize) -> String {
    let name = format!("{:<width$}", kind.label());
    match kind {
        RadarKind::Notes => name.magenta().to_string(),
        RadarKind::Chord => name.green().to_string(),
        RadarKind::Peak => name.yellow().to_string(),
        RadarKind::Charge => name.purple().to_string(),
        RadarKind::Scratch => name.red().to_string(),
        RadarKind::SofRan => name.cyan().to_string(),
    }
}

/// Format difficulty with color
fn format_colored_difficulty(difficulty: &str) -> String {
    match difficulty.chars().last() {
        Some('B') => difficulty.green().to_string(),
        Some('N') => difficulty.blue().to_string(),
        Some('H') => difficulty.yellow().to_string(),
        Some('A') => difficulty.red().to_string(),
        Some('L') => difficulty.purple().to_string(),
        _ => difficulty.to_string(),
    }
}

fn format_colored_rank(rank: &str) -> String {
    match rank {
        "AAA" => rank.yellow().bold().to_string(),
        "AA" => rank.white().bold().to_string(),
        "A" => rank.green().to_string(),
        _ => rank.dimmed().to_string(),
    }
}
