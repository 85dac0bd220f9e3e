use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::chart::{Difficulty, PlayStyle};
use crate::config::{AnalysisConfig, TitleAliases};
use crate::error::Result;
use crate::master::MusicMasterData;
use crate::music::MusicData;
use crate::score::{Grade, format_score_rate, max_score, score_ratio};

use super::CsvRow;

/// Options for turning CSV rows into `MusicData`
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub style: PlayStyle,
    /// Skip charts whose lamp is NO PLAY or FAILED
    pub require_clear: bool,
    /// Chart labels (`"<title> [<DIFF>]"`) flagged as excluded
    pub exclude: BTreeSet<String>,
    pub aliases: TitleAliases,
}

impl ImportOptions {
    pub fn from_config(config: &AnalysisConfig, aliases: TitleAliases) -> Self {
        Self {
            style: config.style,
            require_clear: config.require_clear,
            exclude: config.exclude.clone(),
            aliases,
        }
    }
}

/// Why a played chart did not become a `MusicData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedReason {
    /// Title or difficulty absent from the master data
    NotInMaster,
    /// Master entry has `ALL_NOTES = 0`, so no score rate can be derived
    NoNoteCount,
    /// CSV score is higher than the master's max score
    ScoreExceedsMax,
    /// Played but not cleared while clears are required
    NotCleared,
}

impl UnmatchedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInMaster => "not in master data",
            Self::NoNoteCount => "no note count",
            Self::ScoreExceedsMax => "score exceeds max score",
            Self::NotCleared => "not cleared",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unmatched {
    pub title: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub reason: UnmatchedReason,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub music: Vec<MusicData>,
    pub unmatched: Vec<Unmatched>,
}

/// Convert score CSV rows into `MusicData`, one entry per played chart
///
/// When several rows resolve to the same chart (through title aliases or a
/// repeated title), only the best score is kept.
pub fn import_scores(
    rows: &[CsvRow],
    master: &MusicMasterData,
    options: &ImportOptions,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();
    let mut seen: HashMap<(String, Difficulty), usize> = HashMap::new();

    for row in rows {
        let title = options.aliases.resolve(&row.title);

        for difficulty in Difficulty::for_style(options.style) {
            let columns = row.chart_columns(difficulty)?;
            if !columns.is_played() {
                continue;
            }
            let score = columns.score.unwrap_or(0);
            let mut unmatched = |reason: UnmatchedReason| {
                debug!("{} [{}]: {}", title, difficulty, reason.as_str());
                report.unmatched.push(Unmatched {
                    title: title.to_string(),
                    difficulty,
                    score,
                    reason,
                });
            };

            if options.require_clear && !columns.lamp.is_some_and(|lamp| lamp.is_clear()) {
                unmatched(UnmatchedReason::NotCleared);
                continue;
            }

            let Some(chart) = master.chart(title, difficulty) else {
                unmatched(UnmatchedReason::NotInMaster);
                continue;
            };
            if chart.all_notes == 0 {
                unmatched(UnmatchedReason::NoNoteCount);
                continue;
            }

            let max = max_score(chart.all_notes);
            if score > max {
                warn!(
                    "{} [{}]: score {} exceeds max score {}",
                    title, difficulty, score, max
                );
                unmatched(UnmatchedReason::ScoreExceedsMax);
                continue;
            }

            let mut music = MusicData {
                name: title.to_string(),
                difficulty: difficulty.short_name().to_string(),
                difficulty_number: columns.level.unwrap_or(0) as f64,
                score,
                max_score: max,
                score_rate: format_score_rate(score, max),
                rank: Grade::from_score_ratio(score_ratio(score, max)).to_string(),
                value: score.to_string(),
                total_notes: Some(chart.all_notes),
                is_excluded: None,
                is_top_ten: None,
            };
            if options.exclude.contains(&music.chart_label()) {
                music.is_excluded = Some(true);
            }

            match seen.entry((music.name.clone(), difficulty)) {
                Entry::Occupied(entry) => {
                    let existing = &mut report.music[*entry.get()];
                    debug!(
                        "{}: duplicate chart, keeping score {}",
                        music.chart_label(),
                        existing.score.max(music.score)
                    );
                    if music.score > existing.score {
                        *existing = music;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(report.music.len());
                    report.music.push(music);
                }
            }
        }
    }

    info!(
        "Imported {} charts ({} unmatched)",
        report.music.len(),
        report.unmatched.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ScoreCsv;

    const MASTER: &str = r#"{
        "Song A": {
            "SPH": { "ALL_NOTES": 800, "RADAR": { "NOTES": 80.0 } },
            "SPA": { "ALL_NOTES": 1200, "RADAR": { "NOTES": 150.0, "PEAK": 120.0 } }
        },
        "Song B": {
            "ANOTHER": { "ALL_NOTES": 0, "RADAR": { "NOTES": 99.0 } }
        }
    }"#;

    const CSV: &str = "\
バージョン,タイトル,ジャンル,アーティスト,プレー回数,HYPER 難易度,HYPER スコア,HYPER クリアタイプ,ANOTHER 難易度,ANOTHER スコア,ANOTHER クリアタイプ,LEGGENDARIA 難易度,LEGGENDARIA スコア,LEGGENDARIA クリアタイプ
33,Song A,POP,Artist X,12,9,1500,CLEAR,11,1700,FAILED,0,0,NO PLAY
33,Song B,ROCK,Artist Y,3,0,0,NO PLAY,10,900,CLEAR,12,1000,HARD CLEAR
33,Song C,JAZZ,Artist Z,1,5,300,EASY CLEAR,0,0,NO PLAY,0,0,NO PLAY
";

    fn rows() -> Vec<CsvRow> {
        ScoreCsv::parse(CSV).unwrap().rows
    }

    #[test]
    fn test_import_builds_music_data() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let report = import_scores(&rows(), &master, &ImportOptions::default()).unwrap();

        assert_eq!(report.music.len(), 2);

        let hyper = &report.music[0];
        assert_eq!(hyper.name, "Song A");
        assert_eq!(hyper.difficulty, "SPH");
        assert_eq!(hyper.difficulty_number, 9.0);
        assert_eq!(hyper.score, 1500);
        assert_eq!(hyper.max_score, 1600);
        assert_eq!(hyper.score_rate, "93.75%");
        assert_eq!(hyper.rank, "AAA");
        assert_eq!(hyper.value, "1500");
        assert_eq!(hyper.total_notes, Some(800));
        assert_eq!(hyper.is_excluded, None);

        let another = &report.music[1];
        assert_eq!(another.difficulty, "SPA");
        assert_eq!(another.rank, "A");
        assert!(another.validate().is_ok());
    }

    #[test]
    fn test_import_reports_unmatched_charts() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let report = import_scores(&rows(), &master, &ImportOptions::default()).unwrap();

        let reasons: Vec<_> = report
            .unmatched
            .iter()
            .map(|u| (u.title.as_str(), u.difficulty, u.reason))
            .collect();
        assert_eq!(
            reasons,
            [
                ("Song B", Difficulty::SpA, UnmatchedReason::NoNoteCount),
                ("Song B", Difficulty::SpL, UnmatchedReason::NotInMaster),
                ("Song C", Difficulty::SpH, UnmatchedReason::NotInMaster),
            ]
        );
    }

    #[test]
    fn test_import_require_clear() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let options = ImportOptions {
            require_clear: true,
            ..Default::default()
        };
        let report = import_scores(&rows(), &master, &options).unwrap();

        assert_eq!(report.music.len(), 1);
        assert_eq!(report.music[0].difficulty, "SPH");
        assert!(report.unmatched.iter().any(|u| u.title == "Song A"
            && u.difficulty == Difficulty::SpA
            && u.reason == UnmatchedReason::NotCleared));
    }

    #[test]
    fn test_import_marks_excluded_and_resolves_aliases() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let mut aliases = TitleAliases::new();
        aliases.insert("Song C".to_string(), "Song A".to_string());
        let options = ImportOptions {
            exclude: BTreeSet::from(["Song A [SPA]".to_string()]),
            aliases,
            ..Default::default()
        };
        let report = import_scores(&rows(), &master, &options).unwrap();

        let excluded: Vec<_> = report.music.iter().filter(|m| m.excluded()).collect();
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].chart_label(), "Song A [SPA]");

        // Song C resolves to Song A; the better Song A HYPER score stays
        let hyper: Vec<_> = report
            .music
            .iter()
            .filter(|m| m.name == "Song A" && m.difficulty == "SPH")
            .collect();
        assert_eq!(hyper.len(), 1);
        assert_eq!(hyper[0].score, 1500);
    }

    #[test]
    fn test_import_keeps_best_score_per_chart() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let csv = "\
バージョン,タイトル,ジャンル,アーティスト,プレー回数,ANOTHER 難易度,ANOTHER スコア,ANOTHER クリアタイプ
33,Song A,POP,Artist X,2,11,1000,CLEAR
33,Song A (old),POP,Artist X,5,11,2000,HARD CLEAR
33,Song A,POP,Artist X,1,11,1500,CLEAR
";
        let mut aliases = TitleAliases::new();
        aliases.insert("Song A (old)".to_string(), "Song A".to_string());
        let options = ImportOptions {
            aliases,
            ..Default::default()
        };
        let report =
            import_scores(&ScoreCsv::parse(csv).unwrap().rows, &master, &options).unwrap();

        assert_eq!(report.music.len(), 1);
        assert_eq!(report.music[0].chart_label(), "Song A [SPA]");
        assert_eq!(report.music[0].score, 2000);
        assert_eq!(report.music[0].score_rate, "83.33%");
    }

    #[test]
    fn test_import_ignores_malformed_miss_count() {
        let master = MusicMasterData::from_json(MASTER).unwrap();
        let csv = "\
バージョン,タイトル,ジャンル,アーティスト,プレー回数,ANOTHER 難易度,ANOTHER スコア,ANOTHER ミスカウント,ANOTHER クリアタイプ
33,Song A,POP,Artist X,2,11,1800,N/A,CLEAR
";
        let report = import_scores(
            &ScoreCsv::parse(csv).unwrap().rows,
            &master,
            &ImportOptions::default(),
        )
        .unwrap();

        assert_eq!(report.music.len(), 1);
        assert_eq!(report.music[0].score, 1800);
    }

    #[test]
    fn test_import_score_over_max() {
        let master = MusicMasterData::from_json(
            r#"{"Song A": {"SPH": {"ALL_NOTES": 700, "RADAR": {}}}}"#,
        )
        .unwrap();
        let report = import_scores(&rows(), &master, &ImportOptions::default()).unwrap();

        assert!(report.music.is_empty());
        assert!(report
            .unmatched
            .iter()
            .any(|u| u.reason == UnmatchedReason::ScoreExceedsMax && u.score == 1500));
    }

    #[test]
    fn test_import_dp_style_reads_same_columns() {
        let master = MusicMasterData::from_json(
            r#"{"Song A": {"HYPER": {"ALL_NOTES": 800, "RADAR": {"NOTES": 1.0}}}}"#,
        )
        .unwrap();
        let options = ImportOptions {
            style: PlayStyle::Dp,
            ..Default::default()
        };
        let report = import_scores(&rows(), &master, &options).unwrap();

        assert_eq!(report.music.len(), 1);
        assert_eq!(report.music[0].difficulty, "DPH");
    }
}
