//! Radar aggregation: per-kind candidate lists and the player's averages.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::Difficulty;
use crate::config::radar::{DECIMALS, TOP_COUNT};
use crate::master::{ChartMaster, MusicMasterData};
use crate::music::MusicData;
use crate::radar::{CandidatesData, RadarAverageValues, RadarKind, RadarMap, RadarValue};
use crate::score::round_display;

/// Candidate lists together with the averages derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarReport {
    pub candidates: CandidatesData,
    pub averages: RadarAverageValues,
}

impl RadarReport {
    pub fn total(&self) -> f64 {
        round_display(self.averages.total())
    }
}

/// Build candidates and averages in one go
pub fn analyze(music: &[MusicData], master: &MusicMasterData) -> RadarReport {
    let candidates = collect_candidates(music, master);
    let averages = RadarAverageValues::from_candidates(&candidates);
    RadarReport {
        candidates,
        averages,
    }
}

fn lookup_chart<'a>(master: &'a MusicMasterData, music: &MusicData) -> Option<&'a ChartMaster> {
    match Difficulty::parse(&music.difficulty) {
        Ok(difficulty) => master.chart(&music.name, difficulty),
        Err(_) => master.get(&music.name, &music.difficulty),
    }
}

/// Group entries by radar kind, best contribution first
///
/// An entry's contribution to a kind is the chart's radar value for that
/// kind scaled by the score rate; it is written to `value` with two
/// decimals. The first `TOP_COUNT` entries of each kind that are not
/// excluded are flagged `is_top_ten`.
pub fn collect_candidates(music: &[MusicData], master: &MusicMasterData) -> CandidatesData {
    RadarMap::from_fn(|kind| {
        let mut scored: Vec<(f64, &MusicData)> = music
            .iter()
            .filter_map(|entry| {
                let radar = lookup_chart(master, entry)?.radar_value(kind)?;
                Some((radar * entry.score_ratio(), entry))
            })
            .collect();

        scored.sort_by(|(a_value, a), (b_value, b)| {
            b_value
                .total_cmp(a_value)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.difficulty.cmp(&b.difficulty))
        });

        let mut top = 0;
        let candidates: Vec<MusicData> = scored
            .into_iter()
            .map(|(contribution, entry)| {
                let is_top_ten = !entry.excluded() && top < TOP_COUNT;
                if is_top_ten {
                    top += 1;
                }
                MusicData {
                    value: format!("{:.prec$}", contribution, prec = DECIMALS),
                    is_top_ten: Some(is_top_ten),
                    ..entry.clone()
                }
            })
            .collect();

        debug!("{}: {} candidates, {} in top ten", kind, candidates.len(), top);
        candidates
    })
}

impl RadarAverageValues {
    /// Average of the top-ten values of each kind
    ///
    /// Always divides by `TOP_COUNT`, so fewer than ten played charts lower
    /// the average.
    pub fn from_candidates(candidates: &CandidatesData) -> Self {
        candidates.map(|_, entries| {
            let sum: f64 = entries
                .iter()
                .filter(|entry| entry.top_ten())
                .filter_map(MusicData::numeric_value)
                .sum();
            RadarValue(round_display(sum / TOP_COUNT as f64))
        })
    }

    /// Kinds ordered by value, highest first
    pub fn ranked(&self) -> Vec<(RadarKind, f64)> {
        let mut ranked: Vec<_> = self.iter().map(|(kind, value)| (kind, value.0)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_music(name: &str, difficulty: &str, score: u32, max_score: u32) -> MusicData {
        MusicData {
            name: name.to_string(),
            difficulty: difficulty.to_string(),
            difficulty_number: 12.0,
            score,
            max_score,
            score_rate: String::new(),
            rank: String::new(),
            value: score.to_string(),
            total_notes: Some(max_score / 2),
            ..Default::default()
        }
    }

    fn make_master(entries: &[(&str, &str, f64)]) -> MusicMasterData {
        let mut master = MusicMasterData::new();
        for (title, difficulty, notes) in entries {
            master.insert(
                *title,
                *difficulty,
                ChartMaster::with_radar(1000, [(RadarKind::Notes, *notes), (RadarKind::Peak, 50.0)]),
            );
        }
        master
    }

    #[test]
    fn test_every_kind_present_even_when_empty() {
        let report = analyze(&[], &MusicMasterData::new());
        for (_, entries) in report.candidates.iter() {
            assert!(entries.is_empty());
        }
        assert_eq!(report.total(), 0.0);
    }

    #[test]
    fn test_contribution_and_ordering() {
        let master = make_master(&[("A", "SPA", 100.0), ("B", "SPA", 200.0), ("C", "SPH", 150.0)]);
        let music = vec![
            make_music("A", "SPA", 2000, 2000),
            make_music("B", "SPA", 1000, 2000),
            make_music("C", "SPH", 1800, 2000),
        ];

        let candidates = collect_candidates(&music, &master);
        let notes: Vec<_> = candidates[RadarKind::Notes]
            .iter()
            .map(|m| (m.name.as_str(), m.value.as_str()))
            .collect();
        assert_eq!(notes, [("C", "135.00"), ("A", "100.00"), ("B", "100.00")]);

        // kinds without radar data stay empty
        assert!(candidates[RadarKind::Chord].is_empty());
        assert_eq!(candidates[RadarKind::Peak].len(), 3);
        assert_eq!(candidates[RadarKind::Peak][0].name, "A");
    }

    #[test]
    fn test_top_ten_skips_excluded_entries() {
        let entries: Vec<(String, f64)> = (0..12)
            .map(|i| (format!("Song {:02}", i), 100.0 - i as f64))
            .collect();
        let master = make_master(
            &entries
                .iter()
                .map(|(t, v)| (t.as_str(), "SPA", *v))
                .collect::<Vec<_>>(),
        );
        let mut music: Vec<_> = entries
            .iter()
            .map(|(t, _)| make_music(t, "SPA", 2000, 2000))
            .collect();
        music[0].is_excluded = Some(true);

        let candidates = collect_candidates(&music, &master);
        let notes = &candidates[RadarKind::Notes];

        assert_eq!(notes.len(), 12);
        assert_eq!(notes[0].name, "Song 00");
        assert_eq!(notes[0].is_top_ten, Some(false));
        assert_eq!(notes.iter().filter(|m| m.top_ten()).count(), 10);
        assert_eq!(notes[10].is_top_ten, Some(true));
        assert_eq!(notes[11].is_top_ten, Some(false));
    }

    #[test]
    fn test_averages_divide_by_ten() {
        let master = make_master(&[("A", "SPA", 100.0), ("B", "SPA", 50.0)]);
        let music = vec![
            make_music("A", "SPA", 2000, 2000),
            make_music("B", "SPA", 2000, 2000),
        ];

        let report = analyze(&music, &master);
        assert_eq!(report.averages.notes, RadarValue(15.0));
        assert_eq!(report.averages.peak, RadarValue(10.0));
        assert_eq!(report.averages.chord, RadarValue(0.0));
        assert_eq!(report.total(), 25.0);

        let ranked = report.averages.ranked();
        assert_eq!(ranked[0], (RadarKind::Notes, 15.0));
        assert_eq!(ranked[1], (RadarKind::Peak, 10.0));
    }

    #[test]
    fn test_lookup_by_expanded_difficulty_key() {
        let master = make_master(&[("A", "ANOTHER", 80.0)]);
        let music = vec![make_music("A", "SPA", 1000, 2000)];

        let candidates = collect_candidates(&music, &master);
        assert_eq!(candidates.notes[0].value, "40.00");
    }

    #[test]
    fn test_report_serializes_radar_labels() {
        let report = analyze(&[], &MusicMasterData::new());
        let value = serde_json::to_value(&report).unwrap();

        assert!(value["candidates"]["SOF-RAN"].is_array());
        assert_eq!(value["averages"]["SOF-RAN"], 0.0);
    }
}
