//! Master data: the static catalogue of charts and their radar values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::chart::Difficulty;
use crate::error::{Error, Result};
use crate::radar::RadarKind;

/// Static statistics of a single chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMaster {
    #[serde(rename = "ALL_NOTES")]
    pub all_notes: u32,
    /// Radar values; a chart may carry only some of the kinds.
    /// Kept as JSON numbers so integer values are written back unchanged.
    #[serde(rename = "RADAR", default)]
    pub radar: BTreeMap<RadarKind, Number>,
}

/// Title → difficulty → NOTES radar value
pub type NotesCatalogue = BTreeMap<String, BTreeMap<String, Number>>;

impl ChartMaster {
    /// Build a chart from float radar values; non-finite values are dropped
    pub fn with_radar(all_notes: u32, radar: impl IntoIterator<Item = (RadarKind, f64)>) -> Self {
        let radar = radar
            .into_iter()
            .filter_map(|(kind, value)| Number::from_f64(value).map(|number| (kind, number)))
            .collect();
        Self { all_notes, radar }
    }

    pub fn radar_value(&self, kind: RadarKind) -> Option<f64> {
        self.radar.get(&kind).and_then(Number::as_f64)
    }
}

/// A radar value that is negative or not a finite number
#[derive(Debug, Clone, PartialEq)]
pub struct MasterIssue {
    pub title: String,
    pub difficulty: String,
    pub kind: RadarKind,
    pub value: f64,
}

impl From<MasterIssue> for Error {
    fn from(issue: MasterIssue) -> Self {
        Error::InvalidRadarValue {
            title: issue.title,
            difficulty: issue.difficulty,
            kind: issue.kind.label().to_string(),
            value: issue.value,
        }
    }
}

/// Title → difficulty → chart statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MusicMasterData {
    songs: BTreeMap<String, BTreeMap<String, ChartMaster>>,
}

impl MusicMasterData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Number of titles
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of charts across all titles
    pub fn chart_count(&self) -> usize {
        self.songs.values().map(BTreeMap::len).sum()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.songs.keys().map(String::as_str)
    }

    pub fn song(&self, title: &str) -> Option<&BTreeMap<String, ChartMaster>> {
        self.songs.get(title)
    }

    /// Iterate over `(title, difficulty key, chart)`
    pub fn charts(&self) -> impl Iterator<Item = (&str, &str, &ChartMaster)> {
        self.songs.iter().flat_map(|(title, charts)| {
            charts
                .iter()
                .map(move |(difficulty, chart)| (title.as_str(), difficulty.as_str(), chart))
        })
    }

    /// Look a chart up by raw difficulty key
    pub fn get(&self, title: &str, difficulty: &str) -> Option<&ChartMaster> {
        self.songs.get(title)?.get(difficulty)
    }

    /// Look a chart up, trying the short name (`SPA`) then the expanded name (`ANOTHER`)
    pub fn chart(&self, title: &str, difficulty: Difficulty) -> Option<&ChartMaster> {
        let charts = self.songs.get(title)?;
        charts
            .get(difficulty.short_name())
            .or_else(|| charts.get(difficulty.expand_name()))
    }

    pub fn insert(
        &mut self,
        title: impl Into<String>,
        difficulty: impl Into<String>,
        chart: ChartMaster,
    ) {
        self.songs
            .entry(title.into())
            .or_default()
            .insert(difficulty.into(), chart);
    }

    /// All radar values that are negative or not finite
    pub fn issues(&self) -> Vec<MasterIssue> {
        self.charts()
            .flat_map(|(title, difficulty, chart)| {
                chart
                    .radar
                    .iter()
                    .filter_map(move |(kind, number)| {
                        let value = number.as_f64().unwrap_or(f64::NAN);
                        (!value.is_finite() || value < 0.0).then(|| MasterIssue {
                            title: title.to_string(),
                            difficulty: difficulty.to_string(),
                            kind: *kind,
                            value,
                        })
                    })
            })
            .collect()
    }

    /// Fail on the first invalid radar value
    pub fn validate(&self) -> Result<()> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }

    /// Merge a notes-only catalogue (title → difficulty → NOTES value)
    ///
    /// Charts missing from the master are added with `ALL_NOTES = 0` and only
    /// a NOTES radar value. Existing charts are left untouched.
    /// Returns the number of charts added.
    pub fn merge_notes(&mut self, notes: &NotesCatalogue) -> usize {
        let mut added = 0;

        for (title, difficulties) in notes {
            let charts = self.songs.entry(title.clone()).or_default();
            for (difficulty, value) in difficulties {
                if charts.contains_key(difficulty) {
                    debug!("Skipping registered chart {} [{}]", title, difficulty);
                    continue;
                }
                charts.insert(
                    difficulty.clone(),
                    ChartMaster {
                        all_notes: 0,
                        radar: BTreeMap::from([(RadarKind::Notes, value.clone())]),
                    },
                );
                added += 1;
            }
        }

        added
    }
}

/// Load a notes-only catalogue for `MusicMasterData::merge_notes`
pub fn load_notes<P: AsRef<Path>>(path: P) -> Result<NotesCatalogue> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
