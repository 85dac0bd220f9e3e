//! Scored chart entries.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::score_ratio;

/// One scored attempt at a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicData {
    /// Music title
    pub name: String,
    /// Difficulty label (e.g., "SPA")
    pub difficulty: String,
    /// Chart level
    pub difficulty_number: f64,
    pub score: u32,
    pub max_score: u32,
    /// Score rate as a percentage string (e.g., "95.12%")
    pub score_rate: String,
    /// Letter grade
    pub rank: String,
    /// Display value: the score on import, the radar contribution in candidate lists
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_notes: Option<u32>,
    /// Kept out of the top ten and the averages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_excluded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_top_ten: Option<bool>,
}

impl MusicData {
    /// Check score and level bounds
    pub fn validate(&self) -> Result<()> {
        if self.score > self.max_score {
            return Err(Error::ScoreExceedsMax {
                chart: self.chart_label(),
                score: self.score,
                max_score: self.max_score,
            });
        }
        if !self.difficulty_number.is_finite() || self.difficulty_number < 0.0 {
            return Err(Error::InvalidDifficultyNumber {
                chart: self.chart_label(),
                value: self.difficulty_number,
            });
        }
        Ok(())
    }

    pub fn score_ratio(&self) -> f64 {
        score_ratio(self.score, self.max_score)
    }

    /// `value` as a number, when it holds one
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }

    /// Chart identifier used by exclusion lists: `"<title> [<difficulty>]"`
    pub fn chart_label(&self) -> String {
        format!("{} [{}]", self.name, self.difficulty)
    }

    pub fn excluded(&self) -> bool {
        self.is_excluded.unwrap_or(false)
    }

    pub fn top_ten(&self) -> bool {
        self.is_top_ten.unwrap_or(false)
    }
}
