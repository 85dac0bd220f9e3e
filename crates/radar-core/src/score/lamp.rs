use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Clear lamp, parsed from the `クリアタイプ` columns of the score CSV
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
pub enum Lamp {
    #[default]
    #[strum(to_string = "NO PLAY")]
    NoPlay,
    #[strum(to_string = "FAILED")]
    Failed,
    #[strum(to_string = "ASSIST", serialize = "ASSIST CLEAR")]
    AssistClear,
    #[strum(to_string = "EASY", serialize = "EASY CLEAR")]
    EasyClear,
    #[strum(to_string = "CLEAR")]
    Clear,
    #[strum(to_string = "HARD", serialize = "HARD CLEAR")]
    HardClear,
    #[strum(to_string = "EX HARD", serialize = "EX HARD CLEAR")]
    ExHardClear,
    #[strum(to_string = "FC", serialize = "FULLCOMBO CLEAR", serialize = "FULL COMBO")]
    FullCombo,
}

impl Lamp {
    /// Parse the clear-type text of the score CSV
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_str(text.trim()).map_err(|_| Error::UnknownLamp(text.to_string()))
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_clear(&self) -> bool {
        *self >= Self::AssistClear
    }
}

impl std::fmt::Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
