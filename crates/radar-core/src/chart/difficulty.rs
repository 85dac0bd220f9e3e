use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayStyle {
    #[default]
    #[strum(serialize = "SP")]
    #[serde(rename = "SP", alias = "sp")]
    Sp,
    #[strum(serialize = "DP")]
    #[serde(rename = "DP", alias = "dp")]
    Dp,
}

impl PlayStyle {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

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
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "SPB")]
    SpB = 0,
    #[strum(serialize = "SPN")]
    SpN = 1,
    #[strum(serialize = "SPH")]
    SpH = 2,
    #[strum(serialize = "SPA")]
    SpA = 3,
    #[strum(serialize = "SPL")]
    SpL = 4,
    #[strum(serialize = "DPB")]
    DpB = 5,
    #[strum(serialize = "DPN")]
    DpN = 6,
    #[strum(serialize = "DPH")]
    DpH = 7,
    #[strum(serialize = "DPA")]
    DpA = 8,
    #[strum(serialize = "DPL")]
    DpL = 9,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Parse a short name (`SPA`), reporting unknown names as an error
    pub fn parse(name: &str) -> crate::error::Result<Self> {
        Self::from_str(name.trim()).map_err(|_| Error::UnknownDifficulty(name.to_string()))
    }

    /// The five difficulties of a play style, easiest first
    pub fn for_style(style: PlayStyle) -> [Self; 5] {
        match style {
            PlayStyle::Sp => [Self::SpB, Self::SpN, Self::SpH, Self::SpA, Self::SpL],
            PlayStyle::Dp => [Self::DpB, Self::DpN, Self::DpH, Self::DpA, Self::DpL],
        }
    }

    pub fn style(&self) -> PlayStyle {
        if self.is_sp() {
            PlayStyle::Sp
        } else {
            PlayStyle::Dp
        }
    }

    pub fn is_sp(&self) -> bool {
        matches!(
            self,
            Self::SpB | Self::SpN | Self::SpH | Self::SpA | Self::SpL
        )
    }

    pub fn is_dp(&self) -> bool {
        !self.is_sp()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the expanded difficulty name (e.g., "NORMAL", "HYPER")
    ///
    /// This is also the column prefix used by the official score CSV.
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::SpB | Self::DpB => "BEGINNER",
            Self::SpN | Self::DpN => "NORMAL",
            Self::SpH | Self::DpH => "HYPER",
            Self::SpA | Self::DpA => "ANOTHER",
            Self::SpL | Self::DpL => "LEGGENDARIA",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_u8() {
        assert_eq!(Difficulty::from_u8(0), Some(Difficulty::SpB));
        assert_eq!(Difficulty::from_u8(4), Some(Difficulty::SpL));
        assert_eq!(Difficulty::from_u8(5), Some(Difficulty::DpB));
        assert_eq!(Difficulty::from_u8(9), Some(Difficulty::DpL));
        assert_eq!(Difficulty::from_u8(10), None);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("SPA").unwrap(), Difficulty::SpA);
        assert_eq!(Difficulty::parse(" DPL ").unwrap(), Difficulty::DpL);
        assert!(matches!(
            Difficulty::parse("SPX"),
            Err(Error::UnknownDifficulty(name)) if name == "SPX"
        ));
    }

    #[test]
    fn test_for_style() {
        let sp = Difficulty::for_style(PlayStyle::Sp);
        assert_eq!(sp[0], Difficulty::SpB);
        assert_eq!(sp[4], Difficulty::SpL);
        assert!(sp.iter().all(|d| d.style() == PlayStyle::Sp));

        let dp = Difficulty::for_style(PlayStyle::Dp);
        assert!(dp.iter().all(|d| d.is_dp()));
        assert_eq!(dp[3].expand_name(), "ANOTHER");
    }

    #[test]
    fn test_play_style_parse() {
        assert_eq!(PlayStyle::from_str("sp").unwrap(), PlayStyle::Sp);
        assert_eq!(PlayStyle::from_str("DP").unwrap(), PlayStyle::Dp);
        assert!(PlayStyle::from_str("XP").is_err());
    }
}
