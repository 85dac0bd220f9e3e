use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

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
pub enum Grade {
    #[default]
    #[strum(serialize = "-", serialize = "---")]
    NoPlay,
    F,
    E,
    D,
    C,
    B,
    A,
    #[strum(serialize = "AA")]
    Aa,
    #[strum(serialize = "AAA")]
    Aaa,
}

impl Grade {
    pub fn from_score_ratio(ratio: f64) -> Self {
        if ratio >= 8.0 / 9.0 {
            Self::Aaa
        } else if ratio >= 7.0 / 9.0 {
            Self::Aa
        } else if ratio >= 6.0 / 9.0 {
            Self::A
        } else if ratio >= 5.0 / 9.0 {
            Self::B
        } else if ratio >= 4.0 / 9.0 {
            Self::C
        } else if ratio >= 3.0 / 9.0 {
            Self::D
        } else if ratio >= 2.0 / 9.0 {
            Self::E
        } else {
            Self::F
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::NoPlay => "-",
            _ => self.into(),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
