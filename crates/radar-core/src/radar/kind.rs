use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

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
pub enum RadarKind {
    #[strum(serialize = "NOTES")]
    #[serde(rename = "NOTES")]
    Notes = 0,
    #[strum(serialize = "CHORD")]
    #[serde(rename = "CHORD")]
    Chord = 1,
    #[strum(serialize = "PEAK")]
    #[serde(rename = "PEAK")]
    Peak = 2,
    #[strum(serialize = "CHARGE")]
    #[serde(rename = "CHARGE")]
    Charge = 3,
    #[strum(serialize = "SCRATCH")]
    #[serde(rename = "SCRATCH")]
    Scratch = 4,
    #[strum(serialize = "SOF-RAN")]
    #[serde(rename = "SOF-RAN")]
    SofRan = 5,
}

impl RadarKind {
    pub const ALL: [Self; 6] = [
        Self::Notes,
        Self::Chord,
        Self::Peak,
        Self::Charge,
        Self::Scratch,
        Self::SofRan,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Parse a radar label, rejecting anything outside the six kinds
    pub fn parse(label: &str) -> Result<Self> {
        Self::from_str(label).map_err(|_| Error::UnknownRadarKind(label.to_string()))
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for RadarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
