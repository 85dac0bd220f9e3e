use std::ops::{Index, IndexMut};

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use super::RadarKind;

/// One value per radar kind
///
/// Serialized as an object keyed by the radar labels. All six keys are
/// required and unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadarMap<T> {
    #[serde(rename = "NOTES")]
    pub notes: T,
    #[serde(rename = "CHORD")]
    pub chord: T,
    #[serde(rename = "PEAK")]
    pub peak: T,
    #[serde(rename = "CHARGE")]
    pub charge: T,
    #[serde(rename = "SCRATCH")]
    pub scratch: T,
    #[serde(rename = "SOF-RAN")]
    pub sof_ran: T,
}

impl<T> RadarMap<T> {
    pub fn from_fn(mut f: impl FnMut(RadarKind) -> T) -> Self {
        Self {
            notes: f(RadarKind::Notes),
            chord: f(RadarKind::Chord),
            peak: f(RadarKind::Peak),
            charge: f(RadarKind::Charge),
            scratch: f(RadarKind::Scratch),
            sof_ran: f(RadarKind::SofRan),
        }
    }

    pub fn get(&self, kind: RadarKind) -> &T {
        match kind {
            RadarKind::Notes => &self.notes,
            RadarKind::Chord => &self.chord,
            RadarKind::Peak => &self.peak,
            RadarKind::Charge => &self.charge,
            RadarKind::Scratch => &self.scratch,
            RadarKind::SofRan => &self.sof_ran,
        }
    }

    pub fn get_mut(&mut self, kind: RadarKind) -> &mut T {
        match kind {
            RadarKind::Notes => &mut self.notes,
            RadarKind::Chord => &mut self.chord,
            RadarKind::Peak => &mut self.peak,
            RadarKind::Charge => &mut self.charge,
            RadarKind::Scratch => &mut self.scratch,
            RadarKind::SofRan => &mut self.sof_ran,
        }
    }

    /// Iterate in radar order (NOTES first, SOF-RAN last)
    pub fn iter(&self) -> impl Iterator<Item = (RadarKind, &T)> {
        RadarKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(RadarKind, &T) -> U) -> RadarMap<U> {
        RadarMap::from_fn(|kind| f(kind, self.get(kind)))
    }
}

impl<T> Index<RadarKind> for RadarMap<T> {
    type Output = T;

    fn index(&self, kind: RadarKind) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<RadarKind> for RadarMap<T> {
    fn index_mut(&mut self, kind: RadarKind) -> &mut T {
        self.get_mut(kind)
    }
}

/// A radar value
///
/// Serialized as a number. Older exports wrote averages as strings, so a
/// numeric string is accepted on input too.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RadarValue(pub f64);

impl RadarValue {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for RadarValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RadarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for RadarValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Text(text) => text.trim().parse::<f64>().map(Self).map_err(|_| {
                de::Error::invalid_value(Unexpected::Str(&text), &"a numeric radar value")
            }),
        }
    }
}

impl RadarMap<RadarValue> {
    /// Sum of all six values (the TOTAL shown next to the radar chart)
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v.0).sum()
    }
}
