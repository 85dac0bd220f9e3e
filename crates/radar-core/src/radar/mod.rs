//! Radar dimensions and per-dimension containers.
//!
//! - `RadarKind` - the six radar dimensions (NOTES, CHORD, PEAK, CHARGE, SCRATCH, SOF-RAN)
//! - `RadarMap` - one value per radar kind
//! - `CandidatesData`, `RadarAverageValues` - aggregation results

mod kind;
mod map;

pub use kind::*;
pub use map::*;

use crate::music::MusicData;

/// Charts grouped by radar kind, best contribution first
pub type CandidatesData = RadarMap<Vec<MusicData>>;

/// Player radar value per kind
pub type RadarAverageValues = RadarMap<RadarValue>;
