//! Chart-related types.
//!
//! - `PlayStyle` - SP / DP
//! - `Difficulty` - difficulty tiers (SPB, SPN, SPH, SPA, SPL, DPB, DPN, DPH, DPA, DPL)

mod difficulty;

pub use difficulty::*;
