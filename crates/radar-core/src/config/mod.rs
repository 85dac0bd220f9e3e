//! Configuration and support files.
//!
//! This module contains:
//! - `Config` - analysis settings loaded from a TOML file
//! - `TitleAliases` - CSV title to master title overrides
//! - Radar aggregation constants

mod aliases;
mod settings;

pub use aliases::*;
pub use settings::*;

/// Radar aggregation constants.
pub mod radar {
    /// Number of best charts per radar kind that make up the average.
    pub const TOP_COUNT: usize = 10;

    /// Decimal places for score rates and radar values.
    pub const DECIMALS: usize = 2;
}
