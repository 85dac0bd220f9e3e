//! Score-related types.
//!
//! - `Grade` - letter grades (F, E, D, C, B, A, AA, AAA)
//! - `Lamp` - clear lamps as written by the score CSV
//! - score rate helpers (max EX score, percentage formatting)

mod grade;
mod lamp;
mod rate;

pub use grade::*;
pub use lamp::*;
pub use rate::*;
