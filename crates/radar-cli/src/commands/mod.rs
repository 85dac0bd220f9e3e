//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod analyze;
pub mod check_master;
pub mod columns;
pub mod merge_master;
