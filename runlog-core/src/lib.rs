//! Core library for runlog, a personal running log.
//!
//! - **run**: a single run, its validated elapsed time and derived pace
//! - **ledger**: runs kept sorted by date with the fastest and longest run tracked
//! - **config**: user configuration loaded from TOML

pub mod config;
pub mod error;
pub mod ledger;
pub mod run;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{Result, RunLogError, ValidationError};
pub use ledger::{Ledger, RunRecord};
pub use run::{ElapsedTime, Pace, RunEntry};
pub use utils::date_utils::parse_iso_date;
