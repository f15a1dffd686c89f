//! Happyhour - a command-line directory of happy hour venues
//!
//! The interesting part is the schedule matching core: free-form,
//! spreadsheet-sourced schedule strings are normalized into minute-of-day
//! windows and matched against day/time queries. The CLI, storage, and
//! ingest layers are thin glue around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod ingest;
pub mod storage;
pub mod utils;

// Re-export the matching core for library consumers
pub use crate::core::{
    data::{Day, Venue, VenueCollection, VenueFilter, WeeklySchedule},
    matcher::{matches_at_time, matches_day_only, matches_now},
    schedule::{DaySchedule, TimeWindow, normalize, parse_time_token},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
