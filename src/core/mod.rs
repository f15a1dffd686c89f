//! Core matching engine
//!
//! Venue records, schedule normalization, and the day/time query matcher.
//! Everything in here is pure and side-effect free; the command layer owns
//! all I/O.

pub mod data;
pub mod matcher;
pub mod schedule;
