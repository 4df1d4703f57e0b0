//! pylint-metrics core library.
//!
//! Runs pylint over a set of modules and turns its text report into a
//! structured summary.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `invoke`: Builds and runs the pylint command line.
//! - `extract`: Pattern-based metric extraction from the report text.
//! - `output`: Human/JSON rendering and file writers.
//! - `models`: Raw report and summary structs.
//! - `errors`: Terminal error conditions and their exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod invoke;
pub mod models;
pub mod output;
pub mod utils;
