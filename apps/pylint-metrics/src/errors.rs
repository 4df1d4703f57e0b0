//! Error taxonomy for a metrics run.
//!
//! Every variant is terminal: `main` prints it on stderr and exits with
//! [`MetricsError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// The analyzer executable could not be located or started.
    #[error("tool not found: {tool} ({reason})")]
    ToolNotFound { tool: String, reason: String },
    /// A recognised field in the report did not hold a number.
    #[error("malformed pylint report: {0}")]
    MalformedReport(String),
    /// An output file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MetricsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            // shell convention for a missing command; clap usage errors take 2
            MetricsError::ToolNotFound { .. } => 127,
            MetricsError::MalformedReport(_) => 3,
            MetricsError::WriteFailure { .. } => 4,
        }
    }
}
