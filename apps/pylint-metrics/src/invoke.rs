//! Analyzer invocation: one pylint process for all requested modules.

use crate::errors::MetricsError;
use crate::models::RawReport;
use log::{debug, info, warn};
use std::process::{Command, Stdio};

/// Message categories encoded in pylint's exit status bits.
const STATUS_BITS: [(i32, &str); 6] = [
    (1, "fatal"),
    (2, "error"),
    (4, "warning"),
    (8, "refactor"),
    (16, "convention"),
    (32, "usage error"),
];

#[derive(Debug, Clone)]
/// A pylint command line.
pub struct Invocation {
    pub program: String,
    pub modules: Vec<String>,
    pub rcfile: Option<String>,
    pub extra_args: Vec<String>,
}

impl Invocation {
    /// Arguments after the program name:
    /// `<modules...> --reports=y [--rcfile=<path>] [extra...]`.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.modules.clone();
        args.push("--reports=y".to_string());
        if let Some(rc) = &self.rcfile {
            args.push(format!("--rcfile={}", rc));
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Printable form for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run pylint and capture its stdout.
///
/// pylint exits non-zero whenever it emits messages; that status is logged
/// and otherwise ignored. Only a missing or unstartable executable fails.
pub fn run(inv: &Invocation) -> Result<RawReport, MetricsError> {
    let program = which::which(&inv.program).map_err(|e| MetricsError::ToolNotFound {
        tool: inv.program.clone(),
        reason: e.to_string(),
    })?;
    info!("running {}", inv.command_line());

    let output = Command::new(&program)
        .args(inv.args())
        .stdin(Stdio::null())
        .output()
        .map_err(|e| MetricsError::ToolNotFound {
            tool: inv.program.clone(),
            reason: e.to_string(),
        })?;

    match output.status.code() {
        Some(0) => debug!("{} exited cleanly", inv.program),
        Some(code) => debug!(
            "{} exited with status {} ({})",
            inv.program,
            code,
            describe_status(code).join(", ")
        ),
        None => warn!("{} was terminated by a signal", inv.program),
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!("{} stderr: {}", inv.program, stderr.trim_end());
    }
    debug!("captured {} bytes of output", output.stdout.len());

    let report = RawReport::new(output.stdout);
    if report.is_blank() {
        warn!("{} produced no output", inv.program);
    }
    Ok(report)
}

/// Names of the categories set in a pylint exit status.
pub fn describe_status(code: i32) -> Vec<&'static str> {
    STATUS_BITS
        .iter()
        .filter(|(bit, _)| code & bit != 0)
        .map(|(_, name)| *name)
        .collect()
}
