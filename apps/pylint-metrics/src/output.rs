//! Output rendering for the metrics summary and the raw report.
//!
//! Supports `human` (default) and `json` renderings. The same rendering goes
//! to the terminal or to the `-f` file; files never carry color codes.

use crate::errors::MetricsError;
use crate::models::{MetricsSummary, RawReport};
use owo_colors::OwoColorize;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Summary rendering.
pub enum OutputFormat {
    /// One `name: value` line per field.
    #[default]
    Human,
    /// Pretty-printed JSON object.
    Json,
}

fn use_colors(format: OutputFormat) -> bool {
    format != OutputFormat::Json
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}

/// Render the summary as text, newline-terminated.
pub fn render_metrics(summary: &MetricsSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format!("{:#}\n", compose_metrics_json(summary)),
        OutputFormat::Human => summary
            .fields()
            .into_iter()
            .map(|(k, v)| format!("{}: {}\n", k, v))
            .collect(),
    }
}

/// Print the summary to stdout.
pub fn print_metrics(summary: &MetricsSummary, format: OutputFormat) {
    if !use_colors(format) {
        print!("{}", render_metrics(summary, format));
        return;
    }
    for (k, v) in summary.fields() {
        let label = format!("{}:", k);
        if k == "score" {
            println!("{} {}", label.green().bold(), v.bold());
        } else {
            println!("{} {}", label.cyan(), v);
        }
    }
}

/// Write the summary to `path`, replacing any existing content.
pub fn write_metrics(
    path: &Path,
    summary: &MetricsSummary,
    format: OutputFormat,
) -> Result<(), MetricsError> {
    write_file(path, render_metrics(summary, format).as_bytes())
}

/// Write the raw report to `path` byte-for-byte, or only its message part
/// when `strip_reports` is set.
pub fn write_raw(path: &Path, report: &RawReport, strip_reports: bool) -> Result<(), MetricsError> {
    let bytes = if strip_reports {
        report.without_reports()
    } else {
        report.as_bytes()
    };
    write_file(path, bytes)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), MetricsError> {
    fs::write(path, contents).map_err(|source| MetricsError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Compose the summary JSON object (pure) for testing/snapshot purposes.
pub fn compose_metrics_json(s: &MetricsSummary) -> JsonVal {
    json!({
        "raw": {
            "code": s.raw.code,
            "docstring": s.raw.docstring,
            "comment": s.raw.comment,
            "empty": s.raw.empty,
        },
        "duplication": {
            "nb_duplicated_lines": s.duplication.nb_duplicated_lines,
            "percent_duplicated_lines": s.duplication.percent_duplicated_lines,
        },
        "messages": {
            "convention": s.messages.convention,
            "refactor": s.messages.refactor,
            "warning": s.messages.warning,
            "error": s.messages.error,
        },
        "score": s.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageCounts;
    use tempfile::tempdir;

    fn sample() -> MetricsSummary {
        MetricsSummary {
            messages: MessageCounts {
                convention: 3,
                warning: 1,
                ..Default::default()
            },
            score: 8.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_human_lines() {
        let out = render_metrics(&sample(), OutputFormat::Human);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "code: 0");
        assert!(lines.contains(&"convention: 3"));
        assert!(lines.contains(&"warning: 1"));
        assert_eq!(lines[10], "score: 8.50");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_json_parses_back() {
        let out = render_metrics(&sample(), OutputFormat::Json);
        let v: JsonVal = serde_json::from_str(&out).unwrap();
        assert_eq!(v["messages"]["convention"], 3);
        assert_eq!(v["messages"]["refactor"], 0);
        assert_eq!(v["score"], 8.5);
        assert_eq!(v, compose_metrics_json(&sample()));
    }

    #[test]
    fn test_write_metrics_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.txt");
        fs::write(&path, "stale content that is longer than needed\n".repeat(20)).unwrap();
        write_metrics(&path, &sample(), OutputFormat::Human).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            render_metrics(&sample(), OutputFormat::Human)
        );
    }

    #[test]
    fn test_write_raw_is_byte_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let text = "a.py:1:0: C0114: x\r\n\tü trailing  \n\nReport\n======\n";
        write_raw(&path, &RawReport::new(text), false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), text.as_bytes());

        write_raw(&path, &RawReport::new(text), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a.py:1:0: C0114: x\r\n\tü trailing  \n\n");

        // latin-1 source echoed by pylint is not valid UTF-8
        let latin1 = b"x.py:1:0: C0103: Constant name \"caf\xe9\"\n".to_vec();
        write_raw(&path, &RawReport::new(latin1.clone()), false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), latin1);
    }

    #[test]
    fn test_unwritable_path_is_write_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("metrics.txt");
        let err = write_metrics(&path, &sample(), OutputFormat::Human).unwrap_err();
        match err {
            MetricsError::WriteFailure { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
