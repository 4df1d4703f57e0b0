//! Data models for the captured report and the extracted summary.

pub mod report;

pub use report::RawReport;

#[derive(Debug, Default, Clone, PartialEq)]
/// Line counts from the `Raw metrics` table.
pub struct RawMetrics {
    pub code: u64,
    pub docstring: u64,
    pub comment: u64,
    pub empty: u64,
}

#[derive(Debug, Default, Clone, PartialEq)]
/// Values from the `Duplication` table.
pub struct Duplication {
    pub nb_duplicated_lines: u64,
    pub percent_duplicated_lines: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
/// Message counts per category.
pub struct MessageCounts {
    pub convention: u64,
    pub refactor: u64,
    pub warning: u64,
    pub error: u64,
}

#[derive(Debug, Default, Clone, PartialEq)]
/// Everything extracted from one report. Absent fields stay zero.
pub struct MetricsSummary {
    pub raw: RawMetrics,
    pub duplication: Duplication,
    pub messages: MessageCounts,
    pub score: f64,
}

impl MetricsSummary {
    /// Fields as `(name, rendered value)` pairs in display order:
    /// raw metrics, duplication, messages, score.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("code", self.raw.code.to_string()),
            ("docstring", self.raw.docstring.to_string()),
            ("comment", self.raw.comment.to_string()),
            ("empty", self.raw.empty.to_string()),
            (
                "nb_duplicated_lines",
                self.duplication.nb_duplicated_lines.to_string(),
            ),
            (
                "percent_duplicated_lines",
                format!("{:.3}", self.duplication.percent_duplicated_lines),
            ),
            ("convention", self.messages.convention.to_string()),
            ("refactor", self.messages.refactor.to_string()),
            ("warning", self.messages.warning.to_string()),
            ("error", self.messages.error.to_string()),
            ("score", format!("{:.2}", self.score)),
        ]
    }
}
