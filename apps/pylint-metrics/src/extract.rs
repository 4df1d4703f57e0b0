//! Metric extraction from a pylint text report.
//!
//! The report is a loosely structured human-readable summary, so this is a
//! tagged search over fixed labels rather than a parser:
//! - `|label |value |...` rows inside the `Raw metrics`, `Duplication` and
//!   `Messages by category` sections (labels normalised to `snake_case`).
//! - Inline phrases like `3 convention, 1 warning` when the category table
//!   is absent. Message lines (`path:line:col: C0114: ...`) are skipped so
//!   their free text never counts.
//! - The first `Your code has been rated at X/10` line.
//!
//! Fields that never show up stay zero. A recognised field holding a
//! non-numeric value is a `MalformedReport`.

use crate::errors::MetricsError;
use crate::models::{MessageCounts, MetricsSummary, RawReport};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    RawMetrics,
    Duplication,
    Messages,
}

impl Section {
    fn from_heading(line: &str) -> Option<Section> {
        match line.trim() {
            "Raw metrics" => Some(Section::RawMetrics),
            "Duplication" => Some(Section::Duplication),
            "Messages by category" => Some(Section::Messages),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Section::RawMetrics => "Raw metrics",
            Section::Duplication => "Duplication",
            Section::Messages => "Messages by category",
        }
    }
}

fn score_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Your code has been rated at[ \t]*(?P<score>[^\s/]*)")
            .expect("score pattern is valid")
    })
}

fn inline_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?P<count>\d+)\s+(?P<category>convention|refactor|warning|error)s?\b")
            .expect("inline count pattern is valid")
    })
}

fn message_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.+?:\d+:\d+: [A-Z]\d{4}:").expect("message line pattern is valid")
    })
}

/// Scan `report` and build its `MetricsSummary`.
///
/// Pure and deterministic: the same report always yields the same summary.
pub fn extract(report: &RawReport) -> Result<MetricsSummary, MetricsError> {
    let text = report.as_text();
    let mut summary = MetricsSummary::default();
    let mut saw_category_table = false;
    let mut section: Option<Section> = None;

    for line in text.lines() {
        if let Some(s) = Section::from_heading(line) {
            saw_category_table |= s == Section::Messages;
            section = Some(s);
            continue;
        }
        let Some(current) = section else {
            continue;
        };
        let t = line.trim();
        // underline, table borders and spacing between heading and table
        if t.is_empty() || t.starts_with(['+', '-', '=']) {
            continue;
        }
        if t.starts_with('|') {
            if let Some((label, value)) = table_row(t) {
                apply_row(&mut summary, current, &label, value)?;
            }
        } else {
            section = None;
        }
    }

    if !saw_category_table {
        inline_counts(&text, &mut summary.messages);
    }
    summary.score = score(&text)?;
    Ok(summary)
}

/// First two cells of a `|label |value |...` row; the label is trimmed and
/// its inner whitespace replaced by `_`.
fn table_row(line: &str) -> Option<(String, &str)> {
    let mut cells = line.split('|').skip(1);
    let label = cells.next()?.split_whitespace().collect::<Vec<_>>().join("_");
    let value = cells.next()?.trim();
    Some((label, value))
}

fn apply_row(
    summary: &mut MetricsSummary,
    section: Section,
    label: &str,
    value: &str,
) -> Result<(), MetricsError> {
    let slot = match (section, label) {
        (Section::RawMetrics, "code") => &mut summary.raw.code,
        (Section::RawMetrics, "docstring") => &mut summary.raw.docstring,
        (Section::RawMetrics, "comment") => &mut summary.raw.comment,
        (Section::RawMetrics, "empty") => &mut summary.raw.empty,
        (Section::Duplication, "nb_duplicated_lines") => {
            &mut summary.duplication.nb_duplicated_lines
        }
        (Section::Duplication, "percent_duplicated_lines") => {
            summary.duplication.percent_duplicated_lines = number(section, label, value)?;
            return Ok(());
        }
        (Section::Messages, "convention") => &mut summary.messages.convention,
        (Section::Messages, "refactor") => &mut summary.messages.refactor,
        (Section::Messages, "warning") => &mut summary.messages.warning,
        (Section::Messages, "error") => &mut summary.messages.error,
        // header rows (`type`, empty) and anything unrecognised
        _ => return Ok(()),
    };
    // counts may be printed as `3.0`; truncate like an integer cast
    *slot = number(section, label, value)? as u64;
    Ok(())
}

fn number(section: Section, label: &str, value: &str) -> Result<f64, MetricsError> {
    value.parse::<f64>().map_err(|_| {
        MetricsError::MalformedReport(format!(
            "{} row `{}` holds {:?}, expected a number",
            section.title(),
            label,
            value
        ))
    })
}

fn inline_counts(text: &str, messages: &mut MessageCounts) {
    let mut seen: Vec<&str> = Vec::new();
    let captures = text
        .lines()
        .filter(|line| !message_line_re().is_match(line))
        .flat_map(|line| inline_count_re().captures_iter(line));
    for caps in captures {
        let category = caps.name("category").map_or("", |m| m.as_str());
        if seen.contains(&category) {
            continue;
        }
        let Ok(count) = caps["count"].parse::<u64>() else {
            continue;
        };
        let slot = match category {
            "convention" => &mut messages.convention,
            "refactor" => &mut messages.refactor,
            "warning" => &mut messages.warning,
            "error" => &mut messages.error,
            _ => continue,
        };
        *slot = count;
        seen.push(category);
    }
}

fn score(text: &str) -> Result<f64, MetricsError> {
    let Some(caps) = score_re().captures(text) else {
        return Ok(0.0);
    };
    let raw = &caps["score"];
    raw.parse::<f64>().map_err(|_| {
        MetricsError::MalformedReport(format!("score {:?} is not a number", raw))
    })
}
