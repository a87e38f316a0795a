/*!
 * Plain text line adapter for the reflow engine.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::engine::{reflow, ReflowLimits, ReflowUnit};

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One line of plain text, no timing attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Line { text: text.into() }
    }
}

impl ReflowUnit for Line {
    fn text(&self) -> &str {
        &self.text
    }

    fn split_into(self, chunks: Vec<String>) -> Vec<Self> {
        chunks.into_iter().map(Line::new).collect()
    }

    fn merge(self, _later: Self, text: String) -> Self {
        Line::new(text)
    }

    fn rebalance(self, _later: Self, first: String, second: String) -> (Self, Self) {
        (Line::new(first), Line::new(second))
    }
}

/// Split on newlines, trim, and drop blank lines
pub fn parse_lines(content: &str) -> Vec<Line> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Line::new)
        .collect()
}

/// Split long lines, then merge and rebalance short ones.
///
/// Runs of whitespace inside a line are collapsed first so that words are
/// separated by exactly one space.
pub fn reflow_lines(lines: Vec<Line>, limits: ReflowLimits) -> Vec<Line> {
    let lines = lines
        .into_iter()
        .map(|line| Line::new(WHITESPACE_REGEX.replace_all(&line.text, " ").into_owned()))
        .collect();
    reflow(lines, limits)
}

/// Join lines with newlines
pub fn join_lines(lines: &[Line]) -> String {
    lines.iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
