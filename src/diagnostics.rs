//! Diagnostics for the permissive markdown parsers.
//!
//! Parsing never fails. Lines that no rule matches are dropped, and each drop
//! is recorded here (and emitted as a `trace` event) so odd content can be
//! debugged without changing what gets parsed.

use serde::Serialize;

/// A line the parser discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number, shifted by any enclosing [`Diagnostics::within`].
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Front-matter line not of the form `key: value`.
    MalformedConfigLine,
    /// Body text before the first `# Heading`.
    BeforeFirstSection,
    /// Sub-item text before the first `## Heading`.
    BeforeFirstItem,
    /// Line inside a sub-item matching no known label.
    UnrecognizedLabel,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MalformedConfigLine => "malformed config line",
            SkipReason::BeforeFirstSection => "text before first section",
            SkipReason::BeforeFirstItem => "text before first item",
            SkipReason::UnrecognizedLabel => "unrecognized label",
        }
    }
}

/// Collects skipped lines from one or more parser runs.
///
/// Parsers number lines from the start of the text they are given. When that
/// text is a slice of a larger file, run the parser inside [`Diagnostics::within`]
/// so recorded line numbers refer to the file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    skipped: Vec<SkippedLine>,
    #[serde(skip)]
    base: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped line. Blank lines are never recorded.
    pub fn skip(&mut self, line: usize, text: &str, reason: SkipReason) {
        if text.trim().is_empty() {
            return;
        }
        let line = self.base + line;
        tracing::trace!(line, text, reason = reason.as_str(), "skipped line");
        self.skipped.push(SkippedLine {
            line,
            text: text.to_string(),
            reason,
        });
    }

    /// Run `f` with line numbers shifted by `preceding` lines. Nests.
    pub fn within<R>(&mut self, preceding: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.base += preceding;
        let result = f(self);
        self.base -= preceding;
        result
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_not_recorded() {
        let mut diag = Diagnostics::new();
        diag.skip(1, "   ", SkipReason::UnrecognizedLabel);
        diag.skip(2, "stray", SkipReason::UnrecognizedLabel);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.skipped()[0].line, 2);
        assert_eq!(diag.skipped()[0].text, "stray");
    }

    #[test]
    fn test_within_shifts_and_restores() {
        let mut diag = Diagnostics::new();
        diag.within(4, |d| {
            d.skip(1, "outer", SkipReason::BeforeFirstSection);
            d.within(3, |d| d.skip(2, "inner", SkipReason::UnrecognizedLabel));
        });
        diag.skip(7, "after", SkipReason::UnrecognizedLabel);

        let lines: Vec<usize> = diag.skipped().iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![5, 9, 7]);
    }
}
