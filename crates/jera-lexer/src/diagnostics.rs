use std::fmt;

use serde::Serialize;

use crate::token::Position;

/// Severity of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportLevel::Info => "Info",
            ReportLevel::Warning => "Warning",
            ReportLevel::Error => "Error",
        })
    }
}

/// A single diagnostic produced while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub message: String,
    pub level: ReportLevel,
    pub position: Position,
}

impl Report {
    pub fn new(message: impl Into<String>, level: ReportLevel, position: Position) -> Self {
        Self {
            message: message.into(),
            level,
            position,
        }
    }

    /// The `[Lexer] (offset) line:col` prefix shared by every rendering.
    pub fn location(&self) -> String {
        format!(
            "[Lexer] ({}) {}:{}",
            self.position.offset, self.position.line, self.position.column
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.location(), self.level, self.message)
    }
}

/// Append-only collection of reports, kept in detection order.
///
/// Returned as the error value of a failed lexer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("lexing failed with {} diagnostic(s)", .reports.len())]
#[serde(transparent)]
pub struct Diagnostics {
    reports: Vec<Report>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been reported.
    pub fn ok(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(|r| r.level == ReportLevel::Error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    pub fn push(&mut self, report: Report) {
        self.reports.push(report);
    }

    pub fn info(&mut self, message: impl Into<String>, position: Position) {
        self.push(Report::new(message, ReportLevel::Info, position));
    }

    pub fn warning(&mut self, message: impl Into<String>, position: Position) {
        self.push(Report::new(message, ReportLevel::Warning, position));
    }

    pub fn error(&mut self, message: impl Into<String>, position: Position) {
        self.push(Report::new(message, ReportLevel::Error, position));
    }
}

impl IntoIterator for Diagnostics {
    type Item = Report;
    type IntoIter = std::vec::IntoIter<Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_collector_is_ok() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.ok());
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.len(), 0);
    }

    #[test]
    fn test_reports_keep_insertion_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warning("first", Position::new(0, 1, 1));
        diagnostics.error("second", Position::new(5, 1, 6));
        diagnostics.info("third", Position::new(9, 2, 1));

        let messages: Vec<&str> = diagnostics.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(diagnostics.reports()[1].level, ReportLevel::Error);
    }

    #[test]
    fn test_any_report_clears_ok() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.info("just so you know", Position::new(0, 1, 1));
        assert!(!diagnostics.ok());
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn test_report_display() {
        let report = Report::new(
            "Unexpected character '$' (U+0024)",
            ReportLevel::Error,
            Position::new(2, 1, 3),
        );
        assert_eq!(
            report.to_string(),
            "[Lexer] (2) 1:3 Error: Unexpected character '$' (U+0024)"
        );
    }

    #[test]
    fn test_collector_error_message() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("a", Position::new(0, 1, 1));
        diagnostics.error("b", Position::new(1, 1, 2));
        assert_eq!(diagnostics.to_string(), "lexing failed with 2 diagnostic(s)");
    }
}
