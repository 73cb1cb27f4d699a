//! Rendering of token dumps and diagnostics for the terminal.

use jera_lexer::{Diagnostics, Report, ReportLevel, Token};

/// ANSI color codes for severity labels.
mod colors {
    pub const INFO: &str = "\x1b[36m"; // Cyan
    pub const WARNING: &str = "\x1b[33m"; // Yellow
    pub const ERROR: &str = "\x1b[31m"; // Red
    pub const RESET: &str = "\x1b[0m";
}

/// When to color diagnostic labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// One line per token, in the `Kind: 'text' (offset) (line.col)` form.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// A single diagnostic line, optionally with a colored severity label.
pub fn render_report(report: &Report, colors: bool) -> String {
    if !colors {
        return report.to_string();
    }

    let color = match report.level {
        ReportLevel::Info => colors::INFO,
        ReportLevel::Warning => colors::WARNING,
        ReportLevel::Error => colors::ERROR,
    };
    format!(
        "{} {color}{}{}: {}",
        report.location(),
        report.level,
        colors::RESET,
        report.message
    )
}

pub fn render_diagnostics(diagnostics: &Diagnostics, colors: bool) -> String {
    let mut out = String::new();
    for report in diagnostics {
        out.push_str(&render_report(report, colors));
        out.push('\n');
    }
    out
}

/// Exit status after a failed run: non-zero only when an error was reported.
pub fn exit_status(diagnostics: &Diagnostics) -> i32 {
    i32::from(diagnostics.has_errors())
}

pub fn tokens_json(tokens: &[Token<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

pub fn diagnostics_json(diagnostics: &Diagnostics) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(diagnostics)
}
