//! Diagnostic formatting for better error messages
//!
//! This module renders lexer errors with source code context and a caret
//! pointing at the offending character.

use super::{LexError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a LexError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();
        let location = &self.error.location;

        // Error header
        let label = self.error.label().red().bold();
        output.push_str(&format!("{}: {}\n", label, self.error.kind));

        let position = match self.error.filename {
            Some(ref name) => format!("{}:{}", name, location),
            None => location.to_string(),
        };
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), position));

        if let Some(source) = self.source {
            output.push_str(&self.format_source_context(source, location));
        }

        output
    }

    /// Format source code context around the error location
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        // An error at the very end of input that follows a trailing newline
        // sits on a line `lines()` does not yield.
        if location.line == 0 || location.line > lines.len() + 1 {
            return output;
        }

        let line_idx = location.line - 1;
        let current = lines.get(line_idx).copied().unwrap_or("");
        let line_num_width = location.line.to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            current
        ));

        let indicator_padding = " ".repeat(line_num_width + 2 + location.column.saturating_sub(1) + 1);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;

    fn plain(diag: &Diagnostic<'_>) -> String {
        colored::control::set_override(false);
        diag.format()
    }

    #[test]
    fn test_diagnostic_without_source() {
        let err = LexError::new(LexErrorKind::InvalidCharacter('@'), SourceLocation::start());
        let formatted = plain(&Diagnostic::new(&err));

        assert!(formatted.contains("Invalid Character"));
        assert!(formatted.contains("invalid character '@'"));
        assert!(formatted.contains("--> 1:1"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "let x = 42\nlet y = @\nlet z = 10";
        let err = LexError::new(
            LexErrorKind::InvalidCharacter('@'),
            SourceLocation::new(19, 2, 9),
        );
        let formatted = plain(&Diagnostic::with_source(&err, source));

        assert!(formatted.contains("let x = 42"));
        assert!(formatted.contains("let y = @"));
        assert!(formatted.contains("let z = 10"));

        // The caret sits directly under the '@'.
        let error_line = formatted.lines().find(|l| l.ends_with("let y = @")).unwrap();
        let caret_line = formatted.lines().find(|l| l.trim() == "^").unwrap();
        assert_eq!(caret_line.find('^'), error_line.find('@'));
    }

    #[test]
    fn test_diagnostic_with_filename() {
        let err = LexError::new(LexErrorKind::UnterminatedString, SourceLocation::start())
            .with_filename("main.em");
        let formatted = plain(&Diagnostic::with_source(&err, "\"abc"));
        assert!(formatted.contains("--> main.em:1:1"));
    }

    #[test]
    fn test_diagnostic_past_last_line() {
        let err = LexError::new(LexErrorKind::UnterminatedComment, SourceLocation::new(6, 2, 1));
        let formatted = plain(&Diagnostic::with_source(&err, "/* x \n"));
        assert!(formatted.contains("/* x"));
        assert!(formatted.contains('^'));
    }
}
