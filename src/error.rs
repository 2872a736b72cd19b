//! Error types for template construction and substitution

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::position::Position;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while substituting a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstituteError {
    /// A placeholder names a key the lookup table does not contain
    #[error("key not found: {key}")]
    KeyNotFound { key: String, span: Span },

    /// The delimiter is followed by something that is not a placeholder
    #[error("invalid placeholder in string: line {}, col {}", .position.line, .position.column)]
    InvalidPlaceholder { position: Position, span: Span },

    /// A match fired none of the placeholder alternatives
    #[error("unrecognized group in pattern")]
    UnrecognizedMatch,

    /// The output sink refused a write
    #[error("failed to write output")]
    Write(#[from] std::fmt::Error),
}

/// Errors raised while building a template
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template delimiter must not be empty")]
    EmptyDelimiter,

    #[error("invalid template pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to read template spec file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse template spec TOML: {0}")]
    Config(#[from] toml::de::Error),
}

impl SubstituteError {
    /// Source span the error points at, if any
    pub fn span(&self) -> Option<&Span> {
        match self {
            SubstituteError::KeyNotFound { span, .. }
            | SubstituteError::InvalidPlaceholder { span, .. } => Some(span),
            SubstituteError::UnrecognizedMatch | SubstituteError::Write(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn report(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };
        // ariadne counts in chars, spans are bytes
        let start = char_offset(source, span.start);
        let end = char_offset(source, span.end).max(start + 1);

        let label = match self {
            SubstituteError::KeyNotFound { key, .. } => {
                format!("no value for `{}`", key)
            }
            _ => "delimiter is not followed by an identifier".to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(Label::new((filename, start..end)).with_message(label))
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    source
        .get(..byte)
        .map_or_else(|| source.chars().count(), |s| s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_key_not_found_message() {
        let err = SubstituteError::KeyNotFound {
            key: "where".to_string(),
            span: 11..17,
        };
        assert_snapshot!(err.to_string(), @"key not found: where");
    }

    #[test]
    fn test_invalid_placeholder_message() {
        let err = SubstituteError::InvalidPlaceholder {
            position: Position::new(1, 12),
            span: 11..12,
        };
        assert_snapshot!(err.to_string(), @"invalid placeholder in string: line 1, col 12");
    }

    #[test]
    fn test_report_points_at_source() {
        let source = "$who likes $.";
        let err = SubstituteError::InvalidPlaceholder {
            position: Position::new(1, 12),
            span: 11..12,
        };
        let report = err.report(source, "greeting.txt");
        assert!(report.contains("invalid placeholder in string: line 1, col 12"));
        assert!(report.contains("greeting.txt"));
        assert!(report.contains(source));
    }

    #[test]
    fn test_report_without_span_is_plain_message() {
        let err = SubstituteError::UnrecognizedMatch;
        assert_eq!(err.report("$x", "t"), "unrecognized group in pattern");
    }

    #[test]
    fn test_char_offset_handles_multibyte() {
        assert_eq!(char_offset("héllo", 3), 2);
        assert_eq!(char_offset("abc", 10), 3);
    }
}
