//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Structural problems in a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace
    #[error("template is empty")]
    EmptyTemplate,

    /// A blank line between rows
    #[error("line {line}: empty line inside template")]
    EmptyLine { line: usize, span: Span },

    /// A row with more than prefix, main and suffix segments
    #[error("line {line}: {count} segments, expected at most 3 (prefix*main*suffix)")]
    TooManySegments {
        line: usize,
        count: usize,
        span: Span,
    },
}

impl ParseError {
    pub fn empty_line(line: usize, span: Span) -> Self {
        Self::EmptyLine { line, span }
    }

    pub fn too_many_segments(line: usize, count: usize, span: Span) -> Self {
        Self::TooManySegments { line, count, span }
    }

    /// 1-based template line, if the error points at one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyTemplate => None,
            Self::EmptyLine { line, .. } | Self::TooManySegments { line, .. } => Some(*line),
        }
    }

    /// Byte span in the template, if the error points at one
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::EmptyTemplate => None,
            Self::EmptyLine { span, .. } | Self::TooManySegments { span, .. } => Some(span),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().cloned().unwrap_or(0..0);
        // ariadne counts characters, spans are bytes
        let start = char_offset(source, span.start);
        let mut end = char_offset(source, span.end).max(start);
        // blank lines have empty spans; underline the line break instead
        if end == start && start < source.chars().count() {
            end = start + 1;
        }
        let message = self.to_string();

        let hint = match self {
            Self::EmptyTemplate => "no rows found",
            Self::EmptyLine { .. } => "remove this blank line",
            Self::TooManySegments { .. } => "use at most two '*' per row",
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_message(&message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(hint)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
