//! Source text access
//!
//! Derives code snippets and location annotations from node spans.
//! The text is optional: trees arriving without their original source
//! still lower fine, they just carry empty snippets.

use super::Span;
use crate::graph::SourceLocation;

/// The source text an expression tree was parsed from
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    text: Option<String>,
    file: Option<String>,
}

impl SourceText {
    /// No source available; snippets come out empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    pub fn with_file(text: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: Some(file.into()),
        }
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source snippet covered by `span`, or "" when no text is available
    /// or the span is out of bounds
    pub fn snippet(&self, span: &Span) -> String {
        let Some(text) = &self.text else {
            return String::new();
        };
        if span.start >= span.end || span.end > text.len() {
            return String::new();
        }
        if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            return String::new();
        }
        text[span.start..span.end].to_string()
    }

    /// Location annotation exactly covering `span`
    pub fn location(&self, span: &Span) -> SourceLocation {
        let mut loc = SourceLocation::new(span.line, span.column, span.end_line, span.end_column);
        if let Some(file) = &self.file {
            loc = loc.with_file(file.clone());
        }
        loc
    }

    /// Location annotation covering two spans, e.g. a key/value pair
    /// bound to one produced node
    pub fn location_pair(&self, first: &Span, second: &Span) -> SourceLocation {
        self.location(first).covering(&self.location(second))
    }
}
