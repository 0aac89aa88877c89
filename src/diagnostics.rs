//! Diagnostics - lowering diagnostics collection and output
//!
//! The diagnostic sink is the sole surface of degraded translations:
//! lowering never aborts, it records what it had to give up on. The sink
//! is append-only and order-preserving.

use crate::graph::SourceLocation;
use serde::Serialize;

/// Diagnostic codes emitted by the lowering core
pub mod codes {
    /// An expression form with no lowering rule
    pub const UNSUPPORTED_EXPR: &str = "MMS-UNSUPPORTED-EXPR";
    /// A comparison with other than exactly one operator
    pub const COMPARISON_CHAIN: &str = "MMS-COMPARISON-CHAIN";
    /// A constant whose dynamic kind is not in the known set
    pub const UNKNOWN_LITERAL: &str = "MMS-UNKNOWN-LITERAL";
    /// A keyword argument without a name (`**kwargs` unpacking)
    pub const KWARG_UNPACK: &str = "MMS-KWARG-UNPACK";
    /// An `await` whose suspension semantics are dropped from the graph
    pub const AWAIT_ERASED: &str = "MMS-AWAIT-ERASED";
    /// Entry/exit and classification traces
    pub const TRACE: &str = "MMS-TRACE";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Info,
    Debug,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        code: &str,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity,
            location,
        }
    }

    pub fn error(code: &str, message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::new(Severity::Error, code, message, location)
    }

    pub fn info(code: &str, message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::new(Severity::Info, code, message, location)
    }

    pub fn debug(code: &str, message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::new(Severity::Debug, code, message, location)
    }
}

/// Append-only collection of diagnostics
#[derive(Debug, Clone, Serialize, Default)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Only error-severity entries count as errors; traces do not
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for diag in &self.diagnostics {
            match &diag.location {
                Some(loc) if loc.is_known() => {
                    out.push_str(&format!("[{}] {} {}\n", diag.code, loc, diag.message));
                }
                _ => {
                    out.push_str(&format!("[{}] {}\n", diag.code, diag.message));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors_ignores_traces() {
        let mut diags = Diagnostics::new();
        diags.add(Diagnostic::info(codes::TRACE, "start", None));
        diags.add(Diagnostic::debug(codes::TRACE, "classified", None));
        assert!(!diags.has_errors());

        diags.add(Diagnostic::error(codes::UNSUPPORTED_EXPR, "lambda", None));
        assert!(diags.has_errors());
        assert_eq!(diags.errors().count(), 1);
    }

    #[test]
    fn test_to_text_includes_code_and_location() {
        let mut diags = Diagnostics::new();
        diags.add(Diagnostic::error(
            codes::COMPARISON_CHAIN,
            "chain of 2 operators",
            Some(SourceLocation::new(3, 1, 3, 10)),
        ));
        let text = diags.to_text();
        assert!(text.contains("MMS-COMPARISON-CHAIN"));
        assert!(text.contains("[3:1]"));
    }

    #[test]
    fn test_append_order_preserved() {
        let mut diags = Diagnostics::new();
        diags.add(Diagnostic::error(codes::KWARG_UNPACK, "first", None));
        diags.add(Diagnostic::error(codes::UNKNOWN_LITERAL, "second", None));
        let codes_in_order: Vec<&str> = diags.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(
            codes_in_order,
            vec!["MMS-KWARG-UNPACK", "MMS-UNKNOWN-LITERAL"]
        );
    }
}
