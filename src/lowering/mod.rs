//! Expression lowering module
//!
//! Converts expression-tree nodes into graph nodes by pure recursive
//! descent: children are lowered bottom-up before their parent is
//! constructed, every produced node gets a source snippet and a location
//! annotation, and no input node is ever visited twice. The contract of
//! [`Lowerer::lower`] is total: every expression yields a graph node,
//! degraded forms yield the `Unsupported` placeholder plus a diagnostic,
//! nothing ever aborts the tree.

mod calls;
mod expressions;
pub mod literals;
pub mod operators;
pub mod records;

#[cfg(test)]
mod tests;

pub use records::{NoRecords, RecordHandle, RecordResolver, RecordTable};

use crate::ast::{ExprNode, SourceText, Span};
use crate::diagnostics::{codes, Diagnostic, Diagnostics, Severity};
use crate::graph::GraphNode;

/// Lower a single expression tree and collect the diagnostics produced
/// along the way
pub fn lower_expression(
    expr: &ExprNode,
    source: &SourceText,
    records: &dyn RecordResolver,
) -> (GraphNode, Diagnostics) {
    let mut lowerer = Lowerer::new(source, records);
    let node = lowerer.lower(expr);
    (node, lowerer.into_diagnostics())
}

/// Lowering context: the source text for snippets, the symbol-table
/// query interface, and the diagnostic sink. Passed explicitly into
/// every lowering step; there is no ambient state.
pub struct Lowerer<'a> {
    source: &'a SourceText,
    records: &'a dyn RecordResolver,
    diagnostics: Diagnostics,
}

impl<'a> Lowerer<'a> {
    pub fn new(source: &'a SourceText, records: &'a dyn RecordResolver) -> Self {
        Self {
            source,
            records,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Lower one expression node and attach its location annotation.
    ///
    /// The annotation always covers the originating node's span, even
    /// when the lowered node came out of a nested rule (the `await`
    /// path re-annotates the inner expression with the outer span).
    pub fn lower(&mut self, expr: &ExprNode) -> GraphNode {
        self.trace(
            Severity::Info,
            format!("start lowering: {}", self.source.snippet(&expr.span)),
            &expr.span,
        );
        let node = self.lower_impl(expr);
        let node = node.at(
            self.source.snippet(&expr.span),
            self.source.location(&expr.span),
        );
        self.trace(
            Severity::Info,
            format!("end lowering: {}", self.source.snippet(&expr.span)),
            &expr.span,
        );
        node
    }

    pub(crate) fn error(&mut self, code: &str, message: impl Into<String>, span: &Span) {
        let location = self.source.location(span);
        self.diagnostics
            .add(Diagnostic::error(code, message, Some(location)));
    }

    pub(crate) fn trace(&mut self, severity: Severity, message: impl Into<String>, span: &Span) {
        let location = self.source.location(span);
        self.diagnostics
            .add(Diagnostic::new(severity, codes::TRACE, message, Some(location)));
    }
}
