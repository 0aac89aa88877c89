//! Diagnostic-surface tests: every degraded lowering path records a
//! diagnostic with the right code and severity, and the sink preserves
//! append order

use mamushi::ast::{CmpOp, Constant, Expr, ExprNode, Keyword, SourceText, Span};
use mamushi::diagnostics::{codes, Severity};
use mamushi::{lower_expression, NoRecords};

fn name(id: &str) -> ExprNode {
    ExprNode::synthetic(Expr::Name { id: id.to_string() })
}

fn lower_and_collect(expr: &ExprNode) -> Vec<(String, Severity)> {
    let (_, diags) = lower_expression(expr, &SourceText::empty(), &NoRecords);
    diags
        .iter()
        .map(|d| (d.code.clone(), d.severity))
        .collect()
}

#[test]
fn test_unsupported_construct_code() {
    let tree = ExprNode::synthetic(Expr::Lambda {
        params: vec![],
        body: Box::new(name("x")),
    });
    let entries = lower_and_collect(&tree);
    assert!(entries
        .iter()
        .any(|(code, sev)| code == codes::UNSUPPORTED_EXPR && *sev == Severity::Error));
}

#[test]
fn test_comparison_chain_code() {
    let tree = ExprNode::synthetic(Expr::Compare {
        left: Box::new(name("a")),
        ops: vec![CmpOp::Lt, CmpOp::Lt],
        comparators: vec![name("b"), name("c")],
    });
    let entries = lower_and_collect(&tree);
    assert!(entries
        .iter()
        .any(|(code, sev)| code == codes::COMPARISON_CHAIN && *sev == Severity::Error));
}

#[test]
fn test_unknown_literal_code() {
    let tree = ExprNode::synthetic(Expr::Constant {
        value: Constant::Ellipsis,
    });
    let entries = lower_and_collect(&tree);
    assert!(entries
        .iter()
        .any(|(code, sev)| code == codes::UNKNOWN_LITERAL && *sev == Severity::Error));
}

#[test]
fn test_kwarg_unpack_code() {
    let tree = ExprNode::synthetic(Expr::Call {
        func: Box::new(name("foo")),
        args: vec![],
        keywords: vec![Keyword {
            arg: None,
            value: name("kwargs"),
        }],
    });
    let entries = lower_and_collect(&tree);
    assert!(entries
        .iter()
        .any(|(code, sev)| code == codes::KWARG_UNPACK && *sev == Severity::Error));
}

#[test]
fn test_await_erasure_surfaces_as_an_error() {
    let tree = ExprNode::synthetic(Expr::Await {
        value: Box::new(name("x")),
    });
    let (_, diags) = lower_expression(&tree, &SourceText::empty(), &NoRecords);
    // The node is still lowered, but the dropped suspension semantics
    // must be visible on the error surface
    assert!(diags.has_errors());
    assert!(diags
        .iter()
        .any(|d| d.code == codes::AWAIT_ERASED && d.severity == Severity::Error));
}

#[test]
fn test_entry_and_exit_traces() {
    let (_, diags) = lower_expression(&name("x"), &SourceText::empty(), &NoRecords);
    let traces: Vec<_> = diags
        .iter()
        .filter(|d| d.code == codes::TRACE && d.severity == Severity::Info)
        .collect();
    assert_eq!(traces.len(), 2); // one entry, one exit
    assert!(!diags.has_errors());
}

#[test]
fn test_diagnostics_preserve_lowering_order() {
    // Two degraded children inside one list: the diagnostics must come
    // out in source order
    let tree = ExprNode::synthetic(Expr::List {
        elts: vec![
            ExprNode::synthetic(Expr::Yield { value: None }),
            ExprNode::synthetic(Expr::Constant {
                value: Constant::Ellipsis,
            }),
        ],
    });
    let (_, diags) = lower_expression(&tree, &SourceText::empty(), &NoRecords);
    let errors: Vec<&str> = diags.errors().map(|d| d.code.as_str()).collect();
    assert_eq!(errors, vec![codes::UNSUPPORTED_EXPR, codes::UNKNOWN_LITERAL]);
}

#[test]
fn test_diagnostic_location_comes_from_the_span() {
    let source = SourceText::with_file("a < b < c", "chain.py");
    let tree = ExprNode::new(
        Expr::Compare {
            left: Box::new(ExprNode::new(
                Expr::Name {
                    id: "a".to_string(),
                },
                Span::new(0, 1, 1, 1, 1, 2),
            )),
            ops: vec![CmpOp::Lt, CmpOp::Lt],
            comparators: vec![
                ExprNode::new(
                    Expr::Name {
                        id: "b".to_string(),
                    },
                    Span::new(4, 5, 1, 5, 1, 6),
                ),
                ExprNode::new(
                    Expr::Name {
                        id: "c".to_string(),
                    },
                    Span::new(8, 9, 1, 9, 1, 10),
                ),
            ],
        },
        Span::new(0, 9, 1, 1, 1, 10),
    );
    let (_, diags) = lower_expression(&tree, &source, &NoRecords);
    let diag = diags.errors().next().expect("expected an error diagnostic");
    let loc = diag.location.as_ref().expect("expected a location");
    assert_eq!(loc.file.as_deref(), Some("chain.py"));
    assert_eq!((loc.line, loc.column), (1, 1));
}

#[test]
fn test_json_output_shape() {
    let tree = ExprNode::synthetic(Expr::Yield { value: None });
    let (_, diags) = lower_expression(&tree, &SourceText::empty(), &NoRecords);
    let json = diags.to_json();
    assert!(json.contains("\"diagnostics\""));
    assert!(json.contains("MMS-UNSUPPORTED-EXPR"));
    assert!(json.contains("\"severity\":\"error\""));
}
