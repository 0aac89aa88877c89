//! Call disambiguation for the Lowerer
//!
//! A call expression is one of four shapes: a member/method call, a
//! construction call instantiating a known record, a cast through a
//! conversion builtin, or a plain function call. The callee is lowered
//! first and the shape is decided from its structure plus one symbol
//! table lookup; disambiguation never fails.

use super::{literals, Lowerer, RecordHandle};
use crate::ast::{ExprNode, Keyword};
use crate::diagnostics::{codes, Severity};
use crate::graph::{Argument, GraphNode, NodeKind, TypeTag};

/// The four call shapes
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CallShape {
    Member,
    Construct(RecordHandle),
    Cast(TypeTag),
    Plain,
}

/// Decision table for the call shape.
///
/// Pure function of three facts: is the lowered callee a member
/// expression, did the symbol table resolve the callee name to a
/// record, and does the cast-builtin pattern apply. Precedence is
/// member > construct > cast > plain.
pub(crate) fn classify_call(
    is_member: bool,
    record: Option<RecordHandle>,
    cast: Option<TypeTag>,
) -> CallShape {
    if is_member {
        CallShape::Member
    } else if let Some(record) = record {
        CallShape::Construct(record)
    } else if let Some(target) = cast {
        CallShape::Cast(target)
    } else {
        CallShape::Plain
    }
}

impl<'a> Lowerer<'a> {
    pub(crate) fn lower_call(
        &mut self,
        expr: &ExprNode,
        func: &ExprNode,
        args: &[ExprNode],
        keywords: &[Keyword],
    ) -> GraphNode {
        let callee = self.lower(func);
        self.trace(
            Severity::Debug,
            format!("lowered callee `{}`", callee.name()),
            &func.span,
        );

        let is_member = callee.is_member_expression();
        let record = if is_member {
            None
        } else {
            self.records.find_record(callee.name())
        };
        let cast = if is_member || record.is_some() {
            None
        } else {
            literals::cast_builtin(callee.name()).filter(|_| args.len() == 1)
        };

        match classify_call(is_member, record, cast) {
            CallShape::Cast(target) => {
                // Casts bypass argument attachment: the sole positional
                // argument becomes the wrapped expression
                let inner = self.lower(&args[0]);
                GraphNode::new(NodeKind::CastExpression {
                    cast_type: target,
                    expression: Box::new(inner),
                })
            }

            CallShape::Member => {
                let arguments = self.lower_arguments(args, keywords);
                match callee.kind {
                    NodeKind::MemberExpression {
                        base,
                        name: member_name,
                        ..
                    } => {
                        let fqn = format!("{}.{}", base.name(), member_name);
                        self.trace(
                            Severity::Debug,
                            format!("member call `{fqn}`"),
                            &func.span,
                        );
                        let member = GraphNode::new(NodeKind::DeclaredReferenceExpression {
                            name: member_name.clone(),
                            ty: TypeTag::Unknown,
                        })
                        .with_code(self.source.snippet(&expr.span));
                        GraphNode::new(NodeKind::MemberCallExpression {
                            name: member_name,
                            fqn,
                            base,
                            member: Box::new(member),
                            operator: ".".to_string(),
                            arguments,
                        })
                    }
                    _ => unreachable!("CallShape::Member implies a member-expression callee"),
                }
            }

            CallShape::Construct(record) => {
                let arguments = self.lower_arguments(args, keywords);
                let name = callee.name().to_string();
                self.trace(
                    Severity::Debug,
                    format!(
                        "callee `{name}` resolves to record `{}`; lowering as construction",
                        record.name()
                    ),
                    &func.span,
                );
                GraphNode::new(NodeKind::ConstructExpression {
                    name,
                    ty: TypeTag::Record(record.into_name()),
                    arguments,
                })
            }

            CallShape::Plain => {
                let name = callee.name().to_string();
                let arguments = self.lower_arguments(args, keywords);
                GraphNode::new(NodeKind::CallExpression {
                    callee: Box::new(callee),
                    name,
                    arguments,
                })
            }
        }
    }

    /// Lower call arguments in source order: positional first, then
    /// keyword arguments bound to their names. A keyword without a name
    /// (`**kwargs`) is dropped with an error diagnostic.
    fn lower_arguments(&mut self, args: &[ExprNode], keywords: &[Keyword]) -> Vec<Argument> {
        let mut arguments = Vec::with_capacity(args.len() + keywords.len());
        for arg in args {
            arguments.push(Argument::positional(self.lower(arg)));
        }
        for keyword in keywords {
            match &keyword.arg {
                Some(name) => {
                    arguments.push(Argument::keyword(name.clone(), self.lower(&keyword.value)));
                }
                None => {
                    self.error(
                        codes::KWARG_UNPACK,
                        "keyword argument without a name (`**` unpacking) is not supported; \
                         the argument is dropped",
                        &keyword.value.span,
                    );
                }
            }
        }
        arguments
    }
}
