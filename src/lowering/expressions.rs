//! Expression dispatch for the Lowerer
//!
//! One arm per grammar variant. The match is exhaustive so a new
//! expression variant cannot fall through untreated; variants without a
//! lowering rule degrade to the `Unsupported` placeholder.

use super::{literals, operators, Lowerer};
use crate::ast::{DictItem, Expr, ExprNode};
use crate::diagnostics::{codes, Severity};
use crate::graph::{GraphNode, NodeKind, OperatorCode, TypeTag};

impl<'a> Lowerer<'a> {
    pub(crate) fn lower_impl(&mut self, expr: &ExprNode) -> GraphNode {
        match &expr.kind {
            Expr::BoolOp { .. } => self.unsupported("boolean operator chain", expr),
            Expr::NamedExpr { .. } => self.unsupported("assignment expression", expr),
            Expr::UnaryOp { .. } => self.unsupported("unary operator", expr),
            Expr::Lambda { .. } => self.unsupported("lambda", expr),
            Expr::Set { .. } => self.unsupported("set literal", expr),
            Expr::ListComp { .. } => self.unsupported("list comprehension", expr),
            Expr::SetComp { .. } => self.unsupported("set comprehension", expr),
            Expr::DictComp { .. } => self.unsupported("dict comprehension", expr),
            Expr::GeneratorExp { .. } => self.unsupported("generator expression", expr),
            Expr::Yield { .. } => self.unsupported("yield", expr),
            Expr::YieldFrom { .. } => self.unsupported("yield from", expr),
            Expr::FormattedValue { .. } => self.unsupported("formatted value", expr),
            Expr::JoinedStr { .. } => self.unsupported("f-string", expr),
            Expr::Starred { .. } => self.unsupported("starred expression", expr),
            Expr::Slice { .. } => self.unsupported("slice", expr),

            Expr::BinOp { left, op, right } => {
                let code = operators::convert_binop(op);
                let lhs = self.lower(left);
                let rhs = self.lower(right);
                GraphNode::new(NodeKind::BinaryOperator {
                    op: code,
                    lhs: Some(Box::new(lhs)),
                    rhs: Some(Box::new(rhs)),
                })
            }

            Expr::Compare {
                left,
                ops,
                comparators,
            } => {
                // Only a chain of exactly one operator has a binary form
                if ops.len() != 1 || comparators.len() != 1 {
                    self.error(
                        codes::COMPARISON_CHAIN,
                        format!(
                            "comparison chain with {} operators is not supported; emitting a DUMMY operator",
                            ops.len()
                        ),
                        &expr.span,
                    );
                    return GraphNode::new(NodeKind::BinaryOperator {
                        op: OperatorCode::Dummy,
                        lhs: None,
                        rhs: None,
                    });
                }
                let code = operators::convert_cmpop(&ops[0]);
                let lhs = self.lower(left);
                let rhs = self.lower(&comparators[0]);
                GraphNode::new(NodeKind::BinaryOperator {
                    op: code,
                    lhs: Some(Box::new(lhs)),
                    rhs: Some(Box::new(rhs)),
                })
            }

            Expr::IfExp { test, body, orelse } => {
                let condition = self.lower(test);
                let then_expr = self.lower(body);
                let else_expr = self.lower(orelse);
                GraphNode::new(NodeKind::ConditionalExpression {
                    condition: Box::new(condition),
                    then_expr: Box::new(then_expr),
                    else_expr: Box::new(else_expr),
                    ty: TypeTag::Unknown,
                })
            }

            Expr::Dict { items } => {
                let initializers = items
                    .iter()
                    .map(|item| self.lower_dict_item(item, expr))
                    .collect();
                GraphNode::new(NodeKind::InitializerListExpression { initializers })
            }

            // List and tuple share the initializer-list representation;
            // the distinction is not preserved in the graph
            Expr::List { elts } | Expr::Tuple { elts } => {
                let initializers = elts.iter().map(|el| self.lower(el)).collect();
                GraphNode::new(NodeKind::InitializerListExpression { initializers })
            }

            Expr::Attribute { value, attr } => {
                let base = self.lower(value);
                let base = if base.is_declaration() {
                    self.trace(
                        Severity::Debug,
                        format!(
                            "base `{}` lowered to a declaration; wrapping it in a declared reference",
                            base.name()
                        ),
                        &value.span,
                    );
                    base.into_declared_reference()
                } else {
                    base
                };
                GraphNode::new(NodeKind::MemberExpression {
                    base: Box::new(base),
                    name: attr.clone(),
                    operator: ".".to_string(),
                    ty: TypeTag::Unknown,
                })
            }

            Expr::Subscript { value, index } => {
                let array = self.lower(value);
                let subscript = self.lower(index);
                GraphNode::new(NodeKind::ArraySubscriptionExpression {
                    array: Box::new(array),
                    subscript: Box::new(subscript),
                })
            }

            Expr::Name { id } => GraphNode::new(NodeKind::DeclaredReferenceExpression {
                name: id.clone(),
                ty: TypeTag::Unknown,
            }),

            Expr::Constant { value } => {
                let ty = match literals::resolve_literal_type(value) {
                    Some(ty) => ty,
                    None => {
                        self.error(
                            codes::UNKNOWN_LITERAL,
                            format!(
                                "unexpected constant kind for `{}`; assigning the unknown type",
                                value.display()
                            ),
                            &expr.span,
                        );
                        TypeTag::Unknown
                    }
                };
                GraphNode::new(NodeKind::Literal {
                    value: value.clone(),
                    ty,
                    name: value.display(),
                })
            }

            Expr::Call {
                func,
                args,
                keywords,
            } => self.lower_call(expr, func, args, keywords),

            Expr::Await { value } => {
                self.error(
                    codes::AWAIT_ERASED,
                    "`await` is lowered to its inner expression; \
                     suspension semantics are not represented in the graph",
                    &expr.span,
                );
                // The caller re-annotates with the await node's span
                self.lower(value)
            }
        }
    }

    /// Lower one dict entry into a key/value pair node.
    ///
    /// Both sides are lowered independently; an absent key marks an
    /// unpack placeholder. When both sides are present the pair gets a
    /// dual-span location binding the key's and the value's spans.
    fn lower_dict_item(&mut self, item: &DictItem, dict: &ExprNode) -> GraphNode {
        let key = item.key.as_ref().map(|k| Box::new(self.lower(k)));
        let value = item.value.as_ref().map(|v| Box::new(self.lower(v)));
        let kind = NodeKind::KeyValueExpression { key, value };
        let code = self.source.snippet(&dict.span);
        match (&item.key, &item.value) {
            (Some(k), Some(v)) => {
                let location = self.source.location_pair(&k.span, &v.span);
                GraphNode::new(kind).at(code, location)
            }
            _ => GraphNode::new(kind).with_code(code),
        }
    }

    fn unsupported(&mut self, construct: &str, expr: &ExprNode) -> GraphNode {
        self.error(
            codes::UNSUPPORTED_EXPR,
            format!("{construct} is not lowered; emitting an unsupported placeholder"),
            &expr.span,
        );
        GraphNode::new(NodeKind::Unsupported)
    }
}
