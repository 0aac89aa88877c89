//! Expression-tree definitions
//!
//! The input boundary of the lowering core. Trees are produced by an
//! external parser and handed over pre-built (typically as JSON); this
//! crate never parses Python source text itself. Every node is immutable
//! and carries its own source span.

mod source;

pub use source::SourceText;

use serde::{Deserialize, Serialize};

/// Byte and line/column range of a node in the original source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character
    #[serde(default)]
    pub start: usize,
    /// Byte offset one past the last character
    #[serde(default)]
    pub end: usize,
    /// Start line (1-indexed)
    #[serde(default)]
    pub line: usize,
    /// Start column (1-indexed)
    #[serde(default)]
    pub column: usize,
    #[serde(default)]
    pub end_line: usize,
    #[serde(default)]
    pub end_column: usize,
}

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line,
            end_column,
        }
    }
}

/// Expression node: a kind plus its source span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprNode {
    pub kind: Expr,
    #[serde(default)]
    pub span: Span,
}

impl ExprNode {
    pub fn new(kind: Expr, span: Span) -> Self {
        Self { kind, span }
    }

    /// Node without span information (synthesized trees, tests)
    pub fn synthetic(kind: Expr) -> Self {
        Self {
            kind,
            span: Span::default(),
        }
    }
}

/// Expression kinds, mirroring the source grammar's expression variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// Boolean operator chain (`a and b or c`)
    BoolOp {
        op: BoolOpKind,
        values: Vec<ExprNode>,
    },
    /// Assignment expression (`x := value`)
    NamedExpr {
        target: Box<ExprNode>,
        value: Box<ExprNode>,
    },
    /// Binary operation
    BinOp {
        left: Box<ExprNode>,
        op: BinOp,
        right: Box<ExprNode>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOp,
        operand: Box<ExprNode>,
    },
    /// Lambda expression
    Lambda {
        params: Vec<String>,
        body: Box<ExprNode>,
    },
    /// Conditional expression (`body if test else orelse`)
    IfExp {
        test: Box<ExprNode>,
        body: Box<ExprNode>,
        orelse: Box<ExprNode>,
    },
    /// Dict literal; an absent key marks a `**other` unpack entry
    Dict { items: Vec<DictItem> },
    /// Set literal
    Set { elts: Vec<ExprNode> },
    /// List comprehension
    ListComp {
        elt: Box<ExprNode>,
        target: String,
        iter: Box<ExprNode>,
        condition: Option<Box<ExprNode>>,
    },
    /// Set comprehension
    SetComp {
        elt: Box<ExprNode>,
        target: String,
        iter: Box<ExprNode>,
        condition: Option<Box<ExprNode>>,
    },
    /// Dict comprehension
    DictComp {
        key: Box<ExprNode>,
        value: Box<ExprNode>,
        target: String,
        iter: Box<ExprNode>,
        condition: Option<Box<ExprNode>>,
    },
    /// Generator expression
    GeneratorExp {
        elt: Box<ExprNode>,
        target: String,
        iter: Box<ExprNode>,
        condition: Option<Box<ExprNode>>,
    },
    /// Await expression
    Await { value: Box<ExprNode> },
    /// Yield expression
    Yield { value: Option<Box<ExprNode>> },
    /// Yield-from expression
    YieldFrom { value: Box<ExprNode> },
    /// Comparison chain (`left op comparators[0] op comparators[1] ...`)
    Compare {
        left: Box<ExprNode>,
        ops: Vec<CmpOp>,
        comparators: Vec<ExprNode>,
    },
    /// Call with positional and keyword arguments
    Call {
        func: Box<ExprNode>,
        args: Vec<ExprNode>,
        keywords: Vec<Keyword>,
    },
    /// Interpolated part of an f-string
    FormattedValue { value: Box<ExprNode> },
    /// f-string literal
    JoinedStr { values: Vec<ExprNode> },
    /// Constant literal
    Constant { value: Constant },
    /// Attribute access (`obj.attr`)
    Attribute {
        value: Box<ExprNode>,
        attr: String,
    },
    /// Subscript access (`obj[index]`)
    Subscript {
        value: Box<ExprNode>,
        index: Box<ExprNode>,
    },
    /// Starred expression (`*expr`)
    Starred { value: Box<ExprNode> },
    /// Name reference
    Name { id: String },
    /// List literal
    List { elts: Vec<ExprNode> },
    /// Tuple literal
    Tuple { elts: Vec<ExprNode> },
    /// Slice (`start:stop:step`), only valid inside a subscript
    Slice {
        lower: Option<Box<ExprNode>>,
        upper: Option<Box<ExprNode>>,
        step: Option<Box<ExprNode>>,
    },
}

/// One dict entry; key and value are optional to represent unpack
/// placeholders and partially malformed input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ExprNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ExprNode>,
}

/// Keyword argument; `arg` is None for `**kwargs` unpacking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub value: ExprNode,
}

/// Constant values with their dynamic value-kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { real: f64, imag: f64 },
    Str(String),
    Bytes(Vec<u8>),
    /// The `...` literal; no static type is known for it
    Ellipsis,
}

impl Constant {
    /// String form of the value, following Python's `str()`
    pub fn display(&self) -> String {
        match self {
            Constant::None => "None".to_string(),
            Constant::Bool(true) => "True".to_string(),
            Constant::Bool(false) => "False".to_string(),
            Constant::Int(n) => n.to_string(),
            Constant::Float(f) => format!("{f:?}"),
            Constant::Complex { real, imag } => {
                if *imag < 0.0 {
                    format!("({real}-{}j)", -imag)
                } else {
                    format!("({real}+{imag}j)")
                }
            }
            Constant::Str(s) => s.clone(),
            Constant::Bytes(b) => {
                let mut out = String::from("b'");
                for byte in b {
                    match byte {
                        b'\\' => out.push_str("\\\\"),
                        b'\'' => out.push_str("\\'"),
                        0x20..=0x7e => out.push(*byte as char),
                        _ => out.push_str(&format!("\\x{byte:02x}")),
                    }
                }
                out.push('\'');
                out
            }
            Constant::Ellipsis => "Ellipsis".to_string(),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    MatMul,
    BitAnd, // &
    BitOr,  // |
    BitXor, // ^
    Shl,    // <<
    Shr,    // >>
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Is,    // x is None
    IsNot, // x is not None
    In,    // x in xs
    NotIn, // x not in xs
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Pos,
    Not,
    BitNot, // ~
}

/// Boolean operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOpKind {
    And,
    Or,
}
