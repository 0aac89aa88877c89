//! Graph Operator Codes
use serde::{Deserialize, Serialize};
//
// グラフ上の演算子コードを定義する。
// - 二項演算子の記号コード
// - 比較演算子の記号コード
// - 縮退パス用の DUMMY コード

/// 演算子コード
///
/// BinaryOperator ノードが保持する記号コード。表示形式は Python の
/// ソース記法に一致する (`Add` -> `+`, `NotIn` -> `not in` など)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorCode {
    // 算術演算子
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    MatMul,

    // ビット演算子
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // 比較演算子
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // 同一性・包含演算子
    Is,
    IsNot,
    In,
    NotIn,

    // 単項演算子
    //
    // 式 lowering は単項演算子を生成しない（Unsupported に縮退する）。
    // 文レベル lowering が UnaryOperator ノードを構築する際に使うコード。
    Not,
    Invert,

    /// 縮退パス用ダミーコード（比較連鎖など、対応できない形）
    Dummy,
}

impl OperatorCode {
    /// 記号コードを返す
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorCode::Add => "+",
            OperatorCode::Sub => "-",
            OperatorCode::Mul => "*",
            OperatorCode::Div => "/",
            OperatorCode::FloorDiv => "//",
            OperatorCode::Mod => "%",
            OperatorCode::Pow => "**",
            OperatorCode::MatMul => "@",
            OperatorCode::BitAnd => "&",
            OperatorCode::BitOr => "|",
            OperatorCode::BitXor => "^",
            OperatorCode::Shl => "<<",
            OperatorCode::Shr => ">>",
            OperatorCode::Eq => "==",
            OperatorCode::NotEq => "!=",
            OperatorCode::Lt => "<",
            OperatorCode::LtEq => "<=",
            OperatorCode::Gt => ">",
            OperatorCode::GtEq => ">=",
            OperatorCode::Is => "is",
            OperatorCode::IsNot => "is not",
            OperatorCode::In => "in",
            OperatorCode::NotIn => "not in",
            OperatorCode::Not => "not",
            OperatorCode::Invert => "~",
            OperatorCode::Dummy => "DUMMY",
        }
    }

    /// 縮退パス由来のダミーコードかどうか
    pub fn is_dummy(&self) -> bool {
        matches!(self, OperatorCode::Dummy)
    }
}

impl std::fmt::Display for OperatorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_codes() {
        assert_eq!(OperatorCode::Add.as_str(), "+");
        assert_eq!(OperatorCode::FloorDiv.as_str(), "//");
        assert_eq!(OperatorCode::IsNot.as_str(), "is not");
        assert_eq!(OperatorCode::NotIn.as_str(), "not in");
    }

    #[test]
    fn test_unary_codes() {
        let node = crate::graph::GraphNode::new(crate::graph::NodeKind::UnaryOperator {
            op: OperatorCode::Invert,
            operand: Box::new(crate::graph::GraphNode::new(
                crate::graph::NodeKind::Unsupported,
            )),
        });
        match node.kind {
            crate::graph::NodeKind::UnaryOperator { op, .. } => {
                assert_eq!(op.as_str(), "~");
            }
            other => panic!("expected a unary operator, got {other:?}"),
        }
        assert_eq!(OperatorCode::Not.as_str(), "not");
    }

    #[test]
    fn test_dummy_code() {
        assert!(OperatorCode::Dummy.is_dummy());
        assert!(!OperatorCode::Eq.is_dummy());
        assert_eq!(OperatorCode::Dummy.to_string(), "DUMMY");
    }
}
