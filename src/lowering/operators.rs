//! Operator conversion module
//!
//! 演算子の AST → グラフコード変換を提供する。
//! - 二項演算子 (BinOp) の変換
//! - 比較演算子 (CmpOp) の変換

use crate::ast::{BinOp, CmpOp};
use crate::graph::OperatorCode;

/// AST の BinOp をグラフの OperatorCode に変換する
///
/// # Arguments
/// * `op` - パーサーが生成した BinOp
///
/// # Returns
/// 対応する記号コード
pub fn convert_binop(op: &BinOp) -> OperatorCode {
    match op {
        BinOp::Add => OperatorCode::Add,
        BinOp::Sub => OperatorCode::Sub,
        BinOp::Mul => OperatorCode::Mul,
        BinOp::Div => OperatorCode::Div,
        BinOp::FloorDiv => OperatorCode::FloorDiv,
        BinOp::Mod => OperatorCode::Mod,
        BinOp::Pow => OperatorCode::Pow,
        BinOp::MatMul => OperatorCode::MatMul,
        BinOp::BitAnd => OperatorCode::BitAnd,
        BinOp::BitOr => OperatorCode::BitOr,
        BinOp::BitXor => OperatorCode::BitXor,
        BinOp::Shl => OperatorCode::Shl,
        BinOp::Shr => OperatorCode::Shr,
    }
}

/// AST の CmpOp をグラフの OperatorCode に変換する
///
/// # Arguments
/// * `op` - 比較連鎖の単一要素
///
/// # Returns
/// 対応する記号コード
pub fn convert_cmpop(op: &CmpOp) -> OperatorCode {
    match op {
        CmpOp::Eq => OperatorCode::Eq,
        CmpOp::NotEq => OperatorCode::NotEq,
        CmpOp::Lt => OperatorCode::Lt,
        CmpOp::LtEq => OperatorCode::LtEq,
        CmpOp::Gt => OperatorCode::Gt,
        CmpOp::GtEq => OperatorCode::GtEq,
        CmpOp::Is => OperatorCode::Is,
        CmpOp::IsNot => OperatorCode::IsNot,
        CmpOp::In => OperatorCode::In,
        CmpOp::NotIn => OperatorCode::NotIn,
    }
}
