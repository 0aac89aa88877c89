//! lowering module tests

use super::calls::{classify_call, CallShape};
use super::*;
use crate::ast::{BinOp, CmpOp, Constant};
use crate::graph::{OperatorCode, TypeTag};

// --- operator conversion ---

#[test]
fn test_convert_binop_add() {
    assert_eq!(operators::convert_binop(&BinOp::Add), OperatorCode::Add);
}

#[test]
fn test_convert_binop_floordiv() {
    assert_eq!(
        operators::convert_binop(&BinOp::FloorDiv),
        OperatorCode::FloorDiv
    );
}

#[test]
fn test_convert_binop_matmul() {
    assert_eq!(operators::convert_binop(&BinOp::MatMul), OperatorCode::MatMul);
}

#[test]
fn test_convert_binop_pow() {
    assert_eq!(operators::convert_binop(&BinOp::Pow), OperatorCode::Pow);
}

#[test]
fn test_convert_cmpop_eq() {
    assert_eq!(operators::convert_cmpop(&CmpOp::Eq), OperatorCode::Eq);
}

#[test]
fn test_convert_cmpop_is_not() {
    assert_eq!(operators::convert_cmpop(&CmpOp::IsNot), OperatorCode::IsNot);
    assert_eq!(operators::convert_cmpop(&CmpOp::IsNot).as_str(), "is not");
}

#[test]
fn test_convert_cmpop_not_in() {
    assert_eq!(operators::convert_cmpop(&CmpOp::NotIn), OperatorCode::NotIn);
}

// --- literal type resolution ---

#[test]
fn test_literal_bool_is_not_int() {
    // Python booleans are integers; the bool check must win
    assert_eq!(
        literals::resolve_literal_type(&Constant::Bool(true)),
        Some(TypeTag::Bool)
    );
    assert_eq!(
        literals::resolve_literal_type(&Constant::Int(1)),
        Some(TypeTag::Int)
    );
}

#[test]
fn test_literal_none_type() {
    assert_eq!(
        literals::resolve_literal_type(&Constant::None),
        Some(TypeTag::None)
    );
}

#[test]
fn test_literal_bytes_type() {
    assert_eq!(
        literals::resolve_literal_type(&Constant::Bytes(b"ab".to_vec())),
        Some(TypeTag::Bytes)
    );
}

#[test]
fn test_literal_complex_type() {
    assert_eq!(
        literals::resolve_literal_type(&Constant::Complex {
            real: 1.0,
            imag: 2.0
        }),
        Some(TypeTag::Complex)
    );
}

#[test]
fn test_literal_ellipsis_is_unrecognized() {
    assert_eq!(literals::resolve_literal_type(&Constant::Ellipsis), None);
}

// --- cast builtins ---

#[test]
fn test_cast_builtin_str_only() {
    assert_eq!(literals::cast_builtin("str"), Some(TypeTag::Str));
    assert_eq!(literals::cast_builtin("int"), None);
    assert_eq!(literals::cast_builtin("print"), None);
}

// --- call shape decision table ---

#[test]
fn test_classify_member_wins() {
    let shape = classify_call(true, Some(RecordHandle::new("Point")), Some(TypeTag::Str));
    assert_eq!(shape, CallShape::Member);
}

#[test]
fn test_classify_construct() {
    let shape = classify_call(false, Some(RecordHandle::new("Point")), None);
    assert_eq!(shape, CallShape::Construct(RecordHandle::new("Point")));
}

#[test]
fn test_classify_cast() {
    let shape = classify_call(false, None, Some(TypeTag::Str));
    assert_eq!(shape, CallShape::Cast(TypeTag::Str));
}

#[test]
fn test_classify_plain_is_the_default() {
    let shape = classify_call(false, None, None);
    assert_eq!(shape, CallShape::Plain);
}
