//! Literal type resolution and the cast-builtin table

use crate::ast::Constant;
use crate::graph::TypeTag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builtin conversion calls that lower to casts instead of plain calls,
/// applied only when the call has exactly one positional argument.
// TODO: int(x) and float(x) should get the same cast treatment.
static CAST_BUILTINS: Lazy<HashMap<&'static str, TypeTag>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("str", TypeTag::Str);
    table
});

/// Cast target type for a callee name, if it is a cast builtin
pub fn cast_builtin(name: &str) -> Option<TypeTag> {
    CAST_BUILTINS.get(name).cloned()
}

/// Map a constant's dynamic value-kind to its static type tag.
///
/// Pure and context-free: the same value-kind always yields the same
/// tag. Returns None for value-kinds outside the known set; the caller
/// assigns `TypeTag::Unknown` and records a diagnostic.
///
/// Bool stays ahead of Int: Python booleans are integers, a `True`
/// must never come out as `int`.
pub fn resolve_literal_type(value: &Constant) -> Option<TypeTag> {
    match value {
        Constant::None => Some(TypeTag::None),
        Constant::Bool(_) => Some(TypeTag::Bool),
        Constant::Int(_) => Some(TypeTag::Int),
        Constant::Float(_) => Some(TypeTag::Float),
        Constant::Complex { .. } => Some(TypeTag::Complex),
        Constant::Str(_) => Some(TypeTag::Str),
        Constant::Bytes(_) => Some(TypeTag::Bytes),
        Constant::Ellipsis => None,
    }
}
