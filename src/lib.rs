//! Mamushi - Python Expression Lowering
//!
//! # Overview
//! Lowers pre-parsed Python expression trees into a normalized,
//! statically-typed graph representation for downstream analysis.
//!
//! # Author
//! Tane Channel Technology

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod lowering;

pub use lowering::{lower_expression, Lowerer, NoRecords, RecordResolver, RecordTable};

use error::MamushiError;
use std::path::Path;

/// Parse a serialized expression tree (JSON) into an AST node
pub fn parse_tree(json: &str) -> Result<ast::ExprNode, MamushiError> {
    if json.trim().is_empty() {
        return Err(MamushiError::InvalidTree {
            message: "empty input".to_string(),
        });
    }
    Ok(serde_json::from_str(json)?)
}

/// Load a serialized expression tree from a file
pub fn load_tree(path: &Path) -> Result<ast::ExprNode, MamushiError> {
    let json = std::fs::read_to_string(path)?;
    parse_tree(&json)
}
