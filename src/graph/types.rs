//! Static type tags for graph nodes
//!
//! The graph is statically typed as far as the lowering can tell at
//! syntax time: literals get their value-kind type, construction calls
//! get the resolved record type, everything else stays `Unknown`.

use serde::{Deserialize, Serialize};

/// Static type tag attached to graph nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Python's `None` type
    None,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    /// Byte sequence (`bytes`)
    Bytes,
    /// A user-defined record resolved through the symbol table
    Record(String),
    /// Nothing statically known
    Unknown,
}

impl TypeTag {
    /// Type name as it appears in the graph
    pub fn name(&self) -> &str {
        match self {
            TypeTag::None => "None",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Complex => "complex",
            TypeTag::Str => "str",
            TypeTag::Bytes => "byte[]",
            TypeTag::Record(name) => name,
            TypeTag::Unknown => "UNKNOWN",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeTag::Unknown)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
