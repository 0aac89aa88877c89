//! Record resolution boundary
//!
//! The lowering core asks the symbol table exactly one question: does a
//! name resolve to a known record (user-defined type) in the currently
//! active lexical scope? `RecordResolver` is that boundary; `RecordTable`
//! is the scope-stack implementation used by the CLI and tests.

use std::collections::HashMap;

/// A record found in the symbol table, resolved to its type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHandle {
    name: String,
}

impl RecordHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

/// Read-only symbol table query interface
pub trait RecordResolver {
    fn find_record(&self, name: &str) -> Option<RecordHandle>;
}

/// Resolver for callers without any symbol information; every lookup
/// misses, so every non-member call lowers as a plain call
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecords;

impl RecordResolver for NoRecords {
    fn find_record(&self, _name: &str) -> Option<RecordHandle> {
        None
    }
}

/// One lexical scope of known records
#[derive(Debug, Clone, Default)]
struct RecordScope {
    records: HashMap<String, RecordHandle>,
}

/// Stack of scopes for nested contexts
///
/// Lookup walks from the innermost scope outward. Popping a scope
/// promotes its records to the parent, matching Python's block
/// semantics where a class defined inside a block stays visible after
/// the block.
#[derive(Debug)]
pub struct RecordTable {
    scopes: Vec<RecordScope>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![RecordScope::default()], // Global scope
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len().saturating_sub(1)
    }

    pub fn push(&mut self) {
        self.scopes.push(RecordScope::default());
    }

    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            if let Some(popped) = self.scopes.pop() {
                if let Some(parent) = self.scopes.last_mut() {
                    for (name, record) in popped.records {
                        // Keep the parent's definition when the name is shadowed
                        parent.records.entry(name).or_insert(record);
                    }
                }
            }
        }
    }

    pub fn define(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope
                .records
                .insert(name.to_string(), RecordHandle::new(name));
        }
    }
}

impl RecordResolver for RecordTable {
    fn find_record(&self, name: &str) -> Option<RecordHandle> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.records.get(name).cloned())
    }
}
