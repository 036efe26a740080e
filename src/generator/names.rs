//! Declaration name allocation
//!
//! Nested declarations are named `<enclosing>_<field>`. When that name is
//! taken, `_2`, `_3`, ... are appended until a free name is found. Names are
//! reserved for the whole run and never released. Characters that cannot
//! appear in a TypeScript identifier are replaced with `_`.

use super::types::is_identifier_char;
use std::collections::HashSet;

/// Hands out unique declaration names for one generation run
#[derive(Debug, Clone, Default)]
pub struct NameAllocator {
    reserved: HashSet<String>,
}

impl NameAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a name as-is. Returns false if it was already taken.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.reserved.insert(name.into())
    }

    /// Allocate a unique name for a nested declaration
    pub fn allocate(&mut self, enclosing: &str, field: &str) -> String {
        let field: String = field
            .strip_suffix('?')
            .unwrap_or(field)
            .chars()
            .map(|c| if is_identifier_char(c) { c } else { '_' })
            .collect();
        let base = format!("{enclosing}_{field}");

        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while self.reserved.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }

        if suffix > 1 {
            tracing::debug!("Name {} already taken, using {}", base, candidate);
        }
        self.reserved.insert(candidate.clone());
        candidate
    }
}
