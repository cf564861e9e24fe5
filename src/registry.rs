use indexmap::IndexMap;

use crate::ir::RecordDef;

/// Records discovered during one generation run, keyed by name.
///
/// A name holds at most one record. `put` with an existing name replaces the
/// previous record wholesale; there is no merge and no delete.
#[derive(Debug, Clone, Default)]
pub struct RecordRegistry {
    records: IndexMap<String, RecordDef>,
}

impl RecordRegistry {
    pub fn new() -> Self { Self::default() }

    /// Returns the record that was replaced, if any.
    pub fn put(&mut self, name: impl Into<String>, def: RecordDef) -> Option<RecordDef> {
        self.records.insert(name.into(), def)
    }

    pub fn get(&self, name: &str) -> Option<&RecordDef> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Registered names in discovery order. Callers that need a stable
    /// ordering sort these themselves.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
