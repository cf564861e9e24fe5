//! Record discovery.
//!
//! The walker visits a document body, turns every non-empty mapping into a
//! `RecordDef`, and recurses into nested mappings with the path extended by the
//! key they sit under. The record name comes from the last path segment; an
//! empty path means the document root.
//!
//! Order matters for name collisions, since the registry keeps the last write.
//! For one mapping:
//!
//! 1. mappings reached through a sequence element are walked while the fields
//!    are typed, so they register before the parent;
//! 2. the parent record is stored;
//! 3. mappings held directly by a field are walked, in source order.
//!
//! A field's child deriving the parent's name therefore replaces it (this is
//! how `user: {name, age}` ends up as a single `User`), while a sequence
//! element is replaced by its enclosing mapping when both fall back to
//! `NestedStruct`.
//!
//! This is the final state of typing nested mappings eagerly and walking the
//! field mappings again once the parent is stored; the eager pass over a field
//! mapping is always overwritten by the second one, so each subtree is walked
//! once.
use tracing::{debug, trace};

use crate::inference::{Discovery, Inference, Slot};
use crate::ir::{FieldDef, RecordDef};
use crate::naming::{is_empty, record_name_for};
use crate::node::{Document, Node};
use crate::options::Options;
use crate::registry::RecordRegistry;

pub const DOCUMENT_ROOT: &str = "Document";

// ------------------------------ Root naming ------------------------------- //

/// Name of a document's root record.
///
/// A mapping with a single key is named after that key (`NestedStruct` when
/// the key is nothing but separators). Anything else is
/// `Document`, or `Document{n}` (1-based) when the run holds several documents.
pub fn document_root_name(doc: &Document, index: usize, total: usize) -> String {
    if let Node::Mapping(entries) = &doc.body {
        if let [(key, _)] = entries.as_slice() {
            return record_name_for(key);
        }
    }
    if total == 1 {
        DOCUMENT_ROOT.to_string()
    } else {
        format!("{DOCUMENT_ROOT}{}", index + 1)
    }
}

// -------------------------------- Walker ---------------------------------- //

pub struct Walker<'r> {
    registry: &'r mut RecordRegistry,
    options: &'r Options,
    root_name: String,
}

impl<'r> Walker<'r> {
    pub fn new(registry: &'r mut RecordRegistry, options: &'r Options, root_name: impl Into<String>) -> Self {
        Self { registry, options, root_name: root_name.into() }
    }

    pub fn visit_document(&mut self, doc: &Document) {
        self.visit(&doc.body, &[]);
    }

    /// Only non-empty mappings register anything. Sequences are typed by
    /// inference, which reports any mapping element it needs walked.
    pub fn visit(&mut self, node: &Node, path: &[String]) {
        match node {
            Node::Mapping(entries) if !entries.is_empty() => self.visit_mapping(entries, path),
            Node::Mapping(_) | Node::Sequence(_) | Node::Scalar { .. } | Node::Unknown { .. } => {}
        }
    }

    fn visit_mapping(&mut self, entries: &[(String, Node)], path: &[String]) {
        let name = self.record_name(path);
        let mut inference = Inference::new(self.options.optionality);

        let mut fields = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let ty = inference.infer(value, key, path);
            let omit = is_empty(value, self.options.emptiness);
            fields.push(FieldDef::new(key.clone(), ty, omit));
        }

        let (elements, nested): (Vec<Discovery>, Vec<Discovery>) = inference
            .take_discoveries()
            .into_iter()
            .partition(|found| found.slot == Slot::Element);

        for found in elements {
            self.visit_mapping(found.entries, &found.path);
        }

        trace!(record = %name, fields = fields.len(), ?path, "registered record");
        let def = RecordDef { name: name.clone(), fields };
        if let Some(prev) = self.registry.put(name.clone(), def) {
            debug!(record = %name, ?path, replaced_fields = prev.fields.len(), "record overwritten by later discovery");
        }

        for found in nested {
            self.visit_mapping(found.entries, &found.path);
        }
    }

    /// Last path segment as a type name, the document root for an empty path.
    pub fn record_name(&self, path: &[String]) -> String {
        match path.last() {
            None => self.root_name.clone(),
            Some(key) => record_name_for(key),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
