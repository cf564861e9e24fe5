//! One generation run: every document of one input, one registry.
use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::debug;

use crate::codegen;
use crate::ir::RecordDef;
use crate::node::Document;
use crate::options::Options;
use crate::registry::RecordRegistry;
use crate::walk::{document_root_name, Walker};

#[derive(Debug)]
pub struct Generation {
    pub registry: RecordRegistry,
    /// One per document, in document order. May name records that were never
    /// registered (documents that are not mappings).
    pub root_names: Vec<String>,
    pub options: Options,
}

impl Generation {
    pub fn run(docs: &[Document], options: &Options) -> Self {
        let mut registry = RecordRegistry::new();
        let total = docs.len();
        let root_names: Vec<String> = docs.iter().enumerate()
            .map(|(i, doc)| document_root_name(doc, i, total))
            .collect();

        for (doc, root) in docs.iter().zip(&root_names) {
            Walker::new(&mut registry, options, root.as_str()).visit_document(doc);
        }
        debug!(documents = total, records = registry.len(), roots = ?root_names, "generation finished");

        Self { registry, root_names, options: options.clone() }
    }

    pub fn render(&self) -> String {
        codegen::render(&self.registry, &self.root_names, &self.options.tag_prefix)
    }

    /// Records in render order, for the JSON debug view.
    pub fn ordered_records(&self) -> Vec<&RecordDef> {
        codegen::emission_order(&self.registry, &self.root_names)
    }

    /// `{ "roots": [...], "records": { Name: { "fields": [...] } } }`
    pub fn to_schema(&self) -> Value {
        let records: IndexMap<&str, Value> = self.ordered_records().into_iter()
            .map(|def| (def.name.as_str(), json!({ "fields": def.fields })))
            .collect();
        let roots: Vec<&str> = self.root_names.iter()
            .map(String::as_str)
            .filter(|n| self.registry.contains(n))
            .collect();
        json!({ "roots": roots, "records": records })
    }
}

/// Infer and render in one go.
pub fn generate(docs: &[Document], options: &Options) -> String {
    Generation::run(docs, options).render()
}

// ------------------------------- Tests ------------------------------------ //
