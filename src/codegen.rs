//! Go-style struct emission.
//!
//! ```text
//! type User struct {
//! 	Name string `json:"name"`
//! 	Tags []string `json:"tags,omitempty"`
//! }
//! ```
//!
//! Root records come first in document order, everything else follows sorted
//! by name, blocks separated by one blank line. Output is deterministic for a
//! given registry and root list.
use std::collections::HashSet;
use std::fmt::{self, Display, Write};

use crate::ir::{FieldDef, RecordDef, TypeExpr};
use crate::naming::normalize;
use crate::registry::RecordRegistry;

pub const GENERIC_MAP: &str = "map[string]any";
pub const UNTYPED: &str = "interface{}";
pub const OMITEMPTY: &str = "omitempty";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Scalar(name) | TypeExpr::RecordRef(name) => f.write_str(name),
            TypeExpr::Optional(inner) => write!(f, "*{inner}"),
            TypeExpr::Slice(elem) => write!(f, "[]{elem}"),
            TypeExpr::GenericMap => f.write_str(GENERIC_MAP),
            TypeExpr::Any => f.write_str(UNTYPED),
        }
    }
}

/// `` `prefix:"key,omitempty,extra"` ``; renders nothing without a prefix or key.
pub struct FieldTag<'a> {
    pub prefix: &'a str,
    pub field: &'a FieldDef,
}

impl FieldTag<'_> {
    pub fn is_blank(&self) -> bool {
        self.prefix.is_empty() || self.field.source_key.is_empty()
    }
}

impl Display for FieldTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        write!(f, "`{}:\"{}", self.prefix, self.field.source_key)?;
        if self.field.omit {
            write!(f, ",{OMITEMPTY}")?;
        }
        for flag in &self.field.flags {
            write!(f, ",{flag}")?;
        }
        f.write_str("\"`")
    }
}

// ————————————————————————————————————————————————————————————————————————————
// EMITTER
// ————————————————————————————————————————————————————————————————————————————

pub struct Codegen<W = String> {
    sink: W,
    tag_prefix: String,
    blocks: usize,
}

impl Codegen<String> {
    pub fn new(tag_prefix: &str) -> Self {
        Self::with_sink(String::new(), tag_prefix)
    }

    pub fn into_string(self) -> String { self.sink }
}

impl<W: Write> Codegen<W> {
    pub fn with_sink(sink: W, tag_prefix: &str) -> Self {
        Self { sink, tag_prefix: tag_prefix.to_string(), blocks: 0 }
    }

    /// Records in [`emission_order`].
    ///
    /// Stops at the first failed write; whatever reached the sink stays there.
    pub fn emit(&mut self, registry: &RecordRegistry, root_names: &[String]) -> fmt::Result {
        for def in emission_order(registry, root_names) {
            self.emit_record(def)?;
        }
        Ok(())
    }

    pub fn emit_record(&mut self, def: &RecordDef) -> fmt::Result {
        if self.blocks > 0 {
            self.sink.write_char('\n')?;
        }
        writeln!(self.sink, "type {} struct {{", def.name)?;
        for field in &def.fields {
            self.emit_field(field)?;
        }
        self.sink.write_str("}\n")?;
        self.blocks += 1;
        Ok(())
    }

    fn emit_field(&mut self, field: &FieldDef) -> fmt::Result {
        write!(self.sink, "\t{} {}", normalize(&field.source_key), field.ty)?;
        let tag = FieldTag { prefix: &self.tag_prefix, field };
        if !tag.is_blank() {
            write!(self.sink, " {tag}")?;
        }
        self.sink.write_char('\n')
    }

    pub fn into_sink(self) -> W { self.sink }
}

/// Roots first (in the given order, each once, skipping unregistered names),
/// then every other record sorted by name.
pub fn emission_order<'r>(registry: &'r RecordRegistry, root_names: &[String]) -> Vec<&'r RecordDef> {
    let mut roots = HashSet::new();
    let mut out = Vec::with_capacity(registry.len());
    for name in root_names {
        if !roots.insert(name.as_str()) {
            continue;
        }
        if let Some(def) = registry.get(name) {
            out.push(def);
        }
    }

    let mut rest: Vec<&str> = registry.names().filter(|n| !roots.contains(n)).collect();
    rest.sort_unstable();
    out.extend(rest.into_iter().filter_map(|n| registry.get(n)));
    out
}

/// Render a whole registry to text. Empty registry → empty string.
pub fn render(registry: &RecordRegistry, root_names: &[String], tag_prefix: &str) -> String {
    let mut cg = Codegen::new(tag_prefix);
    // a String sink never rejects writes
    let _ = cg.emit(registry, root_names);
    cg.into_string()
}

// ------------------------------- Tests ------------------------------------ //
