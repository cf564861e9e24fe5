// Strongly-typed IR for codegen. No parser nodes here.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeExpr {
    Scalar(String),          // string, int, float64, bool
    Optional(Box<TypeExpr>), // pointer mode wrapper for scalar fields
    Slice(Box<TypeExpr>),
    GenericMap,              // empty mapping: untyped key/value container
    RecordRef(String),
    Any,                     // null and unclassified nodes
}

impl TypeExpr {
    pub fn scalar(name: &str) -> Self { TypeExpr::Scalar(name.to_string()) }
    pub fn slice(elem: TypeExpr) -> Self { TypeExpr::Slice(Box::new(elem)) }
    pub fn optional(inner: TypeExpr) -> Self { TypeExpr::Optional(Box::new(inner)) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub source_key: String,  // original YAML key, unnormalized
    pub ty: TypeExpr,
    pub omit: bool,          // source value was empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,  // extra tag flags, appended after omitempty
}

impl FieldDef {
    pub fn new(source_key: impl Into<String>, ty: TypeExpr, omit: bool) -> Self {
        Self { source_key: source_key.into(), ty, omit, flags: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDef>, // mapping source order
}
