//! Input tree consumed by inference. Produced by the YAML adapter (`crate::yaml`),
//! never mutated afterwards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind { String, Integer, Float, Bool, Null }

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar { kind: ScalarKind, literal: String },
    Sequence(Vec<Node>),
    /// Entries keep source order.
    Mapping(Vec<(String, Node)>),
    /// Anything the adapter could not classify (custom tags and the like).
    Unknown { tag: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub body: Node,
}

// ------------------------------ Constructors ------------------------------ //

impl Node {
    pub fn string(s: impl Into<String>) -> Self {
        Node::Scalar { kind: ScalarKind::String, literal: s.into() }
    }
    pub fn integer(i: i64) -> Self {
        Node::Scalar { kind: ScalarKind::Integer, literal: i.to_string() }
    }
    pub fn float(literal: impl Into<String>) -> Self {
        Node::Scalar { kind: ScalarKind::Float, literal: literal.into() }
    }
    pub fn bool(b: bool) -> Self {
        Node::Scalar { kind: ScalarKind::Bool, literal: b.to_string() }
    }
    pub fn null() -> Self {
        Node::Scalar { kind: ScalarKind::Null, literal: "null".to_string() }
    }
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Document {
    pub fn new(body: Node) -> Self { Self { body } }
}
