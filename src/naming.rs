//! Identifier policy and the emptiness predicate behind `omitempty`.
use crate::node::{Node, ScalarKind};
use crate::options::Emptiness;

/// Record name used when a mapping has no usable key (sequence elements).
pub const NESTED_FALLBACK: &str = "NestedStruct";

/// snake_case / kebab-case → PascalCase.
///
/// Runs between `_` and `-` get their first character upper-cased, the rest is
/// kept verbatim. Empty runs (leading, trailing or doubled separators) vanish.
pub fn normalize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for run in key.split(['_', '-']).filter(|run| !run.is_empty()) {
        let mut chars = run.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `normalize(key)`, or the fallback when nothing survives normalization.
pub fn record_name_for(key: &str) -> String {
    let name = normalize(key);
    if name.is_empty() { NESTED_FALLBACK.to_string() } else { name }
}

pub fn is_empty(node: &Node, policy: Emptiness) -> bool {
    match node {
        Node::Scalar { kind: ScalarKind::String, literal } => literal.is_empty(),
        Node::Scalar { kind: ScalarKind::Integer, literal } => {
            policy == Emptiness::ZeroValues && literal == "0"
        }
        Node::Scalar { kind: ScalarKind::Float, literal } => {
            policy == Emptiness::ZeroValues && (literal == "0" || literal == "0.0")
        }
        Node::Scalar { kind: ScalarKind::Bool | ScalarKind::Null, .. } => false,
        Node::Sequence(xs) => xs.is_empty(),
        Node::Mapping(entries) => entries.is_empty(),
        Node::Unknown { .. } => false,
    }
}

// ------------------------------- Tests ------------------------------------ //
