//! `serde_yaml` → `Node` adapter.
//!
//! serde_yaml handles lexing, anchors and aliases; this module
//! only reshapes its values into the tree the inference engine reads.
use serde::Deserialize;
use serde_yaml::Value;

use crate::node::{Document, Node, ScalarKind};

/// Parse a (possibly multi-document) YAML stream.
pub fn parse_documents(src: &str) -> Result<Vec<Document>, serde_yaml::Error> {
    let mut docs = Vec::new();
    for de in serde_yaml::Deserializer::from_str(src) {
        let value = Value::deserialize(de)?;
        docs.push(Document::new(to_node(&value)));
    }
    Ok(docs)
}

pub fn to_node(value: &Value) -> Node {
    match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::bool(*b),
        Value::Number(n) => {
            let kind = if n.is_f64() { ScalarKind::Float } else { ScalarKind::Integer };
            Node::Scalar { kind, literal: n.to_string() }
        }
        Value::String(s) => Node::string(s.as_str()),
        Value::Sequence(xs) => Node::Sequence(xs.iter().map(to_node).collect()),
        Value::Mapping(m) => Node::Mapping(
            m.iter().map(|(k, v)| (key_text(k), to_node(v))).collect()
        ),
        Value::Tagged(tagged) => Node::Unknown { tag: tagged.tag.to_string() },
    }
}

/// Mapping keys as text. Scalars print as written; complex keys fall back to
/// their inline YAML form.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_classified() {
        let docs = parse_documents("s: hi\ni: 30\nf: 1.5\nb: true\nn: ~\nq: \"42\"\n").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].body, Node::mapping([
            ("s", Node::string("hi")),
            ("i", Node::integer(30)),
            ("f", Node::float("1.5")),
            ("b", Node::bool(true)),
            ("n", Node::null()),
            ("q", Node::string("42")),
        ]));
    }

    #[test]
    fn mapping_order_is_source_order() {
        let docs = parse_documents("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let Node::Mapping(entries) = &docs[0].body else { panic!("expected mapping") };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn multi_document_streams_split() {
        let docs = parse_documents("name: a\n---\ntitle: b\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].body, Node::mapping([("title", Node::string("b"))]));
    }

    #[test]
    fn non_string_keys_become_text() {
        let docs = parse_documents("200: ok\ntrue: yes\n").unwrap();
        let Node::Mapping(entries) = &docs[0].body else { panic!("expected mapping") };
        assert_eq!(entries[0].0, "200");
        assert_eq!(entries[1].0, "true");
    }

    #[test]
    fn custom_tags_are_unknown() {
        let docs = parse_documents("secret: !vault abc\n").unwrap();
        let Node::Mapping(entries) = &docs[0].body else { panic!("expected mapping") };
        assert!(matches!(&entries[0].1, Node::Unknown { tag } if tag.contains("vault")));
    }

    #[test]
    fn aliases_are_resolved() {
        let docs = parse_documents("base: &b\n  port: 1\ncopy: *b\n").unwrap();
        let Node::Mapping(entries) = &docs[0].body else { panic!("expected mapping") };
        assert_eq!(entries[1].1, Node::mapping([("port", Node::integer(1))]));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(parse_documents("a: [1, 2\n").is_err());
    }
}
