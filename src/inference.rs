//! Per-value type inference.
//!
//! Maps one YAML value (plus the key it sits under and the current path) to a
//! `TypeExpr`. Every node kind has an answer; nothing here can fail.
//!
//! Non-empty mappings become `RecordRef`s. The referenced record is not built
//! here: each one is reported as a [`Discovery`] tagged with the [`Slot`] it
//! was found in, and the walker (`crate::walk`) decides when to visit it.
//!
//! Sequences are typed from their first element only. Later elements are
//! never looked at, whatever their kind.
use crate::ir::TypeExpr;
use crate::naming::record_name_for;
use crate::node::{Node, ScalarKind};
use crate::options::Optionality;

// ------------------------------- Policy ---------------------------------- //

pub const STRING: &str = "string";
pub const INT: &str = "int";
pub const FLOAT: &str = "float64";
pub const BOOL: &str = "bool";

/// Where a value sits. Pointer mode only wraps scalars held directly by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// the value of a mapping entry
    Field,
    /// reached through a sequence (first element, at any depth)
    Element,
}

/// A nested mapping that needs its own record, and the path to walk it under.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery<'a> {
    pub path: Vec<String>,
    pub entries: &'a [(String, Node)],
    pub slot: Slot,
}

// ------------------------------- Front API -------------------------------- //

pub struct Inference<'a> {
    optionality: Optionality,
    discoveries: Vec<Discovery<'a>>,
}

impl<'a> Inference<'a> {
    pub fn new(optionality: Optionality) -> Self {
        Self { optionality, discoveries: Vec::new() }
    }

    /// Type of a mapping value stored under `field_name`.
    pub fn infer(&mut self, node: &'a Node, field_name: &str, path: &[String]) -> TypeExpr {
        self.infer_slot(node, field_name, path, Slot::Field)
    }

    /// Nested mappings seen so far, in source order.
    pub fn take_discoveries(&mut self) -> Vec<Discovery<'a>> {
        std::mem::take(&mut self.discoveries)
    }

    fn infer_slot(&mut self, node: &'a Node, field_name: &str, path: &[String], slot: Slot) -> TypeExpr {
        match node {
            Node::Scalar { kind, .. } => {
                let Some(name) = scalar_name(*kind) else { return TypeExpr::Any };
                let bare = TypeExpr::scalar(name);
                match (self.optionality, slot) {
                    (Optionality::Pointer, Slot::Field) => TypeExpr::optional(bare),
                    _ => bare,
                }
            }
            Node::Sequence(xs) => match xs.first() {
                None => TypeExpr::slice(TypeExpr::Any),
                Some(first) => TypeExpr::slice(self.infer_slot(first, "", path, Slot::Element)),
            },
            Node::Mapping(entries) if entries.is_empty() => TypeExpr::GenericMap,
            Node::Mapping(entries) => {
                let mut nested = Vec::with_capacity(path.len() + 1);
                nested.extend_from_slice(path);
                nested.push(field_name.to_string());
                self.discoveries.push(Discovery { path: nested, entries, slot });
                TypeExpr::RecordRef(record_name_for(field_name))
            }
            Node::Unknown { .. } => TypeExpr::Any,
        }
    }
}

/// `None` for null: it carries no type information.
fn scalar_name(kind: ScalarKind) -> Option<&'static str> {
    match kind {
        ScalarKind::String => Some(STRING),
        ScalarKind::Integer => Some(INT),
        ScalarKind::Float => Some(FLOAT),
        ScalarKind::Bool => Some(BOOL),
        ScalarKind::Null => None,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn infer_type(node: &Node, field_name: &str, path: &[String], optionality: Optionality) -> TypeExpr {
        Inference::new(optionality).infer(node, field_name, path)
    }

    fn value_mode(node: &Node) -> TypeExpr {
        infer_type(node, "field", &[], Optionality::Value)
    }

    #[test]
    fn scalars_map_to_builtin_names() {
        assert_eq!(value_mode(&Node::string("john")), TypeExpr::scalar("string"));
        assert_eq!(value_mode(&Node::integer(30)), TypeExpr::scalar("int"));
        assert_eq!(value_mode(&Node::float("1.5")), TypeExpr::scalar("float64"));
        assert_eq!(value_mode(&Node::bool(true)), TypeExpr::scalar("bool"));
        assert_eq!(value_mode(&Node::null()), TypeExpr::Any);
        assert_eq!(value_mode(&Node::Unknown { tag: "!vault".into() }), TypeExpr::Any);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(value_mode(&Node::Sequence(vec![])), TypeExpr::slice(TypeExpr::Any));
        assert_eq!(value_mode(&Node::Mapping(vec![])), TypeExpr::GenericMap);
    }

    #[test]
    fn only_first_sequence_element_is_sampled() {
        let xs = Node::Sequence(vec![Node::integer(1), Node::string("two"), Node::bool(true)]);
        assert_eq!(value_mode(&xs), TypeExpr::slice(TypeExpr::scalar("int")));

        let nested = Node::Sequence(vec![Node::Sequence(vec![Node::string("a")])]);
        assert_eq!(value_mode(&nested), TypeExpr::slice(TypeExpr::slice(TypeExpr::scalar("string"))));
    }

    #[test]
    fn non_empty_mapping_is_a_record_ref_and_a_discovery() {
        let profile = Node::mapping([("age", Node::integer(30))]);
        let path = vec!["user".to_string()];
        let mut inf = Inference::new(Optionality::Value);
        let ty = inf.infer(&profile, "user_profile", &path);
        assert_eq!(ty, TypeExpr::RecordRef("UserProfile".into()));

        let found = inf.take_discoveries();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, vec!["user".to_string(), "user_profile".to_string()]);
        assert_eq!(found[0].entries.len(), 1);
        assert_eq!(found[0].slot, Slot::Field);
        assert!(inf.take_discoveries().is_empty());
    }

    #[test]
    fn mapping_elements_use_the_fallback_name() {
        let users = Node::Sequence(vec![
            Node::mapping([("name", Node::string("a"))]),
            Node::mapping([("name", Node::string("b")), ("extra", Node::integer(1))]),
        ]);
        let mut inf = Inference::new(Optionality::Value);
        let ty = inf.infer(&users, "users", &[]);
        assert_eq!(ty, TypeExpr::slice(TypeExpr::RecordRef("NestedStruct".into())));

        let found = inf.take_discoveries();
        assert_eq!(found.len(), 1, "only the first element is walked");
        assert_eq!(found[0].path, vec![String::new()]);
        assert_eq!(found[0].entries.len(), 1);
        assert_eq!(found[0].slot, Slot::Element);
    }

    #[test]
    fn pointer_mode_wraps_field_scalars_only() {
        let ptr = |n: &Node| infer_type(n, "f", &[], Optionality::Pointer);
        assert_eq!(ptr(&Node::string("x")), TypeExpr::optional(TypeExpr::scalar("string")));
        assert_eq!(ptr(&Node::integer(1)), TypeExpr::optional(TypeExpr::scalar("int")));
        assert_eq!(ptr(&Node::null()), TypeExpr::Any);
        assert_eq!(
            ptr(&Node::Sequence(vec![Node::float("2.5")])),
            TypeExpr::slice(TypeExpr::scalar("float64")),
        );
        assert_eq!(ptr(&Node::Mapping(vec![])), TypeExpr::GenericMap);
    }
}
