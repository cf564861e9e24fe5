//! Infer Go struct definitions from YAML documents.
//!
//! Pipeline: YAML text → `node::Node` tree (`yaml`) → records discovered by
//! walking each document (`walk`, `inference`) into a `registry::RecordRegistry`
//! → deterministic text (`codegen`). `generator` ties one run together.
//!
//! ```
//! use yaml_osi::{generate, parse_documents, Options};
//!
//! let docs = parse_documents("user:\n  name: john\n  age: 30\n").unwrap();
//! let src = generate(&docs, &Options::default());
//! assert!(src.starts_with("type User struct {"));
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod generator;
pub mod inference;
pub mod ir;
pub mod naming;
pub mod node;
pub mod options;
pub mod registry;
pub mod walk;
pub mod yaml;

pub use generator::{generate, Generation};
pub use options::{Emptiness, Optionality, Options};
pub use yaml::parse_documents;
