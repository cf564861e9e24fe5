//! Minimal CLI: infer → (go | schema)
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::info;

use crate::error::{LoadError, LoadResult};
use crate::generator::Generation;
use crate::node::Document;
use crate::options::{Options, DEFAULT_TAG_PREFIX};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer record types from YAML and output either Go struct definitions or a JSON debug view
#[derive(Parser, Debug)]
#[command(name = "yaml-osi", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit Go struct definitions
    Go(GoOut),
    /// infer and print the inferred records as JSON
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths or quoted glob patterns.
    /// Every file is inferred on its own; documents inside one file share names.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct InferenceSettings {
    /// struct tag key (json, yaml, ...); empty string disables tags
    #[arg(long, default_value = DEFAULT_TAG_PREFIX)]
    tag_prefix: String,

    /// type scalar fields as pointers (`*string`); slice elements stay bare
    #[arg(long, default_value_t = false)]
    pointers: bool,

    /// also treat numeric zero literals (0, 0.0) as empty for omitempty
    #[arg(long, default_value_t = false)]
    omit_zero: bool,
}

#[derive(clap::Parser, Debug)]
struct GoOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    inference: InferenceSettings,

    /// output .go file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    inference: InferenceSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

struct Input {
    path: PathBuf,
    docs: Vec<Document>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Resolve and parse every input. Files are read in parallel; the result
    /// keeps the order the inputs were given in.
    fn load(&self) -> LoadResult<Vec<Input>> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        source_paths.into_par_iter().map(load_input).collect()
    }
}

impl InferenceSettings {
    fn options(&self) -> Options {
        let mut options = Options::default().with_tag_prefix(self.tag_prefix.as_str());
        if self.pointers {
            options = options.pointers();
        }
        if self.omit_zero {
            options = options.omit_zero_values();
        }
        options
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Go(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let options = target.inference.options();
                let inputs = target.input_settings.load()?;
                let blocks: Vec<String> = inputs
                    .par_iter()
                    .map(|input| Generation::run(&input.docs, &options).render())
                    .filter(|src| !src.is_empty())
                    .collect();
                write_output(target.out.as_deref(), &blocks.join("\n"))?;
            }
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let options = target.inference.options();
                let inputs = target.input_settings.load()?;
                let mut schemas: IndexMap<String, serde_json::Value> = inputs
                    .par_iter()
                    .map(|input| {
                        let schema = Generation::run(&input.docs, &options).to_schema();
                        (input.path.to_string_lossy().to_string(), schema)
                    })
                    .collect::<Vec<_>>()
                    .into_iter()
                    .collect();
                let schema = match schemas.len() {
                    1 => schemas.swap_remove_index(0).map(|(_, v)| v).unwrap_or_default(),
                    _ => serde_json::to_value(&schemas).context("failed to assemble schema view")?,
                };
                let mut schema_src = serde_json::to_string_pretty(&schema)
                    .context("failed to serialize schema view")?;
                schema_src.push('\n');
                write_output(target.out.as_deref(), &schema_src)?;
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn load_input(path: PathBuf) -> LoadResult<Input> {
    let source = std::fs::read_to_string(&path)
        .map_err(|source| LoadError::Read { path: path.clone(), source })?;
    let docs = crate::yaml::parse_documents(&source)
        .map_err(|source| LoadError::Parse { path: path.clone(), source })?;
    info!(path = %path.display(), documents = docs.len(), "loaded input");
    Ok(Input { path, docs })
}

fn write_output(out: Option<&Path>, text: &str) -> LoadResult<()> {
    let Some(out) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| LoadError::Write { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(out, text)
        .map_err(|source| LoadError::Write { path: out.to_path_buf(), source })?;
    info!(path = %out.display(), bytes = text.len(), "wrote output");
    Ok(())
}

pub(crate) fn resolve_file_path_patterns<I>(patterns: I) -> LoadResult<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(entry?);
            }
            if out.len() == before {
                return Err(LoadError::NoMatches { pattern: pattern.to_string() });
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_file_path_patterns(["config.yaml", "dir/other.yml"]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("config.yaml"), PathBuf::from("dir/other.yml")]);
    }

    #[test]
    fn empty_glob_is_an_error() {
        let err = resolve_file_path_patterns(["/definitely/not/here/*.yaml"]).unwrap_err();
        assert!(matches!(err, LoadError::NoMatches { .. }));
    }

    #[test]
    fn flags_map_onto_options() {
        let cli = CommandLineInterface::try_parse_from([
            "yaml-osi", "go", "-i", "a.yaml", "--tag-prefix", "yaml", "--pointers",
        ]).unwrap();
        let Command::Go(go) = &cli.cmd else { panic!("expected go subcommand") };
        let options = go.inference.options();
        assert_eq!(options, Options::default().with_tag_prefix("yaml").pointers());
    }

    #[test]
    fn tag_prefix_defaults_to_json() {
        let cli = CommandLineInterface::try_parse_from(["yaml-osi", "schema", "-i", "a.yaml"]).unwrap();
        let Command::Schema(schema) = &cli.cmd else { panic!("expected schema subcommand") };
        assert_eq!(schema.inference.options(), Options::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let settings = InputSettings { input: vec!["/definitely/not/here.yaml".into()] };
        assert!(matches!(settings.load(), Err(LoadError::Read { .. })));
    }
}
