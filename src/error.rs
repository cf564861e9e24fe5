use std::path::PathBuf;
use thiserror::Error;

/// Failures before or after inference: locating, reading, parsing inputs and
/// writing outputs. Inference itself cannot fail.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to expand glob: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("glob pattern matched no files: {pattern}")]
    NoMatches { pattern: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse YAML ({}): {source}", .path.display())]
    Parse { path: PathBuf, source: serde_yaml::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

pub type LoadResult<T> = Result<T, LoadError>;
