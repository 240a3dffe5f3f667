// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure kinds for taxonomy construction and selection.
///
/// There is no retry policy: every variant is a data-integrity or
/// configuration problem that requires corrected input.
#[derive(Debug, Error)]
pub enum HypernymError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("no {table} entry for '{wnid}'")]
    Lookup { wnid: String, table: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("integrity violation: {0}")]
    Integrity(String),
}

pub type Result<T> = std::result::Result<T, HypernymError>;

impl HypernymError {
    /// Lookup failure against the identifier→name table.
    pub(crate) fn no_name(wnid: &str) -> Self {
        Self::Lookup {
            wnid: wnid.to_string(),
            table: "name",
        }
    }

    /// Lookup failure against the leaf-class index.
    pub(crate) fn no_class(wnid: &str) -> Self {
        Self::Lookup {
            wnid: wnid.to_string(),
            table: "class-number",
        }
    }

    /// Identifier not present in the constructed taxonomy.
    pub(crate) fn unknown_node(wnid: &str) -> Self {
        Self::Lookup {
            wnid: wnid.to_string(),
            table: "taxonomy",
        }
    }
}
