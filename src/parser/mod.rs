//! Loading ESTree JSON documents into the tagged AST.
//!
//! The analysis itself never touches the filesystem; this module is the
//! batch-mode front door that turns a parser's JSON output (Babel, Espree,
//! or anything ESTree-compatible, serialized with `loc`) into a [`Node`].

use crate::ast::Node;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed AST document {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse an ESTree JSON string into a tree
pub fn parse_str(contents: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Read and parse an ESTree JSON document from disk
pub fn parse_file(path: &Path) -> Result<Node, ParseError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let node = parse_str(&contents).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("Parsed AST document: {}", path.display());
    Ok(node)
}
