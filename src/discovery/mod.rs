//! Discovery of AST documents in a project tree.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Extension carried by pre-parsed ESTree documents
pub const AST_EXTENSION: &str = ".ast.json";

/// Check whether a path looks like an AST document
pub fn is_ast_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(AST_EXTENSION))
        .unwrap_or(false)
}

/// Finder for `.ast.json` documents under a project root
pub struct AstFileFinder;

impl AstFileFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find all AST documents under the given path.
    ///
    /// A path pointing at a single document is accepted as-is, so the CLI
    /// can analyze one file without a directory scan.
    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return if is_ast_document(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        debug!("Scanning for AST documents in: {}", root.display());

        let walker = WalkBuilder::new(root)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();
                if is_ast_document(path) {
                    trace!("Found AST document: {}", path.display());
                    Some(path.to_path_buf())
                } else {
                    None
                }
            })
            .collect();

        // Deterministic analysis order regardless of walk order
        files.sort();

        debug!("Found {} AST documents", files.len());
        files
    }
}

impl Default for AstFileFinder {
    fn default() -> Self {
        Self::new()
    }
}
