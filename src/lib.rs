//! StyleSweep - Fast unused-style detection for React Native
//!
//! This library finds styles defined via `StyleSheet.create` that are never
//! referenced anywhere in the same file.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **Discovery** - Find pre-parsed `.ast.json` documents
//! 2. **Parsing** - Load ESTree JSON into a closed, tagged AST
//! 3. **Traversal** - Walk the tree, collecting definitions and usages
//! 4. **Diff** - Report defined styles absent from the used set
//! 5. **Reporting** - Output results in terminal or JSON format
//!
//! Each file is analyzed independently with a fresh symbol table; the only
//! shared state is the tree being walked, so batch callers may parallelize
//! at file granularity.

pub mod analysis;
pub mod ast;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod walk;

pub use analysis::{analyze, Finding, StyleAnalyzer, SymbolTable};
pub use ast::{Loc, Node, Position};
pub use discovery::AstFileFinder;
pub use parser::{parse_file, parse_str, ParseError};
pub use report::{FileReport, ReportFormat, Reporter};
pub use walk::Visitor;
