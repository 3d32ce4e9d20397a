mod analyzer;
mod extract;
mod symbol_table;

pub use analyzer::{analyze, StyleAnalyzer};
pub use extract::extract_style_names;
pub use symbol_table::SymbolTable;

use crate::ast::Loc;
use serde::Serialize;

/// A defined-but-unused style, with the location of its defining property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// The unused style name
    pub name: String,

    /// Source span of the defining property, when the input carried one
    pub loc: Option<Loc>,
}

impl Finding {
    pub fn new(name: impl Into<String>, loc: Option<Loc>) -> Self {
        Self {
            name: name.into(),
            loc,
        }
    }

    /// Human-readable diagnostic message
    pub fn message(&self) -> String {
        format!("Style '{}' is defined but never used.", self.name)
    }
}
