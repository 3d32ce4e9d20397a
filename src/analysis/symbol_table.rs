// Symbol table - some accessors only exercised by tests
#![allow(dead_code)]

use crate::ast::Node;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Per-file bookkeeping for style definitions and usages.
///
/// Built during a single traversal and discarded with it; a new file always
/// starts from an empty table so nothing leaks between files.
#[derive(Debug, Default)]
pub struct SymbolTable<'ast> {
    /// Defined style names with their defining `Property` node, in insertion
    /// order for deterministic reporting
    defined: Vec<(String, &'ast Node)>,

    /// Name -> position in `defined`, for last-write-wins overwrite
    defined_index: HashMap<String, usize>,

    /// Style names seen at a usage site; grows monotonically
    used: HashSet<String>,

    /// Container binding name -> member names it defines
    containers: HashMap<String, BTreeSet<String>>,
}

impl<'ast> SymbolTable<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a container and its member definitions.
    ///
    /// A member name already defined by an earlier container is overwritten
    /// (last-write-wins) but keeps its original insertion position, matching
    /// the `Map.set` semantics the diagnostics were specified against. Only
    /// one defining node is retained per name, global to the file.
    pub fn define_container(&mut self, container: &str, members: Vec<(String, &'ast Node)>) {
        let mut member_names = BTreeSet::new();

        for (name, node) in members {
            member_names.insert(name.clone());

            if let Some(&pos) = self.defined_index.get(&name) {
                self.defined[pos].1 = node;
            } else {
                self.defined_index.insert(name.clone(), self.defined.len());
                self.defined.push((name, node));
            }
        }

        self.containers.insert(container.to_string(), member_names);
    }

    /// Mark a style name as used; idempotent
    pub fn record_usage(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    /// Member names of a known container binding
    pub fn lookup_container(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.containers.get(name)
    }

    pub fn is_container(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// All defined symbols in insertion order
    pub fn all_definitions(&self) -> impl Iterator<Item = (&str, &'ast Node)> + '_ {
        self.defined.iter().map(|(name, node)| (name.as_str(), *node))
    }

    pub fn definition_count(&self) -> usize {
        self.defined.len()
    }
}
