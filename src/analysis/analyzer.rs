// Traversal driver - some accessors only exercised by tests
#![allow(dead_code)]

use super::extract::extract_style_names;
use super::symbol_table::SymbolTable;
use super::Finding;
use crate::ast::Node;
use crate::walk::{self, Visitor};
use regex::Regex;
use tracing::{debug, trace};

/// The factory whose calls introduce style containers: `StyleSheet.create`
const FACTORY_OBJECT: &str = "StyleSheet";
const FACTORY_METHOD: &str = "create";

/// Attribute names that carry style expressions. Matches `style` as well as
/// suffixed names like `contentContainerStyle`. A deliberate heuristic; do
/// not generalize without evidence.
const STYLE_ATTRIBUTE_PATTERN: &str = r"[sS]tyle$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Traversing,
    Finalized,
}

/// Per-file traversal driver.
///
/// Collects style definitions and usages through visitor callbacks, then
/// diffs them exactly once at end of traversal. The diff is never computed
/// incrementally: a usage may appear anywhere in the file relative to its
/// definition. A new file gets a new analyzer.
pub struct StyleAnalyzer<'ast> {
    table: SymbolTable<'ast>,
    state: State,
    findings: Vec<Finding>,
    style_attribute: Regex,
}

impl<'ast> StyleAnalyzer<'ast> {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            state: State::Traversing,
            findings: Vec::new(),
            style_attribute: Regex::new(STYLE_ATTRIBUTE_PATTERN)
                .expect("style attribute pattern is a fixed constant"),
        }
    }

    /// Findings computed at end of traversal; empty until finalized
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    fn is_factory_callee(callee: &Node) -> bool {
        let Node::MemberExpression {
            object: Some(object),
            property: Some(property),
            ..
        } = callee
        else {
            return false;
        };
        object.identifier_name() == Some(FACTORY_OBJECT)
            && property.identifier_name() == Some(FACTORY_METHOD)
    }

    /// `const styles = StyleSheet.create({ ... })`
    fn collect_definitions(&mut self, id: &'ast Node, init: &'ast Node) {
        let Node::CallExpression {
            callee: Some(callee),
            arguments,
        } = init
        else {
            return;
        };
        if !Self::is_factory_callee(callee) {
            return;
        }
        let Some(container) = id.identifier_name() else {
            return;
        };
        let Some(Node::ObjectExpression { properties }) = arguments.first() else {
            return;
        };

        // Computed and non-static keys cannot be resolved statically and are
        // silently skipped: neither defined nor reportable
        let members: Vec<(String, &'ast Node)> = properties
            .iter()
            .filter_map(|prop| prop.static_key_name().map(|name| (name.to_string(), prop)))
            .collect();

        debug!(
            "Registered container '{}' with {} members",
            container,
            members.len()
        );
        self.table.define_container(container, members);
    }

    /// `const { container, text } = styles`
    fn collect_destructured_usages(&mut self, id: &'ast Node, init: &'ast Node) {
        let Some(source) = init.identifier_name() else {
            return;
        };
        if !self.table.is_container(source) {
            return;
        }
        let Node::ObjectPattern { properties } = id else {
            return;
        };
        for prop in properties {
            if let Some(key) = prop.static_key_name() {
                trace!("Destructured style usage: {}", key);
                self.table.record_usage(key);
            }
        }
    }

    fn record_extracted(&mut self, expression: &Node) {
        for name in extract_style_names(expression, &self.table) {
            trace!("Style usage: {}", name);
            self.table.record_usage(&name);
        }
    }
}

impl<'ast> Default for StyleAnalyzer<'ast> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Visitor<'ast> for StyleAnalyzer<'ast> {
    fn visit_variable_declarator(&mut self, node: &'ast Node) {
        if self.state == State::Finalized {
            return;
        }
        let Node::VariableDeclarator {
            id: Some(id),
            init: Some(init),
        } = node
        else {
            return;
        };

        self.collect_definitions(id, init);
        self.collect_destructured_usages(id, init);
    }

    fn visit_jsx_attribute(&mut self, node: &'ast Node) {
        if self.state == State::Finalized {
            return;
        }
        let Node::JSXAttribute {
            name: Some(name),
            value: Some(value),
        } = node
        else {
            return;
        };
        let Some(attribute) = name.identifier_name() else {
            return;
        };
        if !self.style_attribute.is_match(attribute) {
            return;
        }
        if let Node::JSXExpressionContainer {
            expression: Some(expression),
        } = value.as_ref()
        {
            self.record_extracted(expression);
        }
    }

    fn visit_return_statement(&mut self, node: &'ast Node) {
        if self.state == State::Finalized {
            return;
        }
        // A function returning a style reference transitively exposes it
        if let Node::ReturnStatement {
            argument: Some(argument),
        } = node
        {
            self.record_extracted(argument);
        }
    }

    fn visit_assignment_expression(&mut self, node: &'ast Node) {
        if self.state == State::Finalized {
            return;
        }
        if let Node::AssignmentExpression {
            right: Some(right), ..
        } = node
        {
            self.record_extracted(right);
        }
    }

    fn finish(&mut self) {
        if self.state == State::Finalized {
            return;
        }
        self.state = State::Finalized;

        for (name, node) in self.table.all_definitions() {
            if !self.table.is_used(name) {
                debug!("Unused style: {}", name);
                self.findings.push(Finding::new(name, node.loc()));
            }
        }
    }
}

/// Analyze one file's tree with a fresh analyzer and return its findings
pub fn analyze(program: &Node) -> Vec<Finding> {
    let mut analyzer = StyleAnalyzer::new();
    walk::run(program, &mut analyzer);
    analyzer.into_findings()
}
