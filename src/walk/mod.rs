//! Tree-walking host for visitor-based analyses.
//!
//! The walker owns traversal order; analyses subscribe to the node shapes
//! they care about by implementing [`Visitor`] and leave everything else at
//! the default no-op. One full pre-order walk per file, then a single
//! end-of-traversal notification.

use crate::ast::Node;

/// Callbacks an analysis can register with the walker.
///
/// Each callback receives the matching node in document order. `finish` is
/// delivered exactly once, after the last node.
pub trait Visitor<'ast> {
    fn visit_variable_declarator(&mut self, _node: &'ast Node) {}

    fn visit_jsx_attribute(&mut self, _node: &'ast Node) {}

    fn visit_return_statement(&mut self, _node: &'ast Node) {}

    fn visit_assignment_expression(&mut self, _node: &'ast Node) {}

    /// End-of-traversal notification
    fn finish(&mut self) {}
}

/// Walk one file's tree and deliver the end-of-traversal notification
pub fn run<'ast, V: Visitor<'ast>>(program: &'ast Node, visitor: &mut V) {
    walk(program, visitor);
    visitor.finish();
}

/// Pre-order walk without the final notification
pub fn walk<'ast, V: Visitor<'ast>>(node: &'ast Node, visitor: &mut V) {
    match node {
        Node::VariableDeclarator { .. } => visitor.visit_variable_declarator(node),
        Node::JSXAttribute { .. } => visitor.visit_jsx_attribute(node),
        Node::ReturnStatement { .. } => visitor.visit_return_statement(node),
        Node::AssignmentExpression { .. } => visitor.visit_assignment_expression(node),
        _ => {}
    }

    for child in node.children() {
        walk(child, visitor);
    }
}
