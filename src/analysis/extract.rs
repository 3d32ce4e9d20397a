//! Reference extraction: which style names could this expression reach?
//!
//! Every rule over-approximates on purpose. A missed usage becomes a false
//! "unused" report, which erodes trust in the tool; an over-included usage
//! only suppresses a report. The rules accept the latter.

use super::symbol_table::SymbolTable;
use crate::ast::Node;
use std::collections::HashSet;

/// Extract the set of style names an expression could reference.
///
/// Pure and recursive; reads container membership from the table but never
/// mutates it. Unrecognized shapes resolve to the empty set.
pub fn extract_style_names(node: &Node, table: &SymbolTable<'_>) -> HashSet<String> {
    let mut names = HashSet::new();
    collect(node, table, &mut names);
    names
}

fn collect(node: &Node, table: &SymbolTable<'_>, names: &mut HashSet<String>) {
    match node {
        // styles.container — the property name counts only when qualified by
        // an identifier object; a bare member name is never emitted
        Node::MemberExpression {
            object: Some(object),
            property: Some(property),
            ..
        } => {
            if object.identifier_name().is_some() {
                if let Some(member) = property.identifier_name() {
                    names.insert(member.to_string());
                }
            }
        }

        // [styles.container, styles.text]
        Node::ArrayExpression { elements } => {
            for element in elements.iter().flatten() {
                collect(element, table, names);
            }
        }

        Node::SpreadElement {
            argument: Some(argument),
        } => collect(argument, table, names),

        // The test is included deliberately: a name appearing only in a
        // condition still counts as used
        Node::ConditionalExpression {
            test,
            consequent,
            alternate,
        } => {
            for branch in [consequent, alternate, test].into_iter().flatten() {
                collect(branch, table, names);
            }
        }

        // Passing the whole container uses everything it contains, since we
        // cannot know which members the receiver will pick
        Node::Identifier { name } => {
            if let Some(members) = table.lookup_container(name) {
                names.extend(members.iter().cloned());
            }
        }

        Node::ObjectExpression { properties } => {
            for property in properties {
                match property {
                    Node::SpreadElement {
                        argument: Some(argument),
                    } => collect(argument, table, names),
                    Node::Property {
                        value: Some(value), ..
                    } => collect(value, table, names),
                    _ => {}
                }
            }
        }

        Node::Property {
            value: Some(value), ..
        } => collect(value, table, names),

        Node::LogicalExpression { left, right, .. }
        | Node::BinaryExpression { left, right, .. } => {
            for operand in [left, right].into_iter().flatten() {
                collect(operand, table, names);
            }
        }

        Node::UnaryExpression {
            argument: Some(argument),
            ..
        }
        | Node::UpdateExpression {
            argument: Some(argument),
            ..
        } => collect(argument, table, names),

        // Anything else carries no style reference we can resolve
        _ => {}
    }
}
