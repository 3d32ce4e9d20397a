// AST node type - some accessors only exercised by tests
#![allow(dead_code)]

use super::span::Loc;
use serde::{Deserialize, Serialize};

/// A source tree node, tagged by its ESTree `type` string.
///
/// This is a closed set: every shape the analysis can say something about has
/// its own variant, and everything else deserializes to [`Node::Unknown`].
/// Child fields are optional wherever a partially-typed tree may omit them;
/// a missing child means "no information", never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Node {
    Program {
        #[serde(default)]
        body: Vec<Node>,
    },
    VariableDeclaration {
        #[serde(default)]
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        #[serde(default)]
        id: Option<Box<Node>>,
        #[serde(default)]
        init: Option<Box<Node>>,
    },
    ObjectExpression {
        #[serde(default)]
        properties: Vec<Node>,
    },
    #[serde(alias = "ObjectProperty")]
    Property {
        #[serde(default)]
        key: Option<Box<Node>>,
        #[serde(default)]
        value: Option<Box<Node>>,
        #[serde(default)]
        computed: bool,
        #[serde(default)]
        loc: Option<Loc>,
    },
    ObjectPattern {
        #[serde(default)]
        properties: Vec<Node>,
    },
    ArrayExpression {
        /// ESTree represents array holes as nulls
        #[serde(default)]
        elements: Vec<Option<Node>>,
    },
    SpreadElement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    ConditionalExpression {
        #[serde(default)]
        test: Option<Box<Node>>,
        #[serde(default)]
        consequent: Option<Box<Node>>,
        #[serde(default)]
        alternate: Option<Box<Node>>,
    },
    LogicalExpression {
        #[serde(default)]
        operator: String,
        #[serde(default)]
        left: Option<Box<Node>>,
        #[serde(default)]
        right: Option<Box<Node>>,
    },
    BinaryExpression {
        #[serde(default)]
        operator: String,
        #[serde(default)]
        left: Option<Box<Node>>,
        #[serde(default)]
        right: Option<Box<Node>>,
    },
    UnaryExpression {
        #[serde(default)]
        operator: String,
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    UpdateExpression {
        #[serde(default)]
        operator: String,
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    AssignmentExpression {
        #[serde(default)]
        operator: String,
        #[serde(default)]
        left: Option<Box<Node>>,
        #[serde(default)]
        right: Option<Box<Node>>,
    },
    MemberExpression {
        #[serde(default)]
        object: Option<Box<Node>>,
        #[serde(default)]
        property: Option<Box<Node>>,
        #[serde(default)]
        computed: bool,
    },
    CallExpression {
        #[serde(default)]
        callee: Option<Box<Node>>,
        #[serde(default)]
        arguments: Vec<Node>,
    },
    Identifier {
        #[serde(default)]
        name: String,
    },
    #[serde(alias = "StringLiteral", alias = "NumericLiteral", alias = "BooleanLiteral")]
    Literal {
        #[serde(default)]
        value: serde_json::Value,
    },
    ReturnStatement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    ExpressionStatement {
        #[serde(default)]
        expression: Option<Box<Node>>,
    },
    BlockStatement {
        #[serde(default)]
        body: Vec<Node>,
    },
    FunctionDeclaration {
        #[serde(default)]
        id: Option<Box<Node>>,
        #[serde(default)]
        params: Vec<Node>,
        #[serde(default)]
        body: Option<Box<Node>>,
    },
    FunctionExpression {
        #[serde(default)]
        params: Vec<Node>,
        #[serde(default)]
        body: Option<Box<Node>>,
    },
    ArrowFunctionExpression {
        #[serde(default)]
        params: Vec<Node>,
        #[serde(default)]
        body: Option<Box<Node>>,
    },
    IfStatement {
        #[serde(default)]
        test: Option<Box<Node>>,
        #[serde(default)]
        consequent: Option<Box<Node>>,
        #[serde(default)]
        alternate: Option<Box<Node>>,
    },
    #[serde(alias = "JSXFragment")]
    JSXElement {
        #[serde(default)]
        opening_element: Option<Box<Node>>,
        #[serde(default)]
        children: Vec<Node>,
    },
    JSXOpeningElement {
        #[serde(default)]
        name: Option<Box<Node>>,
        #[serde(default)]
        attributes: Vec<Node>,
    },
    JSXAttribute {
        #[serde(default)]
        name: Option<Box<Node>>,
        #[serde(default)]
        value: Option<Box<Node>>,
    },
    JSXExpressionContainer {
        #[serde(default)]
        expression: Option<Box<Node>>,
    },
    JSXIdentifier {
        #[serde(default)]
        name: String,
    },
    /// Any node shape the analysis has nothing to say about
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Ordered child nodes, for pre-order walking
    pub fn children(&self) -> Vec<&Node> {
        let mut out = Vec::new();

        fn push<'a>(out: &mut Vec<&'a Node>, child: &'a Option<Box<Node>>) {
            if let Some(node) = child {
                out.push(node);
            }
        }

        match self {
            Node::Program { body } | Node::BlockStatement { body } => {
                out.extend(body.iter());
            }
            Node::VariableDeclaration { declarations } => out.extend(declarations.iter()),
            Node::VariableDeclarator { id, init } => {
                push(&mut out, id);
                push(&mut out, init);
            }
            Node::ObjectExpression { properties } | Node::ObjectPattern { properties } => {
                out.extend(properties.iter());
            }
            Node::Property { key, value, .. } => {
                push(&mut out, key);
                push(&mut out, value);
            }
            Node::ArrayExpression { elements } => {
                out.extend(elements.iter().flatten());
            }
            Node::SpreadElement { argument }
            | Node::UnaryExpression { argument, .. }
            | Node::UpdateExpression { argument, .. }
            | Node::ReturnStatement { argument } => push(&mut out, argument),
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            }
            | Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                push(&mut out, test);
                push(&mut out, consequent);
                push(&mut out, alternate);
            }
            Node::LogicalExpression { left, right, .. }
            | Node::BinaryExpression { left, right, .. }
            | Node::AssignmentExpression { left, right, .. } => {
                push(&mut out, left);
                push(&mut out, right);
            }
            Node::MemberExpression {
                object, property, ..
            } => {
                push(&mut out, object);
                push(&mut out, property);
            }
            Node::CallExpression { callee, arguments } => {
                push(&mut out, callee);
                out.extend(arguments.iter());
            }
            Node::ExpressionStatement { expression }
            | Node::JSXExpressionContainer { expression } => push(&mut out, expression),
            Node::FunctionDeclaration { id, params, body } => {
                push(&mut out, id);
                out.extend(params.iter());
                push(&mut out, body);
            }
            Node::FunctionExpression { params, body }
            | Node::ArrowFunctionExpression { params, body } => {
                out.extend(params.iter());
                push(&mut out, body);
            }
            Node::JSXElement {
                opening_element,
                children,
            } => {
                push(&mut out, opening_element);
                out.extend(children.iter());
            }
            Node::JSXOpeningElement { name, attributes } => {
                push(&mut out, name);
                out.extend(attributes.iter());
            }
            Node::JSXAttribute { name, value } => {
                push(&mut out, name);
                push(&mut out, value);
            }
            Node::Identifier { .. }
            | Node::JSXIdentifier { .. }
            | Node::Literal { .. }
            | Node::Unknown => {}
        }

        out
    }

    /// Source span, where the input carried one
    pub fn loc(&self) -> Option<Loc> {
        match self {
            Node::Property { loc, .. } => *loc,
            _ => None,
        }
    }

    /// Name of an `Identifier` or `JSXIdentifier` node
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Node::Identifier { name } | Node::JSXIdentifier { name } if !name.is_empty() => {
                Some(name)
            }
            _ => None,
        }
    }

    /// Statically-known key name of a `Property` or `ObjectPattern` entry.
    ///
    /// Identifier keys and string-literal keys resolve; computed keys and
    /// anything else yield `None` and are excluded from tracking.
    pub fn static_key_name(&self) -> Option<&str> {
        let Node::Property { key, computed, .. } = self else {
            return None;
        };
        if *computed {
            return None;
        }
        match key.as_deref() {
            Some(Node::Identifier { name }) if !name.is_empty() => Some(name),
            Some(Node::Literal { value }) => value.as_str(),
            _ => None,
        }
    }

    /// ESTree type tag, for logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
            Node::ObjectExpression { .. } => "ObjectExpression",
            Node::Property { .. } => "Property",
            Node::ObjectPattern { .. } => "ObjectPattern",
            Node::ArrayExpression { .. } => "ArrayExpression",
            Node::SpreadElement { .. } => "SpreadElement",
            Node::ConditionalExpression { .. } => "ConditionalExpression",
            Node::LogicalExpression { .. } => "LogicalExpression",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::UnaryExpression { .. } => "UnaryExpression",
            Node::UpdateExpression { .. } => "UpdateExpression",
            Node::AssignmentExpression { .. } => "AssignmentExpression",
            Node::MemberExpression { .. } => "MemberExpression",
            Node::CallExpression { .. } => "CallExpression",
            Node::Identifier { .. } => "Identifier",
            Node::Literal { .. } => "Literal",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::BlockStatement { .. } => "BlockStatement",
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
            Node::FunctionExpression { .. } => "FunctionExpression",
            Node::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            Node::IfStatement { .. } => "IfStatement",
            Node::JSXElement { .. } => "JSXElement",
            Node::JSXOpeningElement { .. } => "JSXOpeningElement",
            Node::JSXAttribute { .. } => "JSXAttribute",
            Node::JSXExpressionContainer { .. } => "JSXExpressionContainer",
            Node::JSXIdentifier { .. } => "JSXIdentifier",
            Node::Unknown => "Unknown",
        }
    }
}
