// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression node definitions.
//!
//! Every struct here is the payload of one [`Node`] variant. Child slots are
//! `Box<Node>` when required, `Option<Box<Node>>` when the grammar makes them
//! optional, and `Vec<Node>` for ordered sequences. Field declaration order
//! matches the order the walker visits children; the `walk_*` functions in
//! [`visitor`](crate::visitor) are the authoritative table.

use serde::{Deserialize, Serialize};

use super::op::{AssignOp, BinaryOp, PropertyKind, UnaryOp};
use super::Node;

/// An array literal: `[a, b, c]`.
///
/// Elisions (`[a, , c]`) are represented as [`EmptyExpression`] elements,
/// never as holes in the vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Node>,
}

/// An assignment: `left = right`, `left += right`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpression {
    pub operator: AssignOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// A placeholder produced in place of an expression that failed to parse.
///
/// Walking one is legal and visits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadExpression;

/// A binary operation: `left op right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub operator: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// `true` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// A computed member access: `left[member]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketExpression {
    pub left: Box<Node>,
    pub member: Box<Node>,
}

/// A call: `callee(arguments...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
}

/// A ternary conditional: `test ? consequent : alternate`.
///
/// All three children are required; the grammar has no two-armed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Box<Node>,
}

/// A named member access: `left.identifier`.
///
/// The member name is plain text, not a child node; the walker descends
/// into `left` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotExpression {
    pub left: Box<Node>,
    pub identifier: String,
}

/// An expression slot that is syntactically present but empty, such as an
/// array elision. Visits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyExpression;

/// A function literal: `function name(parameters) { body }`.
///
/// The name is absent for anonymous functions, and a zero-parameter
/// function is as legal a tree as any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionLiteral {
    pub name: Option<Box<Node>>,
    pub parameters: Vec<Node>,
    pub body: Box<Node>,
}

/// A name referring to a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A constructor call: `new callee(arguments...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
}

/// The `null` literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullLiteral;

/// A numeric literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
}

/// An object literal: `{ key: value, ... }`.
///
/// Properties are not nodes; only each property's value participates in
/// traversal, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
}

/// One `key: value` entry of an [`ObjectLiteral`]. The key is plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub kind: PropertyKind,
    pub value: Node,
}

/// A regular expression literal: `/pattern/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: String,
}

/// A comma sequence: `a, b, c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceExpression {
    pub sequence: Vec<Node>,
}

/// A string literal. `value` is the cooked value, not the raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

/// The `this` expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThisExpression;

/// A unary operation: `op operand`, or `operand op` when `postfix` is set
/// (`x++`, `x--`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: UnaryOp,
    pub operand: Box<Node>,
    pub postfix: bool,
}

/// A single declarator inside a [`VariableStatement`](crate::VariableStatement):
/// `name` or `name = initializer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpression {
    pub name: String,
    pub initializer: Option<Box<Node>>,
}
