// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement node definitions.
//!
//! Same conventions as [`expression`](super::expression): field declaration
//! order matches visitation order, optional children are `Option<Box<Node>>`,
//! sequences are `Vec<Node>`.

use serde::{Deserialize, Serialize};

use super::op::BranchKind;
use super::Node;

/// A brace-delimited statement list: `{ ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub list: Vec<Node>,
}

/// A `break` or `continue` statement, with an optional target label.
///
/// The label, when present, is an [`Identifier`](crate::Identifier) child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStatement {
    pub kind: BranchKind,
    pub label: Option<Box<Node>>,
}

/// One `case test:` arm of a [`SwitchStatement`]. An absent `test` marks
/// the `default:` arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStatement {
    pub test: Option<Box<Node>>,
    pub consequent: Vec<Node>,
}

/// The `catch (parameter) { body }` clause of a [`TryStatement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchStatement {
    pub parameter: Box<Node>,
    pub body: Box<Node>,
}

/// The `debugger` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggerStatement;

/// A `do { body } while (test)` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    pub test: Box<Node>,
    pub body: Box<Node>,
}

/// A lone `;`. Visits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStatement;

/// An expression in statement position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

/// A `for (into in source) { body }` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStatement {
    pub into: Box<Node>,
    pub source: Box<Node>,
    pub body: Box<Node>,
}

/// A three-clause `for` loop. Any of the header clauses may be absent
/// (`for (;;) { body }` is legal); the body is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    pub initializer: Option<Box<Node>>,
    pub update: Option<Box<Node>>,
    pub test: Option<Box<Node>>,
    pub body: Box<Node>,
}

/// A function declaration in statement position. Wraps a
/// [`FunctionLiteral`](crate::FunctionLiteral) child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionStatement {
    pub function: Box<Node>,
}

/// An `if (test) consequent else alternate` statement, `alternate`
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Option<Box<Node>>,
}

/// A labelled statement: `label: statement`.
///
/// The label is plain text, not a child node; only the inner statement is
/// walked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledStatement {
    pub label: String,
    pub statement: Box<Node>,
}

/// The root of a parsed source file: its top-level statements in source
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

/// A `return` statement with an optional argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub argument: Option<Box<Node>>,
}

/// A `switch (discriminant) { cases... }` statement. The body is a
/// sequence of [`CaseStatement`] nodes in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Box<Node>,
    pub body: Vec<Node>,
}

/// A `throw` statement with an optional argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub argument: Option<Box<Node>>,
}

/// A `try { body } catch ... finally ...` statement. Both clauses are
/// optional; the catch clause, when present, is a [`CatchStatement`]
/// child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStatement {
    pub body: Box<Node>,
    pub catch: Option<Box<Node>>,
    pub finally: Option<Box<Node>>,
}

/// A `var` statement: its declarators
/// ([`VariableExpression`](crate::VariableExpression) nodes) in source
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableStatement {
    pub list: Vec<Node>,
}

/// A `while (test) { body }` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub test: Box<Node>,
    pub body: Box<Node>,
}

/// A `with (object) { body }` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStatement {
    pub object: Box<Node>,
    pub body: Box<Node>,
}
