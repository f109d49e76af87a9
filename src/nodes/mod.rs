// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The node model: one sum type over every grammar production.
//!
//! [`Node`] is the closed set of tree variants the walker dispatches on.
//! Each variant wraps a payload struct defined in [`expression`] or
//! [`statement`]; operator tags and other non-node payloads live in [`op`].
//!
//! Trees are produced by an external parser (or deserialized from JSON),
//! are immutable, acyclic, and finite, and are only ever borrowed by the
//! walker. Absence of an optional child is modeled as `None`; there is no
//! second "present but valueless" representation to guard against.

use serde::{Deserialize, Serialize};

pub mod expression;
pub mod op;
pub mod statement;

pub use expression::{
    ArrayLiteral, AssignExpression, BadExpression, BinaryExpression, BooleanLiteral,
    BracketExpression, CallExpression, ConditionalExpression, DotExpression, EmptyExpression,
    FunctionLiteral, Identifier, NewExpression, NullLiteral, NumberLiteral, ObjectLiteral,
    Property, RegExpLiteral, SequenceExpression, StringLiteral, ThisExpression, UnaryExpression,
    VariableExpression,
};
pub use op::{AssignOp, BinaryOp, BranchKind, PropertyKind, UnaryOp};
pub use statement::{
    BlockStatement, BranchStatement, CaseStatement, CatchStatement, DebuggerStatement,
    DoWhileStatement, EmptyStatement, ExpressionStatement, ForInStatement, ForStatement,
    FunctionStatement, IfStatement, LabelledStatement, Program, ReturnStatement, SwitchStatement,
    ThrowStatement, TryStatement, VariableStatement, WhileStatement, WithStatement,
};

/// Any element of the tree: one variant per grammar production.
///
/// The walker's dispatch table in [`visitor`](crate::visitor) is an
/// exhaustive match over this enum, so a variant added here without a
/// table entry is a compile error rather than a silently dropped subtree.
/// The enum is `#[non_exhaustive]` so downstream matches stay honest across
/// tree versions.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // Expressions
    ArrayLiteral(ArrayLiteral),
    AssignExpression(AssignExpression),
    BadExpression(BadExpression),
    BinaryExpression(BinaryExpression),
    BooleanLiteral(BooleanLiteral),
    BracketExpression(BracketExpression),
    CallExpression(CallExpression),
    ConditionalExpression(ConditionalExpression),
    DotExpression(DotExpression),
    EmptyExpression(EmptyExpression),
    FunctionLiteral(FunctionLiteral),
    Identifier(Identifier),
    NewExpression(NewExpression),
    NullLiteral(NullLiteral),
    NumberLiteral(NumberLiteral),
    ObjectLiteral(ObjectLiteral),
    RegExpLiteral(RegExpLiteral),
    SequenceExpression(SequenceExpression),
    StringLiteral(StringLiteral),
    ThisExpression(ThisExpression),
    UnaryExpression(UnaryExpression),
    VariableExpression(VariableExpression),
    // Statements
    BlockStatement(BlockStatement),
    BranchStatement(BranchStatement),
    CaseStatement(CaseStatement),
    CatchStatement(CatchStatement),
    DebuggerStatement(DebuggerStatement),
    DoWhileStatement(DoWhileStatement),
    EmptyStatement(EmptyStatement),
    ExpressionStatement(ExpressionStatement),
    ForInStatement(ForInStatement),
    ForStatement(ForStatement),
    FunctionStatement(FunctionStatement),
    IfStatement(IfStatement),
    LabelledStatement(LabelledStatement),
    Program(Program),
    ReturnStatement(ReturnStatement),
    SwitchStatement(SwitchStatement),
    ThrowStatement(ThrowStatement),
    TryStatement(TryStatement),
    VariableStatement(VariableStatement),
    WhileStatement(WhileStatement),
    WithStatement(WithStatement),
}

impl Node {
    /// The fieldless tag of this node, for recording and reporting.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::ArrayLiteral(_) => NodeKind::ArrayLiteral,
            Node::AssignExpression(_) => NodeKind::AssignExpression,
            Node::BadExpression(_) => NodeKind::BadExpression,
            Node::BinaryExpression(_) => NodeKind::BinaryExpression,
            Node::BooleanLiteral(_) => NodeKind::BooleanLiteral,
            Node::BracketExpression(_) => NodeKind::BracketExpression,
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Node::DotExpression(_) => NodeKind::DotExpression,
            Node::EmptyExpression(_) => NodeKind::EmptyExpression,
            Node::FunctionLiteral(_) => NodeKind::FunctionLiteral,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::NewExpression(_) => NodeKind::NewExpression,
            Node::NullLiteral(_) => NodeKind::NullLiteral,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::ObjectLiteral(_) => NodeKind::ObjectLiteral,
            Node::RegExpLiteral(_) => NodeKind::RegExpLiteral,
            Node::SequenceExpression(_) => NodeKind::SequenceExpression,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::ThisExpression(_) => NodeKind::ThisExpression,
            Node::UnaryExpression(_) => NodeKind::UnaryExpression,
            Node::VariableExpression(_) => NodeKind::VariableExpression,
            Node::BlockStatement(_) => NodeKind::BlockStatement,
            Node::BranchStatement(_) => NodeKind::BranchStatement,
            Node::CaseStatement(_) => NodeKind::CaseStatement,
            Node::CatchStatement(_) => NodeKind::CatchStatement,
            Node::DebuggerStatement(_) => NodeKind::DebuggerStatement,
            Node::DoWhileStatement(_) => NodeKind::DoWhileStatement,
            Node::EmptyStatement(_) => NodeKind::EmptyStatement,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::ForInStatement(_) => NodeKind::ForInStatement,
            Node::ForStatement(_) => NodeKind::ForStatement,
            Node::FunctionStatement(_) => NodeKind::FunctionStatement,
            Node::IfStatement(_) => NodeKind::IfStatement,
            Node::LabelledStatement(_) => NodeKind::LabelledStatement,
            Node::Program(_) => NodeKind::Program,
            Node::ReturnStatement(_) => NodeKind::ReturnStatement,
            Node::SwitchStatement(_) => NodeKind::SwitchStatement,
            Node::ThrowStatement(_) => NodeKind::ThrowStatement,
            Node::TryStatement(_) => NodeKind::TryStatement,
            Node::VariableStatement(_) => NodeKind::VariableStatement,
            Node::WhileStatement(_) => NodeKind::WhileStatement,
            Node::WithStatement(_) => NodeKind::WithStatement,
        }
    }
}

/// The tag of a [`Node`] without its payload.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    ArrayLiteral,
    AssignExpression,
    BadExpression,
    BinaryExpression,
    BooleanLiteral,
    BracketExpression,
    CallExpression,
    ConditionalExpression,
    DotExpression,
    EmptyExpression,
    FunctionLiteral,
    Identifier,
    NewExpression,
    NullLiteral,
    NumberLiteral,
    ObjectLiteral,
    RegExpLiteral,
    SequenceExpression,
    StringLiteral,
    ThisExpression,
    UnaryExpression,
    VariableExpression,
    BlockStatement,
    BranchStatement,
    CaseStatement,
    CatchStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExpressionStatement,
    ForInStatement,
    ForStatement,
    FunctionStatement,
    IfStatement,
    LabelledStatement,
    Program,
    ReturnStatement,
    SwitchStatement,
    ThrowStatement,
    TryStatement,
    VariableStatement,
    WhileStatement,
    WithStatement,
}

impl NodeKind {
    /// The variant name as it appears in source and serialized trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ArrayLiteral => "ArrayLiteral",
            NodeKind::AssignExpression => "AssignExpression",
            NodeKind::BadExpression => "BadExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::BracketExpression => "BracketExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::DotExpression => "DotExpression",
            NodeKind::EmptyExpression => "EmptyExpression",
            NodeKind::FunctionLiteral => "FunctionLiteral",
            NodeKind::Identifier => "Identifier",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::ObjectLiteral => "ObjectLiteral",
            NodeKind::RegExpLiteral => "RegExpLiteral",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::VariableExpression => "VariableExpression",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::BranchStatement => "BranchStatement",
            NodeKind::CaseStatement => "CaseStatement",
            NodeKind::CatchStatement => "CatchStatement",
            NodeKind::DebuggerStatement => "DebuggerStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::ForInStatement => "ForInStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::FunctionStatement => "FunctionStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::LabelledStatement => "LabelledStatement",
            NodeKind::Program => "Program",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::VariableStatement => "VariableStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::WithStatement => "WithStatement",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let node = Node::Identifier(Identifier {
            name: "x".to_string(),
        });
        assert_eq!(node.kind(), NodeKind::Identifier);
        assert_eq!(node.kind().to_string(), "Identifier");
    }

    #[test]
    fn kind_display_matches_serialized_tag() {
        let node = Node::ThisExpression(ThisExpression);
        let json = serde_json::to_value(&node).expect("serialize error");
        let tag = json
            .as_object()
            .and_then(|o| o.keys().next())
            .expect("externally tagged");
        assert_eq!(tag, node.kind().as_str());
    }

    #[test]
    fn optional_children_serialize_as_null() {
        let node = Node::ReturnStatement(ReturnStatement { argument: None });
        let json = serde_json::to_string(&node).expect("serialize error");
        assert_eq!(json, r#"{"ReturnStatement":{"argument":null}}"#);
    }
}
