// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Operator tags and other non-node payload enums.
//!
//! None of these are tree nodes: they carry no children and are never
//! dispatched on by the walker. They exist so hand-built and deserialized
//! trees keep enough of the source shape to be useful to visitors.

use serde::{Deserialize, Serialize};

/// The operator of a [`BinaryExpression`](crate::BinaryExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    In,
    InstanceOf,
}

/// The operator of an [`AssignExpression`](crate::AssignExpression).
///
/// `Assign` is the plain `=` form; the rest are the compound
/// read-modify-write forms (`+=`, `<<=`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    UnsignedShiftRightAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
}

/// The operator of a [`UnaryExpression`](crate::UnaryExpression).
///
/// `Increment` and `Decrement` cover both the prefix and postfix forms;
/// [`UnaryExpression::postfix`](crate::UnaryExpression) tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
    Increment,
    Decrement,
}

/// Whether a [`BranchStatement`](crate::BranchStatement) is a `break` or a
/// `continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchKind {
    Break,
    Continue,
}

/// How a property of an [`ObjectLiteral`](crate::ObjectLiteral) was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// A plain `key: value` property.
    Value,
    /// A `get key() { ... }` accessor.
    Get,
    /// A `set key(value) { ... }` accessor.
    Set,
}
