// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The walk algorithm and the per-variant dispatch table.
//!
//! [`walk`] is the traversal entry point. For every variant there is a
//! `walk_*` function that visits the variant's children in source
//! evaluation order; together these functions are the hand-maintained
//! mapping from grammar production to traversal order. The match in
//! [`walk_node`] is exhaustive over [`Node`], so adding a variant without
//! a table entry fails to compile instead of silently dropping subtrees
//! from every downstream analysis.
//!
//! The `walk_*` functions are public so a visitor that intercepts a node
//! (returning [`VisitResult::SkipChildren`] from its entry hook) can still
//! re-drive that node's children manually, in the same order the walker
//! would have used.
//!
//! Traversal is synchronous and recursive; depth is bounded only by the
//! nesting depth of the input program.

use std::ops::ControlFlow;

use super::traits::{VisitResult, Visitor};
use crate::nodes::{
    ArrayLiteral, AssignExpression, BadExpression, BinaryExpression, BlockStatement,
    BooleanLiteral, BracketExpression, BranchStatement, CallExpression, CaseStatement,
    CatchStatement, ConditionalExpression, DebuggerStatement, DotExpression, DoWhileStatement,
    EmptyExpression, EmptyStatement, ExpressionStatement, ForInStatement, ForStatement,
    FunctionLiteral, FunctionStatement, Identifier, IfStatement, LabelledStatement, NewExpression,
    Node, NullLiteral, NumberLiteral, ObjectLiteral, Program, RegExpLiteral, ReturnStatement,
    SequenceExpression, StringLiteral, SwitchStatement, ThisExpression, ThrowStatement,
    TryStatement, UnaryExpression, VariableExpression, VariableStatement, WhileStatement,
    WithStatement,
};

/// Walks a tree in depth-first order, driving `visitor`.
///
/// For each node: the entry hook runs first; on
/// [`VisitResult::Continue`] the node's children are walked in
/// source evaluation order and the exit hook runs afterwards; on
/// [`VisitResult::SkipChildren`] the subtree is pruned (no children, no
/// exit hook) and traversal resumes with the node's siblings; on
/// [`VisitResult::Stop`] the walk ends immediately.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    let _ = walk_node(visitor, node);
}

/// Walks one node, dispatching on its variant.
///
/// Returns [`ControlFlow::Break`] when the visitor requested a stop, so
/// callers driving several roots can propagate it.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) -> ControlFlow<()> {
    match visitor.visit_node(node) {
        VisitResult::SkipChildren => return ControlFlow::Continue(()),
        VisitResult::Stop => return ControlFlow::Break(()),
        VisitResult::Continue => {}
    }
    match node {
        Node::ArrayLiteral(n) => walk_array_literal(visitor, n)?,
        Node::AssignExpression(n) => walk_assign_expression(visitor, n)?,
        Node::BadExpression(n) => walk_bad_expression(visitor, n)?,
        Node::BinaryExpression(n) => walk_binary_expression(visitor, n)?,
        Node::BooleanLiteral(n) => walk_boolean_literal(visitor, n)?,
        Node::BracketExpression(n) => walk_bracket_expression(visitor, n)?,
        Node::CallExpression(n) => walk_call_expression(visitor, n)?,
        Node::ConditionalExpression(n) => walk_conditional_expression(visitor, n)?,
        Node::DotExpression(n) => walk_dot_expression(visitor, n)?,
        Node::EmptyExpression(n) => walk_empty_expression(visitor, n)?,
        Node::FunctionLiteral(n) => walk_function_literal(visitor, n)?,
        Node::Identifier(n) => walk_identifier(visitor, n)?,
        Node::NewExpression(n) => walk_new_expression(visitor, n)?,
        Node::NullLiteral(n) => walk_null_literal(visitor, n)?,
        Node::NumberLiteral(n) => walk_number_literal(visitor, n)?,
        Node::ObjectLiteral(n) => walk_object_literal(visitor, n)?,
        Node::RegExpLiteral(n) => walk_regexp_literal(visitor, n)?,
        Node::SequenceExpression(n) => walk_sequence_expression(visitor, n)?,
        Node::StringLiteral(n) => walk_string_literal(visitor, n)?,
        Node::ThisExpression(n) => walk_this_expression(visitor, n)?,
        Node::UnaryExpression(n) => walk_unary_expression(visitor, n)?,
        Node::VariableExpression(n) => walk_variable_expression(visitor, n)?,
        Node::BlockStatement(n) => walk_block_statement(visitor, n)?,
        Node::BranchStatement(n) => walk_branch_statement(visitor, n)?,
        Node::CaseStatement(n) => walk_case_statement(visitor, n)?,
        Node::CatchStatement(n) => walk_catch_statement(visitor, n)?,
        Node::DebuggerStatement(n) => walk_debugger_statement(visitor, n)?,
        Node::DoWhileStatement(n) => walk_do_while_statement(visitor, n)?,
        Node::EmptyStatement(n) => walk_empty_statement(visitor, n)?,
        Node::ExpressionStatement(n) => walk_expression_statement(visitor, n)?,
        Node::ForInStatement(n) => walk_for_in_statement(visitor, n)?,
        Node::ForStatement(n) => walk_for_statement(visitor, n)?,
        Node::FunctionStatement(n) => walk_function_statement(visitor, n)?,
        Node::IfStatement(n) => walk_if_statement(visitor, n)?,
        Node::LabelledStatement(n) => walk_labelled_statement(visitor, n)?,
        Node::Program(n) => walk_program(visitor, n)?,
        Node::ReturnStatement(n) => walk_return_statement(visitor, n)?,
        Node::SwitchStatement(n) => walk_switch_statement(visitor, n)?,
        Node::ThrowStatement(n) => walk_throw_statement(visitor, n)?,
        Node::TryStatement(n) => walk_try_statement(visitor, n)?,
        Node::VariableStatement(n) => walk_variable_statement(visitor, n)?,
        Node::WhileStatement(n) => walk_while_statement(visitor, n)?,
        Node::WithStatement(n) => walk_with_statement(visitor, n)?,
    }
    visitor.leave_node(node);
    ControlFlow::Continue(())
}

/// Walks an optional child slot. An absent slot is a defined no-op at any
/// depth, never an error.
pub fn walk_opt<V: Visitor + ?Sized>(visitor: &mut V, node: Option<&Node>) -> ControlFlow<()> {
    match node {
        Some(node) => walk_node(visitor, node),
        None => ControlFlow::Continue(()),
    }
}

/// Walks a sequence of children in stored order.
pub fn walk_list<V: Visitor + ?Sized>(visitor: &mut V, nodes: &[Node]) -> ControlFlow<()> {
    for node in nodes {
        walk_node(visitor, node)?;
    }
    ControlFlow::Continue(())
}

// ============================================================================
// Per-variant children tables: expressions
// ============================================================================

/// Element expressions, in stored order.
pub fn walk_array_literal<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ArrayLiteral,
) -> ControlFlow<()> {
    walk_list(visitor, &node.elements)
}

/// Left, then right.
pub fn walk_assign_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &AssignExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.left)?;
    walk_node(visitor, &node.right)
}

/// No children.
pub fn walk_bad_expression<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &BadExpression,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Left, then right.
pub fn walk_binary_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BinaryExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.left)?;
    walk_node(visitor, &node.right)
}

/// No children.
pub fn walk_boolean_literal<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &BooleanLiteral,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Object, then member key.
pub fn walk_bracket_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BracketExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.left)?;
    walk_node(visitor, &node.member)
}

/// Callee, then arguments in stored order.
pub fn walk_call_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &CallExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.callee)?;
    walk_list(visitor, &node.arguments)
}

/// Test, consequent, alternate.
pub fn walk_conditional_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ConditionalExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.test)?;
    walk_node(visitor, &node.consequent)?;
    walk_node(visitor, &node.alternate)
}

/// Object only; the member name is not a node.
pub fn walk_dot_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &DotExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.left)
}

/// No children.
pub fn walk_empty_expression<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &EmptyExpression,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Optional name, parameters in stored order, body.
pub fn walk_function_literal<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &FunctionLiteral,
) -> ControlFlow<()> {
    walk_opt(visitor, node.name.as_deref())?;
    walk_list(visitor, &node.parameters)?;
    walk_node(visitor, &node.body)
}

/// No children.
pub fn walk_identifier<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &Identifier,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Callee, then arguments in stored order.
pub fn walk_new_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &NewExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.callee)?;
    walk_list(visitor, &node.arguments)
}

/// No children.
pub fn walk_null_literal<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &NullLiteral,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// No children.
pub fn walk_number_literal<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &NumberLiteral,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Property values in declaration order; keys are not nodes.
pub fn walk_object_literal<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ObjectLiteral,
) -> ControlFlow<()> {
    for property in &node.properties {
        walk_node(visitor, &property.value)?;
    }
    ControlFlow::Continue(())
}

/// No children.
pub fn walk_regexp_literal<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &RegExpLiteral,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Expressions in stored order.
pub fn walk_sequence_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &SequenceExpression,
) -> ControlFlow<()> {
    walk_list(visitor, &node.sequence)
}

/// No children.
pub fn walk_string_literal<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &StringLiteral,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// No children.
pub fn walk_this_expression<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &ThisExpression,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Operand only.
pub fn walk_unary_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &UnaryExpression,
) -> ControlFlow<()> {
    walk_node(visitor, &node.operand)
}

/// Optional initializer; the declared name is not a node.
pub fn walk_variable_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &VariableExpression,
) -> ControlFlow<()> {
    walk_opt(visitor, node.initializer.as_deref())
}

// ============================================================================
// Per-variant children tables: statements
// ============================================================================

/// Statements in stored order.
pub fn walk_block_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BlockStatement,
) -> ControlFlow<()> {
    walk_list(visitor, &node.list)
}

/// Optional label.
pub fn walk_branch_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &BranchStatement,
) -> ControlFlow<()> {
    walk_opt(visitor, node.label.as_deref())
}

/// Optional test (absent on the default case), then the consequent
/// statements in stored order.
pub fn walk_case_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &CaseStatement,
) -> ControlFlow<()> {
    walk_opt(visitor, node.test.as_deref())?;
    walk_list(visitor, &node.consequent)
}

/// Parameter, then body.
pub fn walk_catch_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &CatchStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.parameter)?;
    walk_node(visitor, &node.body)
}

/// No children.
pub fn walk_debugger_statement<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &DebuggerStatement,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// Test, then body.
pub fn walk_do_while_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &DoWhileStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.test)?;
    walk_node(visitor, &node.body)
}

/// No children.
pub fn walk_empty_statement<V: Visitor + ?Sized>(
    _visitor: &mut V,
    _node: &EmptyStatement,
) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// The wrapped expression.
pub fn walk_expression_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExpressionStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.expression)
}

/// Into-target, source, body.
pub fn walk_for_in_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ForInStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.into)?;
    walk_node(visitor, &node.source)?;
    walk_node(visitor, &node.body)
}

/// Optional initializer, optional update, optional test, then body.
pub fn walk_for_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ForStatement,
) -> ControlFlow<()> {
    walk_opt(visitor, node.initializer.as_deref())?;
    walk_opt(visitor, node.update.as_deref())?;
    walk_opt(visitor, node.test.as_deref())?;
    walk_node(visitor, &node.body)
}

/// The wrapped function literal.
pub fn walk_function_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &FunctionStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.function)
}

/// Test, consequent, optional alternate.
pub fn walk_if_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &IfStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.test)?;
    walk_node(visitor, &node.consequent)?;
    walk_opt(visitor, node.alternate.as_deref())
}

/// The inner statement only; the label is not a node.
pub fn walk_labelled_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &LabelledStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.statement)
}

/// Top-level statements in source order.
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, node: &Program) -> ControlFlow<()> {
    walk_list(visitor, &node.body)
}

/// Optional argument.
pub fn walk_return_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ReturnStatement,
) -> ControlFlow<()> {
    walk_opt(visitor, node.argument.as_deref())
}

/// Discriminant, then the case arms in source order.
pub fn walk_switch_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &SwitchStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.discriminant)?;
    walk_list(visitor, &node.body)
}

/// Optional argument.
pub fn walk_throw_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ThrowStatement,
) -> ControlFlow<()> {
    walk_opt(visitor, node.argument.as_deref())
}

/// Body, optional catch clause, optional finally block.
pub fn walk_try_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &TryStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.body)?;
    walk_opt(visitor, node.catch.as_deref())?;
    walk_opt(visitor, node.finally.as_deref())
}

/// Declarators in source order.
pub fn walk_variable_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &VariableStatement,
) -> ControlFlow<()> {
    walk_list(visitor, &node.list)
}

/// Test, then body.
pub fn walk_while_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &WhileStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.test)?;
    walk_node(visitor, &node.body)
}

/// Object expression, then body.
pub fn walk_with_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &WithStatement,
) -> ControlFlow<()> {
    walk_node(visitor, &node.object)?;
    walk_node(visitor, &node.body)
}
