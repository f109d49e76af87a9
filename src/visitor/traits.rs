// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for tree traversal.

use crate::nodes::{
    // Expressions
    ArrayLiteral, AssignExpression, BadExpression, BinaryExpression, BooleanLiteral,
    BracketExpression, CallExpression, ConditionalExpression, DotExpression, EmptyExpression,
    FunctionLiteral, Identifier, NewExpression, NullLiteral, NumberLiteral, ObjectLiteral,
    RegExpLiteral, SequenceExpression, StringLiteral, ThisExpression, UnaryExpression,
    VariableExpression,
    // Statements
    BlockStatement, BranchStatement, CaseStatement, CatchStatement, DebuggerStatement,
    DoWhileStatement, EmptyStatement, ExpressionStatement, ForInStatement, ForStatement,
    FunctionStatement, IfStatement, LabelledStatement, Program, ReturnStatement, SwitchStatement,
    ThrowStatement, TryStatement, VariableStatement, WhileStatement, WithStatement,
    // The sum type itself
    Node,
};

/// Result of entering a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisitResult {
    /// Descend into this node's children, then call the exit hook.
    #[default]
    Continue,

    /// Do not descend into this node's children.
    ///
    /// The exit hook is not called for this node either; siblings and
    /// ancestors continue normally.
    SkipChildren,

    /// Halt the entire walk.
    ///
    /// No further entry or exit hooks are called anywhere in the tree.
    Stop,
}

/// Macro to generate per-kind visitor hook pairs.
///
/// For every `name: Type` pair this generates a `visit_name` hook returning
/// [`VisitResult::Continue`] and a no-op `leave_name` hook. The default
/// [`Visitor::visit_node`] and [`Visitor::leave_node`] implementations
/// dispatch to these, so a visitor implements only the hooks it cares
/// about.
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Enter a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. Return a `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been walked. Not called when the entry hook declined descent."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Read-only visitor over a [`Node`] tree.
///
/// The walker calls [`visit_node`](Visitor::visit_node) once per node in
/// depth-first pre-order and, when that call returned
/// [`VisitResult::Continue`], calls [`leave_node`](Visitor::leave_node)
/// after the node's children have been walked. Exit calls therefore nest
/// stack-like: a node's exit follows the exits of all its visited
/// children. Children are walked in source evaluation order; the
/// per-variant order is fixed by the `walk_*` dispatch table.
///
/// Both generic hooks have default implementations that fan out to the
/// per-kind `visit_*`/`leave_*` hook pairs below, so most visitors
/// implement only the handful of hooks they care about. Override
/// `visit_node`/`leave_node` directly to intercept every node (for
/// recording, depth tracking, and the like); doing so replaces the
/// per-kind dispatch.
///
/// Traversal state that the original-visitor-per-subtree pattern would
/// carry in a fresh visitor instance lives in `&mut self` here: push in
/// the entry hook, pop in the exit hook.
///
/// # Example
///
/// ```
/// use eswalk::{walk, Identifier, Node, Program, VisitResult, Visitor};
///
/// #[derive(Default)]
/// struct NameCollector {
///     names: Vec<String>,
/// }
///
/// impl Visitor for NameCollector {
///     fn visit_identifier(&mut self, node: &Identifier) -> VisitResult {
///         self.names.push(node.name.clone());
///         VisitResult::Continue
///     }
/// }
///
/// let tree = Node::Program(Program { body: vec![] });
/// let mut collector = NameCollector::default();
/// walk(&mut collector, &tree);
/// assert!(collector.names.is_empty());
/// ```
pub trait Visitor {
    /// Enter any node. The default dispatches to the per-kind entry hook.
    fn visit_node(&mut self, node: &Node) -> VisitResult {
        match node {
            Node::ArrayLiteral(n) => self.visit_array_literal(n),
            Node::AssignExpression(n) => self.visit_assign_expression(n),
            Node::BadExpression(n) => self.visit_bad_expression(n),
            Node::BinaryExpression(n) => self.visit_binary_expression(n),
            Node::BooleanLiteral(n) => self.visit_boolean_literal(n),
            Node::BracketExpression(n) => self.visit_bracket_expression(n),
            Node::CallExpression(n) => self.visit_call_expression(n),
            Node::ConditionalExpression(n) => self.visit_conditional_expression(n),
            Node::DotExpression(n) => self.visit_dot_expression(n),
            Node::EmptyExpression(n) => self.visit_empty_expression(n),
            Node::FunctionLiteral(n) => self.visit_function_literal(n),
            Node::Identifier(n) => self.visit_identifier(n),
            Node::NewExpression(n) => self.visit_new_expression(n),
            Node::NullLiteral(n) => self.visit_null_literal(n),
            Node::NumberLiteral(n) => self.visit_number_literal(n),
            Node::ObjectLiteral(n) => self.visit_object_literal(n),
            Node::RegExpLiteral(n) => self.visit_regexp_literal(n),
            Node::SequenceExpression(n) => self.visit_sequence_expression(n),
            Node::StringLiteral(n) => self.visit_string_literal(n),
            Node::ThisExpression(n) => self.visit_this_expression(n),
            Node::UnaryExpression(n) => self.visit_unary_expression(n),
            Node::VariableExpression(n) => self.visit_variable_expression(n),
            Node::BlockStatement(n) => self.visit_block_statement(n),
            Node::BranchStatement(n) => self.visit_branch_statement(n),
            Node::CaseStatement(n) => self.visit_case_statement(n),
            Node::CatchStatement(n) => self.visit_catch_statement(n),
            Node::DebuggerStatement(n) => self.visit_debugger_statement(n),
            Node::DoWhileStatement(n) => self.visit_do_while_statement(n),
            Node::EmptyStatement(n) => self.visit_empty_statement(n),
            Node::ExpressionStatement(n) => self.visit_expression_statement(n),
            Node::ForInStatement(n) => self.visit_for_in_statement(n),
            Node::ForStatement(n) => self.visit_for_statement(n),
            Node::FunctionStatement(n) => self.visit_function_statement(n),
            Node::IfStatement(n) => self.visit_if_statement(n),
            Node::LabelledStatement(n) => self.visit_labelled_statement(n),
            Node::Program(n) => self.visit_program(n),
            Node::ReturnStatement(n) => self.visit_return_statement(n),
            Node::SwitchStatement(n) => self.visit_switch_statement(n),
            Node::ThrowStatement(n) => self.visit_throw_statement(n),
            Node::TryStatement(n) => self.visit_try_statement(n),
            Node::VariableStatement(n) => self.visit_variable_statement(n),
            Node::WhileStatement(n) => self.visit_while_statement(n),
            Node::WithStatement(n) => self.visit_with_statement(n),
        }
    }

    /// Leave any node. The default dispatches to the per-kind exit hook.
    fn leave_node(&mut self, node: &Node) {
        match node {
            Node::ArrayLiteral(n) => self.leave_array_literal(n),
            Node::AssignExpression(n) => self.leave_assign_expression(n),
            Node::BadExpression(n) => self.leave_bad_expression(n),
            Node::BinaryExpression(n) => self.leave_binary_expression(n),
            Node::BooleanLiteral(n) => self.leave_boolean_literal(n),
            Node::BracketExpression(n) => self.leave_bracket_expression(n),
            Node::CallExpression(n) => self.leave_call_expression(n),
            Node::ConditionalExpression(n) => self.leave_conditional_expression(n),
            Node::DotExpression(n) => self.leave_dot_expression(n),
            Node::EmptyExpression(n) => self.leave_empty_expression(n),
            Node::FunctionLiteral(n) => self.leave_function_literal(n),
            Node::Identifier(n) => self.leave_identifier(n),
            Node::NewExpression(n) => self.leave_new_expression(n),
            Node::NullLiteral(n) => self.leave_null_literal(n),
            Node::NumberLiteral(n) => self.leave_number_literal(n),
            Node::ObjectLiteral(n) => self.leave_object_literal(n),
            Node::RegExpLiteral(n) => self.leave_regexp_literal(n),
            Node::SequenceExpression(n) => self.leave_sequence_expression(n),
            Node::StringLiteral(n) => self.leave_string_literal(n),
            Node::ThisExpression(n) => self.leave_this_expression(n),
            Node::UnaryExpression(n) => self.leave_unary_expression(n),
            Node::VariableExpression(n) => self.leave_variable_expression(n),
            Node::BlockStatement(n) => self.leave_block_statement(n),
            Node::BranchStatement(n) => self.leave_branch_statement(n),
            Node::CaseStatement(n) => self.leave_case_statement(n),
            Node::CatchStatement(n) => self.leave_catch_statement(n),
            Node::DebuggerStatement(n) => self.leave_debugger_statement(n),
            Node::DoWhileStatement(n) => self.leave_do_while_statement(n),
            Node::EmptyStatement(n) => self.leave_empty_statement(n),
            Node::ExpressionStatement(n) => self.leave_expression_statement(n),
            Node::ForInStatement(n) => self.leave_for_in_statement(n),
            Node::ForStatement(n) => self.leave_for_statement(n),
            Node::FunctionStatement(n) => self.leave_function_statement(n),
            Node::IfStatement(n) => self.leave_if_statement(n),
            Node::LabelledStatement(n) => self.leave_labelled_statement(n),
            Node::Program(n) => self.leave_program(n),
            Node::ReturnStatement(n) => self.leave_return_statement(n),
            Node::SwitchStatement(n) => self.leave_switch_statement(n),
            Node::ThrowStatement(n) => self.leave_throw_statement(n),
            Node::TryStatement(n) => self.leave_try_statement(n),
            Node::VariableStatement(n) => self.leave_variable_statement(n),
            Node::WhileStatement(n) => self.leave_while_statement(n),
            Node::WithStatement(n) => self.leave_with_statement(n),
        }
    }

    // Expressions
    visitor_methods! {
        array_literal: ArrayLiteral,
        assign_expression: AssignExpression,
        bad_expression: BadExpression,
        binary_expression: BinaryExpression,
        boolean_literal: BooleanLiteral,
        bracket_expression: BracketExpression,
        call_expression: CallExpression,
        conditional_expression: ConditionalExpression,
        dot_expression: DotExpression,
        empty_expression: EmptyExpression,
        function_literal: FunctionLiteral,
        identifier: Identifier,
        new_expression: NewExpression,
        null_literal: NullLiteral,
        number_literal: NumberLiteral,
        object_literal: ObjectLiteral,
        regexp_literal: RegExpLiteral,
        sequence_expression: SequenceExpression,
        string_literal: StringLiteral,
        this_expression: ThisExpression,
        unary_expression: UnaryExpression,
        variable_expression: VariableExpression,
    }

    // Statements
    visitor_methods! {
        block_statement: BlockStatement,
        branch_statement: BranchStatement,
        case_statement: CaseStatement,
        catch_statement: CatchStatement,
        debugger_statement: DebuggerStatement,
        do_while_statement: DoWhileStatement,
        empty_statement: EmptyStatement,
        expression_statement: ExpressionStatement,
        for_in_statement: ForInStatement,
        for_statement: ForStatement,
        function_statement: FunctionStatement,
        if_statement: IfStatement,
        labelled_statement: LabelledStatement,
        program: Program,
        return_statement: ReturnStatement,
        switch_statement: SwitchStatement,
        throw_statement: ThrowStatement,
        try_statement: TryStatement,
        variable_statement: VariableStatement,
        while_statement: WhileStatement,
        with_statement: WithStatement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_result_default() {
        assert_eq!(VisitResult::default(), VisitResult::Continue);
    }

    #[test]
    fn visitor_trait_compiles_with_no_overrides() {
        struct EmptyVisitor;

        impl Visitor for EmptyVisitor {}

        let mut v = EmptyVisitor;
        let node = Node::EmptyStatement(EmptyStatement);
        assert_eq!(v.visit_node(&node), VisitResult::Continue);
        v.leave_node(&node);
    }

    #[test]
    fn generic_entry_hook_dispatches_to_kind_hook() {
        #[derive(Default)]
        struct BoolSpotter {
            seen: bool,
        }

        impl Visitor for BoolSpotter {
            fn visit_boolean_literal(&mut self, node: &BooleanLiteral) -> VisitResult {
                self.seen = node.value;
                VisitResult::Continue
            }
        }

        let mut v = BoolSpotter::default();
        let node = Node::BooleanLiteral(BooleanLiteral { value: true });
        assert_eq!(v.visit_node(&node), VisitResult::Continue);
        assert!(v.seen);
    }
}
