// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal.
//!
//! The [`Visitor`] trait is the contract a traversal client satisfies;
//! [`walk`] drives it over a [`Node`](crate::Node) tree.
//!
//! # Traversal Order
//!
//! - Entry hooks run in **depth-first pre-order**.
//! - Exit hooks run in **post-order**, one per node whose entry hook
//!   returned [`VisitResult::Continue`].
//! - Children are visited in source evaluation order (left to right,
//!   outer to inner), as fixed per variant by the `walk_*` functions.
//!
//! # Control Flow
//!
//! An entry hook returns a [`VisitResult`]:
//!
//! - `Continue` descends into the node's children;
//! - `SkipChildren` prunes the subtree (its exit hook is skipped too);
//! - `Stop` ends the walk immediately.
//!
//! # Example
//!
//! ```
//! use eswalk::{walk, FunctionLiteral, Identifier, Node, VisitResult, Visitor};
//!
//! /// Collects identifier names, without descending into nested functions.
//! #[derive(Default)]
//! struct TopLevelNames {
//!     names: Vec<String>,
//! }
//!
//! impl Visitor for TopLevelNames {
//!     fn visit_identifier(&mut self, node: &Identifier) -> VisitResult {
//!         self.names.push(node.name.clone());
//!         VisitResult::Continue
//!     }
//!
//!     fn visit_function_literal(&mut self, _node: &FunctionLiteral) -> VisitResult {
//!         VisitResult::SkipChildren
//!     }
//! }
//!
//! let tree = Node::Identifier(Identifier { name: "x".to_string() });
//! let mut names = TopLevelNames::default();
//! walk(&mut names, &tree);
//! assert_eq!(names.names, vec!["x"]);
//! ```

mod dispatch;
mod traits;

pub use dispatch::{
    walk, walk_array_literal, walk_assign_expression, walk_bad_expression,
    walk_binary_expression, walk_block_statement, walk_boolean_literal, walk_bracket_expression,
    walk_branch_statement, walk_call_expression, walk_case_statement, walk_catch_statement,
    walk_conditional_expression, walk_debugger_statement, walk_do_while_statement,
    walk_dot_expression, walk_empty_expression, walk_empty_statement, walk_expression_statement,
    walk_for_in_statement, walk_for_statement, walk_function_literal, walk_function_statement,
    walk_identifier, walk_if_statement, walk_labelled_statement, walk_list, walk_new_expression,
    walk_node, walk_null_literal, walk_number_literal, walk_object_literal, walk_opt,
    walk_program, walk_regexp_literal, walk_return_statement, walk_sequence_expression,
    walk_string_literal, walk_switch_statement, walk_this_expression, walk_throw_statement,
    walk_try_statement, walk_unary_expression, walk_variable_expression, walk_variable_statement,
    walk_while_statement, walk_with_statement,
};
pub use traits::{VisitResult, Visitor};
